//! Gantry CLI binary entrypoint.

mod commands;
mod dispatcher;
mod env;
mod omnibus;
mod sanity;

use std::io;

use dispatcher::Dispatcher;
use env::ProcessEnvironment;

const PROG: &str = "gantry";
const PRODUCT: &str = "Gantry Development Kit";

/// Routes process arguments through the dispatcher and exits with its code.
fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let registry = commands::default_registry();
    let dispatcher = Dispatcher::new(&registry, PROG, PRODUCT, env!("CARGO_PKG_VERSION"));
    let code = dispatcher.run(
        &argv,
        &ProcessEnvironment,
        &mut io::stdout(),
        &mut io::stderr(),
    );
    std::process::exit(code);
}
