//! Command handler for `gantry env`.

use colored::Colorize;

use crate::env::{Environment, ProcessEnvironment, PATH_LIST_SEPARATOR};
use crate::omnibus::OmnibusLayout;

pub struct EnvCommand;

impl gantry_registry::Command for EnvCommand {
    fn run(&mut self, _args: &[String]) -> i32 {
        execute(&ProcessEnvironment)
    }
}

pub fn execute(env: &dyn Environment) -> i32 {
    print!("{}", report(env));
    0
}

/// Builds the full environment report: kit version, omnibus layout and build
/// metadata when installed, and the PATH entries in resolution order.
fn report(env: &dyn Environment) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Gantry Development Kit".bold()));
    out.push_str(&format!("  Version: {}\n", env!("CARGO_PKG_VERSION")));

    match OmnibusLayout::detect(env) {
        Some(layout) => {
            out.push_str(&format!("\n{}\n", "Omnibus Install".bold()));
            out.push_str(&format!("  Root:         {}\n", layout.root.display()));
            out.push_str(&format!("  Bin:          {}\n", layout.bin_dir.display()));
            out.push_str(&format!(
                "  Embedded Bin: {}\n",
                layout.embedded_bin_dir.display()
            ));
            if let Some(manifest) = layout.version_manifest() {
                out.push_str(&format!("  Build:        {}\n", manifest.build_version));
                if let Some(revision) = manifest.build_git_revision {
                    out.push_str(&format!("  Revision:     {revision}\n"));
                }
            }
        }
        None => {
            out.push_str(&format!(
                "\n{} not an omnibus install\n",
                "!".yellow().bold()
            ));
        }
    }

    out.push_str(&format!("\n{}\n", "PATH".bold()));
    for entry in env.var("PATH").unwrap_or_default().split(PATH_LIST_SEPARATOR) {
        if !entry.is_empty() {
            out.push_str(&format!("  {entry}\n"));
        }
    }
    out
}
