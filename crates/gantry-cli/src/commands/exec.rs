//! Command handler for `gantry exec`.
//!
//! Spawns an arbitrary command with the omnibus bin directories prepended to
//! the child's PATH, so the kit's tools resolve first even from a shell whose
//! PATH is not set up. Outside an omnibus install the environment is passed
//! through untouched.

use colored::Colorize;
use std::process::Command as ProcessCommand;

use crate::env::{Environment, ProcessEnvironment, PATH_LIST_SEPARATOR};
use crate::omnibus::OmnibusLayout;

pub struct ExecCommand;

impl gantry_registry::Command for ExecCommand {
    fn run(&mut self, args: &[String]) -> i32 {
        execute(args, &ProcessEnvironment)
    }
}

pub fn execute(args: &[String], env: &dyn Environment) -> i32 {
    let Some((program, rest)) = args.split_first() else {
        eprintln!("{} Usage: gantry exec <COMMAND> [ARGS...]", "✗".red().bold());
        return 1;
    };

    let mut child = ProcessCommand::new(program);
    child.args(rest);
    if let Some(path) = omnibus_search_path(env) {
        child.env("PATH", path);
    }

    match child.status() {
        // A None code means the child died to a signal; report generic failure.
        Ok(status) => status.code().unwrap_or(1),
        Err(e) => {
            eprintln!("{} Failed to execute {program}: {e}", "✗".red().bold());
            1
        }
    }
}

/// PATH with the omnibus bin directories prepended, or `None` outside an
/// omnibus install.
fn omnibus_search_path(env: &dyn Environment) -> Option<String> {
    let layout = OmnibusLayout::detect(env)?;
    let mut entries = vec![
        layout.bin_dir.display().to_string(),
        layout.embedded_bin_dir.display().to_string(),
    ];
    if let Some(current) = env.var("PATH").filter(|p| !p.is_empty()) {
        entries.push(current);
    }
    Some(entries.join(&PATH_LIST_SEPARATOR.to_string()))
}
