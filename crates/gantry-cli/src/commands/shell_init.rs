//! Command handler for `gantry shell-init`.
//!
//! Emits an eval-able script that prepends the omnibus bin directories to
//! PATH, outer bin first. Output must stay plain text: shells evaluate it.

use colored::Colorize;

use crate::env::{Environment, ProcessEnvironment, PATH_LIST_SEPARATOR};
use crate::omnibus::OmnibusLayout;

pub struct ShellInitCommand;

impl gantry_registry::Command for ShellInitCommand {
    fn run(&mut self, args: &[String]) -> i32 {
        execute(args, &ProcessEnvironment)
    }
}

pub fn execute(args: &[String], env: &dyn Environment) -> i32 {
    let Some(shell) = args.first() else {
        eprintln!("{} Usage: gantry shell-init <SHELL_NAME>", "✗".red().bold());
        return 1;
    };

    let Some(layout) = OmnibusLayout::detect(env) else {
        eprintln!(
            "{} Gantry is not running from an omnibus install; there is nothing to initialize.",
            "✗".red().bold()
        );
        return 1;
    };

    match render_script(shell, &layout) {
        Some(script) => {
            print!("{script}");
            0
        }
        None => {
            eprintln!("{} Unknown shell: {shell}", "✗".red().bold());
            1
        }
    }
}

/// Renders the PATH setup for one shell family, or `None` for an unsupported
/// shell.
fn render_script(shell: &str, layout: &OmnibusLayout) -> Option<String> {
    let bin = layout.bin_dir.display();
    let embedded_bin = layout.embedded_bin_dir.display();
    match shell {
        "sh" | "bash" | "zsh" | "dash" => Some(format!(
            "export PATH=\"{bin}{sep}{embedded_bin}{sep}$PATH\"\n",
            sep = PATH_LIST_SEPARATOR,
        )),
        "fish" => Some(format!(
            "set -gx PATH \"{bin}\" \"{embedded_bin}\" $PATH\n"
        )),
        "powershell" | "pwsh" => Some(format!(
            "$env:PATH = \"{bin};{embedded_bin};\" + $env:PATH\n"
        )),
        _ => None,
    }
}
