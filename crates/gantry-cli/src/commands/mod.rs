//! Built-in subcommand declarations and registration.

pub mod env;
pub mod exec;
pub mod shell_init;

use gantry_registry::CommandRegistry;

/// Builds the registry of built-in commands. Registration order is the help
/// listing order.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(
        "env",
        "Prints environment details of the Gantry Development Kit",
        || Box::new(env::EnvCommand),
    );
    registry.register(
        "exec",
        "Runs a command with the omnibus bin directories first in PATH",
        || Box::new(exec::ExecCommand),
    );
    registry.register(
        "shell-init",
        "Prints a script to load the kit's paths into your shell",
        || Box::new(shell_init::ShellInitCommand),
    );
    registry
}
