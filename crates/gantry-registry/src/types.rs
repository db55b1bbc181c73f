// SPDX-License-Identifier: Apache-2.0

//! Command contract and registration metadata.

/// A runnable subcommand instance.
///
/// Implementations own their stdout/stderr; the dispatcher forwards arguments
/// verbatim and propagates the returned exit code without interpretation.
pub trait Command {
    /// Runs the command with the forwarded arguments, returning the process
    /// exit code.
    fn run(&mut self, args: &[String]) -> i32;
}

/// Factory producing a fresh command instance for each invocation.
pub type CommandFactory = Box<dyn Fn() -> Box<dyn Command>>;

/// Registration metadata for one subcommand. Immutable once registered.
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    pub factory: CommandFactory,
}

impl CommandSpec {
    /// Instantiates the command via its factory.
    pub fn instantiate(&self) -> Box<dyn Command> {
        (self.factory)()
    }
}
