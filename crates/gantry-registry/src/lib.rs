// SPDX-License-Identifier: Apache-2.0

//! Command registration and lookup for the Gantry CLI.

pub mod help;
pub mod types;

pub use types::{Command, CommandFactory, CommandSpec};

/// Ordered, name-unique collection of registered subcommands.
///
/// Registration order is preserved because the help listing prints commands in
/// the order they were registered. Lookup is case-sensitive exact match.
#[derive(Default)]
pub struct CommandRegistry {
    specs: Vec<CommandSpec>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        CommandRegistry { specs: Vec::new() }
    }

    /// Registers a command under a unique name.
    ///
    /// Names are a startup-time invariant; registering the same name twice is
    /// a programming error and panics.
    pub fn register<F>(&mut self, name: &str, description: &str, factory: F)
    where
        F: Fn() -> Box<dyn Command> + 'static,
    {
        assert!(
            self.get(name).is_none(),
            "duplicate command registration: {name}"
        );
        self.specs.push(CommandSpec {
            name: name.to_string(),
            description: description.to_string(),
            factory: Box::new(factory),
        });
    }

    /// Returns the spec registered under `name`, exact match only.
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    /// Iterates specs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.specs.iter()
    }

    /// Width of the widest registered name, for help alignment.
    pub fn widest_name(&self) -> usize {
        self.specs.iter().map(|s| s.name.len()).max().unwrap_or(0)
    }
}
