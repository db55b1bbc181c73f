//! Process environment access behind a small test seam.

use std::path::PathBuf;

/// Separator between entries of a PATH-style list.
pub const PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Read-only view of the process environment data the CLI consumes.
///
/// The dispatcher and sanity checker take this as a parameter so tests can
/// supply fixed values without mutating real process state.
pub trait Environment {
    /// Returns an environment variable, if set and valid UTF-8.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the path of the running executable.
    fn current_exe(&self) -> Option<PathBuf>;
}

/// Live process environment.
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn current_exe(&self) -> Option<PathBuf> {
        std::env::current_exe().ok()
    }
}

#[cfg(test)]
pub mod fake {
    use super::Environment;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// Fixed-value environment for unit tests.
    #[derive(Default)]
    pub struct FakeEnvironment {
        pub vars: HashMap<String, String>,
        pub exe: Option<PathBuf>,
    }

    impl FakeEnvironment {
        pub fn with_var(mut self, name: &str, value: &str) -> Self {
            self.vars.insert(name.to_string(), value.to_string());
            self
        }

        pub fn with_exe(mut self, exe: PathBuf) -> Self {
            self.exe = Some(exe);
            self
        }
    }

    impl Environment for FakeEnvironment {
        fn var(&self, name: &str) -> Option<String> {
            self.vars.get(name).cloned()
        }

        fn current_exe(&self) -> Option<PathBuf> {
            self.exe.clone()
        }
    }
}
