// SPDX-License-Identifier: Apache-2.0

//! Top-level argument routing for the `gantry` binary.
//!
//! The surface is deliberately fixed: `-h`/`--help`, `-v`/`--version`, and
//! free-form forwarding to a registered subcommand. Every anomaly resolves
//! here into stderr text plus an exit code; nothing propagates as an error,
//! and exiting itself is left to the caller so tests can assert on the code.

use std::io::Write;

use gantry_registry::{help, CommandRegistry};

use crate::env::Environment;
use crate::sanity;

/// How one invocation was classified from argv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    InvalidOption(String),
    Command { name: String, args: Vec<String> },
}

/// Classifies raw argv (program name already stripped).
pub fn parse(argv: &[String]) -> Invocation {
    let Some(first) = argv.first() else {
        return Invocation::Help;
    };
    match first.as_str() {
        "-h" | "--help" => Invocation::Help,
        "-v" | "--version" => Invocation::Version,
        flag if flag.starts_with('-') => Invocation::InvalidOption(flag.to_string()),
        name => Invocation::Command {
            name: name.to_string(),
            args: argv[1..].to_vec(),
        },
    }
}

/// Routes a parsed invocation to help/version output or a registered command.
pub struct Dispatcher<'a> {
    registry: &'a CommandRegistry,
    prog: &'a str,
    product: &'a str,
    version: &'a str,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        registry: &'a CommandRegistry,
        prog: &'a str,
        product: &'a str,
        version: &'a str,
    ) -> Self {
        Dispatcher {
            registry,
            prog,
            product,
            version,
        }
    }

    /// Runs one invocation against the supplied sinks and returns the process
    /// exit code. Stateless across calls apart from the immutable registry.
    pub fn run(
        &self,
        argv: &[String],
        env: &dyn Environment,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> i32 {
        match parse(argv) {
            Invocation::Help => {
                let _ = out.write_all(self.help_text().as_bytes());
                0
            }
            Invocation::Version => {
                let _ = writeln!(out, "{} Version: {}", self.product, self.version);
                0
            }
            Invocation::InvalidOption(flag) => {
                let _ = writeln!(err, "invalid option: {flag}");
                let _ = out.write_all(self.help_text().as_bytes());
                1
            }
            Invocation::Command { name, args } => match self.registry.get(&name) {
                None => {
                    let _ = writeln!(err, "Unknown command `{name}'.");
                    let _ = out.write_all(self.help_text().as_bytes());
                    1
                }
                Some(spec) => {
                    // Advisory only: no current verdict blocks delegation.
                    let result = sanity::check(env);
                    if let Some(message) = result.message {
                        let _ = out.write_all(message.as_bytes());
                    }
                    let mut command = spec.instantiate();
                    command.run(&args)
                }
            },
        }
    }

    fn help_text(&self) -> String {
        help::render_help(self.prog, self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::fake::FakeEnvironment;
    use crate::env::PATH_LIST_SEPARATOR;
    use crate::omnibus::OMNIBUS_ROOT_VAR;
    use gantry_registry::Command;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        calls: Rc<RefCell<Vec<Vec<String>>>>,
        code: i32,
    }

    impl Command for Recorder {
        fn run(&mut self, args: &[String]) -> i32 {
            self.calls.borrow_mut().push(args.to_vec());
            self.code
        }
    }

    fn registry_with_example(calls: Rc<RefCell<Vec<Vec<String>>>>, code: i32) -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register("example", "An example command", move || {
            Box::new(Recorder {
                calls: calls.clone(),
                code,
            })
        });
        registry
    }

    fn run_with_env(
        registry: &CommandRegistry,
        argv: &[&str],
        env: &FakeEnvironment,
    ) -> (i32, String, String) {
        let dispatcher = Dispatcher::new(registry, "gantry", "Gantry Development Kit", "1.2.3");
        let argv: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = dispatcher.run(&argv, env, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn run(registry: &CommandRegistry, argv: &[&str]) -> (i32, String, String) {
        run_with_env(registry, argv, &FakeEnvironment::default())
    }

    fn expected_help(registry: &CommandRegistry) -> String {
        help::render_help("gantry", registry)
    }

    #[test]
    fn empty_argv_prints_help() {
        let registry = registry_with_example(Rc::default(), 0);
        let (code, out, err) = run(&registry, &[]);
        assert_eq!(code, 0);
        assert_eq!(out, expected_help(&registry));
        assert!(err.is_empty());
    }

    #[test]
    fn help_flags_print_help() {
        let registry = registry_with_example(Rc::default(), 0);
        for flag in ["-h", "--help"] {
            let (code, out, err) = run(&registry, &[flag]);
            assert_eq!(code, 0);
            assert_eq!(out, expected_help(&registry));
            assert!(err.is_empty());
        }
    }

    #[test]
    fn version_flag_prints_exact_version_line() {
        let registry = registry_with_example(Rc::default(), 0);
        for flag in ["-v", "--version"] {
            let (code, out, err) = run(&registry, &[flag]);
            assert_eq!(code, 0);
            assert_eq!(out, "Gantry Development Kit Version: 1.2.3\n");
            assert!(err.is_empty());
        }
    }

    #[test]
    fn unrecognized_flag_reports_invalid_option() {
        let registry = registry_with_example(Rc::default(), 0);
        let (code, out, err) = run(&registry, &["-nope"]);
        assert_eq!(code, 1);
        assert_eq!(err, "invalid option: -nope\n");
        assert_eq!(out, expected_help(&registry));
    }

    #[test]
    fn unknown_command_reports_and_prints_help() {
        let registry = registry_with_example(Rc::default(), 0);
        let (code, out, err) = run(&registry, &["ancient-aliens"]);
        assert_eq!(code, 1);
        assert_eq!(err, "Unknown command `ancient-aliens'.\n");
        assert_eq!(out, expected_help(&registry));
    }

    #[test]
    fn command_lookup_is_case_sensitive() {
        let registry = registry_with_example(Rc::default(), 0);
        let (code, _, err) = run(&registry, &["Example"]);
        assert_eq!(code, 1);
        assert_eq!(err, "Unknown command `Example'.\n");
    }

    #[test]
    fn registered_command_receives_forwarded_args_verbatim() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let registry = registry_with_example(calls.clone(), 23);
        let (code, _, err) = run(
            &registry,
            &["example", "with", "some", "args", "--and-an-option"],
        );
        assert_eq!(code, 23);
        assert!(err.is_empty());
        assert_eq!(
            calls.borrow().as_slice(),
            &[vec![
                "with".to_string(),
                "some".to_string(),
                "args".to_string(),
                "--and-an-option".to_string(),
            ]]
        );
    }

    #[test]
    fn subcommand_exit_code_is_propagated_unmapped() {
        for code in [0, 1, 23, 101] {
            let registry = registry_with_example(Rc::default(), code);
            let (got, _, _) = run(&registry, &["example"]);
            assert_eq!(got, code);
        }
    }

    #[test]
    fn sanity_warning_precedes_delegation() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("embedded").join("apps").join("gantry"))
            .unwrap();
        let path = format!(
            "{}{}{}",
            tmp.path().join("embedded").join("bin").display(),
            PATH_LIST_SEPARATOR,
            tmp.path().join("bin").display(),
        );
        let env = FakeEnvironment::default()
            .with_var(OMNIBUS_ROOT_VAR, &tmp.path().display().to_string())
            .with_var("PATH", &path);

        let calls = Rc::new(RefCell::new(Vec::new()));
        let registry = registry_with_example(calls.clone(), 0);
        let (code, out, err) = run_with_env(&registry, &["example"], &env);

        assert_eq!(code, 0);
        assert!(err.is_empty());
        assert!(out.contains("please reverse that order"));
        assert!(out.contains("gantry shell-init"));
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn sanity_check_is_skipped_on_help_and_error_paths() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("embedded").join("apps").join("gantry"))
            .unwrap();
        let env = FakeEnvironment::default()
            .with_var(OMNIBUS_ROOT_VAR, &tmp.path().display().to_string())
            .with_var(
                "PATH",
                &tmp.path().join("embedded").join("bin").display().to_string(),
            );

        let registry = registry_with_example(Rc::default(), 0);
        for argv in [&[][..], &["-h"][..], &["-nope"][..], &["missing"][..]] {
            let (_, out, _) = run_with_env(&registry, argv, &env);
            assert!(!out.contains("you must add"));
        }
    }

    #[test]
    fn identical_invocations_yield_identical_results() {
        let registry = registry_with_example(Rc::default(), 5);
        let first = run(&registry, &["example", "arg"]);
        let second = run(&registry, &["example", "arg"]);
        assert_eq!(first, second);
    }

    #[test]
    fn parse_classifies_all_modes() {
        let argv = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(parse(&argv(&[])), Invocation::Help);
        assert_eq!(parse(&argv(&["--help"])), Invocation::Help);
        assert_eq!(parse(&argv(&["-v"])), Invocation::Version);
        assert_eq!(
            parse(&argv(&["-x"])),
            Invocation::InvalidOption("-x".to_string())
        );
        assert_eq!(
            parse(&argv(&["build", "--fast"])),
            Invocation::Command {
                name: "build".to_string(),
                args: vec!["--fast".to_string()],
            }
        );
    }
}
