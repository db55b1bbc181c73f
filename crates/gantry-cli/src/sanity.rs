// SPDX-License-Identifier: Apache-2.0

//! PATH-ordering sanity check for omnibus installs.
//!
//! An omnibus package bundles a private runtime whose bin directory, if it
//! precedes the kit's own bin directory on PATH, silently shadows the kit's
//! commands. The check runs once before delegating to a subcommand and is
//! advisory only: every verdict is exit-code neutral, and detection failures
//! degrade to a skip instead of an error.

use crate::env::{Environment, PATH_LIST_SEPARATOR};
use crate::omnibus::OmnibusLayout;

/// Outcome class of the pre-dispatch environment check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    WarnWrongOrder,
    WarnMissingEmbedded,
    SkippedNoInstall,
}

/// Result of one sanity check. Computed per invocation, never cached.
pub struct SanityResult {
    pub verdict: Verdict,
    pub message: Option<String>,
}

impl SanityResult {
    fn silent(verdict: Verdict) -> Self {
        SanityResult {
            verdict,
            message: None,
        }
    }
}

/// Inspects PATH ordering against the omnibus install layout.
pub fn check(env: &dyn Environment) -> SanityResult {
    let Some(layout) = OmnibusLayout::detect(env) else {
        return SanityResult::silent(Verdict::SkippedNoInstall);
    };

    let bin = layout.bin_dir.display().to_string();
    let embedded_bin = layout.embedded_bin_dir.display().to_string();
    let search_path = env.var("PATH").unwrap_or_default();

    // Exact string match against the split entries; no normalization of
    // trailing slashes or case.
    let mut bin_pos = None;
    let mut embedded_pos = None;
    for (idx, entry) in search_path.split(PATH_LIST_SEPARATOR).enumerate() {
        if bin_pos.is_none() && entry == bin {
            bin_pos = Some(idx);
        }
        if embedded_pos.is_none() && entry == embedded_bin {
            embedded_pos = Some(idx);
        }
    }

    match (bin_pos, embedded_pos) {
        (None, Some(_)) => SanityResult {
            verdict: Verdict::WarnMissingEmbedded,
            message: Some(missing_bin_message(&bin)),
        },
        (Some(b), Some(e)) if e < b => SanityResult {
            verdict: Verdict::WarnWrongOrder,
            message: Some(wrong_order_message(&bin, &embedded_bin)),
        },
        _ => SanityResult::silent(Verdict::Ok),
    }
}

fn wrong_order_message(bin: &str, embedded_bin: &str) -> String {
    format!(
        "{embedded_bin} is listed before {bin} in your PATH, so the runtime \
bundled with the Gantry Development Kit will shadow the kit's own commands; \
please reverse that order.\n\
You can fix this automatically by adding the following to your shell profile:\n\
\n\
  eval \"$(gantry shell-init <SHELL_NAME>)\"\n"
    )
}

fn missing_bin_message(bin: &str) -> String {
    format!(
        "To use the Gantry Development Kit, you must add {bin} to your PATH.\n\
You can fix this automatically by adding the following to your shell profile:\n\
\n\
  eval \"$(gantry shell-init <SHELL_NAME>)\"\n"
    )
}
