// SPDX-License-Identifier: Apache-2.0

//! Fixed-format usage text for the top-level CLI.

use crate::CommandRegistry;

/// Renders the full help text: usage block, two blank lines, then the command
/// listing in registration order with names padded to the widest name.
pub fn render_help(prog: &str, registry: &CommandRegistry) -> String {
    let mut out = String::new();
    out.push_str("Usage:\n");
    out.push_str(&format!("    {prog} -h/--help\n"));
    out.push_str(&format!("    {prog} -v/--version\n"));
    out.push_str(&format!("    {prog} command [arguments...] [options...]\n"));
    out.push_str("\n\n");
    out.push_str("Available Commands:\n");

    let width = registry.widest_name();
    for spec in registry.iter() {
        out.push_str(&format!(
            "    {name:<width$}   {desc}\n",
            name = spec.name,
            desc = spec.description,
        ));
    }
    out
}
