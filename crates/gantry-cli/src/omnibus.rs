// SPDX-License-Identifier: Apache-2.0

//! Omnibus install layout detection.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::env::Environment;

/// Overrides omnibus root discovery, for tests and relocated installs.
pub const OMNIBUS_ROOT_VAR: &str = "GANTRY_OMNIBUS_ROOT";

/// Directory layout of a self-contained omnibus install.
///
/// An omnibus package ships the kit plus a private embedded runtime:
/// `<root>/bin` holds the kit's own commands and `<root>/embedded/bin` the
/// bundled runtime's, and the former must win on PATH.
pub struct OmnibusLayout {
    pub root: PathBuf,
    pub bin_dir: PathBuf,
    pub embedded_bin_dir: PathBuf,
}

impl OmnibusLayout {
    fn at(root: PathBuf) -> Self {
        let bin_dir = root.join("bin");
        let embedded_bin_dir = root.join("embedded").join("bin");
        OmnibusLayout {
            root,
            bin_dir,
            embedded_bin_dir,
        }
    }

    /// Detects whether the running tool is part of an omnibus install.
    ///
    /// Returns `None` when the root cannot be derived or the embedded apps
    /// marker is absent on disk. Detection failures are never surfaced as
    /// errors.
    pub fn detect(env: &dyn Environment) -> Option<OmnibusLayout> {
        let layout = OmnibusLayout::at(omnibus_root(env)?);
        if layout.app_marker().exists() {
            Some(layout)
        } else {
            None
        }
    }

    /// Marker directory proving this is a bundled install.
    pub fn app_marker(&self) -> PathBuf {
        self.root.join("embedded").join("apps").join("gantry")
    }

    /// Reads build metadata dropped by the omnibus packager, if present and
    /// well-formed.
    pub fn version_manifest(&self) -> Option<VersionManifest> {
        let data = fs::read_to_string(self.root.join("version-manifest.json")).ok()?;
        serde_json::from_str(&data).ok()
    }
}

/// Build metadata written by the omnibus packager.
#[derive(Debug, Deserialize)]
pub struct VersionManifest {
    pub build_version: String,
    #[serde(default)]
    pub build_git_revision: Option<String>,
}

fn omnibus_root(env: &dyn Environment) -> Option<PathBuf> {
    // Allow override via GANTRY_OMNIBUS_ROOT for testing
    if let Some(root) = env.var(OMNIBUS_ROOT_VAR) {
        return Some(PathBuf::from(root));
    }

    // <root>/bin/gantry -> <root>
    let exe = env.current_exe()?;
    Some(exe.parent()?.parent()?.to_path_buf())
}
