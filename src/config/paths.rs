// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Node path configuration.
//!
//! ```text
//! system_env_dir   /etc/openshift/env    node-wide variables
//! gear_base_dir    /var/lib/openshift    gear homes, one per uuid
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::environ::SYSTEM_ENV_DIR;

/// Node filesystem layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Node-wide environment directory.
    pub system_env_dir: PathBuf,
    /// Directory containing gear home directories.
    pub gear_base_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            system_env_dir: PathBuf::from(SYSTEM_ENV_DIR),
            gear_base_dir: PathBuf::from("/var/lib/openshift"),
        }
    }
}

impl PathsConfig {
    /// Resolve a gear argument to its home directory.
    ///
    /// An existing directory path is used as given; otherwise the argument
    /// is taken as a gear name under `gear_base_dir`. Returns `None` when
    /// neither resolves to a directory.
    #[must_use]
    pub fn resolve_gear_dir(&self, gear: &Path) -> Option<PathBuf> {
        if gear.is_dir() {
            return Some(gear.to_path_buf());
        }
        if gear.is_relative() {
            let candidate = self.gear_base_dir.join(gear);
            if candidate.is_dir() {
                return Some(candidate);
            }
        }
        None
    }
}
