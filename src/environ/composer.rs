// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Composes the effective environment for a gear from all its sources.
//!
//! ```text
//! Composer::for_gear(gear_dir, cartridge_dirs)
//!
//! system dir                lowest precedence
//! gear .env, then */env
//! .env subdirs (not user_vars, dirs only)
//! cartridge env/ in order, primary cartridge last
//! PATH / LD_LIBRARY_PATH element assembly
//! user_vars                 highest precedence
//! ```

use bon::Builder;
use std::fs;
use std::path::{Path, PathBuf};

use super::container::Environ;
use super::elements::{self, SearchPathVar};
use super::loader;
use super::{
    CARTRIDGE_ENV_DIR, DOT_ENV_DIR, PRIMARY_CARTRIDGE_DIR_VAR, SYSTEM_ENV_DIR, USER_VARS_DIR,
};

/// Composes gear environments.
///
/// The node-wide source directory can be overridden, which tests and
/// non-default node layouts rely on.
#[derive(Debug, Clone, Builder)]
pub struct Composer {
    #[builder(setters(name = with_system_dir), default = PathBuf::from(SYSTEM_ENV_DIR))]
    system_dir: PathBuf,
}

impl Default for Composer {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Composer {
    /// Compose the combined cartridge environment for a gear.
    ///
    /// `cartridge_dirs` are the home directories of the gear's cartridges,
    /// loaded in order. When the environment names a primary cartridge, its
    /// directory is loaded last so its variables win, and its search-path
    /// elements get the primary position during assembly.
    #[must_use]
    pub fn for_gear(&self, gear_dir: &Path, cartridge_dirs: &[PathBuf]) -> Environ {
        let mut env = loader::load([self.system_dir.as_path()]);

        let dot_env = gear_dir.join(DOT_ENV_DIR);
        env.merge(loader::load([
            dot_env.clone(),
            gear_dir.join("*").join(CARTRIDGE_ENV_DIR),
        ]));

        for subdir in dot_env_subdirs(&dot_env) {
            env.merge(loader::load([subdir]));
        }

        let (dirs, primary_tag) = match env.get(PRIMARY_CARTRIDGE_DIR_VAR) {
            Some(primary) => {
                let primary = PathBuf::from(primary);
                let tag = primary_tag(&primary);
                (promote_primary(cartridge_dirs, &primary), tag)
            }
            None => (cartridge_dirs.to_vec(), None),
        };

        for dir in &dirs {
            env.merge(loader::load([dir.join(CARTRIDGE_ENV_DIR)]));
        }

        elements::assemble(&mut env, SearchPathVar::Path, primary_tag.as_deref());
        elements::assemble(&mut env, SearchPathVar::LdLibraryPath, primary_tag.as_deref());

        let user_vars = dot_env.join(USER_VARS_DIR);
        if user_vars.exists() {
            env.merge(loader::load([user_vars]));
        }

        env
    }
}

/// Reorder cartridge directories so the primary cartridge loads last.
///
/// The primary directory is appended even when absent from `dirs`.
pub(crate) fn promote_primary(dirs: &[PathBuf], primary: &Path) -> Vec<PathBuf> {
    let mut promoted: Vec<PathBuf> = dirs
        .iter()
        .filter(|dir| dir.as_path() != primary)
        .cloned()
        .collect();
    promoted.push(primary.to_path_buf());
    promoted
}

/// Uppercased cartridge name used in element variable keys.
pub(crate) fn primary_tag(primary: &Path) -> Option<String> {
    primary
        .file_name()
        .map(|name| name.to_string_lossy().to_uppercase())
}

/// Non-hidden subdirectories of the gear's `.env`, excluding user overrides.
fn dot_env_subdirs(dot_env: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dot_env) else {
        return Vec::new();
    };

    let mut subdirs: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| !name.starts_with('.') && name != USER_VARS_DIR)
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    subdirs.sort();
    subdirs
}
