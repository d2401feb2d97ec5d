// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gearenv.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gearenv.toml (cwd)
//! 3. --config FILE(s)
//! 4. GEARENV_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GEARENV_GLOBAL__OUTPUT_LOG_LEVEL=2    → global.output_log_level = 2
//! GEARENV_PATHS__SYSTEM_ENV_DIR=/plain  → paths.system_env_dir = "/plain"
//! GEARENV_PATHS__GEAR_BASE_DIR=/gears   → paths.gear_base_dir = "/gears"
//! ```

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::GlobalConfig;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Paths configuration.
    pub paths: PathsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gearenv::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gearenv.toml")
    ///     .with_env_prefix("GEARENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Option listing for the `options` command, one aligned
    /// `section.key = value` line per option, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let options: BTreeMap<&str, String> = BTreeMap::from([
            (
                "global.output_log_level",
                self.global.output_log_level.as_u8().to_string(),
            ),
            (
                "global.file_log_level",
                self.global.file_log_level.as_u8().to_string(),
            ),
            (
                "global.log_file",
                self.global
                    .log_file
                    .as_ref()
                    .map_or_else(String::new, |p| p.display().to_string()),
            ),
            (
                "paths.system_env_dir",
                self.paths.system_env_dir.display().to_string(),
            ),
            (
                "paths.gear_base_dir",
                self.paths.gear_base_dir.display().to_string(),
            ),
        ]);

        let width = options.keys().map(|key| key.len()).max().unwrap_or(0);
        options
            .into_iter()
            .map(|(key, value)| format!("{key:<width$} = {value}"))
            .collect()
    }
}
