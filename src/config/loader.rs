// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(required)
//!   .add_toml_file_optional(gearenv.toml)
//!   .add_toml_str(inline)
//!   .set(cli override)      highest priority
//!        |
//!        v
//!    build() + GEARENV_* environment --> Config
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::Config;
use crate::error::Result;

/// How a configuration source entered the loader, for the `configs` listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A file that must exist.
    Required,
    /// A file that is silently skipped when absent.
    Optional,
    /// An inline TOML string.
    Inline,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Required => "file",
            Self::Optional => "optional",
            Self::Inline => "string",
        })
    }
}

/// One source the loader will read, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
    pub kind: SourceKind,
    pub path: PathBuf,
}

impl fmt::Display for LoadedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.path.display())
    }
}

/// Builder for loading configuration from multiple sources.
///
/// Sources added later override earlier ones. Environment variables with
/// the configured prefix rank above all files, and `set` overrides rank
/// above everything.
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<LoadedSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist when `build` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), SourceKind::Required)
    }

    /// Adds a TOML file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), SourceKind::Optional)
    }

    fn add_file(mut self, path: &Path, kind: SourceKind) -> Self {
        let required = kind == SourceKind::Required;
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        if required || path.exists() {
            self.sources.push(LoadedSource {
                kind,
                path: path.to_path_buf(),
            });
        }
        self
    }

    /// Adds an inline TOML string.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(LoadedSource {
            kind: SourceKind::Inline,
            path: PathBuf::from("<string>"),
        });
        self
    }

    /// Enables environment variable overrides with the given prefix.
    ///
    /// A double underscore separates section from key, so
    /// `GEARENV_PATHS__GEAR_BASE_DIR` maps to `paths.gear_base_dir`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets an override that outranks every other source.
    ///
    /// # Errors
    ///
    /// Returns an error if the key path is invalid for the `config` crate.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Reads all sources and deserializes the merged result.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, any source is not
    /// valid TOML, or the merged tree does not match [`Config`].
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }
        Ok(builder.build()?.try_deserialize()?)
    }

    /// The sources registered so far, in priority order.
    #[must_use]
    pub fn loaded_files(&self) -> &[LoadedSource] {
        &self.sources
    }

    /// Numbered source listing for the `configs` command.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
