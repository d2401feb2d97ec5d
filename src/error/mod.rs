// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        GearEnvError (<= 24 bytes)
//!               |
//!       +-------+-------+
//!       |       |       |
//!       v       v       v
//!     Bailed  Config  Source
//!   Box<str>   Box     Box
//!
//! Sub-errors (unboxed internally):
//!   ConfigError  ParseError, MissingKey, InvalidValue
//!   SourceError  Read, MissingAssignment, Pattern
//! ```
//!
//! `SourceError` values never propagate out of composition; the loader
//! logs them per file and keeps going. `ConfigError` and `Bailed` reach
//! `main` through `anyhow`.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GearEnvError`].
pub type GearEnvResult<T> = std::result::Result<T, GearEnvError>;

/// Top-level application error type.
///
/// Sub-errors are boxed so the enum stays small on the stack.
#[derive(Debug, Error)]
pub enum GearEnvError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Environment source file error.
    #[error("environment source error: {0}")]
    Source(#[from] Box<SourceError>),
}

/// Create a fatal [`GearEnvError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> GearEnvError {
    GearEnvError::Bailed(message.into().into_boxed_str())
}

/// `From` impls that box the sub-error on the way in, so call sites can
/// use `?` without naming the box.
macro_rules! boxed_from {
    ($($variant:ident($error:ty)),+ $(,)?) => {$(
        impl From<$error> for GearEnvError {
            fn from(err: $error) -> Self {
                Self::$variant(Box::new(err))
            }
        }
    )+};
}

boxed_from! {
    Config(ConfigError),
    Source(SourceError),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

/// Errors raised while reading a single environment variable file.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to read the file contents.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An `export` line without a `KEY=value` assignment.
    #[error("no variable assignment in '{path}': {content}")]
    MissingAssignment { path: String, content: String },

    /// A source pattern that could not be compiled for matching.
    #[error("invalid source pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}
