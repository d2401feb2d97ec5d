// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging infrastructure using the `tracing` ecosystem.
//!
//! ```text
//! init_logging(&LogConfig)
//!        |
//!        v
//!    registry
//!    |       |
//!    v       v
//! Console   File (optional)
//! stderr    non_blocking
//! ANSI      FmtSpan::CLOSE
//!        |
//!        v
//!    LogGuard (flush on drop)
//!
//! LogLevel:  0=Silent  1=Error  2=Warn
//!            3=Info    4=Debug  5=Trace
//! ```
//!
//! Console output always goes to stderr. The `gather` and `load` commands
//! print shell-evaluable variable listings on stdout, and diagnostics must
//! not interleave with them.

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::{ConfigError, Result};

/// Verbosity of a log sink, configured as a number from 0 to 5.
///
/// `Silent` turns the sink off entirely. `Trace` includes per-file
/// source decisions made by the environment loader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Silent = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    /// Parses a numeric level, rejecting values above 5.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for out-of-range input.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        Self::from_u8(level).ok_or_else(|| ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "log_level".to_string(),
            message: format!("log level must be 0-5, got {level}"),
        })
    }

    /// Numeric form, suitable for serialization and display.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Maps 0-5 to a level; anything larger is `None`.
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Silent),
            1 => Some(Self::Error),
            2 => Some(Self::Warn),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Trace),
            _ => None,
        }
    }

    /// The `tracing` level this maps to, or `None` for `Silent`.
    #[must_use]
    pub const fn tracing_level(self) -> Option<Level> {
        match self {
            Self::Silent => None,
            Self::Error => Some(Level::ERROR),
            Self::Warn => Some(Level::WARN),
            Self::Info => Some(Level::INFO),
            Self::Debug => Some(Level::DEBUG),
            Self::Trace => Some(Level::TRACE),
        }
    }

    /// The `EnvFilter` directive for this level.
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Silent => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, ConfigError> {
        Self::new(value)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.as_u8()
    }
}

// Levels travel through config files as plain numbers, not variant names.
impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Self::new(u8::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    /// Verbosity of the stderr sink.
    #[builder(setters(name = with_console_level), default)]
    console_level: LogLevel,
    /// Verbosity of the file sink, independent of the console.
    #[builder(setters(name = with_file_level), default = LogLevel::Trace)]
    file_level: LogLevel,
    /// Destination file; file logging is off when unset.
    #[builder(setters(name = with_log_file))]
    log_file: Option<String>,
    /// Whether console lines carry the emitting module path.
    #[builder(setters(name = with_show_target), default = false)]
    show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    #[must_use]
    pub const fn show_target(&self) -> bool {
        self.show_target
    }
}

/// Keeps the non-blocking file writer alive; dropping it flushes
/// pending log lines.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system with the given configuration.
///
/// Returns a guard that must be kept alive for the duration of the
/// program.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
///
/// # Example
///
/// ```no_run
/// use gearenv::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::Warn)
///     .with_file_level(LogLevel::Debug)
///     .with_log_file("gather.log".to_string())
///     .build();
///
/// let _guard = init_logging(&config).expect("Failed to initialize logging");
/// tracing::info!("Logging initialized");
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.show_target())
        .with_level(true)
        .with_ansi(true)
        .with_filter(EnvFilter::new(config.console_level().filter_directive()));

    let (file_layer, file_guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = open_log_file(Path::new(path))?;
            let layer = fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(EnvFilter::new(config.file_level().filter_directive()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

/// Create the log file (and its parent directory) and wrap it in a
/// non-blocking writer.
fn open_log_file(
    path: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    Ok(tracing_appender::non_blocking(file))
}

#[cfg(test)]
mod tests;
