// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for gearenv.
//!
//! ```text
//! Config: GlobalConfig (logging), PathsConfig (node layout)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. File logging is disabled when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::Info,
            file_log_level: LogLevel::Trace,
            log_file: None,
        }
    }
}
