// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE        ← Additional config files (can repeat)
//! --log-level N        ← Console verbosity (0-5)
//! --file-log-level N   ← File verbosity (overrides --log-level)
//! --log-file FILE      ← Log destination
//! --system-env-dir DIR ← paths.system_env_dir override
//!
//! Precedence: CLI flags > GEARENV_* env > --config > gearenv.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Node-wide environment directory (overrides paths.system_env_dir).
    #[arg(long = "system-env-dir", value_name = "DIR")]
    pub system_env_dir: Option<PathBuf>,
}
