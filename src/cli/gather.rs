// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `gather` and `load` commands.
//!
//! # Architecture
//!
//! ```text
//! gearenv gather <gear> [-C DIR]... [-f FORMAT]
//! gearenv load <spec>... [-f FORMAT]
//!
//! USAGE:
//! $ gearenv gather /var/lib/openshift/0f7b8c9a
//! $ gearenv gather 0f7b8c9a -C ~/ruby-1.9 -f export
//! $ gearenv load /etc/openshift/env --format json
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Arguments for the `gather` command.
#[derive(Debug, Clone, Args)]
pub struct GatherArgs {
    /// Gear home directory, or a gear name resolved under paths.gear_base_dir.
    #[arg(value_name = "GEAR")]
    pub gear: PathBuf,

    /// Cartridge home directory whose env/ is merged after the gear tiers.
    /// Can be specified multiple times; later directories override earlier ones.
    #[arg(short = 'C', long = "cartridge", value_name = "DIR", action = clap::ArgAction::Append)]
    pub cartridges: Vec<PathBuf>,

    /// Output format.
    #[arg(short = 'f', long = "format", value_name = "FORMAT", default_value = "env")]
    pub format: OutputFormat,
}

/// Arguments for the `load` command.
#[derive(Debug, Clone, Args)]
pub struct LoadArgs {
    /// Environment source directory or glob pattern.
    /// Later sources override earlier ones.
    #[arg(value_name = "SPEC", required = true)]
    pub specs: Vec<PathBuf>,

    /// Output format.
    #[arg(short = 'f', long = "format", value_name = "FORMAT", default_value = "env")]
    pub format: OutputFormat,
}

/// Output formats for a composed environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// NAME=VALUE lines.
    Env,
    /// Shell-quoted `export` lines.
    Export,
    /// A single JSON object.
    Json,
}
