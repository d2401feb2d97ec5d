// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gearenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gearenv [global options] <command>
//! gather <gear> [-C cartridge]...
//! load <spec>...
//! options
//! configs
//! version
//! ```

pub mod gather;
pub mod global;


use crate::cli::gather::{GatherArgs, LoadArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// OpenShift Gear Environment Composer
///
/// Composes the effective environment for an `OpenShift` gear.
#[derive(Debug, Parser)]
#[command(
    name = "gearenv",
    author,
    version,
    about = "OpenShift gear environment composer",
    long_about = "gearenv Copyright (C) 2026 Gearenv Contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Composes the effective environment for an OpenShift gear from\n\
                  the node-wide, gear-local and cartridge environment directories.\n\n\
                  Invoking `gearenv gather <gear>` prints the combined variables\n\
                  for a gear. Do `gearenv load <dir>...` to read explicit source\n\
                  directories instead. See `gearenv <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, gearenv will look for `gearenv.toml` in the current\n\
                  directory. Additional files can be specified with --config, those\n\
                  will be loaded after it and override its values. Environment\n\
                  variables prefixed with GEARENV_ override file values, and\n\
                  command-line flags override everything else."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the configs.
    Options,

    /// Lists the config files used by gearenv.
    Configs,

    /// Composes and prints the environment of a gear.
    Gather(GatherArgs),

    /// Loads variables from explicit source directories.
    Load(LoadArgs),
}

/// Parses the process arguments, exiting with a usage message on error.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
