// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use gearenv::cli::gather::OutputFormat;
use gearenv::cli::{Cli, Command};
use std::path::PathBuf;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["gearenv", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["gearenv", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// Gather Command
// =============================================================================

#[test]
fn cli_gather_by_gear_name() {
    let cli = Cli::try_parse_from(["gearenv", "gather", "0f7b8c9a"]).unwrap();

    let Some(Command::Gather(args)) = cli.command else {
        panic!("expected gather command");
    };
    assert_eq!(args.gear, PathBuf::from("0f7b8c9a"));
    assert!(args.cartridges.is_empty());
    assert_eq!(args.format, OutputFormat::Env);
}

#[test]
fn cli_gather_with_cartridges_and_format() {
    let cli = Cli::try_parse_from([
        "gearenv",
        "gather",
        "/var/lib/openshift/0f7b8c9a",
        "-C",
        "/var/lib/openshift/0f7b8c9a/ruby",
        "-C",
        "/var/lib/openshift/0f7b8c9a/mysql",
        "--format",
        "json",
    ])
    .unwrap();

    let Some(Command::Gather(args)) = cli.command else {
        panic!("expected gather command");
    };
    assert_eq!(args.cartridges.len(), 2);
    assert_eq!(args.format, OutputFormat::Json);
}

// =============================================================================
// Load Command
// =============================================================================

#[test]
fn cli_load_multiple_specs() {
    let cli = Cli::try_parse_from([
        "gearenv",
        "load",
        "/etc/openshift/env",
        "/var/lib/openshift/0f7b8c9a/.env",
        "-f",
        "export",
    ])
    .unwrap();

    let Some(Command::Load(args)) = cli.command else {
        panic!("expected load command");
    };
    assert_eq!(
        args.specs,
        vec![
            PathBuf::from("/etc/openshift/env"),
            PathBuf::from("/var/lib/openshift/0f7b8c9a/.env")
        ]
    );
    assert_eq!(args.format, OutputFormat::Export);
}

#[test]
fn cli_load_without_specs_rejected() {
    assert!(Cli::try_parse_from(["gearenv", "load"]).is_err());
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_log_levels() {
    let cli = Cli::try_parse_from(["gearenv", "-l", "5", "--file-log-level", "3", "options"])
        .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.file_log_level, Some(3));
}

#[test]
fn cli_global_options_multiple_configs() {
    let cli = Cli::try_parse_from([
        "gearenv",
        "-c",
        "base.toml",
        "-c",
        "override.toml",
        "configs",
    ])
    .unwrap();

    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("base.toml"), PathBuf::from("override.toml")]
    );
    assert!(matches!(cli.command, Some(Command::Configs)));
}

#[test]
fn cli_global_options_system_env_dir() {
    let cli = Cli::try_parse_from(["gearenv", "--system-env-dir", "/srv/env", "gather", "g"])
        .unwrap();

    assert_eq!(cli.global.system_env_dir, Some(PathBuf::from("/srv/env")));
}

#[test]
fn cli_rejects_out_of_range_log_level() {
    assert!(Cli::try_parse_from(["gearenv", "-l", "7", "options"]).is_err());
}
