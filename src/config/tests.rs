// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::SourceKind;
use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use std::path::{Path, PathBuf};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::Info);
    assert_eq!(config.global.file_log_level, LogLevel::Trace);
    assert!(config.global.log_file.is_none());
    assert_eq!(
        config.paths.system_env_dir,
        PathBuf::from("/etc/openshift/env")
    );
    assert_eq!(
        config.paths.gear_base_dir,
        PathBuf::from("/var/lib/openshift")
    );
}

#[test]
fn test_parse_full_toml() {
    let config = Config::parse(
        r#"
        [global]
        output_log_level = 1
        file_log_level = 4
        log_file = "/var/log/gearenv.log"

        [paths]
        system_env_dir = "/etc/custom/env"
        gear_base_dir = "/srv/gears"
        "#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::Error);
    assert_eq!(config.global.file_log_level, LogLevel::Debug);
    assert_eq!(
        config.global.log_file,
        Some(PathBuf::from("/var/log/gearenv.log"))
    );
    assert_eq!(config.paths.system_env_dir, PathBuf::from("/etc/custom/env"));
    assert_eq!(config.paths.gear_base_dir, PathBuf::from("/srv/gears"));
}

#[test]
fn test_parse_partial_toml_keeps_defaults() {
    let config = Config::parse(
        r#"
        [paths]
        gear_base_dir = "/srv/gears"
        "#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::Info);
    assert_eq!(
        config.paths.system_env_dir,
        PathBuf::from("/etc/openshift/env")
    );
    assert_eq!(config.paths.gear_base_dir, PathBuf::from("/srv/gears"));
}

#[test]
fn test_parse_rejects_unknown_keys() {
    let result = Config::parse(
        r#"
        [paths]
        gear_dir = "/srv/gears"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    let result = Config::parse(
        r#"
        [global]
        output_log_level = 6
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_from_file() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let path = temp.path().join("gearenv.toml");
    std::fs::write(
        &path,
        r#"
        [global]
        output_log_level = 2
        "#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::Warn);
}

#[test]
fn test_from_file_missing_required_errors() {
    let result = Config::from_file("/definitely/not/here/gearenv.toml");
    assert!(result.is_err());
}

#[test]
fn test_loader_later_sources_override() {
    let config = Config::builder()
        .add_toml_str(
            r#"
            [paths]
            gear_base_dir = "/first"
            "#,
        )
        .add_toml_str(
            r#"
            [paths]
            gear_base_dir = "/second"
            "#,
        )
        .build()
        .unwrap();

    assert_eq!(config.paths.gear_base_dir, PathBuf::from("/second"));
}

#[test]
fn test_loader_set_override_wins() {
    let config = Config::builder()
        .add_toml_str(
            r#"
            [paths]
            system_env_dir = "/from/file"
            "#,
        )
        .set("paths.system_env_dir", "/from/cli")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.paths.system_env_dir, PathBuf::from("/from/cli"));
}

#[test]
fn test_loader_tracks_sources() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let present = temp.path().join("present.toml");
    std::fs::write(&present, "[global]\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file(&present)
        .add_toml_file_optional(temp.path().join("absent.toml"))
        .add_toml_str("[paths]\n");

    let files = loader.loaded_files();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].kind, SourceKind::Required);
    assert_eq!(files[0].path, present);
    assert_eq!(files[1].kind, SourceKind::Inline);
    assert_eq!(files[1].path, PathBuf::from("<string>"));

    let formatted = loader.format_loaded_files();
    assert_eq!(formatted.len(), 2);
    assert!(formatted[0].starts_with("1. [file] "));
    assert_eq!(formatted[1], "2. [string] <string>");
}

#[test]
fn test_format_options_is_aligned_and_sorted() {
    let config = Config::default();
    let options = config.format_options();

    assert_eq!(options.len(), 5);
    assert_eq!(options[0], "global.file_log_level   = 5");
    assert_eq!(options[2], "global.output_log_level = 3");
    assert_eq!(options[3], "paths.gear_base_dir     = /var/lib/openshift");
    assert_eq!(options[4], "paths.system_env_dir    = /etc/openshift/env");

    let keys: Vec<&str> = options
        .iter()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted, "options should be sorted by key");
}

#[test]
fn test_resolve_gear_dir_existing_path() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let config = Config::default();

    let resolved = config.paths.resolve_gear_dir(temp.path());
    assert_eq!(resolved, Some(temp.path().to_path_buf()));
}

#[test]
fn test_resolve_gear_dir_name_under_base() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let gear = temp.path().join("0123456789abcdef");
    std::fs::create_dir(&gear).unwrap();

    let mut config = Config::default();
    config.paths.gear_base_dir = temp.path().to_path_buf();

    let resolved = config.paths.resolve_gear_dir(Path::new("0123456789abcdef"));
    assert_eq!(resolved, Some(gear));
}

#[test]
fn test_resolve_gear_dir_unresolvable() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let mut config = Config::default();
    config.paths.gear_base_dir = temp.path().to_path_buf();

    assert_eq!(config.paths.resolve_gear_dir(Path::new("missing")), None);
    assert_eq!(
        config
            .paths
            .resolve_gear_dir(Path::new("/absolute/missing/gear")),
        None
    );
}
