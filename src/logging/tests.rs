// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_new_accepts_full_range() {
    assert_eq!(LogLevel::new(0).unwrap(), LogLevel::Silent);
    assert_eq!(LogLevel::new(3).unwrap(), LogLevel::Info);
    assert_eq!(LogLevel::new(5).unwrap(), LogLevel::Trace);
}

#[test]
fn test_log_level_new_rejects_out_of_range() {
    let err = LogLevel::new(6).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-5, got 6"
    );
}

#[test]
fn test_log_level_from_u8_bounds() {
    assert_eq!(LogLevel::from_u8(0), Some(LogLevel::Silent));
    assert_eq!(LogLevel::from_u8(5), Some(LogLevel::Trace));
    assert_eq!(LogLevel::from_u8(6), None);
    assert_eq!(LogLevel::from_u8(255), None);
}

#[test]
fn test_log_level_round_trips_through_u8() {
    for raw in 0..=5u8 {
        let level = LogLevel::from_u8(raw).unwrap();
        assert_eq!(level.as_u8(), raw);
        assert_eq!(u8::from(level), raw);
    }
}

#[test]
fn test_log_level_ordering() {
    assert!(LogLevel::Silent < LogLevel::Error);
    assert!(LogLevel::Warn < LogLevel::Trace);
}

#[test]
fn test_log_level_filter_directives() {
    assert_eq!(LogLevel::Silent.filter_directive(), "off");
    assert_eq!(LogLevel::Warn.filter_directive(), "warn");
    assert_eq!(LogLevel::Trace.filter_directive(), "trace");
}

#[test]
fn test_log_level_tracing_level() {
    assert_eq!(LogLevel::Silent.tracing_level(), None);
    assert_eq!(LogLevel::Error.tracing_level(), Some(tracing::Level::ERROR));
    assert_eq!(LogLevel::Trace.tracing_level(), Some(tracing::Level::TRACE));
}

#[test]
fn test_log_level_serde_round_trip() {
    let json = serde_json::to_string(&LogLevel::Debug).unwrap();
    assert_eq!(json, "4");
    let back: LogLevel = serde_json::from_str(&json).unwrap();
    assert_eq!(back, LogLevel::Debug);
}

#[test]
fn test_log_level_serde_rejects_out_of_range() {
    let result: Result<LogLevel, _> = serde_json::from_str("6");
    assert!(result.is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::Info);
    assert_eq!(config.file_level(), LogLevel::Trace);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::Warn)
        .with_file_level(LogLevel::Debug)
        .with_log_file("gather.log".to_string())
        .with_show_target(true)
        .build();
    assert_eq!(config.console_level(), LogLevel::Warn);
    assert_eq!(config.file_level(), LogLevel::Debug);
    assert_eq!(config.log_file(), Some("gather.log"));
    assert!(config.show_target());
}
