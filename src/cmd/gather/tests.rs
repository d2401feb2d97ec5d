// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::render_environ;
use crate::cli::gather::OutputFormat;
use crate::environ::Environ;

fn sample_env() -> Environ {
    let mut env = Environ::new();
    env.set("OPENSHIFT_APP_NAME", "blog");
    env.set("PATH", "/usr/bin:/bin");
    env
}

#[test]
fn test_render_env_format() {
    let out = render_environ(&sample_env(), OutputFormat::Env).unwrap();
    assert_eq!(out, "OPENSHIFT_APP_NAME=blog\nPATH=/usr/bin:/bin\n");
}

#[test]
fn test_render_env_format_empty() {
    let out = render_environ(&Environ::new(), OutputFormat::Env).unwrap();
    assert_eq!(out, "");
}

#[test]
fn test_render_export_format() {
    let out = render_environ(&sample_env(), OutputFormat::Export).unwrap();
    assert_eq!(
        out,
        "export OPENSHIFT_APP_NAME='blog'\nexport PATH='/usr/bin:/bin'\n"
    );
}

#[test]
fn test_render_export_format_escapes_quotes() {
    let mut env = Environ::new();
    env.set("GREETING", "it's here");

    let out = render_environ(&env, OutputFormat::Export).unwrap();
    assert_eq!(out, "export GREETING='it'\\''s here'\n");
}

#[test]
fn test_render_export_format_empty_value() {
    let mut env = Environ::new();
    env.set("EMPTY", "");

    let out = render_environ(&env, OutputFormat::Export).unwrap();
    assert_eq!(out, "export EMPTY=''\n");
}

#[test]
fn test_render_json_format() {
    let out = render_environ(&sample_env(), OutputFormat::Json).unwrap();
    assert_eq!(
        out,
        "{\n  \"OPENSHIFT_APP_NAME\": \"blog\",\n  \"PATH\": \"/usr/bin:/bin\"\n}\n"
    );
}

#[test]
fn test_render_json_format_empty() {
    let out = render_environ(&Environ::new(), OutputFormat::Json).unwrap();
    assert_eq!(out, "{}\n");
}
