// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Gather command — compose and print the environment of a gear.
//!
//! ```text
//! gear path --> Composer::for_gear --> Environ --> stdout
//! ```
//!
//! All diagnostics go to the log; stdout carries nothing but the
//! rendered variables so the output stays shell-evaluable.

use crate::cli::gather::{GatherArgs, OutputFormat};
use crate::config::Config;
use crate::environ::Composer;
use crate::environ::Environ;
use crate::error::Result;
use crate::error::bail_out;
use tracing::{debug, info};

#[cfg(test)]
mod tests;

/// Runs the `gather` command.
///
/// # Errors
///
/// Returns an error if the gear directory cannot be resolved or the
/// composed environment cannot be rendered.
pub fn run_gather_command(args: &GatherArgs, config: &Config) -> Result<()> {
    let gear_dir = config
        .paths
        .resolve_gear_dir(&args.gear)
        .ok_or_else(|| bail_out(format!("gear directory not found: {}", args.gear.display())))?;

    debug!(gear = %gear_dir.display(), "composing gear environment");

    let composer = Composer::builder()
        .with_system_dir(config.paths.system_env_dir.clone())
        .build();
    let env = composer.for_gear(&gear_dir, &args.cartridges);

    info!(variables = env.len(), "environment composed");

    print!("{}", render_environ(&env, args.format)?);
    Ok(())
}

/// Renders an environment in the requested output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn render_environ(env: &Environ, format: OutputFormat) -> Result<String> {
    let mut out = String::new();

    match format {
        OutputFormat::Env => {
            for (name, value) in env.iter() {
                out.push_str(name);
                out.push('=');
                out.push_str(value);
                out.push('\n');
            }
        }
        OutputFormat::Export => {
            for (name, value) in env.iter() {
                // POSIX single-quoting; embedded quotes become '\''.
                let quoted = value.replace('\'', "'\\''");
                out.push_str("export ");
                out.push_str(name);
                out.push_str("='");
                out.push_str(&quoted);
                out.push_str("'\n");
            }
        }
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(env)?;
            out.push('\n');
        }
    }

    Ok(out)
}
