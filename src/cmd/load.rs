// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Load command — read variables from explicit source directories.

use crate::cli::gather::LoadArgs;
use crate::cmd::gather::render_environ;
use crate::environ;
use crate::error::Result;
use tracing::info;

/// Runs the `load` command.
///
/// # Errors
///
/// Returns an error if the loaded environment cannot be rendered.
pub fn run_load_command(args: &LoadArgs) -> Result<()> {
    let env = environ::load(&args.specs);

    info!(
        sources = args.specs.len(),
        variables = env.len(),
        "environment loaded"
    );

    print!("{}", render_environ(&env, args.format)?);
    Ok(())
}
