// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Gather | Load | Options | Configs | Version
//! ```

use std::process::ExitCode;

use anyhow::Context as _;
use mimalloc::MiMalloc;

use gearenv::cli::global::GlobalOptions;
use gearenv::cli::{self, Cli, Command};
use gearenv::cmd::config::{run_configs_command, run_options_command};
use gearenv::cmd::gather::run_gather_command;
use gearenv::cmd::load::run_load_command;
use gearenv::config::Config;
use gearenv::config::loader::ConfigLoader;
use gearenv::error::Result;
use gearenv::logging::{LogConfig, LogLevel, init_logging};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Config comes before logging so the log levels in the files apply.
    let config = load_config(&cli.global).context("failed to load config")?;

    let _log_guard =
        init_logging(&log_config(&cli.global, &config)).context("failed to initialize logging")?;

    match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(&config);
            Ok(())
        }
        Some(Command::Configs) => {
            run_configs_command(&config_loader(&cli.global).format_loaded_files());
            Ok(())
        }
        Some(Command::Gather(args)) => run_gather_command(args, &config),
        Some(Command::Load(args)) => run_load_command(args),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    }
}

/// Effective log configuration: CLI flags outrank the config file, and
/// the file sink level stays independent of the console level.
fn log_config(global: &GlobalOptions, config: &Config) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.output_log_level);
    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.file_log_level);
    let log_file = global
        .log_file
        .as_ref()
        .or(config.global.log_file.as_ref())
        .map(|p| p.display().to_string());

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file)
        .build()
}

/// The standard source stack: optional `gearenv.toml`, then `--config`
/// files in order, then `GEARENV_*` environment overrides.
fn config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new()
        .add_toml_file_optional("gearenv.toml")
        .with_env_prefix("GEARENV");
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    let mut loader = config_loader(global);
    if let Some(ref dir) = global.system_env_dir {
        loader = loader.set("paths.system_env_dir", dir.display().to_string())?;
    }
    loader.build()
}
