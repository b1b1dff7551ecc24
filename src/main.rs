use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod error;
mod logging;
mod services;

use cli::Cli;
use error::AppError;
use logging::{init_logging, LogConfig};
use services::settings::load_settings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<AppError>()
                .map(AppError::exit_code)
                .unwrap_or(1);
            tracing::debug!(exit_code = code, "command failed");
            eprintln!("Error: {err:#}");
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = load_settings()?.general;

    init_logging(&LogConfig {
        level: cli
            .log_level
            .clone()
            .unwrap_or_else(|| settings.log_level.clone()),
        format: cli.log_format,
    })?;

    let inputs_dir = cli
        .inputs_dir
        .clone()
        .unwrap_or_else(|| settings.inputs_dir.clone());
    tracing::debug!(inputs_dir = %inputs_dir.display(), "resolved inputs directory");

    commands::handle_commands(cli, &settings, &inputs_dir)
}
