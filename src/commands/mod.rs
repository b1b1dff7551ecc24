//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `check.rs` — `check` and `files`.
//! - `generate.rs` — `generate`, including its positional argument rules.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod check;
pub mod generate;

use crate::cli::{Cli, Commands};
use crate::services::settings::GeneralSettings;
use std::path::Path;

pub fn handle_commands(
    cli: &Cli,
    settings: &GeneralSettings,
    inputs_dir: &Path,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Check {
            file,
            details,
            lenient,
        } => {
            let name = file.as_deref().unwrap_or(settings.default_input.as_str());
            check::handle_check(cli.json, inputs_dir, name, *details, *lenient)
        }
        Commands::Files => check::handle_files(cli.json, inputs_dir),
        Commands::Generate {
            count,
            target,
            probability,
            seed,
            verify,
        } => {
            let request = generate::resolve_request(
                count.as_deref(),
                target.as_deref(),
                probability.as_deref(),
                settings,
            )?;
            generate::handle_generate(cli.json, inputs_dir, &request, *seed, *verify)
        }
    }
}
