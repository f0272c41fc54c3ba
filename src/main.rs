//! Yams CLI - scorecard for Yams (Yahtzee) games
//!
//! Usage: yams [COMMAND]
//!
//! Commands:
//!   show        Show the active boards with their totals (default)
//!   set         Enter a score
//!   fixed       Toggle a fixed-score category
//!   cross       Cross or uncross a slot
//!   mode        Show or switch the active group

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use yams::presentation::factory::{self, StorageOptions};
use yams::presentation::{Cli, Commands};
use yams::Config;

mod commands;
mod ui;

/// Overrides `-v` and the configured verbosity, e.g. `YAMS_LOG=yams=trace`.
const LOG_ENV: &str = "YAMS_LOG";

fn init_tracing(verbose: u8, config: &Config) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = match verbose {
            0 => config.output.verbosity.filter(),
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::new(level)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            ui::error::print_error(&e, json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let (config, warnings) = Config::load_or_default();
    init_tracing(cli.verbose, &config);
    for warning in &warnings {
        warn!("{}", warning);
    }

    let storage = StorageOptions::resolve(&config, cli.state_file.clone(), cli.no_persist);
    debug!(?storage, "storage resolved");

    let preferences = factory::create_preferences_use_case(&storage);
    let ui = ui::context::UiContext::new(
        cli.json,
        cli.verbose,
        cli.color,
        &config,
        preferences.theme(),
    );

    let mut scorecard = factory::create_scorecard_use_case(&config, &storage);
    let command = cli.command.unwrap_or(Commands::Show);
    commands::dispatch(command, &mut scorecard, &preferences, &ui)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
