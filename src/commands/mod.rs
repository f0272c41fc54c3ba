//! Command handlers.
//!
//! Each handler writes its own output (text or `--json`) and returns the
//! process exit code. Errors bubble up to `main` as `anyhow::Error`.

pub mod boards;
pub mod confirm;
pub mod scores;
pub mod show;
pub mod theme;

use std::process::ExitCode;

use anyhow::Result;

use yams::presentation::Commands;
use yams::{PreferencesUseCase, ScorecardUseCase};

use crate::ui::context::UiContext;

pub fn dispatch(
    command: Commands,
    scorecard: &mut ScorecardUseCase,
    preferences: &PreferencesUseCase,
    ui: &UiContext,
) -> Result<ExitCode> {
    match command {
        Commands::Show => show::cmd_show(scorecard, ui),
        Commands::Add { name } => boards::cmd_add(scorecard, name.as_deref(), ui),
        Commands::Rename { board, name } => boards::cmd_rename(scorecard, &board, &name, ui),
        Commands::Delete { board } => boards::cmd_delete(scorecard, &board, ui),
        Commands::Reset { board, all, yes } => {
            boards::cmd_reset(scorecard, board.as_deref(), all, yes, ui)
        }
        Commands::Preset { preset, yes } => boards::cmd_preset(scorecard, preset, yes, ui),
        Commands::ClearBoards { yes } => boards::cmd_clear_boards(scorecard, yes, ui),
        Commands::Set {
            board,
            category,
            value,
        } => scores::cmd_set(scorecard, &board, category, &value, ui),
        Commands::Fixed {
            board,
            category,
            cross,
        } => scores::cmd_fixed(scorecard, &board, category, cross, ui),
        Commands::Cross { board, category } => scores::cmd_cross(scorecard, &board, category, ui),
        Commands::Mode { mode } => show::cmd_mode(scorecard, mode, ui),
        Commands::Theme { action } => theme::cmd_theme(preferences, action, ui),
        Commands::Categories => show::cmd_categories(ui),
    }
}
