use std::process::ExitCode;

use anyhow::Result;

use yams::domain::policies::Preset;
use yams::presentation::output::BoardView;
use yams::{Board, BoardRef, ScorecardUseCase};

use crate::commands::confirm::confirm;
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;

fn report(ui: &UiContext, event: &str, board: &Board, message: String) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(&serde_json::json!({
            "event": event,
            "board": BoardView::new(board),
        }))?;
    } else {
        let palette = ui.palette();
        println!(
            "{} {}",
            ColoredText::success(ui.icons().success).render(palette.as_ref()),
            message
        );
    }
    Ok(())
}

fn report_count(ui: &UiContext, event: &str, count: usize, message: String) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(&serde_json::json!({
            "event": event,
            "count": count,
        }))?;
    } else {
        let palette = ui.palette();
        println!(
            "{} {}",
            ColoredText::success(ui.icons().success).render(palette.as_ref()),
            message
        );
    }
    Ok(())
}

pub fn cmd_add(scorecard: &mut ScorecardUseCase, name: Option<&str>, ui: &UiContext) -> Result<ExitCode> {
    let board = scorecard.create_board(name);
    report(
        ui,
        "board_added",
        &board,
        format!("Added '{}' to {}", board.name(), scorecard.mode()),
    )?;
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_rename(
    scorecard: &mut ScorecardUseCase,
    board: &str,
    name: &str,
    ui: &UiContext,
) -> Result<ExitCode> {
    let renamed = scorecard.rename(&BoardRef::parse(board), name)?;
    report(
        ui,
        "board_renamed",
        &renamed,
        format!("Renamed to '{}'", renamed.name()),
    )?;
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_delete(scorecard: &mut ScorecardUseCase, board: &str, ui: &UiContext) -> Result<ExitCode> {
    let deleted = scorecard.delete(&BoardRef::parse(board))?;
    report(
        ui,
        "board_deleted",
        &deleted,
        format!("Deleted '{}'", deleted.name()),
    )?;
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_reset(
    scorecard: &mut ScorecardUseCase,
    board: Option<&str>,
    all: bool,
    yes: bool,
    ui: &UiContext,
) -> Result<ExitCode> {
    if all {
        let prompt = format!("Reset all {} boards?", scorecard.boards().len());
        if !confirm(ui, yes, &prompt)? {
            return Ok(ExitCode::SUCCESS);
        }
        let count = scorecard.reset_all();
        report_count(ui, "boards_reset", count, format!("Reset {} boards", count))?;
        return Ok(ExitCode::SUCCESS);
    }

    // clap guarantees a board when --all is absent
    let reference = BoardRef::parse(board.unwrap_or_default());
    scorecard.reset(&reference)?;
    let board = scorecard.resolve(&reference)?.clone();
    report(
        ui,
        "board_reset",
        &board,
        format!("Reset '{}'", board.name()),
    )?;
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_preset(
    scorecard: &mut ScorecardUseCase,
    preset: Preset,
    yes: bool,
    ui: &UiContext,
) -> Result<ExitCode> {
    if !scorecard.boards().is_empty() {
        let prompt = format!(
            "Replace the {} boards of {}?",
            scorecard.boards().len(),
            scorecard.mode()
        );
        if !confirm(ui, yes, &prompt)? {
            return Ok(ExitCode::SUCCESS);
        }
    }

    let boards = scorecard.apply_preset(preset);
    if ui.json {
        let views: Vec<BoardView<'_>> = boards.iter().map(BoardView::new).collect();
        crate::ui::json::emit(&serde_json::json!({
            "event": "preset_applied",
            "boards": views,
        }))?;
    } else {
        let names: Vec<&str> = boards.iter().map(Board::name).collect();
        let palette = ui.palette();
        println!(
            "{} Boards: {}",
            ColoredText::success(ui.icons().success).render(palette.as_ref()),
            names.join(", ")
        );
    }
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_clear_boards(scorecard: &mut ScorecardUseCase, yes: bool, ui: &UiContext) -> Result<ExitCode> {
    let prompt = format!(
        "Delete all {} boards of {}?",
        scorecard.boards().len(),
        scorecard.mode()
    );
    if !confirm(ui, yes, &prompt)? {
        return Ok(ExitCode::SUCCESS);
    }
    let count = scorecard.delete_all();
    report_count(ui, "boards_deleted", count, format!("Deleted {} boards", count))?;
    Ok(ExitCode::SUCCESS)
}
