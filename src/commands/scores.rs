use std::process::ExitCode;

use anyhow::Result;

use yams::presentation::output::{BoardView, EntryView};
use yams::{Board, BoardRef, CategoryId, CellState, EntryOutcome, ScorecardUseCase};

use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::scorecard::bonus_text;

fn cell_text(cell: CellState) -> String {
    match cell {
        CellState::Open => "open".to_string(),
        CellState::Scored(v) => v.to_string(),
        CellState::Crossed => "crossed".to_string(),
    }
}

fn print_cell(ui: &UiContext, board: &Board, category: CategoryId, cell: CellState) {
    let palette = ui.palette();
    let totals = yams::domain::services::board_totals(board);
    println!(
        "{} {} {} = {}  (total {}, bonus {})",
        ColoredText::success(ui.icons().success).render(palette.as_ref()),
        board.name(),
        category.category().label,
        cell_text(cell),
        totals.grand_total,
        bonus_text(&totals).render(palette.as_ref())
    );
}

fn emit_cell(event: &str, board: &Board, category: CategoryId, cell: CellState) -> Result<()> {
    crate::ui::json::emit(&serde_json::json!({
        "event": event,
        "category": category,
        "cell": cell,
        "board": BoardView::new(board),
    }))?;
    Ok(())
}

/// A rejected entry is reported and exits non-zero; the slot keeps its value.
pub fn cmd_set(
    scorecard: &mut ScorecardUseCase,
    board: &str,
    category: CategoryId,
    value: &str,
    ui: &UiContext,
) -> Result<ExitCode> {
    let reference = BoardRef::parse(board);
    let outcome = scorecard.set_entry(&reference, category, value)?;
    let board = scorecard.resolve(&reference)?;
    let cell = board.cell(category);

    if ui.json {
        crate::ui::json::emit(&serde_json::json!({
            "event": "entry",
            "entry": EntryView::new(category, &outcome, cell),
            "board": BoardView::new(board),
        }))?;
    } else if let EntryOutcome::Rejected(rejection) = &outcome {
        let palette = ui.palette();
        println!(
            "{} {} (kept {})",
            ColoredText::error(ui.icons().error).render(palette.as_ref()),
            rejection,
            cell_text(cell)
        );
    } else {
        print_cell(ui, board, category, cell);
    }

    Ok(if outcome.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

pub fn cmd_fixed(
    scorecard: &mut ScorecardUseCase,
    board: &str,
    category: CategoryId,
    cross: bool,
    ui: &UiContext,
) -> Result<ExitCode> {
    let reference = BoardRef::parse(board);
    let cell = scorecard.toggle_fixed(&reference, category, cross)?;
    let board = scorecard.resolve(&reference)?;
    if ui.json {
        emit_cell("fixed_toggled", board, category, cell)?;
    } else {
        print_cell(ui, board, category, cell);
    }
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_cross(
    scorecard: &mut ScorecardUseCase,
    board: &str,
    category: CategoryId,
    ui: &UiContext,
) -> Result<ExitCode> {
    let reference = BoardRef::parse(board);
    let cell = scorecard.toggle_crossed(&reference, category)?;
    let board = scorecard.resolve(&reference)?;
    if ui.json {
        emit_cell("cross_toggled", board, category, cell)?;
    } else {
        print_cell(ui, board, category, cell);
    }
    Ok(ExitCode::SUCCESS)
}
