//! Crossing resolver
//!
//! Precedence between a scored value and a forfeited ("crossed") slot:
//! - crossing discards the stored value, uncrossing leaves the slot open
//! - an accepted text entry (or clear) always uncrosses
//! - the fixed-score toggle never activates a crossed slot
//!
//! Cross mode is request-scoped: callers pass it in, nothing here remembers it.

use crate::domain::entities::Board;
use crate::domain::value_objects::{CategoryId, CellState};
use crate::error::{YamsError, YamsResult};

use super::entry_validator::EntryOutcome;

/// Apply a validated text entry. Rejections leave the cell untouched.
pub fn apply_entry(board: &mut Board, id: CategoryId, outcome: &EntryOutcome) -> CellState {
    match outcome {
        EntryOutcome::Accepted(value) => board.set_cell(id, CellState::scored(*value)),
        EntryOutcome::Cleared(_) => board.set_cell(id, CellState::Open),
        EntryOutcome::Rejected(_) => {}
    }
    board.cell(id)
}

/// Flip the crossed flag of one slot.
pub fn toggle_crossed(board: &mut Board, id: CategoryId) -> CellState {
    let next = match board.cell(id) {
        CellState::Crossed => CellState::Open,
        CellState::Open | CellState::Scored(_) => CellState::Crossed,
    };
    board.set_cell(id, next);
    next
}

/// Fixed-score toggle.
///
/// With `cross_mode` the action crosses/uncrosses instead. Otherwise it turns
/// the fixed points on, or off when they are already scored. A crossed slot
/// refuses activation.
pub fn toggle_fixed(board: &mut Board, id: CategoryId, cross_mode: bool) -> YamsResult<CellState> {
    let points = id
        .category()
        .fixed_points()
        .ok_or_else(|| YamsError::NotFixedScore {
            category: id.to_string(),
        })?;

    if cross_mode {
        return Ok(toggle_crossed(board, id));
    }

    let next = match board.cell(id) {
        CellState::Crossed => {
            return Err(YamsError::SlotCrossed {
                category: id.to_string(),
            })
        }
        CellState::Scored(v) if v == points => CellState::Open,
        CellState::Open | CellState::Scored(_) => CellState::Scored(points),
    };
    board.set_cell(id, next);
    Ok(next)
}
