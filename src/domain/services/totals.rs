//! Totals calculator
//!
//! Pure function of a board's cells. Nothing is cached; callers recompute after
//! every mutation.

use serde::Serialize;

use crate::domain::entities::{Board, Cells};
use crate::domain::value_objects::{lower_section, upper_section, CellState};

/// Upper sum that earns the bonus.
pub const BONUS_THRESHOLD: u32 = 63;

/// Bonus awarded at or above the threshold.
pub const BONUS_POINTS: u32 = 35;

/// Dice per face needed on average to reach the threshold.
const PAR_DICE: i32 = 3;

/// Dice in a roll.
const MAX_DICE: i32 = 6;

/// Standing of the upper bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum BonusStatus {
    /// Nothing attempted in the upper section yet.
    Pending,
    /// Ahead of par.
    OnTrack { advance: i32 },
    /// At or behind par, still reachable.
    AtRisk { advance: i32 },
    /// Unreachable even with six dice in every open slot.
    Lost { advance: i32 },
    /// Section complete, threshold reached.
    Earned,
    /// Section complete, threshold missed.
    Missed,
}

impl BonusStatus {
    /// Short label for rendering.
    pub fn label(&self) -> &'static str {
        match self {
            BonusStatus::Pending => "pending",
            BonusStatus::OnTrack { .. } => "on-track",
            BonusStatus::AtRisk { .. } => "at-risk",
            BonusStatus::Lost { .. } => "lost",
            BonusStatus::Earned => "earned",
            BonusStatus::Missed => "missed",
        }
    }
}

/// Projection of the bonus advance against what is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvanceRisk {
    OnTrack,
    AtRisk,
    Lost,
}

impl AdvanceRisk {
    pub fn classify(advance: i32, potential: i32) -> Self {
        if advance > 0 {
            AdvanceRisk::OnTrack
        } else if advance + potential >= 0 {
            AdvanceRisk::AtRisk
        } else {
            AdvanceRisk::Lost
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub upper_sum: u32,
    pub upper_complete: bool,
    pub bonus_advance: i32,
    pub remaining_advance_potential: i32,
    pub bonus_status: BonusStatus,
    pub bonus: u32,
    pub upper_total: u32,
    pub lower_sum: u32,
    pub grand_total: u32,
}

/// Derive every total from `cells`.
pub fn compute_totals(cells: &Cells) -> Totals {
    let mut upper_sum = 0u32;
    let mut upper_complete = true;
    let mut untouched = true;
    let mut advance = 0i32;
    let mut potential = 0i32;

    for category in upper_section() {
        let face = i32::from(category.face().unwrap_or(0));
        let par = PAR_DICE * face;
        match cells[category.id.index()] {
            CellState::Open => {
                upper_complete = false;
                potential += (MAX_DICE - PAR_DICE) * face;
            }
            CellState::Scored(v) => {
                untouched = false;
                upper_sum += u32::from(v);
                advance += i32::from(v) - par;
            }
            CellState::Crossed => {
                untouched = false;
                advance -= par;
            }
        }
    }

    let lower_sum: u32 = lower_section()
        .iter()
        .map(|c| cells[c.id.index()].points())
        .sum();

    let bonus = if upper_sum >= BONUS_THRESHOLD {
        BONUS_POINTS
    } else {
        0
    };

    let bonus_status = if upper_complete {
        if bonus > 0 {
            BonusStatus::Earned
        } else {
            BonusStatus::Missed
        }
    } else if untouched && advance == 0 {
        BonusStatus::Pending
    } else {
        match AdvanceRisk::classify(advance, potential) {
            AdvanceRisk::OnTrack => BonusStatus::OnTrack { advance },
            AdvanceRisk::AtRisk => BonusStatus::AtRisk { advance },
            AdvanceRisk::Lost => BonusStatus::Lost { advance },
        }
    };

    let upper_total = upper_sum + bonus;
    Totals {
        upper_sum,
        upper_complete,
        bonus_advance: advance,
        remaining_advance_potential: potential,
        bonus_status,
        bonus,
        upper_total,
        lower_sum,
        grand_total: upper_total + lower_sum,
    }
}

impl Totals {
    /// Raw advance classification, also defined once the section is complete.
    pub fn advance_risk(&self) -> AdvanceRisk {
        AdvanceRisk::classify(self.bonus_advance, self.remaining_advance_potential)
    }
}

pub fn board_totals(board: &Board) -> Totals {
    compute_totals(board.cells())
}

/// Sum of grand totals over `boards`.
pub fn session_total<'a>(boards: impl IntoIterator<Item = &'a Board>) -> u32 {
    boards
        .into_iter()
        .map(|b| board_totals(b).grand_total)
        .sum()
}
