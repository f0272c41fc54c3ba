//! Cell state - one (board, category) slot
//!
//! A slot is open, scored, or crossed; never scored and crossed at once.

use serde::{Deserialize, Serialize};

/// Largest value a slot can hold.
pub const MAX_ENTRY: u16 = 999;

/// State of one score slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum CellState {
    /// Not yet attempted.
    #[default]
    Open,
    /// Holds a value in `1..=MAX_ENTRY`.
    Scored(u16),
    /// Forfeited; scores zero.
    Crossed,
}

impl CellState {
    /// Scored cell for `value`, clamped to `MAX_ENTRY`; zero yields `Open`.
    pub fn scored(value: u16) -> Self {
        match value {
            0 => CellState::Open,
            v => CellState::Scored(v.min(MAX_ENTRY)),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, CellState::Open)
    }

    pub fn is_crossed(&self) -> bool {
        matches!(self, CellState::Crossed)
    }

    /// Stored entry, if any. Crossed slots never expose one.
    pub fn value(&self) -> Option<u16> {
        match self {
            CellState::Scored(v) => Some(*v),
            _ => None,
        }
    }

    /// Points this slot contributes to totals.
    pub fn points(&self) -> u32 {
        self.value().map(u32::from).unwrap_or(0)
    }
}
