//! Board entity - one score sheet (a player or a track)
//!
//! Pure data: validation, crossing precedence and totals live in domain services.
//! Each category has exactly one `CellState`, so "entered" and "crossed" can never
//! disagree.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::policies::naming;
use crate::domain::value_objects::{BoardGroup, BoardId, CategoryId, CellState, CATEGORY_COUNT};

/// Cells of a board, indexed by `CategoryId::index()`.
pub type Cells = [CellState; CATEGORY_COUNT];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    id: BoardId,
    name: String,
    group: BoardGroup,
    cells: Cells,
    created_at: DateTime<Utc>,
}

impl Board {
    /// New empty board with a generated id.
    ///
    /// `name` is trimmed; a blank name falls back to `fallback_name`.
    pub fn new(name: &str, fallback_name: &str, group: BoardGroup) -> Self {
        Self {
            id: BoardId::generate(),
            name: naming::sanitize_name(name).unwrap_or_else(|| fallback_name.to_string()),
            group,
            cells: [CellState::Open; CATEGORY_COUNT],
            created_at: now_millis(),
        }
    }

    /// Rebuild a board from persisted parts. The caller has already sanitized them.
    pub fn restore(
        id: BoardId,
        name: String,
        group: BoardGroup,
        cells: Cells,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            group,
            cells,
            created_at,
        }
    }

    pub fn id(&self) -> &BoardId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> BoardGroup {
        self.group
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn cell(&self, id: CategoryId) -> CellState {
        self.cells[id.index()]
    }

    /// Stored value for `id` (absent when open or crossed).
    pub fn entry(&self, id: CategoryId) -> Option<u16> {
        self.cell(id).value()
    }

    pub fn is_crossed(&self, id: CategoryId) -> bool {
        self.cell(id).is_crossed()
    }

    /// Replace one cell. `Scored(0)` is stored as open, values above the
    /// maximum are clamped.
    pub fn set_cell(&mut self, id: CategoryId, state: CellState) {
        self.cells[id.index()] = match state {
            CellState::Scored(v) => CellState::scored(v),
            other => other,
        };
    }

    /// Rename; returns false (and keeps the old name) when `name` is blank.
    pub fn rename(&mut self, name: &str) -> bool {
        match naming::sanitize_name(name) {
            Some(clean) => {
                self.name = clean;
                true
            }
            None => false,
        }
    }

    /// Clear every entry and crossing.
    pub fn reset(&mut self) {
        self.cells = [CellState::Open; CATEGORY_COUNT];
    }

    /// Entries view keyed by category, fully populated.
    pub fn entries(&self) -> BTreeMap<CategoryId, Option<u16>> {
        CategoryId::ALL
            .iter()
            .map(|id| (*id, self.entry(*id)))
            .collect()
    }

    /// Crossed-marks view keyed by category, fully populated.
    pub fn crossed(&self) -> BTreeMap<CategoryId, bool> {
        CategoryId::ALL
            .iter()
            .map(|id| (*id, self.is_crossed(*id)))
            .collect()
    }
}

/// Merge two loosely-kept maps into cells. A crossing wins over any stored value;
/// missing keys are open.
pub fn cells_from_maps(
    entries: &BTreeMap<CategoryId, Option<u16>>,
    crossed: &BTreeMap<CategoryId, bool>,
) -> Cells {
    let mut cells = [CellState::Open; CATEGORY_COUNT];
    for id in CategoryId::ALL {
        cells[id.index()] = if crossed.get(&id).copied().unwrap_or(false) {
            CellState::Crossed
        } else {
            entries
                .get(&id)
                .copied()
                .flatten()
                .map(CellState::scored)
                .unwrap_or(CellState::Open)
        };
    }
    cells
}

/// Current time truncated to milliseconds, the precision the store keeps.
pub(crate) fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
