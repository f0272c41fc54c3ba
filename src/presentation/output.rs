//! Output Views
//!
//! Serializable shapes printed by `--json`. Text rendering lives in the binary.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::Board;
use crate::domain::services::{board_totals, EntryOutcome, Totals};
use crate::domain::value_objects::{BoardGroup, CategoryId, CategoryKind, CellState, CATALOG};

/// One board with its derived totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub group: BoardGroup,
    pub entries: BTreeMap<&'static str, Option<u16>>,
    pub crossed: BTreeMap<&'static str, bool>,
    pub created_at: i64,
    pub totals: Totals,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            id: board.id().as_str(),
            name: board.name(),
            group: board.group(),
            entries: CategoryId::ALL
                .iter()
                .map(|id| (id.as_str(), board.entry(*id)))
                .collect(),
            crossed: CategoryId::ALL
                .iter()
                .map(|id| (id.as_str(), board.is_crossed(*id)))
                .collect(),
            created_at: board.created_at().timestamp_millis(),
            totals: board_totals(board),
        }
    }
}

/// The active group as shown by `show`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView<'a> {
    pub mode: BoardGroup,
    pub boards: Vec<BoardView<'a>>,
    pub session_total: u32,
}

impl<'a> SessionView<'a> {
    pub fn new(mode: BoardGroup, boards: &'a [Board], session_total: u32) -> Self {
        Self {
            mode,
            boards: boards.iter().map(BoardView::new).collect(),
            session_total,
        }
    }
}

/// Result of a text entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub category: CategoryId,
    pub accepted: bool,
    pub stored_value: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub cell: CellState,
}

impl EntryView {
    pub fn new(category: CategoryId, outcome: &EntryOutcome, cell: CellState) -> Self {
        Self {
            category,
            accepted: outcome.is_accepted(),
            stored_value: outcome.stored_value(),
            reason: match outcome {
                EntryOutcome::Rejected(rejection) => Some(rejection.reason.to_string()),
                _ => None,
            },
            cell,
        }
    }
}

/// One catalog row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub id: CategoryId,
    pub label: &'static str,
    pub hint: &'static str,
    pub section: &'static str,
    pub kind: &'static str,
    /// Points of a fixed-score category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u16>,
}

pub fn category_views() -> Vec<CategoryView> {
    CATALOG
        .iter()
        .map(|c| CategoryView {
            id: c.id,
            label: c.label,
            hint: c.hint,
            section: if c.id.is_upper() { "upper" } else { "lower" },
            kind: match c.kind {
                CategoryKind::UpperNumeric { .. } => "upperNumeric",
                CategoryKind::FixedScore { .. } => "fixedScore",
                CategoryKind::CombinationSum { .. } => "combinationSum",
                CategoryKind::RangeBounded { .. } => "rangeBounded",
            },
            points: c.fixed_points(),
        })
        .collect()
}
