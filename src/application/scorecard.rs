//! Scorecard Use Case
//!
//! The public surface the presentation layer drives. Each call runs to
//! completion: resolve → validate → mutate → persist. Totals are derived on
//! demand from the current cells.
//!
//! Persistence is best-effort: a failed save is logged and the in-memory
//! session stays authoritative.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::entities::{Board, BoardRef, Session, SessionDefaults};
use crate::domain::policies::naming::new_board_name;
use crate::domain::policies::Preset;
use crate::domain::ports::SessionRepository;
use crate::domain::services::{self, board_totals, session_total, EntryOutcome, Totals};
use crate::domain::value_objects::{BoardGroup, BoardId, CategoryId, CellState};
use crate::error::{YamsError, YamsResult};

/// Totals of one board, labelled for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardTotals {
    pub id: BoardId,
    pub name: String,
    pub totals: Totals,
}

/// Totals of the active group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTotals {
    pub mode: BoardGroup,
    pub boards: Vec<BoardTotals>,
    pub session_total: u32,
}

pub struct ScorecardUseCase {
    session: Session,
    store: Arc<dyn SessionRepository>,
}

impl ScorecardUseCase {
    pub fn new(session: Session, store: Arc<dyn SessionRepository>) -> Self {
        Self { session, store }
    }

    /// Load the stored session, or start from `defaults` when nothing usable is stored.
    pub fn open(store: Arc<dyn SessionRepository>, defaults: &SessionDefaults) -> Self {
        let session = match store.load() {
            Ok(Some(session)) => {
                debug!(
                    mode = session.mode().as_str(),
                    boards = session.all_boards().count(),
                    "loaded session"
                );
                session
            }
            Ok(None) => {
                debug!("no stored session, using defaults");
                Session::from_defaults(defaults)
            }
            Err(e) => {
                warn!("failed to load session, using defaults: {}", e);
                Session::from_defaults(defaults)
            }
        };
        Self::new(session, store)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.session) {
            warn!("failed to save session: {}", e);
        }
    }

    fn board_mut(&mut self, reference: &BoardRef) -> YamsResult<&mut Board> {
        self.session
            .get_mut(reference)
            .ok_or_else(|| YamsError::UnknownBoard {
                reference: reference.to_string(),
            })
    }

    pub fn mode(&self) -> BoardGroup {
        self.session.mode()
    }

    pub fn switch_mode(&mut self, mode: BoardGroup) {
        debug!(mode = mode.as_str(), "switch mode");
        self.session.set_mode(mode);
        self.persist();
    }

    /// Boards of the active group, in display order.
    pub fn boards(&self) -> &[Board] {
        self.session.active_boards()
    }

    pub fn resolve(&self, reference: &BoardRef) -> YamsResult<&Board> {
        self.session
            .get(reference)
            .ok_or_else(|| YamsError::UnknownBoard {
                reference: reference.to_string(),
            })
    }

    /// Add a board to the active group. A missing or blank name becomes `Joueur {n}`.
    pub fn create_board(&mut self, name: Option<&str>) -> Board {
        let mode = self.session.mode();
        let fallback = new_board_name(self.session.active_boards().len());
        let board = Board::new(name.unwrap_or(""), &fallback, mode);
        debug!(id = %board.id(), name = board.name(), "create board");
        self.session.push(board.clone());
        self.persist();
        board
    }

    pub fn rename(&mut self, reference: &BoardRef, name: &str) -> YamsResult<Board> {
        let board = self.board_mut(reference)?;
        if !board.rename(name) {
            return Err(YamsError::EmptyName);
        }
        let renamed = board.clone();
        debug!(id = %renamed.id(), name = renamed.name(), "rename board");
        self.persist();
        Ok(renamed)
    }

    pub fn delete(&mut self, reference: &BoardRef) -> YamsResult<Board> {
        let removed = self
            .session
            .remove(reference)
            .ok_or_else(|| YamsError::UnknownBoard {
                reference: reference.to_string(),
            })?;
        debug!(id = %removed.id(), "delete board");
        self.persist();
        Ok(removed)
    }

    /// Clear every entry and crossing of one board.
    pub fn reset(&mut self, reference: &BoardRef) -> YamsResult<()> {
        self.board_mut(reference)?.reset();
        debug!(board = %reference, "reset board");
        self.persist();
        Ok(())
    }

    /// Reset every board of the active group. Returns how many were reset.
    pub fn reset_all(&mut self) -> usize {
        let boards = self.session.active_boards_mut();
        boards.iter_mut().for_each(Board::reset);
        let count = boards.len();
        debug!(count, "reset all boards");
        self.persist();
        count
    }

    /// Remove every board of the active group. Returns how many were removed.
    pub fn delete_all(&mut self) -> usize {
        let mode = self.session.mode();
        let count = self.session.active_boards().len();
        self.session.replace_group(mode, Vec::new());
        debug!(count, "delete all boards");
        self.persist();
        count
    }

    /// Replace the active group with the preset's tracks.
    pub fn apply_preset(&mut self, preset: Preset) -> &[Board] {
        let mode = self.session.mode();
        let boards = preset
            .names()
            .iter()
            .enumerate()
            .map(|(i, name)| Board::new(name, &new_board_name(i), mode))
            .collect();
        self.session.replace_group(mode, boards);
        debug!(%preset, "apply preset");
        self.persist();
        self.session.active_boards()
    }

    /// Text entry. Rejections leave the slot untouched and are not persisted.
    pub fn set_entry(
        &mut self,
        reference: &BoardRef,
        category: CategoryId,
        raw: &str,
    ) -> YamsResult<EntryOutcome> {
        let board = self.board_mut(reference)?;
        let outcome = services::validate(category.category(), raw);
        let cell = services::apply_entry(board, category, &outcome);
        debug!(board = %reference, %category, raw, ?outcome, ?cell, "set entry");
        if outcome.is_accepted() {
            self.persist();
        }
        Ok(outcome)
    }

    /// Fixed-score toggle; `cross_mode` turns it into a crossing toggle.
    pub fn toggle_fixed(
        &mut self,
        reference: &BoardRef,
        category: CategoryId,
        cross_mode: bool,
    ) -> YamsResult<CellState> {
        let board = self.board_mut(reference)?;
        let cell = services::toggle_fixed(board, category, cross_mode)?;
        debug!(board = %reference, %category, cross_mode, ?cell, "toggle fixed");
        self.persist();
        Ok(cell)
    }

    pub fn toggle_crossed(
        &mut self,
        reference: &BoardRef,
        category: CategoryId,
    ) -> YamsResult<CellState> {
        let board = self.board_mut(reference)?;
        let cell = services::toggle_crossed(board, category);
        debug!(board = %reference, %category, ?cell, "toggle crossed");
        self.persist();
        Ok(cell)
    }

    pub fn totals(&self, reference: &BoardRef) -> YamsResult<Totals> {
        self.resolve(reference).map(board_totals)
    }

    /// Sum of grand totals over the active group.
    pub fn session_total(&self) -> u32 {
        session_total(self.session.active_boards())
    }

    pub fn totals_for_group(&self) -> GroupTotals {
        let boards = self
            .session
            .active_boards()
            .iter()
            .map(|b| BoardTotals {
                id: b.id().clone(),
                name: b.name().to_string(),
                totals: board_totals(b),
            })
            .collect();
        GroupTotals {
            mode: self.session.mode(),
            boards,
            session_total: self.session_total(),
        }
    }
}
