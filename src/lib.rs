//! Yams - scorecard engine for Yams (Yahtzee) games
//!
//! Keeps one or more score sheets ("boards"), validates what is typed into each
//! slot against its category, tracks forfeited ("crossed") slots, and derives
//! upper/lower/bonus/grand totals together with a running bonus projection.
//!
//! Boards live in two groups: one board per player (`multiplayer`) or one board
//! per track of a single player (`multipiste`). Only the active group is shown
//! and summed.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{PreferencesUseCase, ScorecardUseCase};
pub use config::Config;
pub use domain::entities::{Board, BoardRef, Session, SessionDefaults};
pub use domain::services::{compute_totals, validate, BonusStatus, EntryOutcome, Totals};
pub use domain::value_objects::{BoardGroup, CategoryId, CellState, Theme};
pub use error::{YamsError, YamsResult};
