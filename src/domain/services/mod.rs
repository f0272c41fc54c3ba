//! Domain Services
//!
//! Pure scoring rules that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod crossing;
pub mod entry_validator;
pub mod totals;

pub use crossing::{apply_entry, toggle_crossed, toggle_fixed};
pub use entry_validator::{
    check, clamp_entry, coerce, validate, ClearReason, Coerced, EntryOutcome, EntryRejection,
    RejectReason,
};
pub use totals::{
    board_totals, compute_totals, session_total, AdvanceRisk, BonusStatus, Totals, BONUS_POINTS,
    BONUS_THRESHOLD,
};
