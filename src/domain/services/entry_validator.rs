//! Entry validation service
//!
//! Turns raw text typed into a score slot into an `EntryOutcome`.
//! Pure: the caller applies the outcome to the board.
//!
//! Pipeline: trim → `,` as decimal separator → finite number → round half up →
//! clamp to `[0, 999]` → zero clears → category rule.

use thiserror::Error;

use crate::domain::value_objects::{Category, CategoryId, CategoryKind, MAX_ENTRY};

/// Most dice of one face a roll can show.
const MAX_DICE: u16 = 6;

/// Why a slot is cleared instead of scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearReason {
    /// Nothing left after trimming.
    Empty,
    /// Not a finite number.
    NotNumeric,
    /// Rounded and clamped to zero.
    Zero,
}

/// Why a numeric value does not fit a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("must be a multiple of {face}")]
    NotAMultipleOfFace { face: u16 },

    #[error("exceeds the maximum of {max}")]
    AboveMaximum { max: u16 },

    #[error("must be the sum of {multiplicity} identical dice")]
    NotACombination { multiplicity: u16 },

    #[error("must be between {min} and {max}")]
    OutOfRange { min: u16, max: u16 },

    #[error("only {points} can be scored here")]
    FixedScoreOnly { points: u16 },
}

/// A rejected edit. The slot keeps its previous state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{value} is not valid for {category}: {reason}")]
pub struct EntryRejection {
    pub category: CategoryId,
    pub value: u16,
    pub reason: RejectReason,
}

/// Result of validating one text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Store this value.
    Accepted(u16),
    /// Clear the slot.
    Cleared(ClearReason),
    /// Leave the slot untouched and flag the input.
    Rejected(EntryRejection),
}

impl EntryOutcome {
    /// True when the caller should write `stored_value()` to the slot.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, EntryOutcome::Rejected(_))
    }

    /// Value to store; `None` means absent (and, on rejection, nothing to store).
    pub fn stored_value(&self) -> Option<u16> {
        match self {
            EntryOutcome::Accepted(v) => Some(*v),
            _ => None,
        }
    }
}

/// Raw text after numeric coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coerced {
    Empty,
    NotNumeric,
    Value(u16),
}

/// Normalize and coerce raw input to a clamped integer.
pub fn coerce(raw: &str) -> Coerced {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Coerced::Empty;
    }

    let normalized = trimmed.replacen(',', ".", 1);
    match normalized.parse::<f64>() {
        Ok(n) if n.is_finite() => Coerced::Value(clamp_entry(n)),
        _ => Coerced::NotNumeric,
    }
}

/// Round half up, then clamp to `[0, MAX_ENTRY]`.
pub fn clamp_entry(n: f64) -> u16 {
    let rounded = (n + 0.5).floor();
    rounded.clamp(0.0, f64::from(MAX_ENTRY)) as u16
}

/// Validate raw input for `category`.
pub fn validate(category: &Category, raw: &str) -> EntryOutcome {
    let value = match coerce(raw) {
        Coerced::Empty => return EntryOutcome::Cleared(ClearReason::Empty),
        Coerced::NotNumeric => return EntryOutcome::Cleared(ClearReason::NotNumeric),
        Coerced::Value(0) => return EntryOutcome::Cleared(ClearReason::Zero),
        Coerced::Value(v) => v,
    };

    match check(category, value) {
        Ok(()) => EntryOutcome::Accepted(value),
        Err(reason) => EntryOutcome::Rejected(EntryRejection {
            category: category.id,
            value,
            reason,
        }),
    }
}

/// Category rule for a positive value.
pub fn check(category: &Category, value: u16) -> Result<(), RejectReason> {
    match category.kind {
        CategoryKind::UpperNumeric { face } => {
            let face = u16::from(face);
            // Below one die of the face: kept as typed.
            if value < face {
                return Ok(());
            }
            if value % face != 0 {
                return Err(RejectReason::NotAMultipleOfFace { face });
            }
            if value > MAX_DICE * face {
                return Err(RejectReason::AboveMaximum {
                    max: MAX_DICE * face,
                });
            }
            Ok(())
        }
        CategoryKind::CombinationSum { multiplicity } => {
            let k = u16::from(multiplicity);
            if value % k == 0 && (1..=MAX_DICE).contains(&(value / k)) {
                Ok(())
            } else {
                Err(RejectReason::NotACombination { multiplicity: k })
            }
        }
        CategoryKind::RangeBounded { min, max } => {
            if (min..=max).contains(&value) {
                Ok(())
            } else {
                Err(RejectReason::OutOfRange { min, max })
            }
        }
        CategoryKind::FixedScore { points } => {
            if value == points {
                Ok(())
            } else {
                Err(RejectReason::FixedScoreOnly { points })
            }
        }
    }
}
