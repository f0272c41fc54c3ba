//! Naming Policy
//!
//! Board names are trimmed and never empty. Defaults depend on where a board
//! comes from: a restored record gets a positional `J{n}`, a newly added board
//! gets `Joueur {n}`, and presets use the classic track names.

use std::fmt;
use std::str::FromStr;

use crate::error::YamsError;

/// The classic four tracks, in play order.
pub const CLASSIC_TRACKS: [&str; 4] = ["Descente", "Montée", "Libre", "Premier"];

/// Trimmed name, or `None` when nothing is left.
pub fn sanitize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Fallback for a restored record at `index` (0-based).
pub fn positional_name(index: usize) -> String {
    format!("J{}", index + 1)
}

/// Default for a board added to a collection that already holds `count` boards.
pub fn new_board_name(count: usize) -> String {
    format!("Joueur {}", count + 1)
}

/// Board sets that replace a whole collection at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    ThreeTracks,
    FourTracks,
}

impl Preset {
    pub fn names(self) -> &'static [&'static str] {
        match self {
            Preset::ThreeTracks => &CLASSIC_TRACKS[..3],
            Preset::FourTracks => &CLASSIC_TRACKS[..],
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::ThreeTracks => write!(f, "three"),
            Preset::FourTracks => write!(f, "four"),
        }
    }
}

impl FromStr for Preset {
    type Err = YamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "three" | "3" => Ok(Preset::ThreeTracks),
            "four" | "4" => Ok(Preset::FourTracks),
            _ => Err(YamsError::InvalidChoice {
                what: "preset",
                value: s.to_string(),
                expected: "three, four",
            }),
        }
    }
}
