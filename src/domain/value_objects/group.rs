//! Board group - which collection a board belongs to
//!
//! - `Multiplayer`: one board per player
//! - `Multipiste`: one board per track of a single player ("Descente", "Montée", ...)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::YamsError;

/// Collection a board belongs to. Immutable once the board exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BoardGroup {
    Multiplayer,
    #[default]
    Multipiste,
}

impl BoardGroup {
    pub const ALL: [BoardGroup; 2] = [BoardGroup::Multiplayer, BoardGroup::Multipiste];

    pub fn as_str(self) -> &'static str {
        match self {
            BoardGroup::Multiplayer => "multiplayer",
            BoardGroup::Multipiste => "multipiste",
        }
    }

    /// Lenient parse used by the persistence loader.
    pub fn from_stored(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl fmt::Display for BoardGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoardGroup {
    type Err = YamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "multiplayer" | "players" => Ok(BoardGroup::Multiplayer),
            "multipiste" | "tracks" => Ok(BoardGroup::Multipiste),
            _ => Err(YamsError::InvalidChoice {
                what: "mode",
                value: s.to_string(),
                expected: "multiplayer, multipiste",
            }),
        }
    }
}
