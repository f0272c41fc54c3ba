//! Board identifier - the join key every other component uses for a board

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Prefix of generated ids; also how a CLI argument is recognised as an id.
pub const BOARD_ID_PREFIX: &str = "board-";

/// Opaque, stable board identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(String);

impl BoardId {
    /// Generate a fresh id: `board-<12 hex digits>-<epoch millis>`.
    pub fn generate() -> Self {
        let random = uuid::Uuid::new_v4().simple().to_string();
        Self(format!(
            "{}{}-{}",
            BOARD_ID_PREFIX,
            &random[..12],
            Utc::now().timestamp_millis()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for BoardId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BoardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
