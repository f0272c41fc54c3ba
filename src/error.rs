//! Error types for Yams
//!
//! Library operations return `YamsResult`. Rejected score entries are not errors:
//! they come back as `EntryOutcome::Rejected` so the caller can flag the input.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Yams operations
pub type YamsResult<T> = Result<T, YamsError>;

/// Main error type for Yams operations
#[derive(Error, Debug)]
pub enum YamsError {
    /// Category id outside the fixed catalog
    #[error("unknown category '{id}'")]
    UnknownCategory { id: String },

    /// Board reference that matches no board of the session
    #[error("unknown board '{reference}'")]
    UnknownBoard { reference: String },

    /// Fixed-score toggle requested on a category scored by value
    #[error("category '{category}' is not a fixed-score category")]
    NotFixedScore { category: String },

    /// Fixed-score activation requested on a crossed slot
    #[error("category '{category}' is crossed; uncross it first")]
    SlotCrossed { category: String },

    /// Board name that is empty after trimming
    #[error("board name must not be empty")]
    EmptyName,

    /// Unparseable value for a closed set (mode, theme, preset)
    #[error("invalid {what} '{value}' (expected one of: {expected})")]
    InvalidChoice {
        what: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Config file that could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_category() {
        let err = YamsError::UnknownCategory {
            id: "sevens".to_string(),
        };
        assert_eq!(err.to_string(), "unknown category 'sevens'");
    }

    #[test]
    fn test_error_display_invalid_choice() {
        let err = YamsError::InvalidChoice {
            what: "mode",
            value: "solo".to_string(),
            expected: "multiplayer, multipiste",
        };
        assert_eq!(
            err.to_string(),
            "invalid mode 'solo' (expected one of: multiplayer, multipiste)"
        );
    }
}
