//! SessionRepository port
//!
//! Persists the whole session (both board groups and the active mode) as one
//! document. Implementations decide where; the application only loads once at
//! startup and saves after every mutation.

use crate::domain::entities::Session;

pub trait SessionRepository: Send + Sync {
    /// Load the last saved session.
    ///
    /// `Ok(None)` when nothing usable is stored (missing, or not a session
    /// document at all). Individual malformed records are repaired, not reported.
    fn load(&self) -> Result<Option<Session>, StoreError>;

    /// Overwrite the stored session.
    fn save(&self, session: &Session) -> Result<(), StoreError>;

    /// Check that the store can be written to and cleaned up.
    fn probe(&self) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage is unavailable: {message}")]
    Unavailable { message: String },

    #[error("failed to access storage: {message}")]
    Access { message: String },

    #[error("failed to serialize session: {message}")]
    Serialization { message: String },
}
