//! In-memory Session Repository
//!
//! Used when persistence is disabled or the storage probe failed. Nothing
//! survives the process.

use std::sync::Mutex;

use crate::domain::entities::Session;
use crate::domain::ports::{PreferenceRepository, SessionRepository, StoreError};
use crate::domain::value_objects::Theme;

#[derive(Default)]
pub struct MemorySessionRepository {
    session: Mutex<Option<Session>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already stored session.
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, Option<Session>>, StoreError> {
        self.session.lock().map_err(|e| StoreError::Access {
            message: e.to_string(),
        })
    }
}

impl SessionRepository for MemorySessionRepository {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        Ok(self.guard()?.clone())
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        *self.guard()? = Some(session.clone());
        Ok(())
    }

    fn probe(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Theme kept for the run only.
#[derive(Default)]
pub struct MemoryPreferenceRepository {
    theme: Mutex<Theme>,
}

impl PreferenceRepository for MemoryPreferenceRepository {
    fn theme(&self) -> Result<Theme, StoreError> {
        self.theme.lock().map(|t| *t).map_err(|e| StoreError::Access {
            message: e.to_string(),
        })
    }

    fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        let mut guard = self.theme.lock().map_err(|e| StoreError::Access {
            message: e.to_string(),
        })?;
        *guard = theme;
        Ok(())
    }
}
