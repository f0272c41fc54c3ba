//! Preferences Use Case
//!
//! Theme get/set/toggle. An unreadable store reads as the default theme.

use std::sync::Arc;

use tracing::warn;

use crate::domain::ports::{PreferenceRepository, StoreError};
use crate::domain::value_objects::Theme;

pub struct PreferencesUseCase {
    repository: Arc<dyn PreferenceRepository>,
}

impl PreferencesUseCase {
    pub fn new(repository: Arc<dyn PreferenceRepository>) -> Self {
        Self { repository }
    }

    pub fn theme(&self) -> Theme {
        self.repository.theme().unwrap_or_else(|e| {
            warn!("failed to read theme preference: {}", e);
            Theme::default()
        })
    }

    pub fn set_theme(&self, theme: Theme) -> Result<Theme, StoreError> {
        self.repository.set_theme(theme)?;
        Ok(theme)
    }

    /// Flip between light and dark; returns the new theme.
    pub fn toggle_theme(&self) -> Result<Theme, StoreError> {
        self.set_theme(self.theme().toggled())
    }
}
