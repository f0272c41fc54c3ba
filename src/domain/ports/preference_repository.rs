//! PreferenceRepository port
//!
//! Display preferences kept apart from the score data.

use crate::domain::value_objects::Theme;

use super::StoreError;

pub trait PreferenceRepository: Send + Sync {
    /// Stored theme, or the default when none is stored.
    fn theme(&self) -> Result<Theme, StoreError>;

    fn set_theme(&self, theme: Theme) -> Result<(), StoreError>;
}
