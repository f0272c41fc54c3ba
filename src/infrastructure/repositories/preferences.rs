//! TOML Preference Repository
//!
//! Persists display preferences at `<data dir>/yams/preferences.toml`:
//!
//! ```toml
//! theme = "dark"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::ports::{PreferenceRepository, StoreError};
use crate::domain::value_objects::Theme;
use crate::infrastructure::fs::write_atomic;

#[derive(Debug, Default, Serialize, Deserialize)]
struct TomlPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

pub struct TomlPreferenceRepository {
    path: PathBuf,
}

impl TomlPreferenceRepository {
    pub fn new() -> Self {
        Self {
            path: default_preferences_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<TomlPreferences, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(TomlPreferences::default()),
            Err(e) => {
                return Err(StoreError::Access {
                    message: e.to_string(),
                })
            }
        };

        Ok(toml::from_str(&content).unwrap_or_else(|e| {
            warn!("ignoring unreadable preferences in {}: {}", self.path.display(), e);
            TomlPreferences::default()
        }))
    }
}

impl Default for TomlPreferenceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceRepository for TomlPreferenceRepository {
    fn theme(&self) -> Result<Theme, StoreError> {
        Ok(self
            .read()?
            .theme
            .as_deref()
            .map(Theme::from_stored)
            .unwrap_or_default())
    }

    fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        let prefs = TomlPreferences {
            theme: Some(theme.as_str().to_string()),
        };
        let content = toml::to_string_pretty(&prefs).map_err(|e| StoreError::Serialization {
            message: e.to_string(),
        })?;
        write_atomic(&self.path, content.as_bytes()).map_err(|e| StoreError::Access {
            message: e.to_string(),
        })
    }
}

/// Next to the state file: `<data dir>/yams/preferences.toml`.
pub fn default_preferences_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("yams").join("preferences.toml"))
        .unwrap_or_else(|| PathBuf::from(".yams/preferences.toml"))
}
