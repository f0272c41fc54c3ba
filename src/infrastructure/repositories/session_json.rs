//! JSON Session Repository
//!
//! Persists the session at `<data dir>/yams/scores.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, warn};

use crate::domain::entities::Session;
use crate::domain::ports::{SessionRepository, StoreError};
use crate::infrastructure::fs::{probe_dir, write_atomic};

use super::session_document;

/// Environment variable overriding the state file location.
pub const STATE_PATH_ENV: &str = "YAMS_STATE_PATH";

pub struct JsonSessionRepository {
    path: PathBuf,
}

impl JsonSessionRepository {
    pub fn new() -> Self {
        Self {
            path: default_state_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    fn lock(&self) -> Result<fs::File, StoreError> {
        fs::create_dir_all(self.dir()).map_err(|e| StoreError::Access {
            message: e.to_string(),
        })?;
        let lock_file = fs::File::create(self.lock_path()).map_err(|e| StoreError::Access {
            message: e.to_string(),
        })?;
        lock_file.lock_exclusive().map_err(|e| StoreError::Access {
            message: e.to_string(),
        })?;
        Ok(lock_file)
    }
}

impl Default for JsonSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRepository for JsonSessionRepository {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Access {
                    message: e.to_string(),
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        match session_document::decode(&content) {
            Ok(session) => {
                debug!(path = %self.path.display(), "session loaded");
                Ok(Some(session))
            }
            Err(reason) => {
                warn!(
                    "ignoring malformed session in {}: {}",
                    self.path.display(),
                    reason
                );
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let content = session_document::encode(session).map_err(|e| StoreError::Serialization {
            message: e.to_string(),
        })?;

        let lock_file = self.lock()?;
        let result = write_atomic(&self.path, content.as_bytes()).map_err(|e| StoreError::Access {
            message: e.to_string(),
        });
        let _ = lock_file.unlock();

        if result.is_ok() {
            debug!(path = %self.path.display(), "session saved");
        }
        result
    }

    fn probe(&self) -> Result<(), StoreError> {
        probe_dir(self.dir()).map_err(|e| StoreError::Unavailable {
            message: format!("{}: {}", self.dir().display(), e),
        })
    }
}

/// `YAMS_STATE_PATH`, else `<data dir>/yams/scores.json`.
pub fn default_state_path() -> PathBuf {
    if let Ok(path) = std::env::var(STATE_PATH_ENV) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    dirs::data_dir()
        .map(|d| d.join("yams").join("scores.json"))
        .unwrap_or_else(|| PathBuf::from(".yams/scores.json"))
}
