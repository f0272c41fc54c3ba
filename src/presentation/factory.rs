//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{PreferencesUseCase, ScorecardUseCase};
use crate::config::Config;
use crate::domain::ports::{PreferenceRepository, SessionRepository};
use crate::infrastructure::repositories::default_state_path;
use crate::infrastructure::{
    JsonSessionRepository, MemoryPreferenceRepository, MemorySessionRepository,
    TomlPreferenceRepository,
};

/// Storage choices resolved from CLI flags and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageOptions {
    /// `None` when scores stay in memory
    pub state_path: Option<PathBuf>,
}

impl StorageOptions {
    /// CLI flags win over config (which already carries environment overrides).
    pub fn resolve(config: &Config, state_file: Option<PathBuf>, no_persist: bool) -> Self {
        if no_persist || !config.storage.enabled {
            return Self { state_path: None };
        }
        let path = state_file
            .or_else(|| config.storage.path.clone())
            .unwrap_or_else(default_state_path);
        Self {
            state_path: Some(path),
        }
    }

    /// Preferences live next to the state file.
    pub fn preferences_path(&self) -> Option<PathBuf> {
        self.state_path
            .as_deref()
            .map(|p| sibling(p, "preferences.toml"))
    }
}

fn sibling(path: &Path, name: &str) -> PathBuf {
    match path.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// JSON repository when its directory passes the write probe, in-memory otherwise.
pub fn create_session_repository(options: &StorageOptions) -> Arc<dyn SessionRepository> {
    let Some(path) = options.state_path.clone() else {
        debug!("persistence disabled, keeping scores in memory");
        return Arc::new(MemorySessionRepository::new());
    };

    let repo = JsonSessionRepository::with_path(path);
    match repo.probe() {
        Ok(()) => {
            debug!(path = %repo.path().display(), "using state file");
            Arc::new(repo)
        }
        Err(e) => {
            warn!("{}; scores will not be kept after this run", e);
            Arc::new(MemorySessionRepository::new())
        }
    }
}

pub fn create_preference_repository(options: &StorageOptions) -> Arc<dyn PreferenceRepository> {
    match options.preferences_path() {
        Some(path) => Arc::new(TomlPreferenceRepository::with_path(path)),
        None => Arc::new(MemoryPreferenceRepository::default()),
    }
}

/// Open the scorecard with all dependencies wired up.
pub fn create_scorecard_use_case(config: &Config, options: &StorageOptions) -> ScorecardUseCase {
    ScorecardUseCase::open(
        create_session_repository(options),
        &config.session_defaults(),
    )
}

pub fn create_preferences_use_case(options: &StorageOptions) -> PreferencesUseCase {
    PreferencesUseCase::new(create_preference_repository(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn no_persist_wins() {
        let options =
            StorageOptions::resolve(&Config::default(), Some(PathBuf::from("/x/s.json")), true);
        assert_eq!(options.state_path, None);
        assert_eq!(options.preferences_path(), None);
    }

    #[test]
    fn disabled_storage_in_config() {
        let mut config = Config::default();
        config.storage.enabled = false;
        assert_eq!(StorageOptions::resolve(&config, None, false).state_path, None);
    }

    #[test]
    fn cli_path_beats_config_path() {
        let mut config = Config::default();
        config.storage.path = Some(PathBuf::from("/config/s.json"));

        let options = StorageOptions::resolve(&config, Some(PathBuf::from("/cli/s.json")), false);
        assert_eq!(options.state_path, Some(PathBuf::from("/cli/s.json")));
        assert_eq!(
            options.preferences_path(),
            Some(PathBuf::from("/cli/preferences.toml"))
        );

        let options = StorageOptions::resolve(&config, None, false);
        assert_eq!(options.state_path, Some(PathBuf::from("/config/s.json")));
    }

    #[test]
    fn unwritable_dir_falls_back_to_memory() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let options = StorageOptions {
            state_path: Some(blocker.join("scores.json")),
        };
        let mut use_case = create_scorecard_use_case(&Config::default(), &options);
        use_case.create_board(Some("Alice"));
        assert_eq!(use_case.boards().len(), 5);
        assert!(!blocker.join("scores.json").exists());
    }
}
