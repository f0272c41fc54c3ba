//! Configuration module for Yams
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (YAMS_*)
//! 3. User config (`$YAMS_CONFIG` or `~/.config/yams/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{config_path, with_env_overrides_from, ConfigWarning, CONFIG_PATH_ENV};
pub use types::{ColorMode, Config, OutputConfig, SessionConfig, StorageConfig, Verbosity};
