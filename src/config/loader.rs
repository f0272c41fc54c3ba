//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::BoardGroup;
use crate::error::{YamsError, YamsResult};

use super::types::{Config, Verbosity};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "YAMS_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key the config schema does not know
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// A file that could not be read or parsed; defaults were used instead
    Unreadable { file: PathBuf, message: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::Unreadable { file, message } => {
                write!(
                    f,
                    "ignoring config {} (using defaults): {}",
                    file.display(),
                    message
                )
            }
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> YamsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| YamsError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `YAMS_CONFIG` or the user config, falling back to defaults, then apply
/// environment overrides. Never fails: problems come back as warnings.
pub fn load_or_default() -> (Config, Vec<ConfigWarning>) {
    let (config, warnings) = match config_path() {
        Some(path) if path.exists() => match load_with_warnings(&path) {
            Ok(loaded) => loaded,
            Err(e) => (
                Config::default(),
                vec![ConfigWarning::Unreadable {
                    file: path,
                    message: e.to_string(),
                }],
            ),
        },
        _ => (Config::default(), Vec::new()),
    };
    (with_env_overrides(config), warnings)
}

/// Apply environment variable overrides (YAMS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Same as [`with_env_overrides`] with an injectable environment.
pub fn with_env_overrides_from<F>(mut config: Config, env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // YAMS_STATE_PATH
    if let Some(path) = env("YAMS_STATE_PATH").filter(|p| !p.trim().is_empty()) {
        config.storage.path = Some(PathBuf::from(path));
    }

    // YAMS_NO_PERSIST
    if let Some(val) = env("YAMS_NO_PERSIST") {
        let val = val.trim().to_lowercase();
        if !val.is_empty() && val != "0" && val != "false" {
            config.storage.enabled = false;
        }
    }

    // YAMS_VERBOSITY
    if let Some(verbosity) = env("YAMS_VERBOSITY") {
        config.output.verbosity = Verbosity::from_env(&verbosity);
    }

    // YAMS_DEFAULT_MODE (ignored when unparseable)
    if let Some(mode) = env("YAMS_DEFAULT_MODE") {
        if let Ok(mode) = mode.parse::<BoardGroup>() {
            config.session.default_mode = mode;
        }
    }

    config
}

/// `YAMS_CONFIG`, else `<config dir>/yams/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs_config_dir().map(|d| d.join("yams").join("config.toml"))
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "enabled",
        "path",
        "session",
        "default_mode",
        "default_tracks",
        "output",
        "verbosity",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
