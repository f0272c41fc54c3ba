//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod memory;
mod preferences;
pub mod session_document;
mod session_json;

pub use memory::{MemoryPreferenceRepository, MemorySessionRepository};
pub use preferences::{default_preferences_path, TomlPreferenceRepository};
pub use session_json::{default_state_path, JsonSessionRepository, STATE_PATH_ENV};
