//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Atomic writes and the storage probe
//! - `repositories/` - Repository implementations (JSON session, TOML preferences, in-memory)

pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use repositories::{
    JsonSessionRepository, MemoryPreferenceRepository, MemorySessionRepository,
    TomlPreferenceRepository,
};
