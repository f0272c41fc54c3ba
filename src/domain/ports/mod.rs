//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod preference_repository;
pub mod session_repository;

pub use preference_repository::PreferenceRepository;
pub use session_repository::{SessionRepository, StoreError};
