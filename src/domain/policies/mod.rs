//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain entities.

pub mod naming;

pub use naming::{Preset, CLASSIC_TRACKS};
