//! Common test utilities for Yams contract and scenario tests.
//!
//! - `TestEnv`: isolated state directory plus helpers to run the `yams` binary
//! - `scorecard`: in-memory scorecard for library-level journeys

#![allow(dead_code)]

pub mod env;

pub use env::*;

use std::sync::Arc;

use yams::infrastructure::MemorySessionRepository;
use yams::{ScorecardUseCase, Session, SessionDefaults};

/// Scorecard over an in-memory store, starting from the default session.
pub fn scorecard() -> ScorecardUseCase {
    ScorecardUseCase::new(
        Session::from_defaults(&SessionDefaults::default()),
        Arc::new(MemorySessionRepository::new()),
    )
}
