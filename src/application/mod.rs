//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ScorecardUseCase` - Boards, entries, crossings, totals and mode of one session
//! - `PreferencesUseCase` - Display theme

pub mod preferences;
pub mod scorecard;

pub use preferences::PreferencesUseCase;
pub use scorecard::{BoardTotals, GroupTotals, ScorecardUseCase};
