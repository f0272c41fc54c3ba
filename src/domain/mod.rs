//! Domain Layer
//!
//! This is the core of Yams - the scoring rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Board, Session)
//! - `value_objects/` - Immutable value types (CategoryId, CellState, BoardGroup, Theme)
//! - `services/` - Domain services (EntryValidator, Crossing, Totals)
//! - `policies/` - Business rules (naming, presets)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
