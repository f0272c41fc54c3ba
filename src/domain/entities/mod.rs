//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Board` - One score sheet (player or track)
//! - `Session` - All boards, partitioned by group

mod board;
mod session;

pub use board::{cells_from_maps, Board, Cells};
pub(crate) use board::now_millis;
pub use session::{BoardRef, Session, SessionDefaults};
