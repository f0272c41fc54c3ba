//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod board_id;
pub mod category;
mod cell;
mod group;
mod theme;

pub use board_id::{BoardId, BOARD_ID_PREFIX};
pub use category::{
    lower_section, upper_section, Category, CategoryId, CategoryKind, CATALOG, CATEGORY_COUNT,
    UPPER_COUNT,
};
pub use cell::{CellState, MAX_ENTRY};
pub use group::BoardGroup;
pub use theme::Theme;
