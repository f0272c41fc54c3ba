//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output shapes for `--json`
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Serializable views
//!
//! ## Usage
//!
//! ```ignore
//! use yams::presentation::factory::{self, StorageOptions};
//!
//! let options = StorageOptions::resolve(&config, None, false);
//! let mut scorecard = factory::create_scorecard_use_case(&config, &options);
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands, ThemeAction};
pub use factory::{create_scorecard_use_case, StorageOptions};
