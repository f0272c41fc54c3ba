//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --state-file, --no-persist) are inherited by all subcommands
//! - Boards are addressed by id (`board-...`), 1-based position, or name
//! - Running without a subcommand shows the active boards

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::policies::Preset;
use crate::domain::value_objects::{BoardGroup, CategoryId};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

/// Yams - scorecard for Yams (Yahtzee) games
#[derive(Parser, Debug)]
#[command(name = "yams")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'yams' without arguments to show the current boards.")]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// State file (overrides YAMS_STATE_PATH and config)
    #[arg(long, global = true, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// Keep scores in memory for this run only
    #[arg(long, global = true)]
    pub no_persist: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the active boards with their totals
    Show,

    /// Add a board to the active group
    Add {
        /// Board name (defaults to "Joueur N")
        name: Option<String>,
    },

    /// Rename a board
    Rename {
        /// Board id, position or name
        board: String,
        /// New name
        name: String,
    },

    /// Delete a board
    Delete {
        /// Board id, position or name
        board: String,
    },

    /// Clear the entries and crossings of a board
    Reset {
        /// Board id, position or name
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        board: Option<String>,

        /// Reset every board of the active group
        #[arg(long)]
        all: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Enter a score
    Set {
        /// Board id, position or name
        board: String,
        /// Category (e.g. ones, threeKind, chance)
        category: CategoryId,
        /// Raw value; empty or 0 clears the slot
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Toggle a fixed-score category (full house, straights, yams)
    Fixed {
        /// Board id, position or name
        board: String,
        /// Fixed-score category
        category: CategoryId,
        /// Cross mode: cross/uncross the slot instead
        #[arg(long)]
        cross: bool,
    },

    /// Cross (forfeit) a slot, or uncross it
    Cross {
        /// Board id, position or name
        board: String,
        /// Category
        category: CategoryId,
    },

    /// Show or switch the active group
    Mode {
        /// multiplayer or multipiste
        mode: Option<BoardGroup>,
    },

    /// Replace the active boards with the classic tracks
    Preset {
        /// three or four
        preset: Preset,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every board of the active group
    ClearBoards {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or change the display theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },

    /// List the scoring categories
    Categories,
}
