use crossterm::style::Color;

use yams::Theme;

/// Semantic colors for one display theme.
///
/// Dark terminals get the bright variants, light ones the saturated dark ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub dim: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                success: Color::DarkGreen,
                error: Color::DarkRed,
                warning: Color::DarkYellow,
                info: Color::DarkCyan,
                dim: Color::DarkGrey,
            },
            Theme::Dark => Self {
                success: Color::Green,
                error: Color::Red,
                warning: Color::Yellow,
                info: Color::Cyan,
                dim: Color::Grey,
            },
        }
    }
}

pub mod icons {
    pub const CROSSED: &str = "✗";
    pub const OPEN: &str = "·";
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const SEPARATOR: &str = "─";
}

pub mod icons_ascii {
    pub const CROSSED: &str = "x";
    pub const OPEN: &str = ".";
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[ERROR]";
    pub const SEPARATOR: &str = "-";
}

/// Icon set for the current terminal.
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    pub crossed: &'static str,
    pub open: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub separator: &'static str,
}

impl Icons {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                crossed: icons::CROSSED,
                open: icons::OPEN,
                success: icons::SUCCESS,
                error: icons::ERROR,
                separator: icons::SEPARATOR,
            }
        } else {
            Self {
                crossed: icons_ascii::CROSSED,
                open: icons_ascii::OPEN,
                success: icons_ascii::SUCCESS,
                error: icons_ascii::ERROR,
                separator: icons_ascii::SEPARATOR,
            }
        }
    }
}
