use yams::config::{ColorMode, Config};
use yams::presentation::ColorWhen;
use yams::Theme;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::{Icons, Palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub theme: Theme,
}

impl UiContext {
    pub fn new(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        theme: Theme,
    ) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, config, theme, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        theme: Theme,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbose,
            caps,
            color,
            unicode,
            theme,
        }
    }

    /// Palette to render with, `None` when color is off.
    pub fn palette(&self) -> Option<Palette> {
        self.color.then(|| Palette::for_theme(self.theme))
    }

    pub fn icons(&self) -> Icons {
        Icons::new(self.unicode)
    }
}
