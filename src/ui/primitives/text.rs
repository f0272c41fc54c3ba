use std::fmt;

use crossterm::style::Stylize;

use crate::ui::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    pub fn new(text: impl Into<String>, color: Option<SemanticColor>) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Success))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Error))
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Warning))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Info))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, Some(SemanticColor::Dim))
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Render with `palette`, or as plain text when there is none.
    pub fn render(&self, palette: Option<&Palette>) -> String {
        let Some(palette) = palette else {
            return self.text.clone();
        };

        let color = match self.color {
            Some(SemanticColor::Success) => Some(palette.success),
            Some(SemanticColor::Error) => Some(palette.error),
            Some(SemanticColor::Warning) => Some(palette.warning),
            Some(SemanticColor::Info) => Some(palette.info),
            Some(SemanticColor::Dim) => Some(palette.dim),
            None => None,
        };

        let mut styled = self.text.as_str().stylize();
        if let Some(color) = color {
            styled = styled.with(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        if color.is_none() && !self.bold {
            return self.text.clone();
        }
        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
