use std::fmt;

use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl SemanticColor {
    fn crossterm(self) -> crossterm::style::Color {
        match self {
            SemanticColor::Success => theme::colors::SUCCESS,
            SemanticColor::Error => theme::colors::ERROR,
            SemanticColor::Warning => theme::colors::WARNING,
            SemanticColor::Info => theme::colors::INFO,
            SemanticColor::Dim => theme::colors::DIM,
        }
    }
}

/// A piece of text with an optional semantic color and weight, rendered
/// plain when the terminal does not support color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(SemanticColor::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(SemanticColor::Error)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(SemanticColor::Warning)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(SemanticColor::Info)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(SemanticColor::Dim)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn with_color(mut self, color: SemanticColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        match self.color {
            None if !self.bold => self.text.clone(),
            None => format!("{}", self.text.as_str().bold()),
            Some(color) => {
                let mut styled = self.text.as_str().with(color.crossterm());
                if self.bold {
                    styled = styled.bold();
                }
                format!("{}", styled)
            }
        }
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
