//! Theme: the default style tokens components fall back to.
//!
//! A [`Theme`] can be built in code or loaded from TOML. Every key is
//! optional; missing keys keep their defaults.
//!
//! ```toml
//! page_background = "bg-slate-950"
//! element_width = "max-w-screen-lg"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors from loading or saving a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to read theme file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid theme: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Default style tokens for page and element chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Background of the page frame.
    pub page_background: String,
    /// Background of an element card.
    pub element_background: String,
    /// Colour of an element card's title.
    pub element_text_colour: String,
    /// Width constraint of an element card.
    pub element_width: String,
}

impl Theme {
    pub const PAGE_BACKGROUND: &'static str = "bg-black";
    pub const ELEMENT_BACKGROUND: &'static str = "bg-gray-800";
    pub const ELEMENT_TEXT_COLOUR: &'static str = "text-white";
    pub const ELEMENT_WIDTH: &'static str = "max-w-screen-md";

    /// Parse a theme from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(input)?)
    }

    /// Load a theme from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "loaded theme");
        Ok(theme)
    }

    /// Serialize the theme as TOML.
    pub fn to_toml_string(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string(self)?)
    }

    /// Set the page background (builder).
    pub fn with_page_background(mut self, token: impl Into<String>) -> Self {
        self.page_background = token.into();
        self
    }

    /// Set the element background (builder).
    pub fn with_element_background(mut self, token: impl Into<String>) -> Self {
        self.element_background = token.into();
        self
    }

    /// Set the element title colour (builder).
    pub fn with_element_text_colour(mut self, token: impl Into<String>) -> Self {
        self.element_text_colour = token.into();
        self
    }

    /// Set the element width constraint (builder).
    pub fn with_element_width(mut self, token: impl Into<String>) -> Self {
        self.element_width = token.into();
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            page_background: Self::PAGE_BACKGROUND.to_owned(),
            element_background: Self::ELEMENT_BACKGROUND.to_owned(),
            element_text_colour: Self::ELEMENT_TEXT_COLOUR.to_owned(),
            element_width: Self::ELEMENT_WIDTH.to_owned(),
        }
    }
}
