//! Colour palette for teaching illustrations
//!
//! Illustrations reference a small set of symbolic colours (`bg`, `dark`,
//! `muted`, `light`, `primary`, plus status colours). A palette maps those
//! tokens to concrete values and can be loaded from TOML so the whole
//! catalog can be re-themed without touching the drawing code.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Stroke widths shared by every illustration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeWidths {
    pub thin: f64,
    pub normal: f64,
    pub thick: f64,
}

pub const STROKE_WIDTHS: StrokeWidths = StrokeWidths {
    thin: 1.0,
    normal: 1.5,
    thick: 2.0,
};

/// A palette mapping symbolic colours to concrete values
#[derive(Debug, Clone)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Colour mappings: token name -> CSS colour
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette - neutral greys with the course's Swiss red accent
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "Swiss"
description = "Neutral greys with a Swiss red accent"

[colors]
bg = "#fafafa"
dark = "#171717"
muted = "#737373"
light = "#d4d4d4"
primary = "#e63946"

success = "#16a34a"
warning = "#d97706"
error = "#dc2626"
info = "#2563eb"
"##;

impl Palette {
    /// Load palette from TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load palette from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;

        Ok(Palette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic colour to a concrete value
    ///
    /// Returns None if the token is not defined in this palette.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a symbolic colour with fallback to the default palette
    ///
    /// Fallback order:
    /// 1. This palette
    /// 2. The embedded default palette
    /// 3. `currentColor`, so unknown tokens still inherit the text colour
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        "currentColor".to_string()
    }

    pub fn bg(&self) -> String {
        self.resolve_or_default("bg")
    }

    pub fn dark(&self) -> String {
        self.resolve_or_default("dark")
    }

    pub fn muted(&self) -> String {
        self.resolve_or_default("muted")
    }

    pub fn light(&self) -> String {
        self.resolve_or_default("light")
    }

    pub fn primary(&self) -> String {
        self.resolve_or_default("primary")
    }

    pub fn success(&self) -> String {
        self.resolve_or_default("success")
    }

    pub fn warning(&self) -> String {
        self.resolve_or_default("warning")
    }

    pub fn error(&self) -> String {
        self.resolve_or_default("error")
    }

    pub fn info(&self) -> String {
        self.resolve_or_default("info")
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.name.as_deref(), Some("Swiss"));
        for token in ["bg", "dark", "muted", "light", "primary"] {
            assert!(palette.colors.contains_key(token), "missing {token}");
        }
    }

    #[test]
    fn test_resolve_existing_token() {
        let palette = Palette::default();
        assert_eq!(palette.resolve("primary"), Some("#e63946"));
        assert_eq!(palette.primary(), "#e63946");
    }

    #[test]
    fn test_resolve_missing_token() {
        let palette = Palette::default();
        assert_eq!(palette.resolve("nonexistent"), None);
        assert_eq!(palette.resolve_or_default("nonexistent"), "currentColor");
    }

    #[test]
    fn test_partial_palette_falls_back_to_defaults() {
        let palette = Palette::from_str(
            r##"
[colors]
primary = "#0055ff"
"##,
        )
        .expect("Should parse");
        assert_eq!(palette.primary(), "#0055ff");
        assert_eq!(palette.muted(), "#737373");
        assert_eq!(palette.name, None);
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Palette::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(PaletteError::ParseError(_))));
    }
}
