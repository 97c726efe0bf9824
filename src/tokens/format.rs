//! Output formats for token names

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::catalog::Category;
use super::TokenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// CSS custom property
    #[default]
    #[serde(rename = "css")]
    Css,
    /// JS/TS identifier
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "json")]
    Json,
    /// Slash-separated style path
    #[serde(rename = "figma")]
    Figma,
    /// W3C Design Tokens Community Group JSON
    #[serde(rename = "dtcg")]
    Dtcg,
    #[serde(rename = "figma-variables")]
    FigmaVariables,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Css,
        OutputFormat::CamelCase,
        OutputFormat::Json,
        OutputFormat::Figma,
        OutputFormat::Dtcg,
        OutputFormat::FigmaVariables,
    ];

    pub fn id(self) -> &'static str {
        match self {
            OutputFormat::Css => "css",
            OutputFormat::CamelCase => "camelCase",
            OutputFormat::Json => "json",
            OutputFormat::Figma => "figma",
            OutputFormat::Dtcg => "dtcg",
            OutputFormat::FigmaVariables => "figma-variables",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Css => "CSS",
            OutputFormat::CamelCase => "JS/TS",
            OutputFormat::Json => "JSON",
            OutputFormat::Figma => "Figma",
            OutputFormat::Dtcg => "W3C DTCG",
            OutputFormat::FigmaVariables => "Figma Variables",
        }
    }

    /// Formats whose names are dot paths
    pub fn is_dotted(self) -> bool {
        matches!(
            self,
            OutputFormat::Json | OutputFormat::Dtcg | OutputFormat::FigmaVariables
        )
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for OutputFormat {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| TokenError::UnknownFormat(s.to_string()))
    }
}

/// Uppercase the first character of a segment
pub(crate) fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join segments as lowerCamelCase
pub(crate) fn camel_join<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    segments
        .into_iter()
        .enumerate()
        .map(|(i, s)| if i == 0 { s.to_string() } else { capitalize(s) })
        .collect()
}

/// Render a dash-joined name in the given output format
pub fn format_token_name(name: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Css => format!("--{name}"),
        OutputFormat::CamelCase => camel_join(name.split('-')),
        OutputFormat::Json | OutputFormat::Dtcg | OutputFormat::FigmaVariables => name.replace('-', "."),
        OutputFormat::Figma => name.split('-').map(capitalize).collect::<Vec<_>>().join("/"),
    }
}

/// DTCG `$type` for a category
pub fn token_type(category: Option<Category>) -> &'static str {
    match category {
        Some(Category::Typography) | Some(Category::Spacing) => "dimension",
        Some(Category::Effects) => "shadow",
        Some(Category::Color) | None => "color",
    }
}

/// Figma variable `resolvedType` for a category
pub fn figma_type(category: Option<Category>) -> &'static str {
    match category {
        Some(Category::Typography) | Some(Category::Spacing) | Some(Category::Effects) => "FLOAT",
        Some(Category::Color) | None => "COLOR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NAME: &str = "color-background-surface-card-hover";

    #[test]
    fn test_css() {
        assert_eq!(format_token_name(NAME, OutputFormat::Css), "--color-background-surface-card-hover");
    }

    #[test]
    fn test_camel_case() {
        let camel = format_token_name(NAME, OutputFormat::CamelCase);
        assert_eq!(camel, "colorBackgroundSurfaceCardHover");
        assert!(!camel.contains('-'));
        assert_eq!(format_token_name("text-heading-h1", OutputFormat::CamelCase), "textHeadingH1");
    }

    #[test]
    fn test_dotted_formats() {
        for format in [OutputFormat::Json, OutputFormat::Dtcg, OutputFormat::FigmaVariables] {
            assert!(format.is_dotted());
            assert_eq!(format_token_name(NAME, format), "color.background.surface.card.hover");
        }
    }

    #[test]
    fn test_figma() {
        assert_eq!(
            format_token_name("bg-surface-card", OutputFormat::Figma),
            "Bg/Surface/Card"
        );
    }

    #[test]
    fn test_types() {
        assert_eq!(token_type(Some(Category::Spacing)), "dimension");
        assert_eq!(token_type(Some(Category::Effects)), "shadow");
        assert_eq!(token_type(None), "color");
        assert_eq!(figma_type(Some(Category::Effects)), "FLOAT");
        assert_eq!(figma_type(Some(Category::Color)), "COLOR");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("camelCase".parse::<OutputFormat>().unwrap(), OutputFormat::CamelCase);
        assert_eq!(
            "figma-variables".parse::<OutputFormat>().unwrap(),
            OutputFormat::FigmaVariables
        );
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
