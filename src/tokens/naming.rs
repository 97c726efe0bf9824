//! Token name assembly under the three naming conventions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::catalog::{Category, DEFAULT_VARIANT};
use super::TokenError;

/// How the parts of a token name are ordered and abbreviated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingConvention {
    /// Category-Property-Context-Element-Modifier
    #[default]
    Explicit,
    /// Property-Context-Modifier
    Compact,
    /// Element-Property-Modifier
    ComponentFirst,
}

impl NamingConvention {
    pub const ALL: [NamingConvention; 3] = [
        NamingConvention::Explicit,
        NamingConvention::Compact,
        NamingConvention::ComponentFirst,
    ];

    pub fn id(self) -> &'static str {
        match self {
            NamingConvention::Explicit => "explicit",
            NamingConvention::Compact => "compact",
            NamingConvention::ComponentFirst => "component-first",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NamingConvention::Explicit => "Explicit",
            NamingConvention::Compact => "Compact",
            NamingConvention::ComponentFirst => "Component First",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NamingConvention::Explicit => "Category-Property-Context-Element-Modifier",
            NamingConvention::Compact => "Property-Context-Modifier",
            NamingConvention::ComponentFirst => "Element-Property-Modifier",
        }
    }

    pub fn example(self) -> &'static str {
        match self {
            NamingConvention::Explicit => "color-background-surface-card-hover",
            NamingConvention::Compact => "bg-surface-hover",
            NamingConvention::ComponentFirst => "card-bg-hover",
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for NamingConvention {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamingConvention::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| TokenError::UnknownConvention(s.to_string()))
    }
}

/// Property abbreviation for the compact convention
pub fn compact_abbreviation(property: &str) -> &str {
    match property {
        "background" => "bg",
        "foreground" => "fg",
        "font-size" => "text",
        "font-weight" => "weight",
        "line-height" => "leading",
        "letter-spacing" => "tracking",
        "padding" => "p",
        "margin" => "m",
        "radius" => "rounded",
        "border-width" => "border",
        other => other,
    }
}

/// Property abbreviation for the component-first convention
pub fn component_abbreviation(property: &str) -> &str {
    match property {
        "background" => "bg",
        "foreground" => "text",
        other => other,
    }
}

/// One selection tuple; every field except the convention may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenParts<'a> {
    pub category: Option<Category>,
    pub property: Option<&'a str>,
    pub context: Option<&'a str>,
    pub element: Option<&'a str>,
    pub variant: Option<&'a str>,
    pub state: Option<&'a str>,
}

/// Assemble a dash-joined token name
///
/// Absent parts are skipped and the `default` variant never appears.
/// An empty selection yields an empty string.
pub fn build_token_name(parts: &TokenParts<'_>, convention: NamingConvention) -> String {
    let variant = parts.variant.filter(|v| *v != DEFAULT_VARIANT);
    let segments: Vec<&str> = match convention {
        NamingConvention::Explicit => vec![
            parts.category.map(Category::id),
            parts.property,
            parts.context,
            parts.element,
            variant,
            parts.state,
        ],
        NamingConvention::Compact => vec![
            parts.property.map(compact_abbreviation),
            parts.context,
            parts.element,
            variant,
            parts.state,
        ],
        NamingConvention::ComponentFirst => vec![
            parts.element,
            parts.property.map(component_abbreviation),
            variant,
            parts.state,
        ],
    }
    .into_iter()
    .flatten()
    .filter(|s| !s.is_empty())
    .collect();
    segments.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card_background() -> TokenParts<'static> {
        TokenParts {
            category: Some(Category::Color),
            property: Some("background"),
            context: Some("surface"),
            element: Some("card"),
            variant: Some("default"),
            state: None,
        }
    }

    #[test]
    fn test_explicit() {
        assert_eq!(
            build_token_name(&card_background(), NamingConvention::Explicit),
            "color-background-surface-card"
        );
    }

    #[test]
    fn test_compact_with_state() {
        let parts = TokenParts {
            state: Some("hover"),
            ..card_background()
        };
        assert_eq!(build_token_name(&parts, NamingConvention::Compact), "bg-surface-card-hover");
    }

    #[test]
    fn test_component_first_drops_context() {
        let parts = TokenParts {
            variant: Some("subtle"),
            state: Some("focus"),
            ..card_background()
        };
        assert_eq!(
            build_token_name(&parts, NamingConvention::ComponentFirst),
            "card-bg-subtle-focus"
        );
    }

    #[test]
    fn test_conventions_use_different_abbreviations() {
        assert_eq!(compact_abbreviation("foreground"), "fg");
        assert_eq!(component_abbreviation("foreground"), "text");
        assert_eq!(compact_abbreviation("font-size"), "text");
        assert_eq!(component_abbreviation("font-size"), "font-size");
        assert_eq!(compact_abbreviation("radius"), "rounded");
    }

    #[test]
    fn test_empty_selection() {
        for convention in NamingConvention::ALL {
            assert_eq!(build_token_name(&TokenParts::default(), convention), "");
        }
    }

    #[test]
    fn test_default_variant_never_present() {
        for category in Category::ALL {
            for property in category.properties() {
                for convention in NamingConvention::ALL {
                    let parts = TokenParts {
                        category: Some(category),
                        property: Some(property.id),
                        variant: Some("default"),
                        ..Default::default()
                    };
                    let name = build_token_name(&parts, convention);
                    assert!(!name.split('-').any(|s| s == "default"), "{name}");
                }
            }
        }
    }

    #[test]
    fn test_convention_parse() {
        assert_eq!(
            "component-first".parse::<NamingConvention>().unwrap(),
            NamingConvention::ComponentFirst
        );
        assert!("kebab".parse::<NamingConvention>().is_err());
    }
}
