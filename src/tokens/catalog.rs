//! Option catalog for the token naming tool
//!
//! Everything the builder can offer for selection: categories, their
//! properties, contexts (with suggested elements) and elements, plus the
//! variant, state and scale modifiers. The data is static; the builder only
//! ever stores ids that point into it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TokenError;

/// Top-level token category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Color,
    Typography,
    Spacing,
    Effects,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Color,
        Category::Typography,
        Category::Spacing,
        Category::Effects,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Color => "color",
            Category::Typography => "typography",
            Category::Spacing => "spacing",
            Category::Effects => "effects",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Color => "Colour",
            Category::Typography => "Typography",
            Category::Spacing => "Spacing",
            Category::Effects => "Effects",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Color => "Background, text, border, and icon colours",
            Category::Typography => "Font sizes, weights, and line heights",
            Category::Spacing => "Padding, margin, and gap values",
            Category::Effects => "Shadows, borders, and radii",
        }
    }

    pub fn properties(self) -> &'static [OptionInfo] {
        match self {
            Category::Color => COLOR_PROPERTIES,
            Category::Typography => TYPOGRAPHY_PROPERTIES,
            Category::Spacing => SPACING_PROPERTIES,
            Category::Effects => EFFECTS_PROPERTIES,
        }
    }

    pub fn contexts(self) -> &'static [ContextInfo] {
        match self {
            Category::Color => COLOR_CONTEXTS,
            Category::Typography => TYPOGRAPHY_CONTEXTS,
            Category::Spacing => SPACING_CONTEXTS,
            Category::Effects => EFFECTS_CONTEXTS,
        }
    }

    pub fn elements(self) -> &'static [ElementInfo] {
        match self {
            Category::Color => COLOR_ELEMENTS,
            Category::Typography => TYPOGRAPHY_ELEMENTS,
            Category::Spacing => SPACING_ELEMENTS,
            Category::Effects => EFFECTS_ELEMENTS,
        }
    }

    /// Properties used when a builder-mode component includes this category
    pub fn default_properties(self) -> &'static [&'static str] {
        match self {
            Category::Color => &["background", "foreground", "border"],
            Category::Typography => &["font-size", "font-weight", "line-height"],
            Category::Spacing => &["padding", "gap"],
            Category::Effects => &["shadow", "radius"],
        }
    }

    /// Find a context of this category by id
    pub fn context(self, id: &str) -> Option<&'static ContextInfo> {
        self.contexts().iter().find(|c| c.id == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| TokenError::UnknownCategory(s.to_string()))
    }
}

/// A selectable property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// A selectable context, with the elements it usually pairs with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub suggested_elements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementInfo {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    Variant,
    State,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ModifierKind,
}

const fn prop(id: &'static str, label: &'static str, description: &'static str) -> OptionInfo {
    OptionInfo {
        id,
        label,
        description,
    }
}

const fn ctx(
    id: &'static str,
    label: &'static str,
    description: &'static str,
    suggested_elements: &'static [&'static str],
) -> ContextInfo {
    ContextInfo {
        id,
        label,
        description,
        suggested_elements,
    }
}

const fn el(id: &'static str, label: &'static str) -> ElementInfo {
    ElementInfo { id, label }
}

const fn variant(id: &'static str, label: &'static str) -> Modifier {
    Modifier {
        id,
        label,
        kind: ModifierKind::Variant,
    }
}

const fn state(id: &'static str, label: &'static str) -> Modifier {
    Modifier {
        id,
        label,
        kind: ModifierKind::State,
    }
}

const fn scale(id: &'static str) -> Modifier {
    Modifier {
        id,
        label: id,
        kind: ModifierKind::Scale,
    }
}

const COLOR_PROPERTIES: &[OptionInfo] = &[
    prop("background", "Background", "Fill colours for surfaces and elements"),
    prop("foreground", "Foreground", "Text and content colours"),
    prop("border", "Border", "Stroke and outline colours"),
    prop("icon", "Icon", "Icon and symbol colours"),
];

const TYPOGRAPHY_PROPERTIES: &[OptionInfo] = &[
    prop("font-size", "Font Size", "Text size values"),
    prop("font-weight", "Font Weight", "Text boldness values"),
    prop("line-height", "Line Height", "Vertical spacing between lines"),
    prop("letter-spacing", "Letter Spacing", "Horizontal spacing between characters"),
];

const SPACING_PROPERTIES: &[OptionInfo] = &[
    prop("padding", "Padding", "Internal spacing within elements"),
    prop("margin", "Margin", "External spacing around elements"),
    prop("gap", "Gap", "Spacing between flex/grid items"),
];

const EFFECTS_PROPERTIES: &[OptionInfo] = &[
    prop("shadow", "Shadow", "Drop and box shadows"),
    prop("radius", "Radius", "Corner rounding values"),
    prop("border-width", "Border Width", "Stroke thickness values"),
];

const COLOR_CONTEXTS: &[ContextInfo] = &[
    ctx("surface", "Surface", "Cards, modals, page backgrounds", &["page", "card", "modal", "popover", "dropdown"]),
    ctx("interactive", "Interactive", "Buttons, links, inputs", &["button", "link", "input", "select", "checkbox"]),
    ctx("brand", "Brand", "Primary, secondary, accent colours", &["primary", "secondary", "accent"]),
    ctx("feedback", "Feedback", "Success, warning, error states", &["success", "warning", "error", "info"]),
];

const TYPOGRAPHY_CONTEXTS: &[ContextInfo] = &[
    ctx("heading", "Heading", "Titles and section headers", &["h1", "h2", "h3", "h4", "display"]),
    ctx("body", "Body", "Paragraphs and running text", &["default", "large", "small"]),
    ctx("label", "Label", "Form labels and captions", &["default", "small"]),
    ctx("ui", "UI", "Buttons, navigation, controls", &["button", "nav", "tab", "badge"]),
];

const SPACING_CONTEXTS: &[ContextInfo] = &[
    ctx("component", "Component", "Internal component spacing", &["button", "card", "input", "badge"]),
    ctx("layout", "Layout", "Page and section spacing", &["section", "container", "stack"]),
    ctx("inline", "Inline", "Spacing between inline elements", &["icon", "text", "badge"]),
];

const EFFECTS_CONTEXTS: &[ContextInfo] = &[
    ctx("elevation", "Elevation", "Layered shadow depths", &["card", "modal", "dropdown", "tooltip"]),
    ctx("component", "Component", "Component-specific effects", &["button", "input", "card", "badge"]),
];

const COLOR_ELEMENTS: &[ElementInfo] = &[
    el("page", "Page"),
    el("card", "Card"),
    el("modal", "Modal"),
    el("button", "Button"),
    el("link", "Link"),
    el("input", "Input"),
    el("nav", "Navigation"),
    el("badge", "Badge"),
    el("tooltip", "Tooltip"),
];

const TYPOGRAPHY_ELEMENTS: &[ElementInfo] = &[
    el("display", "Display"),
    el("title", "Title"),
    el("subtitle", "Subtitle"),
    el("body", "Body"),
    el("caption", "Caption"),
    el("overline", "Overline"),
];

const SPACING_ELEMENTS: &[ElementInfo] = &[
    el("xs", "XS"),
    el("sm", "SM"),
    el("md", "MD"),
    el("lg", "LG"),
    el("xl", "XL"),
];

const EFFECTS_ELEMENTS: &[ElementInfo] = &[
    el("sm", "Small"),
    el("md", "Medium"),
    el("lg", "Large"),
    el("xl", "Extra Large"),
];

pub const VARIANTS: &[Modifier] = &[
    variant("default", "Default"),
    variant("subtle", "Subtle"),
    variant("emphasis", "Emphasis"),
    variant("muted", "Muted"),
    variant("inverted", "Inverted"),
];

pub const STATES: &[Modifier] = &[
    state("hover", "Hover"),
    state("active", "Active"),
    state("focus", "Focus"),
    state("disabled", "Disabled"),
    state("selected", "Selected"),
];

pub const SCALES: &[Modifier] = &[
    scale("50"),
    scale("100"),
    scale("200"),
    scale("300"),
    scale("400"),
    scale("500"),
    scale("600"),
    scale("700"),
    scale("800"),
    scale("900"),
];

/// States applied by "add all interactive states"
pub const INTERACTIVE_STATES: [&str; 4] = ["hover", "active", "focus", "disabled"];

/// Variant that never appears in a token name
pub const DEFAULT_VARIANT: &str = "default";

/// A component definition offered by builder mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDef {
    pub id: String,
    pub label: String,
    pub categories: Vec<Category>,
    pub has_states: bool,
}

impl ComponentDef {
    pub fn new(id: impl Into<String>, label: impl Into<String>, categories: &[Category], has_states: bool) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            categories: categories.to_vec(),
            has_states,
        }
    }
}

/// Components builder mode starts with
pub fn default_components() -> Vec<ComponentDef> {
    use Category::*;
    vec![
        ComponentDef::new("button", "Button", &[Color, Typography, Spacing, Effects], true),
        ComponentDef::new("input", "Input", &[Color, Typography, Spacing, Effects], true),
        ComponentDef::new("card", "Card", &[Color, Spacing, Effects], false),
        ComponentDef::new("badge", "Badge", &[Color, Typography, Spacing], false),
        ComponentDef::new("link", "Link", &[Color, Typography], true),
        ComponentDef::new("modal", "Modal", &[Color, Spacing, Effects], false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_round_trips_through_id() {
        for category in Category::ALL {
            assert_eq!(category.id().parse::<Category>().unwrap(), category);
        }
        assert!(matches!(
            "colour".parse::<Category>(),
            Err(TokenError::UnknownCategory(s)) if s == "colour"
        ));
    }

    #[test]
    fn test_default_properties_exist_in_category() {
        for category in Category::ALL {
            for id in category.default_properties() {
                assert!(
                    category.properties().iter().any(|p| p.id == *id),
                    "{id} missing from {category}"
                );
            }
        }
    }

    #[test]
    fn test_context_lookup() {
        let surface = Category::Color.context("surface").unwrap();
        assert_eq!(surface.suggested_elements, &["page", "card", "modal", "popover", "dropdown"]);
        assert!(Category::Spacing.context("surface").is_none());
        assert_eq!(Category::Typography.context("ui").unwrap().label, "UI");
    }

    #[test]
    fn test_modifier_kinds() {
        assert!(VARIANTS.iter().all(|m| m.kind == ModifierKind::Variant));
        assert!(STATES.iter().all(|m| m.kind == ModifierKind::State));
        assert_eq!(SCALES.len(), 10);
        assert_eq!(SCALES[0].id, "50");
    }

    #[test]
    fn test_default_components() {
        let components = default_components();
        let ids: Vec<_> = components.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["button", "input", "card", "badge", "link", "modal"]);
        let stateful: Vec<_> = components.iter().filter(|c| c.has_states).map(|c| c.id.as_str()).collect();
        assert_eq!(stateful, vec!["button", "input", "link"]);
    }
}
