//! Integration tests for the token naming tool

use chrono::{TimeZone, Utc};
use design_engineer::tokens::{
    build_nested_object, parse_component_spec, BuilderMode, BuilderState, Category, EducationalState,
    ExportOptions, NamingConvention, OutputFormat, TokenBuilder,
};
use pretty_assertions::assert_eq;

fn card_hover(convention: NamingConvention) -> EducationalState {
    let mut state = EducationalState::new();
    state.convention = convention;
    state.select_category(Category::Color);
    state.select_property("background");
    state.select_context("surface");
    state.toggle_element("card");
    state.toggle_state("hover");
    state
}

fn formatted(state: &EducationalState) -> Vec<String> {
    state.generated_tokens().into_iter().map(|t| t.formatted).collect()
}

#[test]
fn test_explicit_card_background() {
    assert_eq!(
        formatted(&card_hover(NamingConvention::Explicit)),
        vec!["--color-background-surface-card", "--color-background-surface-card-hover"]
    );
}

#[test]
fn test_compact_card_background() {
    assert_eq!(
        formatted(&card_hover(NamingConvention::Compact)),
        vec!["--bg-surface-card", "--bg-surface-card-hover"]
    );
}

#[test]
fn test_format_switch_keeps_selection() {
    let mut state = card_hover(NamingConvention::Explicit);
    state.format = OutputFormat::Dtcg;
    assert_eq!(
        formatted(&state),
        vec!["color.background.surface.card", "color.background.surface.card.hover"]
    );
}

#[test]
fn test_builder_custom_component_export() {
    let mut builder = BuilderState::with_components([]);
    let (name, categories, has_states) = parse_component_spec("Chip:color:states").unwrap();
    builder.add_custom(&name, &categories, has_states).unwrap();
    builder.toggle_state("hover");

    let tokens = builder.generate();
    assert_eq!(tokens.len(), 6);

    let code = builder.export_code(ExportOptions::new(OutputFormat::Css, None));
    insta::assert_snapshot!(code, @r"
:root {
  --color-background-chip: /* value */;
  --color-background-chip-hover: /* value */;
  --color-foreground-chip: /* value */;
  --color-foreground-chip-hover: /* value */;
  --color-border-chip: /* value */;
  --color-border-chip-hover: /* value */;
}
");
}

#[test]
fn test_builder_figma_names() {
    let mut builder = BuilderState::with_components([]);
    builder.add_custom("Chip", &[Category::Spacing], false).unwrap();
    builder.format = OutputFormat::Figma;
    let code = builder.export_code(ExportOptions::new(OutputFormat::Figma, None));
    insta::assert_snapshot!(code, @r"
// Figma Token Names (slash-separated)
// Use these names when creating styles/variables in Figma
Spacing/Padding/Chip
Spacing/Gap/Chip
");
}

#[test]
fn test_json_export_handles_prefix_collision() {
    let tree = build_nested_object(["a", "a.b"]);
    assert_eq!(tree["a"]["_value"], "/* value */");
    assert_eq!(tree["a"]["b"], "/* value */");
}

#[test]
fn test_figma_variables_metadata() {
    let mut state = card_hover(NamingConvention::Explicit);
    state.format = OutputFormat::FigmaVariables;
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap();
    let code = state.export_code(ExportOptions::new(OutputFormat::Css, None).exported_at(at));

    let json = code
        .lines()
        .skip_while(|l| l.starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["metadata"]["exportedAt"], "2025-03-01T08:30:00.000Z");
    let collection = &value["collections"][0];
    assert_eq!(collection["name"], "Color Tokens");
    assert_eq!(collection["variables"][0]["name"], "color/background/surface/card");
    assert_eq!(collection["variables"][0]["codeSyntax"]["WEB"], "--color-background-surface-card");
    assert_eq!(collection["variables"][0]["resolvedType"], "COLOR");
}

#[test]
fn test_mode_switch_round_trip() {
    let mut tool = TokenBuilder::new();
    tool.educational = card_hover(NamingConvention::Compact);
    tool.builder.select("button", true);

    tool.set_mode(BuilderMode::Builder);
    let builder_tokens = tool.tokens();
    tool.set_mode(BuilderMode::Educational);
    assert_eq!(tool.tokens(), vec!["--bg-surface-card", "--bg-surface-card-hover"]);
    tool.set_mode(BuilderMode::Builder);
    assert_eq!(tool.tokens(), builder_tokens);
}
