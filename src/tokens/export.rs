//! Export code for a set of formatted token names

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

use super::catalog::Category;
use super::format::{camel_join, capitalize, figma_type, token_type, OutputFormat};
use super::nested::{build_nested_object, build_nested_with};

/// Tool name written into Figma Variables metadata
pub const TOOL_NAME: &str = "Design Engineer Token Naming Tool";

/// Inputs that shape an export besides the names themselves
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    pub format: OutputFormat,
    pub category: Option<Category>,
    /// Timestamp recorded in Figma Variables metadata
    pub exported_at: DateTime<Utc>,
}

impl ExportOptions {
    pub fn new(format: OutputFormat, category: Option<Category>) -> Self {
        Self {
            format,
            category,
            exported_at: Utc::now(),
        }
    }

    pub fn exported_at(mut self, at: DateTime<Utc>) -> Self {
        self.exported_at = at;
        self
    }
}

fn pretty(value: &Value) -> String {
    // Serializing a Value cannot fail
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Render already-formatted token names as copyable code
pub fn generate_export_code(tokens: &[String], options: &ExportOptions) -> String {
    let paths = tokens.iter().map(String::as_str);
    match options.format {
        OutputFormat::Css => {
            let body: Vec<String> = tokens.iter().map(|t| format!("  {t}: /* value */;")).collect();
            format!(":root {{\n{}\n}}", body.join("\n"))
        }
        OutputFormat::CamelCase => {
            let body: Vec<String> = tokens.iter().map(|t| format!("  {t}: '/* value */',")).collect();
            format!("const tokens = {{\n{}\n}};", body.join("\n"))
        }
        OutputFormat::Json => pretty(&build_nested_object(paths)),
        OutputFormat::Dtcg => {
            let kind = token_type(options.category);
            let tree = build_nested_with(paths, |segments| {
                json!({
                    "$type": kind,
                    "$value": "{/* value */}",
                    "$description": format!("Token for {}", segments.join(" > ")),
                })
            });
            format!(
                "// W3C Design Tokens Community Group (DTCG) Format\n\
                 // https://design-tokens.github.io/community-group/format/\n{}",
                pretty(&tree)
            )
        }
        OutputFormat::FigmaVariables => {
            format!(
                "// Figma Variables JSON\n// Import via Figma Plugin or REST API\n{}",
                pretty(&figma_variables(tokens, options))
            )
        }
        OutputFormat::Figma => {
            let names: Vec<String> = tokens
                .iter()
                .map(|t| t.split('.').map(capitalize).collect::<Vec<_>>().join("/"))
                .collect();
            format!(
                "// Figma Token Names (slash-separated)\n\
                 // Use these names when creating styles/variables in Figma\n{}",
                names.join("\n")
            )
        }
    }
}

fn figma_variables(tokens: &[String], options: &ExportOptions) -> Value {
    let resolved = figma_type(options.category);
    let is_color = resolved == "COLOR";
    let scopes: &[&str] = if is_color { &["ALL_FILLS", "STROKE_COLOR"] } else { &["ALL_SCOPES"] };
    let variables: Vec<Value> = tokens
        .iter()
        .map(|t| {
            let segments: Vec<&str> = t.split('.').collect();
            let camel = camel_join(segments.iter().copied());
            let (light, dark) = if is_color {
                (json!({ "r": 0, "g": 0, "b": 0, "a": 1 }), json!({ "r": 1, "g": 1, "b": 1, "a": 1 }))
            } else {
                (json!(0), json!(0))
            };
            json!({
                "name": segments.join("/"),
                "resolvedType": resolved,
                "description": format!("Token: {t}"),
                "hiddenFromPublishing": false,
                "scopes": scopes,
                "codeSyntax": {
                    "WEB": format!("--{}", segments.join("-")),
                    "ANDROID": camel,
                    "iOS": camel,
                },
                "valuesByMode": { "Light": light, "Dark": dark },
            })
        })
        .collect();

    let collection = match options.category {
        Some(category) => format!("{} Tokens", capitalize(category.id())),
        None => "Tokens".to_string(),
    };
    json!({
        "version": "1.0",
        "metadata": {
            "exportedAt": options.exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            "tool": TOOL_NAME,
        },
        "collections": [{
            "name": collection,
            "modes": ["Light", "Dark"],
            "variables": variables,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn tokens(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn fixed(format: OutputFormat, category: Option<Category>) -> ExportOptions {
        let at = Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap();
        ExportOptions::new(format, category).exported_at(at)
    }

    #[test]
    fn test_css_export() {
        let code = generate_export_code(
            &tokens(&["--bg-surface-card", "--bg-surface-card-hover"]),
            &fixed(OutputFormat::Css, Some(Category::Color)),
        );
        insta::assert_snapshot!(code, @r###"
        :root {
          --bg-surface-card: /* value */;
          --bg-surface-card-hover: /* value */;
        }
        "###);
    }

    #[test]
    fn test_camel_case_export() {
        let code = generate_export_code(&tokens(&["bgSurfaceCard"]), &fixed(OutputFormat::CamelCase, None));
        assert_eq!(code, "const tokens = {\n  bgSurfaceCard: '/* value */',\n};");
    }

    #[test]
    fn test_json_export_nests_paths() {
        let code = generate_export_code(
            &tokens(&["bg.surface.card", "bg.surface.card.hover"]),
            &fixed(OutputFormat::Json, Some(Category::Color)),
        );
        let value: Value = serde_json::from_str(&code).unwrap();
        assert_eq!(value["bg"]["surface"]["card"]["_value"], "/* value */");
        assert_eq!(value["bg"]["surface"]["card"]["hover"], "/* value */");
        assert!(code.starts_with("{\n  \"bg\""));
    }

    #[test]
    fn test_dtcg_export() {
        let code = generate_export_code(
            &tokens(&["padding.component.button"]),
            &fixed(OutputFormat::Dtcg, Some(Category::Spacing)),
        );
        let mut lines = code.lines();
        assert_eq!(lines.next(), Some("// W3C Design Tokens Community Group (DTCG) Format"));
        assert_eq!(lines.next(), Some("// https://design-tokens.github.io/community-group/format/"));
        let value: Value = serde_json::from_str(&lines.collect::<Vec<_>>().join("\n")).unwrap();
        let leaf = &value["padding"]["component"]["button"];
        assert_eq!(leaf["$type"], "dimension");
        assert_eq!(leaf["$value"], "{/* value */}");
        assert_eq!(leaf["$description"], "Token for padding > component > button");
    }

    #[test]
    fn test_figma_variables_export() {
        let code = generate_export_code(
            &tokens(&["bg.surface.card"]),
            &fixed(OutputFormat::FigmaVariables, Some(Category::Color)),
        );
        let json_start = code.find('{').unwrap();
        assert!(code.starts_with("// Figma Variables JSON\n// Import via Figma Plugin or REST API\n"));
        let value: Value = serde_json::from_str(&code[json_start..]).unwrap();
        assert_eq!(value["metadata"]["exportedAt"], "2025-01-05T12:00:00.000Z");
        assert_eq!(value["metadata"]["tool"], TOOL_NAME);
        let collection = &value["collections"][0];
        assert_eq!(collection["name"], "Color Tokens");
        let variable = &collection["variables"][0];
        assert_eq!(variable["name"], "bg/surface/card");
        assert_eq!(variable["resolvedType"], "COLOR");
        assert_eq!(variable["scopes"], json!(["ALL_FILLS", "STROKE_COLOR"]));
        assert_eq!(variable["codeSyntax"]["WEB"], "--bg-surface-card");
        assert_eq!(variable["codeSyntax"]["iOS"], "bgSurfaceCard");
        assert_eq!(variable["valuesByMode"]["Dark"], json!({ "r": 1, "g": 1, "b": 1, "a": 1 }));
    }

    #[test]
    fn test_figma_variables_float_values() {
        let code = generate_export_code(
            &tokens(&["gap.layout"]),
            &fixed(OutputFormat::FigmaVariables, Some(Category::Spacing)),
        );
        let value: Value = serde_json::from_str(&code[code.find('{').unwrap()..]).unwrap();
        let variable = &value["collections"][0]["variables"][0];
        assert_eq!(variable["scopes"], json!(["ALL_SCOPES"]));
        assert_eq!(variable["valuesByMode"]["Light"], json!(0));
        assert_eq!(value["collections"][0]["name"], "Spacing Tokens");
    }

    #[test]
    fn test_figma_export() {
        let code = generate_export_code(&tokens(&["Bg/Surface/Card"]), &fixed(OutputFormat::Figma, None));
        insta::assert_snapshot!(code, @r###"
        // Figma Token Names (slash-separated)
        // Use these names when creating styles/variables in Figma
        Bg/Surface/Card
        "###);
    }
}
