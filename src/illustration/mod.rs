//! Teaching illustrations
//!
//! Lessons embed diagrams by key (`box-model`, `color-wheel`, ...). The
//! [`catalog`] registers every diagram; [`render_illustration`] looks a key
//! up and wraps the SVG in a `<figure>` for embedding.
//!
//! # Example
//!
//! ```rust
//! use design_engineer::illustration::{render_illustration, RenderMode};
//! use design_engineer::{Palette, SvgConfig};
//!
//! let html = render_illustration(
//!     "box-model",
//!     Some("The CSS box model"),
//!     RenderMode::Production,
//!     &Palette::default(),
//!     &SvgConfig::default(),
//! )
//! .unwrap();
//! assert!(html.contains("<figcaption"));
//! ```

pub mod catalog;
pub mod grid;
mod registry;

use std::sync::OnceLock;

use serde::Deserialize;

pub use grid::{column_x, row_y, span_width, Content, Grid, COLUMN_WIDTH, CONTENT, GRID};
pub use registry::{IllustrationRegistry, RegistryError, RenderFn};

use crate::palette::Palette;
use crate::renderer::{escape_xml, SvgConfig};

/// Whether unknown keys should be surfaced to the author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Development,
    #[default]
    Production,
}

/// The full illustration catalog, built once
pub fn illustration_map() -> &'static IllustrationRegistry {
    static MAP: OnceLock<IllustrationRegistry> = OnceLock::new();
    MAP.get_or_init(catalog::build_registry)
}

/// Render the bare SVG for a key
pub fn render_svg(
    key: &str,
    palette: &Palette,
    config: &SvgConfig,
) -> Result<String, RegistryError> {
    let render = illustration_map().require(key)?;
    Ok(render(palette).build(config))
}

/// Render an illustration for embedding in lesson content
///
/// Unknown keys render nothing in production. In development they render a
/// visible warning block so the author notices the typo.
pub fn render_illustration(
    key: &str,
    caption: Option<&str>,
    mode: RenderMode,
    palette: &Palette,
    config: &SvgConfig,
) -> Option<String> {
    let prefix = config.prefix();
    let Some(render) = illustration_map().get(key) else {
        return match mode {
            RenderMode::Production => {
                tracing::debug!(key, "skipping unknown illustration");
                None
            }
            RenderMode::Development => {
                tracing::warn!(key, "unknown illustration");
                Some(format!(
                    r#"<div class="{}illustration-missing" role="alert"><p>Unknown illustration: <code>{}</code></p></div>"#,
                    prefix,
                    escape_xml(key)
                ))
            }
        };
    };

    let svg = render(palette).build(config);
    let nl = if config.pretty_print { "\n" } else { "" };
    let mut html = format!(r#"<figure class="{}figure">"#, prefix);
    html.push_str(nl);
    html.push_str(&svg);
    html.push_str(nl);
    if let Some(caption) = caption {
        html.push_str(&format!("<figcaption>{}</figcaption>", escape_xml(caption)));
        html.push_str(nl);
    }
    html.push_str("</figure>");
    Some(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_renders_figure() {
        let html = render_illustration(
            "box-model",
            None,
            RenderMode::Production,
            &Palette::default(),
            &SvgConfig::default(),
        )
        .unwrap();
        assert!(html.starts_with("<figure"));
        assert!(html.contains("<svg"));
        assert!(!html.contains("<figcaption"));
    }

    #[test]
    fn test_caption_is_escaped() {
        let html = render_illustration(
            "box-model",
            Some("Margin & padding"),
            RenderMode::Production,
            &Palette::default(),
            &SvgConfig::default(),
        )
        .unwrap();
        assert!(html.contains("<figcaption>Margin &amp; padding</figcaption>"));
    }

    #[test]
    fn test_unknown_key_in_production_renders_nothing() {
        let html = render_illustration(
            "no-such-diagram",
            None,
            RenderMode::Production,
            &Palette::default(),
            &SvgConfig::default(),
        );
        assert!(html.is_none());
    }

    #[test]
    fn test_unknown_key_in_development_shows_warning() {
        let html = render_illustration(
            "no-such-diagram",
            None,
            RenderMode::Development,
            &Palette::default(),
            &SvgConfig::default(),
        )
        .unwrap();
        assert!(html.contains("Unknown illustration: <code>no-such-diagram</code>"));
    }

    #[test]
    fn test_render_svg_unknown_key_error() {
        let err = render_svg("nope", &Palette::default(), &SvgConfig::default()).unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }));
    }
}
