//! Design Engineer Course toolkit
//!
//! Three independent parts of the course site:
//!
//! - [`illustration`]: the catalog of teaching diagrams, rendered to SVG by key
//! - [`certificate`]: eligibility, issuance, claiming and PDF certificates
//! - [`tokens`]: the design token naming tool and its export formats
//!
//! # Example
//!
//! ```rust
//! use design_engineer::{render, Palette};
//!
//! let svg = render("color-wheel", &Palette::default()).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("<title"));
//! ```

pub mod certificate;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod illustration;
pub mod palette;
pub mod renderer;
pub mod tokens;

pub use config::{ConfigError, SiteConfig};
pub use error::{Error, Result};
pub use illustration::{render_illustration, RenderMode};
pub use palette::{Palette, PaletteError};
pub use renderer::SvgConfig;

/// Render the illustration registered under `key` as a bare SVG document
///
/// # Example
///
/// ```rust
/// use design_engineer::{render, Palette};
///
/// assert!(render("not-a-diagram", &Palette::default()).is_err());
/// ```
pub fn render(key: &str, palette: &Palette) -> Result<String> {
    render_with_config(key, palette, &SvgConfig::default())
}

/// Render with explicit SVG output options
pub fn render_with_config(key: &str, palette: &Palette, config: &SvgConfig) -> Result<String> {
    Ok(illustration::render_svg(key, palette, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_known_key() {
        let svg = render("box-model", &Palette::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_render_standalone() {
        let config = SvgConfig::default().with_standalone(true).with_pretty_print(false);
        let svg = render_with_config("color-wheel", &Palette::default(), &config).unwrap();
        assert!(svg.starts_with("<?xml"));
    }

    #[test]
    fn test_render_unknown_key() {
        let err = render("nope", &Palette::default()).unwrap_err();
        assert!(matches!(err, Error::Illustration(_)));
    }
}
