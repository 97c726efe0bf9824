//! Integration tests for the illustration catalog

use design_engineer::illustration::{illustration_map, render_illustration, RenderMode};
use design_engineer::{render, render_with_config, Palette, SvgConfig};

const GREEN_ACCENT: &str = r##"
[metadata]
name = "Green"

[colors]
bg = "#ffffff"
dark = "#111111"
muted = "#666666"
light = "#dddddd"
primary = "#00aa55"
success = "#16a34a"
warning = "#d97706"
error = "#dc2626"
info = "#2563eb"
"##;

#[test]
fn test_every_key_embeds_as_figure() {
    let palette = Palette::default();
    let config = SvgConfig::default();
    let map = illustration_map();
    assert!(!map.is_empty());
    for key in map.keys() {
        let html = render_illustration(key, Some("Caption"), RenderMode::Production, &palette, &config)
            .unwrap_or_else(|| panic!("{key} rendered nothing"));
        assert!(html.starts_with(r#"<figure class="de-figure">"#), "{key}");
        assert!(html.contains("<title id="), "{key}");
        assert!(html.contains("<figcaption>Caption</figcaption>"), "{key}");
        assert!(html.ends_with("</figure>"), "{key}");
    }
}

#[test]
fn test_palette_rethemes_catalog() {
    let palette = Palette::from_str(GREEN_ACCENT).unwrap();
    let themed = illustration_map()
        .keys()
        .filter(|key| render(key, &palette).unwrap().contains("#00aa55"))
        .count();
    assert!(themed > 0);
}

#[test]
fn test_unprefixed_compact_output() {
    let config = SvgConfig::default().without_class_prefix().with_pretty_print(false);
    let svg = render_with_config("focus-order", &Palette::default(), &config).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(!svg.contains(r#"class="de-illustration""#));
}

#[test]
fn test_unknown_key_depends_on_mode() {
    let palette = Palette::default();
    let config = SvgConfig::default();
    assert!(render_illustration("box-modle", None, RenderMode::Production, &palette, &config).is_none());
    let warning = render_illustration("box-modle", None, RenderMode::Development, &palette, &config).unwrap();
    assert!(warning.contains("box-modle"));
}
