//! SVG primitives and the illustration frame builder

use std::f64::consts::PI;

use crate::palette::{Palette, STROKE_WIDTHS};

use super::SvgConfig;

/// A 2D point in illustration coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Anything that can be drawn into an illustration
pub trait Element {
    /// Render to SVG markup, resolving default colours from the palette
    fn to_svg(&self, palette: &Palette) -> String;
}

/// Optional stroke/fill attributes shared by the shape primitives
#[derive(Debug, Clone, Default, PartialEq)]
struct Paint {
    fill: Option<String>,
    fill_opacity: Option<f64>,
    stroke: Option<String>,
    stroke_width: Option<f64>,
    dasharray: Option<String>,
    opacity: Option<f64>,
}

impl Paint {
    fn attrs(&self, default_fill: &str) -> String {
        let mut out = format!(
            r#" fill="{}""#,
            escape_xml(self.fill.as_deref().unwrap_or(default_fill))
        );
        if let Some(op) = self.fill_opacity {
            out.push_str(&format!(r#" fill-opacity="{}""#, num(op)));
        }
        match self.stroke.as_deref() {
            Some("none") => out.push_str(r#" stroke="none""#),
            stroke => {
                out.push_str(&format!(
                    r#" stroke="{}" stroke-width="{}""#,
                    escape_xml(stroke.unwrap_or("currentColor")),
                    num(self.stroke_width.unwrap_or(STROKE_WIDTHS.normal))
                ));
            }
        }
        if let Some(d) = &self.dasharray {
            out.push_str(&format!(r#" stroke-dasharray="{}""#, d));
        }
        if let Some(op) = self.opacity {
            if op < 1.0 {
                out.push_str(&format!(r#" opacity="{}""#, num(op)));
            }
        }
        out
    }
}

macro_rules! paint_setters {
    () => {
        pub fn fill(mut self, fill: impl Into<String>) -> Self {
            self.paint.fill = Some(fill.into());
            self
        }

        pub fn fill_opacity(mut self, opacity: f64) -> Self {
            self.paint.fill_opacity = Some(opacity);
            self
        }

        pub fn stroke(mut self, stroke: impl Into<String>) -> Self {
            self.paint.stroke = Some(stroke.into());
            self
        }

        pub fn no_stroke(mut self) -> Self {
            self.paint.stroke = Some("none".to_string());
            self
        }

        pub fn stroke_width(mut self, width: f64) -> Self {
            self.paint.stroke_width = Some(width);
            self
        }

        pub fn dashed(mut self, pattern: impl Into<String>) -> Self {
            self.paint.dasharray = Some(pattern.into());
            self
        }

        pub fn opacity(mut self, opacity: f64) -> Self {
            self.paint.opacity = Some(opacity);
            self
        }
    };
}

/// Rectangle, unfilled with a `currentColor` stroke by default
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    radius: Option<f64>,
    paint: Paint,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            radius: None,
            paint: Paint::default(),
        }
    }

    /// Corner radius
    pub fn rounded(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    paint_setters!();
}

impl Element for Rect {
    fn to_svg(&self, _palette: &Palette) -> String {
        let rx = self
            .radius
            .map(|r| format!(r#" rx="{}""#, num(r)))
            .unwrap_or_default();
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}{}/>"#,
            num(self.x),
            num(self.y),
            num(self.width),
            num(self.height),
            rx,
            self.paint.attrs("none")
        )
    }
}

/// Circle, unfilled with a `currentColor` stroke by default
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    paint: Paint,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            cx,
            cy,
            r,
            paint: Paint::default(),
        }
    }

    paint_setters!();
}

impl Element for Circle {
    fn to_svg(&self, _palette: &Palette) -> String {
        format!(
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            num(self.cx),
            num(self.cy),
            num(self.r),
            self.paint.attrs("none")
        )
    }
}

/// Straight line segment
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    stroke: Option<String>,
    stroke_width: Option<f64>,
    dasharray: Option<String>,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke: None,
            stroke_width: None,
            dasharray: None,
        }
    }

    pub fn stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn dashed(mut self, pattern: impl Into<String>) -> Self {
        self.dasharray = Some(pattern.into());
        self
    }
}

impl Element for Line {
    fn to_svg(&self, _palette: &Palette) -> String {
        let dash = self
            .dasharray
            .as_ref()
            .map(|d| format!(r#" stroke-dasharray="{}""#, d))
            .unwrap_or_default();
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{}/>"#,
            num(self.x1),
            num(self.y1),
            num(self.x2),
            num(self.y2),
            escape_xml(self.stroke.as_deref().unwrap_or("currentColor")),
            num(self.stroke_width.unwrap_or(STROKE_WIDTHS.normal)),
            dash
        )
    }
}

/// Uppercase annotation text in the muted colour
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    font_size: f64,
    fill: Option<String>,
    anchor: TextAnchor,
}

impl Label {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            font_size: 11.0,
            fill: None,
            anchor: TextAnchor::Start,
        }
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn centered(self) -> Self {
        self.anchor(TextAnchor::Middle)
    }
}

impl Element for Label {
    fn to_svg(&self, palette: &Palette) -> String {
        let fill = self.fill.clone().unwrap_or_else(|| palette.muted());
        format!(
            r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}" style="text-transform: uppercase; letter-spacing: 0.05em">{}</text>"#,
            num(self.x),
            num(self.y),
            num(self.font_size),
            escape_xml(&fill),
            self.anchor.as_str(),
            escape_xml(&self.text)
        )
    }
}

/// Free-form text, rendered as written
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    font_size: f64,
    fill: Option<String>,
    anchor: TextAnchor,
    weight: Option<String>,
    family: Option<String>,
}

impl Text {
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            font_size: 12.0,
            fill: None,
            anchor: TextAnchor::Start,
            weight: None,
            family: None,
        }
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn centered(self) -> Self {
        self.anchor(TextAnchor::Middle)
    }

    pub fn bold(mut self) -> Self {
        self.weight = Some("600".to_string());
        self
    }

    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn mono(mut self) -> Self {
        self.family = Some("ui-monospace, SFMono-Regular, monospace".to_string());
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }
}

impl Element for Text {
    fn to_svg(&self, _palette: &Palette) -> String {
        let weight = self
            .weight
            .as_ref()
            .map(|w| format!(r#" font-weight="{}""#, w))
            .unwrap_or_default();
        let family = self
            .family
            .as_ref()
            .map(|f| format!(r#" font-family="{}""#, escape_xml(f)))
            .unwrap_or_default();
        format!(
            r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}"{}{}>{}</text>"#,
            num(self.x),
            num(self.y),
            num(self.font_size),
            escape_xml(self.fill.as_deref().unwrap_or("currentColor")),
            self.anchor.as_str(),
            weight,
            family,
            escape_xml(&self.content)
        )
    }
}

/// Line with an open chevron head at the end point
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    pub from: Point,
    pub to: Point,
    stroke: Option<String>,
    stroke_width: Option<f64>,
}

/// Length of the arrow head strokes
pub const ARROW_HEAD_LENGTH: f64 = 8.0;
/// Half-angle between the shaft and each head stroke
pub const ARROW_HEAD_ANGLE: f64 = PI / 6.0;

impl Arrow {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
            stroke: None,
            stroke_width: None,
        }
    }

    pub fn stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// The two outer points of the arrow head
    pub fn head(&self) -> (Point, Point) {
        let angle = (self.to.y - self.from.y).atan2(self.to.x - self.from.x);
        let left = Point::new(
            self.to.x - ARROW_HEAD_LENGTH * (angle - ARROW_HEAD_ANGLE).cos(),
            self.to.y - ARROW_HEAD_LENGTH * (angle - ARROW_HEAD_ANGLE).sin(),
        );
        let right = Point::new(
            self.to.x - ARROW_HEAD_LENGTH * (angle + ARROW_HEAD_ANGLE).cos(),
            self.to.y - ARROW_HEAD_LENGTH * (angle + ARROW_HEAD_ANGLE).sin(),
        );
        (left, right)
    }
}

impl Element for Arrow {
    fn to_svg(&self, _palette: &Palette) -> String {
        let stroke = escape_xml(self.stroke.as_deref().unwrap_or("currentColor"));
        let width = num(self.stroke_width.unwrap_or(STROKE_WIDTHS.normal));
        let (left, right) = self.head();
        format!(
            r#"<g><line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{width}"/><polyline points="{},{} {},{} {},{}" fill="none" stroke="{stroke}" stroke-width="{width}" stroke-linejoin="round"/></g>"#,
            num(self.from.x),
            num(self.from.y),
            num(self.to.x),
            num(self.to.y),
            num(left.x),
            num(left.y),
            num(self.to.x),
            num(self.to.y),
            num(right.x),
            num(right.y),
        )
    }
}

/// Arbitrary path from an SVG `d` string
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub d: String,
    paint: Paint,
}

impl Path {
    pub fn new(d: impl Into<String>) -> Self {
        Self {
            d: d.into(),
            paint: Paint::default(),
        }
    }

    paint_setters!();
}

impl Element for Path {
    fn to_svg(&self, _palette: &Palette) -> String {
        format!(r#"<path d="{}"{}/>"#, self.d, self.paint.attrs("none"))
    }
}

/// Open polyline through a list of points
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    paint: Paint,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            paint: Paint::default(),
        }
    }

    paint_setters!();
}

impl Element for Polyline {
    fn to_svg(&self, _palette: &Palette) -> String {
        let points = self
            .points
            .iter()
            .map(|p| format!("{},{}", num(p.x), num(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            r#"<polyline points="{}"{}/>"#,
            points,
            self.paint.attrs("none")
        )
    }
}

/// Title and size of an illustration
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub title: String,
    pub description: Option<String>,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            width: 560.0,
            height: 360.0,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Id of the `<title>` element, derived from the title
    pub fn title_id(&self) -> String {
        let slug = self
            .title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("illustration-{}", slug)
    }

    /// Start building the illustration body
    pub fn builder(self, palette: &Palette) -> SvgBuilder {
        SvgBuilder::new(self, palette.clone())
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    frame: Frame,
    palette: Palette,
    defs: Vec<String>,
    elements: Vec<(usize, String)>,
    depth: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder for a frame
    pub fn new(frame: Frame, palette: Palette) -> Self {
        Self {
            frame,
            palette,
            defs: vec![],
            elements: vec![],
            depth: 0,
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Add an element
    pub fn add(&mut self, element: impl Element) -> &mut Self {
        let markup = element.to_svg(&self.palette);
        self.elements.push((self.depth, markup));
        self
    }

    /// Add raw SVG markup (used for gradients and other one-off defs users)
    pub fn raw(&mut self, markup: impl Into<String>) -> &mut Self {
        self.elements.push((self.depth, markup.into()));
        self
    }

    /// Add a definition to the `<defs>` block
    pub fn def(&mut self, markup: impl Into<String>) -> &mut Self {
        self.defs.push(markup.into());
        self
    }

    /// Start a group with an optional transform
    pub fn start_group(&mut self, transform: Option<&str>) -> &mut Self {
        let attr = transform
            .map(|t| format!(r#" transform="{}""#, t))
            .unwrap_or_default();
        self.elements.push((self.depth, format!("<g{}>", attr)));
        self.depth += 1;
        self
    }

    /// Start a group translated by (dx, dy)
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        let transform = format!("translate({} {})", num(dx), num(dy));
        self.start_group(Some(&transform))
    }

    /// Close a group element
    pub fn end_group(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.elements.push((self.depth, "</g>".to_string()));
        self
    }

    /// Number of drawn elements (excluding the frame)
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Build the final SVG string
    pub fn build(self, config: &SvgConfig) -> String {
        let nl = if config.pretty_print { "\n" } else { "" };
        let indent = |depth: usize| {
            if config.pretty_print {
                "  ".repeat(depth + 1)
            } else {
                String::new()
            }
        };

        let title_id = self.frame.title_id();
        let desc_id = self
            .frame
            .description
            .as_ref()
            .map(|_| format!("{}-desc", title_id));
        let labelled_by = match &desc_id {
            Some(desc) => format!("{} {}", title_id, desc),
            None => title_id.clone(),
        };

        let mut svg = String::new();
        if config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        let class_attr = match config.prefix() {
            "" => String::new(),
            prefix => format!(r#" class="{}illustration""#, prefix),
        };
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" role="img" aria-labelledby="{}" viewBox="0 0 {} {}" width="{}" height="{}"{} color="{}" font-family="{}">"#,
            labelled_by,
            num(self.frame.width),
            num(self.frame.height),
            num(self.frame.width),
            num(self.frame.height),
            class_attr,
            escape_xml(&self.palette.dark()),
            escape_xml(&config.font_family),
        ));
        svg.push_str(nl);

        svg.push_str(&format!(
            r#"{}<title id="{}">{}</title>"#,
            indent(0),
            title_id,
            escape_xml(&self.frame.title)
        ));
        svg.push_str(nl);
        if let (Some(desc), Some(id)) = (&self.frame.description, &desc_id) {
            svg.push_str(&format!(
                r#"{}<desc id="{}">{}</desc>"#,
                indent(0),
                id,
                escape_xml(desc)
            ));
            svg.push_str(nl);
        }

        if !self.defs.is_empty() {
            svg.push_str(&indent(0));
            svg.push_str("<defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str(&indent(1));
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(&indent(0));
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        // Background
        svg.push_str(&format!(
            r#"{}<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            indent(0),
            num(self.frame.width),
            num(self.frame.height),
            escape_xml(&self.palette.bg())
        ));
        svg.push_str(nl);

        for (depth, elem) in &self.elements {
            svg.push_str(&indent(*depth));
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Point on a circle, angle in degrees measured clockwise from 3 o'clock
pub fn polar(cx: f64, cy: f64, r: f64, degrees: f64) -> Point {
    let rad = degrees * PI / 180.0;
    Point::new(cx + r * rad.cos(), cy + r * rad.sin())
}

/// Format a coordinate compactly: at most two decimals, no trailing zeros
pub fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let s = format!("{:.2}", rounded);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(280.0), "280");
        assert_eq!(num(32.666666), "32.67");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(-12.25), "-12.25");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_rect_defaults() {
        let svg = Rect::new(10.0, 20.0, 100.0, 50.0).to_svg(&Palette::default());
        assert_eq!(
            svg,
            r#"<rect x="10" y="20" width="100" height="50" fill="none" stroke="currentColor" stroke-width="1.5"/>"#
        );
    }

    #[test]
    fn test_rect_without_stroke() {
        let svg = Rect::new(0.0, 0.0, 10.0, 10.0)
            .fill("#e63946")
            .no_stroke()
            .rounded(4.0)
            .to_svg(&Palette::default());
        assert!(svg.contains(r##"fill="#e63946""##));
        assert!(svg.contains(r#"stroke="none""#));
        assert!(svg.contains(r#"rx="4""#));
        assert!(!svg.contains("stroke-width"));
    }

    #[test]
    fn test_label_uses_muted_colour() {
        let svg = Label::new(0.0, 0.0, "Margin").to_svg(&Palette::default());
        assert!(svg.contains(r##"fill="#737373""##));
        assert!(svg.contains(r#"font-size="11""#));
        assert!(svg.contains("text-transform: uppercase"));
        assert!(svg.contains(">Margin<"));
    }

    #[test]
    fn test_arrow_head_geometry() {
        let arrow = Arrow::new(0.0, 0.0, 100.0, 0.0);
        let (left, right) = arrow.head();
        let dx = ARROW_HEAD_LENGTH * ARROW_HEAD_ANGLE.cos();
        let dy = ARROW_HEAD_LENGTH * ARROW_HEAD_ANGLE.sin();
        assert!((left.x - (100.0 - dx)).abs() < 1e-9);
        assert!((left.y - dy).abs() < 1e-9);
        assert!((right.x - (100.0 - dx)).abs() < 1e-9);
        assert!((right.y + dy).abs() < 1e-9);
    }

    #[test]
    fn test_frame_title_id() {
        let frame = Frame::new("CSS  Box Model");
        assert_eq!(frame.title_id(), "illustration-css-box-model");
    }

    #[test]
    fn test_build_includes_title_desc_and_background() {
        let mut builder = Frame::new("Box Model")
            .description("Margin, border, padding")
            .builder(&Palette::default());
        builder.add(Rect::new(0.0, 0.0, 10.0, 10.0));
        let svg = builder.build(&SvgConfig::default());

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"aria-labelledby="illustration-box-model illustration-box-model-desc""#));
        assert!(svg.contains(r#"<title id="illustration-box-model">Box Model</title>"#));
        assert!(svg.contains(r#"<desc id="illustration-box-model-desc">"#));
        assert!(svg.contains(r##"fill="#fafafa""##));
        assert!(svg.contains(r#"viewBox="0 0 560 360""#));
    }

    #[test]
    fn test_build_without_description() {
        let svg = Frame::new("Plain")
            .builder(&Palette::default())
            .build(&SvgConfig::default());
        assert!(svg.contains(r#"aria-labelledby="illustration-plain""#));
        assert!(!svg.contains("<desc"));
    }

    #[test]
    fn test_groups_indent_when_pretty() {
        let mut builder = Frame::new("Groups").builder(&Palette::default());
        builder.translate(10.0, 20.0);
        builder.add(Circle::new(0.0, 0.0, 5.0));
        builder.end_group();
        let svg = builder.build(&SvgConfig::default());
        assert!(svg.contains("\n  <g transform=\"translate(10 20)\">\n    <circle"));
        assert!(svg.contains("\n  </g>\n"));
    }

    #[test]
    fn test_standalone_declaration() {
        let svg = Frame::new("Standalone")
            .builder(&Palette::default())
            .build(&SvgConfig::default().with_standalone(true));
        assert!(svg.starts_with("<?xml"));
    }

    #[test]
    fn test_polar() {
        let p = polar(0.0, 0.0, 10.0, 90.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
    }
}
