//! Colour theory and colour systems

use crate::illustration::grid::{column_x, span_width, CONTENT};
use crate::palette::Palette;
use crate::renderer::{num, polar, Arrow, Circle, Label, Path, Rect, SvgBuilder, Text, TextAnchor};

use super::titled;

/// Ramp of one hue from light to dark, as used in the palette diagram
const BLUE_RAMP: [&str; 9] = [
    "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
    "#1e3a8a",
];
const NEUTRAL_RAMP: [&str; 9] = [
    "#fafafa", "#f5f5f5", "#e5e5e5", "#d4d4d4", "#a3a3a3", "#737373", "#525252", "#404040",
    "#171717",
];

pub fn color_palette(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Color Palette",
        "Tonal ramps from 100 to 900 for brand and neutral colours",
        p,
    );
    let swatch = CONTENT.width / 9.0;
    let ramps = [("Brand", &BLUE_RAMP), ("Neutral", &NEUTRAL_RAMP)];
    for (row, (name, ramp)) in ramps.iter().enumerate() {
        let y = CONTENT.top + 20.0 + row as f64 * 120.0;
        b.add(Label::new(CONTENT.left, y - 8.0, *name));
        for (i, color) in ramp.iter().enumerate() {
            let x = CONTENT.left + i as f64 * swatch;
            b.add(Rect::new(x, y, swatch, 64.0).fill(*color).no_stroke());
            b.add(
                Label::new(x + swatch / 2.0, y + 80.0, format!("{}", (i + 1) * 100))
                    .font_size(10.0)
                    .centered(),
            );
        }
    }
    b
}

/// Ring segment between two radii, angles in degrees
fn ring_segment(cx: f64, cy: f64, inner: f64, outer: f64, start: f64, end: f64) -> String {
    let a = polar(cx, cy, inner, start);
    let b = polar(cx, cy, outer, start);
    let c = polar(cx, cy, outer, end);
    let d = polar(cx, cy, inner, end);
    format!(
        "M {} {} L {} {} A {o} {o} 0 0 1 {} {} L {} {} A {i} {i} 0 0 0 {} {}",
        num(a.x),
        num(a.y),
        num(b.x),
        num(b.y),
        num(c.x),
        num(c.y),
        num(d.x),
        num(d.y),
        num(a.x),
        num(a.y),
        o = num(outer),
        i = num(inner),
    )
}

pub fn color_wheel(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Color Wheel",
        "HSL color model showing hue variations around the wheel",
        p,
    );
    let outer = 70.0;
    let inner = 40.0;
    let segments = 12;
    let cx = CONTENT.left + 100.0;
    let cy = CONTENT.top + outer - 16.0;

    for i in 0..segments {
        let start = (i * 360 / segments) as f64 - 90.0;
        let end = ((i + 1) * 360 / segments) as f64 - 90.0;
        b.add(
            Path::new(ring_segment(cx, cy, inner, outer, start, end))
                .fill(format!("hsl({}, 70%, 50%)", i * 30))
                .no_stroke(),
        );
    }
    b.add(Circle::new(cx, cy, inner - 4.0).fill(p.bg()).no_stroke());
    b.add(Text::new(cx, cy - 2.0, "HUE").font_size(13.0).centered().bold());
    b.add(Text::new(cx, cy + 14.0, "0°–360°").font_size(11.0).fill(p.muted()).centered());

    let tx = cx + outer + 40.0;
    let rows = [
        ("H: Hue", "Color position", cy - outer + 18.0, p.primary()),
        ("S: Saturation", "Color intensity", cy + 4.0, "currentColor".to_string()),
        ("L: Lightness", "Light/dark", cy + outer - 14.0, "currentColor".to_string()),
    ];
    for (heading, detail, y, fill) in rows {
        b.add(Text::new(tx, y, heading).font_size(14.0).fill(fill).bold());
        b.add(Text::new(tx, y + 18.0, detail).font_size(12.0).fill(p.muted()));
    }

    b.def(r#"<linearGradient id="satGradient" x1="0%" y1="0%" x2="100%" y2="0%"><stop offset="0%" stop-color="hsl(220, 0%, 50%)"/><stop offset="100%" stop-color="hsl(220, 100%, 50%)"/></linearGradient>"#);
    b.def(r#"<linearGradient id="lightGradient" x1="0%" y1="0%" x2="100%" y2="0%"><stop offset="0%" stop-color="hsl(220, 70%, 0%)"/><stop offset="50%" stop-color="hsl(220, 70%, 50%)"/><stop offset="100%" stop-color="hsl(220, 70%, 100%)"/></linearGradient>"#);

    let bar_w = 140.0;
    let bar_y = CONTENT.bottom;
    for (x, name, gradient) in [
        (CONTENT.left, "Saturation", "url(#satGradient)"),
        (CONTENT.right - bar_w, "Lightness", "url(#lightGradient)"),
    ] {
        b.add(Rect::new(x, bar_y, bar_w, 14.0).rounded(2.0).fill(gradient).no_stroke());
        b.add(Label::new(x, bar_y - 6.0, name));
        b.add(Label::new(x + bar_w, bar_y - 6.0, "0%–100%").anchor(TextAnchor::End));
    }
    b
}

pub fn contrast_ratio(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Contrast Ratio",
        "WCAG contrast requirements: 4.5:1 for AA, 7:1 for AAA",
        p,
    );
    let samples = [
        ("#a3a3a3", "2.5:1", "Fail", p.error()),
        ("#737373", "4.7:1", "AA", p.warning()),
        ("#404040", "10.4:1", "AAA", p.success()),
    ];
    let w = span_width(4);
    for (i, (fg, ratio, verdict, badge)) in samples.iter().enumerate() {
        let x = column_x(i * 4);
        let y = CONTENT.top + 20.0;
        b.add(Rect::new(x, y, w, 150.0).rounded(6.0).fill("#ffffff").stroke(p.light()));
        b.add(Text::new(x + w / 2.0, y + 70.0, "Aa").font_size(40.0).fill(*fg).centered().bold());
        b.add(Text::new(x + w / 2.0, y + 120.0, *ratio).font_size(16.0).centered().mono());
        b.add(Rect::new(x + w / 2.0 - 30.0, y + 170.0, 60.0, 24.0).rounded(12.0).fill(badge.as_str()).no_stroke());
        b.add(Text::new(x + w / 2.0, y + 186.0, *verdict).font_size(11.0).fill("#ffffff").centered().bold());
    }
    b.add(Label::new(CONTENT.center_x, CONTENT.bottom, "Body text needs 4.5:1").centered());
    b
}

pub fn dark_mode_mapping(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Dark Mode Mapping",
        "How colours transform between light and dark modes",
        p,
    );
    let pairs = [
        ("Background", "#ffffff", "#0a0a0a"),
        ("Surface", "#f5f5f5", "#171717"),
        ("Border", "#e5e5e5", "#262626"),
        ("Text", "#171717", "#fafafa"),
        ("Accent", "#e63946", "#f87171"),
    ];
    let left = column_x(1);
    let right = column_x(8);
    let size = 36.0;
    b.add(Label::new(left + size / 2.0, CONTENT.top, "Light").centered());
    b.add(Label::new(right + size / 2.0, CONTENT.top, "Dark").centered());
    for (i, (role, light, dark)) in pairs.iter().enumerate() {
        let y = CONTENT.top + 14.0 + i as f64 * (size + 14.0);
        b.add(Rect::new(left, y, size, size).rounded(4.0).fill(*light).stroke(p.light()));
        b.add(Rect::new(right, y, size, size).rounded(4.0).fill(*dark).stroke(p.light()));
        b.add(Arrow::new(left + size + 16.0, y + size / 2.0, right - 16.0, y + size / 2.0).stroke(p.light()));
        b.add(Label::new(CONTENT.center_x, y + size / 2.0 - 6.0, *role).centered());
    }
    b
}

pub fn material_dynamic_color(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Material Dynamic Color",
        "Material You extracts colors from wallpaper to personalize the UI",
        p,
    );
    let y = CONTENT.top + 30.0;

    // Wallpaper
    let wx = CONTENT.left;
    b.def(r##"<linearGradient id="wallpaper" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#7c3aed"/><stop offset="100%" stop-color="#f59e0b"/></linearGradient>"##);
    b.add(Rect::new(wx, y, 110.0, 200.0).rounded(14.0).fill("url(#wallpaper)").no_stroke());
    b.add(Label::new(wx + 55.0, y + 224.0, "Wallpaper").centered());

    b.add(Arrow::new(wx + 126.0, y + 100.0, wx + 170.0, y + 100.0).stroke(p.muted()));

    // Extracted tonal palette
    let tones = ["#7c3aed", "#a78bfa", "#f59e0b", "#fde68a"];
    let sx = wx + 186.0;
    for (i, tone) in tones.iter().enumerate() {
        b.add(Circle::new(sx + 20.0, y + 30.0 + i as f64 * 48.0, 18.0).fill(*tone).no_stroke());
    }
    b.add(Label::new(sx + 20.0, y + 224.0, "Tones").centered());

    b.add(Arrow::new(sx + 56.0, y + 100.0, sx + 100.0, y + 100.0).stroke(p.muted()));

    // Themed UI
    let ux = sx + 116.0;
    b.add(Rect::new(ux, y, 120.0, 200.0).rounded(14.0).fill("#faf5ff").stroke(p.light()));
    b.add(Rect::new(ux + 12.0, y + 16.0, 96.0, 28.0).rounded(14.0).fill("#ede9fe").no_stroke());
    b.add(Rect::new(ux + 12.0, y + 56.0, 96.0, 60.0).rounded(8.0).fill("#ddd6fe").no_stroke());
    b.add(Rect::new(ux + 24.0, y + 150.0, 72.0, 30.0).rounded(15.0).fill("#7c3aed").no_stroke());
    b.add(Label::new(ux + 60.0, y + 224.0, "Themed UI").centered());
    b
}
