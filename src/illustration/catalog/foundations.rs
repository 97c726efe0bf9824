//! Visual design foundations: hierarchy, contrast, gestalt, spacing and type

use crate::illustration::grid::{column_x, span_width, CONTENT};
use crate::palette::Palette;
use crate::renderer::{Circle, Label, Line, Path, Rect, SvgBuilder, Text, TextAnchor};

use super::titled;

pub fn hierarchy_stack(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Visual Hierarchy",
        "Size, weight and colour establish reading order",
        p,
    );
    let x = CONTENT.left + 40.0;
    let levels = [
        ("Primary heading", 32.0, "700", p.dark()),
        ("Secondary heading", 22.0, "600", p.dark()),
        ("Body copy carries the detail", 15.0, "400", p.dark()),
        ("Caption and metadata", 11.0, "400", p.muted()),
    ];
    let mut y = CONTENT.top + 40.0;
    for (i, (text, size, weight, fill)) in levels.iter().enumerate() {
        b.add(Text::new(x, y, *text).font_size(*size).weight(*weight).fill(fill.as_str()));
        b.add(Label::new(CONTENT.right, y, format!("Level {}", i + 1)).anchor(TextAnchor::End));
        y += size * 1.6 + 20.0;
    }
    b.add(Line::new(x - 16.0, CONTENT.top + 20.0, x - 16.0, y - 30.0).stroke(p.primary()).stroke_width(2.0));
    b
}

pub fn contrast_pairs(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Contrast Comparison",
        "Side-by-side comparison showing before and after states",
        p,
    );
    let w = span_width(6);
    let y = CONTENT.top + 30.0;
    let h = 180.0;

    // Low contrast
    let left = column_x(0);
    b.add(Rect::new(left, y, w, h).rounded(6.0).stroke(p.light()));
    for (i, width) in [0.8, 0.6, 0.7].iter().enumerate() {
        b.add(
            Rect::new(left + 20.0, y + 30.0 + i as f64 * 36.0, (w - 40.0) * width, 14.0)
                .fill(p.light())
                .no_stroke(),
        );
    }
    b.add(Label::new(left + w / 2.0, y + h + 30.0, "Low contrast").centered());

    // High contrast
    let right = column_x(6);
    b.add(Rect::new(right, y, w, h).rounded(6.0).stroke(p.light()));
    b.add(Rect::new(right + 20.0, y + 30.0, (w - 40.0) * 0.8, 14.0).fill(p.dark()).no_stroke());
    b.add(Rect::new(right + 20.0, y + 66.0, (w - 40.0) * 0.6, 14.0).fill(p.muted()).no_stroke());
    b.add(Rect::new(right + 20.0, y + 120.0, 90.0, 32.0).rounded(4.0).fill(p.primary()).no_stroke());
    b.add(Label::new(right + w / 2.0, y + h + 30.0, "High contrast").centered());
    b
}

pub fn gestalt_proximity(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Gestalt Proximity",
        "Demonstrates how proximity creates visual groupings",
        p,
    );
    let r = 10.0;
    let tight = 28.0;
    let loose = 48.0;
    let cy = CONTENT.center_y;

    let ax = column_x(1);
    for (dx, dy) in [(0.0, -16.0), (tight, -16.0), (tight / 2.0, 12.0)] {
        b.add(Circle::new(ax + dx, cy + dy, r).fill(p.primary()).no_stroke());
    }
    b.add(Label::new(ax + tight / 2.0, CONTENT.bottom - 24.0, "Grouped").centered());

    let bx = column_x(4) + 16.0;
    for (dx, dy) in [(0.0, -14.0), (tight, -14.0), (0.0, 14.0), (tight, 14.0)] {
        b.add(Circle::new(bx + dx, cy + dy, r).fill("currentColor").no_stroke());
    }
    b.add(Label::new(bx + tight / 2.0, CONTENT.bottom - 24.0, "Grouped").centered());

    let sx = column_x(8);
    for (fx, dy) in [(0.0, -24.0), (1.0, 8.0), (1.6, -16.0), (0.5, 28.0), (1.3, 24.0)] {
        b.add(Circle::new(sx + loose * fx, cy + dy, r).fill(p.muted()).no_stroke());
    }
    b.add(Label::new(sx + loose * 0.8, CONTENT.bottom - 24.0, "Scattered").centered());
    b
}

/// 4px-based spacing scale drawn as growing bars
pub fn spacing_scale(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Spacing Scale",
        "A consistent spacing scale built on a 4px base unit",
        p,
    );
    let steps = [4.0, 8.0, 12.0, 16.0, 24.0, 32.0, 48.0, 64.0];
    let x = CONTENT.left + 80.0;
    let mut y = CONTENT.top + 16.0;
    for (i, step) in steps.iter().enumerate() {
        let fill = if i == 3 { p.primary() } else { p.dark() };
        b.add(Label::new(CONTENT.left, y + 10.0, format!("{}px", step)));
        b.add(Rect::new(x, y, step * 5.0, 14.0).fill(fill).no_stroke());
        y += 32.0;
    }
    b
}

pub fn type_scale(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Type Scale",
        "A modular type scale with a 1.25 ratio from caption to display",
        p,
    );
    let ratio: f64 = 1.25;
    let names = ["Caption", "Body", "Subtitle", "Title", "Heading", "Display"];
    let mut y = CONTENT.top + 10.0;
    for (i, name) in names.iter().enumerate() {
        let size = (12.0 * ratio.powi(i as i32)).round();
        y += size + 12.0;
        let fill = if i == names.len() - 1 { p.primary() } else { p.dark() };
        b.add(Label::new(CONTENT.left, y, format!("{}px", size)));
        b.add(Text::new(CONTENT.left + 70.0, y, *name).font_size(size).weight("600").fill(fill));
    }
    b
}

pub fn alignment_grid(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Alignment Comparison",
        "Side-by-side comparison of aligned vs misaligned elements",
        p,
    );
    let w = span_width(6);
    let top = CONTENT.top + 20.0;

    // Misaligned
    let left = column_x(0);
    for (i, (dx, width)) in [(12.0, 140.0), (0.0, 170.0), (28.0, 110.0), (6.0, 150.0)].iter().enumerate() {
        b.add(Rect::new(left + 20.0 + dx, top + 20.0 + i as f64 * 40.0, *width, 20.0).fill(p.light()).no_stroke());
    }
    b.add(Label::new(left + w / 2.0, CONTENT.bottom, "Misaligned").centered());

    // Aligned, with the shared edge drawn as a guide
    let right = column_x(6);
    let edge = right + 20.0;
    b.add(Line::new(edge, top, edge, top + 180.0).stroke(p.primary()).stroke_width(1.0).dashed("4 4"));
    for (i, width) in [140.0, 170.0, 110.0, 150.0].iter().enumerate() {
        b.add(Rect::new(edge, top + 20.0 + i as f64 * 40.0, *width, 20.0).fill(p.dark()).no_stroke());
    }
    b.add(Label::new(right + w / 2.0, CONTENT.bottom, "Aligned").centered());
    b
}

pub fn balance_types(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Balance Types",
        "Comparison of symmetrical and asymmetrical balance in design",
        p,
    );
    let w = span_width(6);
    let top = CONTENT.top + 20.0;
    let h = 190.0;

    let left = column_x(0);
    let axis = left + w / 2.0;
    b.add(Rect::new(left, top, w, h).rounded(6.0).stroke(p.light()));
    b.add(Line::new(axis, top, axis, top + h).stroke(p.primary()).stroke_width(1.0).dashed("4 4"));
    b.add(Rect::new(axis - 80.0, top + 40.0, 60.0, 60.0).fill(p.dark()).no_stroke());
    b.add(Rect::new(axis + 20.0, top + 40.0, 60.0, 60.0).fill(p.dark()).no_stroke());
    b.add(Rect::new(axis - 60.0, top + 130.0, 120.0, 20.0).fill(p.muted()).no_stroke());
    b.add(Label::new(axis, top + h + 30.0, "Symmetrical").centered());

    let right = column_x(6);
    b.add(Rect::new(right, top, w, h).rounded(6.0).stroke(p.light()));
    b.add(Rect::new(right + 24.0, top + 30.0, 110.0, 110.0).fill(p.dark()).no_stroke());
    b.add(Circle::new(right + w - 50.0, top + 60.0, 14.0).fill(p.primary()).no_stroke());
    b.add(Circle::new(right + w - 40.0, top + 140.0, 22.0).fill(p.muted()).no_stroke());
    b.add(Label::new(right + w / 2.0, top + h + 30.0, "Asymmetrical").centered());
    b
}

pub fn figure_ground(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Figure-Ground",
        "The brain separates foreground (figure) from background (ground)",
        p,
    );
    let size = 200.0;
    let x = CONTENT.center_x - size / 2.0;
    let y = CONTENT.top + 10.0;
    let cx = CONTENT.center_x;

    b.add(Rect::new(x, y, size, size).fill(p.dark()).no_stroke());
    // Vase silhouette; the two faces are the ground on either side
    b.add(
        Path::new(format!(
            "M {l} {t} L {r} {t} C {r2} {t2}, {r3} {m}, {r4} {m2} C {r3} {b1}, {r2} {b2}, {r} {bt} L {l} {bt} C {l2} {b2}, {l3} {b1}, {l4} {m2} C {l3} {m}, {l2} {t2}, {l} {t} Z",
            l = cx - 50.0,
            r = cx + 50.0,
            t = y + 20.0,
            bt = y + size - 20.0,
            r2 = cx + 20.0,
            r3 = cx + 70.0,
            r4 = cx + 10.0,
            l2 = cx - 20.0,
            l3 = cx - 70.0,
            l4 = cx - 10.0,
            t2 = y + 60.0,
            m = y + 80.0,
            m2 = y + 100.0,
            b1 = y + 130.0,
            b2 = y + 150.0,
        ))
        .fill(p.bg())
        .no_stroke(),
    );
    b.add(Label::new(x - 16.0, y + size / 2.0, "Faces").anchor(TextAnchor::End));
    b.add(Label::new(x + size + 16.0, y + size / 2.0, "Vase"));
    b.add(Label::new(cx, CONTENT.bottom, "Which is the figure?").centered());
    b
}

pub fn closure_principle(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Closure Principle",
        "The brain completes incomplete shapes, seeing wholes from parts",
        p,
    );
    let cy = CONTENT.center_y - 10.0;

    // Broken circle
    let cx = column_x(2) + 20.0;
    let r = 60.0;
    b.add(Circle::new(cx, cy, r).stroke(p.dark()).stroke_width(6.0).dashed("40 18"));
    b.add(Label::new(cx, cy + r + 40.0, "Circle").centered());

    // Three corner pieces that imply a triangle
    let tx = CONTENT.center_x;
    let pts = [(tx, cy - 60.0), (tx - 65.0, cy + 55.0), (tx + 65.0, cy + 55.0)];
    for (i, (x, y)) in pts.iter().enumerate() {
        let (nx, ny) = pts[(i + 1) % 3];
        let (px, py) = pts[(i + 2) % 3];
        b.add(
            Path::new(format!(
                "M {} {} L {} {} L {} {}",
                x + (nx - x) * 0.3,
                y + (ny - y) * 0.3,
                x,
                y,
                x + (px - x) * 0.3,
                y + (py - y) * 0.3
            ))
            .stroke(p.dark())
            .stroke_width(6.0),
        );
    }
    b.add(Label::new(tx, cy + r + 40.0, "Triangle").centered());

    // Rectangle from four corners
    let rx = column_x(9);
    let (rw, rh) = (90.0, 90.0);
    let ry = cy - rh / 2.0;
    let arm = 22.0;
    for (x, y, dx, dy) in [
        (rx, ry, 1.0, 1.0),
        (rx + rw, ry, -1.0, 1.0),
        (rx, ry + rh, 1.0, -1.0),
        (rx + rw, ry + rh, -1.0, -1.0),
    ] {
        b.add(
            Path::new(format!(
                "M {} {} L {} {} L {} {}",
                x + dx * arm,
                y,
                x,
                y,
                x,
                y + dy * arm
            ))
            .stroke(p.primary())
            .stroke_width(6.0),
        );
    }
    b.add(Label::new(rx + rw / 2.0, cy + r + 40.0, "Square").centered());
    b
}
