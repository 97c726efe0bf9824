//! Accessibility: focus order, touch targets and validation

use crate::illustration::grid::{centered_row, column_x, span_width, CONTENT};
use crate::palette::Palette;
use crate::renderer::{Circle, Label, Line, Path, Rect, SvgBuilder, Text};

use super::titled;

/// Numbered focus badge
fn order_badge(b: &mut SvgBuilder, x: f64, y: f64, n: usize, fill: &str) {
    let bg = b.palette().bg();
    b.add(Circle::new(x, y, 10.0).fill(fill).no_stroke());
    b.add(Text::new(x, y + 4.0, n.to_string()).font_size(11.0).fill(bg).centered().bold());
}

pub fn focus_order(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Focus Order",
        "Tab navigation follows logical visual order through the page",
        p,
    );
    // Page mock: nav, two fields, button
    let x = column_x(2);
    let w = span_width(8);
    let targets = [
        (x + 16.0, CONTENT.top + 16.0, 60.0, 24.0),
        (x + 90.0, CONTENT.top + 16.0, 60.0, 24.0),
        (x + 16.0, CONTENT.top + 80.0, w - 32.0, 32.0),
        (x + 16.0, CONTENT.top + 130.0, w - 32.0, 32.0),
        (x + w - 116.0, CONTENT.top + 190.0, 100.0, 36.0),
    ];
    b.add(Rect::new(x, CONTENT.top, w, 250.0).rounded(8.0).stroke(p.light()));
    let mut prev: Option<(f64, f64)> = None;
    for (i, (tx, ty, tw, th)) in targets.iter().enumerate() {
        let focused = i == 2;
        let stroke = if focused { p.info() } else { p.dark() };
        let rect = Rect::new(*tx, *ty, *tw, *th).rounded(4.0).stroke(stroke);
        b.add(if focused { rect.stroke_width(2.5) } else { rect });
        let center = (tx + tw / 2.0, ty + th / 2.0);
        if let Some((px, py)) = prev {
            b.add(
                Line::new(px, py, center.0, center.1)
                    .stroke(p.primary())
                    .stroke_width(1.0)
                    .dashed("3 3"),
            );
        }
        order_badge(&mut b, tx - 2.0, ty - 2.0, i + 1, &p.primary());
        prev = Some(center);
    }
    b.add(Label::new(CONTENT.center_x, CONTENT.bottom, "Tab moves left to right, top to bottom").centered());
    b
}

/// Phone mock with numbered reading order shared by both platforms
fn screen_reader_order(
    p: &Palette,
    title: &str,
    description: &str,
    reader: &str,
    accent: String,
) -> SvgBuilder {
    let mut b = titled(title, description, p);
    let (w, h) = (170.0, 270.0);
    let x = CONTENT.left + 40.0;
    let y = CONTENT.top - 10.0;
    b.add(Rect::new(x, y, w, h).rounded(24.0).stroke(p.dark()).stroke_width(2.0));
    let rows = [
        (y + 30.0, 90.0, 16.0),
        (y + 66.0, 130.0, 70.0),
        (y + 150.0, 130.0, 14.0),
        (y + 174.0, 100.0, 14.0),
        (y + 212.0, 130.0, 34.0),
    ];
    for (i, (ry, rw, rh)) in rows.iter().enumerate() {
        let rx = x + 20.0;
        let fill = if i == 1 { p.light() } else { p.muted() };
        b.add(Rect::new(rx, *ry, *rw, *rh).rounded(4.0).fill(fill).no_stroke().opacity(0.6));
        order_badge(&mut b, x + w - 14.0, ry + rh / 2.0, i + 1, &accent);
    }
    b.add(
        Rect::new(x + 16.0, y + 62.0, 138.0, 78.0)
            .rounded(6.0)
            .stroke(accent.as_str())
            .stroke_width(3.0),
    );

    let tx = x + w + 50.0;
    b.add(Text::new(tx, CONTENT.top + 30.0, reader.to_string()).font_size(16.0).bold());
    let notes = [
        "Reads top to bottom",
        "Groups related elements",
        "Announces role and state",
        "Skips decorative images",
    ];
    for (i, note) in notes.iter().enumerate() {
        b.add(Text::new(tx, CONTENT.top + 64.0 + i as f64 * 26.0, *note).font_size(12.0).fill(p.muted()));
    }
    b
}

pub fn ios_accessibility_focus(p: &Palette) -> SvgBuilder {
    screen_reader_order(
        p,
        "iOS Accessibility Focus Order",
        "VoiceOver navigates elements in a logical top-to-bottom, left-to-right order",
        "VoiceOver",
        p.info(),
    )
}

pub fn android_accessibility_focus(p: &Palette) -> SvgBuilder {
    screen_reader_order(
        p,
        "Android Accessibility Focus Order",
        "TalkBack navigates elements sequentially for screen reader users",
        "TalkBack",
        p.success(),
    )
}

pub fn touch_target_sizes(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Touch Target Sizes",
        "Minimum touch target sizes for accessible interfaces",
        p,
    );
    let targets = [
        (24.0, "24px", "Too small", p.error()),
        (44.0, "44pt", "iOS minimum", p.success()),
        (48.0, "48dp", "Android minimum", p.success()),
    ];
    // Drawn at 2x
    let scale = 2.0;
    let xs = centered_row(targets.len(), 96.0, 60.0);
    let base = CONTENT.center_y + 50.0;
    for ((size, name, verdict, color), x) in targets.iter().zip(xs) {
        let cx = x + 48.0;
        let w = size * scale;
        b.add(
            Rect::new(cx - w / 2.0, base - w, w, w)
                .rounded(8.0)
                .fill(color.as_str())
                .fill_opacity(0.12)
                .stroke(color.as_str())
                .dashed("4 3"),
        );
        b.add(Circle::new(cx, base - w / 2.0, 8.0).fill(p.dark()).no_stroke());
        b.add(Text::new(cx, base + 24.0, *name).font_size(14.0).centered().bold());
        b.add(Label::new(cx, base + 42.0, *verdict).centered());
    }
    b
}

pub fn form_validation_states(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Form Validation States",
        "Visual states for form input validation",
        p,
    );
    let states = [
        ("Default", p.light(), "Email", None),
        ("Focus", p.info(), "name@", None),
        ("Error", p.error(), "name@", Some("Enter a valid email")),
        ("Success", p.success(), "name@site.com", Some("Looks good")),
    ];
    let w = span_width(6);
    for (i, (state, color, value, message)) in states.into_iter().enumerate() {
        let x = column_x((i % 2) * 6);
        let y = CONTENT.top + 10.0 + (i / 2) as f64 * 130.0;
        b.add(Label::new(x, y + 10.0, state));
        b.add(
            Rect::new(x, y + 20.0, w, 40.0)
                .rounded(6.0)
                .stroke(color.as_str())
                .stroke_width(if i == 0 { 1.0 } else { 2.0 }),
        );
        b.add(Text::new(x + 12.0, y + 45.0, value).font_size(13.0));
        match (i, message) {
            (2, Some(msg)) => {
                b.add(Circle::new(x + w - 20.0, y + 40.0, 8.0).fill(color.as_str()).no_stroke());
                b.add(Text::new(x, y + 80.0, msg).font_size(11.0).fill(color.as_str()));
            }
            (_, Some(msg)) => {
                b.add(
                    Path::new(format!(
                        "M {} {} l 4 4 l 8 -9",
                        x + w - 26.0,
                        y + 40.0
                    ))
                    .stroke(color.as_str())
                    .stroke_width(2.0),
                );
                b.add(Text::new(x, y + 80.0, msg).font_size(11.0).fill(color.as_str()));
            }
            (_, None) => {}
        }
    }
    b
}
