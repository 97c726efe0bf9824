//! Platform conventions: device families and navigation

use crate::illustration::grid::{column_x, span_width, CONTENT};
use crate::palette::Palette;
use crate::renderer::{Circle, Label, Line, Rect, SvgBuilder, Text};

use super::titled;

/// Device outline: name, width, height, corner radius, detail
type Device = (&'static str, f64, f64, f64, &'static str);

fn device_row(b: &mut SvgBuilder, devices: &[Device], accent: &str) {
    let gap = 40.0;
    let total: f64 = devices.iter().map(|d| d.1).sum::<f64>() + gap * (devices.len() as f64 - 1.0);
    let mut x = CONTENT.center_x - total / 2.0;
    let base = CONTENT.bottom - 50.0;
    let stroke = b.palette().dark();
    let muted = b.palette().muted();
    for (name, w, h, r, detail) in devices {
        let y = base - h;
        b.add(Rect::new(x, y, *w, *h).rounded(*r).stroke(stroke.as_str()).stroke_width(2.0));
        b.add(
            Rect::new(x + 6.0, y + 6.0, w - 12.0, h - 12.0)
                .rounded((r - 4.0).max(2.0))
                .fill(accent)
                .fill_opacity(0.1)
                .no_stroke(),
        );
        b.add(Label::new(x + w / 2.0, base + 20.0, *name).centered());
        b.add(Text::new(x + w / 2.0, base + 36.0, *detail).font_size(10.0).fill(muted.as_str()).centered());
        x += w + gap;
    }
}

pub fn apple_device_family(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Apple Device Family",
        "Design considerations for iPhone, iPad, and Apple Watch",
        p,
    );
    let devices: [Device; 3] = [
        ("iPhone", 90.0, 180.0, 18.0, "Compact width"),
        ("iPad", 170.0, 220.0, 14.0, "Regular width"),
        ("Watch", 60.0, 72.0, 16.0, "Glanceable"),
    ];
    device_row(&mut b, &devices, &p.info());
    b
}

pub fn android_device_family(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Android Device Family",
        "Design for phones, tablets, foldables, and Wear OS",
        p,
    );
    let devices: [Device; 4] = [
        ("Phone", 80.0, 170.0, 12.0, "Compact"),
        ("Foldable", 140.0, 170.0, 12.0, "Medium"),
        ("Tablet", 150.0, 210.0, 12.0, "Expanded"),
        ("Wear OS", 60.0, 60.0, 30.0, "Round"),
    ];
    device_row(&mut b, &devices, &p.success());
    // Fold line on the foldable
    let gap = 40.0;
    let total: f64 = devices.iter().map(|d| d.1).sum::<f64>() + gap * 3.0;
    let fold_x = CONTENT.center_x - total / 2.0 + 80.0 + gap + 70.0;
    let base = CONTENT.bottom - 50.0;
    b.add(
        Line::new(fold_x, base - 170.0, fold_x, base)
            .stroke(p.muted())
            .stroke_width(1.0)
            .dashed("4 3"),
    );
    b
}

pub fn navigation_patterns(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Navigation Patterns",
        "Common navigation UI patterns: tabs, breadcrumbs, sidebar",
        p,
    );
    let w = span_width(4) - 8.0;
    let y = CONTENT.top + 20.0;
    let h = 180.0;

    // Tabs
    let x = column_x(0);
    b.add(Rect::new(x, y, w, h).rounded(6.0).stroke(p.light()));
    for i in 0..3 {
        let tx = x + 10.0 + i as f64 * 44.0;
        b.add(Text::new(tx, y + 26.0, format!("Tab {}", i + 1)).font_size(10.0));
    }
    b.add(Line::new(x + 10.0, y + 34.0, x + 46.0, y + 34.0).stroke(p.primary()).stroke_width(2.0));
    b.add(Line::new(x, y + 36.0, x + w, y + 36.0).stroke(p.light()).stroke_width(1.0));
    b.add(Label::new(x + w / 2.0, y + h + 24.0, "Tabs").centered());

    // Breadcrumbs
    let x = column_x(4);
    b.add(Rect::new(x, y, w, h).rounded(6.0).stroke(p.light()));
    b.add(Text::new(x + 10.0, y + 26.0, "Home / Docs / Tokens").font_size(10.0).fill(p.muted()));
    b.add(Rect::new(x + 10.0, y + 44.0, w - 20.0, 12.0).fill(p.light()).no_stroke());
    b.add(Label::new(x + w / 2.0, y + h + 24.0, "Breadcrumbs").centered());

    // Sidebar
    let x = column_x(8);
    b.add(Rect::new(x, y, w, h).rounded(6.0).stroke(p.light()));
    b.add(Rect::new(x, y, 52.0, h).fill(p.light()).fill_opacity(0.5).no_stroke());
    for i in 0..5 {
        let fill = if i == 1 { p.primary() } else { p.muted() };
        b.add(Circle::new(x + 14.0, y + 24.0 + i as f64 * 26.0, 4.0).fill(fill.as_str()).no_stroke());
        b.add(Rect::new(x + 22.0, y + 21.0 + i as f64 * 26.0, 22.0, 6.0).fill(fill).no_stroke());
    }
    b.add(Label::new(x + w / 2.0, y + h + 24.0, "Sidebar").centered());
    b
}
