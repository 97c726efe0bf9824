//! Design systems: components, tokens and handoff

use crate::illustration::grid::{centered_row, column_x, span_width, CONTENT};
use crate::palette::Palette;
use crate::renderer::{Arrow, Circle, Label, Line, Path, Rect, SvgBuilder, Text, TextAnchor};

use super::{filled_box, labeled_box, titled};

pub fn component_anatomy(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Component Anatomy",
        "Breakdown of a button component showing its parts",
        p,
    );
    let (w, h) = (200.0, 56.0);
    let x = CONTENT.center_x - w / 2.0;
    let y = CONTENT.center_y - h / 2.0;
    b.add(Rect::new(x, y, w, h).rounded(8.0).fill(p.primary()).no_stroke());
    b.add(Circle::new(x + 36.0, y + h / 2.0, 9.0).stroke(p.bg()).stroke_width(2.0));
    b.add(Text::new(x + 60.0, y + h / 2.0 + 5.0, "Get started").font_size(16.0).fill(p.bg()).bold());

    // Callouts
    let callouts = [
        ("Container", x + w - 10.0, y + 6.0, CONTENT.right - 40.0, CONTENT.top + 20.0),
        ("Icon", x + 36.0, y, x - 40.0, CONTENT.top + 20.0),
        ("Label", x + 110.0, y + h, x + 110.0, CONTENT.bottom - 30.0),
        ("Padding", x, y + h / 2.0, CONTENT.left + 10.0, CONTENT.bottom - 30.0),
    ];
    for (name, from_x, from_y, to_x, to_y) in callouts {
        b.add(Line::new(from_x, from_y, to_x, to_y).stroke(p.muted()).stroke_width(1.0));
        b.add(Circle::new(from_x, from_y, 3.0).fill(p.dark()).no_stroke());
        let anchor_y = if to_y < from_y { to_y - 6.0 } else { to_y + 16.0 };
        b.add(Label::new(to_x, anchor_y, name).centered());
    }
    b
}

pub fn design_system_layers(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Design System Layers",
        "The layers of a design system from principles to patterns",
        p,
    );
    let layers = ["Principles", "Tokens", "Components", "Patterns", "Templates"];
    let h = 40.0;
    for (i, name) in layers.iter().enumerate() {
        let w = 180.0 + i as f64 * 60.0;
        let x = CONTENT.center_x - w / 2.0;
        let y = CONTENT.top + i as f64 * (h + 10.0);
        if i == 1 {
            filled_box(&mut b, x, y, w, h, name, &p.primary());
        } else {
            labeled_box(&mut b, x, y, w, h, name, &p.dark());
        }
    }
    b.add(Label::new(CONTENT.left, CONTENT.top + 10.0, "Abstract"));
    b.add(Label::new(CONTENT.left, CONTENT.top + 4.0 * (h + 10.0) + 24.0, "Concrete"));
    b
}

pub fn component_states(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Component States",
        "A button component shown in different interactive states",
        p,
    );
    let states = [
        ("Default", p.primary(), 1.0, false),
        ("Hover", "#c92a37".to_string(), 1.0, false),
        ("Focus", p.primary(), 1.0, true),
        ("Active", "#a61e2a".to_string(), 1.0, false),
        ("Disabled", p.light(), 0.6, false),
    ];
    let w = 84.0;
    let xs = centered_row(states.len(), w, 10.0);
    let y = CONTENT.center_y - 18.0;
    for ((name, fill, opacity, focus), x) in states.into_iter().zip(xs) {
        if focus {
            b.add(
                Rect::new(x - 4.0, y - 4.0, w + 8.0, 44.0)
                    .rounded(10.0)
                    .stroke(p.info())
                    .stroke_width(2.0),
            );
        }
        b.add(Rect::new(x, y, w, 36.0).rounded(6.0).fill(fill).no_stroke().opacity(opacity));
        b.add(Text::new(x + w / 2.0, y + 22.0, "Button").font_size(12.0).fill(p.bg()).centered().bold());
        b.add(Label::new(x + w / 2.0, y + 70.0, name).centered());
    }
    b
}

pub fn token_hierarchy(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Token Hierarchy",
        "How design tokens layer from primitive to semantic to component",
        p,
    );
    let tiers = [
        ("Primitive", "red-500", "#e63946"),
        ("Semantic", "color-action-primary", "{red-500}"),
        ("Component", "button-background", "{color-action-primary}"),
    ];
    let w = span_width(4) - 6.0;
    for (i, (tier, name, value)) in tiers.iter().enumerate() {
        let x = column_x(i * 4);
        let y = CONTENT.top + 60.0;
        b.add(Label::new(x, y - 12.0, *tier));
        b.add(Rect::new(x, y, w, 90.0).rounded(6.0).stroke(if i == 1 { p.primary() } else { p.dark() }));
        b.add(Text::new(x + 10.0, y + 32.0, *name).font_size(11.0).mono().bold());
        b.add(Text::new(x + 10.0, y + 60.0, *value).font_size(11.0).fill(p.muted()).mono());
        if i < tiers.len() - 1 {
            b.add(Arrow::new(x + w + 2.0, y + 45.0, column_x((i + 1) * 4) - 2.0, y + 45.0).stroke(p.muted()));
        }
    }
    b.add(Circle::new(column_x(0) + w - 20.0, CONTENT.top + 80.0, 8.0).fill("#e63946").no_stroke());
    b.add(Label::new(CONTENT.center_x, CONTENT.bottom - 20.0, "References flow right, values resolve left").centered());
    b
}

pub fn atomic_design(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Atomic Design",
        "Component hierarchy from atoms to molecules to organisms",
        p,
    );
    let y = CONTENT.center_y;

    // Atom
    let ax = column_x(1);
    b.add(Circle::new(ax + 20.0, y, 20.0).fill(p.primary()).no_stroke());
    b.add(Label::new(ax + 20.0, y + 60.0, "Atom").centered());
    b.add(Arrow::new(ax + 56.0, y, column_x(3) + 10.0, y).stroke(p.muted()));

    // Molecule: input plus button
    let mx = column_x(3) + 20.0;
    b.add(Rect::new(mx, y - 16.0, 70.0, 32.0).rounded(4.0).stroke(p.dark()));
    b.add(Rect::new(mx + 76.0, y - 16.0, 36.0, 32.0).rounded(4.0).fill(p.primary()).no_stroke());
    b.add(Label::new(mx + 56.0, y + 60.0, "Molecule").centered());
    b.add(Arrow::new(mx + 124.0, y, column_x(7) - 8.0, y).stroke(p.muted()));

    // Organism: header bar with several molecules
    let ox = column_x(7);
    let ow = span_width(5);
    b.add(Rect::new(ox, y - 50.0, ow, 100.0).rounded(6.0).stroke(p.dark()));
    b.add(Rect::new(ox + 10.0, y - 40.0, 40.0, 14.0).fill(p.dark()).no_stroke());
    for i in 0..3 {
        b.add(Rect::new(ox + 70.0 + i as f64 * 40.0, y - 38.0, 30.0, 10.0).fill(p.light()).no_stroke());
    }
    b.add(Rect::new(ox + 10.0, y + 4.0, 110.0, 28.0).rounded(4.0).stroke(p.dark()));
    b.add(Rect::new(ox + 126.0, y + 4.0, 40.0, 28.0).rounded(4.0).fill(p.primary()).no_stroke());
    b.add(Label::new(ox + ow / 2.0, y + 80.0, "Organism").centered());
    b
}

pub fn design_handoff_flow(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Design Handoff Flow",
        "The process of preparing and handing off designs to developers",
        p,
    );
    let steps = ["Design", "Annotate", "Review", "Handoff", "Build"];
    let w = 80.0;
    let xs = centered_row(steps.len(), w, 20.0);
    let y = CONTENT.center_y - 24.0;
    for (i, (step, x)) in steps.iter().zip(xs.iter()).enumerate() {
        if i == 3 {
            filled_box(&mut b, *x, y, w, 48.0, step, &p.primary());
        } else {
            labeled_box(&mut b, *x, y, w, 48.0, step, &p.dark());
        }
        if i + 1 < steps.len() {
            b.add(Arrow::new(x + w + 2.0, y + 24.0, x + w + 18.0, y + 24.0).stroke(p.muted()));
        }
    }
    b.add(
        Path::new(format!(
            "M {} {} C {} {} {} {} {} {}",
            xs[4] + w / 2.0,
            y + 60.0,
            xs[4] + w / 2.0,
            y + 120.0,
            xs[2] + w / 2.0,
            y + 120.0,
            xs[2] + w / 2.0,
            y + 60.0
        ))
        .stroke(p.muted())
        .dashed("4 4"),
    );
    b.add(Label::new(xs[3] + w / 2.0, y + 130.0, "Feedback").centered());
    b
}

pub fn token_pipeline(p: &Palette) -> SvgBuilder {
    let mut b = titled("Token Pipeline", "How tokens flow from design to code", p);
    let source_x = CONTENT.left;
    let y = CONTENT.center_y;
    labeled_box(&mut b, source_x, y - 30.0, 100.0, 60.0, "Figma", &p.dark());
    b.add(Arrow::new(source_x + 104.0, y, source_x + 140.0, y).stroke(p.muted()));
    labeled_box(&mut b, source_x + 144.0, y - 30.0, 100.0, 60.0, "tokens.json", &p.dark());
    b.add(Arrow::new(source_x + 248.0, y, source_x + 284.0, y).stroke(p.muted()));
    filled_box(&mut b, source_x + 288.0, y - 30.0, 80.0, 60.0, "Build", &p.primary());

    let outputs = ["CSS", "Swift", "Kotlin"];
    let ox = CONTENT.right - 70.0;
    for (i, out) in outputs.iter().enumerate() {
        let oy = y - 80.0 + i as f64 * 80.0;
        b.add(Arrow::new(source_x + 372.0, y, ox - 4.0, oy).stroke(p.muted()));
        labeled_box(&mut b, ox, oy - 18.0, 70.0, 36.0, out, &p.dark());
    }
    b
}

pub fn token_file_structure(p: &Palette) -> SvgBuilder {
    let mut b = titled("Token File Structure", "Organised token files by category", p);
    let entries = [
        (0, "tokens/"),
        (1, "primitives/"),
        (2, "color.json"),
        (2, "spacing.json"),
        (2, "typography.json"),
        (1, "semantic/"),
        (2, "light.json"),
        (2, "dark.json"),
        (1, "components/"),
        (2, "button.json"),
    ];
    let x = CONTENT.left + 60.0;
    for (i, (depth, name)) in entries.iter().enumerate() {
        let y = CONTENT.top + 10.0 + i as f64 * 26.0;
        let ix = x + *depth as f64 * 24.0;
        if *depth > 0 {
            b.add(
                Line::new(ix - 16.0, y - 4.0, ix - 4.0, y - 4.0)
                    .stroke(p.light())
                    .stroke_width(1.0),
            );
        }
        let folder = name.ends_with('/');
        let fill = if folder { p.primary() } else { p.dark() };
        b.add(Text::new(ix, y, *name).font_size(12.0).fill(fill).mono());
    }
    b
}

pub fn icon_sizing(p: &Palette) -> SvgBuilder {
    let mut b = titled("Icon Sizing", "Design icons for their target size", p);
    let sizes = [16.0, 20.0, 24.0, 32.0, 48.0];
    let gap = 36.0;
    let total: f64 = sizes.iter().sum::<f64>() + gap * (sizes.len() as f64 - 1.0);
    let mut x = CONTENT.center_x - total / 2.0;
    let base = CONTENT.center_y + 24.0;
    for size in sizes {
        let y = base - size;
        b.add(Rect::new(x, y, size, size).stroke(p.light()).stroke_width(1.0).dashed("2 2"));
        let stroke = (size / 12.0).clamp(1.5, 3.0);
        b.add(
            Path::new(format!(
                "M {} {} L {} {} L {} {}",
                x + size * 0.2,
                y + size * 0.55,
                x + size * 0.42,
                y + size * 0.75,
                x + size * 0.8,
                y + size * 0.3
            ))
            .stroke(p.dark())
            .stroke_width(stroke),
        );
        b.add(Label::new(x + size / 2.0, base + 24.0, format!("{}px", size)).centered());
        x += size + gap;
    }
    b.add(Label::new(CONTENT.center_x, CONTENT.bottom - 10.0, "Stroke scales with size").centered());
    b
}

pub fn polish_checklist(p: &Palette) -> SvgBuilder {
    let mut b = titled("Polish Checklist", "The three pillars of interface polish", p);
    let pillars = [
        ("Consistency", ["Spacing on scale", "Shared radii", "One icon set"]),
        ("Feedback", ["Hover states", "Loading states", "Error messages"]),
        ("Details", ["Optical alignment", "Empty states", "Focus rings"]),
    ];
    let w = span_width(4) - 8.0;
    for (i, (pillar, items)) in pillars.iter().enumerate() {
        let x = column_x(i * 4);
        let y = CONTENT.top + 20.0;
        b.add(Rect::new(x, y, w, 200.0).rounded(8.0).stroke(p.light()));
        b.add(Text::new(x + 14.0, y + 28.0, *pillar).font_size(14.0).bold());
        for (j, item) in items.iter().enumerate() {
            let iy = y + 64.0 + j as f64 * 40.0;
            b.add(Rect::new(x + 14.0, iy - 11.0, 14.0, 14.0).rounded(3.0).fill(p.primary()).no_stroke());
            b.add(
                Path::new(format!("M {} {} l 3 3 l 6 -7", x + 17.0, iy - 4.0))
                    .stroke(p.bg())
                    .stroke_width(2.0),
            );
            b.add(Text::new(x + 36.0, iy, *item).font_size(12.0).anchor(TextAnchor::Start));
        }
    }
    b
}
