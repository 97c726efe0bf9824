//! Web platform and layout: grids, the box model, flexbox and the DOM

use crate::illustration::grid::{column_x, span_width, COLUMN_WIDTH, CONTENT, GRID};
use crate::palette::Palette;
use crate::renderer::{Arrow, Label, Line, Rect, SvgBuilder, Text, TextAnchor};

use super::{filled_box, labeled_box, titled};

pub fn grid_overlay(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "12-Column Grid System",
        "Visualization of a responsive 12-column grid layout",
        p,
    );
    for i in 0..GRID.columns {
        b.add(
            Rect::new(column_x(i), CONTENT.top, COLUMN_WIDTH, CONTENT.height - 30.0)
                .fill(p.primary())
                .fill_opacity(0.08)
                .no_stroke(),
        );
    }
    // Content blocks snapped to column spans, one row per slice
    let rows: [(f64, f64, &[(usize, usize)]); 3] = [
        (CONTENT.top + 10.0, 40.0, &[(0, 12)]),
        (CONTENT.top + 60.0, 90.0, &[(0, 8), (8, 4)]),
        (CONTENT.top + 160.0, 60.0, &[(0, 4), (4, 4), (8, 4)]),
    ];
    for (y, h, spans) in rows {
        for (start, span) in spans {
            b.add(
                Rect::new(column_x(*start), y, span_width(*span), h)
                    .rounded(3.0)
                    .stroke(p.dark()),
            );
        }
    }
    b.add(Label::new(CONTENT.left, CONTENT.bottom, "12 columns"));
    b.add(
        Label::new(CONTENT.right, CONTENT.bottom, format!("{}px gutter", GRID.gutter))
            .anchor(TextAnchor::End),
    );
    b
}

pub fn box_model(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "CSS Box Model",
        "Visualization of the CSS box model with margin, border, padding, and content",
        p,
    );
    let (cx, cy) = (CONTENT.center_x, CONTENT.center_y);
    let layers = [
        ("Margin", 280.0, 180.0, p.light(), 1.0, 0.19),
        ("Border", 220.0, 140.0, p.muted(), 2.0, 0.19),
        ("Padding", 160.0, 100.0, p.primary(), 1.0, 0.08),
    ];
    for (name, w, h, color, width, opacity) in layers {
        let (x, y) = (cx - w / 2.0, cy - h / 2.0);
        b.add(
            Rect::new(x, y, w, h)
                .fill(color.as_str())
                .fill_opacity(opacity)
                .stroke(color.as_str())
                .stroke_width(width),
        );
        let label = Label::new(x + 8.0, y + 14.0, name);
        b.add(if name == "Padding" { label.fill(color) } else { label });
    }
    b.add(Rect::new(cx - 50.0, cy - 30.0, 100.0, 60.0).fill("currentColor").no_stroke());
    b.add(Label::new(cx, cy + 4.0, "Content").font_size(10.0).fill(p.bg()).centered());
    b
}

pub fn flexbox_axes(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Flexbox Axes",
        "Main axis (horizontal) and cross axis (vertical) in flex layout",
        p,
    );
    let (x, y, w, h) = (CONTENT.left + 60.0, CONTENT.top + 40.0, 360.0, 160.0);
    b.add(Rect::new(x, y, w, h).rounded(6.0).stroke(p.light()).dashed("4 4"));
    for i in 0..3 {
        let ix = x + 30.0 + i as f64 * 110.0;
        filled_box(&mut b, ix, y + 40.0, 80.0, 80.0, &format!("{}", i + 1), &p.dark());
    }
    b.add(Arrow::new(x, y + h + 24.0, x + w, y + h + 24.0).stroke(p.primary()).stroke_width(2.0));
    b.add(Label::new(x + w / 2.0, y + h + 44.0, "Main axis").fill(p.primary()).centered());
    b.add(Arrow::new(x - 24.0, y, x - 24.0, y + h).stroke(p.muted()).stroke_width(2.0));
    b.add(Label::new(x - 32.0, y + h / 2.0, "Cross").anchor(TextAnchor::End));
    b.add(Label::new(x + w + 12.0, y + 12.0, "justify-content"));
    b.add(Label::new(x + w + 12.0, y + 30.0, "align-items"));
    b
}

pub fn grid_template_areas(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Grid Template Areas",
        "Named grid areas for creating complex layouts",
        p,
    );
    let top = CONTENT.top;
    let gap = 8.0;
    let header_h = 40.0;
    let footer_h = 32.0;
    let body_h = CONTENT.height - header_h - footer_h - gap * 2.0 - 24.0;
    let body_y = top + header_h + gap;

    labeled_box(&mut b, CONTENT.left, top, CONTENT.width, header_h, "header", &p.dark());
    labeled_box(&mut b, column_x(0), body_y, span_width(3), body_h, "sidebar", &p.muted());
    b.add(
        Rect::new(column_x(3), body_y, span_width(9), body_h)
            .rounded(4.0)
            .fill(p.primary())
            .fill_opacity(0.1)
            .stroke(p.primary()),
    );
    b.add(Text::new(column_x(3) + span_width(9) / 2.0, body_y + body_h / 2.0, "main").centered());
    labeled_box(
        &mut b,
        CONTENT.left,
        body_y + body_h + gap,
        CONTENT.width,
        footer_h,
        "footer",
        &p.dark(),
    );
    b.add(
        Text::new(CONTENT.left, CONTENT.bottom + 4.0, r#"grid-template-areas: "header header" "sidebar main" "footer footer""#)
            .font_size(10.0)
            .fill(p.muted())
            .mono(),
    );
    b
}

pub fn responsive_breakpoints(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Responsive Breakpoints",
        "The same content adapting to mobile, tablet, and desktop widths",
        p,
    );
    let base = CONTENT.bottom - 30.0;
    let devices = [
        ("Mobile", "< 640px", CONTENT.left, 80.0, 150.0, 1),
        ("Tablet", "640-1024px", CONTENT.left + 110.0, 140.0, 180.0, 2),
        ("Desktop", "> 1024px", CONTENT.left + 280.0, 200.0, 140.0, 3),
    ];
    for (name, range, x, w, h, cols) in devices {
        let y = base - h;
        b.add(Rect::new(x, y, w, h).rounded(6.0).stroke(p.dark()));
        b.add(Rect::new(x + 8.0, y + 8.0, w - 16.0, 12.0).fill(p.primary()).no_stroke());
        let col_w = (w - 16.0 - (cols as f64 - 1.0) * 6.0) / cols as f64;
        for c in 0..cols {
            let cx = x + 8.0 + c as f64 * (col_w + 6.0);
            b.add(Rect::new(cx, y + 28.0, col_w, h - 44.0).fill(p.light()).no_stroke());
        }
        b.add(Label::new(x + w / 2.0, base + 18.0, name).centered());
        b.add(Label::new(x + w / 2.0, base + 32.0, range).font_size(10.0).centered());
    }
    b
}

pub fn css_cascade(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "CSS Cascade",
        "How CSS determines which styles apply when rules conflict",
        p,
    );
    let rules = [
        ("Browser defaults", "p { color: black }"),
        ("Element selector", "p { color: gray }"),
        ("Class selector", ".intro { color: navy }"),
        ("ID selector", "#lead { color: teal }"),
        ("Inline style", "style=\"color: red\""),
    ];
    let x = CONTENT.left;
    let w = 300.0;
    let h = 36.0;
    for (i, (level, code)) in rules.iter().enumerate() {
        let y = CONTENT.top + i as f64 * (h + 10.0);
        let winner = i == rules.len() - 1;
        let stroke = if winner { p.primary() } else { p.light() };
        b.add(Rect::new(x, y, w, h).rounded(4.0).stroke(stroke));
        b.add(Text::new(x + 12.0, y + 15.0, *level).font_size(11.0).weight("600"));
        b.add(Text::new(x + 12.0, y + 29.0, *code).font_size(10.0).fill(p.muted()).mono());
    }
    let ax = x + w + 40.0;
    b.add(
        Arrow::new(ax, CONTENT.top + 4.0 * (h + 10.0) + h, ax, CONTENT.top)
            .stroke(p.primary())
            .stroke_width(2.0),
    );
    b.add(Label::new(ax + 14.0, CONTENT.top + 10.0, "Higher specificity"));
    b.add(Label::new(ax + 14.0, CONTENT.top + 4.0 * (h + 10.0) + h, "Lower specificity"));
    b
}

pub fn html_css_js_layers(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "HTML CSS JS Layers",
        "The three layers of web development: structure, style, and behavior",
        p,
    );
    let layers = [
        ("JavaScript", "Behavior", p.primary()),
        ("CSS", "Presentation", p.muted()),
        ("HTML", "Structure", p.dark()),
    ];
    let w = 260.0;
    let h = 56.0;
    for (i, (name, role, color)) in layers.iter().enumerate() {
        let x = CONTENT.center_x - w / 2.0 + (2 - i) as f64 * 14.0 - 14.0;
        let y = CONTENT.top + 20.0 + i as f64 * (h + 16.0);
        filled_box(&mut b, x, y, w, h, name, color);
        b.add(Label::new(x + w + 20.0, y + h / 2.0 + 4.0, *role));
    }
    b
}

pub fn js_data_types(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "JavaScript Data Types",
        "The fundamental data types in JavaScript",
        p,
    );
    let primitives = [
        ("string", "\"hello\""),
        ("number", "42"),
        ("boolean", "true"),
        ("undefined", "undefined"),
        ("null", "null"),
        ("bigint", "10n"),
        ("symbol", "Symbol()"),
    ];
    b.add(Label::new(CONTENT.left, CONTENT.top, "Primitives"));
    for (i, (name, example)) in primitives.iter().enumerate() {
        let y = CONTENT.top + 14.0 + i as f64 * 34.0;
        b.add(Rect::new(CONTENT.left, y, span_width(6), 28.0).rounded(4.0).stroke(p.light()));
        b.add(Text::new(CONTENT.left + 10.0, y + 18.0, *name).font_size(12.0).weight("600"));
        b.add(
            Text::new(CONTENT.left + span_width(6) - 10.0, y + 18.0, *example)
                .font_size(11.0)
                .fill(p.muted())
                .anchor(TextAnchor::End)
                .mono(),
        );
    }

    let x = column_x(7);
    let w = span_width(5);
    b.add(Label::new(x, CONTENT.top, "Reference"));
    b.add(
        Rect::new(x, CONTENT.top + 14.0, w, 130.0)
            .rounded(6.0)
            .stroke(p.primary())
            .stroke_width(2.0),
    );
    b.add(Text::new(x + 12.0, CONTENT.top + 40.0, "object").font_size(14.0).bold());
    for (i, line) in ["{ name: \"Ada\" }", "[1, 2, 3]", "() => {}"].iter().enumerate() {
        b.add(
            Text::new(x + 12.0, CONTENT.top + 68.0 + i as f64 * 22.0, *line)
                .font_size(11.0)
                .fill(p.muted())
                .mono(),
        );
    }
    b
}

pub fn event_bubbling(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Event Bubbling",
        "Events bubble up from child to parent through the DOM tree",
        p,
    );
    let nodes = ["document", "body", "div.card", "button"];
    let x = CONTENT.left + 40.0;
    for (i, node) in nodes.iter().enumerate() {
        let inset = i as f64 * 28.0;
        let (bx, by) = (x + inset, CONTENT.top + inset);
        let (w, h) = (300.0 - inset * 2.0, 260.0 - inset * 2.0);
        let stroke = if i == nodes.len() - 1 { p.primary() } else { p.muted() };
        b.add(Rect::new(bx, by, w, h).rounded(6.0).stroke(stroke));
        b.add(Text::new(bx + 10.0, by + 18.0, *node).font_size(11.0).mono());
    }
    let ax = x + 340.0;
    b.add(
        Arrow::new(ax, CONTENT.top + 200.0, ax, CONTENT.top + 30.0)
            .stroke(p.primary())
            .stroke_width(2.0),
    );
    b.add(Label::new(ax + 12.0, CONTENT.top + 120.0, "Bubbles up").fill(p.primary()));
    b.add(
        Line::new(ax - 30.0, CONTENT.top + 200.0, ax + 30.0, CONTENT.top + 200.0)
            .stroke(p.light())
            .dashed("3 3"),
    );
    b.add(Label::new(ax + 12.0, CONTENT.top + 220.0, "click"));
    b
}
