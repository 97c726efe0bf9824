//! UX research and interaction design

use crate::illustration::grid::{centered_row, column_x, span_width, CONTENT};
use crate::palette::Palette;
use crate::renderer::{Arrow, Circle, Label, Line, Path, Rect, SvgBuilder, Text, TextAnchor};

use super::{filled_box, labeled_box, titled};

pub fn flow_diagram(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Process Flow Diagram",
        "Horizontal process flow showing connected steps",
        p,
    );
    let steps = ["Research", "Define", "Design", "Test"];
    let w = 90.0;
    let xs = centered_row(steps.len(), w, 36.0);
    let y = CONTENT.center_y - 24.0;
    for (i, (step, x)) in steps.iter().zip(xs.iter()).enumerate() {
        if i == steps.len() - 1 {
            filled_box(&mut b, *x, y, w, 48.0, step, &p.primary());
        } else {
            labeled_box(&mut b, *x, y, w, 48.0, step, &p.dark());
            b.add(Arrow::new(x + w + 4.0, y + 24.0, x + w + 32.0, y + 24.0).stroke(p.muted()));
        }
        b.add(Label::new(x + w / 2.0, y + 72.0, format!("Step {}", i + 1)).centered());
    }
    b
}

pub fn prototype_fidelity(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Prototype Fidelity",
        "The spectrum from rough sketches to interactive prototypes",
        p,
    );
    let stages = ["Sketch", "Wireframe", "Mockup", "Prototype"];
    let w = 100.0;
    let xs = centered_row(stages.len(), w, 18.0);
    let y = CONTENT.top + 30.0;
    for (i, (stage, x)) in stages.iter().zip(xs.iter()).enumerate() {
        let x = *x;
        match i {
            0 => {
                b.add(Rect::new(x, y, w, 150.0).stroke(p.muted()).dashed("6 3"));
                b.add(Path::new(format!("M {} {} q 20 -8 40 0 t 40 0", x + 10.0, y + 30.0)).stroke(p.muted()));
            }
            1 => {
                b.add(Rect::new(x, y, w, 150.0).stroke(p.muted()));
                b.add(Rect::new(x + 10.0, y + 12.0, w - 20.0, 40.0).stroke(p.light()));
                b.add(Line::new(x + 10.0, y + 12.0, x + w - 10.0, y + 52.0).stroke(p.light()).stroke_width(1.0));
            }
            2 => {
                b.add(Rect::new(x, y, w, 150.0).rounded(6.0).stroke(p.light()));
                b.add(Rect::new(x + 10.0, y + 12.0, w - 20.0, 40.0).rounded(4.0).fill(p.info()).fill_opacity(0.4).no_stroke());
                b.add(Rect::new(x + 10.0, y + 120.0, 50.0, 18.0).rounded(4.0).fill(p.primary()).no_stroke());
            }
            _ => {
                b.add(Rect::new(x, y, w, 150.0).rounded(6.0).stroke(p.dark()).stroke_width(2.0));
                b.add(Rect::new(x + 10.0, y + 12.0, w - 20.0, 40.0).rounded(4.0).fill(p.info()).fill_opacity(0.4).no_stroke());
                b.add(Rect::new(x + 10.0, y + 120.0, 50.0, 18.0).rounded(4.0).fill(p.primary()).no_stroke());
                b.add(Path::new(format!("M {} {} l 0 14 l 4 -4 l 6 0 z", x + 44.0, y + 126.0)).fill(p.dark()).no_stroke());
            }
        }
        b.add(Rect::new(x + 10.0, y + 64.0, w - 30.0, 8.0).fill(p.light()).no_stroke());
        b.add(Rect::new(x + 10.0, y + 80.0, w - 44.0, 8.0).fill(p.light()).no_stroke());
        b.add(Label::new(x + w / 2.0, y + 174.0, *stage).centered());
    }
    let ay = y + 206.0;
    b.add(Arrow::new(xs[0], ay, xs[3] + w, ay).stroke(p.primary()));
    b.add(Label::new(xs[0], ay + 18.0, "Low fidelity"));
    b.add(Label::new(xs[3] + w, ay + 18.0, "High fidelity").anchor(TextAnchor::End));
    b
}

/// Tree of boxes: one root, children under it, optional grandchildren
fn draw_tree(b: &mut SvgBuilder, root: &str, children: &[(&str, usize)], top: f64) {
    let dark = b.palette().dark();
    let muted = b.palette().muted();
    let light = b.palette().light();
    let primary = b.palette().primary();
    let w = 84.0;
    let h = 30.0;
    let root_x = CONTENT.center_x - w / 2.0;
    filled_box(b, root_x, top, w, h, root, &primary);

    let xs = centered_row(children.len(), w, 16.0);
    let child_y = top + 80.0;
    for ((name, leaves), x) in children.iter().zip(xs) {
        b.add(Line::new(CONTENT.center_x, top + h, x + w / 2.0, child_y).stroke(muted.as_str()).stroke_width(1.0));
        labeled_box(b, x, child_y, w, h, name, &dark);
        for leaf in 0..*leaves {
            let ly = child_y + 60.0 + leaf as f64 * 28.0;
            b.add(Line::new(x + 10.0, child_y + h, x + 10.0, ly + 9.0).stroke(light.as_str()).stroke_width(1.0));
            b.add(Line::new(x + 10.0, ly + 9.0, x + 20.0, ly + 9.0).stroke(light.as_str()).stroke_width(1.0));
            b.add(Rect::new(x + 20.0, ly, w - 20.0, 18.0).rounded(3.0).fill(light.as_str()).no_stroke());
        }
    }
}

pub fn ia_hierarchy(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Information Architecture",
        "Site map showing hierarchical content organization",
        p,
    );
    draw_tree(
        &mut b,
        "Home",
        &[("Products", 3), ("Learn", 2), ("About", 1), ("Support", 2)],
        CONTENT.top,
    );
    b
}

pub fn empty_state_anatomy(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Empty State Anatomy",
        "The four parts of an effective empty state: illustration, what, why, action",
        p,
    );
    let w = 220.0;
    let x = column_x(0) + 20.0;
    let y = CONTENT.top;
    let cx = x + w / 2.0;
    b.add(Rect::new(x, y, w, 270.0).rounded(10.0).stroke(p.light()));
    b.add(Circle::new(cx, y + 60.0, 34.0).fill(p.light()).no_stroke());
    b.add(Rect::new(cx - 14.0, y + 48.0, 28.0, 24.0).rounded(3.0).stroke(p.muted()));
    b.add(Text::new(cx, y + 128.0, "No projects yet").font_size(15.0).centered().bold());
    b.add(Text::new(cx, y + 150.0, "Projects keep your files together").font_size(11.0).fill(p.muted()).centered());
    b.add(Rect::new(cx - 60.0, y + 180.0, 120.0, 34.0).rounded(6.0).fill(p.primary()).no_stroke());
    b.add(Text::new(cx, y + 202.0, "Create project").font_size(12.0).fill(p.bg()).centered().bold());

    let parts = [
        (y + 60.0, "1. Illustration"),
        (y + 124.0, "2. What is empty"),
        (y + 147.0, "3. Why it matters"),
        (y + 197.0, "4. Next action"),
    ];
    let lx = x + w + 60.0;
    for (py, name) in parts {
        b.add(Line::new(x + w - 10.0, py, lx - 8.0, py).stroke(p.muted()).stroke_width(1.0).dashed("2 3"));
        b.add(Text::new(lx, py + 4.0, name).font_size(13.0).weight("600"));
    }
    b
}

pub fn affordance_signifier(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Affordance and Signifier",
        "Affordances are what you can do; signifiers show you how",
        p,
    );
    let w = span_width(6);
    let y = CONTENT.top + 20.0;

    let left = column_x(0);
    b.add(Rect::new(left, y, w, 200.0).rounded(8.0).stroke(p.light()));
    b.add(Rect::new(left + 40.0, y + 70.0, w - 80.0, 50.0).rounded(6.0).fill(p.light()).no_stroke());
    b.add(Text::new(left + w / 2.0, y + 150.0, "Can be pressed").font_size(12.0).fill(p.muted()).centered());
    b.add(Label::new(left + w / 2.0, y + 230.0, "Affordance").centered());

    let right = column_x(6);
    b.add(Rect::new(right, y, w, 200.0).rounded(8.0).stroke(p.light()));
    b.add(Rect::new(right + 40.0, y + 74.0, w - 80.0, 50.0).rounded(6.0).fill(p.dark()).opacity(0.2).no_stroke());
    b.add(Rect::new(right + 40.0, y + 70.0, w - 80.0, 50.0).rounded(6.0).fill(p.primary()).no_stroke());
    b.add(Text::new(right + w / 2.0, y + 100.0, "Press me").font_size(14.0).fill(p.bg()).centered().bold());
    b.add(Text::new(right + w / 2.0, y + 150.0, "Shadow, colour and label").font_size(12.0).fill(p.muted()).centered());
    b.add(Label::new(right + w / 2.0, y + 230.0, "Signifier").centered());
    b
}

pub fn false_hidden_affordances(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "False and Hidden Affordances",
        "Comparing false affordances, correct affordances, and hidden affordances",
        p,
    );
    let w = span_width(4) - 8.0;
    let y = CONTENT.top + 20.0;
    let cases = [
        ("False", "Looks clickable, isn't", p.error()),
        ("Correct", "Looks like what it does", p.success()),
        ("Hidden", "Works, but invisible", p.warning()),
    ];
    for (i, (name, detail, color)) in cases.iter().enumerate() {
        let x = column_x(i * 4);
        let cx = x + w / 2.0;
        b.add(Rect::new(x, y, w, 180.0).rounded(8.0).stroke(p.light()));
        match i {
            0 => {
                b.add(Text::new(cx, y + 90.0, "Heading text").font_size(14.0).fill(p.info()).centered());
                b.add(Line::new(cx - 46.0, y + 94.0, cx + 46.0, y + 94.0).stroke(p.info()).stroke_width(1.0));
            }
            1 => {
                b.add(Rect::new(cx - 50.0, y + 70.0, 100.0, 36.0).rounded(6.0).fill(p.primary()).no_stroke());
                b.add(Text::new(cx, y + 93.0, "Save").font_size(13.0).fill(p.bg()).centered().bold());
            }
            _ => {
                b.add(Rect::new(x + 16.0, y + 70.0, w - 32.0, 40.0).rounded(4.0).fill(p.light()).fill_opacity(0.6).no_stroke());
                b.add(Text::new(x + w - 24.0, y + 95.0, "swipe").font_size(10.0).fill(p.light()).anchor(TextAnchor::End));
            }
        }
        b.add(Circle::new(x + 18.0, y + 18.0, 6.0).fill(color.as_str()).no_stroke());
        b.add(Text::new(cx, y + 210.0, *name).font_size(13.0).centered().bold());
        b.add(Text::new(cx, y + 228.0, *detail).font_size(11.0).fill(p.muted()).centered());
    }
    b
}

pub fn signifier_strength(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Signifier Strength",
        "Match signifier strength to action importance",
        p,
    );
    let levels = [("Tertiary", "Link"), ("Secondary", "Outline"), ("Primary", "Filled")];
    let w = 120.0;
    let xs = centered_row(levels.len(), w, 30.0);
    let y = CONTENT.center_y - 20.0;
    for (i, ((level, style), x)) in levels.iter().zip(xs.iter()).enumerate() {
        let x = *x;
        match i {
            0 => {
                b.add(Text::new(x + w / 2.0, y + 24.0, "Learn more").font_size(13.0).fill(p.primary()).centered());
            }
            1 => {
                b.add(Rect::new(x, y, w, 40.0).rounded(6.0).stroke(p.primary()));
                b.add(Text::new(x + w / 2.0, y + 25.0, "Preview").font_size(13.0).fill(p.primary()).centered().bold());
            }
            _ => {
                b.add(Rect::new(x, y, w, 40.0).rounded(6.0).fill(p.primary()).no_stroke());
                b.add(Text::new(x + w / 2.0, y + 25.0, "Publish").font_size(13.0).fill(p.bg()).centered().bold());
            }
        }
        b.add(Label::new(x + w / 2.0, y + 70.0, *level).centered());
        b.add(Text::new(x + w / 2.0, y + 88.0, *style).font_size(11.0).fill(p.muted()).centered());
    }
    b.add(Arrow::new(xs[0], CONTENT.bottom - 20.0, xs[2] + w, CONTENT.bottom - 20.0).stroke(p.muted()));
    b.add(Label::new(xs[2] + w, CONTENT.bottom - 30.0, "Importance").anchor(TextAnchor::End));
    b
}

const HEURISTICS: [&str; 10] = [
    "Visibility of status",
    "Match the real world",
    "User control",
    "Consistency",
    "Error prevention",
    "Recognition over recall",
    "Flexibility",
    "Minimalist design",
    "Error recovery",
    "Help and docs",
];

pub fn heuristics_grid(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Nielsen's 10 Usability Heuristics",
        "Quick reference grid of all 10 usability heuristics",
        p,
    );
    let cols = 5;
    let gap = 8.0;
    let w = (CONTENT.width - gap * (cols as f64 - 1.0)) / cols as f64;
    let h = 120.0;
    for (i, name) in HEURISTICS.iter().enumerate() {
        let x = CONTENT.left + (i % cols) as f64 * (w + gap);
        let y = CONTENT.top + 10.0 + (i / cols) as f64 * (h + gap);
        b.add(Rect::new(x, y, w, h).rounded(6.0).stroke(p.light()));
        b.add(Text::new(x + 10.0, y + 30.0, (i + 1).to_string()).font_size(22.0).fill(p.primary()).bold());
        for (j, word) in name.split(' ').enumerate() {
            b.add(Text::new(x + 10.0, y + 62.0 + j as f64 * 15.0, word).font_size(11.0));
        }
    }
    b
}

pub fn severity_scale(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Severity Scale",
        "Rating scale for usability issues from 0 (not a problem) to 4 (catastrophic)",
        p,
    );
    let levels = [
        ("0", "Not a problem", "#d4d4d4"),
        ("1", "Cosmetic", "#fde68a"),
        ("2", "Minor", "#fbbf24"),
        ("3", "Major", "#f97316"),
        ("4", "Catastrophic", "#dc2626"),
    ];
    let w = CONTENT.width / levels.len() as f64;
    let y = CONTENT.center_y - 30.0;
    for (i, (score, name, color)) in levels.iter().enumerate() {
        let x = CONTENT.left + i as f64 * w;
        b.add(Rect::new(x, y, w - 4.0, 60.0).fill(*color).no_stroke());
        b.add(Text::new(x + (w - 4.0) / 2.0, y + 38.0, *score).font_size(22.0).centered().bold());
        b.add(Label::new(x + (w - 4.0) / 2.0, y + 84.0, *name).font_size(10.0).centered());
    }
    b.add(Label::new(CONTENT.left, y - 16.0, "Fix later"));
    b.add(Label::new(CONTENT.right, y - 16.0, "Fix now").anchor(TextAnchor::End));
    b
}

pub fn content_extremes(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Content Extremes",
        "Strategies for handling long content: truncate, wrap, scroll, expand",
        p,
    );
    let w = span_width(3) - 6.0;
    let y = CONTENT.top + 40.0;
    let strategies = ["Truncate", "Wrap", "Scroll", "Expand"];
    for (i, name) in strategies.iter().enumerate() {
        let x = column_x(i * 3);
        let h = if i == 3 { 150.0 } else { 100.0 };
        b.add(Rect::new(x, y, w, h).rounded(6.0).stroke(p.dark()));
        match i {
            0 => {
                b.add(Text::new(x + 8.0, y + 24.0, "A very long titl…").font_size(11.0));
            }
            1 => {
                for j in 0..3 {
                    b.add(Rect::new(x + 8.0, y + 14.0 + j as f64 * 14.0, w - 16.0 - j as f64 * 14.0, 7.0).fill(p.light()).no_stroke());
                }
            }
            2 => {
                for j in 0..5 {
                    b.add(Rect::new(x + 8.0, y + 14.0 + j as f64 * 16.0, w - 28.0, 7.0).fill(p.light()).no_stroke());
                }
                b.add(Rect::new(x + w - 12.0, y + 8.0, 4.0, 36.0).rounded(2.0).fill(p.muted()).no_stroke());
            }
            _ => {
                for j in 0..6 {
                    b.add(Rect::new(x + 8.0, y + 14.0 + j as f64 * 16.0, w - 16.0, 7.0).fill(p.light()).no_stroke());
                }
                b.add(Text::new(x + 8.0, y + h - 14.0, "Show less").font_size(10.0).fill(p.primary()));
            }
        }
        b.add(Label::new(x + w / 2.0, y - 12.0, *name).centered());
    }
    b
}

pub fn permission_states(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Permission States",
        "Three approaches to handling unavailable features: hide, disable, or explain",
        p,
    );
    let w = span_width(4) - 8.0;
    let y = CONTENT.top + 30.0;
    let approaches = [("Hide", "Feature is absent"), ("Disable", "Visible but inert"), ("Explain", "Says why and how")];
    for (i, (name, detail)) in approaches.iter().enumerate() {
        let x = column_x(i * 4);
        let cx = x + w / 2.0;
        b.add(Rect::new(x, y, w, 160.0).rounded(8.0).stroke(p.light()));
        match i {
            0 => {
                b.add(Rect::new(cx - 50.0, y + 60.0, 100.0, 36.0).rounded(6.0).stroke(p.light()).dashed("4 4"));
            }
            1 => {
                b.add(Rect::new(cx - 50.0, y + 60.0, 100.0, 36.0).rounded(6.0).fill(p.light()).no_stroke());
                b.add(Text::new(cx, y + 83.0, "Export").font_size(12.0).fill(p.muted()).centered());
            }
            _ => {
                b.add(Rect::new(cx - 50.0, y + 40.0, 100.0, 36.0).rounded(6.0).fill(p.light()).no_stroke());
                b.add(Text::new(cx, y + 63.0, "Export").font_size(12.0).fill(p.muted()).centered());
                b.add(Text::new(cx, y + 100.0, "Upgrade to Pro").font_size(11.0).fill(p.primary()).centered().bold());
                b.add(Text::new(cx, y + 116.0, "to export files").font_size(11.0).fill(p.muted()).centered());
            }
        }
        b.add(Text::new(cx, y + 190.0, *name).font_size(13.0).centered().bold());
        b.add(Text::new(cx, y + 208.0, *detail).font_size(11.0).fill(p.muted()).centered());
    }
    b
}

pub fn hierarchy_depth(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Flat vs Deep Hierarchy",
        "Comparing flat hierarchies with few levels vs deep hierarchies with many levels",
        p,
    );
    let dot = |b: &mut SvgBuilder, x: f64, y: f64, fill: &str| {
        b.add(Circle::new(x, y, 7.0).fill(fill).no_stroke());
    };
    let primary = p.primary();
    let dark = p.dark();

    // Flat: root with six children
    let left_cx = column_x(3);
    let top = CONTENT.top + 30.0;
    dot(&mut b, left_cx, top, primary.as_str());
    for i in 0..6 {
        let x = left_cx - 100.0 + i as f64 * 40.0;
        b.add(Line::new(left_cx, top, x, top + 70.0).stroke(p.light()).stroke_width(1.0));
        dot(&mut b, x, top + 70.0, dark.as_str());
    }
    b.add(Label::new(left_cx, CONTENT.bottom - 20.0, "Flat: 2 levels").centered());

    // Deep: a chain of five levels
    let right_cx = column_x(9);
    for level in 0..5 {
        let y = top + level as f64 * 45.0;
        let x = right_cx + if level % 2 == 0 { 0.0 } else { 24.0 };
        if level > 0 {
            let px = right_cx + if level % 2 == 1 { 0.0 } else { 24.0 };
            b.add(Line::new(px, y - 45.0, x, y).stroke(p.light()).stroke_width(1.0));
        }
        let fill = if level == 0 { primary.as_str() } else { dark.as_str() };
        dot(&mut b, x, y, fill);
    }
    b.add(Label::new(right_cx + 12.0, CONTENT.bottom - 20.0, "Deep: 5 levels").centered());
    b
}

pub fn organization_schemes(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Organization Schemes",
        "Different ways to organize information: alphabetical, chronological, topical, task-based",
        p,
    );
    let schemes = [
        ("Alphabetical", ["Apple", "Banana", "Cherry"]),
        ("Chronological", ["Today", "Yesterday", "Last week"]),
        ("Topical", ["Design", "Code", "Research"]),
        ("Task-based", ["Create", "Share", "Export"]),
    ];
    let w = span_width(3) - 6.0;
    let y = CONTENT.top + 30.0;
    for (i, (scheme, items)) in schemes.iter().enumerate() {
        let x = column_x(i * 3);
        b.add(Label::new(x, y - 10.0, *scheme).font_size(10.0));
        for (j, item) in items.iter().enumerate() {
            let iy = y + j as f64 * 44.0;
            let stroke = if j == 0 { p.primary() } else { p.light() };
            b.add(Rect::new(x, iy, w, 36.0).rounded(4.0).stroke(stroke));
            b.add(Text::new(x + 10.0, iy + 22.0, *item).font_size(12.0));
        }
    }
    b
}

pub fn user_journey_map(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "User Journey Map",
        "Mapping the user experience across touchpoints: discover, evaluate, try, use, return",
        p,
    );
    let stages = ["Discover", "Evaluate", "Try", "Use", "Return"];
    // Emotion per stage, 0 low to 1 high
    let mood = [0.6, 0.4, 0.2, 0.75, 0.9];
    let w = CONTENT.width / stages.len() as f64;
    let chart_top = CONTENT.top + 50.0;
    let chart_h = 150.0;
    b.add(Line::new(CONTENT.left, chart_top + chart_h / 2.0, CONTENT.right, chart_top + chart_h / 2.0).stroke(p.light()).dashed("3 3"));
    let mut d = String::new();
    for (i, (stage, m)) in stages.iter().zip(mood).enumerate() {
        let cx = CONTENT.left + w * (i as f64 + 0.5);
        let cy = chart_top + chart_h * (1.0 - m);
        d.push_str(&format!("{} {} {} ", if i == 0 { "M" } else { "L" }, cx, cy));
        let fill = if m < 0.5 { p.error() } else { p.success() };
        b.add(Circle::new(cx, cy, 6.0).fill(fill).no_stroke());
        b.add(Label::new(cx, CONTENT.top + 10.0, *stage).centered());
    }
    b.add(Path::new(d.trim_end().to_string()).stroke(p.dark()).stroke_width(2.0));
    b.add(Label::new(CONTENT.left, chart_top + chart_h + 30.0, "Pain point: trial setup"));
    b
}

pub fn ux_traps(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Common UX Traps",
        "Common cognitive biases that lead to poor UX decisions",
        p,
    );
    let traps = [
        ("False consensus", "\"Users think like me\""),
        ("Confirmation bias", "Seeing what you expect"),
        ("Sunk cost", "Keeping a failing design"),
        ("Feature creep", "More is not better"),
    ];
    let w = span_width(6);
    for (i, (name, detail)) in traps.iter().enumerate() {
        let x = column_x((i % 2) * 6);
        let y = CONTENT.top + 20.0 + (i / 2) as f64 * 120.0;
        b.add(Rect::new(x, y, w, 100.0).rounded(8.0).stroke(p.light()));
        b.add(
            Path::new(format!("M {} {} l 10 -18 l 10 18 z", x + 16.0, y + 36.0))
                .stroke(p.warning())
                .stroke_width(2.0),
        );
        b.add(Text::new(x + 46.0, y + 34.0, *name).font_size(14.0).bold());
        b.add(Text::new(x + 16.0, y + 70.0, *detail).font_size(12.0).fill(p.muted()));
    }
    b
}
