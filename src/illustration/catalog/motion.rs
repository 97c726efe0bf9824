//! Motion, loading and feedback

use std::f64::consts::PI;

use crate::illustration::grid::{centered_row, column_x, span_width, CONTENT};
use crate::palette::Palette;
use crate::renderer::{num, polar, Arrow, Circle, Label, Line, Path, Point, Polyline, Rect, SvgBuilder, Text, TextAnchor};

use super::{filled_box, labeled_box, titled};

/// Easing curve as unit-square cubic control points, origin bottom-left
struct Easing {
    name: &'static str,
    detail: &'static str,
    controls: Option<[(f64, f64); 2]>,
}

const EASINGS: [Easing; 4] = [
    Easing {
        name: "Linear",
        detail: "Constant speed",
        controls: None,
    },
    Easing {
        name: "Ease-out",
        detail: "Fast start, slow end",
        controls: Some([(0.0, 0.5), (0.2, 0.0)]),
    },
    Easing {
        name: "Ease-in",
        detail: "Slow start, fast end",
        controls: Some([(0.8, 1.0), (1.0, 0.5)]),
    },
    Easing {
        name: "Ease-in-out",
        detail: "Slow start and end",
        controls: Some([(0.4, 1.0), (0.6, 0.0)]),
    },
];

pub fn easing_curves(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Easing Curves",
        "Common easing functions used in UI animation",
        p,
    );
    let size = 84.0;
    let xs = centered_row(EASINGS.len(), size, 28.0);
    let y = CONTENT.top + 60.0;
    b.add(Label::new(CONTENT.center_x, CONTENT.top + 12.0, "Easing functions").centered());

    for (easing, x) in EASINGS.iter().zip(xs) {
        let at = |(u, v): (f64, f64)| format!("{} {}", num(x + u * size), num(y + v * size));
        b.add(Rect::new(x, y, size, size).stroke(p.light()).stroke_width(1.0));
        b.add(Line::new(x, y + size / 2.0, x + size, y + size / 2.0).stroke(p.light()).stroke_width(0.5));
        b.add(Line::new(x + size / 2.0, y, x + size / 2.0, y + size).stroke(p.light()).stroke_width(0.5));
        let d = match easing.controls {
            None => format!("M {} L {}", at((0.0, 1.0)), at((1.0, 0.0))),
            Some([c1, c2]) => format!("M {} C {} {} {}", at((0.0, 1.0)), at(c1), at(c2), at((1.0, 0.0))),
        };
        b.add(Path::new(d).stroke(p.primary()).stroke_width(2.0));
        b.add(Circle::new(x, y + size, 3.0).fill(p.primary()).no_stroke());
        b.add(Circle::new(x + size, y, 3.0).fill(p.primary()).no_stroke());
        b.add(Label::new(x + size / 2.0, y + size + 24.0, easing.name).centered());
        b.add(Text::new(x + size / 2.0, y + size + 42.0, easing.detail).font_size(10.0).fill(p.muted()).centered());
    }
    b.add(Label::new(CONTENT.center_x, CONTENT.bottom - 8.0, "Time → / Progress ↑").centered());
    b
}

pub fn micro_interaction_anatomy(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Micro-interaction Anatomy",
        "The four parts of every micro-interaction: trigger, rules, feedback, loops",
        p,
    );
    let parts = [
        ("Trigger", "User taps"),
        ("Rules", "What happens"),
        ("Feedback", "What they see"),
        ("Loops", "Over time"),
    ];
    let w = 96.0;
    let xs = centered_row(parts.len(), w, 24.0);
    let y = CONTENT.center_y - 30.0;
    for (i, ((name, detail), x)) in parts.iter().zip(xs.iter()).enumerate() {
        if i == 0 {
            filled_box(&mut b, *x, y, w, 60.0, name, &p.primary());
        } else {
            labeled_box(&mut b, *x, y, w, 60.0, name, &p.dark());
        }
        b.add(Label::new(x + w / 2.0, y + 84.0, *detail).centered());
        if i + 1 < parts.len() {
            b.add(Arrow::new(x + w + 2.0, y + 30.0, x + w + 22.0, y + 30.0).stroke(p.muted()));
        }
    }
    b
}

pub fn skeleton_loading(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Skeleton Loading",
        "Content placeholders that show structure while data loads",
        p,
    );
    let w = span_width(6);
    let y = CONTENT.top + 20.0;

    for (col, loaded) in [(0, false), (6, true)] {
        let x = column_x(col);
        b.add(Rect::new(x, y, w, 200.0).rounded(8.0).stroke(p.light()));
        let (avatar, line) = if loaded { (p.primary(), p.dark()) } else { (p.light(), p.light()) };
        b.add(Circle::new(x + 34.0, y + 34.0, 18.0).fill(avatar).no_stroke());
        b.add(Rect::new(x + 62.0, y + 22.0, w * 0.45, 10.0).rounded(5.0).fill(line.as_str()).no_stroke());
        b.add(Rect::new(x + 62.0, y + 40.0, w * 0.3, 8.0).rounded(4.0).fill(p.light()).no_stroke());
        b.add(Rect::new(x + 16.0, y + 72.0, w - 32.0, 70.0).rounded(6.0).fill(p.light()).no_stroke());
        for i in 0..2 {
            b.add(
                Rect::new(x + 16.0, y + 156.0 + i as f64 * 16.0, (w - 32.0) * (0.9 - i as f64 * 0.3), 8.0)
                    .rounded(4.0)
                    .fill(line.as_str())
                    .no_stroke(),
            );
        }
        let caption = if loaded { "Loaded" } else { "Skeleton" };
        b.add(Label::new(x + w / 2.0, y + 230.0, caption).centered());
    }
    b
}

pub fn loading_duration(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Loading Duration",
        "Choose loading patterns based on expected duration",
        p,
    );
    let axis_y = CONTENT.top + 60.0;
    b.add(Arrow::new(CONTENT.left, axis_y, CONTENT.right, axis_y).stroke(p.muted()));
    let stops = [
        (0.0, "0s", "Nothing", "Instant"),
        (0.25, "1s", "Spinner", "Brief"),
        (0.55, "4s", "Skeleton", "Short wait"),
        (0.85, "10s+", "Progress bar", "Long task"),
    ];
    for (t, time, pattern, detail) in stops {
        let x = CONTENT.left + t * (CONTENT.width - 20.0);
        b.add(Line::new(x, axis_y - 6.0, x, axis_y + 6.0).stroke(p.muted()));
        b.add(Label::new(x, axis_y - 14.0, time));
        b.add(Text::new(x, axis_y + 40.0, pattern).font_size(13.0).bold());
        b.add(Text::new(x, axis_y + 58.0, detail).font_size(11.0).fill(p.muted()));
    }

    // Pattern sketches
    let sy = axis_y + 110.0;
    let spinner_x = CONTENT.left + 0.25 * (CONTENT.width - 20.0) + 20.0;
    b.add(Circle::new(spinner_x, sy, 16.0).stroke(p.light()).stroke_width(3.0));
    let arc_end = polar(spinner_x, sy, 16.0, 0.0);
    b.add(
        Path::new(format!(
            "M {} {} A 16 16 0 0 1 {} {}",
            num(spinner_x),
            num(sy - 16.0),
            num(arc_end.x),
            num(arc_end.y)
        ))
        .stroke(p.primary())
        .stroke_width(3.0),
    );
    let skel_x = CONTENT.left + 0.55 * (CONTENT.width - 20.0);
    for i in 0..3 {
        b.add(Rect::new(skel_x, sy - 14.0 + i as f64 * 12.0, 80.0 - i as f64 * 20.0, 8.0).rounded(4.0).fill(p.light()).no_stroke());
    }
    let bar_x = CONTENT.left + 0.85 * (CONTENT.width - 20.0);
    let bar_w = CONTENT.right - bar_x;
    b.add(Rect::new(bar_x, sy - 4.0, bar_w, 8.0).rounded(4.0).fill(p.light()).no_stroke());
    b.add(Rect::new(bar_x, sy - 4.0, bar_w * 0.6, 8.0).rounded(4.0).fill(p.primary()).no_stroke());
    b
}

pub fn scroll_animation_types(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Scroll Animation Types",
        "Scroll-triggered vs scroll-linked animations",
        p,
    );
    let w = span_width(6);
    let y = CONTENT.top + 20.0;
    let h = 200.0;

    // Triggered: fires once when crossing a threshold
    let left = column_x(0);
    b.add(Rect::new(left, y, w, h).rounded(6.0).stroke(p.light()));
    b.add(Line::new(left, y + h * 0.6, left + w, y + h * 0.6).stroke(p.primary()).dashed("4 4"));
    b.add(Label::new(left + 8.0, y + h * 0.6 - 6.0, "Threshold").fill(p.primary()));
    b.add(Rect::new(left + 40.0, y + h * 0.6 + 14.0, w - 80.0, 40.0).rounded(4.0).fill(p.dark()).no_stroke());
    b.add(Label::new(left + w / 2.0, y + h + 24.0, "Scroll-triggered").centered());

    // Linked: progress follows scroll position
    let right = column_x(6);
    b.add(Rect::new(right, y, w, h).rounded(6.0).stroke(p.light()));
    b.add(Rect::new(right + w - 14.0, y + 10.0, 6.0, h - 20.0).rounded(3.0).fill(p.light()).no_stroke());
    b.add(Rect::new(right + w - 14.0, y + 10.0, 6.0, 60.0).rounded(3.0).fill(p.primary()).no_stroke());
    let curve: Vec<Point> = (0..=10)
        .map(|i| {
            let t = i as f64 / 10.0;
            Point::new(right + 20.0 + t * (w - 60.0), y + h - 30.0 - t * (h - 60.0))
        })
        .collect();
    b.add(Polyline::new(curve).stroke(p.dark()).stroke_width(2.0));
    b.add(Label::new(right + w / 2.0, y + h + 24.0, "Scroll-linked").centered());
    b
}

pub fn ios_spring_animation(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "iOS Spring Animation",
        "Spring animations create natural, physics-based motion in iOS",
        p,
    );
    let x0 = CONTENT.left + 20.0;
    let w = CONTENT.width - 40.0;
    let target_y = CONTENT.top + 60.0;
    let start_y = CONTENT.bottom - 60.0;
    let amplitude = start_y - target_y;

    b.add(Line::new(x0, target_y, x0 + w, target_y).stroke(p.light()).dashed("4 4"));
    b.add(Label::new(x0 + w, target_y - 8.0, "Target").anchor(TextAnchor::End));

    // Damped oscillation settling on the target
    let samples = 60;
    let points: Vec<Point> = (0..=samples)
        .map(|i| {
            let t = i as f64 / samples as f64;
            let offset = (-5.0 * t).exp() * (3.0 * PI * t).cos();
            Point::new(x0 + t * w, target_y + amplitude * offset)
        })
        .collect();
    b.add(Polyline::new(points).stroke(p.primary()).stroke_width(2.0));
    b.add(Circle::new(x0, start_y, 4.0).fill(p.primary()).no_stroke());
    b.add(Label::new(x0, CONTENT.bottom - 20.0, "damping: 0.7"));
    b.add(Label::new(x0 + 140.0, CONTENT.bottom - 20.0, "response: 0.5"));
    b
}

pub fn material_motion_system(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Material Motion Patterns",
        "Material Design's four core motion patterns for transitions",
        p,
    );
    let patterns = ["Container transform", "Shared axis", "Fade through", "Fade"];
    let w = span_width(3) - 6.0;
    let y = CONTENT.top + 40.0;
    for (i, name) in patterns.iter().enumerate() {
        let x = column_x(i * 3);
        b.add(Rect::new(x, y, w, 160.0).rounded(8.0).stroke(p.light()));
        let cx = x + w / 2.0;
        match i {
            0 => {
                b.add(Rect::new(cx - 30.0, y + 100.0, 24.0, 24.0).rounded(4.0).fill(p.primary()).no_stroke());
                b.add(Rect::new(cx - 30.0, y + 24.0, 64.0, 64.0).rounded(6.0).stroke(p.primary()).dashed("3 3"));
                b.add(Arrow::new(cx - 10.0, y + 96.0, cx + 10.0, y + 70.0).stroke(p.muted()));
            }
            1 => {
                b.add(Rect::new(cx - 44.0, y + 50.0, 36.0, 60.0).rounded(4.0).fill(p.light()).no_stroke());
                b.add(Rect::new(cx + 8.0, y + 50.0, 36.0, 60.0).rounded(4.0).fill(p.primary()).no_stroke());
                b.add(Arrow::new(cx - 30.0, y + 130.0, cx + 30.0, y + 130.0).stroke(p.muted()));
            }
            2 => {
                b.add(Rect::new(cx - 30.0, y + 40.0, 60.0, 80.0).rounded(4.0).fill(p.light()).no_stroke().opacity(0.4));
                b.add(Rect::new(cx - 22.0, y + 48.0, 60.0, 80.0).rounded(4.0).fill(p.primary()).no_stroke().opacity(0.8));
            }
            _ => {
                b.add(Rect::new(cx - 34.0, y + 50.0, 68.0, 60.0).rounded(6.0).fill(p.dark()).no_stroke().opacity(0.5));
            }
        }
        b.add(Label::new(cx, y + 190.0, *name).font_size(10.0).centered());
    }
    b
}

pub fn feedback_loop(p: &Palette) -> SvgBuilder {
    let mut b = titled(
        "Feedback Loop",
        "The interaction loop: action, response, feedback, understanding",
        p,
    );
    let (cx, cy) = (CONTENT.center_x, CONTENT.center_y);
    let r = 100.0;
    let stages = ["Action", "Response", "Feedback", "Understanding"];
    for (i, stage) in stages.iter().enumerate() {
        let angle = -90.0 + i as f64 * 90.0;
        let at = polar(cx, cy, r, angle);
        let next = polar(cx, cy, r, angle + 70.0);
        let from = polar(cx, cy, r, angle + 20.0);
        b.add(
            Path::new(format!(
                "M {} {} A {r} {r} 0 0 1 {} {}",
                num(from.x),
                num(from.y),
                num(next.x),
                num(next.y),
                r = num(r)
            ))
            .stroke(p.muted()),
        );
        let fill = if i == 0 { p.primary() } else { p.dark() };
        b.add(Circle::new(at.x, at.y, 8.0).fill(fill).no_stroke());
        let (dx, anchor) = match i {
            1 => (16.0, TextAnchor::Start),
            3 => (-16.0, TextAnchor::End),
            _ => (0.0, TextAnchor::Middle),
        };
        let dy = match i {
            0 => -16.0,
            2 => 26.0,
            _ => 4.0,
        };
        b.add(Text::new(at.x + dx, at.y + dy, *stage).font_size(13.0).weight("600").anchor(anchor));
    }
    b.add(Label::new(cx, cy + 4.0, "Repeat").centered());
    b
}
