//! Track hero compositions and the course intersection banner

use crate::illustration::grid::{CONTENT, GRID};
use crate::palette::Palette;
use crate::renderer::{num, Arrow, Circle, Frame, Line, Path, Rect, SvgBuilder, Text};

use super::{filled_box, labeled_box};

const HERO_WIDTH: f64 = 600.0;
const HERO_HEIGHT: f64 = 400.0;

fn hero(title: &str, description: &str, p: &Palette) -> SvgBuilder {
    Frame::new(title)
        .description(description)
        .size(HERO_WIDTH, HERO_HEIGHT)
        .builder(p)
}

/// Shared footer of three text bars
fn hero_footer(b: &mut SvgBuilder) {
    let muted = b.palette().muted();
    let light = b.palette().light();
    b.add(Rect::new(40.0, 310.0, 520.0, 8.0).fill(muted).no_stroke());
    b.add(Rect::new(40.0, 330.0, 400.0, 6.0).fill(light.as_str()).no_stroke());
    b.add(Rect::new(40.0, 346.0, 300.0, 6.0).fill(light).no_stroke());
}

pub fn de_intersection(p: &Palette) -> SvgBuilder {
    let mut b = Frame::new("Design Engineer Intersection")
        .description("Design Engineers sit at the intersection of Design and Engineering")
        .size(GRID.width, 200.0)
        .builder(p);
    let (w, h, gap) = (120.0, 40.0, 20.0);
    let start = CONTENT.center_x - (w * 3.0 + gap * 2.0) / 2.0;
    let y = 100.0 - h / 2.0;
    labeled_box(&mut b, start, y, w, h, "Design", &p.dark());
    filled_box(&mut b, start + w + gap, y, w, h, "Design Engineer", &p.primary());
    labeled_box(&mut b, start + (w + gap) * 2.0, y, w, h, "Engineering", &p.dark());

    // Inward arrows from both disciplines
    for i in 0..2 {
        let x1 = start + i as f64 * (w + gap) + w + 2.0;
        let x2 = x1 + gap - 4.0;
        let (from, to) = if i == 0 { (x1, x2) } else { (x2, x1) };
        b.add(Arrow::new(from, 100.0, to, 100.0).stroke(p.muted()));
    }
    b
}

pub fn design_track_hero(p: &Palette) -> SvgBuilder {
    let mut b = hero(
        "Design Track",
        "Abstract composition representing visual design principles",
        p,
    );
    b.add(Rect::new(40.0, 60.0, 180.0, 120.0).fill(p.primary()).no_stroke());
    b.add(Rect::new(40.0, 200.0, 80.0, 80.0).fill("currentColor").no_stroke());
    b.add(Rect::new(140.0, 200.0, 80.0, 80.0).fill(p.muted()).no_stroke());
    for x in [260.0, 340.0, 420.0] {
        b.add(Line::new(x, 60.0, x, 280.0).stroke(p.light()).dashed("4 4"));
    }
    for (y, size, fill, text) in [
        (100.0, 48.0, "currentColor".to_string(), "Aa"),
        (150.0, 32.0, p.muted(), "Bb"),
        (190.0, 24.0, p.muted(), "Cc"),
    ] {
        b.add(Text::new(280.0, y, text).font_size(size).fill(fill).bold());
    }
    b.add(Circle::new(500.0, 100.0, 40.0).fill(p.primary()).no_stroke());
    b.add(Circle::new(500.0, 200.0, 30.0).fill("currentColor").no_stroke());
    b.add(Circle::new(500.0, 280.0, 20.0).fill(p.muted()).no_stroke());
    hero_footer(&mut b);
    b
}

pub fn engineering_track_hero(p: &Palette) -> SvgBuilder {
    let mut b = hero(
        "Engineering Track",
        "Abstract composition representing code and component architecture",
        p,
    );
    // Editor window with indented code lines
    b.add(Rect::new(40.0, 40.0, 300.0, 240.0).rounded(8.0).fill(p.dark()).no_stroke());
    for (i, fill) in [p.error(), p.warning(), p.success()].into_iter().enumerate() {
        b.add(Circle::new(60.0 + i as f64 * 16.0, 58.0, 5.0).fill(fill).no_stroke());
    }
    let lines = [(0, 160.0), (1, 120.0), (2, 180.0), (2, 90.0), (1, 60.0), (0, 40.0), (0, 140.0), (1, 110.0)];
    for (i, (indent, w)) in lines.iter().enumerate() {
        let fill = if i == 2 { p.primary() } else { p.muted() };
        b.add(Rect::new(60.0 + *indent as f64 * 20.0, 84.0 + i as f64 * 22.0, *w, 8.0).rounded(4.0).fill(fill).no_stroke());
    }

    // Component tree
    let root = (470.0, 80.0);
    let children = [(410.0, 180.0), (530.0, 180.0)];
    let leaves = [(380.0, 260.0), (440.0, 260.0), (530.0, 260.0)];
    for (cx, cy) in children {
        b.add(Line::new(root.0, root.1, cx, cy).stroke(p.light()));
    }
    b.add(Line::new(410.0, 180.0, 380.0, 260.0).stroke(p.light()));
    b.add(Line::new(410.0, 180.0, 440.0, 260.0).stroke(p.light()));
    b.add(Line::new(530.0, 180.0, 530.0, 260.0).stroke(p.light()));
    b.add(Rect::new(root.0 - 24.0, root.1 - 16.0, 48.0, 32.0).rounded(4.0).fill(p.primary()).no_stroke());
    for (cx, cy) in children {
        b.add(Rect::new(cx - 20.0, cy - 14.0, 40.0, 28.0).rounded(4.0).fill("currentColor").no_stroke());
    }
    for (cx, cy) in leaves {
        b.add(Rect::new(cx - 14.0, cy - 10.0, 28.0, 20.0).rounded(3.0).fill(p.muted()).no_stroke());
    }
    hero_footer(&mut b);
    b
}

pub fn convergence_track_hero(p: &Palette) -> SvgBuilder {
    let mut b = hero(
        "Convergence Track",
        "Abstract composition showing design and engineering merging together",
        p,
    );
    // Two overlapping discs with a highlighted lens
    b.add(Circle::new(230.0, 170.0, 110.0).fill(p.muted()).fill_opacity(0.35).no_stroke());
    b.add(Circle::new(370.0, 170.0, 110.0).fill("currentColor").fill_opacity(0.2).no_stroke());
    // Lens where the circles intersect: chord at x = 300
    let half_chord = (110.0_f64.powi(2) - 70.0_f64.powi(2)).sqrt();
    b.add(
        Path::new(format!(
            "M 300 {top} A 110 110 0 0 1 300 {bottom} A 110 110 0 0 1 300 {top} Z",
            top = num(170.0 - half_chord),
            bottom = num(170.0 + half_chord),
        ))
        .fill(p.primary())
        .no_stroke(),
    );
    b.add(Rect::new(90.0, 150.0, 40.0, 40.0).fill(p.primary()).no_stroke());
    b.add(Text::new(470.0, 180.0, "</>").font_size(28.0).fill(p.dark()).centered().bold().mono());
    hero_footer(&mut b);
    b
}
