//! Shared layout grid for the illustration catalog
//!
//! All concept illustrations are drawn on the same 560×360 canvas with a
//! 40px margin and a 12-column grid, so diagrams line up when shown side
//! by side in a lesson.

/// Canvas and column grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub columns: usize,
    pub gutter: f64,
    pub row_height: f64,
}

/// Content box inside the canvas margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Content {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

pub const GRID: Grid = Grid {
    width: 560.0,
    height: 360.0,
    margin: 40.0,
    columns: 12,
    gutter: 12.0,
    row_height: 24.0,
};

pub const CONTENT: Content = Content {
    left: GRID.margin,
    right: GRID.width - GRID.margin,
    top: GRID.margin,
    bottom: GRID.height - GRID.margin,
    width: GRID.width - 2.0 * GRID.margin,
    height: GRID.height - 2.0 * GRID.margin,
    center_x: GRID.width / 2.0,
    center_y: GRID.height / 2.0,
};

/// Width of a single grid column
pub const COLUMN_WIDTH: f64 =
    (CONTENT.width - (GRID.columns as f64 - 1.0) * GRID.gutter) / GRID.columns as f64;

/// Left edge of column `index` (0-based)
pub fn column_x(index: usize) -> f64 {
    CONTENT.left + index as f64 * (COLUMN_WIDTH + GRID.gutter)
}

/// Width covered by `span` adjacent columns including inner gutters
pub fn span_width(span: usize) -> f64 {
    if span == 0 {
        return 0.0;
    }
    span as f64 * COLUMN_WIDTH + (span as f64 - 1.0) * GRID.gutter
}

/// Top edge of row `index` (0-based) inside the content box
pub fn row_y(index: usize) -> f64 {
    CONTENT.top + index as f64 * GRID.row_height
}

/// X positions for `count` items of `item_width` spaced `gap` apart and
/// centred on the canvas
pub fn centered_row(count: usize, item_width: f64, gap: f64) -> Vec<f64> {
    if count == 0 {
        return vec![];
    }
    let total = count as f64 * item_width + (count as f64 - 1.0) * gap;
    let start = CONTENT.center_x - total / 2.0;
    (0..count)
        .map(|i| start + i as f64 * (item_width + gap))
        .collect()
}
