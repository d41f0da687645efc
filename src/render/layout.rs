//! Grid shape and scaled pixel geometry
//!
//! Lengths are in device-independent units and multiplied by the device
//! scale factor. Everything stays in `f32` until a primitive is drawn or
//! the canvas is allocated, so per-cell offsets never accumulate rounding.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Weeks shown (columns, oldest left)
pub const COLS: usize = 16;
/// Days per week (rows, Monday on top)
pub const ROWS: usize = 7;
/// Cells in the grid
pub const TOTAL_DAYS: usize = COLS * ROWS;

const CELL_SIZE: f32 = 18.0;
const CELL_GAP: f32 = 3.0;
const CORNER_RADIUS: f32 = 4.0;
const BACKGROUND_RADIUS: f32 = 12.0;
/// Left margin reserved for day labels
const LABEL_WIDTH: f32 = 28.0;
/// Top margin reserved for month labels
const HEADER_HEIGHT: f32 = 16.0;
const PADDING: f32 = 12.0;
const DAY_TEXT_SIZE: f32 = 9.0;
const MONTH_TEXT_SIZE: f32 = 10.0;
/// Month label baseline sits this far above the first cell row
const MONTH_BASELINE_LIFT: f32 = 3.0;

/// Pixel geometry for one scale factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub cell: f32,
    pub gap: f32,
    pub corner_radius: f32,
    pub background_radius: f32,
    pub label_width: f32,
    pub header_height: f32,
    pub padding: f32,
    pub day_text_size: f32,
    pub month_text_size: f32,
    pub month_baseline_lift: f32,
}

impl Layout {
    /// Scale the layout constants. Callers validate `scale > 0`.
    pub fn new(scale: f32) -> Self {
        Self {
            cell: CELL_SIZE * scale,
            gap: CELL_GAP * scale,
            corner_radius: CORNER_RADIUS * scale,
            background_radius: BACKGROUND_RADIUS * scale,
            label_width: LABEL_WIDTH * scale,
            header_height: HEADER_HEIGHT * scale,
            padding: PADDING * scale,
            day_text_size: DAY_TEXT_SIZE * scale,
            month_text_size: MONTH_TEXT_SIZE * scale,
            month_baseline_lift: MONTH_BASELINE_LIFT * scale,
        }
    }

    /// Distance between the left edges of adjacent cells
    fn pitch(&self) -> f32 {
        self.cell + self.gap
    }

    pub fn grid_width(&self) -> f32 {
        COLS as f32 * self.pitch() - self.gap
    }

    pub fn grid_height(&self) -> f32 {
        ROWS as f32 * self.pitch() - self.gap
    }

    /// Left edge of the grid
    pub fn grid_x(&self) -> f32 {
        self.padding + self.label_width
    }

    /// Top edge of the grid
    pub fn grid_y(&self) -> f32 {
        self.padding + self.header_height
    }

    /// Canvas width in whole pixels (truncated)
    pub fn width(&self) -> u32 {
        (self.padding * 2.0 + self.label_width + self.grid_width()) as u32
    }

    /// Canvas height in whole pixels (truncated)
    pub fn height(&self) -> u32 {
        (self.padding * 2.0 + self.header_height + self.grid_height()) as u32
    }

    /// Left edge of a column
    pub fn column_x(&self, col: usize) -> f32 {
        self.grid_x() + col as f32 * self.pitch()
    }

    /// Top edge of a row
    pub fn row_y(&self, row: usize) -> f32 {
        self.grid_y() + row as f32 * self.pitch()
    }

    /// Vertical center of a row's cell band
    pub fn row_center_y(&self, row: usize) -> f32 {
        self.row_y(row) + self.cell / 2.0
    }

    /// Baseline of the month label row
    pub fn month_baseline_y(&self) -> f32 {
        self.grid_y() - self.month_baseline_lift
    }

    /// Pixel rectangle of a cell. Both edges are rounded independently.
    pub fn cell_rect(&self, col: usize, row: usize) -> Rectangle {
        pixel_rect(self.column_x(col), self.row_y(row), self.cell, self.cell)
    }

    /// Whole-canvas rectangle
    pub fn canvas_rect(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(self.width(), self.height()))
    }

    pub fn corner_size(&self) -> Size {
        radius_size(self.corner_radius)
    }

    pub fn background_corner_size(&self) -> Size {
        radius_size(self.background_radius)
    }
}

fn pixel_rect(x: f32, y: f32, w: f32, h: f32) -> Rectangle {
    let left = x.round() as i32;
    let top = y.round() as i32;
    let right = (x + w).round() as i32;
    let bottom = (y + h).round() as i32;
    Rectangle::new(
        Point::new(left, top),
        Size::new((right - left).max(0) as u32, (bottom - top).max(0) as u32),
    )
}

fn radius_size(r: f32) -> Size {
    let r = r.round().max(0.0) as u32;
    Size::new(r, r)
}
