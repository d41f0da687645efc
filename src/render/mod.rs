//! Heatmap rasterizer
//!
//! Layout (GitHub contribution graph, rotated):
//!   - columns = weeks, oldest on the left
//!   - rows = weekdays, Monday on top
//!   - left margin carries M / W / F labels
//!   - top margin carries a month name wherever the month changes

pub mod canvas;
pub mod grid;
pub mod layout;
pub mod text;
pub mod theme;

use std::io::Cursor;
use std::path::Path;

use chrono::NaiveDate;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, RoundedRectangle};
use embedded_graphics::text::{Baseline, Text};
use image::{ImageFormat, RgbaImage};

pub use canvas::Canvas;
pub use grid::{date_at, grid_start, HeatmapCell, HeatmapGrid, MonthLabel, DAY_LABELS};
pub use layout::{Layout, COLS, ROWS, TOTAL_DAYS};

use crate::types::{DateLevelMap, HeatgridError, Result};

/// A finished widget bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetImage {
    canvas: Canvas,
}

impl WidgetImage {
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Row-major RGBA bytes
    pub fn pixels(&self) -> &[u8] {
        self.canvas.as_raw()
    }

    /// RGBA value at (x, y)
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.canvas.pixel(x, y)
    }

    fn to_rgba_image(&self) -> Result<RgbaImage> {
        RgbaImage::from_raw(self.width(), self.height(), self.pixels().to_vec())
            .ok_or_else(|| HeatgridError::Encode("pixel buffer size mismatch".into()))
    }

    /// Encode as PNG bytes
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.to_rgba_image()?
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| HeatgridError::Encode(e.to_string()))?;
        Ok(bytes)
    }

    /// Write as a PNG file
    pub fn save_png(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.encode_png()?)?;
        Ok(())
    }
}

/// Render the heatmap for `today` at the given device scale factor.
///
/// Fails only when `scale` is not a finite positive number, or is so large
/// the canvas would exceed `canvas::MAX_CANVAS_BYTES`.
pub fn render(levels: &DateLevelMap, today: NaiveDate, scale: f32) -> Result<WidgetImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(HeatgridError::InvalidScale(scale));
    }

    let layout = Layout::new(scale);
    let grid = HeatmapGrid::build(levels, today);
    log::debug!(
        "rendering {}x{} @{scale}: {} .. {} (today {today}, {} masked)",
        layout.width(),
        layout.height(),
        grid.start,
        grid.last_date(),
        grid.future_count()
    );

    let mut canvas =
        Canvas::new(layout.width(), layout.height()).ok_or(HeatgridError::InvalidScale(scale))?;
    if let Err(never) = draw_heatmap(&mut canvas, &grid, &layout) {
        match never {}
    }

    Ok(WidgetImage { canvas })
}

/// Draw background, cells, and labels onto any RGB target
pub fn draw_heatmap<D>(
    target: &mut D,
    grid: &HeatmapGrid,
    layout: &Layout,
) -> std::result::Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    RoundedRectangle::with_equal_corners(layout.canvas_rect(), layout.background_corner_size())
        .into_styled(PrimitiveStyle::with_fill(theme::BACKGROUND))
        .draw(target)?;

    for cell in &grid.cells {
        let color = theme::cell_color(cell.level, cell.is_future);
        let rect = layout.cell_rect(cell.col, cell.row);
        RoundedRectangle::with_equal_corners(rect, layout.corner_size())
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(target)?;
    }

    let day_style = MonoTextStyle::new(text::font_for_size(layout.day_text_size), theme::LABEL);
    for (row, label) in DAY_LABELS {
        let origin = Point::new(
            layout.padding.round() as i32,
            layout.row_center_y(row).round() as i32,
        );
        Text::with_baseline(label, origin, day_style, Baseline::Middle).draw(target)?;
    }

    let month_style = MonoTextStyle::new(text::font_for_size(layout.month_text_size), theme::LABEL);
    let baseline_y = layout.month_baseline_y().round() as i32;
    for label in &grid.month_labels {
        let origin = Point::new(layout.column_x(label.col).round() as i32, baseline_y);
        Text::with_baseline(label.text, origin, month_style, Baseline::Alphabetic).draw(target)?;
    }

    Ok(())
}
