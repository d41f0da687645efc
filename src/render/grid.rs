//! Week-aligned date grid
//!
//! Columns are weeks (oldest on the left), rows are weekdays Monday through
//! Sunday. The window is the `TOTAL_DAYS` days ending today; the grid starts
//! on the Monday on or before the window's first day, so up to six alignment
//! days before the window are drawn too. Cells dated after today, should any
//! exist, are masked.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use super::layout::{COLS, ROWS, TOTAL_DAYS};
use crate::types::{date_key, DateLevelMap, Level};

/// Single-letter labels drawn for Monday, Wednesday and Friday
pub const DAY_LABELS: [(usize, &str); 3] = [(0, "M"), (2, "W"), (4, "F")];

/// First day of the trailing window ending today (inclusive)
pub fn window_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days((TOTAL_DAYS - 1) as i64)
}

/// Date drawn in the top-left cell: the Monday on or before the window start
pub fn grid_start(today: NaiveDate) -> NaiveDate {
    let start = window_start(today);
    start - Duration::days(start.weekday().num_days_from_monday() as i64)
}

/// Date drawn in cell (col, row)
pub fn date_at(grid_start: NaiveDate, col: usize, row: usize) -> NaiveDate {
    grid_start + Duration::days((col * ROWS + row) as i64)
}

/// Abbreviated English month name
pub fn month_abbrev(date: NaiveDate) -> &'static str {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    MONTHS[date.month0() as usize]
}

/// A single cell in the heatmap grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub col: usize,
    pub row: usize,
    pub date: NaiveDate,
    pub level: Level,
    /// Dated after today; drawn as background
    pub is_future: bool,
}

/// Month name drawn above a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    pub col: usize,
    pub text: &'static str,
}

/// Everything needed to draw one frame, independent of pixel scale
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapGrid {
    pub today: NaiveDate,
    pub start: NaiveDate,
    /// Column-major: index = col * ROWS + row
    pub cells: Vec<HeatmapCell>,
    pub month_labels: Vec<MonthLabel>,
}

impl HeatmapGrid {
    pub fn build(levels: &DateLevelMap, today: NaiveDate) -> Self {
        let start = grid_start(today);

        let mut cells = Vec::with_capacity(TOTAL_DAYS);
        for col in 0..COLS {
            for row in 0..ROWS {
                let date = date_at(start, col, row);
                cells.push(HeatmapCell {
                    col,
                    row,
                    date,
                    level: levels.level_for(date),
                    is_future: date > today,
                });
            }
        }

        let mut month_labels = Vec::new();
        let mut last_month = None;
        for col in 0..COLS {
            let date = date_at(start, col, 0);
            if last_month != Some(date.month()) {
                last_month = Some(date.month());
                month_labels.push(MonthLabel {
                    col,
                    text: month_abbrev(date),
                });
            }
        }

        Self {
            today,
            start,
            cells,
            month_labels,
        }
    }

    pub fn cell(&self, col: usize, row: usize) -> &HeatmapCell {
        &self.cells[col * ROWS + row]
    }

    pub fn last_date(&self) -> NaiveDate {
        date_at(self.start, COLS - 1, ROWS - 1)
    }

    /// Number of cells whose date falls after today
    pub fn future_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_future).count()
    }

    /// `date<TAB>level` lines, one per cell, for plain-text inspection
    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|c| {
                let level = if c.is_future {
                    "-".to_string()
                } else {
                    c.level.value().to_string()
                };
                format!("{}\t{}", date_key(c.date), level)
            })
            .collect()
    }
}
