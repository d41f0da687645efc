//! Widget frame service
//!
//! Glues a data source, a payload parser and the rasterizer together.
//! Data problems never escape: a widget render must not crash the host,
//! so fetch and parse failures degrade to an empty map.

use chrono::{Local, NaiveDate};

use crate::parsers::{HeatmapDataParser, LevelMapParser};
use crate::render::{self, HeatmapGrid, WidgetImage};
use crate::services::source::DataSource;
use crate::types::{DateLevelMap, Result};

/// Clickable region in image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapTarget {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl TapTarget {
    /// Region covering a whole image
    pub fn covering(image: &WidgetImage) -> Self {
        Self {
            x: 0,
            y: 0,
            width: image.width(),
            height: image.height(),
        }
    }
}

/// Data source problem that was recovered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceWarning {
    /// Source could not be read; rendered with no data
    FetchFailed(String),
}

/// One rendered widget frame ready for the host
#[derive(Debug)]
pub struct WidgetFrame {
    pub today: NaiveDate,
    pub image: WidgetImage,
    pub tap_target: TapTarget,
    pub warning: Option<SourceWarning>,
}

/// Renders widget frames from a data source
pub struct WidgetService {
    source: Box<dyn DataSource>,
    parser: Box<dyn HeatmapDataParser>,
}

impl WidgetService {
    /// Service reading a `{"YYYY-MM-DD": level}` payload
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self::with_parser(source, Box::new(LevelMapParser))
    }

    pub fn with_parser(source: Box<dyn DataSource>, parser: Box<dyn HeatmapDataParser>) -> Self {
        Self { source, parser }
    }

    /// Fetch and parse the level map. Never fails.
    pub fn load_levels(&self) -> (DateLevelMap, Option<SourceWarning>) {
        match self.source.fetch() {
            Ok(raw) => (self.parser.parse(raw.as_deref()), None),
            Err(e) => {
                log::warn!("[{}] fetch failed: {}; rendering without data", self.source.name(), e);
                (DateLevelMap::new(), Some(SourceWarning::FetchFailed(e.to_string())))
            }
        }
    }

    /// Render using the local calendar date, captured once for the whole frame
    pub fn render_now(&self, scale: f32) -> Result<WidgetFrame> {
        let today = Local::now().date_naive();
        self.render_for(today, scale)
    }

    /// Render as of `today`
    pub fn render_for(&self, today: NaiveDate, scale: f32) -> Result<WidgetFrame> {
        let (levels, warning) = self.load_levels();
        let image = render::render(&levels, today, scale)?;
        let tap_target = TapTarget::covering(&image);
        Ok(WidgetFrame {
            today,
            image,
            tap_target,
            warning,
        })
    }

    /// Grid model as of `today`, without rasterizing
    pub fn grid_for(&self, today: NaiveDate) -> (HeatmapGrid, Option<SourceWarning>) {
        let (levels, warning) = self.load_levels();
        (HeatmapGrid::build(&levels, today), warning)
    }
}
