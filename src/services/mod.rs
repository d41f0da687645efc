//! Host-facing services: data sources and widget frame rendering

pub mod source;
pub mod widget;

pub use source::{DataSource, RawFileSource, StaticSource, StoreFileSource, DEFAULT_STORE_KEY};
pub use widget::{SourceWarning, TapTarget, WidgetFrame, WidgetService};
