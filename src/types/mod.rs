//! Type definitions for heatgrid

mod error;
mod level;

pub use error::*;
pub use level::*;
