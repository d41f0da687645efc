//! Week-aligned activity heatmap rendering for home-screen widgets
//!
//! Pipeline: a data source hands over the serialized `date -> level` payload,
//! `parsers` turns it into a [`types::DateLevelMap`], and [`render::render`]
//! rasterizes the 16-week grid into an RGBA image.

pub mod parsers;
pub mod render;
pub mod services;
pub mod types;
