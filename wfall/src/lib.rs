//! Decoder for device-produced waterfall captures.
//!
//! A capture is a 24-byte little-endian header (see [`format`]) followed by
//! row-major u8 intensity samples. The pipeline normalizes the samples with a
//! global min-max stretch, colormaps them, and appends a labeled frequency
//! axis below the raster. [`render::render`] runs the whole thing on a byte
//! buffer.

pub mod axis;
pub mod colormap;
pub mod font;
pub mod format;
pub mod grid;
pub mod render;

pub use crate::{
    colormap::ColorMap,
    format::{
        Capture,
        FormatError,
        WaterfallHeader,
    },
    render::render,
};
