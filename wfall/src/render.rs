//! One-shot conversion of a capture buffer into the final image.

use image::RgbImage;

use crate::{
    axis,
    colormap::ColorMap,
    format::{
        Capture,
        FormatError,
        WaterfallHeader,
    },
    grid::NormalizedGrid,
};

/// Renders a raw capture buffer to the final image: colormapped waterfall
/// with the frequency axis strip below it.
///
/// Everything past header validation is total, so the only failure mode is a
/// [`FormatError`] from parsing.
pub fn render(data: &[u8], color_map: ColorMap) -> Result<(WaterfallHeader, RgbImage), FormatError> {
    let capture = Capture::parse(data)?;
    let image = render_capture(&capture, color_map);
    Ok((capture.header, image))
}

/// Renders an already-parsed capture.
pub fn render_capture(capture: &Capture<'_>, color_map: ColorMap) -> RgbImage {
    let grid = NormalizedGrid::from_capture(capture);
    let raster = rasterize(&grid, color_map);
    axis::with_frequency_axis(&raster, &capture.header)
}

/// Colormaps a normalized grid into a `bins x rows` raster, payload order
/// top to bottom.
pub fn rasterize(grid: &NormalizedGrid, color_map: ColorMap) -> RgbImage {
    RgbImage::from_fn(grid.bins().into(), grid.rows().into(), |x, y| {
        color_map.map(grid.get(y as u16, x as u16))
    })
}
