//! Minimal 5x7 bitmap font for axis labels.
//!
//! Only the characters that frequency labels can produce are covered; anything
//! else renders as blank space. Glyphs are 5 bits wide, drawn on a 6-pixel
//! advance, so the measured width of a label equals the 6-pixels-per-character
//! approximation used when no glyph renderer is present.

use image::{
    Rgb,
    RgbImage,
};

/// Measures label widths in pixels.
///
/// The axis renderer only needs widths for centering, so this is the whole
/// seam between layout and whatever actually rasterizes the text.
pub trait TextMetrics {
    fn text_width(&self, text: &str) -> u32;
}

/// Width-only fallback: 6 pixels per character, no rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproximateMetrics;

impl TextMetrics for ApproximateMetrics {
    fn text_width(&self, text: &str) -> u32 {
        6 * u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
    }
}

/// The built-in glyph set.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlyphFont;

impl GlyphFont {
    pub const ADVANCE: i64 = 6;
    pub const HEIGHT: u32 = 7;

    /// Draws `text` with its top-left corner at `(x, y)`.
    ///
    /// Coordinates are signed because centered labels near the image edge
    /// start off-canvas; out-of-bounds pixels are dropped.
    pub fn draw(&self, image: &mut RgbImage, x: i64, y: i64, text: &str, color: Rgb<u8>) {
        for (i, ch) in text.chars().enumerate() {
            let Some(rows) = glyph(ch)
            else {
                continue;
            };

            let glyph_x = x + i as i64 * Self::ADVANCE;
            for (row, &bits) in rows.iter().enumerate() {
                for col in 0..5i64 {
                    if bits & (0x10 >> col) != 0 {
                        put_pixel_checked(image, glyph_x + col, y + row as i64, color);
                    }
                }
            }
        }
    }
}

impl TextMetrics for GlyphFont {
    fn text_width(&self, text: &str) -> u32 {
        ApproximateMetrics.text_width(text)
    }
}

fn put_pixel_checked(image: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 {
        let (x, y) = (x as u32, y as u32);
        if x < image.width() && y < image.height() {
            image.put_pixel(x, y, color);
        }
    }
}

#[rustfmt::skip]
fn glyph(ch: char) -> Option<&'static [u8; 7]> {
    let rows: &[u8; 7] = match ch {
        '.' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04],
        '-' => &[0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '0' => &[0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => &[0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => &[0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => &[0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => &[0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => &[0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => &[0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => &[0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => &[0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => &[0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'H' => &[0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'M' => &[0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'k' => &[0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12],
        'z' => &[0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use image::{
        Rgb,
        RgbImage,
    };

    use crate::font::{
        ApproximateMetrics,
        GlyphFont,
        TextMetrics,
    };

    #[test]
    fn glyph_width_matches_the_approximation() {
        let label = "146.2 MHz";
        assert_eq!(
            GlyphFont.text_width(label),
            ApproximateMetrics.text_width(label)
        );
        assert_eq!(GlyphFont.text_width(label), 54);
    }

    #[test]
    fn it_draws_within_bounds_from_negative_coordinates() {
        let mut image = RgbImage::new(4, 4);
        GlyphFont.draw(&mut image, -3, -2, "888", Rgb([255, 255, 255]));
        // didn't panic; some ink landed on the visible corner
        let lit = image.pixels().filter(|p| p.0 != [0, 0, 0]).count();
        assert!(lit > 0);
    }

    #[test]
    fn unknown_characters_render_as_blanks() {
        let mut image = RgbImage::new(16, 8);
        GlyphFont.draw(&mut image, 0, 0, "@@", Rgb([255, 255, 255]));
        assert!(image.pixels().all(|p| p.0 == [0, 0, 0]));
    }
}
