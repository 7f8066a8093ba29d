//! Frequency axis overlay below the waterfall raster.
//!
//! Tick frequencies are computed with integer arithmetic only, so identical
//! headers produce identical labels on every platform. Pixel placement is the
//! only floating-point step, rounded and clamped into the raster width.

use image::{
    Rgb,
    RgbImage,
};

use crate::{
    font::{
        GlyphFont,
        TextMetrics,
    },
    format::WaterfallHeader,
};

/// Height of the overlay strip in pixels.
pub const AXIS_HEIGHT: u32 = 22;

const BACKGROUND_COLOR: Rgb<u8> = Rgb([30, 30, 30]);
const TICK_COLOR: Rgb<u8> = Rgb([160, 160, 160]);
const TEXT_COLOR: Rgb<u8> = Rgb([200, 200, 200]);

/// Rows of the overlay occupied by the heavier tick stub.
const TICK_STUB_HEIGHT: u32 = 6;

/// Number of ticks for a header's frequency range.
///
/// One nominal step per tick, but never fewer than 3 or more than 10. An
/// empty or inverted range collapses to a single tick.
pub fn tick_count(header: &WaterfallHeader) -> u32 {
    if header.max_freq_khz <= header.min_freq_khz {
        return 1;
    }

    let span = u64::from(header.max_freq_khz - header.min_freq_khz);
    let step = u64::from(header.step_khz.max(1));
    (span / step + 1).clamp(3, 10) as u32
}

/// Tick frequencies in kHz, evenly spaced over the header's range.
pub fn tick_frequencies(header: &WaterfallHeader) -> Vec<u32> {
    let n_ticks = tick_count(header);
    if n_ticks == 1 {
        return vec![header.min_freq_khz];
    }

    let span = u64::from(header.max_freq_khz - header.min_freq_khz);
    (0..n_ticks)
        .map(|i| {
            let offset = span * u64::from(i) / u64::from(n_ticks - 1);
            header.min_freq_khz + offset as u32
        })
        .collect()
}

/// Pixel column of a tick frequency, clamped into `[0, width - 1]`.
///
/// `width` must be nonzero.
pub fn tick_x(freq_khz: u32, header: &WaterfallHeader, width: u32) -> u32 {
    let bin_idx = if header.step_khz > 0 {
        (freq_khz.saturating_sub(header.min_freq_khz)) as f32 / header.step_khz as f32
    }
    else {
        0.0
    };

    let last_bin = u32::from(header.bins.saturating_sub(1)).max(1);
    let x = (bin_idx / last_bin as f32 * (width - 1) as f32).round();
    (x as i64).clamp(0, i64::from(width - 1)) as u32
}

/// Axis label for a frequency: MHz with one decimal from 10 MHz up, plain
/// kHz below that.
pub fn format_frequency(khz: u32) -> String {
    if khz >= 10_000 {
        format!("{:.1} MHz", f64::from(khz) / 1000.0)
    }
    else {
        format!("{khz} kHz")
    }
}

/// Appends the axis strip below `raster` and draws ticks and labels.
pub fn with_frequency_axis(raster: &RgbImage, header: &WaterfallHeader) -> RgbImage {
    let width = raster.width();
    let height = raster.height();

    let mut out = RgbImage::from_pixel(width, height + AXIS_HEIGHT, BACKGROUND_COLOR);
    for (x, y, pixel) in raster.enumerate_pixels() {
        out.put_pixel(x, y, *pixel);
    }

    if width == 0 {
        return out;
    }

    let font = GlyphFont;

    for freq_khz in tick_frequencies(header) {
        let x = tick_x(freq_khz, header, width);

        for y in height..height + AXIS_HEIGHT {
            out.put_pixel(x, y, TICK_COLOR);
        }
        // heavier stub at the bottom, on the tick's own column, widened to
        // the right when that stays in bounds
        for y in height + AXIS_HEIGHT - TICK_STUB_HEIGHT..height + AXIS_HEIGHT {
            out.put_pixel(x, y, TICK_COLOR);
            if x + 1 < width {
                out.put_pixel(x + 1, y, TICK_COLOR);
            }
        }

        let label = format_frequency(freq_khz);
        let label_x = i64::from(x) - i64::from(font.text_width(&label) / 2);
        font.draw(&mut out, label_x, i64::from(height) + 2, &label, TEXT_COLOR);
    }

    out
}

#[cfg(test)]
mod tests {
    use image::RgbImage;

    use crate::{
        axis::{
            AXIS_HEIGHT,
            TICK_STUB_HEIGHT,
            format_frequency,
            tick_count,
            tick_frequencies,
            tick_x,
            with_frequency_axis,
        },
        format::WaterfallHeader,
    };

    fn header(bins: u16, min: u32, max: u32, step: u32) -> WaterfallHeader {
        WaterfallHeader {
            bins,
            rows: 1,
            min_freq_khz: min,
            max_freq_khz: max,
            step_khz: step,
            interval_ms: 0,
        }
    }

    #[test]
    fn a_degenerate_range_yields_one_leftmost_tick() {
        for step in [0, 1, 500] {
            let header = header(32, 7100, 7100, step);
            assert_eq!(tick_frequencies(&header), vec![7100]);
            assert_eq!(tick_x(7100, &header, 32), 0);
        }

        // inverted range is degenerate too
        assert_eq!(tick_count(&header(32, 7200, 7100, 10)), 1);
    }

    #[test]
    fn tick_count_is_clamped_between_3_and_10() {
        // one step in the range would give 2 ticks, floored to 3
        assert_eq!(tick_count(&header(16, 100, 200, 100)), 3);
        // thousands of steps are capped at 10
        assert_eq!(tick_count(&header(16, 0, 1_000_000, 10)), 10);
        // a zero step counts as 1 kHz
        assert_eq!(tick_count(&header(16, 100, 104, 0)), 5);
    }

    #[test]
    fn tick_frequencies_use_integer_interpolation() {
        let even = header(4, 100, 1100, 500);
        assert_eq!(tick_frequencies(&even), vec![100, 600, 1100]);

        // flooring shows up when the span doesn't divide evenly
        let uneven = header(4, 0, 10, 3);
        assert_eq!(tick_frequencies(&uneven), vec![0, 3, 6, 10]);
    }

    #[test]
    fn it_formats_labels_in_khz_below_10_mhz() {
        assert_eq!(format_frequency(100), "100 kHz");
        assert_eq!(format_frequency(1100), "1100 kHz");
        assert_eq!(format_frequency(9999), "9999 kHz");
        assert_eq!(format_frequency(10_000), "10.0 MHz");
        assert_eq!(format_frequency(12_550), "12.6 MHz");
    }

    #[test]
    fn tick_positions_span_the_raster() {
        let header = header(4, 100, 1100, 500);
        assert_eq!(tick_x(100, &header, 4), 0);
        assert_eq!(tick_x(600, &header, 4), 1);
        assert_eq!(tick_x(1100, &header, 4), 2);

        // out-of-range bin index clamps to the right edge
        assert_eq!(tick_x(10_000, &header, 4), 3);
    }

    #[test]
    fn it_composes_without_panicking_on_tiny_rasters() {
        for (bins, rows) in [(1u32, 1u32), (1, 0), (3, 0)] {
            let raster = RgbImage::new(bins, rows);
            let header = header(bins as u16, 100, 200, 10);
            let out = with_frequency_axis(&raster, &header);
            assert_eq!(out.width(), bins);
            assert_eq!(out.height(), rows + AXIS_HEIGHT);
        }
    }

    #[test]
    fn the_overlay_carries_tick_and_background_pixels() {
        let raster = RgbImage::new(64, 8);
        let header = header(64, 100, 740, 10);
        let out = with_frequency_axis(&raster, &header);

        // leftmost tick line spans the full overlay, except the label band
        // (rows 10..17 here) where a neighboring centered label may
        // legitimately overdraw it with text color
        for y in (8..10).chain(17..8 + AXIS_HEIGHT) {
            assert_eq!(out.get_pixel(0, y).0, [160, 160, 160]);
        }
        // background fill away from any tick or label
        assert_eq!(out.get_pixel(60, 8).0, [30, 30, 30]);
    }

    #[test]
    fn every_tick_carries_a_bottom_stub_on_its_own_column() {
        let raster = RgbImage::new(64, 8);
        let header = header(64, 100, 740, 10);
        let out = with_frequency_axis(&raster, &header);

        // the last tick lands on the final column, where the stub cannot
        // widen to the right
        assert_eq!(tick_x(740, &header, 64), 63);

        for freq_khz in tick_frequencies(&header) {
            let x = tick_x(freq_khz, &header, 64);
            for y in 8 + AXIS_HEIGHT - TICK_STUB_HEIGHT..8 + AXIS_HEIGHT {
                assert_eq!(out.get_pixel(x, y).0, [160, 160, 160], "tick at x={x}");
            }
        }
    }
}
