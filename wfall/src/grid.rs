//! Contrast normalization of the raw intensity payload.

use crate::format::Capture;

/// A `rows x bins` grid of intensities rescaled to `[0, 1]`.
///
/// The stretch uses the global min/max of the whole payload, not per-row
/// extrema, so relative brightness between sweeps survives normalization.
#[derive(Clone, Debug)]
pub struct NormalizedGrid {
    bins: u16,
    rows: u16,
    values: Vec<f32>,
}

impl NormalizedGrid {
    pub fn from_capture(capture: &Capture<'_>) -> Self {
        Self::from_payload(capture.payload, capture.header.rows, capture.header.bins)
    }

    /// Normalizes `rows * bins` payload bytes with a linear min-max stretch.
    ///
    /// A flat payload (all samples equal, including the empty grid) maps to
    /// all zeros rather than dividing by zero.
    pub fn from_payload(payload: &[u8], rows: u16, bins: u16) -> Self {
        let mut lo = u8::MAX;
        let mut hi = u8::MIN;
        for &sample in payload {
            lo = lo.min(sample);
            hi = hi.max(sample);
        }

        let values = if hi > lo {
            let span = f32::from(hi - lo);
            payload
                .iter()
                .map(|&sample| f32::from(sample - lo) / span)
                .collect()
        }
        else {
            vec![0.0; payload.len()]
        };

        Self { bins, rows, values }
    }

    pub fn bins(&self) -> u16 {
        self.bins
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Value at (row, bin). Panics if out of bounds.
    #[inline]
    pub fn get(&self, row: u16, bin: u16) -> f32 {
        self.values[usize::from(row) * usize::from(self.bins) + usize::from(bin)]
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
