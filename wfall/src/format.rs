//! Reader for the `.raw` waterfall capture container.
//!
//! The container is a fixed 24-byte little-endian header followed by
//! `rows * bins` u8 intensity samples in row-major order.

use std::fmt::Display;

/// `"WWF1"` when read as bytes.
pub const MAGIC: u32 = 0x31465757;

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 24;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("file too short: got {len} bytes, need at least {HEADER_LEN}")]
    TooShort { len: usize },

    #[error("bad magic 0x{magic:08X}, expected 0x{MAGIC:08X}")]
    BadMagic { magic: u32 },

    #[error("payload short: got {len}, need {expected}")]
    PayloadTooShort { len: usize, expected: usize },
}

/// Decoded fixed header of a waterfall capture.
///
/// `min_freq_khz`, `max_freq_khz` and `step_khz` are display hints for the
/// frequency axis; the payload geometry is fully determined by `bins` and
/// `rows`. The format does not promise `max_freq_khz > min_freq_khz`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaterfallHeader {
    pub bins: u16,
    pub rows: u16,
    pub min_freq_khz: u32,
    pub max_freq_khz: u32,
    pub step_khz: u32,
    pub interval_ms: u32,
}

impl WaterfallHeader {
    /// Number of payload bytes the header declares.
    ///
    /// Widened so `65535 * 65535` doesn't wrap.
    pub fn expected_payload_len(&self) -> usize {
        usize::from(self.rows) * usize::from(self.bins)
    }
}

impl Display for WaterfallHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "bins={} rows={} freq={}-{} kHz step={} kHz interval={} ms",
            self.bins,
            self.rows,
            self.min_freq_khz,
            self.max_freq_khz,
            self.step_khz,
            self.interval_ms
        )
    }
}

/// A parsed capture borrowing its payload from the input buffer.
#[derive(Clone, Copy, Debug)]
pub struct Capture<'a> {
    pub header: WaterfallHeader,
    /// Exactly `header.expected_payload_len()` bytes, row-major.
    pub payload: &'a [u8],
}

impl<'a> Capture<'a> {
    /// Parses a capture from a raw file buffer.
    ///
    /// Trailing bytes beyond the declared payload are ignored. The device
    /// appends rows until its flash region is full, so a capture truncated
    /// mid-row is a real failure mode, reported as
    /// [`FormatError::PayloadTooShort`].
    pub fn parse(data: &'a [u8]) -> Result<Self, FormatError> {
        if data.len() < 4 {
            return Err(FormatError::TooShort { len: data.len() });
        }

        let magic = read_u32(data, 0);
        if magic != MAGIC {
            return Err(FormatError::BadMagic { magic });
        }

        if data.len() < HEADER_LEN {
            return Err(FormatError::TooShort { len: data.len() });
        }

        let header = WaterfallHeader {
            bins: read_u16(data, 4),
            rows: read_u16(data, 6),
            min_freq_khz: read_u32(data, 8),
            max_freq_khz: read_u32(data, 12),
            step_khz: read_u32(data, 16),
            interval_ms: read_u32(data, 20),
        };

        let payload = &data[HEADER_LEN..];
        let expected = header.expected_payload_len();
        if payload.len() < expected {
            return Err(FormatError::PayloadTooShort {
                len: payload.len(),
                expected,
            });
        }

        tracing::debug!(%header, trailing = payload.len() - expected, "parsed capture");

        Ok(Self {
            header,
            payload: &payload[..expected],
        })
    }
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes(data[offset..offset + 2].try_into().unwrap())
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(data[offset..offset + 4].try_into().unwrap())
}
