//! Read-only density map sampled by the strip engine.
//!
//! Pixels are stored interleaved (`channels` bytes per pixel, row-major). Only
//! channel 0 is ever read; for RGBA data that is the red channel.

use crate::error::StripError;
use crate::geom2::Point;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Wrap interleaved pixel data with `channels` bytes per pixel.
    pub fn from_vec(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, StripError> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(StripError::invalid(format!(
                "image must be non-empty (got {width}x{height}, {channels} channels)"
            )));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .ok_or(StripError::ImageSizeMismatch {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != expected {
            return Err(StripError::ImageSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// RGBA8 pixels, as produced by canvas-style pixel readback.
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Result<Self, StripError> {
        Self::from_vec(width, height, 4, data)
    }

    /// Single-channel density map.
    pub fn from_gray(width: usize, height: usize, data: Vec<u8>) -> Result<Self, StripError> {
        Self::from_vec(width, height, 1, data)
    }

    /// Build an RGBA image whose red channel is `f(x, y)`; green/blue are zero, alpha opaque.
    pub fn from_fn_rgba(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> u8,
    ) -> Result<Self, StripError> {
        let mut data = Vec::with_capacity(width.saturating_mul(height).saturating_mul(4));
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[f(x, y), 0, 0, 255]);
            }
        }
        Self::from_rgba(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Channel 0 at integer pixel `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn channel_at(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get((y * self.width + x) * self.channels).copied()
    }

    /// Channel 0 under a real-valued point: floor to the containing pixel and
    /// clamp into the image, so points on the far edges read the last column/row.
    #[inline]
    pub fn sample_at(&self, p: Point) -> u8 {
        let x = clamp_index(p.x, self.width);
        let y = clamp_index(p.y, self.height);
        self.data[(y * self.width + x) * self.channels]
    }
}

#[inline]
fn clamp_index(v: f64, len: usize) -> usize {
    let max = (len - 1) as f64;
    // NaN maps to 0 via the saturating cast.
    v.floor().clamp(0.0, max) as usize
}
