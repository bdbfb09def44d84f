//! Frame types shared by every analysis stage

use crate::image_pipeline::common::error::{AnalysisError, Result};

/// Bytes per pixel on every analysis path (R, G, B; no alpha).
pub const CHANNELS: usize = 3;

/// One captured or loaded image.
///
/// Samples are stored row-major, interleaved `[R, G, B, R, G, B, ...]`, with a
/// row stride of `width * 3` bytes. A frame always has a non-zero area; the
/// analysis stages only ever borrow it and transforms return a new frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Frame {
    /// Wraps an interleaved RGB buffer.
    ///
    /// Fails with `InvalidDimensions` for a zero-area frame and with
    /// `BufferSizeMismatch` when `data` is not exactly `width * height * 3` bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AnalysisError::InvalidDimensions(width, height));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(AnalysisError::InvalidDimensions(width, height))?;
        if data.len() != expected {
            return Err(AnalysisError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// A frame where every pixel has the same colour.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Result<Self> {
        Self::from_fn(width, height, |_, _| rgb)
    }

    /// Builds a frame by evaluating `f(x, y)` for every pixel in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> [u8; 3],
    {
        let mut data = Vec::with_capacity(width.saturating_mul(height).saturating_mul(CHANNELS));
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self::new(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.width * CHANNELS
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the frame.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = (y * self.width + x) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        (x < self.width && y < self.height).then(|| self.pixel(x, y))
    }

    /// Iterates pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data.chunks_exact(CHANNELS).map(|p| [p[0], p[1], p[2]])
    }

    /// Produces a new frame of the same size by mapping every pixel.
    pub(crate) fn map_pixels<F>(&self, mut f: F) -> Frame
    where
        F: FnMut([u8; 3]) -> [u8; 3],
    {
        let mut data = Vec::with_capacity(self.data.len());
        for px in self.pixels() {
            data.extend_from_slice(&f(px));
        }
        Frame {
            width: self.width,
            height: self.height,
            data,
        }
    }
}
