//! Grayscale and gradient extraction.
//!
//! Both the mask engine and the diagnostics scorer work on the same two
//! derived signals: BT.601 luminance rounded to a byte, and a central
//! difference gradient over that luminance. The gradient is only defined for
//! interior pixels; the one pixel border is always zero.

use tracing::trace;
use crate::image_pipeline::frame::Frame;

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Per-pixel luminance in `0..=255`.
#[derive(Debug, Clone)]
pub struct LuminanceMap {
    width: usize,
    height: usize,
    values: Vec<u8>,
}

impl LuminanceMap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.values[y * self.width + x]
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

/// Per-pixel gradient energy `gx² + gy²`.
///
/// Stored squared so integer sums stay exact; `magnitude` takes the root.
#[derive(Debug, Clone)]
pub struct GradientMap {
    width: usize,
    height: usize,
    energy: Vec<u32>,
}

impl GradientMap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn energy(&self, x: usize, y: usize) -> u32 {
        self.energy[y * self.width + x]
    }

    #[inline]
    pub fn magnitude(&self, x: usize, y: usize) -> f32 {
        (self.energy(x, y) as f32).sqrt()
    }
}

/// `round(0.299 R + 0.587 G + 0.114 B)`.
#[inline]
pub fn luminance([r, g, b]: [u8; 3]) -> u8 {
    (LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32)
        .round()
        .min(255.0) as u8
}

/// Unrounded luma, used where the tone pipeline needs the float value.
#[inline]
pub(crate) fn luma_f32(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

pub fn extract_luminance(frame: &Frame) -> LuminanceMap {
    LuminanceMap {
        width: frame.width(),
        height: frame.height(),
        values: frame.pixels().map(luminance).collect(),
    }
}

/// Central differences on the luminance grid:
/// `gx = L(x+1, y) - L(x-1, y)`, `gy = L(x, y+1) - L(x, y-1)`.
pub fn extract_gradient(lum: &LuminanceMap) -> GradientMap {
    let (width, height) = (lum.width, lum.height);
    let mut energy = vec![0u32; width * height];

    if width >= 3 && height >= 3 {
        for y in 1..height - 1 {
            let row = y * width;
            for x in 1..width - 1 {
                let gx = lum.get(x + 1, y) as i32 - lum.get(x - 1, y) as i32;
                let gy = lum.get(x, y + 1) as i32 - lum.get(x, y - 1) as i32;
                energy[row + x] = (gx * gx + gy * gy) as u32;
            }
        }
    }

    trace!(width, height, "gradient map extracted");
    GradientMap { width, height, energy }
}

/// Luminance and gradient in one call.
pub fn extract(frame: &Frame) -> (LuminanceMap, GradientMap) {
    let lum = extract_luminance(frame);
    let grad = extract_gradient(&lum);
    (lum, grad)
}

/// Iterates the coordinates of every interior (non-border) pixel.
pub(crate) fn interior(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    let xs = 1..width.saturating_sub(1);
    (1..height.saturating_sub(1)).flat_map(move |y| xs.clone().map(move |x| (x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_weights() {
        assert_eq!(luminance([0, 0, 0]), 0);
        assert_eq!(luminance([255, 255, 255]), 255);
        assert_eq!(luminance([255, 0, 0]), 76);
        assert_eq!(luminance([0, 255, 0]), 150);
        assert_eq!(luminance([0, 0, 255]), 29);
        assert_eq!(luminance([128, 128, 128]), 128);
    }

    #[test]
    fn test_gradient_border_is_zero() {
        let frame = Frame::from_fn(6, 5, |x, y| [(x * 40) as u8, (y * 50) as u8, 0]).unwrap();
        let (_, grad) = extract(&frame);

        for x in 0..6 {
            assert_eq!(grad.energy(x, 0), 0);
            assert_eq!(grad.energy(x, 4), 0);
        }
        for y in 0..5 {
            assert_eq!(grad.energy(0, y), 0);
            assert_eq!(grad.energy(5, y), 0);
        }
    }

    #[test]
    fn test_gradient_of_vertical_edge() {
        // Left half black, right half white: the two columns touching the edge see 255.
        let frame = Frame::from_fn(6, 3, |x, _| if x < 3 { [0; 3] } else { [255; 3] }).unwrap();
        let (lum, grad) = extract(&frame);

        assert_eq!(lum.get(2, 1), 0);
        assert_eq!(lum.get(3, 1), 255);
        assert_eq!(grad.energy(1, 1), 0);
        assert_eq!(grad.energy(2, 1), 255 * 255);
        assert_eq!(grad.energy(3, 1), 255 * 255);
        assert_eq!(grad.energy(4, 1), 0);
        assert!((grad.magnitude(2, 1) - 255.0).abs() < 1e-3);
    }

    #[test]
    fn test_tiny_frames_have_no_gradient() {
        let frame = Frame::from_fn(2, 7, |x, y| [(x * 100 + y) as u8; 3]).unwrap();
        let (_, grad) = extract(&frame);
        assert!((0..7).all(|y| (0..2).all(|x| grad.energy(x, y) == 0)));
        assert_eq!(interior(2, 7).count(), 0);
        assert_eq!(interior(4, 4).count(), 4);
    }
}
