//! Image-quality diagnostics.
//!
//! Coarse focus, clipping and foreground-coverage scores computed over the
//! frame interior. Independent of the sample mask: the scorer reads the same
//! luminance and gradient signals but never segments.

use tracing::debug;
use crate::image_pipeline::frame::Frame;
use crate::image_pipeline::luminance::{self, extract};

/// Luminance above which a pixel counts as foreground.
pub const FOREGROUND_LEVEL: u8 = 5;
/// Luminance below which a pixel counts as crushed to black.
pub const CLIP_LOW: u8 = 5;
/// Luminance above which a pixel counts as blown out.
pub const CLIP_HIGH: u8 = 250;

const MAX_GRADIENT_ENERGY: f64 = 255.0 * 255.0;

/// Scalar quality summary of one frame. Every field lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiagnosticsResult {
    /// Mean squared gradient energy normalised by `255²`, capped at 1.
    pub focus_score: f64,
    pub saturation_clipping_fraction: f64,
    pub foreground_fraction: f64,
}

pub fn diagnose(frame: &Frame) -> DiagnosticsResult {
    let (width, height) = (frame.width(), frame.height());
    let (lum, grad) = extract(frame);

    let mut pixel_count = 0u64;
    let mut foreground = 0u64;
    let mut clipped = 0u64;
    let mut energy_sum = 0u64;

    for (x, y) in luminance::interior(width, height) {
        let gray = lum.get(x, y);
        pixel_count += 1;
        if gray > FOREGROUND_LEVEL {
            foreground += 1;
        }
        if gray < CLIP_LOW || gray > CLIP_HIGH {
            clipped += 1;
        }
        energy_sum += grad.energy(x, y) as u64;
    }

    // Frames of two pixels or fewer across have no interior.
    let denominator = pixel_count.max(1) as f64;

    let result = DiagnosticsResult {
        focus_score: ((energy_sum as f64 / denominator) / MAX_GRADIENT_ENERGY).min(1.0),
        saturation_clipping_fraction: clipped as f64 / denominator,
        foreground_fraction: foreground as f64 / denominator,
    };

    debug!(
        width,
        height,
        focus = result.focus_score,
        clipping = result.saturation_clipping_fraction,
        foreground = result.foreground_fraction,
        "diagnostics computed"
    );
    result
}
