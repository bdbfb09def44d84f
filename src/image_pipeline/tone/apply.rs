//! Brightness, contrast, gamma and saturation applied per pixel.
//!
//! Stage order is fixed: gamma LUT, then contrast and brightness, then
//! saturation, then a single clamp. Intermediate values stay unclamped floats
//! so the saturation stage sees the full contrast result.

use tracing::debug;
use crate::image_pipeline::common::clamp_to_u8;
use crate::image_pipeline::frame::Frame;
use crate::image_pipeline::luminance::luma_f32;
use crate::image_pipeline::tone::lut::GammaLut;
use crate::image_pipeline::tone::types::ToneParameters;

/// Saturation changes at or below this magnitude are skipped entirely.
pub const SATURATION_EPSILON: f32 = 0.01;

const PIVOT: f32 = 128.0;

/// Returns a new frame; the source is never modified.
///
/// The transform is lossy: 8-bit rounding in the LUT and the final clamp mean
/// that applying a gamma and then its reciprocal does not restore the input.
pub fn apply_tone(frame: &Frame, params: &ToneParameters) -> Frame {
    let lut = GammaLut::new(params.gamma());
    let scale = 1.0 + params.contrast();
    let offset = PIVOT * (1.0 - scale) + params.brightness() * 255.0;
    let saturation = params.saturation();
    let adjust_saturation = saturation.abs() > SATURATION_EPSILON;

    debug!(
        width = frame.width(),
        height = frame.height(),
        preset = ?params.preset(),
        brightness = params.brightness(),
        contrast = params.contrast(),
        gamma = params.gamma(),
        saturation,
        "applying tone transform"
    );

    frame.map_pixels(|px| {
        let mut v = px.map(|c| lut.map(c) as f32 * scale + offset);

        if adjust_saturation {
            let gray = luma_f32(v[0], v[1], v[2]);
            for c in v.iter_mut() {
                *c = gray + (1.0 + saturation) * (*c - gray);
            }
        }

        v.map(clamp_to_u8)
    })
}
