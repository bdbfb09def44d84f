//! UV-fluorescence simulation.
//!
//! Gamma LUT, an enhanced blue channel and an optional false-colour remap that
//! buckets pixels by how blue they are relative to their intensity.

use tracing::debug;
use crate::image_pipeline::common::clamp_to_u8;
use crate::image_pipeline::frame::Frame;
use crate::image_pipeline::tone::lut::GammaLut;
use crate::image_pipeline::tone::types::{clamp, GAMMA_RANGE};

pub const BLUE_ENHANCEMENT_RANGE: (f32, f32) = (0.5, 3.0);
pub const CONTRAST_BOOST_RANGE: (f32, f32) = (0.5, 3.0);

/// Blue-to-intensity ratio above which a pixel is rendered cyan/white.
pub const FLUORESCENT_RATIO: f32 = 1.2;
/// Blue-to-intensity ratio below which a pixel is darkened.
pub const DIM_RATIO: f32 = 0.8;

const FLUORESCENT_GAIN: [f32; 3] = [0.7, 1.3, 1.4];
const NEUTRAL_GAIN: [f32; 3] = [1.1, 0.7, 1.2];
const DIM_GAIN: [f32; 3] = [0.5, 0.5, 0.5];

const PIVOT: f32 = 128.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UvModeType {
    #[default]
    Normal,
    UvA,
    UvB,
    /// Tag only: selecting it leaves the numeric settings untouched.
    UvC,
    Simulated,
}

impl UvModeType {
    /// `(blue_enhancement, contrast_boost, false_color_enabled, gamma)`.
    pub fn values(self) -> Option<(f32, f32, bool, f32)> {
        match self {
            UvModeType::Normal => Some((1.0, 1.0, false, 1.0)),
            UvModeType::UvA => Some((1.5, 1.2, true, 0.9)),
            UvModeType::UvB => Some((1.8, 1.4, true, 0.8)),
            UvModeType::Simulated => Some((1.3, 1.1, true, 1.0)),
            UvModeType::UvC => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvParameters {
    mode: UvModeType,
    blue_enhancement: f32,
    contrast_boost: f32,
    false_color_enabled: bool,
    gamma: f32,
}

impl Default for UvParameters {
    fn default() -> Self {
        Self::for_mode(UvModeType::Normal)
    }
}

impl UvParameters {
    /// Mode preset. `UvC` has none and starts from the `Normal` values.
    pub fn for_mode(mode: UvModeType) -> Self {
        let mut params = Self {
            mode: UvModeType::Normal,
            blue_enhancement: 1.0,
            contrast_boost: 1.0,
            false_color_enabled: false,
            gamma: 1.0,
        };
        params.set_mode(mode);
        params
    }

    /// Switches mode and loads its preset; `UvC` only changes the tag.
    pub fn set_mode(&mut self, mode: UvModeType) {
        if let Some((blue, boost, false_color, gamma)) = mode.values() {
            self.blue_enhancement = blue;
            self.contrast_boost = boost;
            self.false_color_enabled = false_color;
            self.gamma = gamma;
        }
        self.mode = mode;
    }

    pub fn mode(&self) -> UvModeType {
        self.mode
    }

    pub fn blue_enhancement(&self) -> f32 {
        self.blue_enhancement
    }

    pub fn contrast_boost(&self) -> f32 {
        self.contrast_boost
    }

    pub fn false_color_enabled(&self) -> bool {
        self.false_color_enabled
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    pub fn set_blue_enhancement(&mut self, value: f32) {
        self.blue_enhancement = clamp(value, BLUE_ENHANCEMENT_RANGE);
    }

    pub fn set_contrast_boost(&mut self, value: f32) {
        self.contrast_boost = clamp(value, CONTRAST_BOOST_RANGE);
    }

    pub fn set_false_color_enabled(&mut self, enabled: bool) {
        self.false_color_enabled = enabled;
    }

    pub fn set_gamma(&mut self, value: f32) {
        self.gamma = clamp(value, GAMMA_RANGE);
    }
}

/// Returns a new frame; the source is never modified.
pub fn apply_uv(frame: &Frame, params: &UvParameters) -> Frame {
    let lut = GammaLut::new(params.gamma());
    let blue_gain = params.blue_enhancement() * params.contrast_boost();
    let blue_offset = PIVOT * (1.0 - params.contrast_boost());
    let false_color = params.false_color_enabled();

    debug!(
        width = frame.width(),
        height = frame.height(),
        mode = ?params.mode(),
        blue_gain,
        false_color,
        gamma = params.gamma(),
        "applying UV simulation"
    );

    frame.map_pixels(|[r, g, b]| {
        let r = lut.map(r) as f32;
        let g = lut.map(g) as f32;
        let b = lut.map(b) as f32 * blue_gain + blue_offset;

        let out = if false_color {
            let gain = false_color_gain(r, g, b);
            [r * gain[0], g * gain[1], b * gain[2]]
        } else {
            [r, g, b]
        };

        out.map(clamp_to_u8)
    })
}

fn false_color_gain(r: f32, g: f32, b: f32) -> [f32; 3] {
    let intensity = (r + g + b) / 3.0;
    let ratio = if intensity > 0.0 { b / intensity } else { 1.0 };

    if ratio > FLUORESCENT_RATIO {
        FLUORESCENT_GAIN
    } else if ratio >= DIM_RATIO {
        NEUTRAL_GAIN
    } else {
        DIM_GAIN
    }
}
