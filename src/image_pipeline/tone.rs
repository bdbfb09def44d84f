//! Tone transform pipeline
//!
//! Parametric tone and colour transforms producing display and export frames,
//! plus the UV-fluorescence simulation mode.

mod apply;
mod lut;
pub mod types;
pub mod uv;


pub use apply::{apply_tone, SATURATION_EPSILON};
pub use lut::GammaLut;
pub use types::{
    TonePreset, ToneParameters, ToneParametersBuilder, BRIGHTNESS_RANGE, CONTRAST_RANGE,
    GAMMA_RANGE, SATURATION_RANGE,
};
pub use uv::{apply_uv, UvModeType, UvParameters};
