//! Common utilities module
//!
//! This module contains shared utilities used across the analysis pipeline.

pub mod error;

pub use error::{AnalysisError, Result};

/// Clamps a float channel value into `[0, 255]` and truncates it to a byte.
#[inline]
pub(crate) fn clamp_to_u8(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
