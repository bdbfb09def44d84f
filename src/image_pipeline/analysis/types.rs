//! Analysis configuration and report types

use crate::image_pipeline::diagnostics::DiagnosticsResult;
use crate::image_pipeline::frame::Frame;
use crate::image_pipeline::segmentation::Segmentation;
use crate::image_pipeline::tone::{ToneParameters, UvParameters};

/// TIFF compression used when writing frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - best compression (slower)
    DeflateBest,
    /// Deflate compression - balanced
    DeflateBalanced,
}

/// Configuration for an analysis run
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Reject frames whose width or height exceeds `max_dimension`
    pub validate_dimensions: bool,
    pub max_dimension: Option<usize>,
    /// Render the tinted mask preview alongside the mask
    pub render_preview: bool,
    /// Tone transform applied to produce the display frame
    pub tone: ToneParameters,
    /// UV simulation applied after the tone transform, if any
    pub uv: Option<UvParameters>,
    /// Compression for frames written by the pipeline
    pub compression: TiffCompression,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: Some(50000),
            render_preview: false,
            tone: ToneParameters::default(),
            uv: None,
            compression: TiffCompression::None,
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

/// Builder for AnalysisConfig
#[derive(Default)]
pub struct AnalysisConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    render_preview: Option<bool>,
    tone: Option<ToneParameters>,
    uv: Option<Option<UvParameters>>,
    compression: Option<TiffCompression>,
}

impl AnalysisConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn render_preview(mut self, enable: bool) -> Self {
        self.render_preview = Some(enable);
        self
    }

    pub fn tone(mut self, tone: ToneParameters) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn uv(mut self, uv: Option<UvParameters>) -> Self {
        self.uv = Some(uv);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            render_preview: self.render_preview.unwrap_or(default.render_preview),
            tone: self.tone.unwrap_or(default.tone),
            uv: self.uv.unwrap_or(default.uv),
            compression: self.compression.unwrap_or(default.compression),
        }
    }
}

/// Everything one analysis run produces for downstream consumers.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub width: usize,
    pub height: usize,
    pub segmentation: Segmentation,
    pub diagnostics: DiagnosticsResult,
    /// Tone-mapped (and optionally UV-simulated) display frame
    pub rendered: Frame,
}
