//! Image analysis pipeline module
//!
//! Pure, stateless transforms over captured sample frames: the sample mask
//! engine, the image-quality scorer and the tone/UV display transforms, with
//! the luminance/gradient extractor they share. The `analysis` module wires
//! them to TIFF frame input and output.

pub mod common;
pub mod frame;
pub mod luminance;
pub mod segmentation;
pub mod diagnostics;
pub mod tone;
pub mod analysis;

pub use common::{
    AnalysisError,
    Result,
};

pub use frame::{
    Frame,
    FrameReader,
    FrameWriter,
    TiffFrameReader,
    TiffFrameWriter,
};

pub use luminance::{
    GradientMap,
    LuminanceMap,
};

pub use segmentation::{
    segment,
    segment_with,
    MaskPixel,
    SampleMaskGrid,
    Segmentation,
    SegmentationOptions,
    SegmentationStats,
};

pub use diagnostics::{
    diagnose,
    DiagnosticsResult,
};

pub use tone::{
    apply_tone,
    apply_uv,
    TonePreset,
    ToneParameters,
    UvModeType,
    UvParameters,
};

pub use analysis::{
    AnalysisConfig,
    AnalysisConfigBuilder,
    AnalysisPipeline,
    AnalysisReport,
    PipelineTimings,
    TiffCompression,
};
