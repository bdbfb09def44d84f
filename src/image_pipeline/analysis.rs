//! Analysis orchestration
//!
//! Ties the frame reader and writer to the four analysis operations and
//! carries the run configuration.

mod pipeline;
mod timing;
mod types;

#[cfg(test)]
mod tests;

pub use pipeline::AnalysisPipeline;
pub use timing::{PipelineTimings, StepTiming};
pub use types::{AnalysisConfig, AnalysisConfigBuilder, AnalysisReport, TiffCompression};
