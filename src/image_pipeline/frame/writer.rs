use std::io::Write;
use crate::image_pipeline::analysis::AnalysisConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::frame::types::Frame;

pub trait FrameWriter {
    fn write_frame(&self, frame: &Frame, output: &mut dyn Write, config: &AnalysisConfig) -> Result<()>;
}
