use std::io::Write;
use tracing::debug;
use crate::image_pipeline::analysis::{AnalysisConfig, TiffCompression};
use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::frame::types::Frame;
use crate::image_pipeline::frame::writer::FrameWriter;

pub struct TiffFrameWriter;

impl FrameWriter for TiffFrameWriter {
    fn write_frame(&self, frame: &Frame, output: &mut dyn Write, config: &AnalysisConfig) -> Result<()> {
        debug!("Encoding TIFF frame: {}x{}", frame.width(), frame.height());

        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };

        let width = u32::try_from(frame.width())
            .map_err(|_| AnalysisError::InvalidDimensions(frame.width(), frame.height()))?;
        let height = u32::try_from(frame.height())
            .map_err(|_| AnalysisError::InvalidDimensions(frame.width(), frame.height()))?;

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| AnalysisError::EncodeError(e.to_string()))?
            .with_compression(compression);

        encoder
            .write_image::<tiff::encoder::colortype::RGB8>(width, height, frame.as_bytes())
            .map_err(|e| AnalysisError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
