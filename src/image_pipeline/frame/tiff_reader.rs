//! Frame reader backed by the `tiff` crate.
//!
//! Captured frames handed over by the acquisition side are stored as baseline
//! TIFF. Only 8-bit RGB survives into the analysis paths, so other layouts the
//! camera software commonly writes are folded into RGB8 here.

use std::io::Cursor;

use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;
use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::frame::reader::FrameReader;
use crate::image_pipeline::frame::types::Frame;

/// TIFF frame reader.
///
/// Accepted layouts:
/// - RGB, 8 bit: used as is
/// - RGBA, 8 bit: alpha dropped
/// - Gray, 8 bit: replicated into all three channels
/// - RGB, 16 bit: high byte of every sample kept
pub struct TiffFrameReader;

impl FrameReader for TiffFrameReader {
    fn read_frame(&self, data: &[u8]) -> Result<Frame> {
        debug!("Decoding TIFF frame, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data))
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;
        let (width, height) = decoder
            .dimensions()
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;
        let color_type = decoder
            .colortype()
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;
        let (width, height) = (width as usize, height as usize);

        debug!("TIFF frame {}x{}, color type {:?}", width, height, color_type);

        let decoded = decoder
            .read_image()
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;

        let rgb = match (color_type, decoded) {
            (ColorType::RGB(8), DecodingResult::U8(values)) => values,
            (ColorType::RGBA(8), DecodingResult::U8(values)) => values
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
            (ColorType::Gray(8), DecodingResult::U8(values)) => {
                values.iter().flat_map(|&v| [v, v, v]).collect()
            }
            (ColorType::RGB(16), DecodingResult::U16(values)) => {
                values.iter().map(|&v| (v >> 8) as u8).collect()
            }
            (other, _) => {
                return Err(AnalysisError::UnsupportedFormat(format!("{:?}", other)));
            }
        };

        Frame::new(width, height, rgb)
    }
}
