//! Frame module
//!
//! The in-memory RGB frame every analysis stage borrows, plus the reader and
//! writer seams used to move frames in and out of TIFF files.

mod reader;
mod writer;
mod tiff_reader;
mod tiff_writer;
pub mod types;


pub use reader::FrameReader;
pub use writer::FrameWriter;
pub use tiff_reader::TiffFrameReader;
pub use tiff_writer::TiffFrameWriter;
pub use types::{Frame, CHANNELS};
