use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::image_pipeline::analysis::{AnalysisConfig, AnalysisPipeline, TiffCompression};
use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::frame::{Frame, FrameReader, FrameWriter, TiffFrameReader};
use crate::image_pipeline::tone::{TonePreset, ToneParameters, UvModeType, UvParameters};

struct MockReader {
    should_fail: bool,
    mock_frame: Option<Frame>,
}

impl FrameReader for MockReader {
    fn read_frame(&self, _data: &[u8]) -> Result<Frame> {
        if self.should_fail {
            return Err(AnalysisError::DecodeError("Mock decode error".to_string()));
        }
        Ok(self.mock_frame.clone().unwrap_or_else(|| specimen_frame(100, 100)))
    }
}

struct MockWriter {
    should_fail: bool,
    written: Arc<Mutex<Vec<Frame>>>,
}

impl FrameWriter for MockWriter {
    fn write_frame(&self, frame: &Frame, _output: &mut dyn Write, _config: &AnalysisConfig) -> Result<()> {
        if self.should_fail {
            return Err(AnalysisError::EncodeError("Mock encode error".to_string()));
        }
        self.written.lock().unwrap().push(frame.clone());
        Ok(())
    }
}

/// Light field with one dark 20x20 grain in the middle.
fn specimen_frame(width: usize, height: usize) -> Frame {
    let (cx, cy) = (width / 2, height / 2);
    Frame::from_fn(width, height, |x, y| {
        if x.abs_diff(cx) < 10 && y.abs_diff(cy) < 10 {
            [12, 10, 8]
        } else {
            [235, 240, 238]
        }
    })
    .unwrap()
}

fn pipeline_with(
    reader: MockReader,
    writer_fails: bool,
    config: AnalysisConfig,
) -> (AnalysisPipeline<MockReader, MockWriter>, Arc<Mutex<Vec<Frame>>>) {
    let written = Arc::new(Mutex::new(Vec::new()));
    let writer = MockWriter {
        should_fail: writer_fails,
        written: written.clone(),
    };
    (AnalysisPipeline::with_custom(reader, writer, config), written)
}

#[test]
fn test_config_builder() {
    let tone = ToneParameters::from_preset(TonePreset::HighContrast);
    let config = AnalysisConfig::builder()
        .compression(TiffCompression::DeflateBest)
        .validate_dimensions(false)
        .max_dimension(Some(10000))
        .render_preview(true)
        .tone(tone)
        .uv(Some(UvParameters::for_mode(UvModeType::UvA)))
        .build();

    assert_eq!(config.compression, TiffCompression::DeflateBest);
    assert!(!config.validate_dimensions);
    assert_eq!(config.max_dimension, Some(10000));
    assert!(config.render_preview);
    assert_eq!(config.tone.preset(), TonePreset::HighContrast);
    assert_eq!(config.uv.map(|uv| uv.mode()), Some(UvModeType::UvA));
}

#[test]
fn test_config_defaults() {
    let config = AnalysisConfig::builder().build();
    assert!(config.validate_dimensions);
    assert_eq!(config.max_dimension, Some(50000));
    assert!(!config.render_preview);
    assert_eq!(config.tone.preset(), TonePreset::Standard);
    assert!(config.uv.is_none());
}

#[test]
fn test_successful_processing() {
    let reader = MockReader { should_fail: false, mock_frame: None };
    let (pipeline, written) = pipeline_with(reader, false, AnalysisConfig::default());

    let mut output = Cursor::new(Vec::new());
    let report = pipeline.process(b"fake tiff data", &mut output).unwrap();

    assert_eq!((report.width, report.height), (100, 100));
    assert!(report.segmentation.mask.is_sample(50, 50));
    assert!(!report.segmentation.mask.is_sample(5, 5));
    assert!(report.segmentation.preview.is_none());
    assert_eq!(report.diagnostics.foreground_fraction, 1.0);

    // Standard tone and no UV: the written frame is the input.
    let written = written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0], specimen_frame(100, 100));
}

#[test]
fn test_reader_failure() {
    let reader = MockReader { should_fail: true, mock_frame: None };
    let (pipeline, written) = pipeline_with(reader, false, AnalysisConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.process(b"fake tiff data", &mut output);

    assert!(matches!(result.unwrap_err(), AnalysisError::DecodeError(_)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let reader = MockReader { should_fail: false, mock_frame: None };
    let (pipeline, _) = pipeline_with(reader, true, AnalysisConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.process(b"fake tiff data", &mut output);

    assert!(matches!(result.unwrap_err(), AnalysisError::EncodeError(_)));
}

#[test]
fn test_dimension_validation_failure() {
    let reader = MockReader {
        should_fail: false,
        mock_frame: Some(specimen_frame(300, 40)),
    };
    let config = AnalysisConfig::builder()
        .validate_dimensions(true)
        .max_dimension(Some(256))
        .build();
    let (pipeline, _) = pipeline_with(reader, false, config);

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.process(b"fake tiff data", &mut output);

    assert!(matches!(result.unwrap_err(), AnalysisError::InvalidDimensions(300, 40)));
}

#[test]
fn test_dimension_validation_disabled() {
    let reader = MockReader {
        should_fail: false,
        mock_frame: Some(specimen_frame(300, 40)),
    };
    let config = AnalysisConfig::builder()
        .validate_dimensions(false)
        .max_dimension(Some(256))
        .build();
    let (pipeline, _) = pipeline_with(reader, false, config);

    let mut output = Cursor::new(Vec::new());
    assert!(pipeline.process(b"fake tiff data", &mut output).is_ok());
}

#[test]
fn test_preview_and_uv_rendering() {
    let config = AnalysisConfig::builder()
        .render_preview(true)
        .uv(Some(UvParameters::for_mode(UvModeType::Simulated)))
        .build();
    let pipeline = AnalysisPipeline::new(config);
    let frame = specimen_frame(80, 60);

    let report = pipeline.analyze(&frame).unwrap();
    let preview = report.segmentation.preview.expect("preview requested");
    assert_eq!(preview.pixel(40, 30), frame.pixel(40, 30));
    assert_ne!(preview.pixel(2, 2), frame.pixel(2, 2));
    assert_ne!(report.rendered, frame);
}

#[test]
fn test_timings_cover_every_stage() {
    let pipeline = AnalysisPipeline::new(AnalysisConfig::default());
    let (report, timings) = pipeline.analyze_with_timings(&specimen_frame(64, 64)).unwrap();

    for step in ["validate_dimensions", "segment", "diagnose", "render"] {
        assert!(timings.get_step(step).is_some(), "missing step {step}");
    }
    assert_eq!(timings.steps().len(), 4);
    assert!(report.segmentation.stats.components_kept >= 1);
}

#[test]
fn test_process_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("capture.tiff");
    let output = dir.path().join("display.tiff");

    let config = AnalysisConfig::builder()
        .tone(ToneParameters::builder().brightness(0.1).build())
        .compression(TiffCompression::Lzw)
        .build();
    let pipeline = AnalysisPipeline::new(config);

    let frame = specimen_frame(50, 40);
    pipeline.write_frame_file(&frame, &input).unwrap();

    let report = pipeline.process_file(&input, &output).unwrap();
    let written = TiffFrameReader.read_frame(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!(written, report.rendered);
    assert_ne!(written, frame);
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = AnalysisPipeline::new(AnalysisConfig::default());
    let result = pipeline.process_file(dir.path().join("absent.tiff"), dir.path().join("out.tiff"));
    assert!(matches!(result.unwrap_err(), AnalysisError::InputReadError(_)));
}
