use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    analysis::{AnalysisConfig, AnalysisReport, PipelineTimings},
    common::error::{AnalysisError, Result},
    diagnostics::diagnose,
    frame::{Frame, FrameReader, FrameWriter, TiffFrameReader, TiffFrameWriter},
    segmentation::{segment_with, SegmentationOptions},
    tone::{apply_tone, apply_uv},
};

/// Runs segmentation, diagnostics and the display transform over frames.
///
/// The pipeline holds only configuration and the reader/writer seams; every
/// call works on its own buffers, so one instance can serve several threads.
pub struct AnalysisPipeline<R: FrameReader, W: FrameWriter> {
    reader: R,
    writer: W,
    config: AnalysisConfig,
}

impl AnalysisPipeline<TiffFrameReader, TiffFrameWriter> {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            reader: TiffFrameReader,
            writer: TiffFrameWriter,
            config,
        }
    }
}

impl<R: FrameReader, W: FrameWriter> AnalysisPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: AnalysisConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, frame: &Frame) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        let (width, height) = (frame.width(), frame.height());
        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Frame dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(AnalysisError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    fn segmentation_options(&self) -> SegmentationOptions {
        SegmentationOptions {
            render_preview: self.config.render_preview,
            ..SegmentationOptions::default()
        }
    }

    /// Tone transform followed by the UV simulation when one is configured.
    pub fn render(&self, frame: &Frame) -> Frame {
        let toned = apply_tone(frame, &self.config.tone);
        match &self.config.uv {
            Some(uv) => apply_uv(&toned, uv),
            None => toned,
        }
    }

    #[instrument(skip(self, frame), fields(width = frame.width(), height = frame.height()))]
    pub fn analyze(&self, frame: &Frame) -> Result<AnalysisReport> {
        self.validate_dimensions(frame)?;

        let segmentation = {
            let _span = tracing::info_span!("segment").entered();
            segment_with(frame, &self.segmentation_options())
        };

        let diagnostics = {
            let _span = tracing::info_span!("diagnose").entered();
            diagnose(frame)
        };

        let rendered = {
            let _span = tracing::info_span!("render").entered();
            self.render(frame)
        };

        info!(
            sample_pixels = segmentation.stats.kept_pixels,
            focus = diagnostics.focus_score,
            clipping = diagnostics.saturation_clipping_fraction,
            foreground = diagnostics.foreground_fraction,
            "Analysis complete"
        );

        Ok(AnalysisReport {
            width: frame.width(),
            height: frame.height(),
            segmentation,
            diagnostics,
            rendered,
        })
    }

    pub fn analyze_with_timings(&self, frame: &Frame) -> Result<(AnalysisReport, PipelineTimings)> {
        let mut timings = PipelineTimings::new();

        timings.measure("validate_dimensions", || self.validate_dimensions(frame))?;
        let options = self.segmentation_options();
        let segmentation = timings.measure("segment", || segment_with(frame, &options));
        let diagnostics = timings.measure("diagnose", || diagnose(frame));
        let rendered = timings.measure("render", || self.render(frame));

        info!(width = frame.width(), height = frame.height(), "Analysis complete");
        timings.log_summary(frame.pixel_count());

        let report = AnalysisReport {
            width: frame.width(),
            height: frame.height(),
            segmentation,
            diagnostics,
            rendered,
        };
        Ok((report, timings))
    }

    /// Decodes `input_data`, analyzes it and writes the rendered frame to `output`.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn process(&self, input_data: &[u8], output: &mut dyn Write) -> Result<AnalysisReport> {
        let frame = {
            let _span = tracing::info_span!("decode_frame").entered();
            self.reader.read_frame(input_data)?
        };

        let report = self.analyze(&frame)?;

        {
            let _span = tracing::info_span!("encode_frame").entered();
            self.writer.write_frame(&report.rendered, output, &self.config)?;
        }

        Ok(report)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<AnalysisReport> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Analyzing file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                AnalysisError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                AnalysisError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.process(&input_data, &mut output_file)
    }

    /// Writes any frame (for example the mask preview) with the configured writer.
    pub fn write_frame_file<P: AsRef<Path>>(&self, frame: &Frame, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = std::fs::File::create(path).map_err(|e| {
            AnalysisError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;
        self.writer.write_frame(frame, &mut file, &self.config)
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }
}
