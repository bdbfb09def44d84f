use metalscope_rs::image_pipeline::{AnalysisConfig, AnalysisPipeline, TiffCompression, ToneParameters, TonePreset};
use metalscope_rs::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "input.tiff".to_string());
    let output = args.next().unwrap_or_else(|| "output.tiff".to_string());
    let preview = args.next();

    info!("Starting metalscope...");

    let config = AnalysisConfig::builder()
        .compression(TiffCompression::DeflateBalanced)
        .tone(ToneParameters::from_preset(TonePreset::Standard))
        .render_preview(preview.is_some())
        .build();
    let pipeline = AnalysisPipeline::new(config);

    info!("Analysis pipeline initialized");
    info!("Compression: {:?}", pipeline.config().compression);
    info!("Tone preset: {:?}", pipeline.config().tone.preset());

    let report = match pipeline.process_file(&input, &output) {
        Ok(report) => report,
        Err(e) => {
            error!("Analysis failed: {}", e);
            return Err(e.into());
        }
    };

    let stats = report.segmentation.stats;
    info!(
        "Mask: {} sample pixels in {} of {} components (threshold {:?})",
        stats.kept_pixels, stats.components_kept, stats.components_found, report.segmentation.threshold
    );
    info!(
        "Focus {:.3}, clipping {:.3}, foreground {:.3}",
        report.diagnostics.focus_score,
        report.diagnostics.saturation_clipping_fraction,
        report.diagnostics.foreground_fraction
    );

    if let (Some(path), Some(frame)) = (preview, report.segmentation.preview.as_ref()) {
        pipeline.write_frame_file(frame, &path)?;
        info!("Mask preview written to {}", path);
    }

    Ok(())
}
