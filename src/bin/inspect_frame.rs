use std::collections::HashSet;

use metalscope_rs::image_pipeline::{diagnose, FrameReader, TiffFrameReader};

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "output.tiff".to_string());
    let frame = TiffFrameReader.read_frame(&std::fs::read(&path)?)?;

    println!("Frame: {}x{} pixels", frame.width(), frame.height());

    let total_pixels = frame.pixel_count() as f64;
    for (channel, name) in ["Red", "Green", "Blue"].iter().enumerate() {
        let values: Vec<u8> = frame.pixels().map(|px| px[channel]).collect();
        let unique: HashSet<u8> = values.iter().copied().collect();
        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0);
        let at_black = values.iter().filter(|&&v| v == 0).count();
        let at_white = values.iter().filter(|&&v| v == u8::MAX).count();

        println!("\n{} channel:", name);
        println!("  Range: {} - {} (span: {})", min, max, max - min);
        println!("  Unique values: {}", unique.len());
        println!("  Effective bits: {:.2}", (unique.len() as f64).log2());
        println!(
            "  At 0: {} pixels ({:.2}%), at 255: {} pixels ({:.2}%)",
            at_black,
            at_black as f64 / total_pixels * 100.0,
            at_white,
            at_white as f64 / total_pixels * 100.0
        );
    }

    let diagnostics = diagnose(&frame);
    println!("\nDiagnostics:");
    println!("  Focus score: {:.4}", diagnostics.focus_score);
    println!("  Clipped (luma < 5 or > 250): {:.2}%", diagnostics.saturation_clipping_fraction * 100.0);
    println!("  Foreground (luma > 5): {:.2}%", diagnostics.foreground_fraction * 100.0);

    Ok(())
}
