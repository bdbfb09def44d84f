use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use metalscope_rs::image_pipeline::{
    apply_tone, apply_uv, diagnose, segment, Frame, TonePreset, ToneParameters, UvModeType, UvParameters,
};

/// Textured light field with a scatter of dark grains.
fn generate_mock_frame(width: usize, height: usize) -> Frame {
    Frame::from_fn(width, height, |x, y| {
        let grain = (x / 24 + y / 24) % 5 == 0 && (x % 24) < 14 && (y % 24) < 14;
        if grain {
            [20, 18, 15]
        } else {
            let v = 200 + ((x * 7 + y * 13) % 40) as u8;
            [v, v, v.saturating_sub(5)]
        }
    })
    .expect("valid mock frame")
}

fn benchmark_segmentation_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_by_size");

    let sizes = vec![
        (320, 240, "320x240"),
        (1280, 960, "1280x960"),
        (2592, 1944, "2592x1944"),
    ];

    for (width, height, label) in sizes {
        let frame = generate_mock_frame(width, height);
        group.bench_with_input(BenchmarkId::from_parameter(label), &frame, |b, frame| {
            b.iter(|| segment(black_box(frame)));
        });
    }

    group.finish();
}

fn benchmark_diagnostics(c: &mut Criterion) {
    let frame = generate_mock_frame(1280, 960);
    c.bench_function("diagnose_1280x960", |b| b.iter(|| diagnose(black_box(&frame))));
}

fn benchmark_tone_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("tone_presets");
    let frame = generate_mock_frame(1280, 960);

    for preset in TonePreset::NAMED {
        let params = ToneParameters::from_preset(preset);
        group.bench_with_input(BenchmarkId::from_parameter(format!("{:?}", preset)), &params, |b, params| {
            b.iter(|| apply_tone(black_box(&frame), params));
        });
    }

    group.finish();
}

fn benchmark_uv_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("uv_modes");
    let frame = generate_mock_frame(1280, 960);

    for mode in [UvModeType::Normal, UvModeType::UvA, UvModeType::Simulated] {
        let params = UvParameters::for_mode(mode);
        group.bench_with_input(BenchmarkId::from_parameter(format!("{:?}", mode)), &params, |b, params| {
            b.iter(|| apply_uv(black_box(&frame), params));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_segmentation_sizes,
    benchmark_diagnostics,
    benchmark_tone_presets,
    benchmark_uv_modes
);
criterion_main!(benches);
