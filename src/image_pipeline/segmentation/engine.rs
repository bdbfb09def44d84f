use tracing::debug;
use crate::image_pipeline::frame::Frame;
use crate::image_pipeline::luminance::{self, GradientMap, LuminanceMap};
use crate::image_pipeline::segmentation::components::connected_components;
use crate::image_pipeline::segmentation::preview::render_preview;
use crate::image_pipeline::segmentation::types::{
    MaskPixel, SampleMaskGrid, Segmentation, SegmentationOptions, SegmentationStats,
};

/// Weight of inverted luminance in the composite index.
const DARKNESS_WEIGHT: f64 = 0.6;
/// Weight of gradient magnitude in the composite index.
const TEXTURE_WEIGHT: f64 = 0.4;

/// Standard deviations above the mean at which the threshold sits.
pub const THRESHOLD_STDDEV_FACTOR: f64 = 0.3;
pub const THRESHOLD_MIN: f64 = 20.0;
pub const THRESHOLD_MAX: f64 = 240.0;

/// Smallest component ever kept, regardless of resolution.
pub const MIN_COMPONENT_PIXELS: usize = 80;
/// One extra pixel of noise floor per this many frame pixels.
pub const COMPONENT_AREA_DIVISOR: usize = 30_000;

/// Below this max-min spread the composite index carries no separating information.
const FLAT_RANGE: f64 = 1e-9;

/// `0.6 * (255 - L) + 0.4 * |grad|`: darker and more textured pixels score higher.
#[inline]
pub fn composite_index(gray: u8, gradient_magnitude: f64) -> f64 {
    DARKNESS_WEIGHT * (255.0 - gray as f64) + TEXTURE_WEIGHT * gradient_magnitude
}

/// `clamp(mean + 0.3 * stddev, 20, 240)`.
pub fn adaptive_threshold(mean: f64, stddev: f64) -> f64 {
    (mean + THRESHOLD_STDDEV_FACTOR * stddev).clamp(THRESHOLD_MIN, THRESHOLD_MAX)
}

/// Resolution-adaptive noise floor `max(80, W*H / 30000)`.
pub fn min_component_size(width: usize, height: usize) -> usize {
    MIN_COMPONENT_PIXELS.max(width * height / COMPONENT_AREA_DIVISOR)
}

/// Segments `frame` without a preview.
pub fn segment(frame: &Frame) -> Segmentation {
    segment_with(frame, &SegmentationOptions::default())
}

/// Separates sample from background.
///
/// Interior pixels whose composite index reaches the adaptive threshold become
/// candidates; 8-connected candidate regions smaller than
/// [`min_component_size`] are discarded and the rest are emitted as sample
/// pixels. Border pixels never become candidates. Frames with no interior
/// pixels, or whose composite index is flat (uniform colour), yield an
/// all-background mask.
pub fn segment_with(frame: &Frame, options: &SegmentationOptions) -> Segmentation {
    let (width, height) = (frame.width(), frame.height());
    let (lum, grad) = luminance::extract(frame);

    let mut mask = SampleMaskGrid::empty(width, height);
    let mut stats = SegmentationStats {
        min_component_size: min_component_size(width, height),
        ..SegmentationStats::default()
    };

    let Some(InteriorScores { scores, threshold, range }) = score_interior(&lum, &grad) else {
        debug!(width, height, "frame has no interior pixels, mask left empty");
        return Segmentation {
            preview: options.render_preview.then(|| frame.clone()),
            mask,
            threshold: None,
            stats,
        };
    };

    if range <= FLAT_RANGE {
        debug!(width, height, threshold, "flat composite index, mask left empty");
        return Segmentation {
            preview: options.render_preview.then(|| render_preview(frame, &mask, options.tint)),
            mask,
            threshold: Some(threshold),
            stats,
        };
    }

    let candidates: Vec<bool> = scores
        .iter()
        .map(|score| score.is_some_and(|s| s >= threshold))
        .collect();
    stats.candidate_pixels = candidates.iter().filter(|&&c| c).count();

    let components = connected_components(&candidates, width, height);
    stats.components_found = components.len();

    for component in components.iter().filter(|c| c.len() >= stats.min_component_size) {
        stats.components_kept += 1;
        stats.kept_pixels += component.len();
        for &index in component {
            let (x, y) = (index % width, index / width);
            mask.set(index, MaskPixel::kept(lum.get(x, y), grad.magnitude(x, y)));
        }
    }

    debug!(
        width,
        height,
        threshold,
        candidates = stats.candidate_pixels,
        components = stats.components_found,
        kept = stats.components_kept,
        min_size = stats.min_component_size,
        "segmentation complete"
    );

    let preview = options
        .render_preview
        .then(|| render_preview(frame, &mask, options.tint));

    Segmentation {
        mask,
        preview,
        threshold: Some(threshold),
        stats,
    }
}

struct InteriorScores {
    /// Composite index per pixel, `None` on the border.
    scores: Vec<Option<f64>>,
    threshold: f64,
    /// Max minus min composite index over the interior.
    range: f64,
}

/// Scores every interior pixel and derives the threshold from the mean and
/// standard deviation of the scores. `None` when the frame has no interior.
fn score_interior(lum: &LuminanceMap, grad: &GradientMap) -> Option<InteriorScores> {
    let (width, height) = (lum.width(), lum.height());
    let mut scores = vec![None; width * height];
    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    let mut count = 0usize;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for (x, y) in luminance::interior(width, height) {
        let idx = composite_index(lum.get(x, y), grad.magnitude(x, y) as f64);
        scores[y * width + x] = Some(idx);
        sum += idx;
        sum_sq += idx * idx;
        count += 1;
        min = min.min(idx);
        max = max.max(idx);
    }

    if count == 0 {
        return None;
    }

    let n = count as f64;
    let mean = sum / n;
    let stddev = (sum_sq / n - mean * mean).max(0.0).sqrt();
    Some(InteriorScores {
        scores,
        threshold: adaptive_threshold(mean, stddev),
        range: max - min,
    })
}
