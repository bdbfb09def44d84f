//! Types produced by sample mask segmentation

use crate::image_pipeline::frame::Frame;

/// Per-pixel record for a pixel the mask engine kept.
///
/// Only pixels belonging to a surviving connected component carry a record.
/// `is_border` is never set and `mask_confidence` is always `1.0`; the fields
/// exist for the classifiers that consume the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskPixel {
    pub is_sample: bool,
    pub is_background: bool,
    pub is_border: bool,
    /// Confidence in `[0, 1]`.
    pub mask_confidence: f32,
    /// Luminance of the source pixel.
    pub gray_value: u8,
    pub gradient_magnitude: f32,
}

impl MaskPixel {
    pub(crate) fn kept(gray_value: u8, gradient_magnitude: f32) -> Self {
        Self {
            is_sample: true,
            is_background: false,
            is_border: false,
            mask_confidence: 1.0,
            gray_value,
            gradient_magnitude,
        }
    }
}

/// Width x height grid of optional mask records.
///
/// An absent record means background or unknown; nothing outside the kept
/// components is ever written.
#[derive(Debug, Clone)]
pub struct SampleMaskGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<MaskPixel>>,
}

impl SampleMaskGrid {
    pub(crate) fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub(crate) fn set(&mut self, index: usize, pixel: MaskPixel) {
        self.cells[index] = Some(pixel);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&MaskPixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y * self.width + x].as_ref()
    }

    pub fn is_sample(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(|p| p.is_sample)
    }

    pub fn sample_count(&self) -> usize {
        self.cells.iter().flatten().filter(|p| p.is_sample).count()
    }

    /// Share of all pixels marked as sample, `0.0` for an empty grid.
    pub fn sample_fraction(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.sample_count() as f64 / self.cells.len() as f64
    }

    /// Iterates `(x, y, record)` for every pixel that carries a record.
    pub fn iter_samples(&self) -> impl Iterator<Item = (usize, usize, &MaskPixel)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.as_ref().map(|p| (i % width, i / width, p)))
    }
}

/// Counters describing one segmentation run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SegmentationStats {
    pub candidate_pixels: usize,
    pub components_found: usize,
    pub components_kept: usize,
    pub min_component_size: usize,
    pub kept_pixels: usize,
}

/// Output of [`segment`](super::segment).
#[derive(Debug, Clone)]
pub struct Segmentation {
    pub mask: SampleMaskGrid,
    /// Visualization frame, present only when requested.
    pub preview: Option<Frame>,
    /// Composite index threshold used; `None` for frames without interior pixels.
    pub threshold: Option<f64>,
    pub stats: SegmentationStats,
}

/// Controls the optional preview side product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentationOptions {
    pub render_preview: bool,
    /// Colour blended over pixels that were not kept.
    pub tint: [u8; 3],
}

impl Default for SegmentationOptions {
    fn default() -> Self {
        Self {
            render_preview: false,
            tint: [40, 40, 48],
        }
    }
}
