use crate::image_pipeline::common::clamp_to_u8;
use crate::image_pipeline::frame::Frame;
use crate::image_pipeline::segmentation::types::SampleMaskGrid;

/// Opacity of the tint laid over pixels outside the mask.
pub const PREVIEW_TINT_ALPHA: f32 = 0.65;

/// Kept pixels pass through unchanged; everything else is blended towards `tint`.
pub(crate) fn render_preview(frame: &Frame, mask: &SampleMaskGrid, tint: [u8; 3]) -> Frame {
    let width = frame.width();
    let mut index = 0usize;
    frame.map_pixels(|px| {
        let (x, y) = (index % width, index / width);
        index += 1;
        if mask.is_sample(x, y) {
            return px;
        }
        let mut out = [0u8; 3];
        for c in 0..3 {
            let blended = px[c] as f32 * (1.0 - PREVIEW_TINT_ALPHA) + tint[c] as f32 * PREVIEW_TINT_ALPHA;
            out[c] = clamp_to_u8(blended.round());
        }
        out
    })
}
