//! Sample mask segmentation
//!
//! Adaptive composite-index thresholding followed by connected-component
//! cleanup. The result is consumed by particle and material classifiers and by
//! overlay renderers.

mod components;
mod engine;
mod preview;
pub mod types;


pub use engine::{
    adaptive_threshold, composite_index, min_component_size, segment, segment_with,
    COMPONENT_AREA_DIVISOR, MIN_COMPONENT_PIXELS, THRESHOLD_MAX, THRESHOLD_MIN,
    THRESHOLD_STDDEV_FACTOR,
};
pub use preview::PREVIEW_TINT_ALPHA;
pub use types::{MaskPixel, SampleMaskGrid, Segmentation, SegmentationOptions, SegmentationStats};
