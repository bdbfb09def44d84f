use crate::image_pipeline::tone::types::{clamp, GAMMA_RANGE};

/// Per-call gamma lookup table, `lut[i] = 255 * (i / 255)^(1 / gamma)`.
///
/// Entries are rounded to the nearest byte, so `gamma = 1.0` maps every value
/// onto itself.
#[derive(Debug, Clone)]
pub struct GammaLut {
    table: [u8; 256],
}

impl GammaLut {
    pub fn new(gamma: f32) -> Self {
        let inv_gamma = 1.0 / clamp(gamma, GAMMA_RANGE) as f64;
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let v = 255.0 * (i as f64 / 255.0).powf(inv_gamma);
            *entry = v.round().clamp(0.0, 255.0) as u8;
        }
        Self { table }
    }

    #[inline]
    pub fn map(&self, value: u8) -> u8 {
        self.table[value as usize]
    }

    pub fn is_identity(&self) -> bool {
        self.table.iter().enumerate().all(|(i, &v)| i == v as usize)
    }
}
