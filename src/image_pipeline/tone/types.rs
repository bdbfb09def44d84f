//! Tone parameters and presets

pub const BRIGHTNESS_RANGE: (f32, f32) = (-1.0, 1.0);
pub const CONTRAST_RANGE: (f32, f32) = (-1.0, 1.0);
pub const GAMMA_RANGE: (f32, f32) = (0.1, 3.0);
pub const SATURATION_RANGE: (f32, f32) = (-1.0, 1.0);

/// Two parameter values closer than this are considered equal when matching presets.
const PRESET_TOLERANCE: f32 = 1e-3;

/// Named tone settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TonePreset {
    #[default]
    Standard,
    HighBrightness,
    LowNoise,
    HighContrast,
    UvMode,
    /// User-adjusted values that match no named preset.
    Custom,
}

impl TonePreset {
    /// Every preset with a fixed parameter tuple.
    pub const NAMED: [TonePreset; 5] = [
        TonePreset::Standard,
        TonePreset::HighBrightness,
        TonePreset::LowNoise,
        TonePreset::HighContrast,
        TonePreset::UvMode,
    ];

    /// `(brightness, contrast, gamma, saturation)`, or `None` for `Custom`.
    pub fn values(self) -> Option<(f32, f32, f32, f32)> {
        match self {
            TonePreset::Standard => Some((0.0, 0.0, 1.0, 0.0)),
            TonePreset::HighBrightness => Some((0.25, 0.1, 1.2, 0.0)),
            TonePreset::LowNoise => Some((0.0, -0.15, 0.9, -0.2)),
            TonePreset::HighContrast => Some((0.0, 0.4, 1.0, 0.1)),
            TonePreset::UvMode => Some((-0.1, 0.3, 0.8, 0.3)),
            TonePreset::Custom => None,
        }
    }

    /// The first named preset whose tuple equals `params`, otherwise `Custom`.
    pub fn matching(params: &ToneParameters) -> TonePreset {
        Self::NAMED
            .into_iter()
            .find(|preset| params.matches(*preset))
            .unwrap_or(TonePreset::Custom)
    }
}

/// Brightness, contrast, gamma and saturation plus the preset they came from.
///
/// Values are clamped to their documented ranges on every write. Changing any
/// value away from the active preset's tuple switches the tag to `Custom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParameters {
    brightness: f32,
    contrast: f32,
    gamma: f32,
    saturation: f32,
    preset: TonePreset,
}

impl Default for ToneParameters {
    fn default() -> Self {
        Self::from_preset(TonePreset::Standard)
    }
}

impl ToneParameters {
    /// Clamps the values and tags them with whichever preset they match.
    pub fn new(brightness: f32, contrast: f32, gamma: f32, saturation: f32) -> Self {
        let mut params = Self {
            brightness: clamp(brightness, BRIGHTNESS_RANGE),
            contrast: clamp(contrast, CONTRAST_RANGE),
            gamma: clamp(gamma, GAMMA_RANGE),
            saturation: clamp(saturation, SATURATION_RANGE),
            preset: TonePreset::Custom,
        };
        params.preset = TonePreset::matching(&params);
        params
    }

    /// Preset tuple; `Custom` yields the standard values tagged `Custom`.
    pub fn from_preset(preset: TonePreset) -> Self {
        let mut params = Self {
            brightness: 0.0,
            contrast: 0.0,
            gamma: 1.0,
            saturation: 0.0,
            preset,
        };
        params.apply_preset(preset);
        params
    }

    pub fn builder() -> ToneParametersBuilder {
        ToneParametersBuilder::default()
    }

    /// Loads the preset tuple. `Custom` keeps the current values.
    pub fn apply_preset(&mut self, preset: TonePreset) {
        if let Some((b, c, g, s)) = preset.values() {
            self.brightness = b;
            self.contrast = c;
            self.gamma = g;
            self.saturation = s;
        }
        self.preset = preset;
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn contrast(&self) -> f32 {
        self.contrast
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn preset(&self) -> TonePreset {
        self.preset
    }

    pub fn set_brightness(&mut self, value: f32) {
        self.brightness = clamp(value, BRIGHTNESS_RANGE);
        self.detach_from_preset();
    }

    pub fn set_contrast(&mut self, value: f32) {
        self.contrast = clamp(value, CONTRAST_RANGE);
        self.detach_from_preset();
    }

    pub fn set_gamma(&mut self, value: f32) {
        self.gamma = clamp(value, GAMMA_RANGE);
        self.detach_from_preset();
    }

    pub fn set_saturation(&mut self, value: f32) {
        self.saturation = clamp(value, SATURATION_RANGE);
        self.detach_from_preset();
    }

    fn matches(&self, preset: TonePreset) -> bool {
        preset.values().is_some_and(|(b, c, g, s)| {
            close(self.brightness, b)
                && close(self.contrast, c)
                && close(self.gamma, g)
                && close(self.saturation, s)
        })
    }

    fn detach_from_preset(&mut self) {
        if !self.matches(self.preset) {
            self.preset = TonePreset::Custom;
        }
    }
}

/// Builder for ToneParameters
///
/// Starts from the chosen preset (Standard by default) and overrides single
/// values. Overrides that leave the preset tuple produce a `Custom` tag.
#[derive(Default)]
pub struct ToneParametersBuilder {
    preset: Option<TonePreset>,
    brightness: Option<f32>,
    contrast: Option<f32>,
    gamma: Option<f32>,
    saturation: Option<f32>,
}

impl ToneParametersBuilder {
    pub fn preset(mut self, preset: TonePreset) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn brightness(mut self, value: f32) -> Self {
        self.brightness = Some(value);
        self
    }

    pub fn contrast(mut self, value: f32) -> Self {
        self.contrast = Some(value);
        self
    }

    pub fn gamma(mut self, value: f32) -> Self {
        self.gamma = Some(value);
        self
    }

    pub fn saturation(mut self, value: f32) -> Self {
        self.saturation = Some(value);
        self
    }

    pub fn build(self) -> ToneParameters {
        let mut params = ToneParameters::from_preset(self.preset.unwrap_or_default());
        if let Some(v) = self.brightness {
            params.set_brightness(v);
        }
        if let Some(v) = self.contrast {
            params.set_contrast(v);
        }
        if let Some(v) = self.gamma {
            params.set_gamma(v);
        }
        if let Some(v) = self.saturation {
            params.set_saturation(v);
        }
        params
    }
}

#[inline]
pub(crate) fn clamp(value: f32, (min, max): (f32, f32)) -> f32 {
    if value.is_nan() { min } else { value.clamp(min, max) }
}

#[inline]
fn close(a: f32, b: f32) -> bool {
    (a - b).abs() <= PRESET_TOLERANCE
}
