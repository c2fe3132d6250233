pub const BRIGHTNESS_MAX: u8 = 100;

/// Fixed brightness shortcuts shown under the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessPreset {
    Min,
    Half,
    Max,
}

impl BrightnessPreset {
    pub fn value(self) -> u8 {
        match self {
            BrightnessPreset::Min => 0,
            BrightnessPreset::Half => 50,
            BrightnessPreset::Max => BRIGHTNESS_MAX,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BrightnessPreset::Min => "Min",
            BrightnessPreset::Half => "50%",
            BrightnessPreset::Max => "Max",
        }
    }
}

/// Global output intensity as a percentage, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness(u8);

impl Brightness {
    pub fn new(value: u8) -> Self {
        Self(value.min(BRIGHTNESS_MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn set(&mut self, value: u8) {
        self.0 = value.min(BRIGHTNESS_MAX);
    }

    pub fn nudge(&mut self, delta: i16) {
        let next = (self.0 as i16 + delta).clamp(0, BRIGHTNESS_MAX as i16);
        self.0 = next as u8;
    }

    pub fn apply_preset(&mut self, preset: BrightnessPreset) {
        self.0 = preset.value();
    }

    /// 0.0-1.0, used for the preview gradient opacity
    pub fn fraction(self) -> f32 {
        self.0 as f32 / BRIGHTNESS_MAX as f32
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(75)
    }
}
