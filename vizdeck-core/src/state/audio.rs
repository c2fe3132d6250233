use rand::Rng;

pub const DEFAULT_AUDIO_BARS: usize = 24;
pub const AUDIO_LEVEL_MAX: f32 = 100.0;

/// Fake spectrum magnitudes driving the bar visualization.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioLevels {
    bars: Vec<f32>,
}

impl AudioLevels {
    pub fn new(bar_count: usize) -> Self {
        Self { bars: vec![0.0; bar_count] }
    }

    pub fn bars(&self) -> &[f32] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Replace every bar with a fresh random magnitude
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for bar in &mut self.bars {
            *bar = rng.random_range(0.0..=AUDIO_LEVEL_MAX);
        }
    }
}

impl Default for AudioLevels {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIO_BARS)
    }
}
