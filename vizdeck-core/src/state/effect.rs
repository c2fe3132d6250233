/// Named effect parameters exposed as sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Speed,
    Scale,
    Rotation,
    Blur,
    Saturation,
    Contrast,
}

impl EffectKind {
    pub const ALL: [EffectKind; 6] = [
        EffectKind::Speed,
        EffectKind::Scale,
        EffectKind::Rotation,
        EffectKind::Blur,
        EffectKind::Saturation,
        EffectKind::Contrast,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Speed => "Speed",
            EffectKind::Scale => "Scale",
            EffectKind::Rotation => "Rotation",
            EffectKind::Blur => "Blur",
            EffectKind::Saturation => "Saturation",
            EffectKind::Contrast => "Contrast",
        }
    }

    pub fn range(self) -> (f32, f32) {
        match self {
            EffectKind::Rotation => (-360.0, 360.0),
            _ => (0.0, 200.0),
        }
    }

    pub fn default_value(self) -> f32 {
        match self {
            EffectKind::Rotation | EffectKind::Blur => 0.0,
            _ => 100.0,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            EffectKind::Rotation => "°",
            _ => "%",
        }
    }

    pub fn index(self) -> usize {
        match self {
            EffectKind::Speed => 0,
            EffectKind::Scale => 1,
            EffectKind::Rotation => 2,
            EffectKind::Blur => 3,
            EffectKind::Saturation => 4,
            EffectKind::Contrast => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EffectParams {
    values: [f32; 6],
}

impl EffectParams {
    pub fn get(&self, kind: EffectKind) -> f32 {
        self.values[kind.index()]
    }

    /// Overwrite one parameter, clamped to its declared range.
    pub fn set(&mut self, kind: EffectKind, value: f32) {
        let (min, max) = kind.range();
        self.values[kind.index()] = value.clamp(min, max);
    }

    pub fn nudge(&mut self, kind: EffectKind, delta: f32) {
        self.set(kind, self.get(kind) + delta);
    }

    pub fn reset(&mut self, kind: EffectKind) {
        self.set(kind, kind.default_value());
    }

    pub fn iter(&self) -> impl Iterator<Item = (EffectKind, f32)> + '_ {
        EffectKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

impl Default for EffectParams {
    fn default() -> Self {
        let mut values = [0.0; 6];
        for kind in EffectKind::ALL {
            values[kind.index()] = kind.default_value();
        }
        Self { values }
    }
}
