/// Color tag attached to each mode card. The UI maps these onto theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeColor {
    Accent,
    Primary,
    Secondary,
    Muted,
}

/// Operating mode of the controlled tool. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Visual,
    Audio,
    Interactive,
    Generative,
}

impl Mode {
    /// Display order of the mode cards
    pub const ALL: [Mode; 4] = [Mode::Visual, Mode::Audio, Mode::Interactive, Mode::Generative];

    pub fn id(self) -> &'static str {
        match self {
            Mode::Visual => "visual",
            Mode::Audio => "audio",
            Mode::Interactive => "interactive",
            Mode::Generative => "generative",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Visual => "Visual",
            Mode::Audio => "Audio",
            Mode::Interactive => "Interactive",
            Mode::Generative => "Generative",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mode::Visual => "Visual effects and animation",
            Mode::Audio => "Audio-reactive processing",
            Mode::Interactive => "Interactive control",
            Mode::Generative => "Generative algorithms",
        }
    }

    pub fn color(self) -> ModeColor {
        match self {
            Mode::Visual => ModeColor::Accent,
            Mode::Audio => ModeColor::Primary,
            Mode::Interactive => ModeColor::Secondary,
            Mode::Generative => ModeColor::Muted,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }

    /// Position in `ALL`
    pub fn index(self) -> usize {
        match self {
            Mode::Visual => 0,
            Mode::Audio => 1,
            Mode::Interactive => 2,
            Mode::Generative => 3,
        }
    }
}
