/// Cosmetic state switches. Toggling one never touches the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickState {
    Recording,
    Streaming,
    Preview,
}

impl QuickState {
    pub const ALL: [QuickState; 3] = [
        QuickState::Recording,
        QuickState::Streaming,
        QuickState::Preview,
    ];

    pub fn name(self) -> &'static str {
        match self {
            QuickState::Recording => "Recording",
            QuickState::Streaming => "Streaming",
            QuickState::Preview => "Preview",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStates {
    pub recording: bool,
    pub streaming: bool,
    pub preview: bool,
}

impl QuickStates {
    pub fn get(&self, which: QuickState) -> bool {
        match which {
            QuickState::Recording => self.recording,
            QuickState::Streaming => self.streaming,
            QuickState::Preview => self.preview,
        }
    }

    pub fn toggle(&mut self, which: QuickState) {
        let flag = match which {
            QuickState::Recording => &mut self.recording,
            QuickState::Streaming => &mut self.streaming,
            QuickState::Preview => &mut self.preview,
        };
        *flag = !*flag;
    }
}

impl Default for QuickStates {
    fn default() -> Self {
        Self {
            recording: false,
            streaming: false,
            preview: true,
        }
    }
}

/// Buttons in the quick actions row. None of them is wired to anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickActionKind {
    Reset,
    Fullscreen,
    Export,
    Settings,
}

impl QuickActionKind {
    pub const ALL: [QuickActionKind; 4] = [
        QuickActionKind::Reset,
        QuickActionKind::Fullscreen,
        QuickActionKind::Export,
        QuickActionKind::Settings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            QuickActionKind::Reset => "Reset",
            QuickActionKind::Fullscreen => "Fullscreen",
            QuickActionKind::Export => "Export",
            QuickActionKind::Settings => "Settings",
        }
    }
}
