use crate::state::{BrightnessPreset, EffectKind, Mode, QuickActionKind, QuickState};

/// Direct user mutations of dashboard state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardAction {
    SelectMode(Mode),
    SetBrightness(u8),
    NudgeBrightness(i16),
    BrightnessPreset(BrightnessPreset),
    ToggleLive,
    SetLive(bool),
    ToggleQuick(QuickState),
    SetEffect(EffectKind, f32),
    NudgeEffect(EffectKind, f32),
    ResetEffect(EffectKind),
    /// Placeholder buttons; these only post a status message
    QuickAction(QuickActionKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    SwitchPane(&'static str),
    NextPane,
    PrevPane,
    /// Return to the pane shown before the current one
    Back,
}

/// Actions represent user intentions that modify state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    None,
    Quit,
    Nav(NavAction),
    Dashboard(DashboardAction),
}

/// Result of dispatching an action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchResult {
    pub quit: bool,
}

impl DispatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_quit() -> Self {
        Self { quit: true }
    }
}
