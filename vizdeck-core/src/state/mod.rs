pub mod audio;
pub mod brightness;
pub mod effect;
pub mod metrics;
pub mod mode;
pub mod quick;

pub use audio::{AudioLevels, AUDIO_LEVEL_MAX, DEFAULT_AUDIO_BARS};
pub use brightness::{Brightness, BrightnessPreset, BRIGHTNESS_MAX};
pub use effect::{EffectKind, EffectParams};
pub use metrics::{Metric, MetricKind, Metrics};
pub use mode::{Mode, ModeColor};
pub use quick::{QuickActionKind, QuickState, QuickStates};

use std::time::{Duration, Instant};

use crate::config::Defaults;

/// How long a status message stays in the footer
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// Transient footer message
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub posted: Instant,
}

/// Top-level application state, owned by main.rs and passed to panes by reference.
///
/// Nothing here outlives the process; every field is rebuilt on start.
#[derive(Debug, Clone)]
pub struct AppState {
    pub brightness: Brightness,
    pub active_mode: Mode,
    /// Gates the simulation timer
    pub live: bool,
    pub quick: QuickStates,
    pub metrics: Metrics,
    pub effects: EffectParams,
    pub audio: AudioLevels,
    /// Number of simulation ticks applied so far
    pub ticks: u64,
    pub status: Option<StatusMessage>,
}

impl AppState {
    pub fn new() -> Self {
        Self::new_with_defaults(&Defaults::default())
    }

    pub fn new_with_defaults(defaults: &Defaults) -> Self {
        Self {
            brightness: Brightness::new(defaults.brightness),
            active_mode: defaults.mode,
            live: defaults.live_on_start,
            quick: QuickStates::default(),
            metrics: Metrics::default(),
            effects: EffectParams::default(),
            audio: AudioLevels::new(defaults.audio_bars),
            ticks: 0,
            status: None,
        }
    }

    pub fn post_status(&mut self, text: impl Into<String>, now: Instant) {
        self.status = Some(StatusMessage { text: text.into(), posted: now });
    }

    /// Drop the status message once it has been visible for `STATUS_TIMEOUT`
    pub fn expire_status(&mut self, now: Instant) {
        if let Some(status) = &self.status {
            if now.duration_since(status.posted) >= STATUS_TIMEOUT {
                self.status = None;
            }
        }
    }

    /// Footer connection label; live mode doubles as the "connected" indicator
    pub fn connection_label(&self) -> &'static str {
        if self.live { "Connected" } else { "Disconnected" }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
