use std::time::Instant;

use crate::action::DashboardAction;
use crate::simulation::SimClock;
use crate::state::AppState;

pub(super) fn dispatch_dashboard(
    action: &DashboardAction,
    state: &mut AppState,
    clock: &mut SimClock,
    now: Instant,
) {
    match *action {
        DashboardAction::SelectMode(mode) => {
            if state.active_mode != mode {
                log::info!("mode: {} -> {}", state.active_mode.id(), mode.id());
            }
            state.active_mode = mode;
        }
        DashboardAction::SetBrightness(value) => state.brightness.set(value),
        DashboardAction::NudgeBrightness(delta) => state.brightness.nudge(delta),
        DashboardAction::BrightnessPreset(preset) => state.brightness.apply_preset(preset),
        DashboardAction::ToggleLive => set_live(state, clock, !state.live, now),
        DashboardAction::SetLive(live) => set_live(state, clock, live, now),
        DashboardAction::ToggleQuick(which) => {
            state.quick.toggle(which);
            log::debug!("{}: {}", which.name(), state.quick.get(which));
        }
        DashboardAction::SetEffect(kind, value) => state.effects.set(kind, value),
        DashboardAction::NudgeEffect(kind, delta) => state.effects.nudge(kind, delta),
        DashboardAction::ResetEffect(kind) => state.effects.reset(kind),
        DashboardAction::QuickAction(kind) => {
            log::info!("quick action '{}' has no runtime attached", kind.name());
            state.post_status(format!("{}: no runtime attached", kind.name()), now);
        }
    }
}

fn set_live(state: &mut AppState, clock: &mut SimClock, live: bool, now: Instant) {
    if state.live != live {
        log::info!("live mode {}", if live { "on" } else { "off" });
    }
    state.live = live;
    clock.sync(live, now);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::action::Action;
    use crate::dispatch::dispatch_action;
    use crate::state::{BrightnessPreset, EffectKind, Mode, QuickActionKind, QuickState};

    fn run(state: &mut AppState, clock: &mut SimClock, action: DashboardAction) {
        dispatch_action(&Action::Dashboard(action), state, clock, Instant::now());
    }

    fn fixture() -> (AppState, SimClock) {
        let mut clock = SimClock::new(Duration::from_millis(100));
        clock.arm(Instant::now());
        (AppState::new(), clock)
    }

    #[test]
    fn select_mode_sets_exactly_that_mode() {
        let (mut state, mut clock) = fixture();
        for mode in Mode::ALL {
            run(&mut state, &mut clock, DashboardAction::SelectMode(mode));
            assert_eq!(state.active_mode, mode);
        }
    }

    #[test]
    fn brightness_presets_are_exact() {
        let (mut state, mut clock) = fixture();
        for (preset, expected) in [
            (BrightnessPreset::Min, 0),
            (BrightnessPreset::Half, 50),
            (BrightnessPreset::Max, 100),
        ] {
            run(&mut state, &mut clock, DashboardAction::BrightnessPreset(preset));
            assert_eq!(state.brightness.get(), expected);
        }
        run(&mut state, &mut clock, DashboardAction::SetBrightness(33));
        assert_eq!(state.brightness.get(), 33);
    }

    #[test]
    fn toggle_live_disarms_and_rearms_clock() {
        let (mut state, mut clock) = fixture();
        run(&mut state, &mut clock, DashboardAction::ToggleLive);
        assert!(!state.live);
        assert!(!clock.is_armed());
        run(&mut state, &mut clock, DashboardAction::ToggleLive);
        assert!(state.live);
        assert!(clock.is_armed());
    }

    #[test]
    fn quick_toggle_leaves_others_alone() {
        let (mut state, mut clock) = fixture();
        let before = state.quick;
        run(&mut state, &mut clock, DashboardAction::ToggleQuick(QuickState::Recording));
        assert!(state.quick.recording);
        assert_eq!(state.quick.streaming, before.streaming);
        assert_eq!(state.quick.preview, before.preview);
    }

    #[test]
    fn effect_changes_only_that_parameter() {
        let (mut state, mut clock) = fixture();
        let before = state.effects.clone();
        run(&mut state, &mut clock, DashboardAction::NudgeEffect(EffectKind::Rotation, -400.0));
        assert_eq!(state.effects.get(EffectKind::Rotation), -360.0);
        for kind in EffectKind::ALL {
            if kind != EffectKind::Rotation {
                assert_eq!(state.effects.get(kind), before.get(kind));
            }
        }
    }

    #[test]
    fn quick_action_only_posts_status() {
        let (mut state, mut clock) = fixture();
        let before = state.clone();
        run(&mut state, &mut clock, DashboardAction::QuickAction(QuickActionKind::Export));
        let status = state.status.as_ref().map(|s| s.text.clone()).unwrap_or_default();
        assert!(status.starts_with("Export"));
        assert_eq!(state.brightness, before.brightness);
        assert_eq!(state.active_mode, before.active_mode);
        assert_eq!(state.quick, before.quick);
        assert_eq!(state.effects, before.effects);
        assert_eq!(state.live, before.live);
    }

    #[test]
    fn quit_sets_flag() {
        let (mut state, mut clock) = fixture();
        let result = dispatch_action(&Action::Quit, &mut state, &mut clock, Instant::now());
        assert!(result.quit);
    }
}
