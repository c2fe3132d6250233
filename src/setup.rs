use std::fs::{self, File};

use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::Config;
use crate::panes::{ControlPane, EffectsPane, HelpPane, TelemetryPane};
use crate::state::AppState;
use crate::ui::{keybindings, Keymap, PaneManager};

/// Route `log` output to a file; the terminal belongs to the UI.
/// If the file cannot be opened logging stays disabled.
pub fn init_logging(config: &Config) {
    let path = config.log_path();
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    let Ok(file) = File::create(&path) else {
        return;
    };
    let log_config = ConfigBuilder::new()
        .set_target_level(log::LevelFilter::Error)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if WriteLogger::init(config.log_level, log_config, file).is_ok() {
        log::debug!("logging to {}", path.display());
    }
}

fn pane_keymap(keymaps: &mut std::collections::HashMap<String, Keymap>, id: &str) -> Keymap {
    keymaps.remove(id).unwrap_or_else(Keymap::new)
}

/// Load keybindings and build every pane. Returns the global keymap alongside.
pub fn build_panes(state: &AppState) -> (Keymap, PaneManager) {
    let (global, mut keymaps) = keybindings::load_keybindings();

    let mut control = ControlPane::new(pane_keymap(&mut keymaps, "control"));
    control.focus_mode(state.active_mode);

    let mut panes = PaneManager::new(Box::new(control));
    panes.add_pane(Box::new(EffectsPane::new(pane_keymap(&mut keymaps, "effects"))));
    panes.add_pane(Box::new(TelemetryPane::new(pane_keymap(&mut keymaps, "telemetry"))));
    panes.add_pane(Box::new(HelpPane::new(pane_keymap(&mut keymaps, "help"), &global)));

    (global, panes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_panes_starts_on_control() {
        let state = AppState::new();
        let (global, panes) = build_panes(&state);
        assert_eq!(panes.active().id(), "control");
        let ids: Vec<_> = panes.tabs().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["control", "effects", "telemetry"]);
        assert!(!global.bindings().is_empty());
    }

    #[test]
    fn logging_writes_to_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("vizdeck.log");
        let mut config = Config::embedded();
        config.log_file = Some(path.clone());
        config.log_level = log::LevelFilter::Info;

        init_logging(&config);
        log::info!("logging-marker");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("logging-marker"));
    }
}
