use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use super::keymap::{KeyBinding, KeyPattern, Keymap};
use super::KeyCode;

/// Raw TOML structure for the keybindings config file
#[derive(Deserialize)]
struct KeybindingConfig {
    #[allow(dead_code)]
    version: u32,
    layers: HashMap<String, LayerConfig>,
}

#[derive(Deserialize)]
struct LayerConfig {
    #[serde(default)]
    bindings: Vec<RawBinding>,
}

/// A single binding entry from TOML
#[derive(Deserialize)]
struct RawBinding {
    key: String,
    action: String,
    description: String,
}

/// Name of the layer consulted before the active pane's keymap
pub const GLOBAL_LAYER: &str = "global";

/// Intern a String into a &'static str.
/// These are loaded once at startup and never freed.
fn intern(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

/// Parse a key notation string into a KeyPattern.
///
/// Supported formats:
/// - `"q"` → Char('q')
/// - `"Up"` → Key(KeyCode::Up)
/// - `"Ctrl+q"` → Ctrl('q')
/// - `"Alt+x"` → Alt('x')
/// - `"Ctrl+Left"` → CtrlKey(KeyCode::Left)
/// - `"Shift+Right"` → ShiftKey(KeyCode::Right)
/// - `"F1"` → Key(KeyCode::F(1))
fn parse_key(s: &str) -> Option<KeyPattern> {
    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeyPattern::Ctrl(c)),
            _ => parse_named_key(rest).map(KeyPattern::CtrlKey),
        }
    } else if let Some(rest) = s.strip_prefix("Alt+") {
        rest.chars().next().map(KeyPattern::Alt)
    } else if let Some(rest) = s.strip_prefix("Shift+") {
        parse_named_key(rest).map(KeyPattern::ShiftKey)
    } else if s.chars().count() == 1 {
        s.chars().next().map(KeyPattern::Char)
    } else if s == "Space" {
        Some(KeyPattern::Char(' '))
    } else {
        parse_named_key(s).map(KeyPattern::Key)
    }
}

/// Parse a named key string (e.g., "Up", "Enter", "F1") into a KeyCode
fn parse_named_key(s: &str) -> Option<KeyCode> {
    let key = match s {
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Backspace" => KeyCode::Backspace,
        "Tab" => KeyCode::Tab,
        "BackTab" => KeyCode::BackTab,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Insert" => KeyCode::Insert,
        "Delete" => KeyCode::Delete,
        _ => {
            let n = s.strip_prefix('F')?.parse::<u8>().ok()?;
            KeyCode::F(n)
        }
    };
    Some(key)
}

/// Embedded default keybindings TOML
const DEFAULT_KEYBINDINGS: &str = include_str!("../../keybindings.toml");

/// Load keybindings: embedded default, optionally merged with user override.
/// Returns (global keymap, pane keymaps keyed by pane id).
pub fn load_keybindings() -> (Keymap, HashMap<String, Keymap>) {
    let mut config: KeybindingConfig =
        toml::from_str(DEFAULT_KEYBINDINGS).expect("Failed to parse embedded keybindings.toml");

    if let Some(path) = user_keybindings_path() {
        if path.exists() {
            match std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|c| toml::from_str::<KeybindingConfig>(&c).map_err(|e| e.to_string()))
            {
                Ok(user_config) => {
                    log::info!("merging keybindings from {}", path.display());
                    merge_config(&mut config, user_config);
                }
                Err(e) => log::warn!("ignoring {}: {}", path.display(), e),
            }
        }
    }

    build_keymaps(config.layers)
}

fn user_keybindings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("vizdeck").join("keybindings.toml"))
}

/// Merge user config into the base config.
/// User layer entries fully replace the default layer entries.
fn merge_config(base: &mut KeybindingConfig, user: KeybindingConfig) {
    for (layer_id, layer_config) in user.layers {
        base.layers.insert(layer_id, layer_config);
    }
}

fn build_bindings(raw: Vec<RawBinding>) -> Vec<KeyBinding> {
    raw.into_iter()
        .filter_map(|b| match parse_key(&b.key) {
            Some(pattern) => Some(KeyBinding {
                pattern,
                action: intern(b.action),
                description: intern(b.description),
            }),
            None => {
                log::warn!("unknown key '{}' for action '{}'", b.key, b.action);
                None
            }
        })
        .collect()
}

fn build_keymaps(layers: HashMap<String, LayerConfig>) -> (Keymap, HashMap<String, Keymap>) {
    let mut global = Keymap::new();
    let mut panes = HashMap::new();
    for (name, config) in layers {
        let keymap = Keymap::from_bindings(build_bindings(config.bindings));
        if name == GLOBAL_LAYER {
            global = keymap;
        } else {
            panes.insert(name, keymap);
        }
    }
    (global, panes)
}
