mod backend;
mod frame;
pub mod input;
pub mod keybindings;
pub mod keymap;
pub mod layout_helpers;
mod pane;
mod rat_compat;
mod style;
pub mod theme;
pub mod widgets;

pub use backend::RatatuiBackend;
pub use frame::Frame;
pub use input::{AppEvent, InputEvent, KeyCode};
pub use keymap::{KeyBinding, Keymap};
pub use pane::{Pane, PaneManager};
pub use style::{Color, Style};

pub use crate::action::{Action, DashboardAction, NavAction};
