use std::any::Any;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::input::InputEvent;
use super::keymap::Keymap;
use crate::action::{Action, NavAction};
use crate::state::AppState;

/// A full-screen page of the dashboard
pub trait Pane {
    fn id(&self) -> &'static str;

    /// Label for the header tabs
    fn title(&self) -> &'static str;

    /// Called when the pane keymap resolved the event to `action`
    fn handle_action(&mut self, action: &str, event: &InputEvent, state: &AppState) -> Action;

    /// Called for events no keymap claimed
    fn handle_raw_input(&mut self, _event: &InputEvent, _state: &AppState) -> Action {
        Action::None
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, state: &AppState);

    fn keymap(&self) -> &Keymap;

    /// Help pane is reachable but not part of the tab cycle
    fn in_tab_cycle(&self) -> bool {
        true
    }

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Resolve through the pane keymap, falling back to raw input
    fn handle_input(&mut self, event: &InputEvent, state: &AppState) -> Action {
        match self.keymap().lookup(event) {
            Some(action) => self.handle_action(action, event, state),
            None => self.handle_raw_input(event, state),
        }
    }
}

pub struct PaneManager {
    panes: Vec<Box<dyn Pane>>,
    active: usize,
    previous: usize,
}

impl PaneManager {
    pub fn new(first: Box<dyn Pane>) -> Self {
        Self {
            panes: vec![first],
            active: 0,
            previous: 0,
        }
    }

    pub fn add_pane(&mut self, pane: Box<dyn Pane>) {
        self.panes.push(pane);
    }

    pub fn active(&self) -> &dyn Pane {
        self.panes[self.active].as_ref()
    }

    pub fn active_mut(&mut self) -> &mut dyn Pane {
        self.panes[self.active].as_mut()
    }

    /// (id, title) of panes shown as tabs, in order
    pub fn tabs(&self) -> Vec<(&'static str, &'static str)> {
        self.panes
            .iter()
            .filter(|p| p.in_tab_cycle())
            .map(|p| (p.id(), p.title()))
            .collect()
    }

    /// Returns false if no pane has that id
    pub fn switch_to(&mut self, id: &str) -> bool {
        match self.panes.iter().position(|p| p.id() == id) {
            Some(idx) => {
                if idx != self.active {
                    self.previous = self.active;
                    self.active = idx;
                }
                true
            }
            None => false,
        }
    }

    fn cycle(&mut self, forward: bool) {
        let tabs: Vec<usize> = (0..self.panes.len())
            .filter(|&i| self.panes[i].in_tab_cycle())
            .collect();
        if tabs.is_empty() {
            return;
        }
        let pos = tabs.iter().position(|&i| i == self.active);
        let next = match (pos, forward) {
            (Some(p), true) => tabs[(p + 1) % tabs.len()],
            (Some(p), false) => tabs[(p + tabs.len() - 1) % tabs.len()],
            (None, _) => tabs[0],
        };
        if next != self.active {
            self.previous = self.active;
            self.active = next;
        }
    }

    pub fn process_nav(&mut self, action: &Action) {
        if let Action::Nav(nav) = action {
            match *nav {
                NavAction::SwitchPane(id) => {
                    if !self.switch_to(id) {
                        log::warn!("no pane named '{}'", id);
                    }
                }
                NavAction::NextPane => self.cycle(true),
                NavAction::PrevPane => self.cycle(false),
                NavAction::Back => {
                    std::mem::swap(&mut self.active, &mut self.previous);
                }
            }
        }
    }

    pub fn get_pane_mut<T: 'static>(&mut self, id: &str) -> Option<&mut T> {
        self.panes
            .iter_mut()
            .find(|p| p.id() == id)
            .and_then(|p| p.as_any_mut().downcast_mut::<T>())
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, state: &AppState) {
        self.active_mut().render(area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy {
        id: &'static str,
        tab: bool,
        keymap: Keymap,
    }

    impl Dummy {
        fn boxed(id: &'static str, tab: bool) -> Box<dyn Pane> {
            Box::new(Self { id, tab, keymap: Keymap::new() })
        }
    }

    impl Pane for Dummy {
        fn id(&self) -> &'static str {
            self.id
        }
        fn title(&self) -> &'static str {
            self.id
        }
        fn handle_action(&mut self, _: &str, _: &InputEvent, _: &AppState) -> Action {
            Action::None
        }
        fn render(&mut self, _: Rect, _: &mut Buffer, _: &AppState) {}
        fn keymap(&self) -> &Keymap {
            &self.keymap
        }
        fn in_tab_cycle(&self) -> bool {
            self.tab
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn manager() -> PaneManager {
        let mut pm = PaneManager::new(Dummy::boxed("a", true));
        pm.add_pane(Dummy::boxed("b", true));
        pm.add_pane(Dummy::boxed("help", false));
        pm
    }

    #[test]
    fn cycle_skips_non_tab_panes() {
        let mut pm = manager();
        pm.process_nav(&Action::Nav(NavAction::NextPane));
        assert_eq!(pm.active().id(), "b");
        pm.process_nav(&Action::Nav(NavAction::NextPane));
        assert_eq!(pm.active().id(), "a");
        pm.process_nav(&Action::Nav(NavAction::PrevPane));
        assert_eq!(pm.active().id(), "b");
        assert_eq!(pm.tabs(), vec![("a", "a"), ("b", "b")]);
    }

    #[test]
    fn back_returns_to_previous() {
        let mut pm = manager();
        pm.process_nav(&Action::Nav(NavAction::SwitchPane("b")));
        pm.process_nav(&Action::Nav(NavAction::SwitchPane("help")));
        pm.process_nav(&Action::Nav(NavAction::Back));
        assert_eq!(pm.active().id(), "b");
    }

    #[test]
    fn unknown_pane_is_ignored() {
        let mut pm = manager();
        assert!(!pm.switch_to("nope"));
        assert_eq!(pm.active().id(), "a");
    }

    #[test]
    fn downcast_by_id() {
        let mut pm = manager();
        assert!(pm.get_pane_mut::<Dummy>("b").is_some());
        assert!(pm.get_pane_mut::<Dummy>("zzz").is_none());
    }
}
