use std::any::Any;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RatatuiRect;
use ratatui::widgets::{Block, Borders, Widget};

use crate::state::AppState;
use crate::ui::layout_helpers::{center_rect, columns};
use crate::ui::{Action, Color, InputEvent, KeyBinding, Keymap, NavAction, Pane, Style};

const KEY_WIDTH: usize = 12;

/// Lists the global bindings next to those of the pane help was opened from.
pub struct HelpPane {
    keymap: Keymap,
    global: Vec<KeyBinding>,
    context_title: &'static str,
    context: Vec<KeyBinding>,
}

impl HelpPane {
    pub fn new(keymap: Keymap, global: &Keymap) -> Self {
        Self {
            keymap,
            global: global.bindings().to_vec(),
            context_title: "",
            context: Vec::new(),
        }
    }

    /// Show bindings for the pane the user came from
    pub fn set_context(&mut self, title: &'static str, keymap: &Keymap) {
        self.context_title = title;
        self.context = keymap.bindings().to_vec();
    }

    fn render_column(area: RatatuiRect, buf: &mut Buffer, title: &str, bindings: &[KeyBinding]) {
        let title_style = Style::new().fg(Color::ACCENT).bold();
        buf.set_stringn(area.x, area.y, title, area.width as usize, title_style);
        // Bindings sharing an action (e.g. Left and h) are folded onto one row
        let mut rows: Vec<(String, &'static str)> = Vec::new();
        for b in bindings {
            match rows.iter_mut().find(|(_, desc)| *desc == b.description) {
                Some((keys, _)) => {
                    keys.push_str(" / ");
                    keys.push_str(&b.pattern.display());
                }
                None => rows.push((b.pattern.display(), b.description)),
            }
        }
        for (i, (keys, desc)) in rows.iter().enumerate() {
            let y = area.y + 2 + i as u16;
            if y >= area.y + area.height {
                break;
            }
            buf.set_stringn(area.x, y, keys, KEY_WIDTH, Style::new().fg(Color::WHITE).bold());
            buf.set_stringn(
                area.x + KEY_WIDTH as u16 + 1,
                y,
                desc,
                (area.width as usize).saturating_sub(KEY_WIDTH + 1),
                Style::new().fg(Color::GRAY),
            );
        }
    }
}

impl Pane for HelpPane {
    fn id(&self) -> &'static str {
        "help"
    }

    fn title(&self) -> &'static str {
        "Help"
    }

    fn handle_action(&mut self, action: &str, _event: &InputEvent, _state: &AppState) -> Action {
        match action {
            "close" => Action::Nav(NavAction::Back),
            _ => Action::None,
        }
    }

    fn render(&mut self, area: RatatuiRect, buf: &mut Buffer, _state: &AppState) {
        let rect = center_rect(area, 84, area.height);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(ratatui::style::Style::from(Style::new().fg(Color::CYAN)))
            .title_style(ratatui::style::Style::from(Style::new().fg(Color::CYAN)));
        let inner = block.inner(rect);
        block.render(rect, buf);
        if inner.width < 4 || inner.height < 3 {
            return;
        }

        let body = RatatuiRect::new(inner.x + 1, inner.y, inner.width - 2, inner.height);
        let cols = columns(body, 2, 2);
        Self::render_column(cols[0], buf, "Global", &self.global);
        if !self.context.is_empty() {
            Self::render_column(cols[1], buf, self.context_title, &self.context);
        }
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn in_tab_cycle(&self) -> bool {
        false
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
