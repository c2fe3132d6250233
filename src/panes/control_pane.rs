use std::any::Any;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RatatuiRect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::state::{AppState, BrightnessPreset, Mode, QuickActionKind, QuickState};
use crate::ui::layout_helpers::columns;
use crate::ui::theme::DeckTheme;
use crate::ui::widgets::{CheckboxWidget, SliderWidget};
use crate::ui::{Action, Color, DashboardAction, InputEvent, Keymap, Pane, Style};

const CARD_HEIGHT: u16 = 5;
const BRIGHTNESS_HEIGHT: u16 = 6;
const QUICK_HEIGHT: u16 = 4;

/// Key hints for the placeholder buttons, matching the default keymap
const ACTION_KEYS: [char; 4] = ['R', 'F', 'E', 'S'];

/// The main control page: mode cards, brightness and quick actions.
pub struct ControlPane {
    keymap: Keymap,
    /// Card under the cursor; Enter activates it
    card_cursor: usize,
    brightness: SliderWidget,
    switches: Vec<(QuickState, CheckboxWidget)>,
}

impl ControlPane {
    pub fn new(keymap: Keymap) -> Self {
        let switches = vec![
            (QuickState::Recording, CheckboxWidget::new("Recording", Color::DESTRUCTIVE)),
            (QuickState::Streaming, CheckboxWidget::new("Streaming", Color::ACCENT)),
            (QuickState::Preview, CheckboxWidget::new("Preview", Color::PRIMARY)),
        ];
        Self {
            keymap,
            card_cursor: 0,
            brightness: SliderWidget::percent(),
            switches,
        }
    }

    /// Put the card cursor on `mode`
    pub fn focus_mode(&mut self, mode: Mode) {
        self.card_cursor = mode.index();
    }

    fn select(&mut self, index: usize) -> Action {
        self.card_cursor = index.min(Mode::ALL.len() - 1);
        Action::Dashboard(DashboardAction::SelectMode(Mode::ALL[self.card_cursor]))
    }

    fn render_modes(&self, area: RatatuiRect, buf: &mut Buffer, state: &AppState) {
        let cards = columns(area, Mode::ALL.len() as u16, 1);
        for (i, (mode, rect)) in Mode::ALL.iter().zip(cards).enumerate() {
            let active = state.active_mode == *mode;
            let under_cursor = i == self.card_cursor;
            let color = DeckTheme::mode_color(mode.color());

            let border = if active {
                Style::new().fg(Color::ACCENT).bold()
            } else if under_cursor {
                Style::new().fg(Color::WHITE)
            } else {
                Style::new().fg(Color::DARK_GRAY)
            };
            let title = Line::from(vec![
                Span::styled(
                    format!(" {} {} ", i + 1, mode.name()),
                    Style::new().fg(Color::WHITE).bold(),
                ),
                Span::styled("● ", Style::new().fg(color)),
            ]);
            let block = Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(ratatui::style::Style::from(border));
            let inner = block.inner(rect);
            block.render(rect, buf);
            if inner.width == 0 || inner.height == 0 {
                continue;
            }

            buf.set_stringn(
                inner.x,
                inner.y,
                mode.description(),
                inner.width as usize,
                Style::new().fg(Color::GRAY),
            );
            if active && inner.height > 2 {
                buf.set_stringn(
                    inner.x,
                    inner.y + 2,
                    " Active ",
                    inner.width as usize,
                    Style::new().fg(Color::BLACK).bg(Color::ACCENT).bold(),
                );
            } else if under_cursor && inner.height > 2 {
                buf.set_stringn(
                    inner.x,
                    inner.y + 2,
                    "Enter to activate",
                    inner.width as usize,
                    Style::new().fg(Color::DARK_GRAY),
                );
            }
        }
    }

    fn render_brightness(&mut self, area: RatatuiRect, buf: &mut Buffer, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Brightness ")
            .border_style(ratatui::style::Style::from(Style::new().fg(Color::DARK_GRAY)))
            .title_style(ratatui::style::Style::from(Style::new().fg(Color::WHITE).bold()));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 4 || inner.width < 10 {
            return;
        }

        let value = state.brightness.get();
        let line = Line::from(vec![
            Span::styled("Global intensity", Style::new().fg(Color::GRAY)),
            Span::raw("  "),
            Span::styled(format!("{}%", value), Style::new().fg(Color::WHITE).bold()),
        ]);
        let label_area = RatatuiRect::new(inner.x + 1, inner.y, inner.width - 2, 1);
        Paragraph::new(line).render(label_area, buf);

        let slider_area = RatatuiRect::new(inner.x + 1, inner.y + 1, inner.width - 2, 1);
        self.brightness.render_buf(slider_area, buf, value as f32, false);

        // Preview strip: black -> accent -> white gradient dimmed by brightness
        let strip_w = inner.width - 2;
        let fraction = state.brightness.fraction();
        for i in 0..strip_w {
            let t = if strip_w > 1 { i as f32 / (strip_w - 1) as f32 } else { 0.0 };
            let base = if t < 0.5 {
                Color::BLACK.lerp(Color::ACCENT, t * 2.0)
            } else {
                Color::ACCENT.lerp(Color::WHITE, (t - 0.5) * 2.0)
            };
            let shown = Color::BLACK.lerp(base, fraction);
            if let Some(cell) = buf.cell_mut((inner.x + 1 + i, inner.y + 2)) {
                cell.set_char('█')
                    .set_style(ratatui::style::Style::from(Style::new().fg(shown)));
            }
        }

        let presets = [
            ('0', BrightnessPreset::Min),
            ('5', BrightnessPreset::Half),
            ('=', BrightnessPreset::Max),
        ];
        let mut spans = Vec::new();
        for (key, preset) in presets {
            let selected = value == preset.value();
            let style = if selected {
                Style::new().fg(Color::BLACK).bg(Color::WHITE).bold()
            } else {
                Style::new().fg(Color::GRAY)
            };
            spans.push(Span::styled(format!(" [{}] {} ", key, preset.label()), style));
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled("[ ] ±1  { } ±10", Style::new().fg(Color::DARK_GRAY)));
        Paragraph::new(Line::from(spans))
            .render(RatatuiRect::new(inner.x + 1, inner.y + 3, inner.width - 2, 1), buf);
    }

    fn render_quick(&mut self, area: RatatuiRect, buf: &mut Buffer, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Quick actions ")
            .border_style(ratatui::style::Style::from(Style::new().fg(Color::DARK_GRAY)))
            .title_style(ratatui::style::Style::from(Style::new().fg(Color::WHITE).bold()));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 2 || inner.width < 12 {
            return;
        }

        let cols = columns(RatatuiRect::new(inner.x + 1, inner.y, inner.width - 2, 1), 3, 2);
        for ((which, switch), col) in self.switches.iter_mut().zip(cols) {
            switch.set_checked(state.quick.get(*which));
            switch.render_buf(buf, col.x, col.y, col.width);
        }

        let mut spans = Vec::new();
        for (key, kind) in ACTION_KEYS.iter().zip(QuickActionKind::ALL) {
            let label = format!(" [{}] {} ", key, kind.name());
            spans.push(Span::styled(label, Style::new().fg(Color::WHITE)));
            spans.push(Span::raw("  "));
        }
        Paragraph::new(Line::from(spans))
            .render(RatatuiRect::new(inner.x + 1, inner.y + 1, inner.width - 2, 1), buf);
    }
}

impl Default for ControlPane {
    fn default() -> Self {
        Self::new(Keymap::new())
    }
}

impl Pane for ControlPane {
    fn id(&self) -> &'static str {
        "control"
    }

    fn title(&self) -> &'static str {
        "Control"
    }

    fn handle_action(&mut self, action: &str, _event: &InputEvent, _state: &AppState) -> Action {
        let dashboard = match action {
            "prev_mode" => {
                self.card_cursor = self.card_cursor.saturating_sub(1);
                return Action::None;
            }
            "next_mode" => {
                self.card_cursor = (self.card_cursor + 1).min(Mode::ALL.len() - 1);
                return Action::None;
            }
            "select_mode" => return self.select(self.card_cursor),
            "mode_1" => return self.select(0),
            "mode_2" => return self.select(1),
            "mode_3" => return self.select(2),
            "mode_4" => return self.select(3),
            "brightness_down" => DashboardAction::NudgeBrightness(-1),
            "brightness_up" => DashboardAction::NudgeBrightness(1),
            "brightness_down_big" => DashboardAction::NudgeBrightness(-10),
            "brightness_up_big" => DashboardAction::NudgeBrightness(10),
            "preset_min" => DashboardAction::BrightnessPreset(BrightnessPreset::Min),
            "preset_half" => DashboardAction::BrightnessPreset(BrightnessPreset::Half),
            "preset_max" => DashboardAction::BrightnessPreset(BrightnessPreset::Max),
            "toggle_recording" => DashboardAction::ToggleQuick(QuickState::Recording),
            "toggle_streaming" => DashboardAction::ToggleQuick(QuickState::Streaming),
            "toggle_preview" => DashboardAction::ToggleQuick(QuickState::Preview),
            "reset" => DashboardAction::QuickAction(QuickActionKind::Reset),
            "fullscreen" => DashboardAction::QuickAction(QuickActionKind::Fullscreen),
            "export" => DashboardAction::QuickAction(QuickActionKind::Export),
            "settings" => DashboardAction::QuickAction(QuickActionKind::Settings),
            "toggle_live" => DashboardAction::ToggleLive,
            _ => return Action::None,
        };
        Action::Dashboard(dashboard)
    }

    fn render(&mut self, area: RatatuiRect, buf: &mut Buffer, state: &AppState) {
        let area = RatatuiRect::new(area.x + 1, area.y, area.width.saturating_sub(2), area.height);
        let mut y = area.y;
        let bottom = area.y + area.height;

        if y + CARD_HEIGHT <= bottom {
            self.render_modes(RatatuiRect::new(area.x, y, area.width, CARD_HEIGHT), buf, state);
            y += CARD_HEIGHT;
        }
        if y + BRIGHTNESS_HEIGHT <= bottom {
            let rect = RatatuiRect::new(area.x, y, area.width, BRIGHTNESS_HEIGHT);
            self.render_brightness(rect, buf, state);
            y += BRIGHTNESS_HEIGHT;
        }
        if y + QUICK_HEIGHT <= bottom {
            self.render_quick(RatatuiRect::new(area.x, y, area.width, QUICK_HEIGHT), buf, state);
        }
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panes::buffer_text;
    use crate::ui::input::Modifiers;
    use crate::ui::KeyCode;

    fn dummy_event() -> InputEvent {
        InputEvent::new(KeyCode::Char('x'), Modifiers::default())
    }

    #[test]
    fn number_keys_select_modes() {
        let mut pane = ControlPane::default();
        let state = AppState::new();
        let action = pane.handle_action("mode_3", &dummy_event(), &state);
        assert_eq!(action, Action::Dashboard(DashboardAction::SelectMode(Mode::Interactive)));
        assert_eq!(pane.card_cursor, 2);
    }

    #[test]
    fn cursor_moves_then_enter_selects() {
        let mut pane = ControlPane::default();
        let state = AppState::new();
        for _ in 0..10 {
            assert_eq!(pane.handle_action("next_mode", &dummy_event(), &state), Action::None);
        }
        let action = pane.handle_action("select_mode", &dummy_event(), &state);
        assert_eq!(action, Action::Dashboard(DashboardAction::SelectMode(Mode::Generative)));
        pane.handle_action("prev_mode", &dummy_event(), &state);
        let action = pane.handle_action("select_mode", &dummy_event(), &state);
        assert_eq!(action, Action::Dashboard(DashboardAction::SelectMode(Mode::Interactive)));
    }

    #[test]
    fn brightness_and_toggle_bindings() {
        let mut pane = ControlPane::default();
        let state = AppState::new();
        assert_eq!(
            pane.handle_action("preset_half", &dummy_event(), &state),
            Action::Dashboard(DashboardAction::BrightnessPreset(BrightnessPreset::Half))
        );
        assert_eq!(
            pane.handle_action("brightness_down_big", &dummy_event(), &state),
            Action::Dashboard(DashboardAction::NudgeBrightness(-10))
        );
        assert_eq!(
            pane.handle_action("toggle_streaming", &dummy_event(), &state),
            Action::Dashboard(DashboardAction::ToggleQuick(QuickState::Streaming))
        );
        assert_eq!(
            pane.handle_action("export", &dummy_event(), &state),
            Action::Dashboard(DashboardAction::QuickAction(QuickActionKind::Export))
        );
        assert_eq!(pane.handle_action("unknown", &dummy_event(), &state), Action::None);
    }

    #[test]
    fn render_shows_active_mode_and_brightness() {
        let area = RatatuiRect::new(0, 0, 100, 16);
        let mut buf = Buffer::empty(area);
        let mut pane = ControlPane::default();
        let mut state = AppState::new();
        state.active_mode = Mode::Audio;
        state.brightness.set(42);

        pane.render(area, &mut buf, &state);
        let text = buffer_text(&buf);
        assert!(text.contains("Visual"));
        assert!(text.contains("Generative"));
        assert_eq!(text.matches("Active").count(), 1);
        assert!(text.contains("42%"));
        assert!(text.contains("Recording"));
        assert!(text.contains("Export"));
    }
}
