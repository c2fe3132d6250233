use std::any::Any;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RatatuiRect;
use ratatui::widgets::{Block, Borders, Widget};

use crate::state::{AppState, EffectKind};
use crate::ui::widgets::SliderWidget;
use crate::ui::{Action, Color, DashboardAction, InputEvent, Keymap, Pane, Style};

const NAME_WIDTH: u16 = 12;
const VALUE_WIDTH: u16 = 8;
const RANGE_WIDTH: u16 = 13;
const BIG_STEP: f32 = 10.0;

/// Effect parameter sliders, one row per parameter.
pub struct EffectsPane {
    keymap: Keymap,
    selected: usize,
    sliders: Vec<(EffectKind, SliderWidget)>,
}

impl EffectsPane {
    pub fn new(keymap: Keymap) -> Self {
        let sliders = EffectKind::ALL
            .into_iter()
            .map(|kind| (kind, SliderWidget::new(kind.range())))
            .collect();
        Self {
            keymap,
            selected: 0,
            sliders,
        }
    }

    fn selected_kind(&self) -> EffectKind {
        EffectKind::ALL[self.selected]
    }

    fn nudge(&self, delta: f32) -> Action {
        Action::Dashboard(DashboardAction::NudgeEffect(self.selected_kind(), delta))
    }

    fn format_value(kind: EffectKind, value: f32) -> String {
        format!("{:.0}{}", value, kind.unit())
    }
}

impl Default for EffectsPane {
    fn default() -> Self {
        Self::new(Keymap::new())
    }
}

impl Pane for EffectsPane {
    fn id(&self) -> &'static str {
        "effects"
    }

    fn title(&self) -> &'static str {
        "Effects"
    }

    fn handle_action(&mut self, action: &str, _event: &InputEvent, _state: &AppState) -> Action {
        match action {
            "prev" => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            "next" => {
                self.selected = (self.selected + 1).min(EffectKind::ALL.len() - 1);
                Action::None
            }
            "decrease" => self.nudge(-1.0),
            "increase" => self.nudge(1.0),
            "decrease_big" => self.nudge(-BIG_STEP),
            "increase_big" => self.nudge(BIG_STEP),
            "reset_param" => Action::Dashboard(DashboardAction::ResetEffect(self.selected_kind())),
            _ => Action::None,
        }
    }

    /// Keys the keymap does not claim (Home/End and friends) go to the focused slider.
    fn handle_raw_input(&mut self, event: &InputEvent, state: &AppState) -> Action {
        let (kind, slider) = &mut self.sliders[self.selected];
        match slider.adjust(state.effects.get(*kind), event) {
            Some(value) => Action::Dashboard(DashboardAction::SetEffect(*kind, value)),
            None => Action::None,
        }
    }

    fn render(&mut self, area: RatatuiRect, buf: &mut Buffer, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Effect parameters ")
            .border_style(ratatui::style::Style::from(Style::new().fg(Color::SECONDARY)))
            .title_style(ratatui::style::Style::from(Style::new().fg(Color::SECONDARY).bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        let fixed = 2 + NAME_WIDTH + VALUE_WIDTH + RANGE_WIDTH + 3;
        if inner.width <= fixed || inner.height == 0 {
            return;
        }
        let slider_w = inner.width - fixed;

        for (i, (kind, slider)) in self.sliders.iter_mut().enumerate() {
            // Two rows per parameter with a spacer
            let y = inner.y + 1 + i as u16 * 2;
            if y >= inner.y + inner.height {
                break;
            }
            let is_selected = i == self.selected;
            let value = state.effects.get(*kind);
            let mut x = inner.x + 1;

            if is_selected {
                buf.set_string(x, y, "▶", Style::new().fg(Color::ACCENT).bold());
            }
            x += 2;

            let name_style = if is_selected {
                Style::new().fg(Color::WHITE).bg(Color::SELECTION_BG).bold()
            } else {
                Style::new().fg(Color::GRAY)
            };
            buf.set_stringn(x, y, kind.name(), NAME_WIDTH as usize, name_style);
            x += NAME_WIDTH;

            slider.render_buf(RatatuiRect::new(x, y, slider_w, 1), buf, value, is_selected);
            x += slider_w + 1;

            let text = Self::format_value(*kind, value);
            let pad = (VALUE_WIDTH as usize).saturating_sub(text.chars().count());
            buf.set_string(x + pad as u16, y, &text, Style::new().fg(Color::WHITE).bold());
            x += VALUE_WIDTH + 2;

            let (min, max) = kind.range();
            buf.set_stringn(
                x,
                y,
                format!("[{:.0}, {:.0}]", min, max),
                RANGE_WIDTH as usize,
                Style::new().fg(Color::DARK_GRAY),
            );
        }
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
