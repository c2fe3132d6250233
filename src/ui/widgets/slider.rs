use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

use rat_event::{HandleEvent, Outcome, Regular};
use rat_widget::slider::{Slider as RatSlider, SliderState};

use crate::state::BRIGHTNESS_MAX;
use crate::ui::input::InputEvent;
use crate::ui::rat_compat::{outcome_consumed, to_crossterm_key_event};
use crate::ui::theme::DeckTheme;

/// Whole-unit slider over a fixed range. The dashboard state owns the value,
/// so the rat-widget state is re-synced on every call.
pub struct SliderWidget {
    state: SliderState<f32>,
}

impl SliderWidget {
    pub fn new(range: (f32, f32)) -> Self {
        let mut state = SliderState::<f32>::new_range(range, 1.0);
        state.set_value(range.0);
        Self { state }
    }

    pub fn percent() -> Self {
        Self::new((0.0, BRIGHTNESS_MAX as f32))
    }

    /// Let the slider react to a key starting from `current`.
    /// Returns the new value when the slider took the key.
    pub fn adjust(&mut self, current: f32, event: &InputEvent) -> Option<f32> {
        self.state.set_value(current);
        self.state.focus.set(true);
        let outcome: Outcome = self.state.handle(&to_crossterm_key_event(event), Regular).into();
        outcome_consumed(outcome).then(|| self.state.value())
    }

    pub fn render_buf(&mut self, area: Rect, buf: &mut Buffer, value: f32, focused: bool) {
        self.state.set_value(value);
        self.state.focus.set(focused);
        RatSlider::<f32>::new()
            .style(DeckTheme::slider_style())
            .focus_style(DeckTheme::slider_focus_style())
            .knob_style(DeckTheme::slider_knob_style())
            .render(area, buf, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::input::Modifiers;
    use crate::ui::KeyCode;

    fn press(key: KeyCode) -> InputEvent {
        InputEvent::new(key, Modifiers::default())
    }

    #[test]
    fn home_and_end_jump_to_range_ends() {
        let mut slider = SliderWidget::new((-360.0, 360.0));
        assert_eq!(slider.adjust(0.0, &press(KeyCode::Home)), Some(-360.0));
        assert_eq!(slider.adjust(0.0, &press(KeyCode::End)), Some(360.0));
    }

    #[test]
    fn unrelated_key_is_ignored() {
        let mut slider = SliderWidget::percent();
        assert_eq!(slider.adjust(40.0, &press(KeyCode::Char('z'))), None);
    }
}
