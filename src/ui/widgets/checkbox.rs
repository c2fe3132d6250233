use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::StatefulWidget;

use rat_widget::checkbox::{Checkbox as RatCheckbox, CheckboxState};

use crate::ui::style::Color;
use crate::ui::theme::DeckTheme;

/// An on/off switch backed by rat-widget Checkbox. Display only; the owning
/// pane flips state through actions and mirrors it here before rendering.
pub struct CheckboxWidget {
    label: String,
    color: Color,
    state: CheckboxState,
}

impl CheckboxWidget {
    pub fn new(label: &str, color: Color) -> Self {
        Self {
            label: label.to_string(),
            color,
            state: CheckboxState::new(),
        }
    }

    pub fn checked(&self) -> bool {
        self.state.checked()
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.state.set_checked(checked);
    }

    /// Render the switch at the given position.
    pub fn render_buf(&mut self, buf: &mut Buffer, x: u16, y: u16, width: u16) -> u16 {
        let style = if self.checked() {
            DeckTheme::checkbox_active_style(self.color)
        } else {
            DeckTheme::checkbox_style()
        };
        let widget = RatCheckbox::new()
            .text(self.label.as_str())
            .true_str(Span::from("(●)"))
            .false_str(Span::from("( )"))
            .style(style);

        let area = Rect::new(x, y, width, 1);
        widget.render(area, buf, &mut self.state);
        1
    }
}
