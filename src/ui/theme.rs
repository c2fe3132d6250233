use ratatui::style::Style as RatStyle;

use super::style::{Color, Style};
use crate::state::ModeColor;

/// Widget styles shared by the rat-widget backed controls
pub struct DeckTheme;

impl DeckTheme {
    pub fn slider_style() -> RatStyle {
        RatStyle::from(Style::new().fg(Color::GRAY))
    }

    pub fn slider_focus_style() -> RatStyle {
        RatStyle::from(Style::new().fg(Color::WHITE).bg(Color::SELECTION_BG))
    }

    pub fn slider_knob_style() -> RatStyle {
        RatStyle::from(Style::new().fg(Color::ACCENT).bold())
    }

    pub fn checkbox_style() -> RatStyle {
        RatStyle::from(Style::new().fg(Color::GRAY))
    }

    pub fn checkbox_active_style(color: Color) -> RatStyle {
        RatStyle::from(Style::new().fg(color).bold())
    }

    pub fn mode_color(tag: ModeColor) -> Color {
        match tag {
            ModeColor::Accent => Color::ACCENT,
            ModeColor::Primary => Color::PRIMARY,
            ModeColor::Secondary => Color::SECONDARY,
            ModeColor::Muted => Color::MUTED,
        }
    }

    /// Green/yellow/red depending on how full a meter is
    pub fn meter_color(frac: f32) -> Color {
        if frac > 0.85 {
            Color::METER_HIGH
        } else if frac > 0.6 {
            Color::METER_MID
        } else {
            Color::METER_LOW
        }
    }
}
