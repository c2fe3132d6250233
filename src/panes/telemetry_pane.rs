use std::any::Any;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RatatuiRect;
use ratatui::widgets::{Block, Borders, Widget};

use crate::state::{AppState, MetricKind, AUDIO_LEVEL_MAX};
use crate::ui::theme::DeckTheme;
use crate::ui::{Action, Color, DashboardAction, InputEvent, Keymap, Pane, Style};

/// Block characters for vertical meter
const BLOCK_CHARS: [char; 8] = [
    '\u{2581}', '\u{2582}', '\u{2583}', '\u{2584}', '\u{2585}', '\u{2586}', '\u{2587}', '\u{2588}',
];

const LABEL_WIDTH: u16 = 8;
const METRICS_HEIGHT: u16 = MetricKind::ALL.len() as u16 + 3;

/// Simulated performance counters and the audio spectrum.
pub struct TelemetryPane {
    keymap: Keymap,
}

impl TelemetryPane {
    pub fn new(keymap: Keymap) -> Self {
        Self { keymap }
    }

    fn render_metrics(&self, area: RatatuiRect, buf: &mut Buffer, state: &AppState) {
        let title = if state.live { " Performance " } else { " Performance (paused) " };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(ratatui::style::Style::from(Style::new().fg(Color::PRIMARY)))
            .title_style(ratatui::style::Style::from(Style::new().fg(Color::PRIMARY).bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        let bar_w = inner.width.saturating_sub(LABEL_WIDTH + 24);
        for (i, kind) in MetricKind::ALL.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                return;
            }
            let metric = state.metrics.get(*kind);
            let x = inner.x + 1;
            buf.set_stringn(x, y, kind.label(), LABEL_WIDTH as usize, Style::new().fg(Color::GRAY));

            let bar_x = x + LABEL_WIDTH;
            Self::render_hbar(buf, bar_x, y, bar_w, metric.fraction());

            let text = format!("{:>5.0}{:<1}", metric.value, kind.unit());
            buf.set_string(bar_x + bar_w + 1, y, text, Style::new().fg(Color::WHITE).bold());
            buf.set_string(
                bar_x + bar_w + 9,
                y,
                format!("[{:.0}-{:.0}]", metric.min, metric.max),
                Style::new().fg(Color::DARK_GRAY),
            );
        }

        let y = inner.y + MetricKind::ALL.len() as u16;
        if y < inner.y + inner.height {
            let status = format!("ticks: {}", state.ticks);
            buf.set_string(inner.x + 1, y, status, Style::new().fg(Color::DARK_GRAY));
        }
    }

    fn render_hbar(buf: &mut Buffer, x: u16, y: u16, width: u16, fraction: f32) {
        let filled = (fraction * width as f32).round() as u16;
        for i in 0..width {
            let (ch, color) = if i < filled {
                ('█', DeckTheme::meter_color(i as f32 / width.max(1) as f32))
            } else {
                ('░', Color::DARK_GRAY)
            };
            if let Some(cell) = buf.cell_mut((x + i, y)) {
                cell.set_char(ch).set_style(ratatui::style::Style::from(Style::new().fg(color)));
            }
        }
    }

    fn render_spectrum(&self, area: RatatuiRect, buf: &mut Buffer, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Audio spectrum ")
            .border_style(ratatui::style::Style::from(Style::new().fg(Color::ACCENT)))
            .title_style(ratatui::style::Style::from(Style::new().fg(Color::ACCENT).bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        let bars = state.audio.bars();
        if bars.is_empty() || inner.height == 0 || inner.width == 0 {
            return;
        }
        // Widest bars that fit with a one-cell gap
        let slot = (inner.width / bars.len() as u16).max(1);
        let bar_w = if slot > 1 { slot - 1 } else { 1 };
        let total = slot * bars.len() as u16;
        let left = inner.x + inner.width.saturating_sub(total) / 2;

        for (i, level) in bars.iter().enumerate() {
            let x = left + i as u16 * slot;
            if x + bar_w > inner.x + inner.width {
                break;
            }
            Self::render_vbar(buf, x, bar_w, inner.y, inner.height, level / AUDIO_LEVEL_MAX);
        }
    }

    fn render_vbar(buf: &mut Buffer, x: u16, width: u16, top_y: u16, height: u16, level: f32) {
        let total_sub = height as f32 * 8.0;
        let filled_sub = (level.clamp(0.0, 1.0) * total_sub) as u16;

        for row in 0..height {
            let inverted_row = height - 1 - row;
            let y = top_y + row;
            let row_start = inverted_row * 8;
            let row_end = row_start + 8;
            let color = DeckTheme::meter_color(inverted_row as f32 / height as f32);

            let (ch, c) = if filled_sub >= row_end {
                ('\u{2588}', color)
            } else if filled_sub > row_start {
                let sub_level = (filled_sub - row_start) as usize;
                (BLOCK_CHARS[sub_level.saturating_sub(1).min(7)], color)
            } else {
                (' ', Color::DARK_GRAY)
            };

            for dx in 0..width {
                if let Some(cell) = buf.cell_mut((x + dx, y)) {
                    cell.set_char(ch).set_style(ratatui::style::Style::from(Style::new().fg(c)));
                }
            }
        }
    }
}

impl Default for TelemetryPane {
    fn default() -> Self {
        Self::new(Keymap::new())
    }
}

impl Pane for TelemetryPane {
    fn id(&self) -> &'static str {
        "telemetry"
    }

    fn title(&self) -> &'static str {
        "Telemetry"
    }

    fn handle_action(&mut self, action: &str, _event: &InputEvent, _state: &AppState) -> Action {
        match action {
            "toggle_live" => Action::Dashboard(DashboardAction::ToggleLive),
            _ => Action::None,
        }
    }

    fn render(&mut self, area: RatatuiRect, buf: &mut Buffer, state: &AppState) {
        let area = RatatuiRect::new(area.x + 1, area.y, area.width.saturating_sub(2), area.height);
        let metrics_h = METRICS_HEIGHT.min(area.height);
        self.render_metrics(RatatuiRect::new(area.x, area.y, area.width, metrics_h), buf, state);

        let rest = area.height - metrics_h;
        if rest >= 3 {
            let spectrum = RatatuiRect::new(area.x, area.y + metrics_h, area.width, rest);
            self.render_spectrum(spectrum, buf, state);
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
    use crate::simulation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn render_shows_metrics_and_bounds() {
        let area = RatatuiRect::new(0, 0, 80, 18);
        let mut buf = Buffer::empty(area);
        let mut pane = TelemetryPane::default();
        let state = AppState::new();

        pane.render(area, &mut buf, &state);
        let text = buffer_text(&buf);
        for kind in MetricKind::ALL {
            assert!(text.contains(kind.label()));
        }
        assert!(text.contains("[30-60]"));
        assert!(text.contains("ticks: 0"));
        assert!(!text.contains("paused"));
    }

    #[test]
    fn spectrum_draws_bars_after_tick() {
        let area = RatatuiRect::new(0, 0, 80, 18);
        let mut pane = TelemetryPane::default();
        let mut state = AppState::new();
        let mut rng = StdRng::seed_from_u64(9);
        simulation::tick(&mut state, &mut rng);
        state.live = false;

        let mut buf = Buffer::empty(area);
        pane.render(area, &mut buf, &state);
        let text = buffer_text(&buf);
        assert!(text.contains("paused"));
        assert!(text.contains("ticks: 1"));
        assert!(text.contains('█') || BLOCK_CHARS.iter().any(|c| text.contains(*c)));
    }

    #[test]
    fn vbar_full_and_empty() {
        let area = RatatuiRect::new(0, 0, 1, 4);
        let mut buf = Buffer::empty(area);
        TelemetryPane::render_vbar(&mut buf, 0, 1, 0, 4, 1.0);
        assert!((0..4).all(|y| buf[(0, y)].symbol() == "█"));

        let mut buf = Buffer::empty(area);
        TelemetryPane::render_vbar(&mut buf, 0, 1, 0, 4, 0.0);
        assert!((0..4).all(|y| buf[(0, y)].symbol() == " "));
    }
}
