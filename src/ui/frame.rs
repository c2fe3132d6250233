use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::style::{Color, Style};
use crate::state::AppState;

const HEADER_HEIGHT: u16 = 4;
const FOOTER_HEIGHT: u16 = 2;

/// Chrome drawn around every pane: title header and status footer.
pub struct Frame {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub version: &'static str,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            title: "TouchDesigner Control",
            subtitle: "Minimal control for visual projects",
            version: "TouchDesigner v2024.1",
        }
    }

    /// Area left for the active pane
    pub fn content_area(&self, area: Rect) -> Rect {
        let chrome = HEADER_HEIGHT + FOOTER_HEIGHT;
        if area.height <= chrome {
            return Rect::new(area.x, area.y, area.width, 0);
        }
        Rect::new(area.x, area.y + HEADER_HEIGHT, area.width, area.height - chrome)
    }

    pub fn render_buf(
        &self,
        area: Rect,
        buf: &mut Buffer,
        state: &AppState,
        tabs: &[(&'static str, &'static str)],
        active: &str,
    ) {
        self.render_header(area, buf, state, tabs, active);
        self.render_footer(area, buf, state);
    }

    fn render_header(
        &self,
        area: Rect,
        buf: &mut Buffer,
        state: &AppState,
        tabs: &[(&'static str, &'static str)],
        active: &str,
    ) {
        let height = HEADER_HEIGHT.min(area.height);
        let header = Rect::new(area.x, area.y, area.width, height);

        let badge = if state.live {
            Span::styled(" ● LIVE ", Style::new().fg(Color::BLACK).bg(Color::ACCENT).bold())
        } else {
            Span::styled(" ○ OFFLINE ", Style::new().fg(Color::WHITE).bg(Color::DARK_GRAY))
        };

        let mut tab_spans = Vec::with_capacity(tabs.len() * 2);
        for (i, (id, title)) in tabs.iter().enumerate() {
            let label = format!(" F{} {} ", i + 1, title);
            let style = if *id == active {
                Style::new().fg(Color::WHITE).bg(Color::SELECTION_BG).bold()
            } else {
                Style::new().fg(Color::GRAY)
            };
            tab_spans.push(Span::styled(label, style));
            tab_spans.push(Span::raw(" "));
        }

        let lines = vec![
            Line::from(Span::styled(self.title, Style::new().fg(Color::WHITE).bold())).centered(),
            Line::from(Span::styled(self.subtitle, Style::new().fg(Color::GRAY))).centered(),
            Line::from(vec![
                badge,
                Span::raw("  "),
                Span::styled("Space toggles", Style::new().fg(Color::DARK_GRAY)),
            ])
            .centered(),
            Line::from(tab_spans).centered(),
        ];
        Paragraph::new(lines).render(header, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer, state: &AppState) {
        if area.height < HEADER_HEIGHT + FOOTER_HEIGHT {
            return;
        }
        let y = area.y + area.height - FOOTER_HEIGHT;
        let rule = "─".repeat(area.width as usize);
        buf.set_string(area.x, y, rule, Style::new().fg(Color::DARK_GRAY));

        let muted = Style::new().fg(Color::GRAY);
        let connection = if state.live {
            Style::new().fg(Color::ACCENT)
        } else {
            muted
        };
        let right = Line::from(vec![
            Span::styled(format!("FPS: {:.0}", state.metrics.fps.value), muted),
            Span::styled(" • ", muted),
            Span::styled(format!("Mode: {}", state.active_mode.name()), muted),
            Span::styled(" • ", muted),
            Span::styled(state.connection_label(), connection),
        ]);

        let line_area = Rect::new(area.x, y + 1, area.width, 1);
        Paragraph::new(Line::from(Span::styled(self.version, muted))).render(line_area, buf);
        Paragraph::new(right.right_aligned()).render(line_area, buf);

        if let Some(status) = &state.status {
            let text = format!(" {} ", status.text);
            let width = text.chars().count() as u16;
            if width + 2 < area.width {
                let x = area.x + (area.width - width) / 2;
                buf.set_string(x, y, text, Style::new().fg(Color::YELLOW).bold());
            }
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
