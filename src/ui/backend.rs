use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

use super::input::{AppEvent, InputEvent};

/// Owns the terminal: raw mode, alternate screen and drawing.
pub struct RatatuiBackend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    started: bool,
}

impl RatatuiBackend {
    pub fn new() -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal, started: false })
    }

    pub fn start(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        self.started = true;
        Ok(())
    }

    pub fn stop(&mut self) -> io::Result<()> {
        if !self.started {
            return Ok(());
        }
        self.started = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }

    /// Wait up to `timeout` for the next event we care about
    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<AppEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let app_event = match event::read()? {
            Event::Key(key) => InputEvent::from_crossterm(key).map(AppEvent::Key),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        };
        Ok(app_event)
    }

    /// Draw one frame; `render` paints the whole terminal area.
    pub fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(Rect, &mut Buffer),
    {
        self.terminal.draw(|frame| {
            let area = frame.area();
            render(area, frame.buffer_mut());
        })?;
        Ok(())
    }
}

impl Drop for RatatuiBackend {
    fn drop(&mut self) {
        // Leave the terminal usable even if the loop bailed out with an error
        let _ = self.stop();
    }
}
