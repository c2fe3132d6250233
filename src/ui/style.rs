/// RGB color used throughout the UI; converts into ratatui colors at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GRAY: Color = Color::new(160, 160, 160);
    pub const DARK_GRAY: Color = Color::new(90, 90, 90);
    pub const YELLOW: Color = Color::new(240, 210, 80);
    pub const CYAN: Color = Color::new(80, 220, 230);
    pub const SELECTION_BG: Color = Color::new(40, 60, 100);

    // Dashboard palette
    pub const ACCENT: Color = Color::new(240, 130, 60);
    pub const PRIMARY: Color = Color::new(90, 150, 250);
    pub const SECONDARY: Color = Color::new(160, 110, 230);
    pub const MUTED: Color = Color::new(120, 120, 130);
    pub const DESTRUCTIVE: Color = Color::new(235, 70, 80);

    pub const METER_LOW: Color = Color::new(70, 200, 90);
    pub const METER_MID: Color = Color::new(230, 200, 60);
    pub const METER_HIGH: Color = Color::new(235, 80, 60);

    /// Linear blend towards `other`; `t` is clamped to 0.0-1.0
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl From<Color> for ratatui::style::Color {
    fn from(c: Color) -> Self {
        ratatui::style::Color::Rgb(c.r, c.g, c.b)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl From<Style> for ratatui::style::Style {
    fn from(s: Style) -> Self {
        let mut style = ratatui::style::Style::default();
        if let Some(fg) = s.fg {
            style = style.fg(fg.into());
        }
        if let Some(bg) = s.bg {
            style = style.bg(bg.into());
        }
        if s.bold {
            style = style.add_modifier(ratatui::style::Modifier::BOLD);
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.0), Color::BLACK);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 1.0), Color::WHITE);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 2.0), Color::WHITE);
    }
}
