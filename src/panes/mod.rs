mod control_pane;
mod effects_pane;
mod help_pane;
mod telemetry_pane;

pub use control_pane::ControlPane;
pub use effects_pane::EffectsPane;
pub use help_pane::HelpPane;
pub use telemetry_pane::TelemetryPane;

/// Flatten a rendered buffer into text, one line per row
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
