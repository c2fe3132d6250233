use ratatui::layout::Rect;

/// Center a `width` x `height` rect inside `area`, shrinking to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Split `area` into `n` equal columns separated by `gap` cells.
pub fn columns(area: Rect, n: u16, gap: u16) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let total_gap = gap * n.saturating_sub(1);
    let col_w = area.width.saturating_sub(total_gap) / n;
    (0..n)
        .map(|i| Rect::new(area.x + i * (col_w + gap), area.y, col_w, area.height))
        .collect()
}
