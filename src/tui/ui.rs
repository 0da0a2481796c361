//! Layout helpers.

use ratatui::layout::Rect;

/// A `width` x `height` box centered in `area`, shrunk to fit.
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let column = centered_column(width, area);
    let height = area.height.min(height);
    let y = area.y + (area.height - height) / 2;
    Rect::new(column.x, y, column.width, height)
}

/// Shrink `area` horizontally to at most `max_width` columns, centered.
pub fn centered_column(max_width: u16, area: Rect) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
