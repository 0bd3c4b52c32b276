//! Projection from the logical canvas to terminal cells, plus text helpers

use crate::ui::geometry::{SCREEN_HEIGHT, SCREEN_WIDTH};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Span};

/// Maps logical canvas coordinates onto a terminal area
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    area: Rect,
}

impl Projection {
    pub fn new(area: Rect) -> Self {
        Projection { area }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Column of logical x (may lie outside the area)
    pub fn col(&self, x: i32) -> i32 {
        self.area.x as i32 + (x * self.area.width as i32).div_euclid(SCREEN_WIDTH)
    }

    /// Row of logical y (may lie outside the area)
    pub fn row(&self, y: i32) -> i32 {
        self.area.y as i32 + (y * self.area.height as i32).div_euclid(SCREEN_HEIGHT)
    }

    /// Cell of a logical point, if it falls inside the area
    pub fn point(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        let (col, row) = (self.col(x), self.row(y));
        let inside = (self.area.left() as i32..self.area.right() as i32).contains(&col)
            && (self.area.top() as i32..self.area.bottom() as i32).contains(&row);
        inside.then_some((col as u16, row as u16))
    }

    /// Cells covered by a logical rectangle, clipped to the area
    pub fn rect(&self, x: i32, y: i32, width: i32, height: i32) -> Option<Rect> {
        let left = self.col(x).max(self.area.left() as i32);
        let right = self.col(x + width).min(self.area.right() as i32);
        let top = self.row(y).max(self.area.top() as i32);
        let bottom = self.row(y + height).min(self.area.bottom() as i32);

        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }
}

/// Where `text` lands when centered inside `bounds`
pub fn centered_text_rect(bounds: Rect, text: &str) -> Rect {
    let width = (Span::raw(text).width() as u16).min(bounds.width);
    let height = bounds.height.min(1);
    Rect::new(
        bounds.x + (bounds.width - width) / 2,
        bounds.y + (bounds.height - height) / 2,
        width,
        height,
    )
}

/// Draw `text` centered in `bounds`, truncated to fit
pub fn draw_centered(buf: &mut Buffer, bounds: Rect, text: &str, style: Style) {
    let rect = centered_text_rect(bounds, text);
    if rect.width > 0 && rect.height > 0 {
        buf.set_stringn(rect.x, rect.y, text, rect.width as usize, style);
    }
}

/// Draw `text` starting at a logical point, clipped at the right edge.
/// Returns the column after the last drawn cell.
pub fn draw_text(
    buf: &mut Buffer,
    proj: &Projection,
    x: i32,
    y: i32,
    text: &str,
    style: Style,
) -> Option<u16> {
    let (col, row) = proj.point(x, y)?;
    let room = proj.area().right().saturating_sub(col) as usize;
    let (end, _) = buf.set_stringn(col, row, text, room, style);
    Some(end)
}
