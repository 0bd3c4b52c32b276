//! The container outline and the stacked slot boxes
//!
//! Slots are drawn bottom-up, slot `i` at [`slot_top`]`(i)`. A box that is
//! being animated is drawn with the same routine at an arbitrary height.

use super::utils::{Projection, draw_centered};
use crate::store::Stack;
use crate::ui::geometry::{CONTAINER_HEIGHT, ITEM_HEIGHT, ITEM_WIDTH, STACK_X, STACK_Y, slot_top};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};

/// Render the container and every occupied slot
pub fn render_board(buf: &mut Buffer, proj: &Projection, stack: &Stack) {
    render_container(buf, proj);

    for (slot, value) in stack.values().iter().enumerate() {
        render_slot_box(buf, proj, slot_top(slot), *value, slot);
    }
}

/// Left, right and bottom edges; the top stays open
fn render_container(buf: &mut Buffer, proj: &Projection) {
    let Some(inner) = proj.rect(STACK_X, STACK_Y, ITEM_WIDTH, CONTAINER_HEIGHT) else {
        return;
    };
    let area = proj.area();
    let style = Style::default().fg(DEFAULT_THEME.container);

    let left = inner.x.checked_sub(1).filter(|col| *col >= area.left());
    let right = Some(inner.right()).filter(|col| *col < area.right());

    for row in inner.top()..inner.bottom() {
        if let Some(col) = left {
            buf.set_string(col, row, "│", style);
        }
        if let Some(col) = right {
            buf.set_string(col, row, "│", style);
        }
    }

    let bottom = inner.bottom();
    if bottom < area.bottom() {
        for col in inner.left()..inner.right() {
            buf.set_string(col, bottom, "─", style);
        }
        if let Some(col) = left {
            buf.set_string(col, bottom, "└", style);
        }
        if let Some(col) = right {
            buf.set_string(col, bottom, "┘", style);
        }
    }
}

/// Render one filled, bordered, labeled box with its top edge at logical `y`.
///
/// `slot` picks the color. Parts outside the surface are clipped.
pub fn render_slot_box(buf: &mut Buffer, proj: &Projection, y: i32, value: i32, slot: usize) {
    let Some(rect) = proj.rect(STACK_X, y, ITEM_WIDTH, ITEM_HEIGHT) else {
        return;
    };
    let color = DEFAULT_THEME.slot_color(slot);

    Clear.render(rect, buf);
    buf.set_style(rect, Style::default().bg(color));

    // Too thin for a border on small terminals; then it is just a colored band
    let label_area = if rect.width >= 3 && rect.height >= 3 {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.slot_border).bg(color));
        let inner = block.inner(rect);
        block.render(rect, buf);
        inner
    } else {
        rect
    };

    draw_centered(
        buf,
        label_area,
        &value.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.slot_label)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    );
}
