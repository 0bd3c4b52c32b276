//! Fill level line below the container

use super::utils::{Projection, draw_text};
use crate::store::Stack;
use crate::ui::geometry::{CONTAINER_HEIGHT, STACK_Y};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{buffer::Buffer, style::Style};

/// `Items: n/10`, with `(Empty)` / `(Full)` suffixes
pub fn status_text(stack: &Stack) -> String {
    let mut status = format!("Items: {}/{}", stack.len(), stack.capacity());
    if stack.is_empty() {
        status.push_str(" (Empty)");
    }
    if stack.is_full() {
        status.push_str(" (Full)");
    }
    status
}

pub fn render_status(buf: &mut Buffer, proj: &Projection, stack: &Stack) {
    draw_text(
        buf,
        proj,
        50,
        STACK_Y + CONTAINER_HEIGHT + 30,
        &status_text(stack),
        Style::default().fg(DEFAULT_THEME.fg),
    );
}
