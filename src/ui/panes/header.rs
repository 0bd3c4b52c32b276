//! Title, operation list and the transient message line

use super::utils::{Projection, draw_centered, draw_text};
use crate::ui::geometry::SCREEN_WIDTH;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
};

pub const TITLE: &str = "STACK VISUALIZER";

const INSTRUCTIONS: [(i32, &str); 4] = [
    (70, "Operations:"),
    (90, "1.Press 'P' to push"),
    (110, "2.Press 'O' to pop"),
    (130, "3.Press 'Q' to quit"),
];

const TEXT_X: i32 = 50;
const MESSAGE_Y: i32 = 50;

/// Render the header; `message` is shown for this frame only
pub fn render_header(buf: &mut Buffer, proj: &Projection, message: Option<&str>) {
    if let Some(bounds) = proj.rect(0, 20, SCREEN_WIDTH, 30) {
        draw_centered(
            buf,
            bounds,
            TITLE,
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        );
    }

    let style = Style::default().fg(DEFAULT_THEME.fg);
    for (y, line) in INSTRUCTIONS {
        draw_text(buf, proj, TEXT_X, y, line, style);
    }

    if let Some(message) = message.filter(|m| !m.is_empty()) {
        draw_text(
            buf,
            proj,
            TEXT_X,
            MESSAGE_Y,
            message,
            Style::default().fg(DEFAULT_THEME.message),
        );
    }
}
