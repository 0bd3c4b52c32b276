//! Push value entry overlay

use super::utils::{Projection, draw_text};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
};

pub const ENTRY_TITLE: &str = "PUSH OPERATION";
pub const ENTRY_PROMPT: &str = "Enter value to push (1-999): ";

/// Render the entry title, the prompt and the digits typed so far
pub fn render_entry_prompt(buf: &mut Buffer, proj: &Projection, typed: &str) {
    draw_text(
        buf,
        proj,
        350,
        50,
        ENTRY_TITLE,
        Style::default()
            .fg(DEFAULT_THEME.prompt_title)
            .add_modifier(Modifier::BOLD),
    );

    let style = Style::default().fg(DEFAULT_THEME.fg);
    // The typed digits follow the prompt directly
    if let Some(end) = draw_text(buf, proj, 250, 75, ENTRY_PROMPT, style) {
        if let Some((_, row)) = proj.point(250, 75) {
            let room = proj.area().right().saturating_sub(end) as usize;
            buf.set_stringn(end, row, typed, room, style.add_modifier(Modifier::BOLD));
        }
    }
}
