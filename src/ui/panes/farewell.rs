//! Goodbye screen shown while shutting down

use super::utils::{Projection, draw_centered};
use crate::ui::geometry::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
};

pub const FAREWELL_MESSAGE: &str = "Thanks for using the Stack Visualizer!";

pub fn render_farewell(buf: &mut Buffer, proj: &Projection) {
    if let Some(bounds) = proj.rect(0, SCREEN_HEIGHT / 2 - 30, SCREEN_WIDTH, 60) {
        draw_centered(
            buf,
            bounds,
            FAREWELL_MESSAGE,
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        );
    }
}
