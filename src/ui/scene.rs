//! What gets drawn each frame, and the surface it is drawn on
//!
//! A [`Scene`] is a complete description of one frame. [`Screen::show`]
//! repaints the whole surface from it; nothing carries over between frames.

use super::geometry::{MIN_COLS, MIN_ROWS};
use super::panes::{self, Projection, utils::draw_centered};
use super::theme::DEFAULT_THEME;
use crate::store::Stack;
use ratatui::{
    Terminal,
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Clear, Widget},
};
use std::io;

/// A box travelling to or from its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingBox {
    /// Logical y of the top edge
    pub y: i32,
    pub value: i32,
    /// Slot the box belongs to, which decides its color
    pub slot: usize,
}

/// Extra content drawn on top of the board for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay<'a> {
    None,
    Message(&'a str),
    /// Value entry in progress with the digits typed so far
    Entry(&'a str),
    Moving(MovingBox),
}

/// One frame
#[derive(Debug, Clone, Copy)]
pub enum Scene<'a> {
    Board { stack: &'a Stack, overlay: Overlay<'a> },
    Farewell,
}

impl<'a> Scene<'a> {
    pub fn board(stack: &'a Stack) -> Self {
        Scene::Board {
            stack,
            overlay: Overlay::None,
        }
    }

    pub fn message(stack: &'a Stack, message: &'a str) -> Self {
        Scene::Board {
            stack,
            overlay: Overlay::Message(message),
        }
    }
}

/// A drawing surface
pub trait Screen {
    /// Clear the surface and draw `scene`
    fn show(&mut self, scene: &Scene<'_>) -> io::Result<()>;
}

impl<B: Backend> Screen for Terminal<B> {
    fn show(&mut self, scene: &Scene<'_>) -> io::Result<()> {
        self.draw(|frame| {
            let area = frame.area();
            frame.render_widget(SceneView::new(*scene), area);
        })?;
        Ok(())
    }
}

/// Widget rendering a [`Scene`]
pub struct SceneView<'a> {
    scene: Scene<'a>,
}

impl<'a> SceneView<'a> {
    pub fn new(scene: Scene<'a>) -> Self {
        SceneView { scene }
    }
}

impl Widget for SceneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        buf.set_style(
            area,
            Style::default().bg(DEFAULT_THEME.bg).fg(DEFAULT_THEME.fg),
        );

        if area.width < MIN_COLS || area.height < MIN_ROWS {
            draw_centered(
                buf,
                area,
                &format!("Terminal too small (need {}x{})", MIN_COLS, MIN_ROWS),
                Style::default().fg(DEFAULT_THEME.comment),
            );
            return;
        }

        let proj = Projection::new(area);
        match self.scene {
            Scene::Farewell => panes::render_farewell(buf, &proj),
            Scene::Board { stack, overlay } => {
                let message = match overlay {
                    Overlay::Message(message) => Some(message),
                    _ => None,
                };
                panes::render_header(buf, &proj, message);
                panes::render_board(buf, &proj, stack);
                panes::render_status(buf, &proj, stack);

                match overlay {
                    Overlay::Entry(typed) => panes::render_entry_prompt(buf, &proj, typed),
                    Overlay::Moving(moving) => {
                        panes::render_slot_box(buf, &proj, moving.y, moving.value, moving.slot)
                    }
                    Overlay::None | Overlay::Message(_) => {}
                }
            }
        }
    }
}

/// Owned copy of a drawn [`Scene`], for asserting on frame sequences
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Shot {
    Board {
        values: Vec<i32>,
        message: Option<String>,
        entry: Option<String>,
        moving: Option<MovingBox>,
    },
    Farewell,
}

/// Screen that records frames instead of drawing them
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct SceneRecorder {
    pub shots: Vec<Shot>,
}

#[cfg(test)]
impl SceneRecorder {
    pub fn moving_frames(&self) -> Vec<MovingBox> {
        self.shots
            .iter()
            .filter_map(|shot| match shot {
                Shot::Board { moving, .. } => *moving,
                Shot::Farewell => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.shots
            .iter()
            .filter_map(|shot| match shot {
                Shot::Board { message, .. } => message.as_deref(),
                Shot::Farewell => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Screen for SceneRecorder {
    fn show(&mut self, scene: &Scene<'_>) -> io::Result<()> {
        let shot = match *scene {
            Scene::Farewell => Shot::Farewell,
            Scene::Board { stack, overlay } => Shot::Board {
                values: stack.values().to_vec(),
                message: match overlay {
                    Overlay::Message(m) => Some(m.to_string()),
                    _ => None,
                },
                entry: match overlay {
                    Overlay::Entry(e) => Some(e.to_string()),
                    _ => None,
                },
                moving: match overlay {
                    Overlay::Moving(m) => Some(m),
                    _ => None,
                },
            },
        };
        self.shots.push(shot);
        Ok(())
    }
}
