//! Render routines for each part of the canvas
//!
//! # Pane Modules
//!
//! - [`header`]: title, operation list, transient message
//! - [`board`]: container outline, slot boxes, the moving box
//! - [`prompt`]: push value entry overlay
//! - [`status`]: `Items: n/10` line
//! - [`farewell`]: shutdown screen
//! - [`utils`]: logical-to-cell projection and centered text
//!
//! Every routine takes the target [`Buffer`](ratatui::buffer::Buffer) and a
//! [`utils::Projection`]; positions are given on the 800×600 logical canvas.

pub mod board;
pub mod farewell;
pub mod header;
pub mod prompt;
pub mod status;
pub mod utils;

pub use board::{render_board, render_slot_box};
pub use farewell::{FAREWELL_MESSAGE, render_farewell};
pub use header::{TITLE, render_header};
pub use prompt::{ENTRY_PROMPT, ENTRY_TITLE, render_entry_prompt};
pub use status::{render_status, status_text};
pub use utils::{Projection, centered_text_rect};
