//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`app`]** — application state and the P/O/Q event loop
//! - **[`scene`]** — per-frame scene description, the [`Screen`] surface trait
//!   and the widget that draws a scene
//! - **[`panes`]** — stateless render functions for each part of the canvas
//! - **[`geometry`]** — the 800×600 logical canvas layout
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a screen, a key
//! source and a clock, then call [`App::run`].
//!
//! [`Screen`]: scene::Screen
//! [`App::run`]: app::App::run

pub mod app;
pub mod geometry;
pub mod panes;
pub mod scene;
pub mod theme;

pub use app::App;
