//! # Introduction
//!
//! stackviz is a teaching demo: a ten-slot integer stack drawn as a column of
//! colored boxes in the terminal. `P` pushes a value typed by the user, `O`
//! pops the top, `Q` quits; every push and pop is animated.
//!
//! ## Layout
//!
//! 1. [`store`] — the bounded stack itself.
//! 2. [`input`] — key sources, menu dispatch and push value entry.
//! 3. [`animation`] — push/pop animations paced by a [`clock::Clock`].
//! 4. [`ui`] — ratatui rendering and the main loop.
//! 5. [`config`] / [`logging`] — optional TOML config and file logging.
//!
//! Nothing here touches global state: the [`ui::App`] owns the stack and
//! receives its screen, key source and clock from the caller, so the whole loop
//! runs headless under test.

use std::fmt;

pub mod animation;
pub mod clock;
pub mod config;
pub mod input;
pub mod logging;
pub mod store;
pub mod ui;

pub const APP_NAME: &str = "stackviz";

/// Errors surfaced to `main`
#[derive(Debug)]
pub enum Error {
    /// Terminal or file I/O failed
    Io(std::io::Error),
    /// Configuration file or logging setup is invalid
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
