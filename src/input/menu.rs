//! Main menu key dispatch

use super::Key;

/// Commands available from the idle screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Push,
    Pop,
    Quit,
}

impl MenuCommand {
    /// Case-insensitive `P`/`O`/`Q`; every other key is ignored
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char(c) => match c.to_ascii_uppercase() {
                'P' => Some(MenuCommand::Push),
                'O' => Some(MenuCommand::Pop),
                'Q' => Some(MenuCommand::Quit),
                _ => None,
            },
            _ => None,
        }
    }
}
