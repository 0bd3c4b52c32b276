//! Keyboard input
//!
//! - [`Key`]: the handful of keys the visualizer reacts to
//! - [`KeySource`]: non-blocking poll (menu) and blocking read (value entry)
//! - [`CrosstermKeys`]: the real terminal
//! - [`ScriptedKeys`]: a fixed key sequence, for headless runs and tests
//! - [`menu`]: P/O/Q dispatch
//! - [`entry`]: the push value entry loop

pub mod entry;
pub mod menu;

pub use entry::{Entry, EntryStep, ValueEntry, read_value};
pub use menu::MenuCommand;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// A key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Enter,
    Esc,
    Other,
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        match event.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            _ => Key::Other,
        }
    }
}

/// Classic console key codes: CR, BS, DEL and ESC map to their keys
impl From<char> for Key {
    fn from(c: char) -> Self {
        match c {
            '\r' | '\n' => Key::Enter,
            '\x08' => Key::Backspace,
            '\x7f' => Key::Delete,
            '\x1b' => Key::Esc,
            c if c.is_control() => Key::Other,
            c => Key::Char(c),
        }
    }
}

/// Where key presses come from
pub trait KeySource {
    /// Wait at most `timeout` for a key press
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>>;

    /// Block until a key is pressed
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Key presses from the crossterm event stream
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        if event::poll(timeout)? {
            // Only count presses (release/repeat events show up on some platforms)
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(Key::from(key)));
                }
            }
        }
        Ok(None)
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Key::from(key));
                }
            }
        }
    }
}

/// Replays a fixed sequence of keys
///
/// Running out of keys is reported as `UnexpectedEof` so a script that never
/// quits cannot spin forever.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        ScriptedKeys {
            keys: keys.into_iter().collect(),
        }
    }

    /// Script from typed text, see `From<char> for Key` for control codes
    pub fn typed(text: &str) -> Self {
        Self::new(text.chars().map(Key::from))
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    fn next_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self, _timeout: Duration) -> io::Result<Option<Key>> {
        self.next_key().map(Some)
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.next_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_key_from_event() {
        let event = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
        assert_eq!(Key::from(event), Key::Char('p'));

        let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(Key::from(event), Key::Esc);

        let event = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(Key::from(event), Key::Other);
    }

    #[test]
    fn test_key_from_console_codes() {
        assert_eq!(Key::from('\r'), Key::Enter);
        assert_eq!(Key::from('\x08'), Key::Backspace);
        assert_eq!(Key::from('\x7f'), Key::Delete);
        assert_eq!(Key::from('\x1b'), Key::Esc);
        assert_eq!(Key::from('\t'), Key::Other);
        assert_eq!(Key::from('7'), Key::Char('7'));
    }

    #[test]
    fn test_scripted_keys_run_out() {
        let mut keys = ScriptedKeys::typed("p\r");
        assert_eq!(keys.poll_key(Duration::ZERO).unwrap(), Some(Key::Char('p')));
        assert_eq!(keys.read_key().unwrap(), Key::Enter);
        assert_eq!(keys.remaining(), 0);

        let err = keys.read_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
