//! Push value entry
//!
//! Up to three digits are collected into a buffer. Enter only finishes the
//! entry when the buffer holds a value in `1..=999`; otherwise it keeps waiting
//! without complaint. Escape cancels at any point.

use super::{Key, KeySource};
use crate::store::Stack;
use crate::ui::scene::{Overlay, Scene, Screen};
use std::io;

pub const MAX_DIGITS: usize = 3;
pub const MIN_VALUE: i32 = 1;
pub const MAX_VALUE: i32 = 999;

/// Result of a finished entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Value(i32),
    Cancelled,
}

/// What a single key did to the entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStep {
    Pending,
    Done(Entry),
}

/// Text buffer of an entry in progress
#[derive(Debug, Default, Clone)]
pub struct ValueEntry {
    buffer: String,
}

impl ValueEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Digits typed so far
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn handle(&mut self, key: Key) -> EntryStep {
        match key {
            Key::Char(c) if c.is_ascii_digit() => {
                if self.buffer.len() < MAX_DIGITS {
                    self.buffer.push(c);
                }
                EntryStep::Pending
            }
            Key::Backspace | Key::Delete => {
                self.buffer.pop();
                EntryStep::Pending
            }
            Key::Enter => match self.buffer.parse::<i32>() {
                Ok(value) if (MIN_VALUE..=MAX_VALUE).contains(&value) => {
                    EntryStep::Done(Entry::Value(value))
                }
                _ => EntryStep::Pending,
            },
            Key::Esc => EntryStep::Done(Entry::Cancelled),
            Key::Char(_) | Key::Other => EntryStep::Pending,
        }
    }
}

/// Run the entry loop, redrawing the prompt before every key
pub fn read_value<K: KeySource, S: Screen>(
    keys: &mut K,
    screen: &mut S,
    stack: &Stack,
) -> io::Result<Entry> {
    let mut entry = ValueEntry::new();
    loop {
        screen.show(&Scene::Board {
            stack,
            overlay: Overlay::Entry(entry.text()),
        })?;

        if let EntryStep::Done(result) = entry.handle(keys.read_key()?) {
            tracing::debug!(?result, "value entry finished");
            return Ok(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedKeys;
    use crate::ui::scene::{SceneRecorder, Shot};

    fn feed(entry: &mut ValueEntry, text: &str) -> EntryStep {
        let mut last = EntryStep::Pending;
        for c in text.chars() {
            last = entry.handle(Key::from(c));
        }
        last
    }

    #[test]
    fn test_fourth_digit_rejected_then_backspace() {
        let mut entry = ValueEntry::new();
        assert_eq!(feed(&mut entry, "1234"), EntryStep::Pending);
        assert_eq!(entry.text(), "123");

        entry.handle(Key::Backspace);
        assert_eq!(entry.text(), "12");
        assert_eq!(entry.handle(Key::Enter), EntryStep::Done(Entry::Value(12)));
    }

    #[test]
    fn test_enter_on_empty_buffer_keeps_waiting() {
        let mut entry = ValueEntry::new();
        assert_eq!(entry.handle(Key::Enter), EntryStep::Pending);
        entry.handle(Key::Backspace);
        assert_eq!(entry.text(), "");
    }

    #[test]
    fn test_zero_is_out_of_range() {
        let mut entry = ValueEntry::new();
        assert_eq!(feed(&mut entry, "000\r"), EntryStep::Pending);
        assert_eq!(feed(&mut entry, "\x7f\x7f\x7f9\r"), EntryStep::Done(Entry::Value(9)));
    }

    #[test]
    fn test_leading_zeros_accepted() {
        let mut entry = ValueEntry::new();
        assert_eq!(feed(&mut entry, "007\r"), EntryStep::Done(Entry::Value(7)));
    }

    #[test]
    fn test_non_digits_ignored() {
        let mut entry = ValueEntry::new();
        feed(&mut entry, "4a-x2");
        assert_eq!(entry.text(), "42");
        assert_eq!(entry.handle(Key::Other), EntryStep::Pending);
    }

    #[test]
    fn test_escape_cancels() {
        let mut entry = ValueEntry::new();
        feed(&mut entry, "99");
        assert_eq!(entry.handle(Key::Esc), EntryStep::Done(Entry::Cancelled));
    }

    #[test]
    fn test_read_value_redraws_each_key() {
        let stack = Stack::new();
        let mut keys = ScriptedKeys::typed("5\x08\r77\r");
        let mut screen = SceneRecorder::default();

        let result = read_value(&mut keys, &mut screen, &stack).unwrap();
        assert_eq!(result, Entry::Value(77));

        let typed: Vec<String> = screen
            .shots
            .iter()
            .filter_map(|shot| match shot {
                Shot::Board { entry, .. } => entry.clone(),
                Shot::Farewell => None,
            })
            .collect();
        assert_eq!(typed, vec!["", "5", "", "", "7", "77"]);
    }

    #[test]
    fn test_read_value_cancel_leaves_stack_alone() {
        let mut stack = Stack::new();
        stack.push(3).unwrap();
        let mut keys = ScriptedKeys::typed("12\x1b");
        let mut screen = SceneRecorder::default();

        let result = read_value(&mut keys, &mut screen, &stack).unwrap();
        assert_eq!(result, Entry::Cancelled);
        assert_eq!(stack.values(), &[3]);
    }
}
