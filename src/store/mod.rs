//! Fixed-capacity integer stack
//!
//! - [`Stack`]: ten slots plus a count, index 0 is the bottom
//! - [`StackError`]: the two capacity violations
//!
//! Values are not range checked here; value entry only ever produces `1..=999`.

use std::fmt;

/// Number of slots in the stack
pub const CAPACITY: usize = 10;

/// Capacity violations reported by [`Stack::push`] and [`Stack::pop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// Push attempted with every slot occupied
    Full,
    /// Pop attempted with no occupied slot
    Empty,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::Full => write!(f, "Stack is full"),
            StackError::Empty => write!(f, "Stack is empty"),
        }
    }
}

impl std::error::Error for StackError {}

/// The stack being visualized
#[derive(Debug, Clone)]
pub struct Stack {
    slots: [i32; CAPACITY],
    count: usize,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            slots: [0; CAPACITY],
            count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == CAPACITY
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Push a value onto the top slot
    pub fn push(&mut self, value: i32) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Full);
        }
        self.slots[self.count] = value;
        self.count += 1;
        Ok(())
    }

    /// Pop the top value
    ///
    /// The vacated slot keeps its old value; it is simply no longer counted.
    pub fn pop(&mut self) -> Result<i32, StackError> {
        if self.is_empty() {
            return Err(StackError::Empty);
        }
        self.count -= 1;
        Ok(self.slots[self.count])
    }

    /// The top value, if any
    pub fn peek(&self) -> Option<i32> {
        self.values().last().copied()
    }

    /// Occupied slots, bottom first
    pub fn values(&self) -> &[i32] {
        &self.slots[..self.count]
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_scenario() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());

        stack.push(5).unwrap();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Some(5));

        stack.push(42).unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some(42));

        assert_eq!(stack.pop(), Ok(42));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Some(5));

        assert_eq!(stack.pop(), Ok(5));
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.peek(), None);

        assert_eq!(stack.pop(), Err(StackError::Empty));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_push_until_full() {
        let mut stack = Stack::new();
        for v in 1..=10 {
            stack.push(v * 7).unwrap();
            assert_eq!(stack.peek(), Some(v * 7));
        }
        assert!(stack.is_full());
        assert_eq!(stack.len(), CAPACITY);

        assert_eq!(stack.push(999), Err(StackError::Full));
        assert_eq!(stack.len(), CAPACITY);
        assert_eq!(stack.peek(), Some(70));
    }

    #[test]
    fn test_values_bottom_up() {
        let mut stack = Stack::new();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();
        stack.pop().unwrap();
        assert_eq!(stack.values(), &[1, 2]);
    }

    #[test]
    fn test_pop_then_push_reuses_slot() {
        let mut stack = Stack::new();
        stack.push(8).unwrap();
        stack.pop().unwrap();
        stack.push(9).unwrap();
        assert_eq!(stack.values(), &[9]);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(StackError::Full.to_string(), "Stack is full");
        assert_eq!(StackError::Empty.to_string(), "Stack is empty");
    }
}
