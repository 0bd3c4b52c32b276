//! Logical canvas geometry
//!
//! All layout and animation math happens on an 800×600 logical canvas; the
//! renderer projects it onto whatever cell grid the terminal offers.

use crate::store::CAPACITY;

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;

pub const ITEM_WIDTH: i32 = 300;
pub const ITEM_HEIGHT: i32 = 40;

/// Top-left corner of the container
pub const STACK_X: i32 = 250;
pub const STACK_Y: i32 = 150;

pub const CONTAINER_HEIGHT: i32 = CAPACITY as i32 * ITEM_HEIGHT;

/// Smallest terminal the board is drawn on. Below 30 rows the header lines
/// share rows; below 76 columns the entry prompt runs into the operation list.
pub const MIN_COLS: u16 = 80;
pub const MIN_ROWS: u16 = 30;

/// Top edge of slot `index` (0 = bottom of the stack)
pub fn slot_top(index: usize) -> i32 {
    STACK_Y + CONTAINER_HEIGHT - (index as i32 + 1) * ITEM_HEIGHT
}
