//! Push and pop animations
//!
//! A push animates first and commits afterwards, so the box travels down
//! into an empty slot. A pop commits first, so the box travels up while the
//! remaining stack is drawn without it. Once started, an animation always runs
//! to completion.

use crate::clock::Clock;
use crate::config::TimingConfig;
use crate::store::{Stack, StackError};
use crate::ui::geometry::{ITEM_HEIGHT, slot_top};
use crate::ui::scene::{MovingBox, Overlay, Scene, Screen};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

pub const FULL_MESSAGE: &str = "Can't push - Stack is full!";
pub const EMPTY_MESSAGE: &str = "Can't pop - Stack is empty!";

/// How an animated operation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pushed(i32),
    Popped(i32),
    Rejected(StackError),
}

/// Frame positions of a pushed box: from the top of the canvas down to,
/// but not including, `target`
pub fn push_path(target: i32, step: i32) -> impl Iterator<Item = i32> {
    (0..target).step_by(step.max(1) as usize)
}

/// Frame positions of a popped box: from `start` upward until it has left
/// the canvas completely
pub fn pop_path(start: i32, step: i32) -> impl Iterator<Item = i32> {
    let step = step.max(1);
    std::iter::successors(Some(start), move |y| Some(y - step)).take_while(|y| *y >= -ITEM_HEIGHT)
}

/// Drives one animated operation against a screen and a clock
pub struct Animator<'a, S: Screen, C: Clock> {
    screen: &'a mut S,
    clock: &'a mut C,
    timing: &'a TimingConfig,
}

impl<'a, S: Screen, C: Clock> Animator<'a, S, C> {
    pub fn new(screen: &'a mut S, clock: &'a mut C, timing: &'a TimingConfig) -> Self {
        Animator {
            screen,
            clock,
            timing,
        }
    }

    /// Slide `value` into the next free slot, then push it
    pub fn push(&mut self, stack: &mut Stack, value: i32) -> io::Result<Outcome> {
        if stack.is_full() {
            warn!(value, "push rejected, stack full");
            self.notify(stack, FULL_MESSAGE, self.timing.failure_dwell())?;
            return Ok(Outcome::Rejected(StackError::Full));
        }

        let slot = stack.len();
        for y in push_path(slot_top(slot), self.timing.step_px) {
            self.frame(stack, MovingBox { y, value, slot })?;
        }

        // Capacity was checked above and `stack` has been exclusively borrowed since
        let _ = stack.push(value);
        info!(value, count = stack.len(), "pushed");
        self.notify(
            stack,
            &format!("Pushed: {}", value),
            self.timing.message_dwell(),
        )?;
        Ok(Outcome::Pushed(value))
    }

    /// Pop the top value, then slide it out through the top
    pub fn pop(&mut self, stack: &mut Stack) -> io::Result<Outcome> {
        let value = match stack.pop() {
            Ok(value) => value,
            Err(e) => {
                warn!("pop rejected, stack empty");
                self.notify(stack, EMPTY_MESSAGE, self.timing.failure_dwell())?;
                return Ok(Outcome::Rejected(e));
            }
        };
        info!(value, count = stack.len(), "popped");

        let slot = stack.len();
        for y in pop_path(slot_top(slot), self.timing.step_px) {
            self.frame(stack, MovingBox { y, value, slot })?;
        }

        self.notify(
            stack,
            &format!("Popped: {}", value),
            self.timing.message_dwell(),
        )?;
        Ok(Outcome::Popped(value))
    }

    /// Show `message` over the board and hold it for `dwell`
    pub fn notify(&mut self, stack: &Stack, message: &str, dwell: Duration) -> io::Result<()> {
        self.screen.show(&Scene::message(stack, message))?;
        self.clock.sleep(dwell);
        Ok(())
    }

    fn frame(&mut self, stack: &Stack, moving: MovingBox) -> io::Result<()> {
        self.screen.show(&Scene::Board {
            stack,
            overlay: Overlay::Moving(moving),
        })?;
        self.clock.sleep(self.timing.frame_delay());
        Ok(())
    }
}
