//! Frame clock used to pace animations and message dwell times

use std::time::Duration;

/// Blocks the (single) UI thread for a fixed duration
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock sleeping
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Clock that only records how long it was asked to sleep
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    pub elapsed: Duration,
    pub sleeps: Vec<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for ManualClock {
    fn sleep(&mut self, duration: Duration) {
        self.elapsed += duration;
        self.sleeps.push(duration);
    }
}
