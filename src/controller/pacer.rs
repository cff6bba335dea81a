//! Frame pacing for synchronous rounds.

use std::time::Duration;

/// Waits between animation frames.
pub trait Pacer {
    fn wait(&mut self, interval: Duration);
}

/// Blocks the current thread for each interval.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// Never waits. For tests and headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn wait(&mut self, _interval: Duration) {}
}

/// Never waits, but adds up how long it was asked to.
#[derive(Clone, Copy, Debug, Default)]
pub struct CountingPacer {
    pub waits: usize,
    pub total: Duration,
}

impl Pacer for CountingPacer {
    fn wait(&mut self, interval: Duration) {
        self.waits += 1;
        self.total += interval;
    }
}
