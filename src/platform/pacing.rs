//! Tick pacing
//!
//! `speed` is ticks per second; the pacer turns it into deadlines the input
//! poll can wait on.

use std::time::{Duration, Instant};

/// Time between ticks at `speed` ticks per second
pub fn frame_duration(speed: u32) -> Duration {
    Duration::from_secs(1) / speed.max(1)
}

#[derive(Debug, Clone)]
pub struct Pacer {
    next_tick: Instant,
}

impl Pacer {
    /// First tick is due immediately
    pub fn new(now: Instant) -> Self {
        Self { next_tick: now }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    /// How long input polling may block before the next tick
    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Book the next tick one frame after `now`
    pub fn schedule(&mut self, now: Instant, speed: u32) {
        self.next_tick = now + frame_duration(speed);
    }
}
