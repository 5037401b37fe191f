//! Tick-rate clock.
//!
//! Animations are authored in discrete ticks. Anything that needs real time
//! (markup export, text descriptions) goes through a [`TickRate`], which maps
//! a tick to `tick / rate` seconds.

use crate::error::{TweenError, TweenResult};

/// Ticks per wall-clock second. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRate {
    ticks_per_sec: u32,
}

impl TickRate {
    /// One tick per second.
    pub const ONE: TickRate = TickRate { ticks_per_sec: 1 };

    /// Create a rate, rejecting zero.
    pub fn new(ticks_per_sec: u32) -> TweenResult<Self> {
        if ticks_per_sec == 0 {
            return Err(TweenError::InvalidRate {
                rate: ticks_per_sec,
            });
        }
        Ok(Self { ticks_per_sec })
    }

    /// Raw ticks-per-second value.
    pub fn ticks_per_sec(&self) -> u32 {
        self.ticks_per_sec
    }

    /// Convert a tick to seconds.
    pub fn tick_to_secs(&self, tick: i64) -> f64 {
        tick as f64 / self.ticks_per_sec as f64
    }

    /// Convert a tick to milliseconds (`tick / rate * 1000`).
    pub fn tick_to_ms(&self, tick: i64) -> f64 {
        self.tick_to_secs(tick) * 1000.0
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self::ONE
    }
}
