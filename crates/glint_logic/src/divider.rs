//! The divide-by-n clock divider shared by every core.
//!
//! A free-running counter increments once per clock tick and rolls over
//! when it reaches a precomputed threshold. The rollover is the slow event
//! (an LED toggle, a digit advance, a count step); the threshold comes
//! from the tick-budget law in [`glint_common::ticks`].

use glint_common::{ticks, Frequency, TickBudgetError};

/// A free-running counter that fires once every `threshold + 1` ticks.
#[derive(Debug, Clone)]
pub struct ClockDivider {
    threshold: u64,
    count: u64,
}

impl ClockDivider {
    /// Builds a divider that fires at twice `rate` under `clock`, which is
    /// what a line toggled on every firing needs to oscillate at `rate`.
    pub fn from_rate(clock: Frequency, rate: Frequency) -> Result<Self, TickBudgetError> {
        Ok(Self::from_threshold(ticks::toggle_interval(clock, rate)?))
    }

    /// Builds a divider directly from a rollover threshold.
    pub fn from_threshold(threshold: u64) -> Self {
        Self {
            threshold,
            count: 0,
        }
    }

    /// The counter value at which the divider fires and resets.
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// The number of ticks between firings, `threshold + 1`.
    pub fn interval(&self) -> u64 {
        self.threshold + 1
    }

    /// Advances the counter by one tick. Returns `true` on rollover.
    pub fn tick(&mut self) -> bool {
        if self.count == self.threshold {
            self.count = 0;
            true
        } else {
            self.count += 1;
            false
        }
    }
}
