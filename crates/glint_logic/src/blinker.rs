//! LED blinker with a button-controlled companion line.
//!
//! The red line toggles at the configured blink frequency. The green line
//! is pure combinational logic: while the button is held it is the
//! complement of red, otherwise it mirrors red.

use glint_common::Frequency;

use crate::divider::ClockDivider;
use crate::error::LogicError;
use crate::Synchronous;

/// Output lines of the blinker after one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlinkFrame {
    /// The registered, toggling line.
    pub red: bool,
    /// The combinational companion line.
    pub green: bool,
    /// Whether this tick was a toggle edge.
    pub toggled: bool,
}

/// Toggles one LED at a fixed frequency.
#[derive(Debug, Clone)]
pub struct Blinker {
    divider: ClockDivider,
    red: bool,
}

impl Blinker {
    /// Builds a blinker toggling at `blink` under `clock`. Fails with
    /// [`LogicError::InvalidRate`] when the blink budget is negative.
    pub fn new(clock: Frequency, blink: Frequency) -> Result<Self, LogicError> {
        let divider = ClockDivider::from_rate(clock, blink).map_err(LogicError::InvalidRate)?;
        Ok(Self {
            divider,
            red: false,
        })
    }

    /// Ticks between toggles.
    pub fn toggle_interval(&self) -> u64 {
        self.divider.interval()
    }
}

impl Synchronous for Blinker {
    /// The button level, sampled once per tick.
    type Input = bool;
    type Output = BlinkFrame;

    fn tick(&mut self, button: bool) -> BlinkFrame {
        let toggled = self.divider.tick();
        if toggled {
            self.red = !self.red;
        }
        let green = if button { !self.red } else { self.red };
        BlinkFrame {
            red: self.red,
            green,
            toggled,
        }
    }
}
