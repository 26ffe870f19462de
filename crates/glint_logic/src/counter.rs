//! Packed binary-coded-decimal up counter.
//!
//! The count lives in a plain binary register, four bits per decimal
//! digit, and advances with digit-wise carry jumps: a digit at 9 rolls to
//! 0 and carries into the next. A two-digit counter therefore runs 0x00
//! through 0x99 and wraps — exactly what a bank of seven-segment digits
//! wants to display.

use glint_common::Frequency;

use crate::divider::ClockDivider;
use crate::error::LogicError;
use crate::Synchronous;

/// Output of the counter after one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BcdFrame {
    /// The packed BCD count, nibble 0 the ones digit.
    pub value: u64,
    /// High for the single tick on which the count wrapped to zero.
    pub carry: bool,
}

/// Counts up in packed BCD at a fixed rate.
#[derive(Debug, Clone)]
pub struct BcdCounter {
    divider: ClockDivider,
    digits: u32,
    value: u64,
}

impl BcdCounter {
    /// Builds a counter over `digits` decimal digits (1 to 16) stepping at
    /// `rate` counts per second under `clock`.
    pub fn new(clock: Frequency, rate: Frequency, digits: u32) -> Result<Self, LogicError> {
        if digits == 0 || digits > 16 {
            return Err(LogicError::InvalidDigitCount(digits));
        }
        let divider = ClockDivider::from_rate(clock, rate).map_err(LogicError::InvalidRate)?;
        Ok(Self {
            divider,
            digits,
            value: 0,
        })
    }

    /// The current packed BCD count.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Ticks between count steps.
    pub fn count_interval(&self) -> u64 {
        self.divider.interval()
    }
}

impl Synchronous for BcdCounter {
    type Input = ();
    type Output = BcdFrame;

    fn tick(&mut self, _input: ()) -> BcdFrame {
        let mut carry = false;
        if self.divider.tick() {
            (self.value, carry) = bcd_increment(self.value, self.digits);
        }
        BcdFrame {
            value: self.value,
            carry,
        }
    }
}

/// Adds one to a packed BCD value of `digits` digits.
///
/// Each digit at 9 rolls to 0 and carries upward; the second return is
/// `true` when every digit was 9 and the whole count wrapped to zero.
/// This generalizes the reference +0x7 / +0x67 / +0x667 carry jumps to
/// any digit count.
pub fn bcd_increment(value: u64, digits: u32) -> (u64, bool) {
    let mut v = value;
    for i in 0..digits {
        let shift = 4 * i;
        let digit = (v >> shift) & 0xf;
        if digit < 9 {
            return (v + (1u64 << shift), false);
        }
        // 9 rolls to 0, carry continues upward
        v &= !(0xfu64 << shift);
    }
    (v, true)
}
