//! Multiplexed digit display controller.
//!
//! Drives a bank of N seven-segment digits that share one set of segment
//! lines. One digit is selected at a time; the selection advances fast
//! enough (typically 60-250 Hz) that the eye sees every digit lit at once.
//! Each digit shows one 4-bit nibble of an externally supplied value,
//! decoded through a [`GlyphTable`]; nibble 0 (least significant) belongs
//! to digit 0.

use glint_common::Frequency;

use crate::divider::ClockDivider;
use crate::error::LogicError;
use crate::glyph::{GlyphTable, Segments};
use crate::Synchronous;

/// When the segment lines are recomputed from the sampled value.
///
/// The reference two-digit design decodes unconditionally on every tick.
/// An N-digit generalization may instead gate the decode to the digit
/// advance edge, leaving the lines held in between; value updates then
/// only become visible at the next advance. Both behaviors are offered
/// because the reference leaves the choice open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DriveMode {
    /// Re-sample and decode the value on every tick (reference behavior).
    #[default]
    EveryTick,
    /// Decode only when the active digit advances; lines hold in between.
    OnAdvance,
}

/// Output lines of the controller after one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayFrame {
    /// The seven shared segment lines.
    pub segments: Segments,
    /// Index of the digit currently selected (0 = least significant).
    pub select: u8,
    /// Whether this tick was a digit-advance edge.
    pub advanced: bool,
}

impl DisplayFrame {
    /// The select lines in one-hot form, bit `select` set.
    pub fn select_one_hot(&self) -> u32 {
        1 << self.select
    }
}

/// Time-multiplexed refresh for a bank of N seven-segment digits.
///
/// The controller owns a refresh [`ClockDivider`] and the active-digit
/// index; it reads the display value (passed into each tick), never writes
/// it, and has exclusive ownership of the segment and select outputs.
#[derive(Debug, Clone)]
pub struct DisplayController {
    divider: ClockDivider,
    digits: u32,
    active_digit: u32,
    mode: DriveMode,
    table: GlyphTable,
    segments: Segments,
}

impl DisplayController {
    /// Builds a controller for `digits` multiplexed positions refreshed at
    /// `refresh` under `clock`, displaying a value `value_width` bits wide.
    ///
    /// Fails fast, producing no controller, when the refresh budget is
    /// negative ([`LogicError::InvalidRefreshRate`]), the digit count is
    /// zero or above 16 ([`LogicError::InvalidDigitCount`]), or the value
    /// width cannot cover the digits or exceeds 64 bits
    /// ([`LogicError::ValueWidthMismatch`]).
    ///
    /// Defaults: active-low hex glyphs, [`DriveMode::EveryTick`].
    pub fn new(
        clock: Frequency,
        refresh: Frequency,
        digits: u32,
        value_width: u32,
    ) -> Result<Self, LogicError> {
        if digits == 0 || digits > 16 {
            return Err(LogicError::InvalidDigitCount(digits));
        }
        let needed = digits * 4;
        if value_width < needed || value_width > 64 {
            return Err(LogicError::ValueWidthMismatch {
                width: value_width,
                digits,
                needed,
            });
        }
        let divider =
            ClockDivider::from_rate(clock, refresh).map_err(LogicError::InvalidRefreshRate)?;
        Ok(Self {
            divider,
            digits,
            active_digit: 0,
            mode: DriveMode::EveryTick,
            table: GlyphTable::hex(),
            // Lines released until the first tick drives them.
            segments: Segments::all(),
        })
    }

    /// Replaces the drive policy.
    pub fn with_drive_mode(mut self, mode: DriveMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the glyph table (e.g. with a complemented one for
    /// active-high hardware).
    pub fn with_table(mut self, table: GlyphTable) -> Self {
        self.table = table;
        self
    }

    /// The number of multiplexed digits.
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Ticks between digit advances, `floor(clock / (2 * refresh))`.
    pub fn refresh_interval(&self) -> u64 {
        self.divider.interval()
    }

    /// The nibble of `value` shown on digit `index`.
    fn nibble(value: u64, index: u32) -> u8 {
        ((value >> (4 * index)) & 0xf) as u8
    }
}

impl Synchronous for DisplayController {
    /// The externally supplied display value, sampled whole once per tick.
    type Input = u64;
    type Output = DisplayFrame;

    fn tick(&mut self, value: u64) -> DisplayFrame {
        let advanced = self.divider.tick();
        if advanced {
            // Select the new digit on the advance edge itself.
            self.active_digit = (self.active_digit + 1) % self.digits;
        }
        if advanced || self.mode == DriveMode::EveryTick {
            self.segments = self
                .table
                .decode_nibble(Self::nibble(value, self.active_digit));
        }
        DisplayFrame {
            segments: self.segments,
            select: self.active_digit as u8,
            advanced,
        }
    }
}
