//! Construction-time error types for the logic cores.
//!
//! A constructed core has no runtime failure path — its tick function is
//! total over the state space — so every variant here is detected once,
//! before the first tick, and prevents the core from being built at all.

use glint_common::TickBudgetError;

/// Errors rejected when a logic core is constructed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LogicError {
    /// The display refresh rate cannot be budgeted against the clock.
    #[error("invalid refresh rate: {0}")]
    InvalidRefreshRate(TickBudgetError),

    /// A blink, step, or count rate cannot be budgeted against the clock.
    #[error("invalid event rate: {0}")]
    InvalidRate(TickBudgetError),

    /// The digit count is outside the supported range.
    #[error("digit count must be between 1 and 16, got {0}")]
    InvalidDigitCount(u32),

    /// The display value is too narrow (or too wide) for the digit count.
    /// Silently truncating high digits is never acceptable.
    #[error("value width {width} cannot cover {digits} digits (need {needed}..=64 bits)")]
    ValueWidthMismatch {
        /// The declared width of the supplied display value, in bits.
        width: u32,
        /// The number of multiplexed digits.
        digits: u32,
        /// The minimum width required, `4 * digits`.
        needed: u32,
    },

    /// The chaser lane count is outside the supported range.
    #[error("lane count must be between 2 and 32, got {0}")]
    InvalidLaneCount(u32),

    /// A glyph table entry does not fit in seven segment lines.
    #[error("glyph table entry {index} is {value:#04x}, wider than 7 segments")]
    GlyphOutOfRange {
        /// Index of the offending entry.
        index: usize,
        /// The out-of-range entry value.
        value: u8,
    },

    /// A digit value outside 0x0..=0xF was given to the glyph decoder.
    #[error("digit value {0:#x} has no glyph (table covers 0x0..=0xf)")]
    DigitOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_common::Frequency;

    #[test]
    fn refresh_rate_display() {
        let e = LogicError::InvalidRefreshRate(TickBudgetError::RateTooFast {
            clock: Frequency::from_hz(100.0),
            rate: Frequency::from_hz(90.0),
        });
        assert_eq!(
            e.to_string(),
            "invalid refresh rate: rate 90Hz too fast for clock 100Hz (needs clock/rate >= 2)"
        );
    }

    #[test]
    fn digit_count_display() {
        let e = LogicError::InvalidDigitCount(0);
        assert_eq!(e.to_string(), "digit count must be between 1 and 16, got 0");
    }

    #[test]
    fn width_mismatch_display() {
        let e = LogicError::ValueWidthMismatch {
            width: 4,
            digits: 2,
            needed: 8,
        };
        assert_eq!(
            e.to_string(),
            "value width 4 cannot cover 2 digits (need 8..=64 bits)"
        );
    }

    #[test]
    fn lane_count_display() {
        let e = LogicError::InvalidLaneCount(1);
        assert_eq!(e.to_string(), "lane count must be between 2 and 32, got 1");
    }

    #[test]
    fn glyph_out_of_range_display() {
        let e = LogicError::GlyphOutOfRange {
            index: 3,
            value: 0x80,
        };
        assert_eq!(
            e.to_string(),
            "glyph table entry 3 is 0x80, wider than 7 segments"
        );
    }

    #[test]
    fn digit_out_of_range_display() {
        let e = LogicError::DigitOutOfRange(0x1f);
        assert_eq!(
            e.to_string(),
            "digit value 0x1f has no glyph (table covers 0x0..=0xf)"
        );
    }
}
