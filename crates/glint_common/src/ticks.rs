//! Integer tick budgeting against a fixed reference clock.
//!
//! Every synchronous design in this workspace slows a fast reference clock
//! down to a human-visible event rate the same way: derive a countdown
//! threshold from the two frequencies, count clock ticks up to it, fire the
//! event, reset. This module owns that derivation and its validity checks.

use crate::frequency::Frequency;

/// Errors produced when a tick budget cannot be derived.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TickBudgetError {
    /// The reference clock frequency is zero, negative, or not finite.
    #[error("reference clock must be a positive frequency, got {0}")]
    InvalidClock(Frequency),

    /// The event rate is zero, negative, or not finite.
    #[error("event rate must be a positive frequency, got {0}")]
    InvalidRate(Frequency),

    /// The event rate is too fast for the clock: fewer than one full clock
    /// tick fits into half an event period.
    #[error("rate {rate} too fast for clock {clock} (needs clock/rate >= 2)")]
    RateTooFast {
        /// The reference clock frequency.
        clock: Frequency,
        /// The requested event rate.
        rate: Frequency,
    },
}

/// Derives the toggle threshold for an event at `rate` under `clock`.
///
/// Returns `floor(clock / (2 * rate)) - 1`: the value a free-running
/// counter, incremented once per clock tick from zero, must reach before
/// the event fires and the counter resets. The event therefore fires once
/// every `threshold + 1 = floor(clock / (2 * rate))` ticks, i.e. at twice
/// `rate` — one firing per half period, which is what a toggled output
/// line needs to blink at `rate`.
///
/// Fails when either frequency is non-positive, or when the budget would
/// be negative (`clock / (2 * rate) < 1`).
pub fn toggle_interval(clock: Frequency, rate: Frequency) -> Result<u64, TickBudgetError> {
    if !clock.is_positive() {
        return Err(TickBudgetError::InvalidClock(clock));
    }
    if !rate.is_positive() {
        return Err(TickBudgetError::InvalidRate(rate));
    }
    let budget = (clock.hz() / (2.0 * rate.hz())).floor();
    if budget < 1.0 {
        return Err(TickBudgetError::RateTooFast { clock, rate });
    }
    Ok(budget as u64 - 1)
}
