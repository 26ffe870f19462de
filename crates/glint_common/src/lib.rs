//! Shared foundational types for the Glint gateware examples.
//!
//! This crate provides the frequency value type used everywhere a clock or
//! event rate is configured, and the integer tick-budget math that every
//! synchronous design in the workspace derives its countdowns from.

#![warn(missing_docs)]

pub mod frequency;
pub mod ticks;

pub use frequency::{Frequency, ParseFrequencyError};
pub use ticks::{toggle_interval, TickBudgetError};
