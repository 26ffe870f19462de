//! Synchronous logic cores for the Glint gateware examples.
//!
//! Each type in this crate models one small register-transfer-level design
//! as an explicit state machine: a state struct, updated exactly once per
//! clock tick by [`Synchronous::tick`], with outputs derived from the
//! post-tick state. That preserves the hardware discipline the designs
//! were written under — one global tick at a time, every "current value"
//! read observing the pre-tick snapshot, no suspension and no runtime
//! error path. All failure conditions are structural and are rejected at
//! construction, before the first tick.
//!
//! # Cores
//!
//! - [`ClockDivider`] — the divide-by-n countdown every design is built on
//! - [`Blinker`] — LED toggle with a button-controlled companion line
//! - [`Chaser`] — a lamp bouncing across a row of lanes
//! - [`BcdCounter`] — packed binary-coded-decimal up counter
//! - [`DisplayController`] — N-digit multiplexed seven-segment refresh

#![warn(missing_docs)]

pub mod blinker;
pub mod chaser;
pub mod counter;
pub mod display;
pub mod divider;
pub mod error;
pub mod glyph;

pub use blinker::{BlinkFrame, Blinker};
pub use chaser::Chaser;
pub use counter::{BcdCounter, BcdFrame};
pub use display::{DisplayController, DisplayFrame, DriveMode};
pub use divider::ClockDivider;
pub use error::LogicError;
pub use glyph::{GlyphTable, Segments};

/// A synchronous design driven by an external fixed-frequency clock.
///
/// One call to [`tick`](Synchronous::tick) corresponds to one clock edge.
/// The implementation must compute its next state from the pre-tick state
/// and the sampled input, commit it, and return the output lines as they
/// stand after the edge. Implementations never fail at runtime; anything
/// that could go wrong is checked when the design is constructed.
pub trait Synchronous {
    /// Input lines sampled once at the start of the tick.
    type Input;
    /// Output lines as driven after the tick.
    type Output;

    /// Advances the design by one clock tick.
    fn tick(&mut self, input: Self::Input) -> Self::Output;
}
