//! Tick-accurate bench harness for the Glint logic cores.
//!
//! A [`Bench`] steps a [`Synchronous`](glint_logic::Synchronous) design
//! one clock edge at a time, mapping tick counts to wall-clock
//! nanoseconds through the clock frequency. A [`TraceSink`] records named
//! output lines; [`VcdTrace`] writes them as a Value Change Dump viewable
//! in GTKWave or Surfer.
//!
//! There is no event queue and no delta cycling: the designs under test
//! are single-clock synchronous machines, so one loop iteration per tick
//! is the whole scheduling model.

#![warn(missing_docs)]

pub mod bench;
pub mod error;
pub mod trace;

pub use bench::{ticks_in, Bench};
pub use error::SimError;
pub use trace::{LineId, TraceSink, VcdTrace};
