//! Board profiles for the Glint gateware examples.
//!
//! A board profile is configuration data, never behavior: the system clock
//! source, named single-ended pins, and named connectors (ordered pin
//! lists such as PMOD ports), deserialized from a TOML file. The logic
//! cores know nothing about pins; profiles exist so the demos can be
//! parameterized by a board's clock and wiring without hard-coding either.
//!
//! Pin constraints, I/O voltage handling, and bit-stream builds belong to
//! an external toolchain and are deliberately absent here.

#![warn(missing_docs)]

pub mod builtin;
pub mod error;
pub mod loader;
pub mod types;

pub use builtin::{builtin_names, builtin_profile};
pub use error::BoardError;
pub use loader::{load_profile, load_profile_from_str, resolve_profile};
pub use types::{BoardMeta, BoardProfile, ClockSource, PinAssignment};
