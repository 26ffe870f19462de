//! Board profile types deserialized from TOML.

use std::collections::BTreeMap;

use glint_common::Frequency;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// A complete board description: identity, clock source, pins, connectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardProfile {
    /// Board identity.
    pub board: BoardMeta,
    /// The system clock source driving all synchronous logic.
    pub clock: ClockSource,
    /// Named single-ended pins (LEDs, buttons).
    #[serde(default)]
    pub pins: BTreeMap<String, PinAssignment>,
    /// Named connectors: ordered pin lists, e.g. PMOD ports.
    #[serde(default)]
    pub connectors: BTreeMap<String, Vec<String>>,
}

/// Board identity fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardMeta {
    /// The board name, e.g. "icebreaker-bitsy".
    pub name: String,
    /// A short human-readable description.
    #[serde(default)]
    pub description: String,
    /// The FPGA part fitted to the board, informational only.
    #[serde(default)]
    pub device: Option<String>,
}

/// The fixed-frequency clock source a board provides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockSource {
    /// The clock frequency as a string (e.g. "12MHz"), parsed through
    /// [`Frequency`].
    pub frequency: String,
    /// The physical pin the clock arrives on.
    pub pin: String,
    /// The I/O standard of the clock pin.
    #[serde(default = "default_io_standard")]
    pub io_standard: String,
}

/// A single pin assignment mapping a signal name to a physical pin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinAssignment {
    /// The physical pin identifier.
    pub pin: String,
    /// The I/O standard (e.g. "LVCMOS33").
    #[serde(default = "default_io_standard")]
    pub io_standard: String,
}

fn default_io_standard() -> String {
    "LVCMOS33".to_string()
}

impl BoardProfile {
    /// The parsed system clock frequency.
    pub fn clock_frequency(&self) -> Result<Frequency, BoardError> {
        let freq: Frequency = self
            .clock
            .frequency
            .parse()
            .map_err(|e| BoardError::Invalid(format!("clock frequency: {e}")))?;
        if !freq.is_positive() {
            return Err(BoardError::Invalid(format!(
                "clock frequency must be positive, got {freq}"
            )));
        }
        Ok(freq)
    }

    /// Serializes the profile back to TOML.
    pub fn to_toml(&self) -> Result<String, BoardError> {
        toml::to_string_pretty(self).map_err(|e| BoardError::Invalid(e.to_string()))
    }
}
