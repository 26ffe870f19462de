//! Built-in board profiles.

use crate::error::BoardError;
use crate::loader::load_profile_from_str;
use crate::types::BoardProfile;

/// The 1BitSquared iCEBreaker-bitsy, the board the reference designs ran
/// on: 12 MHz clock, two user LEDs, one user button, two 8-line PMOD
/// connectors.
const ICEBREAKER_BITSY: &str = r#"
[board]
name = "icebreaker-bitsy"
description = "1BitSquared iCEBreaker-bitsy"
device = "ice40-up5k-sg48"

[clock]
frequency = "12MHz"
pin = "35"
io_standard = "LVCMOS33"

[pins.led_red]
pin = "25"
io_standard = "LVCMOS33"

[pins.led_green]
pin = "6"
io_standard = "LVCMOS33"

[pins.button]
pin = "2"
io_standard = "LVCMOS33"

[connectors]
PMOD1 = ["43", "38", "34", "31", "42", "36", "32", "28"]
PMOD2 = ["20", "10", "47", "45", "12", "21", "48", "46"]
"#;

/// Names of all built-in profiles.
pub fn builtin_names() -> Vec<&'static str> {
    vec!["icebreaker-bitsy"]
}

/// Loads a built-in profile by name.
pub fn builtin_profile(name: &str) -> Result<BoardProfile, BoardError> {
    match name {
        "icebreaker-bitsy" => load_profile_from_str(ICEBREAKER_BITSY),
        other => Err(BoardError::UnknownBoard(other.to_string())),
    }
}
