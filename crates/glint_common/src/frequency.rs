//! Frequency values with unit parsing and display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit suffixes accepted by the parser, largest first.
const UNITS: &[(&str, f64)] = &[("ghz", 1e9), ("mhz", 1e6), ("khz", 1e3), ("hz", 1.0)];

/// A frequency value stored in Hertz.
///
/// Parses from strings like "12MHz", "250Hz", "3.5KHz", "1GHz", or a bare
/// number interpreted as Hz. Displays using the largest unit that keeps the
/// printed value at or above one.
#[derive(Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frequency(f64);

impl Frequency {
    /// Creates a frequency from a value in Hertz.
    pub fn from_hz(hz: f64) -> Self {
        Self(hz)
    }

    /// Creates a frequency from a value in kilohertz.
    pub fn from_khz(khz: f64) -> Self {
        Self(khz * 1e3)
    }

    /// Creates a frequency from a value in megahertz.
    pub fn from_mhz(mhz: f64) -> Self {
        Self(mhz * 1e6)
    }

    /// Returns the frequency in Hertz.
    pub fn hz(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the value is finite and greater than zero.
    ///
    /// Every clock or event rate in the workspace must satisfy this before
    /// any tick budget can be derived from it.
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Returns the period of one cycle in nanoseconds.
    ///
    /// Meaningless for non-positive frequencies; callers validate with
    /// [`Frequency::is_positive`] first.
    pub fn period_ns(&self) -> f64 {
        1e9 / self.0
    }
}

impl fmt::Debug for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frequency({self})")
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (suffix, scale) in UNITS {
            if self.0 >= *scale {
                let unit = match *suffix {
                    "ghz" => "GHz",
                    "mhz" => "MHz",
                    "khz" => "KHz",
                    _ => "Hz",
                };
                return write!(f, "{}{unit}", self.0 / scale);
            }
        }
        write!(f, "{}Hz", self.0)
    }
}

/// Error type for parsing frequency strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid frequency: '{input}'")]
pub struct ParseFrequencyError {
    /// The input string that failed to parse.
    pub input: String,
}

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseFrequencyError {
            input: s.to_string(),
        };

        let lower = s.to_ascii_lowercase();
        for (suffix, scale) in UNITS {
            if let Some(num) = lower.strip_suffix(suffix) {
                let val: f64 = num.trim().parse().map_err(|_| err())?;
                return Ok(Frequency(val * scale));
            }
        }

        // No suffix — a bare number is taken as Hz
        let val: f64 = lower.parse().map_err(|_| err())?;
        Ok(Frequency(val))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_units() {
        assert_eq!("1GHz".parse::<Frequency>().unwrap().hz(), 1e9);
        assert_eq!("12MHz".parse::<Frequency>().unwrap().hz(), 12_000_000.0);
        assert_eq!("3.5KHz".parse::<Frequency>().unwrap().hz(), 3_500.0);
        assert_eq!("250Hz".parse::<Frequency>().unwrap().hz(), 250.0);
    }

    #[test]
    fn parse_bare_number_is_hz() {
        assert_eq!("48000".parse::<Frequency>().unwrap().hz(), 48_000.0);
    }

    #[test]
    fn parse_case_and_whitespace() {
        assert_eq!(" 12 mhz ".parse::<Frequency>().unwrap().hz(), 12e6);
    }

    #[test]
    fn parse_invalid() {
        let err = "twelve megahertz".parse::<Frequency>().unwrap_err();
        assert!(err.to_string().contains("invalid frequency"));
    }

    #[test]
    fn constructors_agree() {
        assert_eq!(Frequency::from_khz(250.0), Frequency::from_hz(250_000.0));
        assert_eq!(Frequency::from_mhz(12.0), Frequency::from_hz(12e6));
    }

    #[test]
    fn display_selects_best_unit() {
        assert_eq!(Frequency::from_hz(1e9).to_string(), "1GHz");
        assert_eq!(Frequency::from_mhz(12.0).to_string(), "12MHz");
        assert_eq!(Frequency::from_hz(44_100.0).to_string(), "44.1KHz");
        assert_eq!(Frequency::from_hz(250.0).to_string(), "250Hz");
        assert_eq!(Frequency::from_hz(0.5).to_string(), "0.5Hz");
    }

    #[test]
    fn period_of_twelve_megahertz() {
        let p = Frequency::from_mhz(12.0).period_ns();
        assert!((p - 83.333333).abs() < 1e-3);
    }

    #[test]
    fn positivity() {
        assert!(Frequency::from_hz(1.0).is_positive());
        assert!(!Frequency::from_hz(0.0).is_positive());
        assert!(!Frequency::from_hz(-5.0).is_positive());
        assert!(!Frequency::from_hz(f64::NAN).is_positive());
    }

    #[test]
    fn serde_transparent() {
        let f: Frequency = serde_json::from_str("250.0").unwrap();
        assert_eq!(f.hz(), 250.0);
        assert_eq!(serde_json::to_string(&f).unwrap(), "250.0");
    }
}
