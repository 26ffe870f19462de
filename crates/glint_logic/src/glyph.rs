//! Seven-segment line bundles and the hexadecimal glyph table.
//!
//! Bit ordering follows the reference PMOD wiring: bit 0 drives segment g,
//! bit 6 drives segment a, so a pattern written `0b_abcdefg` reads
//! left-to-right as segments a through g.
//!
//! ```text
//!    aaaaa
//!   f     b
//!   f     b
//!    ggggg
//!   e     c
//!   e     c
//!    ddddd
//! ```

use std::fmt;

use crate::error::LogicError;

/// Active-segment patterns for hex digits 0-F, in `0b_abcdefg` order.
const HEX_ACTIVE: [u8; 16] = [
    0b1111110, // 0
    0b0110000, // 1
    0b1101101, // 2
    0b1111001, // 3
    0b0110011, // 4
    0b1011011, // 5
    0b1011111, // 6
    0b1110000, // 7
    0b1111111, // 8
    0b1110011, // 9
    0b1110111, // A
    0b0011111, // b
    0b1001110, // c
    0b0111101, // d
    0b1001111, // E
    0b1000111, // F
];

/// The levels of the seven segment output lines, packed into one byte.
///
/// Bit 0 is segment g, bit 6 is segment a; the top bit is always clear.
/// Whether a set bit means "lit" depends on the table polarity — the
/// canonical [`GlyphTable::hex`] is active-low, matching the reference
/// hardware.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Segments(u8);

impl Segments {
    /// Segment a (top horizontal).
    pub const A: u8 = 0b1000000;
    /// Segment b (top right vertical).
    pub const B: u8 = 0b0100000;
    /// Segment c (bottom right vertical).
    pub const C: u8 = 0b0010000;
    /// Segment d (bottom horizontal).
    pub const D: u8 = 0b0001000;
    /// Segment e (bottom left vertical).
    pub const E: u8 = 0b0000100;
    /// Segment f (top left vertical).
    pub const F: u8 = 0b0000010;
    /// Segment g (middle horizontal).
    pub const G: u8 = 0b0000001;

    /// All seven lines low.
    pub const fn none() -> Self {
        Self(0)
    }

    /// All seven lines high. Under active-low encoding this is a dark
    /// display, and it is what the controller drives before its first tick.
    pub const fn all() -> Self {
        Self(0x7f)
    }

    /// Wraps a raw 7-bit pattern. Fails if any bit above the seventh is set.
    pub fn from_bits(bits: u8) -> Result<Self, LogicError> {
        if bits > 0x7f {
            return Err(LogicError::GlyphOutOfRange {
                index: 0,
                value: bits,
            });
        }
        Ok(Self(bits))
    }

    /// The raw 7-bit pattern.
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// The level of one line; index 0 is segment g, index 6 is segment a.
    pub fn line(&self, index: u8) -> bool {
        (self.0 >> (index & 0x7)) & 1 != 0
    }

    /// All seven line levels, index 0 = segment g.
    pub fn lines(&self) -> [bool; 7] {
        let mut out = [false; 7];
        for (i, line) in out.iter_mut().enumerate() {
            *line = (self.0 >> i) & 1 != 0;
        }
        out
    }

    /// The same pattern with every line inverted.
    pub fn complemented(&self) -> Self {
        Self(!self.0 & 0x7f)
    }
}

impl fmt::Debug for Segments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segments({:#09b})", self.0)
    }
}

/// An immutable mapping from a 4-bit digit value to a segment pattern.
///
/// Exactly 16 entries, one per hex digit. Built once; never consulted with
/// an index it cannot answer — decode rejects digits above 0xF and the
/// cores feed it structurally masked nibbles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    entries: [Segments; 16],
}

impl GlyphTable {
    /// Builds a table from 16 raw patterns, rejecting any entry that does
    /// not fit in seven bits. A malformed table is a programming defect and
    /// is reported here, never at decode time.
    pub fn new(raw: [u8; 16]) -> Result<Self, LogicError> {
        let mut entries = [Segments::none(); 16];
        for (index, (&value, entry)) in raw.iter().zip(entries.iter_mut()).enumerate() {
            if value > 0x7f {
                return Err(LogicError::GlyphOutOfRange { index, value });
            }
            *entry = Segments(value);
        }
        Ok(Self { entries })
    }

    /// The canonical hexadecimal table in active-low encoding: each entry
    /// is the complement of the "segments on" pattern, as the reference
    /// PMOD hardware expects.
    pub fn hex() -> Self {
        let mut entries = [Segments::none(); 16];
        for (entry, &active) in entries.iter_mut().zip(HEX_ACTIVE.iter()) {
            *entry = Segments(!active & 0x7f);
        }
        Self { entries }
    }

    /// The table with every entry complemented, for active-high hardware.
    pub fn complemented(&self) -> Self {
        let mut entries = self.entries;
        for entry in &mut entries {
            *entry = entry.complemented();
        }
        Self { entries }
    }

    /// Looks up the pattern for a digit, rejecting values above 0xF.
    pub fn decode(&self, digit: u8) -> Result<Segments, LogicError> {
        if digit > 0xf {
            return Err(LogicError::DigitOutOfRange(digit));
        }
        Ok(self.entries[digit as usize])
    }

    /// Total lookup for a structurally 4-bit value; the high bits of the
    /// argument are ignored.
    pub(crate) fn decode_nibble(&self, nibble: u8) -> Segments {
        self.entries[(nibble & 0xf) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Expected bytes enumerated literally, not derived by complementing.
    #[test]
    fn hex_table_matches_reference() {
        let expected: [u8; 16] = [
            0b0000001, // 0
            0b1001111, // 1
            0b0010010, // 2
            0b0000110, // 3
            0b1001100, // 4
            0b0100100, // 5
            0b0100000, // 6
            0b0001111, // 7
            0b0000000, // 8
            0b0001100, // 9
            0b0001000, // A
            0b1100000, // b
            0b0110001, // c
            0b1000010, // d
            0b0110000, // E
            0b0111000, // F
        ];
        let table = GlyphTable::hex();
        for digit in 0..16u8 {
            assert_eq!(
                table.decode(digit).unwrap().bits(),
                expected[digit as usize],
                "glyph for {digit:#x}"
            );
        }
    }

    #[test]
    fn entries_are_distinct() {
        let table = GlyphTable::hex();
        for a in 0..16u8 {
            for b in (a + 1)..16u8 {
                assert_ne!(table.decode(a).unwrap(), table.decode(b).unwrap());
            }
        }
    }

    #[test]
    fn decode_rejects_wide_digits() {
        let err = GlyphTable::hex().decode(16).unwrap_err();
        assert!(matches!(err, LogicError::DigitOutOfRange(16)));
    }

    #[test]
    fn new_rejects_wide_entries() {
        let mut raw = [0u8; 16];
        raw[5] = 0x80;
        let err = GlyphTable::new(raw).unwrap_err();
        assert!(matches!(
            err,
            LogicError::GlyphOutOfRange {
                index: 5,
                value: 0x80
            }
        ));
    }

    #[test]
    fn complement_round_trips() {
        let table = GlyphTable::hex();
        assert_eq!(table.complemented().complemented(), table);
        // Active-high zero: segments a-f lit, g dark.
        assert_eq!(
            table.complemented().decode(0).unwrap().bits(),
            0b1111110
        );
    }

    #[test]
    fn segment_lines_for_zero() {
        // Active-low zero: only the g line is high (dark).
        let zero = GlyphTable::hex().decode(0).unwrap();
        assert_eq!(
            zero.lines(),
            [true, false, false, false, false, false, false]
        );
        assert!(zero.line(0));
        assert!(!zero.line(6));
    }

    #[test]
    fn blank_and_full() {
        assert_eq!(Segments::none().bits(), 0);
        assert_eq!(Segments::all().bits(), 0x7f);
        assert_eq!(Segments::all().complemented(), Segments::none());
    }

    #[test]
    fn from_bits_range() {
        assert!(Segments::from_bits(0x7f).is_ok());
        assert!(Segments::from_bits(0x80).is_err());
    }

    #[test]
    fn named_masks_compose() {
        // Digit 1 lights b and c.
        assert_eq!(Segments::B | Segments::C, 0b0110000);
    }
}
