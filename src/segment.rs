//! Seven-segment glyph encoding and the four-digit frame type.
//!
//! Segment bits follow the usual `gfedcba` layout, with bit 7 driving the
//! decimal point (or the colon on clock-style modules):
//!
//! ```text
//!      a
//!     ---
//!  f |   | b
//!     -g-
//!  e |   | c
//!     ---  . dp
//!      d
//! ```
//!
//! A seven-segment digit cannot render every letter unambiguously. The table
//! here keeps the shapes in use on existing units, so several characters
//! share a glyph (`K`, `H` and `X`; `M` and `N`; `U` and `V`; `S` and `5`;
//! `Z` and `2`; `O` and `0`; `I` and `1`; `*` and `°`).
//!
//! # Example
//!
//! ```rust
//! use status_indicator::segment::{encode, SegmentFrame, DP};
//!
//! assert_eq!(encode('8'), 0b0111_1111);
//! assert_eq!(encode('a'), encode('A'));
//! assert_eq!(encode('#'), 0); // unmapped characters are blank
//!
//! let frame = SegmentFrame::new([encode('2'), encode('5') | DP, encode('5'), encode('C')]);
//! assert!(frame.has_dot(1));
//! ```

/// Number of digits on the module.
pub const DIGITS: usize = 4;

/// Decimal-point bit.
pub const DP: u8 = 0b1000_0000;

/// Mask of the seven glyph segments.
pub const SEGMENT_MASK: u8 = 0b0111_1111;

/// Every character with a non-blank glyph, plus space.
///
/// Letters are listed once in upper case; lower case maps identically.
pub const ALPHABET: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', //
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', //
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', //
    '-', '_', '*', '°', ' ',
];

/// Encode a character as a seven-segment bitmap (decimal point clear).
///
/// Matching is case-insensitive. Characters without a glyph encode to the
/// blank bitmap rather than failing.
pub const fn encode(c: char) -> u8 {
    match c.to_ascii_uppercase() {
        '0' => 0b0011_1111,
        '1' => 0b0000_0110,
        '2' => 0b0101_1011,
        '3' => 0b0100_1111,
        '4' => 0b0110_0110,
        '5' => 0b0110_1101,
        '6' => 0b0111_1101,
        '7' => 0b0000_0111,
        '8' => 0b0111_1111,
        '9' => 0b0110_1111,

        'A' => 0b0111_0111,
        'B' => 0b0111_1100,
        'C' => 0b0011_1001,
        'D' => 0b0101_1110,
        'E' => 0b0111_1001,
        'F' => 0b0111_0001,
        'G' => 0b0011_1101,
        'H' => 0b0111_0110,
        'I' => 0b0000_0110,
        'J' => 0b0001_1110,
        'K' => 0b0111_0110,
        'L' => 0b0011_1000,
        'M' => 0b0011_0111,
        'N' => 0b0011_0111,
        'O' => 0b0011_1111,
        'P' => 0b0111_0011,
        'Q' => 0b0110_0111,
        'R' => 0b0101_0000,
        'S' => 0b0110_1101,
        'T' => 0b0111_1000,
        'U' => 0b0011_1110,
        'V' => 0b0011_1110,
        'W' => 0b0010_1010,
        'X' => 0b0111_0110,
        'Y' => 0b0110_1110,
        'Z' => 0b0101_1011,

        '-' => 0b0100_0000,
        '_' => 0b0000_1000,
        '*' | '°' => 0b0110_0011,
        _ => 0,
    }
}

/// Encode a single decimal digit (`0..=9`).
///
/// Values above 9 use their last decimal digit.
pub const fn encode_digit(d: u32) -> u8 {
    match char::from_digit(d % 10, 10) {
        Some(c) => encode(c),
        None => 0,
    }
}

/// Which digits light their decimal point.
///
/// Bit `i` corresponds to digit position `i`, counted from the left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DotMask(u8);

impl DotMask {
    /// No dots.
    pub const NONE: Self = Self(0);

    /// A single dot at `pos` (positions beyond the last digit are ignored).
    pub const fn at(pos: usize) -> Self {
        if pos < DIGITS {
            Self(1 << pos)
        } else {
            Self::NONE
        }
    }

    /// Build from one flag per digit, left to right.
    pub const fn from_flags(flags: [bool; DIGITS]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < DIGITS {
            if flags[i] {
                bits |= 1 << i;
            }
            i += 1;
        }
        Self(bits)
    }

    /// Whether digit `pos` has its dot lit.
    pub const fn contains(self, pos: usize) -> bool {
        pos < DIGITS && self.0 & (1 << pos) != 0
    }

    /// Raw bits (bit `i` = position `i`).
    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// One full refresh of the display: a glyph byte per digit, left to right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentFrame([u8; DIGITS]);

impl SegmentFrame {
    /// Every segment off.
    pub const BLANK: Self = Self([0; DIGITS]);

    /// Wrap raw digit bytes.
    pub const fn new(bytes: [u8; DIGITS]) -> Self {
        Self(bytes)
    }

    /// Encode up to four characters, blank-padding on the right.
    pub fn from_text(text: &str) -> Self {
        let mut bytes = [0; DIGITS];
        for (slot, c) in bytes.iter_mut().zip(text.chars()) {
            *slot = encode(c);
        }
        Self(bytes)
    }

    /// The raw byte for digit `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= 4`.
    pub const fn digit(&self, pos: usize) -> u8 {
        self.0[pos]
    }

    /// The four bytes in transmission order.
    pub const fn bytes(&self) -> [u8; DIGITS] {
        self.0
    }

    /// Whether digit `pos` has its decimal point set.
    pub const fn has_dot(&self, pos: usize) -> bool {
        pos < DIGITS && self.0[pos] & DP != 0
    }

    /// Copy of this frame with the decimal point set on `pos`.
    pub const fn with_dot(mut self, pos: usize) -> Self {
        if pos < DIGITS {
            self.0[pos] |= DP;
        }
        self
    }

    /// Copy of this frame with every dot in `mask` set.
    pub const fn with_dots(mut self, mask: DotMask) -> Self {
        let mut i = 0;
        while i < DIGITS {
            if mask.contains(i) {
                self.0[i] |= DP;
            }
            i += 1;
        }
        self
    }

    /// Glyph bits of digit `pos` with the decimal point stripped.
    pub const fn glyph(&self, pos: usize) -> u8 {
        self.0[pos] & SEGMENT_MASK
    }
}

impl From<[u8; DIGITS]> for SegmentFrame {
    fn from(bytes: [u8; DIGITS]) -> Self {
        Self(bytes)
    }
}
