//! Conversion of numbers, times and text into four-digit frames.
//!
//! Every presentation need is one variant of [`FormatRequest`], and
//! [`format`] turns any request into a [`SegmentFrame`]. Formatting is pure;
//! transmission happens in [`SegmentDisplay::show`].
//!
//! # Numeric policies
//!
//! | Request | Range handling |
//! |---------|----------------|
//! | [`Integer`](FormatRequest::Integer) | Clamped to `0..=9999` |
//! | [`SmallIntWithSuffix`](FormatRequest::SmallIntWithSuffix) | `**` from 100 |
//! | [`FixedWithSuffix`](FormatRequest::FixedWithSuffix) | Sign dropped, `**` above 99.9 |
//! | [`FixedTwoDecimals`](FormatRequest::FixedTwoDecimals) | Clamped to `0.00..=99.99` |
//! | [`Time`](FormatRequest::Time) | Each field clamped to `0..=99` |
//!
//! # Example
//!
//! ```rust
//! use status_indicator::format::{format, FormatRequest};
//! use status_indicator::segment::{encode, SegmentFrame};
//!
//! let frame = format(&FormatRequest::fixed_with_suffix_auto(25.5, "C", true));
//! assert_eq!(frame, SegmentFrame::from_text("255C").with_dot(1));
//!
//! let frame = format(&FormatRequest::integer(22, false));
//! assert_eq!(frame.bytes(), [0, 0, encode('2'), encode('2')]);
//! ```
//!
//! [`SegmentDisplay::show`]: crate::traits::SegmentDisplay::show

use crate::segment::{encode, encode_digit, DotMask, SegmentFrame, DIGITS, DP};

/// Largest value a four-digit integer field can show.
pub const MAX_INTEGER: i32 = 9999;

/// Largest magnitude (in tenths) the one-decimal field can show.
const MAX_TENTHS: u32 = 999;

/// Overflow sentinel character.
const OVERFLOW: char = '*';

/// A single formatting job.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatRequest<'a> {
    /// Up to four characters, left aligned, with optional dots on the
    /// positions that received a character.
    Text {
        /// Characters to show; anything past the fourth is dropped.
        text: &'a str,
        /// Decimal points to light.
        dots: DotMask,
    },

    /// Integer clamped to `0..=9999`.
    Integer {
        /// Value to show.
        value: i32,
        /// Render all four digits instead of blanking leading zeros.
        leading_zeros: bool,
    },

    /// Two right-aligned digits followed by a two-character suffix.
    SmallIntWithSuffix {
        /// Value to show; 100 and above renders `**`.
        value: u32,
        /// Up to two suffix characters.
        suffix: &'a str,
    },

    /// Magnitude with one implied decimal digit, followed by a suffix.
    FixedWithSuffix {
        /// Value to show. Only the magnitude is displayed.
        value: f32,
        /// Suffix; its first character follows the digits, both characters
        /// are shown on overflow.
        suffix: &'a str,
        /// Decimal points to light.
        dots: DotMask,
    },

    /// Value with two implied decimal digits across all four positions.
    FixedTwoDecimals {
        /// Value to show, clamped to `0.00..=99.99`.
        value: f32,
        /// Decimal points to light.
        dots: DotMask,
    },

    /// Clock-style `HH:MM`.
    Time {
        /// Hours, clamped to `0..=99`.
        hour: u8,
        /// Minutes, clamped to `0..=99`.
        minute: u8,
        /// Light the separator (decimal point of position 1).
        colon: bool,
    },
}

impl<'a> FormatRequest<'a> {
    /// Plain text without dots.
    pub const fn text(text: &'a str) -> Self {
        Self::Text {
            text,
            dots: DotMask::NONE,
        }
    }

    /// Text with the given dots.
    pub const fn text_with_dots(text: &'a str, dots: DotMask) -> Self {
        Self::Text { text, dots }
    }

    /// Clamped four-digit integer.
    pub const fn integer(value: i32, leading_zeros: bool) -> Self {
        Self::Integer {
            value,
            leading_zeros,
        }
    }

    /// Two digits plus a two-character suffix (e.g. `" 7oC"`).
    pub const fn small_int(value: u32, suffix: &'a str) -> Self {
        Self::SmallIntWithSuffix { value, suffix }
    }

    /// One-decimal value with a suffix and caller-chosen dots.
    pub const fn fixed_with_suffix(value: f32, suffix: &'a str, dots: DotMask) -> Self {
        Self::FixedWithSuffix {
            value,
            suffix,
            dots,
        }
    }

    /// One-decimal value with a suffix, dotting position 1 when
    /// `show_decimal` is set so the display reads `DD.DS`.
    pub const fn fixed_with_suffix_auto(value: f32, suffix: &'a str, show_decimal: bool) -> Self {
        let dots = if show_decimal {
            DotMask::at(1)
        } else {
            DotMask::NONE
        };
        Self::fixed_with_suffix(value, suffix, dots)
    }

    /// Two-decimal value with caller-chosen dots.
    pub const fn fixed_two_decimals(value: f32, dots: DotMask) -> Self {
        Self::FixedTwoDecimals { value, dots }
    }

    /// `HH:MM` time.
    pub const fn time(hour: u8, minute: u8, colon: bool) -> Self {
        Self::Time {
            hour,
            minute,
            colon,
        }
    }
}

/// Render a request into a frame.
pub fn format(request: &FormatRequest<'_>) -> SegmentFrame {
    match *request {
        FormatRequest::Text { text, dots } => format_text(text, dots),
        FormatRequest::Integer {
            value,
            leading_zeros,
        } => format_integer(value, leading_zeros),
        FormatRequest::SmallIntWithSuffix { value, suffix } => format_small_int(value, suffix),
        FormatRequest::FixedWithSuffix {
            value,
            suffix,
            dots,
        } => format_fixed_suffix(value, suffix, dots),
        FormatRequest::FixedTwoDecimals { value, dots } => format_fixed_two(value, dots),
        FormatRequest::Time {
            hour,
            minute,
            colon,
        } => format_time(hour, minute, colon),
    }
}

fn format_text(text: &str, dots: DotMask) -> SegmentFrame {
    let mut bytes = [0; DIGITS];
    for (i, c) in text.chars().take(DIGITS).enumerate() {
        bytes[i] = encode(c);
        if dots.contains(i) {
            bytes[i] |= DP;
        }
    }
    SegmentFrame::new(bytes)
}

/// Split `0..=9999` into thousands, hundreds, tens and units.
fn decimal_digits(value: u32) -> [u32; DIGITS] {
    [
        (value / 1000) % 10,
        (value / 100) % 10,
        (value / 10) % 10,
        value % 10,
    ]
}

fn format_integer(value: i32, leading_zeros: bool) -> SegmentFrame {
    let digits = decimal_digits(value.clamp(0, MAX_INTEGER) as u32);
    let mut bytes = [0; DIGITS];

    // Once a digit renders, every digit after it renders too.
    let mut rendering = leading_zeros;
    for (i, &d) in digits.iter().enumerate() {
        if d != 0 || i == DIGITS - 1 || rendering {
            bytes[i] = encode_digit(d);
            rendering = true;
        }
    }

    SegmentFrame::new(bytes)
}

/// Character `n` of `suffix`, or a blank when the suffix is shorter.
fn suffix_char(suffix: &str, n: usize) -> char {
    suffix.chars().nth(n).unwrap_or(' ')
}

fn digit_char(d: u32) -> char {
    char::from_digit(d % 10, 10).unwrap_or(' ')
}

fn format_small_int(value: u32, suffix: &str) -> SegmentFrame {
    let (tens, units) = match value {
        0..=9 => (' ', digit_char(value)),
        10..=99 => (digit_char(value / 10), digit_char(value)),
        _ => (OVERFLOW, OVERFLOW),
    };

    SegmentFrame::new([
        encode(tens),
        encode(units),
        encode(suffix_char(suffix, 0)),
        encode(suffix_char(suffix, 1)),
    ])
}

fn format_fixed_suffix(value: f32, suffix: &str, dots: DotMask) -> SegmentFrame {
    // `as` saturates and maps NaN to zero.
    let tenths = ((value * 10.0) as i32).unsigned_abs();

    let chars = if tenths > MAX_TENTHS {
        [
            OVERFLOW,
            OVERFLOW,
            suffix_char(suffix, 0),
            suffix_char(suffix, 1),
        ]
    } else {
        [
            digit_char(tenths / 100),
            digit_char(tenths / 10),
            digit_char(tenths),
            suffix_char(suffix, 0),
        ]
    };

    SegmentFrame::new(chars.map(encode)).with_dots(dots)
}

fn format_fixed_two(value: f32, dots: DotMask) -> SegmentFrame {
    let hundredths = ((value * 100.0) as i32).clamp(0, MAX_INTEGER) as u32;
    SegmentFrame::new(decimal_digits(hundredths).map(encode_digit)).with_dots(dots)
}

fn format_time(hour: u8, minute: u8, colon: bool) -> SegmentFrame {
    let hour = u32::from(hour.min(99));
    let minute = u32::from(minute.min(99));

    let frame = SegmentFrame::new([
        encode_digit(hour / 10),
        encode_digit(hour),
        encode_digit(minute / 10),
        encode_digit(minute),
    ]);

    if colon {
        frame.with_dot(1)
    } else {
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> SegmentFrame {
        SegmentFrame::from_text(s)
    }

    // =========================================================================
    // Text Tests
    // =========================================================================

    #[test]
    fn text_short_leaves_trailing_blank() {
        assert_eq!(format(&FormatRequest::text("CA")), text("CA  "));
    }

    #[test]
    fn text_case_insensitive() {
        assert_eq!(format(&FormatRequest::text("volt")), text("VOLT"));
    }

    #[test]
    fn text_extra_characters_dropped() {
        assert_eq!(format(&FormatRequest::text("CURRENT")), text("CURR"));
    }

    #[test]
    fn text_dots_only_on_written_positions() {
        let dots = DotMask::from_flags([false, true, true, true]);
        let frame = format(&FormatRequest::text_with_dots("v10", dots));
        assert_eq!(frame, text("v10").with_dot(1).with_dot(2));
        assert!(!frame.has_dot(3));
    }

    // =========================================================================
    // Integer Tests
    // =========================================================================

    #[test]
    fn integer_suppresses_leading_zeros() {
        let frame = format(&FormatRequest::integer(22, false));
        assert_eq!(frame.bytes(), [0, 0, encode('2'), encode('2')]);
    }

    #[test]
    fn integer_zero_keeps_last_digit() {
        let frame = format(&FormatRequest::integer(0, false));
        assert_eq!(frame.bytes(), [0, 0, 0, encode('0')]);
    }

    #[test]
    fn integer_inner_zeros_render() {
        assert_eq!(format(&FormatRequest::integer(1005, false)), text("1005"));
        assert_eq!(
            format(&FormatRequest::integer(100, false)).bytes(),
            [0, encode('1'), encode('0'), encode('0')]
        );
    }

    #[test]
    fn integer_leading_zeros() {
        assert_eq!(format(&FormatRequest::integer(22, true)), text("0022"));
        assert_eq!(format(&FormatRequest::integer(0, true)), text("0000"));
    }

    #[test]
    fn integer_clamps() {
        assert_eq!(format(&FormatRequest::integer(10_000, true)), text("9999"));
        assert_eq!(format(&FormatRequest::integer(-5, false)), text("   0"));
        assert_eq!(format(&FormatRequest::integer(i32::MIN, true)), text("0000"));
    }

    // =========================================================================
    // Small Integer Tests
    // =========================================================================

    #[test]
    fn small_int_single_digit_padded() {
        assert_eq!(format(&FormatRequest::small_int(7, "oC")), text(" 7oC"));
    }

    #[test]
    fn small_int_two_digits() {
        assert_eq!(format(&FormatRequest::small_int(42, "kW")), text("42kW"));
        assert_eq!(format(&FormatRequest::small_int(10, "kW")), text("10kW"));
    }

    #[test]
    fn small_int_overflow() {
        assert_eq!(format(&FormatRequest::small_int(150, "kW")), text("**kW"));
        assert_eq!(format(&FormatRequest::small_int(100, "kW")), text("**kW"));
    }

    #[test]
    fn small_int_short_suffix() {
        assert_eq!(format(&FormatRequest::small_int(5, "C")), text(" 5C "));
        assert_eq!(format(&FormatRequest::small_int(5, "")), text(" 5  "));
    }

    // =========================================================================
    // Fixed With Suffix Tests
    // =========================================================================

    #[test]
    fn fixed_suffix_auto_decimal() {
        let frame = format(&FormatRequest::fixed_with_suffix_auto(25.5, "C", true));
        assert_eq!(frame, text("255C").with_dot(1));
    }

    #[test]
    fn fixed_suffix_without_decimal() {
        let frame = format(&FormatRequest::fixed_with_suffix_auto(25.5, "C", false));
        assert_eq!(frame, text("255C"));
    }

    #[test]
    fn fixed_suffix_small_value_keeps_zeros() {
        let frame = format(&FormatRequest::fixed_with_suffix_auto(1.5, "A", true));
        assert_eq!(frame, text("015A").with_dot(1));
    }

    #[test]
    fn fixed_suffix_drops_sign() {
        let frame = format(&FormatRequest::fixed_with_suffix_auto(-12.5, "A", true));
        assert_eq!(frame, text("125A").with_dot(1));
    }

    #[test]
    fn fixed_suffix_overflow_shows_full_suffix() {
        let frame = format(&FormatRequest::fixed_with_suffix(100.0, "kW", DotMask::NONE));
        assert_eq!(frame, text("**kW"));
    }

    #[test]
    fn fixed_suffix_largest_before_overflow() {
        let frame = format(&FormatRequest::fixed_with_suffix(99.9, "V", DotMask::NONE));
        assert_eq!(frame, text("999V"));
    }

    #[test]
    fn fixed_suffix_manual_dots() {
        let dots = DotMask::from_flags([true, false, false, true]);
        let frame = format(&FormatRequest::fixed_with_suffix(12.0, "C", dots));
        assert_eq!(frame, text("120C").with_dot(0).with_dot(3));
    }

    #[test]
    fn fixed_suffix_nan_is_zero() {
        let frame = format(&FormatRequest::fixed_with_suffix(f32::NAN, "V", DotMask::NONE));
        assert_eq!(frame, text("000V"));
    }

    // =========================================================================
    // Fixed Two Decimals Tests
    // =========================================================================

    #[test]
    fn fixed_two_decimals_with_dot() {
        let frame = format(&FormatRequest::fixed_two_decimals(34.5, DotMask::at(1)));
        assert_eq!(frame, text("3450").with_dot(1));
    }

    #[test]
    fn fixed_two_decimals_renders_all_digits() {
        let frame = format(&FormatRequest::fixed_two_decimals(0.25, DotMask::NONE));
        assert_eq!(frame, text("0025"));
    }

    #[test]
    fn fixed_two_decimals_clamps() {
        let frame = format(&FormatRequest::fixed_two_decimals(250.0, DotMask::NONE));
        assert_eq!(frame, text("9999"));
        let frame = format(&FormatRequest::fixed_two_decimals(-3.0, DotMask::NONE));
        assert_eq!(frame, text("0000"));
    }

    // =========================================================================
    // Time Tests
    // =========================================================================

    #[test]
    fn time_with_colon() {
        let frame = format(&FormatRequest::time(9, 5, true));
        assert_eq!(frame, text("0905").with_dot(1));
    }

    #[test]
    fn time_without_colon() {
        let frame = format(&FormatRequest::time(23, 59, false));
        assert_eq!(frame, text("2359"));
    }

    #[test]
    fn time_clamps_fields() {
        let frame = format(&FormatRequest::time(150, 200, false));
        assert_eq!(frame, text("9999"));
    }
}
