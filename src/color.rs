// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Colors and the character table used to print and parse them.
//!
//! A color is a bit position in a [`ColorSet`](crate::ColorSet). Each of the
//! 64 positions has a printable character: the digits `1`-`9`, then `A`-`Z`,
//! then `a`-`z`, then `@`, `&` and `*`.

use crate::error::ColorSetError;
use std::fmt;

/// Maximum number of distinct colors, which is also the width of a set.
pub const MAX_COLORS: usize = 64;

/// The color characters, in bit-position order.
pub const COLOR_CHARS: &str = concat!(
    "123456789",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "@&*"
);

/// The color table: `COLOR_TABLE[i]` is the character for bit `i`.
pub const COLOR_TABLE: [char; MAX_COLORS] = build_table();

const _: () = assert!(
    COLOR_CHARS.len() == MAX_COLORS,
    "color table must have one character per color"
);

const _: () = assert!(
    MAX_COLORS == u64::BITS as usize,
    "a color set is a single u64"
);

const fn build_table() -> [char; MAX_COLORS] {
    let bytes = COLOR_CHARS.as_bytes();
    let mut table = ['\0'; MAX_COLORS];
    let mut i = 0;
    while i < MAX_COLORS {
        table[i] = bytes[i] as char;
        i += 1;
    }
    table
}

/// A color in the range 0..MAX_COLORS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    /// Create a new color, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= MAX_COLORS`.
    pub fn new(value: u8) -> Self {
        assert!((value as usize) < MAX_COLORS, "Color out of range: {}", value);
        Self(value)
    }

    /// Try to create a new color, returning None if out of range.
    pub const fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < MAX_COLORS {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Look up the color printed as `c`.
    ///
    /// Returns None if `c` is not in the color table.
    pub const fn from_char(c: char) -> Option<Self> {
        let value = match c {
            '1'..='9' => c as u8 - b'1',
            'A'..='Z' => c as u8 - b'A' + 9,
            'a'..='z' => c as u8 - b'a' + 35,
            '@' => 61,
            '&' => 62,
            '*' => 63,
            _ => return None,
        };
        Some(Self(value))
    }

    /// The character this color prints as.
    pub const fn to_char(self) -> char {
        COLOR_TABLE[self.0 as usize]
    }

    /// Get the underlying value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the color as a usize (for array indexing).
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// All colors, in table order.
    pub fn all() -> impl Iterator<Item = Color> {
        (0..MAX_COLORS as u8).map(Color)
    }
}

impl TryFrom<char> for Color {
    type Error = ColorSetError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Color::from_char(c).ok_or(ColorSetError::InvalidColorCharacter { character: c })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_layout() {
        assert_eq!(COLOR_TABLE[0], '1');
        assert_eq!(COLOR_TABLE[8], '9');
        assert_eq!(COLOR_TABLE[9], 'A');
        assert_eq!(COLOR_TABLE[34], 'Z');
        assert_eq!(COLOR_TABLE[35], 'a');
        assert_eq!(COLOR_TABLE[60], 'z');
        assert_eq!(COLOR_TABLE[61], '@');
        assert_eq!(COLOR_TABLE[62], '&');
        assert_eq!(COLOR_TABLE[63], '*');
    }

    #[test]
    fn test_table_is_distinct() {
        let mut seen = std::collections::HashSet::new();
        for c in COLOR_TABLE {
            assert!(seen.insert(c), "duplicate color character {:?}", c);
        }
    }

    #[test]
    fn test_from_char_inverts_to_char() {
        for color in Color::all() {
            assert_eq!(Color::from_char(color.to_char()), Some(color));
        }
    }

    #[test]
    fn test_from_char_rejects_unknown() {
        for c in ['0', '#', ' ', '\0', 'é', '['] {
            assert_eq!(Color::from_char(c), None);
        }
    }

    #[test]
    fn test_try_from_char() {
        assert_eq!(Color::try_from('A'), Ok(Color::new(9)));
        assert_eq!(
            Color::try_from('0'),
            Err(ColorSetError::InvalidColorCharacter { character: '0' })
        );
    }

    #[test]
    #[should_panic(expected = "Color out of range")]
    fn test_color_out_of_range() {
        Color::new(64);
    }

    #[test]
    fn test_color_try_new() {
        assert!(Color::try_new(0).is_some());
        assert!(Color::try_new(63).is_some());
        assert!(Color::try_new(64).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::new(0).to_string(), "1");
        assert_eq!(Color::new(63).to_string(), "*");
    }
}
