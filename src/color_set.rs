// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ColorSet type for representing sets of colors as bitsets.
//!
//! A ColorSet is a compact representation of a set of colors using a single
//! u64, where bit i represents the presence of color i. Every operation takes
//! and returns plain values; nothing is updated in place except through the
//! `*Assign` operators, which are shorthand for reassignment.
//!
//! # Examples
//!
//! ```
//! use preemptive_set::ColorSet;
//!
//! let set = ColorSet::from_char('1').or(ColorSet::from_char('A'));
//! assert_eq!(set.cardinality(), 2);
//! assert_eq!(set.to_string(), "1A");
//! assert!(ColorSet::from_char('1').is_included(set));
//! assert_eq!(set.discard('1').to_string(), "A");
//!
//! let universe = ColorSet::full(3);
//! assert_eq!(universe.to_string(), "123");
//! assert_eq!(universe.negate().and(universe), ColorSet::empty());
//! ```

use crate::color::{Color, MAX_COLORS};
use crate::error::ColorSetError;
use std::fmt;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign,
};
use std::str::FromStr;

/// A set of colors represented as a bitset.
///
/// Bit i (counting from LSB) is set if color i is in the set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSet(u64);

impl ColorSet {
    /// Create an empty color set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create the set of the first `color_range` colors.
    ///
    /// A range of MAX_COLORS or more gives the set of all 64 colors.
    pub const fn full(color_range: usize) -> Self {
        if color_range >= MAX_COLORS {
            Self(u64::MAX)
        } else {
            Self((1 << color_range) - 1)
        }
    }

    /// Create the singleton set for the color printed as `c`.
    ///
    /// A character outside the color table gives the empty set; use
    /// [`ColorSet::try_from_char`] to reject it instead.
    pub const fn from_char(c: char) -> Self {
        match Color::from_char(c) {
            Some(color) => Self::from_color(color),
            None => Self::empty(),
        }
    }

    /// Create the singleton set for the color printed as `c`, failing if
    /// `c` is not in the color table.
    pub fn try_from_char(c: char) -> Result<Self, ColorSetError> {
        match Color::from_char(c) {
            Some(color) => Ok(Self::from_color(color)),
            None => {
                log::trace!("rejecting color character {:?}", c);
                Err(ColorSetError::InvalidColorCharacter { character: c })
            }
        }
    }

    /// Create the singleton set `{color}`.
    pub const fn from_color(color: Color) -> Self {
        Self(1 << color.value())
    }

    /// Create a color set from a slice of colors.
    pub fn from_colors(colors: &[Color]) -> Self {
        colors.iter().copied().collect()
    }

    /// Create a color set from a raw bit value.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Get the underlying bitset value.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Intersection.
    pub const fn and(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Union.
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Symmetric difference.
    pub const fn xor(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Complement over all 64 colors.
    ///
    /// This ignores any `color_range` the set was built with: intersect the
    /// result with [`ColorSet::full`] to complement within a smaller universe.
    pub const fn negate(self) -> Self {
        Self(!self.0)
    }

    /// A copy of this set with the color printed as `c` added.
    pub const fn set(self, c: char) -> Self {
        self.or(Self::from_char(c))
    }

    /// A copy of this set with the color printed as `c` removed.
    pub const fn discard(self, c: char) -> Self {
        self.and(Self::from_char(c).negate())
    }

    /// Remove every member of `self` from `source`.
    ///
    /// Note the argument order: the receiver is the set of colors to drop and
    /// the result is a subset of `source`.
    pub const fn discard_set(self, source: Self) -> Self {
        self.negate().and(source)
    }

    /// True if every member of `self` is also in `other`.
    pub const fn is_included(self, other: Self) -> bool {
        self.0 & other.0 == self.0
    }

    /// True if the set has exactly one member.
    pub const fn is_singleton(self) -> bool {
        self.0 != 0 && self.0 & (self.0 - 1) == 0
    }

    /// Check if the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if the set contains a specific color.
    pub const fn contains(self, color: Color) -> bool {
        (self.0 >> color.value()) & 1 != 0
    }

    /// Number of colors in the set (population count).
    pub const fn cardinality(self) -> usize {
        self.0.count_ones() as usize
    }

    /// The singleton of the highest member, or the empty set.
    pub const fn leftmost(self) -> Self {
        match (1u64 << 63).checked_shr(self.0.leading_zeros()) {
            Some(bit) => Self(bit),
            None => Self::empty(),
        }
    }

    /// Bit position of the lowest member; 64 for the empty set.
    pub const fn trailing_zero_count(self) -> usize {
        self.0.trailing_zeros() as usize
    }

    /// The lowest member, if any.
    pub fn lowest(self) -> Option<Color> {
        Color::try_new(self.trailing_zero_count() as u8)
    }

    /// Iterate over all colors in the set.
    ///
    /// Colors are yielded in ascending order (0, 1, 2, ...).
    pub fn iter(self) -> ColorSetIter {
        ColorSetIter { bits: self.0 }
    }

    /// The characters of the members, in ascending bit order.
    pub fn chars(self) -> impl Iterator<Item = char> {
        self.iter().map(Color::to_char)
    }
}

/// Iterator over colors in a ColorSet.
#[derive(Debug, Clone)]
pub struct ColorSetIter {
    bits: u64,
}

impl Iterator for ColorSetIter {
    type Item = Color;

    fn next(&mut self) -> Option<Self::Item> {
        let color = ColorSet(self.bits).lowest()?;
        self.bits &= self.bits - 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for ColorSetIter {}

impl IntoIterator for ColorSet {
    type Item = Color;
    type IntoIter = ColorSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, color| set.or(Self::from_color(color)))
    }
}

impl fmt::Display for ColorSet {
    /// Format a color set as its member characters, e.g. "1A".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorSet({:#018x} \"{}\")", self.0, self)
    }
}

impl FromStr for ColorSet {
    type Err = ColorSetError;

    /// Parse the characters of a set, as produced by `to_string`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .try_fold(Self::empty(), |set, c| Ok(set.or(Self::try_from_char(c)?)))
    }
}

impl From<Color> for ColorSet {
    fn from(color: Color) -> Self {
        Self::from_color(color)
    }
}

impl From<&[Color]> for ColorSet {
    fn from(colors: &[Color]) -> Self {
        Self::from_colors(colors)
    }
}

impl From<u64> for ColorSet {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<ColorSet> for u64 {
    fn from(set: ColorSet) -> Self {
        set.0
    }
}

impl BitAnd for ColorSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl BitOr for ColorSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl BitXor for ColorSet {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.xor(rhs)
    }
}

impl Not for ColorSet {
    type Output = Self;

    fn not(self) -> Self {
        self.negate()
    }
}

impl Sub for ColorSet {
    type Output = Self;

    /// `a - b` is `a` without the members of `b`.
    fn sub(self, rhs: Self) -> Self {
        rhs.discard_set(self)
    }
}

impl BitAndAssign for ColorSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOrAssign for ColorSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl BitXorAssign for ColorSet {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl SubAssign for ColorSet {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
