// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for parsing colors.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Errors that can occur when converting text into colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
pub enum ColorSetError {
    /// Character is not in the color table.
    InvalidColorCharacter { character: char },
}

impl fmt::Display for ColorSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSetError::InvalidColorCharacter { character } => {
                write!(f, "{:?} is not a color character", character)
            }
        }
    }
}

impl std::error::Error for ColorSetError {}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_display() {
        let err = ColorSetError::InvalidColorCharacter { character: '#' };
        assert_eq!(err.to_string(), "'#' is not a color character");
    }

    #[test]
    fn test_count() {
        assert_eq!(ColorSetError::COUNT, 1);
    }
}
