// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Preemptive sets: sets of colors packed into a single `u64`.
//!
//! A graph-coloring search keeps, for each node, the set of colors still
//! available to it. With at most 64 colors that set fits in one machine word,
//! so every set operation is a handful of integer instructions.
//!
//! # Modules
//!
//! - [`color`]: the 64-entry color table and the [`Color`] type
//! - [`color_set`]: the [`ColorSet`] bitset and its algebra
//! - [`error`]: [`ColorSetError`], raised when parsing text
//!
//! # Example
//!
//! ```
//! use preemptive_set::{ColorSet, MAX_COLORS};
//!
//! // Four registers available, two taken by neighbours.
//! let available = ColorSet::full(4);
//! let taken: ColorSet = "13".parse().unwrap();
//! let left = taken.discard_set(available);
//!
//! assert_eq!(left.to_string(), "24");
//! assert_eq!(left.trailing_zero_count(), 1);
//! assert!(left.is_included(ColorSet::full(MAX_COLORS)));
//! ```

pub mod color;
pub mod color_set;
pub mod error;

// Re-export for convenience
pub use color::{Color, COLOR_CHARS, COLOR_TABLE, MAX_COLORS};
pub use color_set::{ColorSet, ColorSetIter};
pub use error::ColorSetError;
