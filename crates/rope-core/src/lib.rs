//! Immutable rope primitives.
//!
//! A [`Rope`] stores a string as a binary tree: leaves hold literal
//! substrings and internal nodes represent the concatenation of their two
//! children. Lookup by character index walks the tree in O(height), and
//! [`Rope::balance`] rebuilds a minimal-height tree over the same leaves
//! once repeated concatenation has skewed the shape toward a list.

pub mod rope;

pub use rope::{Rope, RopeError};
