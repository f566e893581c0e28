//! Monotone-chain hull over a [`PointCollection`], computed in place.
//!
//! Purpose
//! - Sort the caller's storage lexicographically, scan the lower and upper
//!   chains into index lists, then permute the storage so the hull occupies
//!   its prefix in counterclockwise order from the lexicographically smallest
//!   point.
//!
//! Layout
//! - `scan.rs`: `HullCfg`, chain scans (fork/join), entry points.
//! - `compact.rs`: swap-only permutation that moves selected slots to the front.
//!
//! [`PointCollection`]: crate::collection::PointCollection

mod compact;
mod scan;

pub use compact::compact_by_indices;
pub use scan::{
    compute_hull, compute_hull_from_sorted, compute_hull_from_sorted_in,
    compute_hull_from_sorted_with, compute_hull_with, hull_indices, HullCfg,
};
