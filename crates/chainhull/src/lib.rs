//! In-place 2D convex hulls (Andrew's monotone chain).
//!
//! The hull is computed over any storage implementing [`PointCollection`] and
//! ends up as a prefix of that same storage: the caller's buffer is sorted,
//! scanned, and permuted with pairwise swaps, then narrowed to the hull.
//!
//! Pipeline
//! - `order`: lexicographic heapsort through the collection contract.
//! - `hull`: lower/upper chain scans (fork/join) and the in-place compaction.
//! - `scratch`: optional reuse of the index-list buffers across calls.
//!
//! API Policy
//! - Breaking changes are fine while the crate is pre-1.0; prefer clarity over
//!   compatibility.

pub mod adapters;
mod cfg;
pub mod collection;
pub mod hull;
pub mod order;
pub mod sample;
pub mod scratch;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use adapters::{Coords, FlatPoints};
pub use collection::PointCollection;
pub use hull::{
    compact_by_indices, compute_hull, compute_hull_from_sorted, compute_hull_from_sorted_in,
    compute_hull_from_sorted_with, compute_hull_with, hull_indices, HullCfg,
};
pub use scratch::{Fresh, IndexPool, ScratchProvider};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::adapters::{Coords, FlatPoints};
    pub use crate::collection::PointCollection;
    pub use crate::hull::{compute_hull, compute_hull_from_sorted, compute_hull_with, HullCfg};
    pub use crate::sample::{draw_points, ReplayToken, SampleCfg, Shape};
    pub use nalgebra::Vector2 as Vec2;
}

/// Orientation of the triangle `p1 → p2 → p3`.
///
/// Determinant of `[p1 - p3, p2 - p3]`; positive for a counterclockwise turn,
/// zero for collinear points, negative for clockwise. Plain `f64`, no epsilon.
#[inline]
pub fn orientation(p1: (f64, f64), p2: (f64, f64), p3: (f64, f64)) -> f64 {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x3, y3) = p3;
    (x1 - x3) * (y2 - y3) - (y1 - y3) * (x2 - x3)
}
