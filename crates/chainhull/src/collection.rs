//! Capability contract for point storage.
//!
//! The hull algorithm only ever reads coordinates by index, swaps two
//! elements, and narrows the view. Any storage that can do those four things
//! in place (flat coordinate buffers, slices of point structs, GeoJSON-style
//! coordinate pairs) can be driven by it.

use std::ops::Range;

/// Random-access point storage that can be permuted and narrowed in place.
///
/// Implementors are usually thin borrowing views (`&mut [P]`, [`FlatPoints`]),
/// so `slice` consumes the view and hands back a narrower one over the same
/// memory.
///
/// [`FlatPoints`]: crate::adapters::FlatPoints
pub trait PointCollection {
    /// Coordinates `(x, y)` at position `i`. Must be O(1).
    fn take(&self, i: usize) -> (f64, f64);

    /// Number of points in the current view.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exchange the elements at `i` and `j`, payload included. No allocation.
    fn swap(&mut self, i: usize, j: usize);

    /// View over `range` backed by the same storage.
    fn slice(self, range: Range<usize>) -> Self
    where
        Self: Sized;
}
