//! Storage adapters for [`PointCollection`].
//!
//! - `Coords`: anything exposing `(x, y)`; `&mut [P]` for such `P` is a
//!   collection (arrays of structs, `[[x, y], ...]` coordinate pairs).
//! - `FlatPoints`: interleaved `[x0, y0, x1, y1, ...]` buffers.

use std::ops::Range;

use nalgebra::Vector2;

use crate::collection::PointCollection;

/// A point-like value with readable coordinates.
pub trait Coords {
    fn xy(&self) -> (f64, f64);
}

impl Coords for [f64; 2] {
    #[inline]
    fn xy(&self) -> (f64, f64) {
        (self[0], self[1])
    }
}

impl Coords for (f64, f64) {
    #[inline]
    fn xy(&self) -> (f64, f64) {
        *self
    }
}

impl Coords for Vector2<f64> {
    #[inline]
    fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl<'a, P: Coords> PointCollection for &'a mut [P] {
    #[inline]
    fn take(&self, i: usize) -> (f64, f64) {
        self[i].xy()
    }

    #[inline]
    fn len(&self) -> usize {
        <[P]>::len(self)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        <[P]>::swap(self, i, j)
    }

    #[inline]
    fn slice(self, range: Range<usize>) -> Self {
        &mut self[range]
    }
}

/// Interleaved coordinate buffer `[x0, y0, x1, y1, ...]`.
#[derive(Debug)]
pub struct FlatPoints<'a> {
    data: &'a mut [f64],
}

impl<'a> FlatPoints<'a> {
    /// Wrap `data`; `None` if its length is odd.
    pub fn new(data: &'a mut [f64]) -> Option<Self> {
        if data.len() % 2 != 0 {
            return None;
        }
        Some(Self { data })
    }

    /// The underlying coordinates of the current view.
    pub fn as_slice(&self) -> &[f64] {
        self.data
    }

    pub fn into_inner(self) -> &'a mut [f64] {
        self.data
    }
}

impl<'a> PointCollection for FlatPoints<'a> {
    #[inline]
    fn take(&self, i: usize) -> (f64, f64) {
        (self.data[2 * i], self.data[2 * i + 1])
    }

    #[inline]
    fn len(&self) -> usize {
        self.data.len() / 2
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(2 * i, 2 * j);
        self.data.swap(2 * i + 1, 2 * j + 1);
    }

    #[inline]
    fn slice(self, range: Range<usize>) -> Self {
        Self {
            data: &mut self.data[2 * range.start..2 * range.end],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_points_rejects_odd_length() {
        let mut odd = [0.0, 1.0, 2.0];
        assert!(FlatPoints::new(&mut odd).is_none());
    }

    #[test]
    fn flat_points_swap_and_slice_alias_storage() {
        let mut data = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        {
            let mut pts = FlatPoints::new(&mut data).unwrap();
            assert_eq!(pts.len(), 3);
            pts.swap(0, 2);
            assert_eq!(pts.take(0), (4.0, 5.0));
            let tail = pts.slice(1..3);
            assert_eq!(tail.len(), 2);
            assert_eq!(tail.take(1), (0.0, 1.0));
        }
        assert_eq!(data, [4.0, 5.0, 2.0, 3.0, 0.0, 1.0]);
    }

    #[test]
    fn slice_of_vectors_is_a_collection() {
        let mut v = vec![Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)];
        let mut pts: &mut [Vector2<f64>] = &mut v;
        PointCollection::swap(&mut pts, 0, 1);
        assert_eq!(pts.take(0), (3.0, 4.0));
        let head = pts.slice(0..1);
        assert_eq!(PointCollection::len(&head), 1);
    }
}
