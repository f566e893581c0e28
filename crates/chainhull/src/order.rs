//! Lexicographic `(x, y)` ordering over a [`PointCollection`].
//!
//! The sort goes through `take`/`swap` only, so it works for every adapter
//! and never copies the points out. Heapsort: in place, `O(n log n)`, not
//! stable (fully equal points may trade places).

use crate::collection::PointCollection;

/// `a < b` by `x`, ties broken by `y`. NaN never compares less.
#[inline]
pub fn lex_less(a: (f64, f64), b: (f64, f64)) -> bool {
    a.0 < b.0 || (a.0 == b.0 && a.1 < b.1)
}

#[inline]
fn less_at<C: PointCollection + ?Sized>(points: &C, i: usize, j: usize) -> bool {
    lex_less(points.take(i), points.take(j))
}

/// Sort `points` in place, `x` ascending then `y` ascending.
pub fn sort_lex<C: PointCollection + ?Sized>(points: &mut C) {
    let n = points.len();
    if n < 2 {
        return;
    }
    for root in (0..n / 2).rev() {
        sift_down(points, root, n);
    }
    for end in (1..n).rev() {
        points.swap(0, end);
        sift_down(points, 0, end);
    }
}

/// Restore the max-heap property below `root` within `[0, end)`.
fn sift_down<C: PointCollection + ?Sized>(points: &mut C, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && less_at(points, child, child + 1) {
            child += 1;
        }
        if !less_at(points, root, child) {
            return;
        }
        points.swap(root, child);
        root = child;
    }
}

/// True if no point is lexicographically less than its predecessor.
pub fn is_sorted_lex<C: PointCollection + ?Sized>(points: &C) -> bool {
    (1..points.len()).all(|i| !less_at(points, i, i - 1))
}
