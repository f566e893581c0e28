//! Chain scans and the public hull entry points.

use crate::cfg::{CHAIN_INITIAL_CAPACITY, PARALLEL_MIN_LEN};
use crate::collection::PointCollection;
use crate::order::sort_lex;
use crate::orientation;
use crate::scratch::{Fresh, IndexPool, ScratchProvider};

use super::compact::compact_by_indices;

/// Hull construction options.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Borrow the chain index lists from `IndexPool::global()`.
    pub reuse_buffers: bool,
    /// Inputs at least this long scan both chains concurrently.
    pub parallel_min_len: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            reuse_buffers: false,
            parallel_min_len: PARALLEL_MIN_LEN,
        }
    }
}

/// Sort `points` in place and return the hull as a prefix view of them.
///
/// The view is counterclockwise, starting at the lexicographically smallest
/// point. Inputs with fewer than three points come back whole, sorted.
pub fn compute_hull<C: PointCollection + Sync>(points: C) -> C {
    compute_hull_with(points, HullCfg::default())
}

pub fn compute_hull_with<C: PointCollection + Sync>(mut points: C, cfg: HullCfg) -> C {
    sort_lex(&mut points);
    compute_hull_from_sorted_with(points, cfg)
}

/// Like [`compute_hull`] but skips the sort.
///
/// Pre: `points` is sorted by `x`, then `y`. Unsorted input is not detected and
/// yields a meaningless hull.
pub fn compute_hull_from_sorted<C: PointCollection + Sync>(points: C) -> C {
    compute_hull_from_sorted_with(points, HullCfg::default())
}

pub fn compute_hull_from_sorted_with<C: PointCollection + Sync>(points: C, cfg: HullCfg) -> C {
    if cfg.reuse_buffers {
        compute_hull_from_sorted_in(points, cfg, IndexPool::global())
    } else {
        compute_hull_from_sorted_in(points, cfg, &Fresh)
    }
}

/// Hull of sorted `points`, with index storage taken from `scratch`.
pub fn compute_hull_from_sorted_in<C, S>(points: C, cfg: HullCfg, scratch: &S) -> C
where
    C: PointCollection + Sync,
    S: ScratchProvider + ?Sized,
{
    let n = points.len();
    if n < 3 {
        return points;
    }
    let indices = hull_indices(&points, cfg, scratch);
    tracing::debug!(
        n,
        k = indices.len(),
        parallel = n >= cfg.parallel_min_len,
        "hull"
    );
    let hull = compact_by_indices(points, &indices);
    scratch.release(indices);
    hull
}

/// Hull member indices of sorted `points`, counterclockwise from index 0.
///
/// The returned buffer comes from `scratch`; hand it back with
/// `scratch.release` when done. For `n < 3` this is `0..n`. Indices are
/// distinct even when rounding lets a near-collinear point survive in both
/// chains.
pub fn hull_indices<C, S>(points: &C, cfg: HullCfg, scratch: &S) -> Vec<usize>
where
    C: PointCollection + Sync + ?Sized,
    S: ScratchProvider + ?Sized,
{
    let n = points.len();
    let cap = n.min(CHAIN_INITIAL_CAPACITY);
    let mut lower = scratch.acquire(cap);
    if n < 3 {
        lower.extend(0..n);
        return lower;
    }
    let mut upper = scratch.acquire(cap);
    lower.extend([0, 1]);
    upper.extend([n - 1, n - 2]);

    if n >= cfg.parallel_min_len {
        rayon::join(
            || scan_chain(points, 2..n, &mut lower),
            || scan_chain(points, (0..n - 2).rev(), &mut upper),
        );
    } else {
        scan_chain(points, 2..n, &mut lower);
        scan_chain(points, (0..n - 2).rev(), &mut upper);
    }

    // Each chain ends where the other starts.
    lower.pop();
    upper.pop();
    // lower is strictly increasing; skip upper entries it already holds
    let split = lower.len();
    for &i in &upper {
        if lower[..split].binary_search(&i).is_err() {
            lower.push(i);
        }
    }
    scratch.release(upper);
    lower
}

/// Push `order` onto `stack`, popping every non-left turn first.
fn scan_chain<C, I>(points: &C, order: I, stack: &mut Vec<usize>)
where
    C: PointCollection + ?Sized,
    I: Iterator<Item = usize>,
{
    for i in order {
        let p = points.take(i);
        while stack.len() >= 2 {
            let m = stack.len();
            if orientation(points.take(stack[m - 2]), points.take(stack[m - 1]), p) > 0.0 {
                break;
            }
            stack.pop();
        }
        stack.push(i);
    }
}
