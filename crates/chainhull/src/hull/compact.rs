//! Move selected slots to the front of a collection using swaps only.

use std::collections::HashMap;

use crate::collection::PointCollection;

/// Permute `points` so slot `t` holds the element that sat at `indices[t]`,
/// for every `t < indices.len()`, and return the view over that prefix.
///
/// The remaining elements end up after the prefix in unspecified order; none
/// is lost or duplicated. Extra memory is `O(indices.len())`: only slots that
/// have moved are tracked, every other slot still holds its original element.
///
/// Panics if an index is out of bounds or appears twice.
pub fn compact_by_indices<C: PointCollection>(mut points: C, indices: &[usize]) -> C {
    let n = points.len();
    let k = indices.len();
    assert!(k <= n, "{k} hull indices for {n} points");

    // original index -> current slot, and current slot -> original index
    let mut slot_of: HashMap<usize, usize> = HashMap::with_capacity(2 * k);
    let mut origin_at: HashMap<usize, usize> = HashMap::with_capacity(2 * k);

    for (t, &idx) in indices.iter().enumerate() {
        assert!(idx < n, "hull index {idx} out of bounds for {n} points");
        let cur = slot_of.get(&idx).copied().unwrap_or(idx);
        // Slots before t are final; reaching one means idx was already placed.
        assert!(
            cur >= t,
            "hull index {idx} resolved to finalised slot {cur} while filling slot {t}"
        );
        if cur == t {
            continue;
        }
        let occupant = origin_at.get(&cur).copied().unwrap_or(cur);
        assert_eq!(occupant, idx, "slot tracking lost original {idx}");
        let displaced = origin_at.get(&t).copied().unwrap_or(t);

        points.swap(t, cur);
        slot_of.insert(idx, t);
        origin_at.insert(t, idx);
        slot_of.insert(displaced, cur);
        origin_at.insert(cur, displaced);
    }

    points.slice(0..k)
}
