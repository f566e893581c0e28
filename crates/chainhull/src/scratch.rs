//! Scratch storage for the chain index lists.
//!
//! Repeated hulls over similarly sized inputs can borrow their lower/upper
//! stacks from a pool instead of allocating each call. The pool only affects
//! allocation; a missing or poisoned pool falls back to a fresh `Vec`.

use std::sync::{Mutex, OnceLock};

use crate::cfg::POOL_MAX_RETAINED;

/// Source of reusable `Vec<usize>` buffers.
pub trait ScratchProvider: Sync {
    /// An empty buffer with room for at least `capacity` indices.
    fn acquire(&self, capacity: usize) -> Vec<usize>;
    /// Hand a buffer back once its contents are no longer needed.
    fn release(&self, buf: Vec<usize>);
}

/// Allocates on every `acquire`; `release` just drops.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fresh;

impl ScratchProvider for Fresh {
    #[inline]
    fn acquire(&self, capacity: usize) -> Vec<usize> {
        Vec::with_capacity(capacity)
    }
    #[inline]
    fn release(&self, _buf: Vec<usize>) {}
}

/// LIFO free list of index buffers.
#[derive(Debug)]
pub struct IndexPool {
    free: Mutex<Vec<Vec<usize>>>,
    max_retained: usize,
}

impl Default for IndexPool {
    fn default() -> Self {
        Self::with_max_retained(POOL_MAX_RETAINED)
    }
}

impl IndexPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool that keeps at most `max_retained` buffers; extra releases are dropped.
    pub fn with_max_retained(max_retained: usize) -> Self {
        Self {
            free: Mutex::new(Vec::new()),
            max_retained,
        }
    }

    /// Process-wide pool used when `HullCfg::reuse_buffers` is set.
    pub fn global() -> &'static IndexPool {
        static GLOBAL: OnceLock<IndexPool> = OnceLock::new();
        GLOBAL.get_or_init(IndexPool::default)
    }

    /// Buffers currently waiting for reuse.
    pub fn retained(&self) -> usize {
        self.free.lock().map(|free| free.len()).unwrap_or(0)
    }
}

impl ScratchProvider for IndexPool {
    fn acquire(&self, capacity: usize) -> Vec<usize> {
        let pooled = self.free.lock().ok().and_then(|mut free| free.pop());
        match pooled {
            Some(mut buf) => {
                tracing::trace!(capacity, reused = buf.capacity(), "scratch_hit");
                buf.clear();
                buf.reserve(capacity);
                buf
            }
            None => {
                tracing::trace!(capacity, "scratch_miss");
                Vec::with_capacity(capacity)
            }
        }
    }

    fn release(&self, mut buf: Vec<usize>) {
        buf.clear();
        if let Ok(mut free) = self.free.lock() {
            if free.len() < self.max_retained {
                free.push(buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_reuses_released_buffers() {
        let pool = IndexPool::new();
        let mut a = pool.acquire(16);
        a.extend([1, 2, 3]);
        let ptr = a.as_ptr();
        pool.release(a);
        assert_eq!(pool.retained(), 1);
        let b = pool.acquire(8);
        assert!(b.is_empty());
        assert!(b.capacity() >= 16);
        assert_eq!(b.as_ptr(), ptr);
        assert_eq!(pool.retained(), 0);
    }

    #[test]
    fn pool_retention_is_bounded() {
        let pool = IndexPool::with_max_retained(2);
        for _ in 0..5 {
            pool.release(Vec::with_capacity(4));
        }
        assert_eq!(pool.retained(), 2);
    }

    #[test]
    fn empty_pool_allocates() {
        let pool = IndexPool::with_max_retained(0);
        let buf = pool.acquire(10);
        assert!(buf.capacity() >= 10);
        pool.release(buf);
        assert_eq!(pool.retained(), 0);
    }
}
