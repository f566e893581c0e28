//! Defaults for hull construction and the scratch pool (internal).
//!
//! Policy
//! - Fixed constants; `HullCfg` and `IndexPool::with_max_retained` override
//!   them per call site when needed.

/// Below this size the two chain scans run on the calling thread.
pub(crate) const PARALLEL_MIN_LEN: usize = 4096;
/// Initial room per chain stack; stacks grow on demand past it.
pub(crate) const CHAIN_INITIAL_CAPACITY: usize = 64;
/// Buffers an `IndexPool` keeps around after `release`.
pub(crate) const POOL_MAX_RETAINED: usize = 8;
