//! Static work partitioning across solver threads.
//!
//! Every worker walks the search tree from the root, but at one fixed
//! shallow depth each subtree is claimed by exactly one worker: the
//! partial state reached there is hashed to a slot, and workers abandon
//! subtrees whose slot is not their own. The hash is deterministic, so
//! the same state lands on the same slot in every worker and the union of
//! all workers' coverage is the whole tree with no double-counting and no
//! coordination.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Depth at which subtrees are assigned to worker slots.
///
/// Chosen empirically: shallow enough that every worker reaches it almost
/// instantly, deep enough that the tree has fanned out into many more
/// subtrees than there are workers. Returns `None` for sizes too small to
/// split, in which case every worker explores the whole tree and the
/// aggregator removes the resulting duplicates.
#[inline]
pub fn split_depth(n: usize) -> Option<usize> {
    let depth = if n > 19 { 8 + n / 3 } else { n.checked_sub(5)? };
    (depth >= 1).then_some(depth)
}

/// Maps a partial search state to the worker slot that owns its subtree.
#[inline]
pub fn slot_of(open: [u64; 2], availability: u32, workers: usize) -> usize {
    let mut hasher = FxHasher::default();
    (open[0], open[1], availability).hash(&mut hasher);
    (hasher.finish() % workers as u64) as usize
}
