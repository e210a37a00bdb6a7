//! Parallel backtracking search for planar Langford sequences.
//!
//! Key optimizations:
//! - Explicit decision stack instead of recursion (tiny, flat search frames)
//! - Open pairs packed into one u64 per routing side; matching the most
//!   recent opening is a trailing-zeros scan plus `x &= x - 1`
//! - Per-depth snapshots of availability and open sets, so backtracking
//!   is an array read with no undo log
//! - Static hash-based partitioning of subtrees across worker threads
//!
//! At each sequence position the search either opens a new pair or closes
//! the most recently opened pair of one side, below or above. Closing at
//! position `k` against an opening at `j` places the value `k - j - 1`;
//! the close is rejected if that value is out of range or already used.
//! Keeping the two sides in separate bracket stacks is exactly the
//! planarity constraint: a line routed on one side can only reach the
//! innermost open bracket of that side without crossing another.
//!
//! Two prunes remove most symmetric twins during the search: the pair at
//! position 0 always connects from below (top-bottom mirrors), and the
//! (1,1) pair closes only in the first half of the sequence (left-right
//! reversals). The survivors are removed after the search by sorting and
//! deduplicating the collected records.

use std::sync::Mutex;
use std::thread;

use crate::partition;
use crate::results;
use crate::sequence::{feasible, ClosingPositions, MAX_N};

/// Decision value meaning "open a new pair" rather than close one.
const OPEN: i8 = -1;

/// Default number of worker threads / partition slots.
///
/// One less than a power of two spreads the modulus of the partition hash
/// evenly across the slots.
pub const DEFAULT_WORKERS: usize = 63;

/// Routing side of the line connecting a pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Below = 0,
    Above = 1,
}

/// Runtime configuration for a solve.
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Number of worker threads, each owning one partition slot.
    pub workers: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}

/// One unexplored choice in the search tree.
///
/// Substitutes for a recursive call frame: four bytes on a flat stack
/// instead of a native frame, so a worker's whole search context stays
/// within a few kilobytes.
#[derive(Clone, Copy)]
struct Decision {
    /// Sequence position the choice applies at.
    depth: u8,
    /// Value to place, less one, or `OPEN` for a new pair.
    value: i8,
    /// Which side's bracket stack the choice touches.
    side: Side,
    /// Pairs opened so far on the path to this choice.
    opened: u8,
}

/// Counts the distinct planar Langford sequences of size `n`.
///
/// Sizes outside `1..=31`, and sizes with n ≡ 1 or 2 (mod 4), have no
/// solutions and return 0 immediately without searching.
pub fn solve(n: usize) -> u64 {
    solve_with(n, &SolverConfig::default())
}

/// Like [`solve`], with an explicit worker count.
pub fn solve_with(n: usize, config: &SolverConfig) -> u64 {
    unique_solutions(n, config).len() as u64
}

/// Runs the full partitioned search and returns the sorted, deduplicated
/// solution records.
pub fn unique_solutions(n: usize, config: &SolverConfig) -> Vec<ClosingPositions> {
    if !feasible(n) {
        return Vec::new();
    }
    let workers = config.workers.max(1);
    let solutions = Mutex::new(Vec::new());
    thread::scope(|scope| {
        for slot in 0..workers {
            let solutions = &solutions;
            scope.spawn(move || search(n, workers, slot, solutions));
        }
    });
    let mut all = solutions.into_inner().unwrap();
    results::unique(&mut all);
    all
}

/// Explores one worker's share of the search tree to exhaustion.
///
/// Completed solutions are appended to the shared collector; nothing is
/// read back from it while any worker may still be writing.
fn search(n: usize, workers: usize, slot: usize, solutions: &Mutex<Vec<ClosingPositions>>) {
    let two_n = 2 * n;
    // an opening at position j occupies bit 2n-1-j, so the least
    // significant set bit is always the most recently opened pair
    let top_bit = 1u64 << (two_n - 1);
    let split_depth = partition::split_depth(n);

    // state snapshots indexed by depth: backtracking to depth k re-reads
    // exactly the values computed when k was first reached
    let mut availability = [0u32; 2 * MAX_N + 1];
    availability[0] = (1u32 << n) - 1;
    let mut open = [[0u64; 2]; 2 * MAX_N + 1];
    let mut pos: ClosingPositions = [0; MAX_N];

    let mut stack: Vec<Decision> = Vec::with_capacity(6 * two_n);
    // every solution starts by opening a below-pair at position 0; the
    // top-bottom mirror image would start above and is never generated
    stack.push(Decision {
        depth: 0,
        value: OPEN,
        side: Side::Below,
        opened: 0,
    });

    while let Some(step) = stack.pop() {
        let k = step.depth as usize;
        let side = step.side as usize;
        let mut avail = availability[k];
        open[k + 1] = open[k];
        let mut opened = step.opened;

        if step.value >= 0 {
            let m = step.value as usize;
            pos[m] = step.depth;
            avail ^= 1 << m;
            // drop the matched bracket, the most recent one on this side
            open[k + 1][side] &= open[k + 1][side] - 1;
        } else {
            open[k + 1][side] |= top_bit >> k;
            opened += 1;
        }
        let k = k + 1;
        availability[k] = avail;

        if k == two_n {
            solutions.lock().unwrap().push(pos);
            continue;
        }

        if workers > 1
            && split_depth == Some(k)
            && partition::slot_of(open[k], avail, workers) != slot
        {
            // some other worker owns this subtree
            continue;
        }

        for side in [Side::Below, Side::Above] {
            let pending = open[k][side as usize];
            if pending == 0 {
                continue;
            }
            // distance from the most recent opening to position k, less
            // one; -1 when the opening sits immediately to the left
            let value = k as i32 + pending.trailing_zeros() as i32 - two_n as i32 - 1;
            if (0..n as i32).contains(&value) && avail >> value & 1 == 1 {
                // the (1,1) pair closes only in the first half; its
                // left-right reversal twin covers the second half
                if value != 0 || k <= n {
                    stack.push(Decision {
                        depth: k as u8,
                        value: value as i8,
                        side,
                        opened,
                    });
                }
            }
        }
        // a completed sequence has exactly n opens, and `opened` never
        // decreases, so capping it also guarantees that depth 2n is only
        // reached with every value placed
        if (opened as usize) < n {
            stack.push(Decision {
                depth: k as u8,
                value: OPEN,
                side: Side::Above,
                opened,
            });
            stack.push(Decision {
                depth: k as u8,
                value: OPEN,
                side: Side::Below,
                opened,
            });
        }
    }
}
