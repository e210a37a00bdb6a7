//! Planar Langford sequence counter.
//!
//! Counts the permutations of 1, 1, 2, 2, ..., n, n in which the two
//! occurrences of each value m are separated by exactly m other entries
//! and the lines connecting all pairs can be drawn without crossing.
//! The count is found by an exhaustive parallel backtracking search; see
//! [`solver`] for the algorithm and [`solve`] for the entry point.

pub mod partition;
pub mod results;
pub mod sequence;
pub mod solver;

pub use solver::{solve, solve_with, unique_solutions, SolverConfig, DEFAULT_WORKERS};
