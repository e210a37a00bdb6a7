//! Planar Langford sequence counter.
//!
//! Runs the exhaustive search for one or more problem sizes, reports each
//! count with its elapsed time, and cross-checks it against the
//! previously published results.

use std::time::Instant;

use clap::Parser;
use tracing::{info, warn, Level};

use langford::{results, sequence, unique_solutions, SolverConfig, DEFAULT_WORKERS};

/// Sizes with published planar Langford counts, solved when no explicit
/// sizes are given.
const DEFAULT_SIZES: &[usize] = &[3, 4, 7, 8, 11, 12, 15, 16, 19, 20, 23, 24, 27, 28];

/// Counts planar Langford sequences by exhaustive parallel search.
#[derive(Parser)]
#[command(name = "langford")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Problem sizes to solve; defaults to every size with a published count.
    #[arg(value_parser = clap::value_parser!(u64).range(1..=31))]
    sizes: Vec<u64>,

    /// Number of worker threads / partition slots.
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Print every unique solution sequence.
    #[arg(long)]
    print: bool,
}

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    let cli = Cli::parse();

    let config = SolverConfig {
        workers: cli.workers.max(1),
    };
    let sizes: Vec<usize> = if cli.sizes.is_empty() {
        DEFAULT_SIZES.to_vec()
    } else {
        cli.sizes.iter().map(|&n| n as usize).collect()
    };

    for n in sizes {
        run(n, &config, cli.print);
    }
}

/// Solves one size and reports the count, verdict, and elapsed time.
fn run(n: usize, config: &SolverConfig, print: bool) {
    info!("Solving Planar Langford for n = {n}");
    let start = Instant::now();
    let solutions = unique_solutions(n, config);
    let elapsed = start.elapsed().as_millis();
    let count = solutions.len() as u64;

    if print {
        for pos in &solutions {
            let seq = sequence::value_sequence(pos, n);
            info!("Sequence {}", sequence::format_sequence(&seq));
        }
    }

    match results::published_count(n) {
        None => info!("Result {count} for n = {n} is NEW and took {elapsed} milliseconds"),
        Some(published) if published == count => {
            info!(
                "Result {count} for n = {n} MATCHES previously published result \
                 and took {elapsed} milliseconds"
            );
        }
        Some(published) => {
            warn!(
                "Result {count} for n = {n} MISMATCHES previously published result \
                 {published} and took {elapsed} milliseconds"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_snapshot_n3() {
        let solutions = unique_solutions(3, &SolverConfig::default());

        let output: Vec<String> = solutions
            .iter()
            .map(|pos| {
                let seq = sequence::value_sequence(pos, 3);
                sequence::format_sequence(&seq).trim_start().to_string()
            })
            .collect();

        insta::assert_snapshot!(output.join("\n"), @"3  1  2  1  3  2");
    }

    #[test]
    fn test_default_sizes_are_the_published_table() {
        for &n in DEFAULT_SIZES {
            assert!(results::published_count(n).is_some(), "n = {n}");
        }
    }
}
