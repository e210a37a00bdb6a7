//! Benchmarks for the planar Langford solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use langford::{partition, sequence, solve_with, unique_solutions, SolverConfig};

/// Benchmark a full solve of the smallest non-trivial size with solutions.
fn bench_solve_n8(c: &mut Criterion) {
    let config = SolverConfig { workers: 7 };
    c.bench_function("solve_n8", |b| {
        b.iter(|| solve_with(black_box(8), &config))
    });
}

/// Benchmark a mid-size solve with a realistic worker count.
fn bench_solve_n12(c: &mut Criterion) {
    let config = SolverConfig { workers: 63 };
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);
    group.bench_function("n12", |b| b.iter(|| solve_with(black_box(12), &config)));
    group.finish();
}

/// Benchmark the partition hash on its own.
fn bench_partition_hash(c: &mut Criterion) {
    c.bench_function("partition_slot", |b| {
        b.iter(|| {
            partition::slot_of(
                black_box([0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210]),
                black_box(0x1357_9bdf),
                63,
            )
        })
    });
}

/// Benchmark reconstructing a printable sequence from a solution record.
fn bench_value_sequence(c: &mut Criterion) {
    let solutions = unique_solutions(8, &SolverConfig { workers: 1 });
    let pos = solutions[0];

    c.bench_function("value_sequence", |b| {
        b.iter(|| sequence::value_sequence(black_box(&pos), 8))
    });
}

criterion_group!(
    benches,
    bench_solve_n8,
    bench_solve_n12,
    bench_partition_hash,
    bench_value_sequence
);
criterion_main!(benches);
