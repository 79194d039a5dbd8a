//! Criterion micro-benchmarks for grid word search operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordgrid::{Pos, WordSearcher};
use wordgrid_bench::dense_board;

/// Benchmark: neighbours() on all 10K cells of a 100x100 board.
fn bench_neighbours_100x100(c: &mut Criterion) {
    let searcher = WordSearcher::new(dense_board(100, 100, 42));

    c.bench_function("neighbours_100x100", |b| {
        b.iter(|| {
            for r in 0..100i32 {
                for col in 0..100i32 {
                    let n = searcher.neighbours(Pos::new(r, col));
                    black_box(&n);
                }
            }
        });
    });
}

/// Benchmark: greedy query for a 16-character word over a 100x100 board.
///
/// The word is read off the board's own first row so the scan finds
/// plausible partial matches instead of failing at depth one.
fn bench_contains_100x100(c: &mut Criterion) {
    let board = dense_board(100, 100, 42);
    let word: String = (0..16)
        .map(|col| board.get(Pos::new(0, col)).expect("in bounds"))
        .collect();
    let searcher = WordSearcher::new(board);

    c.bench_function("contains_100x100", |b| {
        b.iter(|| black_box(searcher.contains(black_box(&word))));
    });
}

/// Benchmark: exhaustive query for the same word over the same board.
fn bench_contains_exhaustive_100x100(c: &mut Criterion) {
    let board = dense_board(100, 100, 42);
    let word: String = (0..16)
        .map(|col| board.get(Pos::new(0, col)).expect("in bounds"))
        .collect();
    let searcher = WordSearcher::new(board);

    c.bench_function("contains_exhaustive_100x100", |b| {
        b.iter(|| black_box(searcher.contains_exhaustive(black_box(&word))));
    });
}

criterion_group!(
    benches,
    bench_neighbours_100x100,
    bench_contains_100x100,
    bench_contains_exhaustive_100x100
);
criterion_main!(benches);
