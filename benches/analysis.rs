//! Performance measurement for the analyzer bank at varying board densities

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shapecast::analysis::compute_basic_stats;
use shapecast::ensemble::{HybridEnsemble, PerformanceMap, PerformanceRecord};
use shapecast::shapes::ShapeKind;
use shapecast::spatial::{Board, MoveHistory, Outcome};
use std::hint::black_box;

/// Builds a board filled to the given percentage with alternating outcomes
fn build_board(fill_percent: usize) -> Option<(Board, MoveHistory)> {
    let mut board = Board::new(5);
    let mut history = MoveHistory::new();

    let target = (25 * fill_percent) / 100;
    for index in 0..target {
        let (row, col) = (index / 5, index % 5);
        let outcome = if index % 2 == 0 { Outcome::A } else { Outcome::B };
        if board.place(row, col, outcome).is_err() {
            return None;
        }
        history.push(row, col, outcome);
    }

    Some((board, history))
}

/// Measures the full analyzer bank as the board fills from 25% to 100%
fn bench_analyzer_bank(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzer_bank");

    for fill_percent in &[25, 50, 75, 100] {
        let Some((board, history)) = build_board(*fill_percent) else {
            group.finish();
            return;
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(fill_percent),
            fill_percent,
            |b, _| {
                b.iter(|| {
                    for kind in ShapeKind::ALL {
                        black_box(kind.analyze(black_box(&board), Some(&history)));
                    }
                });
            },
        );
    }

    group.finish();
}

/// Measures basic statistics extraction on a full board
fn bench_basic_stats(c: &mut Criterion) {
    let Some((board, _)) = build_board(100) else {
        return;
    };

    c.bench_function("basic_stats_full_board", |b| {
        b.iter(|| black_box(compute_basic_stats(black_box(&board))));
    });
}

/// Measures one ensemble evaluation including analyzer ranking
fn bench_ensemble(c: &mut Criterion) {
    let Some((board, history)) = build_board(100) else {
        return;
    };

    let mut records = PerformanceMap::new();
    for (index, kind) in ShapeKind::ALL.iter().enumerate() {
        records.insert(
            kind.display_name().to_string(),
            PerformanceRecord::new(10 + index, 50.0 + index as f64),
        );
    }

    let ensemble = HybridEnsemble::default();
    c.bench_function("hybrid_ensemble_full_board", |b| {
        b.iter(|| {
            black_box(ensemble.analyze(
                black_box(&board),
                Some(&history),
                Some(&records),
            ));
        });
    });
}

criterion_group!(
    benches,
    bench_analyzer_bank,
    bench_basic_stats,
    bench_ensemble
);
criterion_main!(benches);
