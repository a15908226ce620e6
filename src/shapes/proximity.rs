//! Locality-based analyzers: neighborhood majority and scatter clustering

use crate::io::configuration::{MIN_LINE_SAMPLES, SCATTER_SPREAD_THRESHOLD};
use crate::shapes::scan::compare_ratios;
use crate::spatial::grid::{Board, MoveHistory, Outcome};
use crate::spatial::walks::neighbors;

/// Neighborhood analyzer: majority among the last move's eight neighbors
///
/// Requires a move history to anchor on and at least three non-empty
/// neighbors; ties and sparse neighborhoods yield no signal.
pub fn neighborhood(board: &Board, history: Option<&MoveHistory>) -> Option<Outcome> {
    let last = history.and_then(MoveHistory::last)?;

    let values = neighbors(board, last.row, last.col);
    if values.len() < MIN_LINE_SAMPLES {
        return None;
    }

    let a = values.iter().filter(|v| **v == Outcome::A).count();
    compare_ratios(a as f64, (values.len() - a) as f64)
}

/// Scatter analyzer: predicts the more tightly clustered outcome
///
/// Computes the mean pairwise distance between placements of each outcome
/// (three placements minimum per side). A clustered outcome is treated as the
/// active streak; the gap between the two spreads must exceed
/// [`SCATTER_SPREAD_THRESHOLD`] cells before the analyzer takes a side.
pub fn scatter(board: &Board) -> Option<Outcome> {
    let a_spread = outcome_spread(board, Outcome::A)?;
    let b_spread = outcome_spread(board, Outcome::B)?;

    if (a_spread - b_spread).abs() <= SCATTER_SPREAD_THRESHOLD {
        return None;
    }
    Some(if a_spread < b_spread {
        Outcome::A
    } else {
        Outcome::B
    })
}

fn outcome_spread(board: &Board, outcome: Outcome) -> Option<f64> {
    let positions: Vec<(usize, usize)> = board
        .filled_cells()
        .into_iter()
        .filter(|record| record.outcome == outcome)
        .map(|record| (record.row, record.col))
        .collect();

    if positions.len() < MIN_LINE_SAMPLES {
        return None;
    }

    let mut distance_sum = 0.0;
    let mut pairs = 0usize;
    for (index, &(row_a, col_a)) in positions.iter().enumerate() {
        for &(row_b, col_b) in positions.iter().skip(index + 1) {
            let dr = row_a.abs_diff(row_b) as f64;
            let dc = col_a.abs_diff(col_b) as f64;
            distance_sum += dr.hypot(dc);
            pairs += 1;
        }
    }

    if pairs == 0 {
        return None;
    }
    Some(distance_sum / pairs as f64)
}
