//! Sequence-based analyzers: diagonal, zig-zag, and spiral walks
//!
//! All three reduce the board to one-dimensional outcome sequences and apply
//! the continuation query. They differ only in which walks they take and how
//! multiple walks are folded into one answer.

use crate::io::configuration::MIN_LINE_SAMPLES;
use crate::shapes::scan::{compare_ratios, continuation_vote};
use crate::spatial::grid::{Board, Outcome};
use crate::spatial::walks;

/// Diagonal analyzer: mean follow-on probability across all diagonal runs
///
/// Scans every diagonal of both directions, applies the continuation query to
/// runs with at least three non-empty values, and averages the resulting
/// probabilities. Ties and pattern-free boards yield no signal.
pub fn diagonal(board: &Board) -> Option<Outcome> {
    let mut a_sum = 0.0;
    let mut b_sum = 0.0;
    let mut matched = 0usize;

    for run in walks::diagonal_runs(board) {
        if run.len() < MIN_LINE_SAMPLES {
            continue;
        }
        if let Some((a_prob, b_prob)) = continuation_vote(&run) {
            a_sum += a_prob;
            b_sum += b_prob;
            matched += 1;
        }
    }

    if matched == 0 {
        return None;
    }
    compare_ratios(a_sum / matched as f64, b_sum / matched as f64)
}

/// Zig-zag analyzer: best continuation among the three boustrophedon walks
///
/// Each traversal votes independently; the traversal with the highest
/// follow-on confidence wins. Within a traversal, equal probabilities lean
/// toward [`Outcome::B`], matching the majority tie-break convention.
pub fn zigzag(board: &Board) -> Option<Outcome> {
    let traversals = [
        walks::zigzag_rows(board),
        walks::zigzag_cols(board),
        walks::zigzag_diagonal(board),
    ];

    let mut best: Option<(Outcome, f64)> = None;

    for sequence in &traversals {
        if sequence.len() < MIN_LINE_SAMPLES {
            continue;
        }
        let Some((a_prob, b_prob)) = continuation_vote(sequence) else {
            continue;
        };

        let confidence = a_prob.max(b_prob);
        let prediction = if a_prob > b_prob {
            Outcome::A
        } else {
            Outcome::B
        };

        if best.is_none_or(|(_, best_confidence)| confidence > best_confidence) {
            best = Some((prediction, confidence));
        }
    }

    best.map(|(prediction, _)| prediction)
}

/// Spiral analyzer: continuation along the single outside-in walk
pub fn spiral(board: &Board) -> Option<Outcome> {
    let sequence = walks::spiral_walk(board);
    if sequence.len() < MIN_LINE_SAMPLES {
        return None;
    }
    let (a_prob, b_prob) = continuation_vote(&sequence)?;
    compare_ratios(a_prob, b_prob)
}
