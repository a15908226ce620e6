//! Area-based analyzers: rectangle, L-shape, T-shape, quadrant, and border
//!
//! These analyzers score two-dimensional regions rather than walk sequences.
//! Rectangles weight each region by fill density; the L and T templates take a
//! plain mean over their rotations; the quadrant analyzer anchors on the
//! region containing the most recent move; the border treats the outer ring
//! as one closed sequence.

use crate::io::configuration::{
    MIN_LINE_SAMPLES, MIN_REGION_SAMPLES, QUADRANT_DOMINANCE_THRESHOLD,
    QUADRANT_MAJORITY_SAMPLES, RECTANGLE_SIZES,
};
use crate::shapes::scan::{
    DensityWeightedVote, L_TEMPLATES, MeanRatioVote, T_TEMPLATES, anchored_regions,
    compare_ratios, continuation_vote,
};
use crate::spatial::grid::{Board, MoveHistory, Outcome};
use crate::spatial::walks::{border_ring, quadrant_of, quadrant_spans};

/// Rectangle analyzer: sliding regions weighted by fill density
///
/// Scans every 2x2, 2x3, 3x2, and 3x3 placement; regions with at least four
/// non-empty cells contribute their outcome ratio weighted by how full they
/// are, so dense regions dominate sparse ones.
pub fn rectangle(board: &Board) -> Option<Outcome> {
    let size = board.size();
    let mut vote = DensityWeightedVote::new();

    for (rows, cols) in RECTANGLE_SIZES {
        if rows > size || cols > size {
            continue;
        }
        for anchor_row in 0..=size - rows {
            for anchor_col in 0..=size - cols {
                let (a, b) = board.region_counts(
                    anchor_row..anchor_row + rows,
                    anchor_col..anchor_col + cols,
                );
                let non_empty = a + b;
                if non_empty < MIN_REGION_SAMPLES {
                    continue;
                }
                let weight = non_empty as f64 / (rows * cols) as f64;
                vote.push(a, b, weight);
            }
        }
    }

    vote.decide()
}

/// L-shape analyzer: mean ratio over the four template rotations
pub fn l_shape(board: &Board) -> Option<Outcome> {
    template_mean(board, &L_TEMPLATES)
}

/// T-shape analyzer: mean ratio over the four template rotations
pub fn t_shape(board: &Board) -> Option<Outcome> {
    template_mean(board, &T_TEMPLATES)
}

fn template_mean(board: &Board, templates: &[[(usize, usize); 5]; 4]) -> Option<Outcome> {
    let mut vote = MeanRatioVote::new();

    for template in templates {
        for values in anchored_regions(board, template) {
            if values.len() < MIN_REGION_SAMPLES {
                continue;
            }
            let a = values.iter().filter(|v| **v == Outcome::A).count();
            vote.push(a, values.len() - a);
        }
    }

    vote.decide()
}

/// Quadrant analyzer: majority within the most recent move's quadrant
///
/// The four quadrants overlap on the central row and column by design. With a
/// move history, the quadrant containing the last move decides by majority
/// when it holds enough samples; otherwise a dominance check asks whether that
/// quadrant carries the board's highest ratio above the dominance threshold.
/// Without history there is no anchor quadrant and no signal.
pub fn quadrant(board: &Board, history: Option<&MoveHistory>) -> Option<Outcome> {
    let last = history.and_then(MoveHistory::last)?;

    let spans = quadrant_spans(board.size());
    let counts: Vec<(usize, usize)> = spans
        .iter()
        .map(|(rows, cols)| board.region_counts(rows.clone(), cols.clone()))
        .collect();

    let last_quadrant = quadrant_of(board.size(), last.row, last.col);
    let (last_a, last_b) = counts.get(last_quadrant).copied()?;

    if last_a + last_b >= QUADRANT_MAJORITY_SAMPLES {
        if let Some(outcome) = compare_ratios(last_a as f64, last_b as f64) {
            return Some(outcome);
        }
    }

    // Dominance check: does the last-move quadrant carry the board's highest
    // ratio for either outcome, and is it decisive?
    let ratios: Vec<(f64, f64)> = counts
        .iter()
        .map(|&(a, b)| {
            let total = a + b;
            if total == 0 {
                (0.0, 0.0)
            } else {
                (a as f64 / total as f64, b as f64 / total as f64)
            }
        })
        .collect();

    let max_a = max_ratio_index(&ratios, |(a_ratio, _)| *a_ratio)?;
    let max_b = max_ratio_index(&ratios, |(_, b_ratio)| *b_ratio)?;

    if last_quadrant == max_a.0 && max_a.1 > QUADRANT_DOMINANCE_THRESHOLD {
        return Some(Outcome::A);
    }
    if last_quadrant == max_b.0 && max_b.1 > QUADRANT_DOMINANCE_THRESHOLD {
        return Some(Outcome::B);
    }

    None
}

fn max_ratio_index<F>(ratios: &[(f64, f64)], key: F) -> Option<(usize, f64)>
where
    F: Fn(&(f64, f64)) -> f64,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, pair) in ratios.iter().enumerate() {
        let value = key(pair);
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((index, value));
        }
    }
    best
}

/// Border analyzer: continuation along the clockwise outer-ring walk
pub fn border(board: &Board) -> Option<Outcome> {
    let ring = border_ring(board);
    if ring.len() < MIN_LINE_SAMPLES {
        return None;
    }
    let (a_prob, b_prob) = continuation_vote(&ring)?;
    compare_ratios(a_prob, b_prob)
}
