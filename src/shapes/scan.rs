//! Shared scanning and vote-aggregation primitives
//!
//! The analyzers differ in the geometry they extract, not in how they score
//! it. This module holds the common pieces: anchored offset-template region
//! scanning, mean-ratio and density-weighted vote accumulators, and the
//! continuation query applied to walk sequences.

use crate::analysis::patterns::continuation_counts;
use crate::io::configuration::{CONTINUATION_PATTERN_LENGTH, MIN_LINE_SAMPLES};
use crate::spatial::grid::{Board, Outcome};

/// Cell offsets of the four L-template rotations within a 3x3 anchor window
pub const L_TEMPLATES: [[(usize, usize); 5]; 4] = [
    // Corner opens down-right
    [(0, 0), (1, 0), (2, 0), (0, 1), (0, 2)],
    // Corner opens down-left
    [(0, 2), (1, 2), (2, 2), (0, 0), (0, 1)],
    // Corner opens up-right
    [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
    // Corner opens up-left
    [(0, 2), (1, 2), (2, 2), (2, 0), (2, 1)],
];

/// Cell offsets of the four T-template rotations within a 3x3 anchor window
pub const T_TEMPLATES: [[(usize, usize); 5]; 4] = [
    // Stem points down
    [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)],
    // Stem points right
    [(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)],
    // Stem points up
    [(2, 0), (2, 1), (2, 2), (0, 1), (1, 1)],
    // Stem points left
    [(0, 2), (1, 2), (2, 2), (1, 0), (1, 1)],
];

/// Non-empty values of an offset template anchored at every fitting position
///
/// A board smaller than the template span yields no regions at all, which
/// downstream voting treats as an absent signal.
pub fn anchored_regions(board: &Board, offsets: &[(usize, usize)]) -> Vec<Vec<Outcome>> {
    let span_rows = offsets.iter().map(|(r, _)| r + 1).max().unwrap_or(0);
    let span_cols = offsets.iter().map(|(_, c)| c + 1).max().unwrap_or(0);
    let size = board.size();
    if span_rows == 0 || span_rows > size || span_cols > size {
        return Vec::new();
    }

    let mut regions = Vec::new();
    for anchor_row in 0..=size - span_rows {
        for anchor_col in 0..=size - span_cols {
            let values: Vec<Outcome> = offsets
                .iter()
                .filter_map(|(dr, dc)| board.get(anchor_row + dr, anchor_col + dc))
                .collect();
            regions.push(values);
        }
    }
    regions
}

/// Accumulates per-region outcome ratios and votes for the higher mean
#[derive(Debug, Default)]
pub struct MeanRatioVote {
    a_sum: f64,
    b_sum: f64,
    regions: usize,
}

impl MeanRatioVote {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            a_sum: 0.0,
            b_sum: 0.0,
            regions: 0,
        }
    }

    /// Add one region's outcome counts; empty regions are ignored
    pub fn push(&mut self, a_count: usize, b_count: usize) {
        let total = a_count + b_count;
        if total == 0 {
            return;
        }
        self.a_sum += a_count as f64 / total as f64;
        self.b_sum += b_count as f64 / total as f64;
        self.regions += 1;
    }

    /// Outcome with the strictly higher mean ratio, `None` on ties or no data
    pub fn decide(&self) -> Option<Outcome> {
        if self.regions == 0 {
            return None;
        }
        compare_ratios(
            self.a_sum / self.regions as f64,
            self.b_sum / self.regions as f64,
        )
    }
}

/// Accumulates region ratios weighted by an external factor such as fill density
#[derive(Debug, Default)]
pub struct DensityWeightedVote {
    a_sum: f64,
    b_sum: f64,
    total_weight: f64,
}

impl DensityWeightedVote {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            a_sum: 0.0,
            b_sum: 0.0,
            total_weight: 0.0,
        }
    }

    /// Add one region's counts with the given weight; empty regions are ignored
    pub fn push(&mut self, a_count: usize, b_count: usize, weight: f64) {
        let total = a_count + b_count;
        if total == 0 {
            return;
        }
        self.a_sum += weight * a_count as f64 / total as f64;
        self.b_sum += weight * b_count as f64 / total as f64;
        self.total_weight += weight;
    }

    /// Outcome with the strictly higher weighted ratio, `None` on ties or no data
    pub fn decide(&self) -> Option<Outcome> {
        if self.total_weight <= 0.0 {
            return None;
        }
        compare_ratios(
            self.a_sum / self.total_weight,
            self.b_sum / self.total_weight,
        )
    }
}

/// Follow-on probabilities for the trailing two-outcome pattern of a sequence
///
/// Takes the pattern formed by the third- and second-to-last values and asks
/// how earlier occurrences of that pattern continued within the same sequence.
/// Returns `(a_prob, b_prob)`, or `None` when the sequence is too short or the
/// pattern never recurred with a follower.
pub fn continuation_vote(sequence: &[Outcome]) -> Option<(f64, f64)> {
    if sequence.len() < MIN_LINE_SAMPLES {
        return None;
    }
    let pattern_start = sequence.len().checked_sub(CONTINUATION_PATTERN_LENGTH + 1)?;
    let first = sequence.get(pattern_start).copied()?;
    let second = sequence.get(pattern_start + 1).copied()?;

    let (a, b) = continuation_counts(sequence, (first, second));
    let total = a + b;
    if total == 0 {
        return None;
    }
    Some((a as f64 / total as f64, b as f64 / total as f64))
}

/// Strict comparison of two ratios; equality yields no decision
pub const fn compare_ratios(a_ratio: f64, b_ratio: f64) -> Option<Outcome> {
    if a_ratio > b_ratio {
        Some(Outcome::A)
    } else if b_ratio > a_ratio {
        Some(Outcome::B)
    } else {
        None
    }
}
