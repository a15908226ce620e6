//! Cell counting, outcome ratios, and the coarse majority prediction
//!
//! Every analyzer computes these statistics before any shape-specific work:
//! the minimum-data gate lives here, and the majority prediction is the final
//! fallback whenever shape evidence is tied or absent.

use crate::io::configuration::MIN_DATA_POINTS;
use crate::spatial::grid::{Board, Outcome};

/// Derived, stateless snapshot of a board's outcome distribution
///
/// Recomputed on demand for each analysis call; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicStats {
    /// Number of cells holding [`Outcome::A`]
    pub a_count: usize,
    /// Number of cells holding [`Outcome::B`]
    pub b_count: usize,
    /// Total non-empty cells
    pub total: usize,
    /// Share of non-empty cells holding [`Outcome::A`]
    pub a_ratio: f64,
    /// Share of non-empty cells holding [`Outcome::B`]
    pub b_ratio: f64,
    /// Majority-based prediction, `None` below the minimum-data threshold
    pub prediction: Option<Outcome>,
    /// Ratio backing the prediction, 0 when undetermined
    pub confidence: f64,
}

impl BasicStats {
    /// Whether the board held too little data for any prediction
    pub const fn is_undetermined(&self) -> bool {
        self.prediction.is_none()
    }
}

/// Count outcomes and derive the coarse majority prediction
///
/// Boards with fewer than [`MIN_DATA_POINTS`] non-empty cells produce the
/// undetermined form (no prediction, confidence 0). Otherwise the prediction
/// follows the higher ratio, with ties resolving to [`Outcome::B`].
pub fn compute_basic_stats(board: &Board) -> BasicStats {
    let a_count = board.count(Outcome::A);
    let b_count = board.count(Outcome::B);
    let total = a_count + b_count;

    if total < MIN_DATA_POINTS {
        return BasicStats {
            a_count,
            b_count,
            total,
            a_ratio: 0.0,
            b_ratio: 0.0,
            prediction: None,
            confidence: 0.0,
        };
    }

    let a_ratio = a_count as f64 / total as f64;
    let b_ratio = b_count as f64 / total as f64;

    let (prediction, confidence) = if a_ratio > b_ratio {
        (Some(Outcome::A), a_ratio)
    } else {
        (Some(Outcome::B), b_ratio)
    };

    BasicStats {
        a_count,
        b_count,
        total,
        a_ratio,
        b_ratio,
        prediction,
        confidence,
    }
}
