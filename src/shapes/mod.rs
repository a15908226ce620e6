//! The shape analyzer bank: eleven geometric detectors over one scanning core
//!
//! Each analyzer follows the same contract: gate on the minimum-data threshold,
//! extract its geometric template from the board, aggregate the per-region or
//! per-sequence evidence, and fall back to the coarse majority prediction when
//! the shape-specific signal is tied or absent. Analyzers never mutate the
//! board and never fail; malformed geometry simply yields zero matching
//! regions and the fallback path.

/// Smoothed density map analyzer
pub mod heatmap;
/// Sequence-based analyzers: diagonal, zig-zag, spiral
pub mod lines;
/// Locality-based analyzers: neighborhood, scatter
pub mod proximity;
/// Area-based analyzers: rectangle, L-shape, T-shape, quadrant, border
pub mod regions;
/// Shared scanning and vote-aggregation primitives
pub mod scan;

use crate::analysis::compute_basic_stats;
use crate::spatial::grid::{Board, MoveHistory, Outcome};

/// Unified result shape for every analyzer and the ensemble
///
/// `prediction` is `None` when the data is insufficient or no signal is
/// decisive after the fallback; `confidence` is populated only where the
/// producing analyzer can back it with a meaningful ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerResult {
    /// Directional prediction, `None` for undetermined
    pub prediction: Option<Outcome>,
    /// Optional confidence in `[0, 1]`
    pub confidence: Option<f64>,
}

impl AnalyzerResult {
    /// The undetermined result returned below the minimum-data threshold
    pub const fn undetermined() -> Self {
        Self {
            prediction: None,
            confidence: None,
        }
    }

    /// A directional prediction without a confidence value
    pub const fn decided(outcome: Outcome) -> Self {
        Self {
            prediction: Some(outcome),
            confidence: None,
        }
    }

    /// A directional prediction backed by a confidence value
    pub const fn with_confidence(outcome: Outcome, confidence: f64) -> Self {
        Self {
            prediction: Some(outcome),
            confidence: Some(confidence),
        }
    }
}

/// The eleven shape detectors, each scanning one geometric template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    /// Diagonal runs in both directions
    Diagonal,
    /// Sliding rectangular regions weighted by fill density
    Rectangle,
    /// Four rotations of the five-cell L template
    LShape,
    /// Four rotations of the five-cell T template
    TShape,
    /// Boustrophedon traversals by row, column, and diagonal
    ZigZag,
    /// Four overlapping quadrants around the board center
    Quadrant,
    /// Smoothed per-outcome density maps
    Heatmap,
    /// Clockwise outside-in spiral walk
    Spiral,
    /// Eight-neighborhood of the most recent move
    Neighborhood,
    /// Per-outcome clustering of placements
    Scatter,
    /// Clockwise walk of the outermost ring
    Border,
}

impl ShapeKind {
    /// Every shape analyzer in display order
    pub const ALL: [Self; 11] = [
        Self::Diagonal,
        Self::Rectangle,
        Self::LShape,
        Self::TShape,
        Self::ZigZag,
        Self::Quadrant,
        Self::Heatmap,
        Self::Spiral,
        Self::Neighborhood,
        Self::Scatter,
        Self::Border,
    ];

    /// Human-readable name, also the key used by performance records
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Diagonal => "Diagonal",
            Self::Rectangle => "Rectangle",
            Self::LShape => "L-Shape",
            Self::TShape => "T-Shape",
            Self::ZigZag => "Zig-Zag",
            Self::Quadrant => "Quadrant",
            Self::Heatmap => "Heatmap",
            Self::Spiral => "Spiral",
            Self::Neighborhood => "Neighborhood",
            Self::Scatter => "Scatter",
            Self::Border => "Border",
        }
    }

    /// Run this analyzer against a board snapshot
    ///
    /// The board and history are read-only inputs; a fresh result is
    /// constructed on every call.
    pub fn analyze(self, board: &Board, history: Option<&MoveHistory>) -> AnalyzerResult {
        let stats = compute_basic_stats(board);
        if stats.is_undetermined() {
            return AnalyzerResult::undetermined();
        }

        let signal = match self {
            Self::Diagonal => lines::diagonal(board),
            Self::Rectangle => regions::rectangle(board),
            Self::LShape => regions::l_shape(board),
            Self::TShape => regions::t_shape(board),
            Self::ZigZag => lines::zigzag(board),
            Self::Quadrant => regions::quadrant(board, history),
            Self::Heatmap => heatmap::analyze(board, history),
            Self::Spiral => lines::spiral(board),
            Self::Neighborhood => proximity::neighborhood(board, history),
            Self::Scatter => proximity::scatter(board),
            Self::Border => regions::border(board),
        };

        // The majority prediction, not undetermined, is the safety net once
        // the minimum-data gate has passed
        match signal {
            Some(outcome) => AnalyzerResult::decided(outcome),
            None => AnalyzerResult {
                prediction: stats.prediction,
                confidence: None,
            },
        }
    }
}
