//! Accuracy-weighted voting among the top-ranked shape analyzers
//!
//! The ensemble holds no state across calls: every invocation is a pure
//! function of the board, the history, and the externally supplied accuracy
//! snapshot. Candidate analyzers and their records arrive as explicit inputs;
//! there is no ambient registry to consult.

use crate::analysis::compute_basic_stats;
use crate::ensemble::performance::PerformanceMap;
use crate::io::configuration::{
    ENSEMBLE_FALLBACK_CONFIDENCE, ENSEMBLE_MIN_TRACKED, ENSEMBLE_TIE_CONFIDENCE,
    ENSEMBLE_TOP_COUNT,
};
use crate::shapes::{AnalyzerResult, ShapeKind};
use crate::spatial::grid::{Board, MoveHistory, Outcome};

/// Meta-analyzer that votes among the historically best shape analyzers
#[derive(Debug, Clone, Copy)]
pub struct HybridEnsemble {
    /// How many top-ranked analyzers participate in the vote
    pub top_count: usize,
    /// Minimum tracked predictions before an analyzer qualifies
    pub min_tracked: usize,
}

impl Default for HybridEnsemble {
    fn default() -> Self {
        Self {
            top_count: ENSEMBLE_TOP_COUNT,
            min_tracked: ENSEMBLE_MIN_TRACKED,
        }
    }
}

/// Diagnostic record of one ensemble evaluation
///
/// Informational side channel only; the functional contract is carried by the
/// returned [`AnalyzerResult`].
#[derive(Debug, Clone, Default)]
pub struct EnsembleReport {
    /// Selected analyzers with their normalized success rates, rank order
    pub selected: Vec<(&'static str, f64)>,
    /// Raw vote count for [`Outcome::A`]
    pub a_votes: usize,
    /// Raw vote count for [`Outcome::B`]
    pub b_votes: usize,
    /// Success-rate-weighted sum for [`Outcome::A`]
    pub a_weight: f64,
    /// Success-rate-weighted sum for [`Outcome::B`]
    pub b_weight: f64,
}

impl EnsembleReport {
    /// Human-readable progress lines describing the evaluation
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.selected.is_empty() {
            lines.push("No analyzers qualified for the vote".to_string());
            return lines;
        }

        lines.push("Top performing analyzers:".to_string());
        for (name, rate) in &self.selected {
            lines.push(format!("  {name}: {rate:.1}%"));
        }
        lines.push(format!("A votes: {}, B votes: {}", self.a_votes, self.b_votes));
        lines.push(format!(
            "A weight: {:.1}, B weight: {:.1}",
            self.a_weight, self.b_weight
        ));
        lines
    }
}

impl HybridEnsemble {
    /// Create an ensemble with explicit selection parameters
    pub const fn new(top_count: usize, min_tracked: usize) -> Self {
        Self {
            top_count,
            min_tracked,
        }
    }

    /// Evaluate the ensemble for one board snapshot
    ///
    /// Without a performance map the ensemble cannot rank analyzers and
    /// returns the coarse majority prediction with no confidence refinement.
    pub fn analyze(
        &self,
        board: &Board,
        history: Option<&MoveHistory>,
        performance: Option<&PerformanceMap>,
    ) -> AnalyzerResult {
        self.analyze_with_report(board, history, performance).0
    }

    /// Evaluate the ensemble, also returning the diagnostic report
    pub fn analyze_with_report(
        &self,
        board: &Board,
        history: Option<&MoveHistory>,
        performance: Option<&PerformanceMap>,
    ) -> (AnalyzerResult, EnsembleReport) {
        let mut report = EnsembleReport::default();

        let stats = compute_basic_stats(board);
        if stats.is_undetermined() {
            return (AnalyzerResult::undetermined(), report);
        }

        let fallback = AnalyzerResult {
            prediction: stats.prediction,
            confidence: None,
        };

        // Ranking requires external accuracy data
        let Some(performance) = performance else {
            return (fallback, report);
        };
        if performance.is_empty() {
            return (fallback, report);
        }

        // Candidates are the shape analyzers only; the ensemble itself and any
        // names that match no analyzer are never candidates
        let mut candidates: Vec<(ShapeKind, f64)> = ShapeKind::ALL
            .iter()
            .filter_map(|kind| {
                let record = performance.get(kind.display_name())?;
                (record.total_predictions >= self.min_tracked)
                    .then(|| (*kind, record.rate_percent()))
            })
            .collect();

        candidates.sort_by(|left, right| right.1.total_cmp(&left.1));
        candidates.truncate(self.top_count);

        if candidates.is_empty() {
            return (fallback, report);
        }

        report.selected = candidates
            .iter()
            .map(|(kind, rate)| (kind.display_name(), *rate))
            .collect();

        for (kind, rate) in &candidates {
            let result = kind.analyze(board, history);
            match result.prediction {
                Some(Outcome::A) => {
                    report.a_votes += 1;
                    report.a_weight += *rate;
                }
                Some(Outcome::B) => {
                    report.b_votes += 1;
                    report.b_weight += *rate;
                }
                None => {}
            }
        }

        if report.a_votes + report.b_votes == 0 {
            return (fallback, report);
        }

        let total_weight = report.a_weight + report.b_weight;
        let result = if report.a_weight > report.b_weight {
            AnalyzerResult::with_confidence(Outcome::A, report.a_weight / total_weight)
        } else if report.b_weight > report.a_weight {
            AnalyzerResult::with_confidence(Outcome::B, report.b_weight / total_weight)
        } else if report.a_votes > report.b_votes {
            AnalyzerResult::with_confidence(Outcome::A, ENSEMBLE_TIE_CONFIDENCE)
        } else if report.b_votes > report.a_votes {
            AnalyzerResult::with_confidence(Outcome::B, ENSEMBLE_TIE_CONFIDENCE)
        } else {
            AnalyzerResult {
                prediction: stats.prediction,
                confidence: Some(ENSEMBLE_FALLBACK_CONFIDENCE),
            }
        };

        (result, report)
    }
}
