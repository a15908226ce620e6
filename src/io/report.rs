//! Forecast report rendering
//!
//! Turns one analysis pass into the plain-text report written next to each
//! board file: the board itself, the basic statistics, every shape analyzer's
//! prediction, and the ensemble decision with its diagnostic lines when a
//! performance map was supplied.

use std::fmt::Write as _;

use crate::analysis::BasicStats;
use crate::ensemble::EnsembleReport;
use crate::shapes::{AnalyzerResult, ShapeKind};
use crate::spatial::grid::{Board, Outcome};

/// Text label for a prediction slot
pub const fn prediction_label(prediction: Option<Outcome>) -> &'static str {
    match prediction {
        Some(Outcome::A) => "A",
        Some(Outcome::B) => "B",
        None => "Undetermined",
    }
}

/// Render a full forecast report
///
/// `analyzer_results` pairs each shape analyzer with its result;
/// `ensemble` carries the ensemble decision and report when one was run.
pub fn render_forecast(
    board: &Board,
    stats: &BasicStats,
    analyzer_results: &[(ShapeKind, AnalyzerResult)],
    ensemble: Option<&(AnalyzerResult, EnsembleReport)>,
) -> String {
    let mut out = String::new();

    let size = board.size();
    let _ = writeln!(
        out,
        "Board {size}x{size}, {} filled (A: {}, B: {})",
        stats.total, stats.a_count, stats.b_count
    );
    out.push('\n');

    for row in 0..size {
        for col in 0..size {
            if col > 0 {
                out.push(' ');
            }
            out.push(match board.get(row, col) {
                Some(outcome) => outcome.symbol(),
                None => '.',
            });
        }
        out.push('\n');
    }
    out.push('\n');

    if stats.is_undetermined() {
        let _ = writeln!(out, "Basic majority: Undetermined (insufficient data)");
    } else {
        let _ = writeln!(
            out,
            "Basic majority: {} (confidence {:.3})",
            prediction_label(stats.prediction),
            stats.confidence
        );
    }
    out.push('\n');

    let _ = writeln!(out, "Analyzer predictions:");
    for (kind, result) in analyzer_results {
        let _ = writeln!(
            out,
            "  {:<13} {}",
            kind.display_name(),
            prediction_label(result.prediction)
        );
    }

    if let Some((result, report)) = ensemble {
        out.push('\n');
        match result.confidence {
            Some(confidence) => {
                let _ = writeln!(
                    out,
                    "Ensemble: {} (confidence {confidence:.3})",
                    prediction_label(result.prediction)
                );
            }
            None => {
                let _ = writeln!(out, "Ensemble: {}", prediction_label(result.prediction));
            }
        }
        for line in report.lines() {
            let _ = writeln!(out, "  {line}");
        }
    }

    out
}
