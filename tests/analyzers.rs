//! Validates analyzer gating, majority tie-breaking, and ensemble vote weighting

use shapecast::Result;
use shapecast::analysis::compute_basic_stats;
use shapecast::ensemble::{HybridEnsemble, PerformanceMap, PerformanceRecord};
use shapecast::shapes::ShapeKind;
use shapecast::spatial::walks::{quadrant_of, quadrant_spans};
use shapecast::spatial::{Board, MoveHistory, Outcome};

/// Fills a 5x5 board row by row from the given outcomes, recording the
/// placement order as move history.
fn board_from_sequence(outcomes: &[Outcome]) -> Result<(Board, MoveHistory)> {
    let mut board = Board::new(5);
    let mut history = MoveHistory::new();
    for (index, &outcome) in outcomes.iter().enumerate() {
        let (row, col) = (index / 5, index % 5);
        board.place(row, col, outcome)?;
        history.push(row, col, outcome);
    }
    Ok((board, history))
}

#[test]
fn test_every_analyzer_undetermined_below_minimum_data() -> Result<()> {
    let (board, history) =
        board_from_sequence(&[Outcome::A, Outcome::A, Outcome::B, Outcome::A])?;

    for kind in ShapeKind::ALL {
        let result = kind.analyze(&board, Some(&history));
        assert!(
            result.prediction.is_none(),
            "{} should be undetermined with 4 cells",
            kind.display_name()
        );
        assert!(result.confidence.is_none());
    }

    let ensemble = HybridEnsemble::default().analyze(&board, Some(&history), None);
    assert!(ensemble.prediction.is_none());
    Ok(())
}

#[test]
fn test_majority_tie_resolves_to_b() -> Result<()> {
    let (board, _) = board_from_sequence(&[
        Outcome::A,
        Outcome::B,
        Outcome::A,
        Outcome::B,
        Outcome::A,
        Outcome::B,
    ])?;

    let stats = compute_basic_stats(&board);
    assert_eq!(stats.a_count, 3);
    assert_eq!(stats.b_count, 3);
    assert_eq!(stats.prediction, Some(Outcome::B));
    Ok(())
}

#[test]
fn test_full_alternating_board_statistics() -> Result<()> {
    let sequence: Vec<Outcome> = (0..25)
        .map(|i| if i % 2 == 0 { Outcome::A } else { Outcome::B })
        .collect();
    let (board, _) = board_from_sequence(&sequence)?;

    let stats = compute_basic_stats(&board);
    assert_eq!(stats.a_count, 13);
    assert_eq!(stats.b_count, 12);
    assert_eq!(stats.prediction, Some(Outcome::A));
    assert!((stats.confidence - 13.0 / 25.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn test_uniform_board_makes_every_analyzer_agree() -> Result<()> {
    let sequence = vec![Outcome::A; 25];
    let (board, history) = board_from_sequence(&sequence)?;

    for kind in ShapeKind::ALL {
        let result = kind.analyze(&board, Some(&history));
        assert_eq!(
            result.prediction,
            Some(Outcome::A),
            "{} should predict A on an all-A board",
            kind.display_name()
        );
    }
    Ok(())
}

#[test]
fn test_ensemble_without_records_falls_back_to_majority() -> Result<()> {
    let sequence: Vec<Outcome> = (0..10)
        .map(|i| if i < 7 { Outcome::A } else { Outcome::B })
        .collect();
    let (board, history) = board_from_sequence(&sequence)?;

    let stats = compute_basic_stats(&board);
    let ensemble = HybridEnsemble::default();

    let missing = ensemble.analyze(&board, Some(&history), None);
    assert_eq!(missing.prediction, stats.prediction);
    assert!(missing.confidence.is_none());

    let empty = PerformanceMap::new();
    let unranked = ensemble.analyze(&board, Some(&history), Some(&empty));
    assert_eq!(unranked.prediction, stats.prediction);
    assert!(unranked.confidence.is_none());
    Ok(())
}

#[test]
fn test_ensemble_selects_top_three_by_rate() -> Result<()> {
    let sequence = vec![Outcome::A; 25];
    let (board, history) = board_from_sequence(&sequence)?;

    let mut records = PerformanceMap::new();
    records.insert("Diagonal".to_string(), PerformanceRecord::new(10, 70.0));
    records.insert("Rectangle".to_string(), PerformanceRecord::new(10, 60.0));
    records.insert("Zig-Zag".to_string(), PerformanceRecord::new(10, 90.0));
    records.insert("Heatmap".to_string(), PerformanceRecord::new(10, 40.0));
    // Below the tracking minimum, never a candidate regardless of rate
    records.insert("Quadrant".to_string(), PerformanceRecord::new(2, 99.0));

    let (result, report) =
        HybridEnsemble::default().analyze_with_report(&board, Some(&history), Some(&records));

    let names: Vec<&str> = report.selected.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["Zig-Zag", "Diagonal", "Rectangle"]);

    // All three selected analyzers vote A on a uniform board
    assert_eq!(report.a_votes, 3);
    assert_eq!(report.b_votes, 0);
    assert!((report.a_weight - 220.0).abs() < 1e-9);
    assert_eq!(result.prediction, Some(Outcome::A));
    assert!(result.confidence.is_some_and(|c| (c - 1.0).abs() < 1e-9));
    Ok(())
}

#[test]
fn test_ensemble_confidence_is_weight_share() -> Result<()> {
    let sequence = vec![Outcome::A; 25];
    let (board, history) = board_from_sequence(&sequence)?;

    // Fractional and percentage rates must rank identically
    let mut fractional = PerformanceMap::new();
    fractional.insert("Diagonal".to_string(), PerformanceRecord::new(10, 0.7));
    fractional.insert("Rectangle".to_string(), PerformanceRecord::new(10, 0.6));
    fractional.insert("Zig-Zag".to_string(), PerformanceRecord::new(10, 0.9));

    let (result, report) =
        HybridEnsemble::default().analyze_with_report(&board, Some(&history), Some(&fractional));

    let names: Vec<&str> = report.selected.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["Zig-Zag", "Diagonal", "Rectangle"]);

    let total = report.a_weight + report.b_weight;
    assert!(
        result
            .confidence
            .is_some_and(|c| (c - report.a_weight / total).abs() < 1e-9)
    );
    Ok(())
}

/// A board where the analyzer votes split deterministically: the last move at
/// (3, 1) sits in an all-A pocket, so Neighborhood and Quadrant vote A, while
/// the border ring reads `B B B B B B A A B` and its continuation query votes B.
fn split_vote_board() -> Result<(Board, MoveHistory)> {
    let mut board = Board::new(5);
    let mut history = MoveHistory::new();

    let moves = [
        (0, 0, Outcome::B),
        (0, 1, Outcome::B),
        (0, 2, Outcome::B),
        (0, 3, Outcome::B),
        (0, 4, Outcome::B),
        (1, 0, Outcome::B),
        (1, 1, Outcome::B),
        (1, 2, Outcome::B),
        (1, 3, Outcome::B),
        (1, 4, Outcome::B),
        (2, 0, Outcome::A),
        (2, 1, Outcome::A),
        (3, 0, Outcome::A),
        (3, 1, Outcome::A),
    ];
    for (row, col, outcome) in moves {
        board.place(row, col, outcome)?;
        history.push(row, col, outcome);
    }
    Ok((board, history))
}

#[test]
fn test_split_vote_confidence_is_weighted_share() -> Result<()> {
    let (board, history) = split_vote_board()?;

    let mut records = PerformanceMap::new();
    records.insert("Neighborhood".to_string(), PerformanceRecord::new(10, 70.0));
    records.insert("Quadrant".to_string(), PerformanceRecord::new(10, 60.0));
    records.insert("Border".to_string(), PerformanceRecord::new(10, 90.0));

    let (result, report) =
        HybridEnsemble::default().analyze_with_report(&board, Some(&history), Some(&records));

    // A carries 70 + 60 = 130 weight against Border's 90
    assert_eq!(report.a_votes, 2);
    assert_eq!(report.b_votes, 1);
    assert!((report.a_weight - 130.0).abs() < 1e-9);
    assert!((report.b_weight - 90.0).abs() < 1e-9);

    assert_eq!(result.prediction, Some(Outcome::A));
    assert!(
        result
            .confidence
            .is_some_and(|c| (c - 130.0 / 220.0).abs() < 1e-9)
    );
    Ok(())
}

#[test]
fn test_raising_a_rate_never_lowers_that_outcome_share() -> Result<()> {
    let (board, history) = split_vote_board()?;
    let ensemble = HybridEnsemble::default();

    let mut records = PerformanceMap::new();
    records.insert("Neighborhood".to_string(), PerformanceRecord::new(10, 70.0));
    records.insert("Quadrant".to_string(), PerformanceRecord::new(10, 60.0));
    records.insert("Border".to_string(), PerformanceRecord::new(10, 90.0));

    let (_, before) =
        ensemble.analyze_with_report(&board, Some(&history), Some(&records));

    records.insert("Border".to_string(), PerformanceRecord::new(10, 95.0));
    let (after_result, after) =
        ensemble.analyze_with_report(&board, Some(&history), Some(&records));

    let b_share_before = before.b_weight / (before.a_weight + before.b_weight);
    let b_share_after = after.b_weight / (after.a_weight + after.b_weight);
    assert!(b_share_after >= b_share_before);

    // The boost was not enough to flip the weighted majority
    assert_eq!(after_result.prediction, Some(Outcome::A));
    Ok(())
}

#[test]
fn test_quadrant_spans_overlap_in_center() {
    let spans = quadrant_spans(5);

    // The center row and column belong to more than one quadrant
    let in_count = |row: usize, col: usize| {
        spans
            .iter()
            .filter(|(rows, cols)| rows.contains(&row) && cols.contains(&col))
            .count()
    };

    assert_eq!(in_count(2, 2), 4);
    assert_eq!(in_count(0, 2), 2);
    assert_eq!(in_count(0, 0), 1);
    assert_eq!(in_count(4, 4), 1);

    // Assignment precedence still maps every cell to exactly one quadrant
    assert_eq!(quadrant_of(5, 2, 2), 0);
    assert_eq!(quadrant_of(5, 0, 4), 1);
    assert_eq!(quadrant_of(5, 4, 0), 2);
    assert_eq!(quadrant_of(5, 4, 4), 3);
}
