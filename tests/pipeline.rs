//! Validates the file-processing pipeline from board files to forecast reports

use std::path::PathBuf;

use shapecast::Result;
use shapecast::io::board::{load_board, parse_performance};
use shapecast::io::cli::{Cli, FileProcessor};
use shapecast::spatial::Outcome;

fn cli_for(target: PathBuf, performance: Option<PathBuf>) -> Cli {
    Cli {
        target,
        performance,
        quiet: true,
        no_skip: false,
    }
}

#[test]
fn test_board_with_explicit_history() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let board_path = dir.path().join("game.board");
    std::fs::write(
        &board_path,
        "# two moves so far\n\
         A . . . .\n\
         . B . . .\n\
         . . . . .\n\
         . . . . .\n\
         . . . . .\n\
         1 1 B\n\
         0 0 A\n",
    )?;

    let parsed = load_board(&board_path)?;
    assert_eq!(parsed.board.size(), 5);
    assert_eq!(parsed.history.len(), 2);

    // Explicit order overrides row-major reconstruction
    let last = parsed.history.last().copied();
    assert_eq!(
        last.map(|record| (record.row, record.col, record.outcome)),
        Some((0, 0, Outcome::A))
    );
    Ok(())
}

#[test]
fn test_forecast_written_next_to_board() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let board_path = dir.path().join("session.board");
    std::fs::write(
        &board_path,
        "A A A . .\n\
         B B . . .\n\
         A A . . .\n\
         . . . . .\n\
         . . . . .\n",
    )?;

    let mut processor = FileProcessor::new(cli_for(board_path, None));
    processor.process()?;

    let report_path = dir.path().join("session_forecast.txt");
    let report = std::fs::read_to_string(&report_path)?;
    assert!(report.contains("Board 5x5, 7 filled (A: 5, B: 2)"));
    assert!(report.contains("Basic majority: A"));
    assert!(report.contains("Analyzer predictions:"));
    assert!(report.contains("Diagonal"));
    assert!(report.contains("Border"));
    // No performance file was given, so no ensemble section appears
    assert!(!report.contains("Ensemble:"));
    Ok(())
}

#[test]
fn test_directory_batch_with_performance_records() -> Result<()> {
    let dir = tempfile::tempdir()?;
    for name in ["first.board", "second.board"] {
        std::fs::write(
            dir.path().join(name),
            "A A A A A\n\
             A A A A A\n\
             A A A A A\n\
             A A A A A\n\
             A A A A A\n",
        )?;
    }
    std::fs::write(dir.path().join("notes.txt"), "not a board")?;

    let perf_path = dir.path().join("accuracy.csv");
    std::fs::write(
        &perf_path,
        "# analyzer accuracy\n\
         Diagonal,12,75.0\n\
         Rectangle,9,66.7\n\
         Zig-Zag,20,81.5\n",
    )?;

    let mut processor =
        FileProcessor::new(cli_for(dir.path().to_path_buf(), Some(perf_path)));
    processor.process()?;

    for name in ["first_forecast.txt", "second_forecast.txt"] {
        let report = std::fs::read_to_string(dir.path().join(name))?;
        assert!(report.contains("Ensemble: A"), "{name} should carry an ensemble decision");
        assert!(report.contains("Top performing analyzers:"));
        assert!(report.contains("Zig-Zag: 81.5%"));
    }
    Ok(())
}

#[test]
fn test_existing_forecast_is_skipped() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let board_path = dir.path().join("done.board");
    std::fs::write(
        &board_path,
        "A B A B A\n\
         B A B A B\n\
         . . . . .\n\
         . . . . .\n\
         . . . . .\n",
    )?;

    let report_path = dir.path().join("done_forecast.txt");
    std::fs::write(&report_path, "stale report")?;

    let mut processor = FileProcessor::new(cli_for(board_path.clone(), None));
    processor.process()?;
    let untouched = std::fs::read_to_string(&report_path)?;
    assert_eq!(untouched, "stale report");

    // With skipping disabled the report is regenerated
    let mut cli = cli_for(board_path, None);
    cli.no_skip = true;
    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    let regenerated = std::fs::read_to_string(&report_path)?;
    assert!(regenerated.contains("Board 5x5"));
    Ok(())
}

#[test]
fn test_performance_parsing_validates_fields() {
    let parsed = parse_performance("Diagonal,10,0.7\nHeatmap,4,55\n").ok();
    let Some(map) = parsed else {
        unreachable!("valid records parse");
    };
    assert_eq!(map.len(), 2);
    assert!(
        map.get("Diagonal")
            .is_some_and(|record| record.total_predictions == 10)
    );

    assert!(parse_performance("Diagonal,ten,0.7\n").is_err());
    assert!(parse_performance("Diagonal,10\n").is_err());
}

#[test]
fn test_non_board_target_is_rejected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("data.csv");
    std::fs::write(&path, "A,B\n")?;

    let mut processor = FileProcessor::new(cli_for(path, None));
    assert!(processor.process().is_err());
    Ok(())
}
