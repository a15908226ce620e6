//! Plain-text board and performance file parsing
//!
//! Board files hold one row of symbols per line (`A`, `B`, `.` for empty),
//! optionally followed by explicit history lines `row col symbol` in placement
//! order. Blank lines and `#` comments are ignored. When no history is given,
//! a row-major placement order is reconstructed. Bounds and cell uniqueness
//! are enforced here, at the construction boundary; the analyzers themselves
//! never validate.

use std::path::Path;

use crate::ensemble::performance::{PerformanceMap, PerformanceRecord};
use crate::io::error::{AnalysisError, Result, invalid_board_data};
use crate::spatial::grid::{Board, MoveHistory, Outcome};

/// A parsed board together with its move history
#[derive(Debug, Clone)]
pub struct BoardFile {
    /// The populated board
    pub board: Board,
    /// Placement order, explicit or reconstructed row-major
    pub history: MoveHistory,
}

/// Read and parse a board file from disk
///
/// # Errors
///
/// Returns an error when the file cannot be read or its contents don't
/// describe a valid board.
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<BoardFile> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| AnalysisError::BoardLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_board(&content)
}

/// Parse board file contents
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidBoardData`] for malformed rows, unknown
/// symbols, ragged dimensions, or history entries that contradict the grid.
pub fn parse_board(content: &str) -> Result<BoardFile> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let first = lines
        .first()
        .ok_or_else(|| invalid_board_data(&"board file is empty"))?;
    let size = first.split_whitespace().count();
    if size == 0 {
        return Err(invalid_board_data(&"first board row holds no symbols"));
    }
    if lines.len() < size {
        return Err(invalid_board_data(&format!(
            "expected {size} board rows, found {}",
            lines.len()
        )));
    }

    let mut grid: Vec<Vec<Option<Outcome>>> = Vec::with_capacity(size);
    for (row_index, line) in lines.iter().take(size).enumerate() {
        let mut row = Vec::with_capacity(size);
        for token in line.split_whitespace() {
            row.push(parse_cell(token, row_index)?);
        }
        if row.len() != size {
            return Err(invalid_board_data(&format!(
                "row {row_index} holds {} symbols, expected {size}",
                row.len()
            )));
        }
        grid.push(row);
    }

    let mut board = Board::new(size);
    let mut history = MoveHistory::new();

    let history_lines = lines.get(size..).unwrap_or(&[]);
    if history_lines.is_empty() {
        // No explicit placement order: reconstruct row-major
        for (row, cells) in grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(outcome) = cell {
                    board.place(row, col, *outcome)?;
                    history.push(row, col, *outcome);
                }
            }
        }
    } else {
        for line in history_lines {
            let (row, col, outcome) = parse_history_entry(line)?;
            let expected = grid.get(row).and_then(|cells| cells.get(col)).copied();
            if expected != Some(Some(outcome)) {
                return Err(invalid_board_data(&format!(
                    "history entry '{line}' does not match the grid"
                )));
            }
            board.place(row, col, outcome)?;
            history.push(row, col, outcome);
        }
        if board.filled_count() != grid.iter().flatten().filter(|c| c.is_some()).count() {
            return Err(invalid_board_data(
                &"history does not cover every non-empty cell",
            ));
        }
    }

    Ok(BoardFile { board, history })
}

/// Read and parse a performance record file from disk
///
/// # Errors
///
/// Returns an error when the file cannot be read or a line is malformed.
pub fn load_performance<P: AsRef<Path>>(path: P) -> Result<PerformanceMap> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| AnalysisError::BoardLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_performance(&content)
}

/// Parse `name,total_predictions,success_rate` lines into a performance map
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidBoardData`] for lines without three fields
/// or with non-numeric counts and rates.
pub fn parse_performance(content: &str) -> Result<PerformanceMap> {
    let mut map = PerformanceMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.splitn(3, ',').map(str::trim);
        let (Some(name), Some(total), Some(rate)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid_board_data(&format!(
                "performance line '{line}' needs name,total,success_rate"
            )));
        };

        let total: usize = total.parse().map_err(|_parse_error| {
            invalid_board_data(&format!("performance line '{line}' has a non-numeric total"))
        })?;
        let rate: f64 = rate.parse().map_err(|_parse_error| {
            invalid_board_data(&format!("performance line '{line}' has a non-numeric rate"))
        })?;

        map.insert(name.to_string(), PerformanceRecord::new(total, rate));
    }

    Ok(map)
}

fn parse_cell(token: &str, row_index: usize) -> Result<Option<Outcome>> {
    match token {
        "A" | "a" => Ok(Some(Outcome::A)),
        "B" | "b" => Ok(Some(Outcome::B)),
        "." | "-" => Ok(None),
        other => Err(invalid_board_data(&format!(
            "unknown symbol '{other}' in row {row_index}"
        ))),
    }
}

fn parse_history_entry(line: &str) -> Result<(usize, usize, Outcome)> {
    let mut fields = line.split_whitespace();
    let (Some(row), Some(col), Some(symbol)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(invalid_board_data(&format!(
            "history entry '{line}' needs row col symbol"
        )));
    };

    let row: usize = row.parse().map_err(|_parse_error| {
        invalid_board_data(&format!("history entry '{line}' has a non-numeric row"))
    })?;
    let col: usize = col.parse().map_err(|_parse_error| {
        invalid_board_data(&format!("history entry '{line}' has a non-numeric column"))
    })?;
    let outcome = parse_cell(symbol, row)?
        .ok_or_else(|| invalid_board_data(&format!("history entry '{line}' names an empty cell")))?;

    Ok((row, col, outcome))
}
