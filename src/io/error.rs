//! Error types for analysis and file operations
//!
//! The statistical path itself never fails: insufficient data and absent
//! signals degrade to undetermined or fallback predictions. Errors here cover
//! the construction boundary (board mutation, file parsing) and the CLI.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all board and file operations
#[derive(Debug)]
pub enum AnalysisError {
    /// Failed to read a board or performance file from the filesystem
    BoardLoad {
        /// Path to the file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Board file contents don't describe a valid board
    InvalidBoardData {
        /// Description of what's wrong with the data
        reason: String,
    },

    /// Placement target lies outside the board
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Board side length
        size: usize,
    },

    /// Placement target already holds an outcome
    ///
    /// Cells are write-once within an analysis session; only an explicit
    /// clear empties them again.
    CellOccupied {
        /// Row of the occupied cell
        row: usize,
        /// Column of the occupied cell
        col: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoardLoad { path, source } => {
                write!(f, "Failed to load board '{}': {source}", path.display())
            }
            Self::InvalidBoardData { reason } => {
                write!(f, "Invalid board data: {reason}")
            }
            Self::OutOfBounds { row, col, size } => {
                write!(
                    f,
                    "Position ({row}, {col}) is outside the {size}x{size} board"
                )
            }
            Self::CellOccupied { row, col } => {
                write!(f, "Cell ({row}, {col}) already holds an outcome")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BoardLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Create an invalid board data error
pub fn invalid_board_data(reason: &impl ToString) -> AnalysisError {
    AnalysisError::InvalidBoardData {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AnalysisError {
    AnalysisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
