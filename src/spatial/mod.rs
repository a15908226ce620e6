//! Board state management and geometric traversal utilities

/// Board, outcome symbols, and move history
pub mod grid;
/// Sequence extraction walks over the board
pub mod walks;

pub use grid::{Board, MoveHistory, MoveRecord, Outcome};
