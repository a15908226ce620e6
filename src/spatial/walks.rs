//! Geometric traversals that flatten board regions into outcome sequences
//!
//! Every walk filters out empty cells, so the resulting sequences are ready for
//! the sliding-window pattern queries in the analysis layer. Walk order matters:
//! the continuation queries treat the tail of each sequence as the most recent
//! observations along that geometric path.

use std::ops::Range;

use crate::spatial::grid::{Board, Outcome};

/// Eight-connected neighbor offsets in scan order
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Non-empty values along every diagonal of both directions
///
/// Covers the main diagonal and all its parallels (offsets `-(n-1)..=n-1`),
/// then the same set over the left-right mirrored board. Short diagonals are
/// included; callers apply their own minimum-length policy.
pub fn diagonal_runs(board: &Board) -> Vec<Vec<Outcome>> {
    let size = board.size();
    let mut runs = Vec::new();

    for offset in -(size as i32 - 1)..=(size as i32 - 1) {
        let mut run = Vec::new();
        let mut mirrored = Vec::new();
        for row in 0..size {
            let col = row as i32 + offset;
            if col < 0 || col >= size as i32 {
                continue;
            }
            if let Some(outcome) = board.get(row, col as usize) {
                run.push(outcome);
            }
            // Same diagonal read off the left-right mirrored board
            if let Some(outcome) = board.get(row, size - 1 - col as usize) {
                mirrored.push(outcome);
            }
        }
        runs.push(run);
        runs.push(mirrored);
    }

    runs
}

/// Row-wise boustrophedon traversal: odd rows are read right to left
pub fn zigzag_rows(board: &Board) -> Vec<Outcome> {
    let size = board.size();
    let mut sequence = Vec::new();
    for row in 0..size {
        if row % 2 == 0 {
            for col in 0..size {
                if let Some(outcome) = board.get(row, col) {
                    sequence.push(outcome);
                }
            }
        } else {
            for col in (0..size).rev() {
                if let Some(outcome) = board.get(row, col) {
                    sequence.push(outcome);
                }
            }
        }
    }
    sequence
}

/// Column-wise boustrophedon traversal: odd columns are read bottom to top
pub fn zigzag_cols(board: &Board) -> Vec<Outcome> {
    let size = board.size();
    let mut sequence = Vec::new();
    for col in 0..size {
        if col % 2 == 0 {
            for row in 0..size {
                if let Some(outcome) = board.get(row, col) {
                    sequence.push(outcome);
                }
            }
        } else {
            for row in (0..size).rev() {
                if let Some(outcome) = board.get(row, col) {
                    sequence.push(outcome);
                }
            }
        }
    }
    sequence
}

/// Main diagonal followed by the anti-diagonal walked back upward
pub fn zigzag_diagonal(board: &Board) -> Vec<Outcome> {
    let size = board.size();
    let mut sequence = Vec::new();
    for i in 0..size {
        if let Some(outcome) = board.get(i, i) {
            sequence.push(outcome);
        }
    }
    for i in (0..size.saturating_sub(1)).rev() {
        if let Some(outcome) = board.get(i, size - 1 - i) {
            sequence.push(outcome);
        }
    }
    sequence
}

/// Clockwise outside-in spiral over the whole board
pub fn spiral_walk(board: &Board) -> Vec<Outcome> {
    spiral_positions(board.size())
        .into_iter()
        .filter_map(|(row, col)| board.get(row, col))
        .collect()
}

/// Clockwise walk of the outermost ring, starting at the top-left corner
pub fn border_ring(board: &Board) -> Vec<Outcome> {
    ring_positions(board.size())
        .into_iter()
        .filter_map(|(row, col)| board.get(row, col))
        .collect()
}

/// Non-empty outcomes among the eight neighbors of a position
pub fn neighbors(board: &Board, row: usize, col: usize) -> Vec<Outcome> {
    let mut values = Vec::new();
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let r = row as i32 + dr;
        let c = col as i32 + dc;
        if r < 0 || c < 0 {
            continue;
        }
        if let Some(outcome) = board.get(r as usize, c as usize) {
            values.push(outcome);
        }
    }
    values
}

/// In-bounds empty cells among the eight neighbors of a position
pub fn empty_neighbor_positions(board: &Board, row: usize, col: usize) -> Vec<(usize, usize)> {
    let size = board.size();
    let mut positions = Vec::new();
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let r = row as i32 + dr;
        let c = col as i32 + dc;
        if r < 0 || c < 0 || r >= size as i32 || c >= size as i32 {
            continue;
        }
        let (r, c) = (r as usize, c as usize);
        if board.get(r, c).is_none() {
            positions.push((r, c));
        }
    }
    positions
}

/// Row and column spans of the four quadrants
///
/// For odd board sizes the central row and column belong to two adjacent
/// quadrants each, so boundary cells are deliberately double-counted. Order:
/// top-left, top-right, bottom-left, bottom-right.
pub fn quadrant_spans(size: usize) -> [(Range<usize>, Range<usize>); 4] {
    let mid = size.div_ceil(2);
    let low = size - mid;
    [
        (0..mid, 0..mid),
        (0..mid, low..size),
        (low..size, 0..mid),
        (low..size, low..size),
    ]
}

/// Index of the quadrant containing a position, matching [`quadrant_spans`] order
///
/// Positions on the shared central row or column resolve to the earlier
/// quadrant in span order.
pub const fn quadrant_of(size: usize, row: usize, col: usize) -> usize {
    let mid = size.div_ceil(2);
    match (row < mid, col < mid) {
        (true, true) => 0,
        (true, false) => 1,
        (false, true) => 2,
        (false, false) => 3,
    }
}

fn spiral_positions(size: usize) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(size * size);
    if size == 0 {
        return positions;
    }

    let (mut top, mut bottom) = (0usize, size - 1);
    let (mut left, mut right) = (0usize, size - 1);

    loop {
        for col in left..=right {
            positions.push((top, col));
        }
        if top == bottom {
            break;
        }
        for row in top + 1..=bottom {
            positions.push((row, right));
        }
        if left == right {
            break;
        }
        for col in (left..right).rev() {
            positions.push((bottom, col));
        }
        for row in (top + 1..bottom).rev() {
            positions.push((row, left));
        }

        top += 1;
        left += 1;
        if top > bottom || left > right {
            break;
        }
        bottom -= 1;
        right -= 1;
        if top > bottom || left > right {
            break;
        }
    }

    positions
}

fn ring_positions(size: usize) -> Vec<(usize, usize)> {
    let mut positions = Vec::new();
    if size == 0 {
        return positions;
    }
    if size == 1 {
        positions.push((0, 0));
        return positions;
    }

    let last = size - 1;
    for col in 0..=last {
        positions.push((0, col));
    }
    for row in 1..=last {
        positions.push((row, last));
    }
    for col in (0..last).rev() {
        positions.push((last, col));
    }
    for row in (1..last).rev() {
        positions.push((row, 0));
    }
    positions
}
