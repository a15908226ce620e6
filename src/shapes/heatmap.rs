//! Smoothed per-outcome density map analyzer
//!
//! Builds one density map per outcome by sliding a 3x3 window over the board
//! interior, with half-weight windows along the edges and quarter-weight
//! windows in the corners. With a move history the analyzer inspects the empty
//! neighbors of the most recent move; without one it compares hotspot counts
//! between the two maps.

use ndarray::Array2;

use crate::io::configuration::{DENSITY_GAP_THRESHOLD, HOTSPOT_THRESHOLD, MIN_HOTSPOTS};
use crate::spatial::grid::{Board, MoveHistory, Outcome};
use crate::spatial::walks::empty_neighbor_positions;

/// Density maps for both outcomes over the full board
#[derive(Debug, Clone)]
pub struct DensityMaps {
    /// Smoothed density of [`Outcome::A`] placements
    pub a: Array2<f64>,
    /// Smoothed density of [`Outcome::B`] placements
    pub b: Array2<f64>,
}

impl DensityMaps {
    /// Density pair at a position, zero outside the board
    pub fn at(&self, row: usize, col: usize) -> (f64, f64) {
        let a = self.a.get([row, col]).copied().unwrap_or(0.0);
        let b = self.b.get([row, col]).copied().unwrap_or(0.0);
        (a, b)
    }
}

/// Build the smoothed density maps for a board
///
/// Interior cells take full 3x3 windows normalized by 9; edge cells take the
/// in-bounds 2x3 or 3x2 window normalized by 6; corner cells take the 2x2
/// window normalized by its own size. Normalizing by window area keeps the
/// density of a fully packed window at 1.
pub fn density_maps(board: &Board) -> DensityMaps {
    let size = board.size();
    let mut a_map = Array2::<f64>::zeros((size, size));
    let mut b_map = Array2::<f64>::zeros((size, size));

    for row in 0..size {
        for col in 0..size {
            let row_start = row.saturating_sub(1);
            let row_end = (row + 2).min(size);
            let col_start = col.saturating_sub(1);
            let col_end = (col + 2).min(size);

            let (a, b) = board.region_counts(row_start..row_end, col_start..col_end);
            let window_cells = (row_end - row_start) * (col_end - col_start);
            if window_cells == 0 {
                continue;
            }

            if let Some(cell) = a_map.get_mut([row, col]) {
                *cell = a as f64 / window_cells as f64;
            }
            if let Some(cell) = b_map.get_mut([row, col]) {
                *cell = b as f64 / window_cells as f64;
            }
        }
    }

    DensityMaps { a: a_map, b: b_map }
}

/// Heatmap analyzer decision
///
/// With history: among the empty neighbors of the last move holding any
/// density, pick the one with the highest density of either outcome. A gap
/// above [`DENSITY_GAP_THRESHOLD`] predicts the denser outcome; a smaller gap
/// predicts alternation relative to the last outcome. Without usable
/// neighbors or history: the outcome with strictly more hotspots wins, and
/// only when it holds at least [`MIN_HOTSPOTS`] of them.
pub fn analyze(board: &Board, history: Option<&MoveHistory>) -> Option<Outcome> {
    let maps = density_maps(board);

    if let Some(last) = history.and_then(MoveHistory::last) {
        let mut best: Option<(f64, f64)> = None;
        for (row, col) in empty_neighbor_positions(board, last.row, last.col) {
            let (a_density, b_density) = maps.at(row, col);
            if a_density <= 0.0 && b_density <= 0.0 {
                continue;
            }
            let magnitude = a_density.max(b_density);
            let current_best = best.map(|(a, b)| a.max(b));
            if current_best.is_none_or(|best_magnitude| magnitude > best_magnitude) {
                best = Some((a_density, b_density));
            }
        }

        if let Some((a_density, b_density)) = best {
            if (a_density - b_density).abs() > DENSITY_GAP_THRESHOLD {
                return Some(if a_density > b_density {
                    Outcome::A
                } else {
                    Outcome::B
                });
            }
            // No pronounced pocket nearby: expect alternation
            return Some(last.outcome.other());
        }
    }

    let a_hotspots = maps.a.iter().filter(|d| **d > HOTSPOT_THRESHOLD).count();
    let b_hotspots = maps.b.iter().filter(|d| **d > HOTSPOT_THRESHOLD).count();

    if a_hotspots > b_hotspots && a_hotspots >= MIN_HOTSPOTS {
        return Some(Outcome::A);
    }
    if b_hotspots > a_hotspots && b_hotspots >= MIN_HOTSPOTS {
        return Some(Outcome::B);
    }

    None
}
