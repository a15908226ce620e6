//! Shape-template pattern analysis and ensemble forecasting for two-outcome grids
//!
//! The system records two outcome symbols on a small square board, scans the board
//! with a bank of geometric shape detectors, and combines the detectors' votes into
//! a single accuracy-weighted forecast.

#![forbid(unsafe_code)]

/// Base statistics engine and pattern-to-follower probability tables
pub mod analysis;
/// Hybrid ensemble ranking shape analyzers by historical accuracy
pub mod ensemble;
/// Input/output operations and error handling
pub mod io;
/// Shape-specific analyzers and their shared scanning primitives
pub mod shapes;
/// Board state, move history, and geometric traversals
pub mod spatial;

pub use io::error::{AnalysisError, Result};
