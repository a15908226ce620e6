//! Hybrid ensemble: ranks shape analyzers by tracked accuracy and votes

/// Accuracy-weighted voting among the top-ranked analyzers
pub mod hybrid;
/// Externally tracked per-analyzer accuracy records
pub mod performance;

pub use hybrid::{EnsembleReport, HybridEnsemble};
pub use performance::{PerformanceMap, PerformanceRecord};
