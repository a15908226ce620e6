//! Externally tracked per-analyzer accuracy records
//!
//! Accuracy tracking against ground truth happens outside the analysis core:
//! an external collaborator refreshes these records after each round. The
//! ensemble treats them as read-only input and never updates them.

use std::collections::HashMap;

/// Cumulative accuracy snapshot for one analyzer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceRecord {
    /// Number of predictions made so far
    pub total_predictions: usize,
    /// Fraction of correct predictions, on a 0-1 or 0-100 scale
    pub success_rate: f64,
}

impl PerformanceRecord {
    /// Create a record from raw tracker values
    pub const fn new(total_predictions: usize, success_rate: f64) -> Self {
        Self {
            total_predictions,
            success_rate,
        }
    }

    /// Success rate normalized to the 0-100 percent scale
    ///
    /// External trackers report on either a fractional or a percent scale;
    /// values at or below 1 are read as fractions. Weighted vote shares are
    /// scale-invariant, so the normalization only matters when records on
    /// different scales are mixed.
    pub const fn rate_percent(&self) -> f64 {
        if self.success_rate <= 1.0 {
            self.success_rate * 100.0
        } else {
            self.success_rate
        }
    }
}

/// Accuracy records keyed by analyzer display name
pub type PerformanceMap = HashMap<String, PerformanceRecord>;

#[cfg(test)]
mod tests {
    use super::PerformanceRecord;

    #[test]
    fn test_rate_normalization_accepts_both_scales() {
        let fractional = PerformanceRecord::new(10, 0.7);
        let percent = PerformanceRecord::new(10, 70.0);

        assert!((fractional.rate_percent() - 70.0).abs() < f64::EPSILON);
        assert!((percent.rate_percent() - 70.0).abs() < f64::EPSILON);
    }
}
