//! Analysis constants and runtime configuration defaults
//!
//! Decision thresholds are named here rather than scattered inline; structs
//! that consume them accept overrides.

/// Default board side length
pub const BOARD_SIZE: usize = 5;

/// Minimum non-empty cells before any analyzer produces a prediction
pub const MIN_DATA_POINTS: usize = 5;

/// Minimum non-empty samples for line-shaped scans (diagonals, walks)
pub const MIN_LINE_SAMPLES: usize = 3;

/// Minimum non-empty samples for area-shaped regions (rectangles, L, T)
pub const MIN_REGION_SAMPLES: usize = 4;

/// Length of the sub-pattern used by continuation queries
pub const CONTINUATION_PATTERN_LENGTH: usize = 2;

/// Sliding rectangle region sizes scanned by the rectangle analyzer
pub const RECTANGLE_SIZES: [(usize, usize); 4] = [(2, 2), (2, 3), (3, 2), (3, 3)];

/// Ratio a quadrant must exceed to dominate the quadrant comparison
pub const QUADRANT_DOMINANCE_THRESHOLD: f64 = 0.6;

/// Minimum samples inside the last-move quadrant before its majority counts
pub const QUADRANT_MAJORITY_SAMPLES: usize = 3;

/// Density gap between the two heatmaps required for a neighbor-based call
pub const DENSITY_GAP_THRESHOLD: f64 = 0.2;

/// Density above which a heatmap cell counts as a hotspot
pub const HOTSPOT_THRESHOLD: f64 = 0.5;

/// Hotspot count one outcome needs before winning the no-history comparison
pub const MIN_HOTSPOTS: usize = 2;

/// Spread gap (in cells) required before the scatter analyzer takes a side
pub const SCATTER_SPREAD_THRESHOLD: f64 = 0.5;

/// Number of top-performing analyzers the hybrid ensemble votes among
pub const ENSEMBLE_TOP_COUNT: usize = 3;

/// Minimum tracked predictions before an analyzer qualifies as a candidate
pub const ENSEMBLE_MIN_TRACKED: usize = 3;

/// Confidence reported when weighted sums tie and raw votes decide
pub const ENSEMBLE_TIE_CONFIDENCE: f64 = 0.55;

/// Confidence reported when the ensemble falls back to the majority prediction
pub const ENSEMBLE_FALLBACK_CONFIDENCE: f64 = 0.5;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to forecast report filenames
pub const OUTPUT_SUFFIX: &str = "_forecast";
