//! Base statistics engine shared by every shape analyzer

/// Sliding-window pattern extraction and follower probability tables
pub mod patterns;
/// Cell counting, ratios, and the coarse majority prediction
pub mod statistics;

pub use statistics::{BasicStats, compute_basic_stats};
