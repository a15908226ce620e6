//! Input/output operations, error handling, and runtime constants

/// Plain-text board and performance file parsing
pub mod board;
/// Command-line interface for batch forecasting
pub mod cli;
/// Analysis constants and runtime configuration defaults
pub mod configuration;
/// Error types for analysis and file operations
pub mod error;
/// Multi-file progress tracking
pub mod progress;
/// Forecast report rendering
pub mod report;
