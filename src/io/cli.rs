//! Command-line interface for batch processing board files
//!
//! The CLI is a thin collaborator around the analysis core: it parses board
//! files, runs the analyzer bank (and the ensemble when accuracy records are
//! supplied), and writes one forecast report next to each board.

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::analysis::compute_basic_stats;
use crate::ensemble::hybrid::HybridEnsemble;
use crate::ensemble::performance::PerformanceMap;
use crate::io::board::{load_board, load_performance};
use crate::io::configuration::OUTPUT_SUFFIX;
use crate::io::error::{AnalysisError, Result};
use crate::io::progress::ProgressManager;
use crate::io::report::render_forecast;
use crate::shapes::ShapeKind;

#[derive(Parser)]
#[command(name = "shapecast")]
#[command(
    author,
    version,
    about = "Forecast the next outcome on a two-symbol board using shape analyzers"
)]
/// Command-line arguments for the forecasting tool
pub struct Cli {
    /// Input board file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Performance record file (name,total,success_rate) enabling the ensemble
    #[arg(short, long)]
    pub performance: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch processing of board files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, parsing, or report writing fails
    pub fn process(&mut self) -> Result<()> {
        let performance = self
            .cli
            .performance
            .as_ref()
            .map(load_performance)
            .transpose()?;

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            Self::process_file(
                file,
                performance.as_ref(),
                self.progress_manager.as_ref(),
            )?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("board") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"expected a .board file",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("board")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"path does not exist",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(
        input_path: &Path,
        performance: Option<&PerformanceMap>,
        progress_manager: Option<&ProgressManager>,
    ) -> Result<()> {
        if let Some(pm) = progress_manager {
            pm.start_file(input_path);
        }

        let parsed = load_board(input_path)?;
        let stats = compute_basic_stats(&parsed.board);

        let analyzer_results: Vec<_> = ShapeKind::ALL
            .iter()
            .map(|kind| (*kind, kind.analyze(&parsed.board, Some(&parsed.history))))
            .collect();

        let ensemble = performance.map(|records| {
            HybridEnsemble::default().analyze_with_report(
                &parsed.board,
                Some(&parsed.history),
                Some(records),
            )
        });

        let report = render_forecast(
            &parsed.board,
            &stats,
            &analyzer_results,
            ensemble.as_ref(),
        );

        let output_path = Self::get_output_path(input_path);
        std::fs::write(&output_path, report).map_err(|e| AnalysisError::FileSystem {
            path: output_path,
            operation: "write forecast report",
            source: e,
        })?;

        if let Some(pm) = progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.txt", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
