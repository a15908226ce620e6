//! CLI entry point for the shape-based outcome forecaster

use clap::Parser;
use shapecast::io::cli::{Cli, FileProcessor};

fn main() -> shapecast::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
