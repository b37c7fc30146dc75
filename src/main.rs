//! CLI entry point for self-avoiding walk generation

use clap::Parser;
use sawgen::io::cli::{Cli, WalkProcessor};

fn main() -> sawgen::Result<()> {
    let cli = Cli::parse();
    let mut processor = WalkProcessor::new(cli);
    processor.process()?;
    Ok(())
}
