//! CLI entry point for the grid pathfinding visualizer

use clap::Parser;
use gridpath::io::cli::{Cli, RunProcessor};

fn main() -> gridpath::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let processor = RunProcessor::new(cli);
    processor.process()?;
    Ok(())
}
