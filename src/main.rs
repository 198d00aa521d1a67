//! CLI entry point for the comic strip generation pipeline

use clap::Parser;
use panelforge::io::cli::{Cli, PipelineRunner};

fn main() -> panelforge::Result<()> {
    let cli = Cli::parse();
    let mut runner = PipelineRunner::new(cli);
    runner.run()
}
