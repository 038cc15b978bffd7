//! CLI entry point for the six-tone stylizer

use clap::Parser;
use sixtone::io::cli::{Cli, FileProcessor};

fn main() -> sixtone::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
