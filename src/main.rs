//! CLI entry point for identicon generation

use clap::Parser;
use identicon::io::cli::{BatchProcessor, Cli};
use identicon::io::logging::init_logging;

fn main() -> identicon::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut processor = BatchProcessor::new(cli);
    processor.process()?;
    Ok(())
}
