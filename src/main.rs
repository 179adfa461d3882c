// laborbrief - labour-law defence report generator
// Main entry point

use anyhow::Result;
use clap::Parser;

use laborbrief::cli::{self, Cli};
use laborbrief::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose)?;

    cli::run(args).await
}
