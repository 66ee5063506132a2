//! bamidx CLI: write a BAI index for a coordinate-sorted BAM file or URL.

use anyhow::Result;
use bamidx::engine::arg_parser::Cli;
use bamidx::engine::handle_run;
use clap::Parser;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
