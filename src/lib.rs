//! bamidx: build a BAI random-access index for a coordinate-sorted BAM file, local or remote.

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::PipelineError;
pub use types::*;

use log::debug;
use std::path::PathBuf;

use crate::engine::{BaiIndexBuilder, DefaultOpener};
use crate::pipeline::Pipeline;

/// Single entry point: index `opts.input` and return the path the index was written to.
///
/// Uses the default opener (local file or HTTP stream) and the noodles BAI builder. For custom
/// openers or builders, construct a [`Pipeline`] directly.
pub fn build_bam_index(opts: &Opts) -> std::result::Result<PathBuf, PipelineError> {
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );
    Pipeline::new(DefaultOpener, BaiIndexBuilder::new(opts.verbose)).run(opts)
}
