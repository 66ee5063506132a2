use clap::Parser;
use std::path::PathBuf;

/// Build a BAI index for a coordinate-sorted BAM file.
#[derive(Clone, Debug, Parser)]
#[command(name = "bamidx")]
#[command(
    about = "Generate a BAM index (.bai) file. The input must be a BAM (not SAM) file sorted in coordinate order."
)]
pub struct Cli {
    /// BAM file or URL to index. Must be sorted in coordinate order.
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Index file to write. Default: x.bai if INPUT is x.bam, otherwise INPUT.bai.
    /// For a URL, the file is created in the current directory.
    #[arg(long, short = 'O', value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Reference sequence file, passed through to the reader.
    #[arg(long, short = 'R', value_name = "REFERENCE_SEQUENCE")]
    pub reference_sequence: Option<PathBuf>,

    /// Verbose output (debug logging and a record counter).
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Fully decode every record while indexing. Ignored for URLs, which are always streamed lazily.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub eager_decode: Option<bool>,

    /// Config file. Default: `.bamidx.toml` in the current directory, if present.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}
