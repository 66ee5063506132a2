//! Public and internal types for the bamidx API and pipeline.

use std::fmt;
use std::path::PathBuf;

use reqwest::Url;

/// A classified input specifier. Exactly one of remote or local; never both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSpec {
    /// Well-formed absolute URL with a recognized scheme. Not checked for existence.
    Remote(Url),
    /// Anything else, treated as a file system path.
    Local(PathBuf),
}

impl InputSpec {
    pub fn is_remote(&self) -> bool {
        matches!(self, InputSpec::Remote(_))
    }
}

impl fmt::Display for InputSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSpec::Remote(url) => write!(f, "{url}"),
            InputSpec::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Container variant detected from the first bytes of the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerType {
    /// BGZF-compressed binary alignment container.
    Bam,
    /// Reference-compressed container.
    Cram,
    /// Plain-text sibling format (also covers gzip/BGZF-wrapped text).
    Sam,
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerType::Bam => "BAM",
            ContainerType::Cram => "CRAM",
            ContainerType::Sam => "SAM",
        };
        f.write_str(name)
    }
}

/// Declared sort order from the `@HD SO:` header field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Unknown,
    Unsorted,
    QueryName,
    Coordinate,
    /// Non-standard value, kept verbatim.
    Other(String),
}

impl From<&str> for SortOrder {
    fn from(s: &str) -> Self {
        match s {
            "unknown" => SortOrder::Unknown,
            "unsorted" => SortOrder::Unsorted,
            "queryname" => SortOrder::QueryName,
            "coordinate" => SortOrder::Coordinate,
            other => SortOrder::Other(other.to_string()),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Unknown => f.write_str("unknown"),
            SortOrder::Unsorted => f.write_str("unsorted"),
            SortOrder::QueryName => f.write_str("queryname"),
            SortOrder::Coordinate => f.write_str("coordinate"),
            SortOrder::Other(s) => f.write_str(s),
        }
    }
}

/// Options handed to the stream opener and the index builder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Keep the input specifier attached to the opened stream for diagnostics.
    pub include_source: bool,
    /// Decode every record into an owned buffer instead of reading lazily.
    pub eager_decode: bool,
    /// Reference sequence path, passed through untouched.
    pub reference_sequence: Option<PathBuf>,
}

impl ReaderOptions {
    /// Options for `input`: source tracking always on; eager decoding never for remote input.
    pub fn for_input(input: &InputSpec, opts: &Opts) -> Self {
        ReaderOptions {
            include_source: true,
            eager_decode: opts.eager_decode && !input.is_remote(),
            reference_sequence: opts.reference_sequence.clone(),
        }
    }
}

/// Full options (CLI merged over config file).
#[derive(Clone, Debug, Default)]
pub struct Opts {
    /// Input specifier exactly as given (path or URL).
    pub input: String,
    /// Explicit index output path. When None, derived from the input.
    pub output: Option<PathBuf>,
    /// Reference sequence passed through to the container open.
    pub reference_sequence: Option<PathBuf>,
    /// Debug logging and a record counter while building.
    pub verbose: bool,
    /// Decode records eagerly (local input only).
    pub eager_decode: bool,
}
