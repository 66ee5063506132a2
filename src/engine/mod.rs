//! Engine module: CLI, input streams, container inspection, index building

pub mod arg_parser;
pub mod cli;
pub mod container;
pub mod indexer;
pub mod progress;
pub mod source;
pub mod tools;

// Re-export commonly used items
pub use arg_parser::Cli;
pub use cli::{handle_run, setup_opts};
pub use container::{BamReader, Detected, detect_container, sort_order};
pub use indexer::{BaiIndexBuilder, IndexBuilder};
pub use source::{DefaultOpener, InputStream, StreamOpener};
pub use tools::{absolute_path, is_readable, is_writable, parent_dir_of, url_base_name};
