pub mod bamidx_toml;
pub mod config;
pub mod logger;
pub mod tempfiles;

pub use bamidx_toml::{apply_file_to_opts, load_bamidx_toml, load_bamidx_toml_from};
pub use config::*;
pub use logger::{setup_logging, stage_label};
pub use tempfiles::{discard_temp, rename_temp_to_final, temp_path_for};
