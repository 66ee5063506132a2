//! Application configuration constants.
//! File naming, URL schemes and progress tuning in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Config file looked up in the current directory (e.g. `.bamidx.toml`).
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }
}

// ---- File naming ----

/// File naming conventions for the container and its index.
pub struct FileNaming;

impl FileNaming {
    /// Extension of the binary alignment container (case-sensitive match).
    pub const BAM_EXTENSION: &'static str = ".bam";
    /// Suffix of the index file.
    pub const INDEX_SUFFIX: &'static str = ".bai";
    /// Suffix of the scratch file the index is written to before the rename.
    pub const TEMP_SUFFIX: &'static str = ".tmp";
}

// ---- Remote input ----

/// URL schemes that classify an input as remote. Anything else is a local path.
pub const REMOTE_SCHEMES: &[&str] = &["http", "https", "ftp", "file", "jar"];

/// Schemes that can actually be streamed over HTTP.
pub const HTTP_SCHEMES: &[&str] = &["http", "https"];

// ---- Progress ----

/// Progress counter tuning.
pub struct ProgressConsts;

impl ProgressConsts {
    /// Records read between counter refreshes (reduce terminal churn).
    pub const PROGRESS_UPDATE_BATCH_SIZE: usize = 10_000;
}
