//! Load `.bamidx.toml` (CLI only). Library callers build [`Opts`] themselves.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::Opts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub struct BamidxToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    reference_sequence: Option<String>,
    verbose: Option<bool>,
    eager_decode: Option<bool>,
}

/// Parse config text. Unknown keys are ignored.
pub fn parse_bamidx_toml(s: &str) -> Result<BamidxToml> {
    toml::from_str(s).context("parse config")
}

/// Load the config file from `dir` if present. Returns None if missing; warns and returns None if unparsable.
pub fn load_bamidx_toml(dir: &Path) -> Option<BamidxToml> {
    let path = dir.join(PackagePaths::get().config_filename());
    let s = std::fs::read_to_string(&path).ok()?;
    parse_bamidx_toml(&s)
        .map_err(|e| log::warn!("{}: {:#}", path.display(), e))
        .ok()
}

/// Load an explicitly named config file. Missing or invalid is an error.
pub fn load_bamidx_toml_from(path: &Path) -> Result<BamidxToml> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    parse_bamidx_toml(&s).with_context(|| format!("config {}", path.display()))
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($section:expr, $opts:expr, $field:ident) => {
        if let Some(v) = $section.$field {
            $opts.$field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI.
pub fn apply_file_to_opts(file: &BamidxToml, opts: &mut Opts) {
    let s = &file.settings;
    if let Some(ref p) = s.reference_sequence {
        opts.reference_sequence = Some(PathBuf::from(p));
    }
    apply_file_opt!(s, opts, verbose);
    apply_file_opt!(s, opts, eager_decode);
}
