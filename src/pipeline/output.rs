//! Output path deriver: use the explicit output verbatim, or derive `<base>.bai`.

use std::path::{Path, PathBuf};

use crate::engine::tools::{absolute_path, url_base_name};
use crate::types::InputSpec;
use crate::utils::config::FileNaming;

/// Derivation rule on a base name: strip a trailing `.bam` and append `.bai`; otherwise append
/// `.bai` to the full name. Only the final `.bam` is removed; no other dot is ever cut.
pub fn derive_index_name(base_name: &str) -> String {
    let stem = base_name
        .strip_suffix(FileNaming::BAM_EXTENSION)
        .unwrap_or(base_name);
    format!("{stem}{}", FileNaming::INDEX_SUFFIX)
}

/// Effective output path. An explicit `output` always wins and is never inspected.
///
/// Local input derives from the absolute input path, so the index lands beside the input.
/// Remote input derives from the final URL path segment, relative to the current directory.
pub fn resolve_output_path(input: &InputSpec, output: Option<&Path>) -> PathBuf {
    if let Some(output) = output {
        return output.to_path_buf();
    }
    match input {
        InputSpec::Remote(url) => PathBuf::from(derive_index_name(url_base_name(url))),
        InputSpec::Local(path) => {
            let base = absolute_path(path);
            let mut name = base.into_os_string();
            match name.to_str().map(derive_index_name) {
                Some(derived) => PathBuf::from(derived),
                None => {
                    // Non-UTF-8 path: cannot match the extension, append the suffix.
                    name.push(FileNaming::INDEX_SUFFIX);
                    PathBuf::from(name)
                }
            }
        }
    }
}
