use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::utils::config::FileNaming;

/// Scratch path the index is written to before the atomic rename (`<output>.tmp`).
pub fn temp_path_for(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    name.push(FileNaming::TEMP_SUFFIX);
    PathBuf::from(name)
}

/// Remove a scratch file left by a failed build. Missing file is fine.
pub fn discard_temp(temp_path: &Path) {
    if let Err(e) = fs::remove_file(temp_path)
        && e.kind() != io::ErrorKind::NotFound
    {
        log::warn!("could not remove {}: {}", temp_path.display(), e);
    }
}

/// Move the finished scratch file over the final path (replaces an existing index).
pub fn rename_temp_to_final(temp_path: &Path, final_path: &Path) -> io::Result<()> {
    fs::rename(temp_path, final_path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!(
                "atomic rename temp index to final path ({} -> {}): {}",
                temp_path.display(),
                final_path.display(),
                e
            ),
        )
    })
}
