//! Path and permission utilities

use std::path::{Path, PathBuf};

use reqwest::Url;

/// Lexically absolutize `path` against the current directory. Does not touch the file system
/// beyond reading the cwd and does not resolve symlinks.
pub fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Final segment of the URL path (query and fragment excluded). Empty when the path ends in `/`.
pub fn url_base_name(url: &Url) -> &str {
    let path = url.path();
    match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// Directory an output file would be created in. An empty parent means the current directory.
pub fn parent_dir_of(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

#[cfg(unix)]
fn access_ok(path: &Path, mode: libc::c_int) -> bool {
    use std::os::unix::ffi::OsStrExt;
    let Ok(c_path) = std::ffi::CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(c_path.as_ptr(), mode) == 0 }
}

/// True if the process may write to `path` (file or directory).
#[cfg(unix)]
pub fn is_writable(path: &Path) -> bool {
    access_ok(path, libc::W_OK)
}

#[cfg(not(unix))]
pub fn is_writable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}

/// True if the process may read `path`.
#[cfg(unix)]
pub fn is_readable(path: &Path) -> bool {
    access_ok(path, libc::R_OK)
}

#[cfg(not(unix))]
pub fn is_readable(path: &Path) -> bool {
    std::fs::File::open(path).is_ok()
}
