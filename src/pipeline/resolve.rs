//! Input resolver: classify an input specifier as a remote URL or a local path.

use std::path::PathBuf;

use log::debug;
use reqwest::Url;

use crate::types::InputSpec;
use crate::utils::config::REMOTE_SCHEMES;

/// Classify `input`. Never fails: anything that is not a well-formed absolute URL with a
/// recognized scheme is a local path. No existence check is made for either branch.
pub fn classify_input(input: &str) -> InputSpec {
    match Url::parse(input) {
        Ok(url) if REMOTE_SCHEMES.contains(&url.scheme()) => InputSpec::Remote(url),
        Ok(url) => {
            debug!(
                "'{}' parses with scheme '{}', treating as a local path",
                input,
                url.scheme()
            );
            InputSpec::Local(PathBuf::from(input))
        }
        // Malformed URLs fall through to the local branch silently.
        Err(_) => InputSpec::Local(PathBuf::from(input)),
    }
}
