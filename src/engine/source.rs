//! Opening input streams: local files, `file:` URLs and HTTP(S) resources.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use log::debug;
use reqwest::Url;
use reqwest::blocking::Client;

use crate::error::PipelineError;
use crate::types::{InputSpec, ReaderOptions};
use crate::utils::config::HTTP_SCHEMES;

/// An opened, readable byte stream. Dropping it releases the underlying handle.
pub type InputStream = Box<dyn Read + Send>;

/// Connect timeout for remote input. Body reads have no internal timeout.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Opens an input specifier as a raw byte stream.
pub trait StreamOpener {
    fn open(&self, input: &InputSpec, options: &ReaderOptions)
    -> Result<InputStream, PipelineError>;
}

/// Opens local paths from disk and streams remote URLs lazily over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultOpener;

impl StreamOpener for DefaultOpener {
    fn open(
        &self,
        input: &InputSpec,
        options: &ReaderOptions,
    ) -> Result<InputStream, PipelineError> {
        if let Some(reference) = &options.reference_sequence {
            debug!("Reference sequence: {}", reference.display());
        }
        match input {
            InputSpec::Local(path) => open_file(path, input),
            InputSpec::Remote(url) => open_url(url),
        }
    }
}

fn open_file(path: &Path, input: &InputSpec) -> Result<InputStream, PipelineError> {
    let file = File::open(path).map_err(|e| PipelineError::unreadable(input, e))?;
    Ok(Box::new(file))
}

fn open_url(url: &Url) -> Result<InputStream, PipelineError> {
    if url.scheme() == "file" {
        let path = url
            .to_file_path()
            .map_err(|_| PipelineError::unreadable(url, "not a local file URL"))?;
        let file = File::open(&path).map_err(|e| PipelineError::unreadable(url, e))?;
        return Ok(Box::new(file));
    }
    if !HTTP_SCHEMES.contains(&url.scheme()) {
        return Err(PipelineError::unreadable(
            url,
            format!("unsupported URL scheme '{}'", url.scheme()),
        ));
    }

    let client = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(None::<Duration>)
        .user_agent(format!(
            "{}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .map_err(|e| PipelineError::unreadable(url, e))?;
    debug!("Streaming {}", url);
    // Body is read incrementally as the indexer consumes it.
    let response = client
        .get(url.clone())
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| PipelineError::unreadable(url, e))?;
    Ok(Box::new(response))
}
