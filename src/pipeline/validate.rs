//! Precondition validator: output writable, input readable, BAM container, coordinate order.
//!
//! Anything opened here is owned by a local until the [`ResolvedInput`] is returned, so every
//! early return releases the stream before the error propagates.

use std::path::Path;

use log::debug;

use crate::engine::container::{Detected, detect_container, sort_order};
use crate::engine::source::StreamOpener;
use crate::engine::tools::{is_readable, is_writable, parent_dir_of};
use crate::error::PipelineError;
use crate::pipeline::ResolvedInput;
use crate::types::{ContainerType, InputSpec, ReaderOptions, SortOrder};

/// An existing output must be a writable regular file. In every case the parent directory must
/// exist and be writable, since the index is written to a scratch file there and renamed.
pub fn check_output_writable(output: &Path) -> Result<(), PipelineError> {
    if let Ok(meta) = std::fs::metadata(output) {
        if meta.is_dir() {
            return Err(PipelineError::unwritable(output, "path is a directory"));
        }
        if !is_writable(output) {
            return Err(PipelineError::unwritable(output, "file is not writable"));
        }
    }

    let parent = parent_dir_of(output);
    match std::fs::metadata(parent) {
        Err(_) => Err(PipelineError::unwritable(
            output,
            format!("directory {} does not exist", parent.display()),
        )),
        Ok(meta) if !meta.is_dir() => Err(PipelineError::unwritable(
            output,
            format!("{} is not a directory", parent.display()),
        )),
        Ok(_) if !is_writable(parent) => Err(PipelineError::unwritable(
            output,
            format!("directory {} is not writable", parent.display()),
        )),
        Ok(_) => Ok(()),
    }
}

/// Local input must exist, not be a directory, and be readable.
pub fn check_input_readable(path: &Path) -> Result<(), PipelineError> {
    let unreadable = |reason: &str| PipelineError::unreadable(path.display(), reason);
    let meta = std::fs::metadata(path).map_err(|_| unreadable("file does not exist"))?;
    if meta.is_dir() {
        return Err(unreadable("path is a directory"));
    }
    if !is_readable(path) {
        return Err(unreadable("file is not readable"));
    }
    Ok(())
}

/// Run all preconditions in order and open the input as a validated BAM stream.
pub fn validate<O>(
    opener: &O,
    input: &InputSpec,
    output: &Path,
    options: ReaderOptions,
) -> Result<ResolvedInput, PipelineError>
where
    O: StreamOpener + ?Sized,
{
    check_output_writable(output)?;
    if let InputSpec::Local(path) = input {
        check_input_readable(path)?;
    }

    debug!("Opening {} with {:?}", input, options);
    let stream = opener.open(input, &options)?;

    let detected = detect_container(stream).map_err(|e| PipelineError::unreadable(input, e))?;
    let mut reader = match detected {
        Detected::Bam(reader) => reader,
        Detected::Other(found) => {
            return Err(PipelineError::WrongContainerType {
                input: input.to_string(),
                found,
            });
        }
    };
    debug!("Detected {} container", ContainerType::Bam);

    let header = reader
        .read_header()
        .map_err(|e| PipelineError::unreadable(input, e))?;
    let order = sort_order(&header);
    if order != SortOrder::Coordinate {
        return Err(PipelineError::UnsortedInput {
            input: input.to_string(),
            found: order,
        });
    }

    Ok(ResolvedInput::new(
        input.clone(),
        options,
        header,
        order,
        *reader,
    ))
}
