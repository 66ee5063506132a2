//! Error kinds for the index pipeline. Every kind is fatal to the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{ContainerType, SortOrder};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot write index to {}: {reason}", .path.display())]
    OutputNotWritable { path: PathBuf, reason: String },

    #[error("cannot read input {input}: {reason}")]
    InputNotReadable { input: String, reason: String },

    #[error("input {input} must be a BAM file, not a {found} file")]
    WrongContainerType { input: String, found: ContainerType },

    #[error("input {input} must be sorted by coordinate (header declares '{found}')")]
    UnsortedInput { input: String, found: SortOrder },

    /// Raised by the index builder; message passed through unchanged.
    #[error(transparent)]
    BuildFailure(#[from] io::Error),
}

impl PipelineError {
    pub(crate) fn unreadable(input: impl ToString, reason: impl ToString) -> Self {
        PipelineError::InputNotReadable {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn unwritable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        PipelineError::OutputNotWritable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Short name of the error kind, used in debug logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::OutputNotWritable { .. } => "OutputNotWritable",
            PipelineError::InputNotReadable { .. } => "InputNotReadable",
            PipelineError::WrongContainerType { .. } => "WrongContainerType",
            PipelineError::UnsortedInput { .. } => "UnsortedInput",
            PipelineError::BuildFailure(_) => "BuildFailure",
        }
    }
}
