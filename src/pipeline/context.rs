//! Pipeline state and the validated input handle passed from the validator to the builder.

use std::fmt;

use log::debug;
use noodles::sam;

use crate::engine::container::BamReader;
use crate::types::{InputSpec, ReaderOptions, SortOrder};

/// Progress of a single run. `Done` and `Failed` are terminal; no state is revisited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineState {
    Start,
    Resolved,
    OutputDerived,
    Validated,
    Built,
    Done,
    Failed,
}

impl PipelineState {
    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed)
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An opened, validated, coordinate-sorted BAM stream (the binary container is implied).
///
/// Owns the underlying file or network handle. The handle is released when this value is
/// dropped (or passed to [`ResolvedInput::close`]), which happens exactly once on every path.
pub struct ResolvedInput {
    source: InputSpec,
    sort_order: SortOrder,
    options: ReaderOptions,
    header: sam::Header,
    reader: BamReader,
}

impl ResolvedInput {
    pub(crate) fn new(
        source: InputSpec,
        options: ReaderOptions,
        header: sam::Header,
        sort_order: SortOrder,
        reader: BamReader,
    ) -> Self {
        ResolvedInput {
            source,
            sort_order,
            options,
            header,
            reader,
        }
    }

    /// Specifier the stream was opened from. None when source tracking is off.
    pub fn source(&self) -> Option<&InputSpec> {
        self.options.include_source.then_some(&self.source)
    }

    /// Declared order from the header; always `coordinate` once validated.
    pub fn sort_order(&self) -> &SortOrder {
        &self.sort_order
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    pub fn header(&self) -> &sam::Header {
        &self.header
    }

    /// Reader (positioned at the first record) together with the header it was read with.
    pub fn parts_mut(&mut self) -> (&mut BamReader, &sam::Header) {
        (&mut self.reader, &self.header)
    }

    /// Release the underlying handle now.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for ResolvedInput {
    fn drop(&mut self) {
        debug!("Closing input {}", self.source);
    }
}
