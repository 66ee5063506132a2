use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::Opts;
use crate::engine::indexer::{BaiIndexBuilder, IndexBuilder};
use crate::engine::source::{DefaultOpener, StreamOpener};
use crate::error::PipelineError;
use crate::pipeline::{
    PipelineState, ResolvedInput, classify_input, resolve_output_path, validate,
};
use crate::types::ReaderOptions;

/// Resolver → deriver → validator → builder, strictly in that order, no retries.
///
/// Generic over how streams are opened and how the index is built so either can be replaced
/// (e.g. a fake builder that records calls or injects failures).
pub struct Pipeline<O = DefaultOpener, B = BaiIndexBuilder> {
    opener: O,
    builder: B,
    state: PipelineState,
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::new(DefaultOpener, BaiIndexBuilder::default())
    }
}

impl<O: StreamOpener, B: IndexBuilder> Pipeline<O, B> {
    pub fn new(opener: O, builder: B) -> Self {
        Pipeline {
            opener,
            builder,
            state: PipelineState::Start,
        }
    }

    /// State reached by the last run (`Start` before any run).
    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    fn advance(&mut self, next: PipelineState) {
        debug!("Pipeline: {} -> {}", self.state, next);
        self.state = next;
    }

    /// Run one invocation. Returns the path the index was written to.
    pub fn run(&mut self, opts: &Opts) -> Result<PathBuf, PipelineError> {
        if self.state != PipelineState::Start {
            debug!("Pipeline: starting a new run after {}", self.state);
            self.state = PipelineState::Start;
        }
        let result = self.run_stages(opts);
        if let Err(e) = &result {
            debug!("{} after {}", e.kind(), self.state);
            self.advance(PipelineState::Failed);
        }
        result
    }

    fn run_stages(&mut self, opts: &Opts) -> Result<PathBuf, PipelineError> {
        let input = classify_input(&opts.input);
        debug!(
            "Input classified as {}: {}",
            if input.is_remote() { "remote" } else { "local" },
            input
        );
        self.advance(PipelineState::Resolved);

        let output = resolve_output_path(&input, opts.output.as_deref());
        debug!("Index output: {}", output.display());
        self.advance(PipelineState::OutputDerived);

        let options = ReaderOptions::for_input(&input, opts);
        let resolved = validate(&self.opener, &input, &output, options)?;
        self.advance(PipelineState::Validated);

        build_and_release(&self.builder, resolved, &output)?;
        self.advance(PipelineState::Built);
        self.advance(PipelineState::Done);
        Ok(output)
    }
}

/// Hand the validated input to `builder`, then release it whether or not the build succeeded.
/// Builder errors are returned unchanged as [`PipelineError::BuildFailure`].
pub fn build_and_release<B>(
    builder: &B,
    mut input: ResolvedInput,
    output: &Path,
) -> Result<(), PipelineError>
where
    B: IndexBuilder + ?Sized,
{
    let built = builder.build(&mut input, output);
    input.close();
    built?;
    info!("Successfully wrote BAM index file {}", output.display());
    Ok(())
}
