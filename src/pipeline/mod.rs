//! Pipeline components: resolver, output deriver, validator, orchestrator.

pub mod context;
pub mod orchestrator;
pub mod output;
pub mod resolve;
pub mod validate;

pub use context::{PipelineState, ResolvedInput};
pub use orchestrator::{Pipeline, build_and_release};
pub use output::{derive_index_name, resolve_output_path};
pub use resolve::classify_input;
pub use validate::{check_input_readable, check_output_writable, validate};
