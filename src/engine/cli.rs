//! CLI command handler: merge config, set up logging, run the pipeline.

use anyhow::Result;

use crate::engine::arg_parser::Cli;
use crate::utils::{apply_file_to_opts, load_bamidx_toml, load_bamidx_toml_from, setup_logging};
use crate::{Opts, build_bam_index};

/// Defaults, then config file, then CLI flags.
pub fn setup_opts(cli: &Cli) -> Result<Opts> {
    let mut opts = Opts {
        input: cli.input.clone(),
        ..Opts::default()
    };

    let file = match &cli.config {
        Some(path) => Some(load_bamidx_toml_from(path)?),
        None => std::env::current_dir()
            .ok()
            .and_then(|dir| load_bamidx_toml(&dir)),
    };
    if let Some(file) = &file {
        apply_file_to_opts(file, &mut opts);
    }

    if let Some(output) = &cli.output {
        opts.output = Some(output.clone());
    }
    if let Some(reference) = &cli.reference_sequence {
        opts.reference_sequence = Some(reference.clone());
    }
    if let Some(verbose) = cli.verbose {
        opts.verbose = verbose;
    }
    if let Some(eager) = cli.eager_decode {
        opts.eager_decode = eager;
    }
    Ok(opts)
}

/// Index the input named on the command line.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli)?;
    setup_logging(opts.verbose);
    build_bam_index(&opts)?;
    Ok(())
}
