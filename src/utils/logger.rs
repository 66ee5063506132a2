use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

/// Pipeline stage a log target belongs to: the crate-relative module path without the
/// `engine`/`pipeline` layer (`bamidx::pipeline::validate` -> `validate`). Foreign targets are
/// returned unchanged.
pub fn stage_label(target: &str) -> &str {
    let Some(rest) = target.strip_prefix(concat!(env!("CARGO_PKG_NAME"), "::")) else {
        return target;
    };
    rest.rsplit("::").next().unwrap_or(rest)
}

/// Install the process logger. Safe to call more than once (later calls are no-ops).
///
/// Dependencies log warnings only; this crate logs at info, or debug when `verbose`. `RUST_LOG`
/// is applied last and overrides both.
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_PKG_NAME"), level)
        .parse_default_env()
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME").cyan();
            let stage = stage_label(record.target());
            match record.level() {
                Level::Error => {
                    writeln!(buf, "[{} {} {}] {}", name, "ERROR".red(), stage, record.args())
                }
                Level::Warn => {
                    writeln!(buf, "[{} {} {}] {}", name, "WARN".yellow(), stage, record.args())
                }
                Level::Info => writeln!(buf, "[{}] {}", name, record.args()),
                Level::Debug | Level::Trace => {
                    writeln!(buf, "[{} {}] {}", name, stage.dimmed(), record.args())
                }
            }
        })
        .try_init();
}
