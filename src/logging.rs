//! Logging setup on top of `tracing` and `tracing-subscriber`.
//!
//! The scanner logs on the `rpal::lexer` target and the command-line harness on
//! `rpal::cli`. Everything goes to stderr so stdout only carries tokens.

use std::io;

use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
    Layer,
};

pub const LEXER_TARGET: &str = "rpal::lexer";
pub const CLI_TARGET: &str = "rpal::cli";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// One line per event
    #[default]
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// `level` applies to this crate's targets, everything else stays at `WARN`.
pub fn targets(level: Level) -> Targets {
    Targets::new()
        .with_default(Level::WARN)
        .with_target(LEXER_TARGET, level)
        .with_target(CLI_TARGET, level)
}

pub fn init_logger(format: LogFormat, level: Level) -> Result<(), TryInitError> {
    let stderr_layer = create_format_layer(format, io::stderr).with_filter(targets(level));

    tracing_subscriber::registry().with(stderr_layer).try_init()
}

fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}

#[cfg(test)]
pub fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .try_init();
}
