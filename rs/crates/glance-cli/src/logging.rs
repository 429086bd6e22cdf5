//! Logging setup for the `glance` binary.
//!
//! Everything goes to stderr so stdout stays a clean snapshot stream.
//! `GLANCE_LOG` (or `--log-level`) takes an `EnvFilter` directive such as
//! `debug` or `glance_reducer_core=debug,warn`.

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines, no colors
    Text,
    /// One JSON object per line
    Json,
}

pub fn init(directive: &str, format: LogFormat) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    // try_init: a second call (tests, embedding) is not fatal
    let _ = match format {
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
        LogFormat::Text => builder.with_ansi(false).try_init(),
    };
}
