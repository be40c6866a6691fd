//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - The interactive menu loop
//! - Human-friendly, coloured report output
//! - Logging setup

use clap::Parser;
use forecast_core::{Config, config::DEFAULT_LOG_LEVEL};
use tracing::warn;
use tracing_subscriber::{EnvFilter, filter::ParseError};

mod cli;
mod menu;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    let config = Config::load()?;
    init_tracing(&config.log_level);
    cmd.run(config).await
}

/// Logs go to stderr so they never interleave with the reports on stdout.
fn init_tracing(directive: &str) {
    let (filter, rejected) = log_filter(directive);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Some(err) = rejected {
        warn!(
            directive,
            error = %err,
            "invalid log_level in config; falling back to \"{DEFAULT_LOG_LEVEL}\""
        );
    }
}

/// An unparsable directive falls back to the default level; the parse error is
/// handed back so it can be logged once the subscriber is installed.
fn log_filter(directive: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_directive_is_used_as_is() {
        let (filter, rejected) = log_filter("forecast_core=debug");

        assert!(rejected.is_none());
        assert!(filter.to_string().contains("forecast_core=debug"));
    }

    #[test]
    fn invalid_directive_falls_back_to_default() {
        let (filter, rejected) = log_filter("forecast_core=loud");

        assert!(rejected.is_some());
        assert!(filter.to_string().eq_ignore_ascii_case(DEFAULT_LOG_LEVEL));
    }
}
