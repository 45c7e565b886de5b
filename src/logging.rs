//! Logger setup for binaries and tests that want to see the crate's
//! `log` output.

use anyhow::Context;
use log::LevelFilter;

/// Environment variable read for the log filter.
pub const LOG_ENV: &str = "DYNMAT_LOG";

/// Install an `env_logger` configured from `DYNMAT_LOG`, falling back to
/// `default_filter` when the variable is unset.
///
/// Fails if a global logger is already installed.
pub fn init_logging(default_filter: &str) -> anyhow::Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, default_filter))
        .format_timestamp_millis()
        .try_init()
        .context("failed to install the global logger")
}
