//! cli
//!
//! Command-line interface layer for gridcolor.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Set up logging
//! - Delegate to command handlers
//! - Map failures to exit codes
//!
//! # Exit Codes
//!
//! - `0`: success
//! - `1`: runtime failure (output I/O, failed verification)
//! - `2`: configuration error (missing or invalid dimensions, index
//!   overflow, unreadable or invalid config file); clap usage errors also
//!   exit with 2

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::core::config::ConfigError;
use crate::core::types::DimensionError;
use crate::engine;
use crate::ui::output::{self, Verbosity};

/// Environment variable holding a `tracing` filter that overrides the flags.
pub const LOG_ENV: &str = "GRIDCOLOR_LOG";

/// Errors in how the command was invoked.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("missing {flag}: pass it on the command line or set '{key}' in gridcolor.toml")]
    MissingDimension {
        flag: &'static str,
        key: &'static str,
    },
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> ExitCode {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    init_logging(verbosity);

    let ctx = engine::Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    match commands::dispatch(cli.command, &ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::from(exit_code_for(&err))
        }
    }
}

/// Install the stderr `tracing` subscriber.
///
/// `GRIDCOLOR_LOG` takes precedence over `--debug`/`--quiet`.
fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()));

    // A subscriber may already be set when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

/// Exit code for a failed command.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    let is_config = err.chain().any(|cause| {
        cause.is::<ConfigError>() || cause.is::<DimensionError>() || cause.is::<UsageError>()
    });
    if is_config {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context as _;

    #[test]
    fn dimension_errors_exit_2() {
        let err = anyhow::Error::new(DimensionError::ZeroDimension { rows: 0, cols: 1 })
            .context("invalid lattice size");
        assert_eq!(exit_code_for(&err), 2);
    }

    #[test]
    fn missing_dimension_exits_2() {
        let err = anyhow::Error::new(UsageError::MissingDimension {
            flag: "--nx",
            key: "rows",
        });
        assert_eq!(exit_code_for(&err), 2);
    }

    #[test]
    fn config_errors_exit_2() {
        let result: Result<(), ConfigError> = Err(ConfigError::NoHomeDir);
        let err = result.context("failed to load config").unwrap_err();
        assert_eq!(exit_code_for(&err), 2);
    }

    #[test]
    fn io_errors_exit_1() {
        let err = anyhow::Error::new(std::io::Error::other("disk full"));
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn missing_dimension_message_names_both_sources() {
        let msg = UsageError::MissingDimension {
            flag: "--ny",
            key: "cols",
        }
        .to_string();
        assert!(msg.contains("--ny"));
        assert!(msg.contains("cols"));
    }
}
