//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration and resolves the lattice size
//! 2. Calls the engine to build and color the lattice
//! 3. Formats and writes output
//!
//! Handlers never touch the coloring algorithm directly.

mod check;
mod completion;
mod config_cmd;
mod render;
mod stats;

// Re-export command functions for testing and direct invocation
pub use check::check;
pub use completion::completion;
pub use config_cmd::{get as config_get, init as config_init, path as config_path, show as config_show};
pub use render::render;
pub use stats::stats;

use anyhow::{Context as _, Result};

use crate::cli::args::{Command, ConfigAction, GridArgs};
use crate::cli::UsageError;
use crate::core::config::Config;
use crate::core::types::Dimensions;
use crate::engine::Context;
use crate::ui::output::{self, Verbosity};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Render {
            grid,
            output,
            no_stats,
            verify,
        } => render(ctx, grid, output.as_deref(), no_stats, verify),
        Command::Stats { grid, json } => stats(ctx, grid, json),
        Command::Check { grid } => check(ctx, grid),
        Command::Config { action } => match action {
            ConfigAction::Show => config_show(ctx),
            ConfigAction::Get { key } => config_get(ctx, &key),
            ConfigAction::Path => config_path(),
            ConfigAction::Init { force } => config_init(ctx, force),
        },
        Command::Completion { shell } => completion(shell),
    }
}

/// Verbosity for a context.
pub(crate) fn verbosity(ctx: &Context) -> Verbosity {
    Verbosity::from_flags(ctx.quiet, ctx.debug)
}

/// Load configuration for `ctx`, reporting any warnings.
pub(crate) fn load_config(ctx: &Context) -> Result<Config> {
    let dir = ctx.dir();
    let result = Config::load(dir.as_deref()).context("Failed to load configuration")?;
    for warning in &result.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity(ctx),
        );
    }
    Ok(result.config)
}

/// Resolve the lattice size from flags, falling back to config.
pub(crate) fn resolve_dimensions(grid: GridArgs, config: &Config) -> Result<Dimensions> {
    let rows = grid
        .rows
        .or_else(|| config.rows())
        .ok_or(UsageError::MissingDimension {
            flag: "--nx",
            key: "rows",
        })?;
    let cols = grid
        .cols
        .or_else(|| config.cols())
        .ok_or(UsageError::MissingDimension {
            flag: "--ny",
            key: "cols",
        })?;

    Dimensions::new(rows, cols).context("Invalid lattice size")
}
