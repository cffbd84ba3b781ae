//! config command - Show, read, or create configuration

use anyhow::{bail, Context as _, Result};

use super::{load_config, verbosity};
use crate::core::config::Config;
use crate::engine::Context;
use crate::ui::output;

/// Print the merged configuration as TOML.
pub fn show(ctx: &Context) -> Result<()> {
    let config = load_config(ctx)?;

    if !ctx.quiet {
        let source = |p: Option<&std::path::Path>| {
            p.map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".into())
        };
        output::print(format!("# global: {}", source(config.global_path())));
        output::print(format!("# local: {}", source(config.local_path())));
    }

    let text = toml::to_string_pretty(&config.merged()).context("Failed to format config")?;
    output::print(text.trim_end());
    Ok(())
}

/// Get a configuration value.
///
/// Prints the effective value, including built-in defaults. Keys that have
/// no value and no default (`rows`, `cols`) print nothing.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config = load_config(ctx)?;

    let value = match key {
        "rows" => config.rows().map(|v| v.to_string()),
        "cols" => config.cols().map(|v| v.to_string()),
        "stats" => Some(config.stats().to_string()),
        "verify" => Some(config.verify().to_string()),
        "vtk.title" => Some(config.vtk_title().to_string()),
        "vtk.scalar_name" => Some(config.scalar_name().to_string()),
        _ => bail!("Unknown configuration key: {}", key),
    };

    if let Some(value) = value {
        output::print(value);
    }
    Ok(())
}

/// Print the canonical global config path.
pub fn path() -> Result<()> {
    let path = Config::global_config_path()?;
    output::print(path.display());
    Ok(())
}

/// Write a starter global config file.
pub fn init(ctx: &Context, force: bool) -> Result<()> {
    let path = Config::global_config_path()?;
    if path.exists() && !force {
        bail!(
            "Config already exists at '{}'. Use --force to overwrite.",
            path.display()
        );
    }

    Config::write_atomic(&path, &Config::starter()).context("Failed to write config")?;
    output::note(format!("Wrote {}", path.display()), verbosity(ctx));
    Ok(())
}
