//! stats command - Print color count and per-color usage

use anyhow::{Context as _, Result};

use super::{load_config, resolve_dimensions};
use crate::cli::args::GridArgs;
use crate::engine::{self, Context, PipelineOptions};
use crate::ui::output;

/// Print usage statistics for the colored lattice.
///
/// Text output matches the report `render` prints on stderr; `--json`
/// prints the full summary including lattice size.
pub fn stats(ctx: &Context, grid: GridArgs, json: bool) -> Result<()> {
    let config = load_config(ctx)?;
    let dims = resolve_dimensions(grid, &config)?;
    let lattice = engine::color_lattice(dims, &PipelineOptions::default())?;
    let summary = lattice.summary();

    if json {
        let text =
            serde_json::to_string_pretty(&summary).context("Failed to serialize statistics")?;
        output::print(text);
    } else {
        output::print(format!(
            "lattice = {} ({} vertices, {} edges)",
            dims, summary.vertices, summary.edges
        ));
        output::print(output::format_usage(&summary.usage));
    }

    Ok(())
}
