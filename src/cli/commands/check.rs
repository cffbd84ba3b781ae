//! check command - Verify graph invariants and coloring properness

use anyhow::{Context as _, Result};

use super::{load_config, resolve_dimensions};
use crate::cli::args::GridArgs;
use crate::engine::{self, Context, PipelineOptions};
use crate::ui::output;

/// Build, color and verify a lattice.
pub fn check(ctx: &Context, grid: GridArgs) -> Result<()> {
    let config = load_config(ctx)?;
    let dims = resolve_dimensions(grid, &config)?;

    let lattice = engine::color_lattice(dims, &PipelineOptions { verify: true })
        .with_context(|| format!("Check failed for {} lattice", dims))?;

    if !ctx.quiet {
        let summary = lattice.summary();
        output::print(format!(
            "ok: {} lattice, {} vertices, {} edges, {} colors",
            dims, summary.vertices, summary.edges, summary.usage.color_count
        ));
    }

    Ok(())
}
