//! render command - Color a lattice and write it as a VTK mesh

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use super::{load_config, resolve_dimensions, verbosity};
use crate::cli::args::GridArgs;
use crate::engine::{self, ColoredLattice, Context, PipelineOptions};
use crate::export::{MeshExporter, VtkWriter};
use crate::ui::output;

/// Color a lattice and write the mesh to `out_path` (or stdout).
///
/// Color usage goes to stderr unless `no_stats` is set or config disables
/// it. `verify` (or `verify = true` in config) checks the coloring before
/// anything is written.
pub fn render(
    ctx: &Context,
    grid: GridArgs,
    out_path: Option<&Path>,
    no_stats: bool,
    verify: bool,
) -> Result<()> {
    let config = load_config(ctx)?;
    let dims = resolve_dimensions(grid, &config)?;
    let options = PipelineOptions {
        verify: verify || config.verify(),
    };
    output::debug(
        format!("rendering {} lattice (verify: {})", dims, options.verify),
        verbosity(ctx),
    );

    let lattice = engine::color_lattice(dims, &options)?;
    let writer = VtkWriter::new(config.vtk_title(), config.scalar_name());

    match out_path {
        Some(path) => {
            write_file_atomic(path, &writer, &lattice)?;
            output::debug(format!("wrote {}", path.display()), verbosity(ctx));
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            writer
                .export(dims, &lattice.graph, &lattice.coloring, &mut lock)
                .context("Failed to write mesh to stdout")?;
            lock.flush().context("Failed to write mesh to stdout")?;
        }
    }

    if !no_stats && config.stats() {
        output::note(output::format_usage(&lattice.coloring.usage()), verbosity(ctx));
    }

    Ok(())
}

/// Sibling path the mesh is staged in before it replaces `path`.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mesh".into());
    path.with_file_name(format!(".{}.tmp", name))
}

/// Write the mesh to a temporary sibling and rename it over `path`.
///
/// An existing file at `path` is left untouched if writing fails.
fn write_file_atomic(path: &Path, writer: &VtkWriter, lattice: &ColoredLattice) -> Result<()> {
    let temp_path = staging_path(path);

    let result = File::create(&temp_path)
        .with_context(|| format!("Failed to create '{}'", temp_path.display()))
        .and_then(|mut file| {
            writer
                .export(lattice.dims, &lattice.graph, &lattice.coloring, &mut file)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            file.sync_all()
                .with_context(|| format!("Failed to write '{}'", path.display()))
        })
        .and_then(|()| {
            fs::rename(&temp_path, path)
                .with_context(|| format!("Failed to replace '{}'", path.display()))
        });

    if result.is_err() {
        // Cleanup failure is secondary to the write error.
        let _ = fs::remove_file(&temp_path);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Dimensions;
    use tempfile::TempDir;

    fn lattice(rows: u32, cols: u32) -> ColoredLattice {
        let dims = Dimensions::new(rows, cols).unwrap();
        engine::color_lattice(dims, &PipelineOptions::default()).unwrap()
    }

    #[test]
    fn staging_path_is_hidden_sibling() {
        assert_eq!(
            staging_path(Path::new("/out/grid.vtk")),
            PathBuf::from("/out/.grid.vtk.tmp")
        );
    }

    #[test]
    fn replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("grid.vtk");
        fs::write(&path, "old contents").unwrap();

        write_file_atomic(&path, &VtkWriter::default(), &lattice(1, 2)).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# vtk DataFile Version 2.0\n"));
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn failed_write_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("grid.vtk");
        fs::write(&path, "old contents").unwrap();
        // A directory in the staging slot makes File::create fail.
        fs::create_dir(staging_path(&path)).unwrap();

        let err = write_file_atomic(&path, &VtkWriter::default(), &lattice(2, 2)).unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to create"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "old contents");
    }

    #[test]
    fn failed_export_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("grid.vtk");
        fs::write(&path, "old contents").unwrap();

        let mut broken = lattice(2, 2);
        broken.dims = Dimensions::new(3, 3).unwrap();

        assert!(write_file_atomic(&path, &VtkWriter::default(), &broken).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "old contents");
        assert!(!staging_path(&path).exists());
    }
}
