//! export::vtk
//!
//! Legacy VTK ASCII writer (`DATASET UNSTRUCTURED_GRID`).

use std::io::{BufWriter, Write};
use std::time::Instant;

use super::{check_inputs, ExportError, MeshExporter};
use crate::core::coloring::Coloring;
use crate::core::config::{DEFAULT_SCALAR_NAME, DEFAULT_TITLE};
use crate::core::graph::CsrGraph;
use crate::core::types::Dimensions;

/// VTK cell type id for a two-point line segment.
const VTK_LINE: u8 = 3;

/// Writes legacy VTK unstructured-grid files.
#[derive(Debug, Clone)]
pub struct VtkWriter {
    title: String,
    scalar_name: String,
}

impl Default for VtkWriter {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_SCALAR_NAME)
    }
}

impl VtkWriter {
    /// Create a writer with the given header title and scalar array name.
    pub fn new(title: impl Into<String>, scalar_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            scalar_name: scalar_name.into(),
        }
    }

    /// Render the mesh into a string.
    pub fn render(
        &self,
        dims: Dimensions,
        graph: &CsrGraph,
        coloring: &Coloring,
    ) -> Result<String, ExportError> {
        let mut buf = Vec::new();
        self.export(dims, graph, coloring, &mut buf)?;
        // Everything written above is UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl MeshExporter for VtkWriter {
    fn export(
        &self,
        dims: Dimensions,
        graph: &CsrGraph,
        coloring: &Coloring,
        out: &mut dyn Write,
    ) -> Result<(), ExportError> {
        check_inputs(dims, graph, coloring)?;

        let start = Instant::now();
        let mut w = BufWriter::new(out);
        let n = graph.num_vertices();
        let cells = graph.num_edges();

        write!(
            w,
            "# vtk DataFile Version 2.0\n{}\nASCII\nDATASET UNSTRUCTURED_GRID\n\n",
            self.title
        )?;

        writeln!(w, "POINTS {} float", n)?;
        for v in 0..n as u32 {
            let (i, j) = dims.position(v);
            writeln!(w, "{} {} 0", i, j)?;
        }

        writeln!(w, "\nCELLS {} {}", cells, 3 * cells)?;
        for (i, k) in graph.edges() {
            writeln!(w, "2 {} {}", i, k)?;
        }

        writeln!(w, "\nCELL_TYPES {}", cells)?;
        for _ in 0..cells {
            writeln!(w, "{}", VTK_LINE)?;
        }

        write!(
            w,
            "\n\nPOINT_DATA {}\nSCALARS {} float 1\nLOOKUP_TABLE default\n",
            n, self.scalar_name
        )?;
        for color in coloring.colors().iter().flatten() {
            writeln!(w, "{}", color)?;
        }

        w.flush()?;
        tracing::debug!(points = n, cells, elapsed = ?start.elapsed(), "wrote VTK mesh");
        Ok(())
    }
}
