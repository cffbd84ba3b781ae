//! export
//!
//! Mesh export of a colored lattice.
//!
//! # Overview
//!
//! An exporter receives the lattice graph and its coloring and writes a
//! point/cell mesh:
//! - one point per vertex at `(i / cols, i % cols, 0)`
//! - one line cell per undirected edge, taken from the `i > k` half of the
//!   adjacency
//! - the vertex color as a per-point scalar
//!
//! Only the legacy VTK ASCII format ([`vtk::VtkWriter`]) is implemented.

pub mod vtk;

pub use vtk::VtkWriter;

use std::io::Write;

use thiserror::Error;

use crate::core::coloring::Coloring;
use crate::core::graph::CsrGraph;
use crate::core::types::{Dimensions, VertexId};

/// Errors from mesh export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write mesh: {0}")]
    Io(#[from] std::io::Error),

    #[error("vertex {0} has no color; only complete colorings can be exported")]
    Uncolored(VertexId),

    #[error("{what} has {actual} vertices, expected {expected}")]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Writes a colored lattice as a mesh.
pub trait MeshExporter {
    /// Write the mesh for `graph` colored by `coloring` to `out`.
    ///
    /// # Errors
    ///
    /// Fails if the inputs disagree in size, if any vertex is uncolored, or
    /// if writing to `out` fails.
    fn export(
        &self,
        dims: Dimensions,
        graph: &CsrGraph,
        coloring: &Coloring,
        out: &mut dyn Write,
    ) -> Result<(), ExportError>;
}

/// Check that `dims`, `graph` and `coloring` describe the same lattice.
pub(crate) fn check_inputs(
    dims: Dimensions,
    graph: &CsrGraph,
    coloring: &Coloring,
) -> Result<(), ExportError> {
    let expected = dims.num_vertices();
    if graph.num_vertices() != expected {
        return Err(ExportError::SizeMismatch {
            what: "graph",
            expected,
            actual: graph.num_vertices(),
        });
    }
    if coloring.len() != expected {
        return Err(ExportError::SizeMismatch {
            what: "coloring",
            expected,
            actual: coloring.len(),
        });
    }
    if let Some(v) = coloring.colors().iter().position(Option::is_none) {
        return Err(ExportError::Uncolored(v as VertexId));
    }
    Ok(())
}
