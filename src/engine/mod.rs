//! engine
//!
//! Runs the coloring pipeline: Build -> Color -> Verify.
//!
//! # Architecture
//!
//! The engine sits between the CLI and the core. It owns the ordering of
//! phases and their diagnostics; the core types never log phase timings or
//! print anything themselves.
//!
//! ```text
//! Dimensions -> CsrGraph::lattice -> greedy_bfs -> [verify] -> ColoredLattice
//! ```
//!
//! Export is left to the caller so that the same result can be written to
//! a file, stdout, or only summarised.
//!
//! # Invariants
//!
//! - The graph and coloring in a [`ColoredLattice`] always describe the
//!   same `Dimensions`
//! - With `verify` enabled, a returned lattice is known to be complete and
//!   properly colored
//!
//! # Example
//!
//! ```
//! use gridcolor::core::types::Dimensions;
//! use gridcolor::engine::{color_lattice, PipelineOptions};
//!
//! let dims = Dimensions::new(3, 3).unwrap();
//! let lattice = color_lattice(dims, &PipelineOptions { verify: true }).unwrap();
//! assert_eq!(lattice.coloring.color_count(), 2);
//! ```

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::core::coloring::{greedy_bfs, ColorUsage, Coloring, ColoringError};
use crate::core::graph::{CsrGraph, GraphError};
use crate::core::types::Dimensions;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Directory used to look up the local config file.
    pub fn dir(&self) -> Option<PathBuf> {
        self.cwd.clone().or_else(|| std::env::current_dir().ok())
    }
}

/// Options for a pipeline run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Re-check graph invariants and coloring properness after coloring.
    pub verify: bool,
}

/// Errors from engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The built graph broke a CSR invariant.
    #[error("graph verification failed: {0}")]
    Graph(#[from] GraphError),

    /// The coloring is incomplete or improper.
    #[error("coloring verification failed: {0}")]
    Coloring(#[from] ColoringError),
}

/// A lattice together with its coloring.
#[derive(Debug, Clone)]
pub struct ColoredLattice {
    pub dims: Dimensions,
    pub graph: CsrGraph,
    pub coloring: Coloring,
}

impl ColoredLattice {
    /// Summary of the result for diagnostics.
    pub fn summary(&self) -> Summary {
        Summary {
            rows: self.dims.rows(),
            cols: self.dims.cols(),
            vertices: self.graph.num_vertices(),
            edges: self.graph.num_edges(),
            usage: self.coloring.usage(),
        }
    }

    /// Re-check the graph and the coloring.
    pub fn verify(&self) -> Result<(), EngineError> {
        self.graph.validate()?;
        self.coloring.verify(&self.graph)?;
        Ok(())
    }
}

/// Size and color usage of a colored lattice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub rows: u32,
    pub cols: u32,
    pub vertices: usize,
    pub edges: usize,
    #[serde(flatten)]
    pub usage: ColorUsage,
}

/// Build and color the lattice for `dims`.
///
/// # Errors
///
/// Only fails when `options.verify` is set and verification finds a
/// violation, which indicates a bug.
pub fn color_lattice(
    dims: Dimensions,
    options: &PipelineOptions,
) -> Result<ColoredLattice, EngineError> {
    let start = Instant::now();
    let graph = CsrGraph::lattice(dims);
    tracing::debug!(
        %dims,
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        elapsed = ?start.elapsed(),
        "built lattice graph"
    );

    let start = Instant::now();
    let coloring = greedy_bfs(&graph);
    tracing::debug!(
        colors = coloring.color_count(),
        elapsed = ?start.elapsed(),
        "colored lattice"
    );

    let lattice = ColoredLattice {
        dims,
        graph,
        coloring,
    };

    if options.verify {
        let start = Instant::now();
        lattice.verify()?;
        tracing::debug!(elapsed = ?start.elapsed(), "verified coloring");
    }

    Ok(lattice)
}
