//! gridcolor - Greedy vertex coloring of rectilinear lattice graphs
//!
//! gridcolor builds the orthogonal 4-neighbour lattice for an `NX x NY`
//! grid, colors it greedily in breadth-first order so that no two adjacent
//! vertices share a color, and writes the result as a legacy VTK mesh.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Runs the Build -> Color -> Verify pipeline
//! - [`core`] - Lattice graph, coloring, domain types and configuration
//! - [`export`] - Mesh exporters (legacy VTK)
//! - [`ui`] - Output formatting
//!
//! # Correctness Invariants
//!
//! 1. Vertex `(i, j)` has index `j + i * NY`
//! 2. Adjacency is symmetric and free of self-loops and duplicates
//! 3. Adjacent vertices never share a color
//! 4. The coloring is fully determined by the lattice size

pub mod cli;
pub mod core;
pub mod engine;
pub mod export;
pub mod ui;
