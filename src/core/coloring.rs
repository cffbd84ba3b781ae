//! core::coloring
//!
//! Greedy vertex coloring under breadth-first visitation.
//!
//! # Algorithm
//!
//! Starting from vertex 0 with one color allocated, vertices are popped from
//! a FIFO queue. Each newly visited vertex takes the smallest allocated
//! color that none of its already-colored neighbours hold, or a freshly
//! allocated color when every existing one is blocked. All unvisited
//! neighbours are then pushed, duplicates included; a vertex that is popped
//! a second time is skipped.
//!
//! Colors are never revisited once assigned, so the result can use more
//! colors than the chromatic number. The assignment is fully determined by
//! the graph's neighbour ordering.
//!
//! # Example
//!
//! ```
//! use gridcolor::core::coloring::greedy_bfs;
//! use gridcolor::core::graph::CsrGraph;
//! use gridcolor::core::types::{Color, Dimensions};
//!
//! let graph = CsrGraph::lattice(Dimensions::new(2, 2).unwrap());
//! let coloring = greedy_bfs(&graph);
//!
//! assert_eq!(coloring.color_count(), 2);
//! assert_eq!(coloring.get(3), Some(Color(0)));
//! assert!(coloring.verify(&graph).is_ok());
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::graph::CsrGraph;
use super::types::{Color, VertexId};

/// Errors from coloring verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColoringError {
    #[error("coloring has {colors} entries but graph has {vertices} vertices")]
    LengthMismatch { colors: usize, vertices: usize },

    #[error("vertex {0} has no color")]
    Uncolored(VertexId),

    #[error("adjacent vertices {a} and {b} share color {color}")]
    Conflict { a: VertexId, b: VertexId, color: Color },

    #[error("vertex {vertex} has color {color} outside the {count} allocated colors")]
    UnallocatedColor {
        vertex: VertexId,
        color: Color,
        count: u32,
    },
}

/// Result of coloring a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<Option<Color>>,
    color_count: u32,
}

impl Coloring {
    /// Number of allocated colors; ids are `0..color_count`.
    pub fn color_count(&self) -> u32 {
        self.color_count
    }

    /// Number of vertices covered.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the coloring covers no vertices.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of `v`, or `None` if it was never reached.
    pub fn get(&self, v: VertexId) -> Option<Color> {
        self.colors.get(v as usize).copied().flatten()
    }

    /// Per-vertex colors, `None` where unassigned.
    pub fn colors(&self) -> &[Option<Color>] {
        &self.colors
    }

    /// Check that every vertex received a color.
    pub fn is_complete(&self) -> bool {
        self.colors.iter().all(Option::is_some)
    }

    /// Count how many vertices use each color.
    pub fn usage(&self) -> ColorUsage {
        let mut counts = vec![0usize; self.color_count as usize];
        for color in self.colors.iter().flatten() {
            counts[color.index()] += 1;
        }
        ColorUsage {
            color_count: self.color_count,
            counts,
        }
    }

    /// Check the coloring against `graph`.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a length mismatch, an uncolored
    /// vertex, a color id outside the allocated range, or an edge whose
    /// endpoints share a color.
    pub fn verify(&self, graph: &CsrGraph) -> Result<(), ColoringError> {
        if self.colors.len() != graph.num_vertices() {
            return Err(ColoringError::LengthMismatch {
                colors: self.colors.len(),
                vertices: graph.num_vertices(),
            });
        }

        for (v, color) in self.colors.iter().enumerate() {
            let vertex = v as VertexId;
            let color = color.ok_or(ColoringError::Uncolored(vertex))?;
            if color.0 >= self.color_count {
                return Err(ColoringError::UnallocatedColor {
                    vertex,
                    color,
                    count: self.color_count,
                });
            }
        }

        for (a, b) in graph.edges() {
            let color = self.colors[a as usize];
            if color == self.colors[b as usize] {
                if let Some(color) = color {
                    return Err(ColoringError::Conflict { a, b, color });
                }
            }
        }

        Ok(())
    }
}

/// Per-color vertex counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorUsage {
    /// Number of allocated colors.
    pub color_count: u32,
    /// `counts[c]` is the number of vertices holding color `c`.
    pub counts: Vec<usize>,
}

/// Check whether `color` is free for `v`.
///
/// Only neighbours that already hold a color can block it. Stops at the
/// first neighbour holding `color`.
///
/// # Panics
///
/// Panics if `v` is not a vertex of `graph` or `colors` is shorter than
/// the graph's vertex count.
pub fn is_feasible(graph: &CsrGraph, colors: &[Option<Color>], v: VertexId, color: Color) -> bool {
    graph
        .neighbours(v)
        .iter()
        .all(|&k| colors[k as usize] != Some(color))
}

/// Color `graph` greedily in breadth-first order from vertex 0.
///
/// Vertices not reachable from vertex 0 stay uncolored. An empty graph
/// yields an empty coloring with no allocated colors.
pub fn greedy_bfs(graph: &CsrGraph) -> Coloring {
    let n = graph.num_vertices();
    if n == 0 {
        return Coloring {
            colors: Vec::new(),
            color_count: 0,
        };
    }

    let mut colors: Vec<Option<Color>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue: VecDeque<VertexId> = VecDeque::from([0]);
    let mut color_count: u32 = 1;

    while let Some(v) = queue.pop_front() {
        if visited[v as usize] {
            continue;
        }
        visited[v as usize] = true;

        let color = (0..color_count)
            .map(Color)
            .find(|&c| is_feasible(graph, &colors, v, c))
            .unwrap_or_else(|| {
                color_count += 1;
                Color(color_count - 1)
            });
        colors[v as usize] = Some(color);

        queue.extend(
            graph
                .neighbours(v)
                .iter()
                .filter(|&&k| !visited[k as usize]),
        );
    }

    tracing::trace!(vertices = n, colors = color_count, "greedy coloring finished");

    Coloring {
        colors,
        color_count,
    }
}
