//! core::graph
//!
//! Compressed adjacency (CSR) representation of the lattice graph.
//!
//! # Architecture
//!
//! The graph is stored as two flat tables:
//! - `neighbours`: every vertex's neighbour list, concatenated
//! - `offsets`: `N + 1` entries; vertex `v` owns
//!   `neighbours[offsets[v]..offsets[v + 1]]`
//!
//! No per-vertex allocation is made. Lattices are built once by
//! [`CsrGraph::lattice`] and never mutated afterwards.
//!
//! # Invariants
//!
//! - `offsets[0] == 0`, `offsets[N] == neighbours.len()`, non-decreasing
//! - Adjacency is symmetric (the lattice is undirected)
//! - No self-loops, no duplicate entries within a neighbour list
//! - Lattice neighbour lists are ordered left, right, down, up

use super::types::{Dimensions, VertexId};
use thiserror::Error;

/// Errors from CSR validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("offset table is empty; expected N + 1 entries")]
    EmptyOffsets,

    #[error("too many vertices for 32-bit ids: {0}")]
    TooManyVertices(usize),

    #[error("offsets[0] must be 0, got {0}")]
    NonZeroStart(usize),

    #[error("offsets decrease at vertex {vertex}")]
    NonMonotonic { vertex: usize },

    #[error("offsets end at {last} but neighbour table has {len} entries")]
    LengthMismatch { last: usize, len: usize },

    #[error("vertex {vertex} lists out-of-range neighbour {neighbour}")]
    OutOfRange { vertex: usize, neighbour: VertexId },

    #[error("vertex {0} lists itself as a neighbour")]
    SelfLoop(usize),

    #[error("vertex {vertex} lists neighbour {neighbour} more than once")]
    DuplicateNeighbour { vertex: usize, neighbour: VertexId },

    #[error("edge {from} -> {to} has no reverse edge")]
    Asymmetric { from: usize, to: VertexId },
}

/// Undirected graph in compressed sparse row form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    neighbours: Vec<VertexId>,
    offsets: Vec<usize>,
}

impl CsrGraph {
    /// Build the orthogonal 4-neighbour lattice for `dims`.
    ///
    /// Vertex `I = j + i * cols` gets its neighbours appended in the order
    /// left (`I - 1`), right (`I + 1`), down (`I + cols`), up (`I - cols`),
    /// skipping those that fall off the grid. The colorer's traversal order
    /// depends on this ordering.
    ///
    /// # Example
    ///
    /// ```
    /// use gridcolor::core::graph::CsrGraph;
    /// use gridcolor::core::types::Dimensions;
    ///
    /// let graph = CsrGraph::lattice(Dimensions::new(2, 2).unwrap());
    /// assert_eq!(graph.neighbours(0), &[1, 2]);
    /// assert_eq!(graph.neighbours(3), &[2, 1]);
    /// assert_eq!(graph.num_edges(), 4);
    /// ```
    pub fn lattice(dims: Dimensions) -> Self {
        let (ni, nj) = (dims.rows(), dims.cols());
        let mut offsets = Vec::with_capacity(dims.num_vertices() + 1);
        let mut neighbours = Vec::with_capacity(dims.num_endpoints());

        for i in 0..ni {
            for j in 0..nj {
                offsets.push(neighbours.len());
                let v = dims.index(i, j);
                if j > 0 {
                    neighbours.push(v - 1);
                }
                if j < nj - 1 {
                    neighbours.push(v + 1);
                }
                if i < ni - 1 {
                    neighbours.push(v + nj);
                }
                if i > 0 {
                    neighbours.push(v - nj);
                }
            }
        }
        offsets.push(neighbours.len());

        Self {
            neighbours,
            offsets,
        }
    }

    /// Assemble a graph from raw CSR tables, validating every invariant.
    ///
    /// # Errors
    ///
    /// Returns the first [`GraphError`] found by [`CsrGraph::validate`].
    pub fn from_parts(offsets: Vec<usize>, neighbours: Vec<VertexId>) -> Result<Self, GraphError> {
        let graph = Self {
            neighbours,
            offsets,
        };
        graph.validate()?;
        Ok(graph)
    }

    /// Check the CSR invariants.
    pub fn validate(&self) -> Result<(), GraphError> {
        let (&first, _) = self.offsets.split_first().ok_or(GraphError::EmptyOffsets)?;
        let n = self.num_vertices();
        if n > VertexId::MAX as usize {
            return Err(GraphError::TooManyVertices(n));
        }
        if first != 0 {
            return Err(GraphError::NonZeroStart(first));
        }
        for (vertex, pair) in self.offsets.windows(2).enumerate() {
            if pair[0] > pair[1] {
                return Err(GraphError::NonMonotonic { vertex });
            }
        }
        let last = self.offsets[n];
        if last != self.neighbours.len() {
            return Err(GraphError::LengthMismatch {
                last,
                len: self.neighbours.len(),
            });
        }

        for vertex in 0..n {
            let list = self.row(vertex);
            for (pos, &neighbour) in list.iter().enumerate() {
                if neighbour as usize >= n {
                    return Err(GraphError::OutOfRange { vertex, neighbour });
                }
                if neighbour as usize == vertex {
                    return Err(GraphError::SelfLoop(vertex));
                }
                if list[..pos].contains(&neighbour) {
                    return Err(GraphError::DuplicateNeighbour { vertex, neighbour });
                }
            }
        }

        // Symmetry is checked once every id is known to be in range.
        for vertex in 0..n {
            for &to in self.row(vertex) {
                if !self.row(to as usize).contains(&(vertex as VertexId)) {
                    return Err(GraphError::Asymmetric { from: vertex, to });
                }
            }
        }

        Ok(())
    }

    /// Number of vertices `N`.
    pub fn num_vertices(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Check if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    /// Number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.neighbours.len() / 2
    }

    /// Neighbours of `v`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a vertex of this graph.
    pub fn neighbours(&self, v: VertexId) -> &[VertexId] {
        self.row(v as usize)
    }

    /// Degree of `v`.
    pub fn degree(&self, v: VertexId) -> usize {
        let v = v as usize;
        self.offsets[v + 1] - self.offsets[v]
    }

    /// Check if `a` and `b` are adjacent.
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.neighbours(a).contains(&b)
    }

    /// The flat neighbour table.
    pub fn neighbour_table(&self) -> &[VertexId] {
        &self.neighbours
    }

    /// The offset table (`N + 1` entries).
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Iterate over each undirected edge once, as `(i, k)` with `i > k`.
    ///
    /// Edges come out grouped by `i` in vertex order, and within a vertex in
    /// neighbour-list order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        (0..self.num_vertices()).flat_map(move |i| {
            let i = i as VertexId;
            self.neighbours(i)
                .iter()
                .filter(move |&&k| i > k)
                .map(move |&k| (i, k))
        })
    }

    fn row(&self, v: usize) -> &[VertexId] {
        &self.neighbours[self.offsets[v]..self.offsets[v + 1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lattice(rows: u32, cols: u32) -> CsrGraph {
        CsrGraph::lattice(Dimensions::new(rows, cols).unwrap())
    }

    #[test]
    fn single_vertex_has_no_neighbours() {
        let graph = lattice(1, 1);
        assert_eq!(graph.num_vertices(), 1);
        assert_eq!(graph.offsets(), &[0, 0]);
        assert!(graph.neighbour_table().is_empty());
        assert_eq!(graph.degree(0), 0);
    }

    #[test]
    fn single_row_is_a_path() {
        let graph = lattice(1, 4);
        assert_eq!(graph.neighbours(0), &[1]);
        assert_eq!(graph.neighbours(1), &[0, 2]);
        assert_eq!(graph.neighbours(2), &[1, 3]);
        assert_eq!(graph.neighbours(3), &[2]);
        assert_eq!(graph.num_edges(), 3);
    }

    #[test]
    fn single_column_is_a_path() {
        let graph = lattice(3, 1);
        assert_eq!(graph.neighbours(0), &[1]);
        assert_eq!(graph.neighbours(1), &[2, 0]);
        assert_eq!(graph.neighbours(2), &[1]);
    }

    #[test]
    fn neighbour_order_is_left_right_down_up() {
        // 3x3, centre vertex 4
        let graph = lattice(3, 3);
        assert_eq!(graph.neighbours(4), &[3, 5, 7, 1]);
        assert_eq!(graph.neighbours(0), &[1, 3]);
        assert_eq!(graph.neighbours(8), &[7, 5]);
    }

    #[test]
    fn two_by_two_tables() {
        let graph = lattice(2, 2);
        assert_eq!(graph.offsets(), &[0, 2, 4, 6, 8]);
        assert_eq!(graph.neighbour_table(), &[1, 2, 0, 3, 3, 0, 2, 1]);
    }

    #[test]
    fn offsets_bracket_neighbour_table() {
        let graph = lattice(4, 6);
        assert_eq!(graph.offsets().len(), 25);
        assert_eq!(graph.offsets()[0], 0);
        assert_eq!(graph.offsets()[24], graph.neighbour_table().len());
    }

    #[test]
    fn capacity_matches_endpoint_count() {
        let dims = Dimensions::new(5, 3).unwrap();
        let graph = CsrGraph::lattice(dims);
        assert_eq!(graph.neighbour_table().len(), dims.num_endpoints());
    }

    #[test]
    fn lattices_validate() {
        for (r, c) in [(1, 1), (1, 5), (5, 1), (2, 2), (4, 7)] {
            assert_eq!(lattice(r, c).validate(), Ok(()));
        }
    }

    #[test]
    fn edges_emitted_once_with_larger_first() {
        let graph = lattice(2, 2);
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(1, 0), (2, 0), (3, 2), (3, 1)]);
    }

    #[test]
    fn has_edge_is_symmetric() {
        let graph = lattice(3, 4);
        assert!(graph.has_edge(5, 6));
        assert!(graph.has_edge(6, 5));
        assert!(graph.has_edge(1, 5));
        assert!(!graph.has_edge(0, 5));
    }

    mod from_parts {
        use super::*;

        #[test]
        fn accepts_valid_tables() {
            let graph = CsrGraph::from_parts(vec![0, 1, 2], vec![1, 0]).unwrap();
            assert_eq!(graph.num_edges(), 1);
        }

        #[test]
        fn accepts_empty_graph() {
            let graph = CsrGraph::from_parts(vec![0], vec![]).unwrap();
            assert!(graph.is_empty());
        }

        #[test]
        fn rejects_empty_offsets() {
            assert_eq!(
                CsrGraph::from_parts(vec![], vec![]),
                Err(GraphError::EmptyOffsets)
            );
        }

        #[test]
        fn rejects_nonzero_start() {
            assert_eq!(
                CsrGraph::from_parts(vec![1, 1], vec![0]),
                Err(GraphError::NonZeroStart(1))
            );
        }

        #[test]
        fn rejects_decreasing_offsets() {
            assert_eq!(
                CsrGraph::from_parts(vec![0, 2, 1, 2], vec![1, 2]),
                Err(GraphError::NonMonotonic { vertex: 1 })
            );
        }

        #[test]
        fn rejects_length_mismatch() {
            assert_eq!(
                CsrGraph::from_parts(vec![0, 1, 1], vec![1, 0]),
                Err(GraphError::LengthMismatch { last: 1, len: 2 })
            );
        }

        #[test]
        fn rejects_out_of_range() {
            assert_eq!(
                CsrGraph::from_parts(vec![0, 1, 1], vec![5]),
                Err(GraphError::OutOfRange {
                    vertex: 0,
                    neighbour: 5
                })
            );
        }

        #[test]
        fn rejects_self_loop() {
            assert_eq!(
                CsrGraph::from_parts(vec![0, 1], vec![0]),
                Err(GraphError::SelfLoop(0))
            );
        }

        #[test]
        fn rejects_duplicates() {
            assert_eq!(
                CsrGraph::from_parts(vec![0, 2, 4], vec![1, 1, 0, 0]),
                Err(GraphError::DuplicateNeighbour {
                    vertex: 0,
                    neighbour: 1
                })
            );
        }

        #[test]
        fn rejects_one_way_edges() {
            assert_eq!(
                CsrGraph::from_parts(vec![0, 1, 1], vec![1]),
                Err(GraphError::Asymmetric { from: 0, to: 1 })
            );
        }
    }
}
