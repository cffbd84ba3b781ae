//! Property-based tests for the lattice graph and the colorer.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated lattice sizes.

use proptest::prelude::*;

use gridcolor::core::coloring::greedy_bfs;
use gridcolor::core::graph::CsrGraph;
use gridcolor::core::types::{Dimensions, VertexId};

/// Strategy for lattice sizes, thin strips included.
fn dimensions() -> impl Strategy<Value = Dimensions> {
    prop_oneof![
        (1u32..=40, 1u32..=40),
        (Just(1u32), 1u32..=200),
        (1u32..=200, Just(1u32)),
    ]
    .prop_map(|(r, c)| Dimensions::new(r, c).unwrap())
}

fn expected_degree(dims: Dimensions, v: VertexId) -> usize {
    let (i, j) = dims.position(v);
    let mut degree = 0;
    if j > 0 {
        degree += 1;
    }
    if j + 1 < dims.cols() {
        degree += 1;
    }
    if i + 1 < dims.rows() {
        degree += 1;
    }
    if i > 0 {
        degree += 1;
    }
    degree
}

proptest! {
    /// Every built lattice passes CSR validation.
    #[test]
    fn lattice_tables_are_valid(dims in dimensions()) {
        let graph = CsrGraph::lattice(dims);
        prop_assert_eq!(graph.validate(), Ok(()));
        prop_assert_eq!(graph.num_vertices(), dims.num_vertices());
        prop_assert_eq!(graph.offsets()[0], 0);
        prop_assert_eq!(
            *graph.offsets().last().unwrap(),
            graph.neighbour_table().len()
        );
        prop_assert!(graph.offsets().windows(2).all(|w| w[0] <= w[1]));
    }

    /// k is a neighbour of i exactly when i is a neighbour of k.
    #[test]
    fn adjacency_is_symmetric(dims in dimensions()) {
        let graph = CsrGraph::lattice(dims);
        for v in 0..graph.num_vertices() as VertexId {
            for &k in graph.neighbours(v) {
                prop_assert!(graph.has_edge(k, v), "{} -> {} has no reverse", v, k);
            }
        }
    }

    /// Degrees follow the grid position: 4 inside, 3 on sides, 2 at corners.
    #[test]
    fn degrees_match_position(dims in dimensions()) {
        let graph = CsrGraph::lattice(dims);
        for v in 0..graph.num_vertices() as VertexId {
            prop_assert_eq!(graph.degree(v), expected_degree(dims, v));
            prop_assert!(graph.degree(v) <= 4);
        }
    }

    /// Corner vertices: 4 of degree 2, or 2 of degree 1 on a strip.
    #[test]
    fn corner_counts(dims in dimensions()) {
        let graph = CsrGraph::lattice(dims);
        let count = |d: usize| {
            (0..graph.num_vertices() as VertexId)
                .filter(|&v| graph.degree(v) == d)
                .count()
        };
        match (dims.rows(), dims.cols()) {
            (1, 1) => prop_assert_eq!(count(0), 1),
            (1, _) | (_, 1) => {
                prop_assert_eq!(count(1), 2);
                prop_assert_eq!(count(0), 0);
            }
            _ => {
                prop_assert_eq!(count(2), 4);
                prop_assert_eq!(count(1), 0);
            }
        }
    }

    /// Edge count is rows * (cols - 1) + cols * (rows - 1).
    #[test]
    fn edge_count_closed_form(dims in dimensions()) {
        let graph = CsrGraph::lattice(dims);
        let (r, c) = (dims.rows() as usize, dims.cols() as usize);
        prop_assert_eq!(graph.num_edges(), r * (c - 1) + c * (r - 1));
        prop_assert_eq!(graph.edges().count(), graph.num_edges());
        prop_assert!(graph.edges().all(|(i, k)| i > k));
    }

    /// No edge joins two vertices of the same color.
    #[test]
    fn coloring_is_proper(dims in dimensions()) {
        let graph = CsrGraph::lattice(dims);
        let coloring = greedy_bfs(&graph);
        for (i, k) in graph.edges() {
            prop_assert_ne!(coloring.get(i), coloring.get(k));
        }
        prop_assert_eq!(coloring.verify(&graph), Ok(()));
    }

    /// Every vertex ends up colored.
    #[test]
    fn coloring_is_complete(dims in dimensions()) {
        let graph = CsrGraph::lattice(dims);
        let coloring = greedy_bfs(&graph);
        prop_assert_eq!(coloring.len(), dims.num_vertices());
        prop_assert!(coloring.is_complete());
    }

    /// Two runs give identical results.
    #[test]
    fn coloring_is_deterministic(dims in dimensions()) {
        let graph = CsrGraph::lattice(dims);
        let first = greedy_bfs(&graph);
        let second = greedy_bfs(&CsrGraph::lattice(dims));
        prop_assert_eq!(first, second);
    }

    /// Color ids are exactly 0..color_count with every id in use.
    #[test]
    fn color_ids_are_contiguous(dims in dimensions()) {
        let graph = CsrGraph::lattice(dims);
        let coloring = greedy_bfs(&graph);
        let usage = coloring.usage();
        prop_assert_eq!(usage.counts.len(), coloring.color_count() as usize);
        prop_assert!(usage.counts.iter().all(|&n| n > 0));
        prop_assert_eq!(usage.counts.iter().sum::<usize>(), dims.num_vertices());
    }

    /// Vertex 0 always takes color 0.
    #[test]
    fn root_takes_first_color(dims in dimensions()) {
        let coloring = greedy_bfs(&CsrGraph::lattice(dims));
        prop_assert_eq!(coloring.get(0).map(|c| c.0), Some(0));
    }
}
