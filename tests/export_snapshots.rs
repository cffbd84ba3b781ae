//! Snapshot tests for the VTK exporter.

use gridcolor::core::coloring::greedy_bfs;
use gridcolor::core::graph::CsrGraph;
use gridcolor::core::types::Dimensions;
use gridcolor::export::{MeshExporter, VtkWriter};

fn vtk(rows: u32, cols: u32) -> String {
    let dims = Dimensions::new(rows, cols).unwrap();
    let graph = CsrGraph::lattice(dims);
    let coloring = greedy_bfs(&graph);
    VtkWriter::default().render(dims, &graph, &coloring).unwrap()
}

#[test]
fn one_by_two() {
    insta::assert_snapshot!(vtk(1, 2).trim_end(), @r"
    # vtk DataFile Version 2.0
    some rectangular colored grid
    ASCII
    DATASET UNSTRUCTURED_GRID

    POINTS 2 float
    0 0 0
    0 1 0

    CELLS 1 3
    2 1 0

    CELL_TYPES 1
    3


    POINT_DATA 2
    SCALARS Color float 1
    LOOKUP_TABLE default
    0
    1
    ");
}

#[test]
fn two_by_two() {
    insta::assert_snapshot!(vtk(2, 2).trim_end(), @r"
    # vtk DataFile Version 2.0
    some rectangular colored grid
    ASCII
    DATASET UNSTRUCTURED_GRID

    POINTS 4 float
    0 0 0
    0 1 0
    1 0 0
    1 1 0

    CELLS 4 12
    2 1 0
    2 2 0
    2 3 2
    2 3 1

    CELL_TYPES 4
    3
    3
    3
    3


    POINT_DATA 4
    SCALARS Color float 1
    LOOKUP_TABLE default
    0
    1
    1
    0
    ");
}

#[test]
fn exporter_writes_through_trait_object() {
    let dims = Dimensions::new(3, 2).unwrap();
    let graph = CsrGraph::lattice(dims);
    let coloring = greedy_bfs(&graph);
    let exporter: Box<dyn MeshExporter> = Box::new(VtkWriter::new("strip", "Shade"));

    let mut buf = Vec::new();
    exporter.export(dims, &graph, &coloring, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(text.starts_with("# vtk DataFile Version 2.0\nstrip\n"));
    assert!(text.contains("POINTS 6 float\n0 0 0\n0 1 0\n1 0 0\n1 1 0\n2 0 0\n2 1 0\n"));
    assert!(text.contains("SCALARS Shade float 1\n"));
}
