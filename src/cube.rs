//! Vertex and edge numbering of the cube.
//!
//! ```text
//!             7--------10--------6
//!            /|                 /|
//!          11 |                9 |
//!          /  7               /  6
//!         4---------8--------5   |
//!         |   |              |   |
//!         |   3--------2-----|---2
//!         4  /               5  /
//!         | 3                | 1
//!         |/                 |/
//!         0---------0--------1
//! ```
//! Edge labels sit on their edges, vertex labels on the corners.

/// One of the 8 corners, `0..8`.
pub type VertexIndex = u8;
/// One of the 12 edges, `0..12`.
pub type EdgeIndex = u8;

pub const NUM_VERTICES: usize = 8;
pub const NUM_EDGES: usize = 12;

/// Endpoints of each edge, lower vertex first.
pub const EDGE_VERTICES: [[VertexIndex; 2]; NUM_EDGES] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [0, 3],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
    [4, 5],
    [5, 6],
    [6, 7],
    [4, 7],
];

/// Resolves an unordered vertex pair to the edge joining them.
pub fn edge_for_pair(a: VertexIndex, b: VertexIndex) -> Option<EdgeIndex> {
    let pair = if a <= b { [a, b] } else { [b, a] };
    EDGE_VERTICES.iter()
        .position(|edge| *edge == pair)
        .map(|edge| edge as EdgeIndex)
}

#[test]
fn edge_table_is_a_bijection() {
    for (edge, [a, b]) in EDGE_VERTICES.into_iter().enumerate() {
        assert!(a < b && (b as usize) < NUM_VERTICES);
        assert_eq!(edge_for_pair(a, b), Some(edge as EdgeIndex));
        assert_eq!(edge_for_pair(b, a), Some(edge as EdgeIndex));
    }
    // Face and body diagonals are not edges
    assert_eq!(edge_for_pair(0, 2), None);
    assert_eq!(edge_for_pair(0, 6), None);
    assert_eq!(edge_for_pair(3, 3), None);
}

#[test]
fn edges_join_adjacent_corners() {
    use crate::CUBE_CORNERS;

    for [a, b] in EDGE_VERTICES {
        let distance = CUBE_CORNERS[a as usize].distance(CUBE_CORNERS[b as usize]);
        assert!((distance - 1.0).abs() < 1e-6, "edge {a}-{b} has length {distance}");
    }
}
