#![warn(unused_extern_crates)]
//! Lookup table generator for Dual Marching Cubes.
//!
//! A handful of hand-authored representative cases (which edges of a cube
//! share a dual vertex for a given inside/outside corner pattern) are
//! expanded through the 24 proper rotations of the cube into a table
//! covering all 256 corner configurations.
//!
//! ```text
//!       7-----------------6
//!      /|                /|
//!     / |               / |
//!    4-----------------5  |
//!    |  |              |  |
//!    |  3--------------|--2
//!    | /               | /
//!    |/                |/
//!    0-----------------1
//! ```
//! Corners are numbered around the bottom face, then around the top face.
use glam::Vec3;

pub use glam;

mod error;
pub use error::*;

pub mod cube;
pub use cube::{ EdgeIndex, VertexIndex, EDGE_VERTICES };

mod codec;
pub use codec::*;

pub mod rotation;
pub use rotation::{ Axis, EdgePermutation, RotationGroup, VertexPermutation };

mod entry;
pub use entry::*;

pub mod orbit;

pub mod table;
pub use table::{ BaseCase, BaseTable, Disambiguation, GlobalTable, TableBuilder, TableParams };

pub(crate) mod utils;

pub const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::ZERO,
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::ONE,
    Vec3::new(0.0, 1.0, 1.0),
];

#[test]
fn cube_corners_are_unit_cube() {
    for (i, corner) in CUBE_CORNERS.iter().enumerate() {
        assert!(corner.cmpge(Vec3::ZERO).all() && corner.cmple(Vec3::ONE).all(), "corner {i} outside the unit cube");
        for other in &CUBE_CORNERS[i + 1..] {
            assert_ne!(corner, other);
        }
    }
}
