//! Quarter-turn generators of the cube's rotation group and the
//! permutations they induce on vertices and edges.

mod group;
pub use group::*;

use crate::{
    cube::{ edge_for_pair, EDGE_VERTICES, NUM_EDGES, NUM_VERTICES },
    EdgeIndex, TableError, TableResult, VertexIndex, CUBE_CORNERS,
};
use glam::{ Quat, Vec3 };
use std::f32::consts::FRAC_PI_2;

/// A rigid rotation of the cube, as the image of each corner.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexPermutation([VertexIndex; NUM_VERTICES]);

impl Default for VertexPermutation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl VertexPermutation {
    pub const IDENTITY: Self = Self([0, 1, 2, 3, 4, 5, 6, 7]);

    pub const fn from_images(images: [VertexIndex; NUM_VERTICES]) -> Self {
        Self(images)
    }

    #[inline]
    pub fn images(&self) -> &[VertexIndex; NUM_VERTICES] {
        &self.0
    }

    /// Where `vertex` ends up.
    #[inline]
    pub fn apply(&self, vertex: VertexIndex) -> VertexIndex {
        self.0[vertex as usize]
    }

    /// `self` followed by `next`.
    pub fn then(&self, next: &Self) -> Self {
        Self(self.0.map(|image| next.apply(image)))
    }

    /// `self` applied `times` times in a row.
    pub fn power(&self, times: usize) -> Self {
        (0..times).fold(Self::IDENTITY, |acc, _| acc.then(self))
    }

    pub fn inverse(&self) -> Self {
        let mut inverse = [0; NUM_VERTICES];
        for (vertex, &image) in self.0.iter().enumerate() {
            inverse[image as usize] = vertex as VertexIndex;
        }
        Self(inverse)
    }

    pub fn is_bijection(&self) -> bool {
        let mut seen = 0u8;
        for &image in &self.0 {
            if image as usize >= NUM_VERTICES || seen & (1 << image) != 0 {
                return false;
            }
            seen |= 1 << image;
        }
        true
    }

    /// Smallest `n > 0` with `self^n == identity`, if any up to 24.
    pub fn order(&self) -> Option<usize> {
        (1..=RotationGroup::ORDER).find(|&n| self.power(n) == Self::IDENTITY)
    }
}

/// The permutation of the 12 edges carried along by a vertex permutation.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgePermutation([EdgeIndex; NUM_EDGES]);

impl EdgePermutation {
    pub const IDENTITY: Self = Self([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);

    #[inline]
    pub fn apply(&self, edge: EdgeIndex) -> EdgeIndex {
        self.0[edge as usize]
    }

    #[inline]
    pub fn images(&self) -> &[EdgeIndex; NUM_EDGES] {
        &self.0
    }

    /// Derives the edge permutation of a vertex permutation by moving each
    /// edge's endpoints and looking the moved pair back up.
    pub fn for_vertices(vertices: &VertexPermutation) -> TableResult<Self> {
        let mut edges = [0; NUM_EDGES];
        let mut seen = 0u16;
        for (edge, [a, b]) in EDGE_VERTICES.into_iter().enumerate() {
            let pair = [vertices.apply(a), vertices.apply(b)];
            let image = edge_for_pair(pair[0], pair[1])
                .filter(|&image| seen & (1 << image) == 0)
                .ok_or(TableError::MalformedGenerator {
                    edge: edge as EdgeIndex,
                    pair,
                })?;
            seen |= 1 << image;
            edges[edge] = image;
        }
        Ok(Self(edges))
    }
}

/// A principal axis of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// A +90° turn about this axis through the cube's centre.
    pub fn generator(self) -> &'static VertexPermutation {
        match self {
            Axis::X => &ROTATE_X,
            Axis::Y => &ROTATE_Y,
            Axis::Z => &ROTATE_Z,
        }
    }

    pub fn direction(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    pub fn quarter_turn(self) -> Quat {
        Quat::from_axis_angle(self.direction(), FRAC_PI_2)
    }
}

// Bottom face 0 1 2 3, top face 4 5 6 7; see `crate::CUBE_CORNERS`.
const ROTATE_X: VertexPermutation = VertexPermutation([3, 2, 6, 7, 0, 1, 5, 4]);
const ROTATE_Y: VertexPermutation = VertexPermutation([4, 0, 3, 7, 5, 1, 2, 6]);
const ROTATE_Z: VertexPermutation = VertexPermutation([1, 2, 3, 0, 5, 6, 7, 4]);

/// Finds the corner a geometric rotation about the cube centre sends each
/// corner to.
fn corners_under(rotation: Quat) -> Option<[VertexIndex; NUM_VERTICES]> {
    let centre = Vec3::splat(0.5);
    let mut images = [0; NUM_VERTICES];
    for (image, corner) in images.iter_mut().zip(CUBE_CORNERS) {
        let moved = rotation * (corner - centre) + centre;
        *image = CUBE_CORNERS.iter()
            .position(|other| other.abs_diff_eq(moved, 1e-4))? as VertexIndex;
    }
    Some(images)
}

/// Checks the generator constants against the cube geometry.
///
/// Each generator must have order 4, agree with a real quarter turn of
/// `CUBE_CORNERS`, and carry edges onto edges.
pub fn validate_generators() -> TableResult<()> {
    for axis in Axis::ALL {
        validate_generator(axis, axis.generator())?;
    }
    Ok(())
}

fn validate_generator(axis: Axis, generator: &VertexPermutation) -> TableResult<()> {
    let order = generator.order();
    if order != Some(4) {
        return Err(TableError::GeneratorOrder { axis, order });
    }
    let edges = EdgePermutation::for_vertices(generator)?;

    let geometric = corners_under(axis.quarter_turn());
    let agrees = |vertex: VertexIndex| {
        geometric.map_or(false, |images| images[vertex as usize] == generator.apply(vertex))
    };

    if let Some(edge) = EDGE_VERTICES.iter().position(|&[a, b]| !agrees(a) || !agrees(b)) {
        let [a, b] = EDGE_VERTICES[edge];
        return Err(TableError::MalformedGenerator {
            edge: edge as EdgeIndex,
            pair: [generator.apply(a), generator.apply(b)],
        });
    }
    tracing::trace!(?axis, edges = ?edges.images(), "generator ok");
    Ok(())
}

#[test]
fn generators_have_order_four() {
    for axis in Axis::ALL {
        let generator = axis.generator();
        assert!(generator.is_bijection());
        assert_eq!(generator.order(), Some(4), "{axis:?}");
        assert_eq!(generator.power(4), VertexPermutation::IDENTITY);
    }
}

#[test]
fn generators_match_geometry() {
    validate_generators().unwrap();
    for axis in Axis::ALL {
        assert_eq!(corners_under(axis.quarter_turn()), Some(*axis.generator().images()));
    }
    // Not a symmetry of the cube
    assert_eq!(corners_under(Quat::from_rotation_z(0.3)), None);
}

#[test]
fn wrong_generator_is_rejected() {
    // A half turn about Z has order 2
    let half = Axis::Z.generator().power(2);
    assert_eq!(
        validate_generator(Axis::Z, &half),
        Err(TableError::GeneratorOrder { axis: Axis::Z, order: Some(2) })
    );
    // A quarter turn about the wrong axis
    assert!(matches!(
        validate_generator(Axis::Z, Axis::X.generator()),
        Err(TableError::MalformedGenerator { .. })
    ));
    let collapsed = VertexPermutation::from_images([0, 0, 2, 3, 4, 5, 6, 7]);
    assert_eq!(
        validate_generator(Axis::X, &collapsed),
        Err(TableError::GeneratorOrder { axis: Axis::X, order: None })
    );
}

#[test]
fn induced_edge_permutation() {
    // Quarter turn about Z walks the bottom ring 0 -> 1 -> 2 -> 3
    let edges = EdgePermutation::for_vertices(Axis::Z.generator()).unwrap();
    assert_eq!(edges.images(), &[1, 2, 3, 0, 5, 6, 7, 4, 9, 10, 11, 8]);
    assert_eq!(EdgePermutation::for_vertices(&VertexPermutation::IDENTITY).unwrap(), EdgePermutation::IDENTITY);
}

#[test]
fn malformed_vertex_permutation_is_rejected() {
    // Swapping two diagonal corners is not a rigid motion
    let broken = VertexPermutation::from_images([2, 1, 0, 3, 4, 5, 6, 7]);
    assert!(matches!(
        EdgePermutation::for_vertices(&broken),
        Err(TableError::MalformedGenerator { edge: 4, pair: [2, 4] })
    ));

    // Not even a bijection
    let collapsed = VertexPermutation::from_images([0, 0, 2, 3, 4, 5, 6, 7]);
    assert!(!collapsed.is_bijection());
    assert!(EdgePermutation::for_vertices(&collapsed).is_err());
}

#[test]
fn permutation_algebra() {
    let x = Axis::X.generator();
    let y = Axis::Y.generator();
    assert_eq!(x.then(&x.inverse()), VertexPermutation::IDENTITY);
    assert_eq!(x.power(3), x.inverse());
    assert_ne!(x.then(y), y.then(x));
    assert_eq!(x.then(y).apply(0), y.apply(x.apply(0)));
}
