use arrayvec::ArrayVec;
use super::{ Axis, EdgePermutation, VertexPermutation };
use crate::{ TableError, TableResult };

/// One proper rotation of the cube with its induced edge permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub vertices: VertexPermutation,
    pub edges: EdgePermutation,
}

impl Rotation {
    pub const IDENTITY: Self = Self {
        vertices: VertexPermutation::IDENTITY,
        edges: EdgePermutation::IDENTITY,
    };

    pub fn new(vertices: VertexPermutation) -> TableResult<Self> {
        let edges = EdgePermutation::for_vertices(&vertices)?;
        Ok(Self { vertices, edges })
    }
}

/// The 24 proper rotations of the cube.
///
/// ```text
/// Coset representative    Sweep
///   identity                Z^0..3
///   X                       Y^0..3
///   X^2                     Z^0..3
///   X^3                     Y^0..3
///   Y                       X^0..3
///   Y^3                     X^0..3
/// ```
/// Each representative carries the bottom face to a different face
/// (-Z, +Y, +Z, -Y, -X, +X), and the sweep spins the cube about the axis
/// through that face, so every rotation shows up exactly once.
#[derive(Debug, Clone)]
pub struct RotationGroup {
    elements: ArrayVec<Rotation, GROUP_ORDER>,
}

const GROUP_ORDER: usize = 24;

impl RotationGroup {
    pub const ORDER: usize = GROUP_ORDER;

    const COSETS: [((usize, Axis), Axis); 6] = [
        ((0, Axis::X), Axis::Z),
        ((1, Axis::X), Axis::Y),
        ((2, Axis::X), Axis::Z),
        ((3, Axis::X), Axis::Y),
        ((1, Axis::Y), Axis::X),
        ((3, Axis::Y), Axis::X),
    ];

    pub fn new() -> TableResult<Self> {
        Self::from_cosets(&Self::COSETS)
    }

    fn from_cosets(cosets: &[((usize, Axis), Axis)]) -> TableResult<Self> {
        debug_assert!(cosets.len() * 4 <= GROUP_ORDER);
        let mut elements = ArrayVec::new();
        for (coset, &((times, axis), sweep)) in cosets.iter().enumerate() {
            let representative = axis.generator().power(times);
            for turn in 0..4 {
                let vertices = representative.then(&sweep.generator().power(turn));
                let rotation = Rotation::new(vertices)?;
                if elements.iter().any(|other: &Rotation| other.vertices == vertices) {
                    return Err(TableError::DuplicateRotation { coset, turn });
                }
                elements.push(rotation);
            }
        }
        Ok(Self { elements })
    }

    #[inline]
    pub fn elements(&self) -> &[Rotation] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rotation> + '_ {
        self.elements.iter()
    }

    pub fn contains(&self, vertices: &VertexPermutation) -> bool {
        self.elements.iter().any(|rotation| rotation.vertices == *vertices)
    }
}

#[test]
fn group_has_24_distinct_rotations() {
    let group = RotationGroup::new().unwrap();
    assert_eq!(group.elements().len(), RotationGroup::ORDER);
    assert_eq!(group.elements()[0], Rotation::IDENTITY);
    for (i, a) in group.iter().enumerate() {
        assert!(a.vertices.is_bijection());
        for b in &group.elements()[i + 1..] {
            assert_ne!(a.vertices, b.vertices);
        }
    }
}

#[test]
fn repeated_coset_is_reported() {
    // Two cosets sweeping about the same axis from the identity
    let cosets = [((0, Axis::X), Axis::Z), ((0, Axis::Y), Axis::Z)];
    assert_eq!(
        RotationGroup::from_cosets(&cosets).unwrap_err(),
        TableError::DuplicateRotation { coset: 1, turn: 0 }
    );
}

#[test]
fn group_is_closed() {
    let group = RotationGroup::new().unwrap();
    for a in group.iter() {
        assert!(group.contains(&a.vertices.inverse()));
        for b in group.iter() {
            assert!(group.contains(&a.vertices.then(&b.vertices)));
        }
    }
}

#[test]
fn every_rotation_divides_group_order() {
    let group = RotationGroup::new().unwrap();
    let mut by_order = [0usize; 5];
    for rotation in group.iter() {
        let order = rotation.vertices.order().unwrap();
        assert_eq!(RotationGroup::ORDER % order, 0);
        assert_eq!(rotation.vertices.power(RotationGroup::ORDER), VertexPermutation::IDENTITY);
        by_order[order] += 1;
    }
    // identity, 9 half turns, 8 third turns about diagonals, 6 quarter turns
    assert_eq!(by_order, [0, 1, 9, 8, 6]);
}
