mod reconcile;
pub use reconcile::*;

use arrayvec::ArrayVec;
use crate::{
    cube::{ NUM_EDGES, NUM_VERTICES },
    encode, ConfigIndex, EdgeIndex, EdgePermutation, TableError, TableResult, VertexPermutation,
};

/// Raw marker for an edge without a dual vertex.
pub const NO_VERTEX: u8 = 0xff;

/// Which local dual vertex, if any, each of the 12 edges belongs to.
///
/// Local vertex numbers only mean something within one assignment: two
/// assignments that differ by a consistent renaming describe the same
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeAssignment {
    slots: [Option<u8>; NUM_EDGES],
}

impl Default for EdgeAssignment {
    fn default() -> Self {
        Self::empty()
    }
}

impl EdgeAssignment {
    /// No edge carries a vertex.
    pub const fn empty() -> Self {
        Self { slots: [None; NUM_EDGES] }
    }

    /// Fails if any slot holds `NO_VERTEX`, which `to_raw` could not tell
    /// apart from an empty edge.
    pub fn from_slots(slots: [Option<u8>; NUM_EDGES]) -> TableResult<Self> {
        match slots.iter().flatten().find(|&&vertex| vertex == NO_VERTEX) {
            Some(&vertex) => Err(TableError::ReservedVertex(vertex)),
            None => Ok(Self { slots }),
        }
    }

    /// Reads a row where `NO_VERTEX` marks an empty edge.
    pub fn from_raw(raw: [u8; NUM_EDGES]) -> Self {
        Self {
            slots: raw.map(|slot| (slot != NO_VERTEX).then_some(slot)),
        }
    }

    /// One local vertex per sheet, numbered in order, each on the listed
    /// edges.
    pub fn from_sheets(sheets: &[&[EdgeIndex]]) -> TableResult<Self> {
        sheets.iter()
            .enumerate()
            .try_fold(Self::empty(), |assignment, (vertex, edges)| {
                let vertex = u8::try_from(vertex).map_err(|_| TableError::ReservedVertex(NO_VERTEX))?;
                assignment.with_vertex(edges, vertex)
            })
    }

    /// Assigns `vertex` to every edge in `edges`.
    pub fn with_vertex(mut self, edges: &[EdgeIndex], vertex: u8) -> TableResult<Self> {
        if vertex == NO_VERTEX {
            return Err(TableError::ReservedVertex(vertex));
        }
        for &edge in edges {
            *self.slots.get_mut(edge as usize).ok_or(TableError::InvalidEdge(edge))? = Some(vertex);
        }
        Ok(self)
    }

    #[inline]
    pub fn get(&self, edge: EdgeIndex) -> Option<u8> {
        self.slots[edge as usize]
    }

    #[inline]
    pub fn slots(&self) -> &[Option<u8>; NUM_EDGES] {
        &self.slots
    }

    pub fn to_raw(&self) -> [u8; NUM_EDGES] {
        self.slots.map(|slot| slot.unwrap_or(NO_VERTEX))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Edges carrying `vertex`.
    pub fn edges_of(&self, vertex: u8) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.slots.iter()
            .enumerate()
            .filter(move |(_, slot)| **slot == Some(vertex))
            .map(|(edge, _)| edge as EdgeIndex)
    }

    /// Distinct local vertices in order of first appearance.
    pub fn vertices(&self) -> ArrayVec<u8, NUM_EDGES> {
        let mut vertices = ArrayVec::new();
        for vertex in self.slots.iter().flatten() {
            if !vertices.contains(vertex) {
                vertices.push(*vertex);
            }
        }
        vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Renumbers local vertices 0, 1, 2... by first appearance along the edges.
    pub fn canonical(&self) -> Self {
        let order = self.vertices();
        Self {
            slots: self.slots.map(|slot| slot.map(|vertex| {
                order.iter().position(|&v| v == vertex).unwrap_or_default() as u8
            })),
        }
    }

    /// Whether a consistent renaming of local vertices turns `other` into `self`.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        reconcile(self, other).is_ok()
    }

    /// Carries each slot along with its edge.
    pub fn permute(&self, edges: &EdgePermutation) -> Self {
        let mut slots = [None; NUM_EDGES];
        for (edge, slot) in self.slots.iter().enumerate() {
            slots[edges.apply(edge as EdgeIndex) as usize] = *slot;
        }
        Self { slots }
    }
}

/// A configuration together with its edge assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableEntry {
    pub config: ConfigIndex,
    pub assignment: EdgeAssignment,
}

impl TableEntry {
    pub const fn new(config: ConfigIndex, assignment: EdgeAssignment) -> Self {
        Self { config, assignment }
    }

    /// The entry seen after moving the cube by `vertices`, with edges
    /// relabelled through `edges`. Both must describe the same rotation.
    pub fn moved(&self, vertices: &VertexPermutation, edges: &EdgePermutation) -> Self {
        let flags = self.config.flags();
        let mut moved = [false; NUM_VERTICES];
        for (vertex, inside) in flags.into_iter().enumerate() {
            moved[vertices.apply(vertex as u8) as usize] = inside;
        }
        Self {
            config: encode(moved),
            assignment: self.assignment.permute(edges),
        }
    }
}

/// Applies `vertices` to an entry `times` times.
///
/// Zero times hands the entry back untouched. Fails only if `vertices` is
/// not a rigid motion of the cube.
pub fn rotate(
    config: ConfigIndex,
    assignment: EdgeAssignment,
    vertices: &VertexPermutation,
    times: usize,
) -> TableResult<(ConfigIndex, EdgeAssignment)> {
    if times == 0 {
        return Ok((config, assignment));
    }

    let mut entry = TableEntry::new(config, assignment);
    let edges = EdgePermutation::for_vertices(vertices)?;
    for _ in 0..times {
        entry = entry.moved(vertices, &edges);
    }
    Ok((entry.config, entry.assignment))
}

#[test]
fn rotate_single_corner() {
    use crate::Axis;

    // Corner 5 with its three edges
    let config = ConfigIndex::from_vertices(&[5]).unwrap();
    let assignment = EdgeAssignment::from_sheets(&[&[5, 8, 9]]).unwrap();

    let (config_x, assignment_x) = rotate(config, assignment, Axis::X.generator(), 1).unwrap();
    assert_eq!(config_x, ConfigIndex::from_vertices(&[1]).unwrap());
    assert_eq!(assignment_x, EdgeAssignment::from_sheets(&[&[0, 1, 5]]).unwrap());

    let (config_z, assignment_z) = rotate(config, assignment, Axis::Z.generator(), 1).unwrap();
    assert_eq!(config_z, ConfigIndex::from_vertices(&[6]).unwrap());
    assert_eq!(assignment_z, EdgeAssignment::from_sheets(&[&[6, 9, 10]]).unwrap());
}

#[test]
fn rotate_zero_times_is_identity() {
    use crate::Axis;

    let config = ConfigIndex::from_vertices(&[1, 7]).unwrap();
    let assignment = EdgeAssignment::from_sheets(&[&[0, 1, 5], &[7, 10, 11]]).unwrap();
    assert_eq!(rotate(config, assignment, Axis::Y.generator(), 0).unwrap(), (config, assignment));
}

#[test]
fn four_quarter_turns_return_home() {
    use crate::Axis;

    let assignment = EdgeAssignment::from_sheets(&[&[2, 3, 7], &[4, 5, 6, 10, 11]]).unwrap();
    for axis in Axis::ALL {
        for config in ConfigIndex::all() {
            let (rotated, moved) = rotate(config, assignment, axis.generator(), 4).unwrap();
            assert_eq!(rotated, config, "{axis:?} on {config}");
            assert_eq!(moved, assignment);
        }
        let (rotated, moved) = rotate(ConfigIndex::from_bits(0x87), assignment, axis.generator(), 2).unwrap();
        assert_ne!((rotated, moved), (ConfigIndex::from_bits(0x87), assignment), "{axis:?}");
    }
}

#[test]
fn rotation_preserves_inside_count() {
    use crate::Axis;

    for config in ConfigIndex::all() {
        for axis in Axis::ALL {
            let (rotated, _) = rotate(config, EdgeAssignment::empty(), axis.generator(), 1).unwrap();
            assert_eq!(rotated.inside_count(), config.inside_count());
        }
    }
}

#[test]
fn raw_rows() {
    let assignment = EdgeAssignment::empty()
        .with_vertex(&[0, 3, 4], 1)
        .and_then(|assignment| assignment.with_vertex(&[8], 0))
        .unwrap();
    let raw = assignment.to_raw();
    assert_eq!(raw, [1, 0xff, 0xff, 1, 1, 0xff, 0xff, 0xff, 0, 0xff, 0xff, 0xff]);
    assert_eq!(EdgeAssignment::from_raw(raw), assignment);
    assert_eq!(EdgeAssignment::from_slots(*assignment.slots()), Ok(assignment));
    assert_eq!(assignment.vertex_count(), 2);
    assert_eq!(assignment.edges_of(1).collect::<Vec<_>>(), vec![0, 3, 4]);
    assert!(EdgeAssignment::empty().is_empty());
}

#[test]
fn bad_assignments_are_rejected() {
    assert_eq!(EdgeAssignment::empty().with_vertex(&[3, 12], 0), Err(TableError::InvalidEdge(12)));
    assert_eq!(EdgeAssignment::empty().with_vertex(&[3], NO_VERTEX), Err(TableError::ReservedVertex(NO_VERTEX)));
    assert_eq!(EdgeAssignment::from_sheets(&[&[0, 3], &[200]]), Err(TableError::InvalidEdge(200)));

    // A stored 0xff would come back from the raw row as an empty edge
    let mut slots = [None; NUM_EDGES];
    slots[2] = Some(NO_VERTEX);
    assert_eq!(EdgeAssignment::from_slots(slots), Err(TableError::ReservedVertex(NO_VERTEX)));
}

#[test]
fn canonical_numbering() {
    let assignment = EdgeAssignment::empty()
        .with_vertex(&[4, 5], 3)
        .and_then(|assignment| assignment.with_vertex(&[1], 7))
        .unwrap();
    let canonical = assignment.canonical();
    assert_eq!(canonical, EdgeAssignment::from_sheets(&[&[1], &[4, 5]]).unwrap());
    assert!(canonical.is_equivalent(&assignment));
    assert_eq!(canonical.canonical(), canonical);
}
