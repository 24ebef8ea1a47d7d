//! Expands one representative case into every rotated copy of itself.

use ahash::AHashMap;
use crate::{
    reconcile, ConfigIndex, EdgeAssignment, ReconciliationFailure, RotationGroup, TableEntry,
};
use tracing::{ debug, warn };

/// Every configuration one case reaches under the rotation group.
#[derive(Debug, Clone)]
pub struct Orbit {
    pub case: String,
    pub rows: AHashMap<ConfigIndex, EdgeAssignment>,
}

impl Orbit {
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, config: ConfigIndex) -> Option<&EdgeAssignment> {
        self.rows.get(&config)
    }

    /// Rows in ascending configuration order.
    pub fn sorted(&self) -> Vec<(ConfigIndex, EdgeAssignment)> {
        let mut rows: Vec<_> = self.rows.iter().map(|(config, assignment)| (*config, *assignment)).collect();
        rows.sort_unstable_by_key(|(config, _)| *config);
        rows
    }
}

/// Applies all 24 rotations to `(config, assignment)` and merges the results.
///
/// Rotations that land on a configuration already reached must agree with
/// it up to renaming; that is expected for symmetric cases. Every
/// disagreement is collected, not only the first.
pub fn expand(
    case: &str,
    config: ConfigIndex,
    assignment: EdgeAssignment,
    group: &RotationGroup,
) -> Result<Orbit, Vec<ReconciliationFailure>> {
    let base = TableEntry::new(config, assignment);
    let mut rows: AHashMap<ConfigIndex, EdgeAssignment> = AHashMap::with_capacity(RotationGroup::ORDER);
    let mut failures = Vec::new();

    for (index, rotation) in group.iter().enumerate() {
        let image = base.moved(&rotation.vertices, &rotation.edges);
        match rows.get(&image.config) {
            None => {
                rows.insert(image.config, image.assignment);
            }
            Some(existing) => {
                if let Err(disagreement) = reconcile(existing, &image.assignment) {
                    let failure = ReconciliationFailure {
                        config: image.config,
                        edge: disagreement.edge,
                        existing_case: case.to_owned(),
                        incoming_case: case.to_owned(),
                        rotation: Some(index),
                        mismatch: disagreement.mismatch,
                    };
                    warn!(%failure, "case contradicts its own rotation");
                    failures.push(failure);
                }
            }
        }
    }

    if !failures.is_empty() {
        return Err(failures);
    }

    debug!(case, base = %config, orbit = rows.len(), "expanded case");
    Ok(Orbit {
        case: case.to_owned(),
        rows,
    })
}

#[cfg(test)]
fn group() -> RotationGroup {
    RotationGroup::new().unwrap()
}

#[test]
fn empty_cube_is_a_fixed_point() {
    let orbit = expand("0", ConfigIndex::EMPTY, EdgeAssignment::empty(), &group()).unwrap();
    assert_eq!(orbit.len(), 1);
    assert_eq!(orbit.get(ConfigIndex::EMPTY), Some(&EdgeAssignment::empty()));

    let orbit = expand("8", ConfigIndex::FULL, EdgeAssignment::empty(), &group()).unwrap();
    assert_eq!(orbit.sorted(), vec![(ConfigIndex::FULL, EdgeAssignment::empty())]);
}

#[test]
fn single_corner_reaches_all_corners() {
    let assignment = EdgeAssignment::from_sheets(&[&[5, 8, 9]]).unwrap();
    let orbit = expand("1", ConfigIndex::from_vertices(&[5]).unwrap(), assignment, &group()).unwrap();
    assert_eq!(orbit.len(), 8);
    for (config, assignment) in orbit.sorted() {
        assert_eq!(config.inside_count(), 1);
        assert_eq!(assignment.vertex_count(), 1);
        assert_eq!(assignment.edges_of(0).count(), 3);
    }
    // Corner 0 owns edges 0, 3 and 4
    assert_eq!(
        orbit.get(ConfigIndex::from_vertices(&[0]).unwrap()),
        Some(&EdgeAssignment::from_sheets(&[&[0, 3, 4]]).unwrap())
    );
}

#[test]
fn orbit_sizes_follow_symmetry() {
    let cases: [(&[u8], &[&[u8]], usize); 4] = [
        // two adjacent corners: 12 cube edges
        (&[6, 7], &[&[6, 7, 9, 11]], 12),
        // two opposite corners: 4 body diagonals
        (&[1, 7], &[&[0, 1, 5], &[7, 10, 11]], 4),
        // a full face: 6 faces
        (&[4, 5, 6, 7], &[&[4, 5, 6, 7]], 6),
        // two tetrahedra: 2 ways
        (&[1, 3, 4, 6], &[&[0, 3, 4], &[1, 2, 6], &[5, 8, 9], &[7, 10, 11]], 2),
    ];
    for (vertices, sheets, size) in cases {
        let config = ConfigIndex::from_vertices(vertices).unwrap();
        let assignment = EdgeAssignment::from_sheets(sheets).unwrap();
        let orbit = expand("case", config, assignment, &group()).unwrap();
        assert_eq!(orbit.len(), size, "{vertices:?}");
    }
}

#[test]
fn inconsistent_case_reports_every_conflict() {
    // Corner 5 with a stray vertex on edge 0: the turns about the body
    // diagonal through corner 5 move edge 0 to empty edges
    let assignment = EdgeAssignment::from_sheets(&[&[0, 5, 8, 9]]).unwrap();
    let failures = expand("1", ConfigIndex::from_vertices(&[5]).unwrap(), assignment, &group()).unwrap_err();
    assert!(failures.len() >= 2);
    for failure in &failures {
        assert_eq!(failure.existing_case, "1");
        assert_eq!(failure.incoming_case, "1");
        assert!(failure.rotation.is_some());
        assert!(matches!(failure.mismatch, crate::Mismatch::Occupancy { .. }));
    }
}
