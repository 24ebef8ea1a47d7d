use arrayvec::ArrayVec;
use crate::{ cube::NUM_EDGES, EdgeAssignment, EdgeIndex, Mismatch };

/// Pairs of (incoming, existing) local vertex numbers that make two
/// assignments agree. Built one edge at a time and kept one-to-one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexRenaming {
    pairs: ArrayVec<(u8, u8), NUM_EDGES>,
}

impl VertexRenaming {
    /// The existing vertex an incoming vertex was renamed to.
    pub fn get(&self, incoming: u8) -> Option<u8> {
        self.pairs.iter()
            .find(|(from, _)| *from == incoming)
            .map(|(_, to)| *to)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.pairs.iter().copied()
    }

    fn pair(&mut self, incoming: u8, existing: u8) -> Result<(), Mismatch> {
        if let Some(previously) = self.get(incoming) {
            if previously != existing {
                return Err(Mismatch::Renaming { incoming, existing, previously });
            }
            return Ok(());
        }
        if let Some(&(claimed_by, _)) = self.pairs.iter().find(|(_, to)| *to == existing) {
            return Err(Mismatch::Collision { incoming, existing, claimed_by });
        }
        // At most one new pair per edge, so this never overflows
        self.pairs.push((incoming, existing));
        Ok(())
    }
}

/// The first edge at which two assignments cannot be made to agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disagreement {
    pub edge: EdgeIndex,
    pub mismatch: Mismatch,
}

/// Finds the renaming that turns `incoming` into `existing`, edge by edge.
///
/// Empty edges must line up with empty edges, and the renaming must stay
/// one-to-one across all edges.
pub fn reconcile(existing: &EdgeAssignment, incoming: &EdgeAssignment) -> Result<VertexRenaming, Disagreement> {
    let mut renaming = VertexRenaming::default();
    for (edge, (&old, &new)) in existing.slots().iter().zip(incoming.slots()).enumerate() {
        let result = match (old, new) {
            (None, None) => Ok(()),
            (Some(old), Some(new)) => renaming.pair(new, old),
            _ => Err(Mismatch::Occupancy { existing: old, incoming: new }),
        };
        result.map_err(|mismatch| Disagreement {
            edge: edge as EdgeIndex,
            mismatch,
        })?;
    }
    Ok(renaming)
}

#[test]
fn reconcile_identical() {
    let assignment = EdgeAssignment::from_sheets(&[&[5, 8, 9]]).unwrap();
    let renaming = reconcile(&assignment, &assignment).unwrap();
    assert_eq!(renaming.iter().collect::<Vec<_>>(), vec![(0, 0)]);
}

#[test]
fn reconcile_swapped_labels() {
    let existing = EdgeAssignment::from_sheets(&[&[0, 1, 5], &[7, 10, 11]]).unwrap();
    let incoming = EdgeAssignment::from_sheets(&[&[7, 10, 11], &[0, 1, 5]]).unwrap();
    let renaming = reconcile(&existing, &incoming).unwrap();
    assert_eq!(renaming.get(1), Some(0));
    assert_eq!(renaming.get(0), Some(1));
    assert_eq!(renaming.len(), 2);
}

#[test]
fn reconcile_occupancy_mismatch() {
    let existing = EdgeAssignment::from_sheets(&[&[5, 8, 9]]).unwrap();
    let incoming = EdgeAssignment::from_sheets(&[&[0, 5, 8, 9]]).unwrap();
    assert_eq!(
        reconcile(&existing, &incoming),
        Err(Disagreement {
            edge: 0,
            mismatch: Mismatch::Occupancy { existing: None, incoming: Some(0) },
        })
    );
}

#[test]
fn reconcile_split_sheet() {
    // One sheet on one side, two on the other
    let existing = EdgeAssignment::from_sheets(&[&[4, 6, 8, 9, 10, 11]]).unwrap();
    let incoming = EdgeAssignment::from_sheets(&[&[6, 9, 10], &[4, 8, 11]]).unwrap();
    assert_eq!(
        reconcile(&existing, &incoming),
        Err(Disagreement {
            edge: 6,
            mismatch: Mismatch::Collision { incoming: 0, existing: 0, claimed_by: 1 },
        })
    );
    // and the other way round
    assert_eq!(
        reconcile(&incoming, &existing),
        Err(Disagreement {
            edge: 6,
            mismatch: Mismatch::Renaming { incoming: 0, existing: 0, previously: 1 },
        })
    );
}
