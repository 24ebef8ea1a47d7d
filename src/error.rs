//! Error types for table construction.

use crate::{ Axis, ConfigIndex, EdgeIndex, VertexIndex };
use thiserror::Error;

/// Errors that can occur while building or using a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A configuration index outside `0..256`.
    #[error("config index {0} is outside 0..256")]
    InvalidIndex(usize),

    /// A vertex permutation does not map the cube's edges onto its edges.
    /// Only the static rotation constants can trigger this.
    #[error("malformed generator: edge {edge} maps to vertex pair {pair:?}, which is not a cube edge")]
    MalformedGenerator {
        edge: EdgeIndex,
        pair: [VertexIndex; 2],
    },

    /// A generator constant does not return home after exactly four turns.
    #[error("generator for {axis:?} has order {order:?}, not 4")]
    GeneratorOrder {
        axis: Axis,
        order: Option<usize>,
    },

    /// The coset enumeration produced the same rotation twice.
    #[error("rotation from coset row {coset}, turn {turn} repeats an earlier group element")]
    DuplicateRotation {
        coset: usize,
        turn: usize,
    },

    /// A corner outside `0..8` in a base case.
    #[error("corner {0} is outside 0..8")]
    InvalidCorner(VertexIndex),

    /// An edge outside `0..12` in a base case.
    #[error("edge {0} is outside 0..12")]
    InvalidEdge(EdgeIndex),

    /// A local vertex number equal to the raw empty-edge marker.
    #[error("local vertex {0:#x} is reserved for empty edges")]
    ReservedVertex(u8),

    /// Two derivations of the same configuration disagree.
    #[error("{} reconciliation failure(s) while merging orbits", .0.len())]
    Reconciliation(Vec<ReconciliationFailure>),

    /// Configurations no base case reaches.
    #[error("table does not cover {} configuration(s): {missing:?}", .missing.len())]
    IncompleteCoverage {
        missing: Vec<ConfigIndex>,
    },
}

/// Result type for table operations.
pub type TableResult<T> = std::result::Result<T, TableError>;

/// How two edge assignments for one configuration disagree at a single edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// One side has a vertex on the edge and the other has none.
    Occupancy {
        existing: Option<u8>,
        incoming: Option<u8>,
    },
    /// The incoming vertex was already renamed to a different existing vertex.
    Renaming {
        incoming: u8,
        existing: u8,
        previously: u8,
    },
    /// The existing vertex was already taken by a different incoming vertex.
    Collision {
        incoming: u8,
        existing: u8,
        claimed_by: u8,
    },
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mismatch::Occupancy { existing, incoming } => {
                write!(f, "existing slot {existing:?} vs incoming slot {incoming:?}")
            }
            Mismatch::Renaming { incoming, existing, previously } => {
                write!(f, "incoming vertex {incoming} maps to {previously} elsewhere, not {existing}")
            }
            Mismatch::Collision { incoming, existing, claimed_by } => {
                write!(f, "existing vertex {existing} already taken by incoming vertex {claimed_by}, not {incoming}")
            }
        }
    }
}

/// A conflict found while merging two derivations of one configuration.
///
/// `existing_case` produced the row already in the table, `incoming_case`
/// produced the row being merged. They are the same case when the conflict
/// comes from the case's own orbit, in which case `rotation` names the group
/// element that produced the incoming row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("config {config} edge {edge}: case {incoming_case} disagrees with case {existing_case} ({mismatch})")]
pub struct ReconciliationFailure {
    pub config: ConfigIndex,
    pub edge: EdgeIndex,
    pub existing_case: String,
    pub incoming_case: String,
    pub rotation: Option<usize>,
    pub mismatch: Mismatch,
}

#[test]
fn error_display() {
    let err = TableError::InvalidIndex(300);
    assert_eq!(format!("{err}"), "config index 300 is outside 0..256");
    assert_eq!(TableError::InvalidEdge(12).to_string(), "edge 12 is outside 0..12");
    assert_eq!(TableError::ReservedVertex(0xff).to_string(), "local vertex 0xff is reserved for empty edges");
    assert_eq!(
        TableError::DuplicateRotation { coset: 1, turn: 0 }.to_string(),
        "rotation from coset row 1, turn 0 repeats an earlier group element"
    );

    let err = TableError::IncompleteCoverage { missing: vec![ConfigIndex::EMPTY, ConfigIndex::FULL] };
    assert!(format!("{err}").starts_with("table does not cover 2 configuration(s)"));

    let failure = ReconciliationFailure {
        config: ConfigIndex::FULL,
        edge: 3,
        existing_case: "4A".into(),
        incoming_case: "4B".into(),
        rotation: None,
        mismatch: Mismatch::Occupancy { existing: None, incoming: Some(0) },
    };
    let text = format!("{failure}");
    assert!(text.contains("4A") && text.contains("4B") && text.contains("edge 3"));
    assert_eq!(format!("{}", TableError::Reconciliation(vec![failure])), "1 reconciliation failure(s) while merging orbits");
}
