//! Representative cases the full table is generated from.
//!
//! Cases are named by how many corners are inside and a letter for the
//! arrangement. Each entry lists, per local dual vertex, the edges that
//! vertex sits on.

use crate::{ ConfigIndex, EdgeAssignment, EdgeIndex, TableResult, VertexIndex };
use super::{ Disambiguation, TableParams };

/// One hand-authored table entry, tagged by its case name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseCase {
    pub case: String,
    pub config: ConfigIndex,
    pub assignment: EdgeAssignment,
}

impl BaseCase {
    pub fn new(case: impl Into<String>, config: ConfigIndex, assignment: EdgeAssignment) -> Self {
        Self {
            case: case.into(),
            config,
            assignment,
        }
    }

    /// A case given by its inside corners and, per local vertex, that
    /// vertex's edges.
    pub fn from_corners(case: impl Into<String>, inside: &[VertexIndex], sheets: &[&[EdgeIndex]]) -> TableResult<Self> {
        let config = ConfigIndex::from_vertices(inside)?;
        let assignment = EdgeAssignment::from_sheets(sheets)?;
        Ok(Self::new(case, config, assignment))
    }
}

/// The input of `TableBuilder`: a named collection of base cases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseTable {
    cases: Vec<BaseCase>,
}

impl BaseTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, case: BaseCase) {
        self.cases.push(case);
    }

    #[must_use]
    pub fn with(mut self, case: BaseCase) -> Self {
        self.push(case);
        self
    }

    /// Drops the case named `case`, if present.
    #[must_use]
    pub fn without(mut self, case: &str) -> Self {
        self.cases.retain(|base| base.case != case);
        self
    }

    pub fn get(&self, case: &str) -> Option<&BaseCase> {
        self.cases.iter().find(|base| base.case == case)
    }

    pub fn get_mut(&mut self, case: &str) -> Option<&mut BaseCase> {
        self.cases.iter_mut().find(|base| base.case == case)
    }

    pub fn cases(&self) -> &[BaseCase] {
        &self.cases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BaseCase> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// The standard set of representative cases.
    pub fn standard(params: &TableParams) -> TableResult<Self> {
        let mut table = Self::new();
        if params.seed_trivial {
            table.push(BaseCase::from_corners("0", &[], &[])?);
        }

        table.push(BaseCase::from_corners("1", &[5], &[&[5, 8, 9]])?);

        table.push(BaseCase::from_corners("2A", &[6, 7], &[&[6, 7, 9, 11]])?);
        table.push(match params.disambiguation {
            Disambiguation::Joined => BaseCase::from_corners("2B", &[4, 6], &[&[4, 6, 8, 9, 10, 11]])?,
            Disambiguation::Split => BaseCase::from_corners("2B", &[4, 6], &[&[6, 9, 10], &[4, 8, 11]])?,
        });
        table.push(BaseCase::from_corners("2C", &[1, 7], &[&[0, 1, 5], &[7, 10, 11]])?);

        table.push(BaseCase::from_corners("3A", &[4, 5, 7], &[&[4, 5, 7, 9, 10]])?);
        table.push(match params.disambiguation {
            Disambiguation::Joined => BaseCase::from_corners("3B", &[2, 4, 6], &[&[1, 2, 4, 8, 9, 10, 11]])?,
            Disambiguation::Split => BaseCase::from_corners("3B", &[2, 4, 6], &[&[1, 2, 9, 10], &[4, 8, 11]])?,
        });
        table.push(BaseCase::from_corners("3C", &[2, 5, 7], &[&[1, 2, 5, 7, 8, 11], &[6, 9, 10]])?);

        table.push(BaseCase::from_corners("4A", &[4, 5, 6, 7], &[&[4, 5, 6, 7]])?);
        table.push(BaseCase::from_corners("4B", &[2, 5, 6, 7], &[&[1, 2, 5, 7, 8, 11]])?);
        table.push(BaseCase::from_corners("4C", &[1, 3, 5, 7], &[&[0, 3, 8, 11], &[1, 2, 9, 10]])?);
        // 4D and its mirror image are not related by a rotation
        table.push(BaseCase::from_corners("4D-1", &[1, 2, 6, 7], &[&[0, 2, 5, 7, 9, 11]])?);
        table.push(BaseCase::from_corners("4D-2", &[0, 1, 2, 6], &[&[2, 3, 4, 5, 9, 10]])?);
        table.push(BaseCase::from_corners("4E", &[0, 1, 2, 7], &[&[2, 3, 7], &[4, 5, 6, 10, 11]])?);
        table.push(BaseCase::from_corners("4F", &[1, 3, 4, 6], &[&[0, 3, 4], &[1, 2, 6], &[5, 8, 9], &[7, 10, 11]])?);

        table.push(BaseCase::from_corners("5A", &[0, 1, 2, 3, 6], &[&[4, 5, 7, 9, 10]])?);
        table.push(BaseCase::from_corners("5B", &[0, 1, 3, 5, 7], &[&[1, 2, 9, 10], &[4, 8, 11]])?);
        table.push(BaseCase::from_corners("5C", &[0, 1, 3, 4, 6], &[&[1, 2, 6], &[5, 8, 9], &[7, 10, 11]])?);

        table.push(BaseCase::from_corners("6A", &[0, 1, 2, 3, 4, 5], &[&[6, 7, 9, 11]])?);
        table.push(BaseCase::from_corners("6B", &[0, 1, 2, 3, 5, 7], &[&[6, 9, 10], &[4, 8, 11]])?);
        table.push(BaseCase::from_corners("6C", &[0, 2, 3, 4, 5, 6], &[&[0, 1, 5], &[7, 10, 11]])?);

        table.push(BaseCase::from_corners("7", &[0, 1, 2, 3, 4, 6, 7], &[&[5, 8, 9]])?);

        if params.seed_trivial {
            table.push(BaseCase::from_corners("8", &[0, 1, 2, 3, 4, 5, 6, 7], &[])?);
        }
        Ok(table)
    }
}

impl<'a> IntoIterator for &'a BaseTable {
    type Item = &'a BaseCase;
    type IntoIter = std::slice::Iter<'a, BaseCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

#[test]
fn standard_table_shape() {
    let table = BaseTable::standard(&TableParams::default()).unwrap();
    assert_eq!(table.len(), 23);
    assert_eq!(table.cases()[0].config, ConfigIndex::EMPTY);
    assert_eq!(table.cases()[22].config, ConfigIndex::FULL);

    let one = table.get("1").unwrap();
    assert_eq!(one.config, ConfigIndex::from_bits(0x20));
    assert_eq!(one.assignment, EdgeAssignment::from_sheets(&[&[5, 8, 9]]).unwrap());

    // Every case has a distinct configuration
    for (i, a) in table.iter().enumerate() {
        for b in &table.cases()[i + 1..] {
            assert_ne!(a.config, b.config, "{} and {}", a.case, b.case);
        }
    }

    let unseeded = BaseTable::standard(&TableParams::default().with_seed_trivial(false)).unwrap();
    assert_eq!(unseeded.len(), 21);
    assert!(unseeded.get("0").is_none() && unseeded.get("8").is_none());
}

#[test]
fn variants_differ_only_in_ambiguous_cases() {
    let joined = BaseTable::standard(&TableParams::joined()).unwrap();
    let split = BaseTable::standard(&TableParams::split()).unwrap();
    for (a, b) in joined.iter().zip(&split) {
        assert_eq!(a.case, b.case);
        assert_eq!(a.config, b.config);
        let ambiguous = a.case == "2B" || a.case == "3B";
        assert_eq!(a.assignment != b.assignment, ambiguous, "{}", a.case);
    }
    assert_eq!(joined.get("2B").unwrap().assignment.vertex_count(), 1);
    assert_eq!(split.get("2B").unwrap().assignment.vertex_count(), 2);
}

#[test]
fn boundary_edges_match_corners() {
    use crate::EDGE_VERTICES;

    // An edge carries a vertex exactly when its corners disagree
    for base in BaseTable::standard(&TableParams::default()).unwrap().iter() {
        for (edge, [a, b]) in EDGE_VERTICES.into_iter().enumerate() {
            let crossing = base.config.is_inside(a) != base.config.is_inside(b);
            assert_eq!(base.assignment.get(edge as EdgeIndex).is_some(), crossing, "case {} edge {edge}", base.case);
        }
    }
}

#[test]
fn malformed_case_is_an_error() {
    use crate::TableError;

    assert_eq!(BaseCase::from_corners("bad", &[9], &[&[0]]), Err(TableError::InvalidCorner(9)));
    assert_eq!(BaseCase::from_corners("bad", &[0], &[&[0, 12]]), Err(TableError::InvalidEdge(12)));
    let one = BaseCase::from_corners("1", &[5], &[&[5, 8, 9]]).unwrap();
    assert_eq!(one.config, ConfigIndex::from_bits(0x20));
}
