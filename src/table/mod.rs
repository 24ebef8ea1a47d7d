//! Merging the orbits of all base cases into one table over every
//! configuration.

mod cases;
pub use cases::*;

mod params;
pub use params::*;

use ahash::AHashMap;
use crate::{
    cube::NUM_EDGES,
    orbit::{ self, Orbit },
    reconcile,
    rotation::validate_generators,
    utils::timed,
    ConfigIndex, EdgeAssignment, ReconciliationFailure, RotationGroup, TableError, TableResult,
};
#[cfg(feature = "multi-thread")]
use rayon::prelude::*;
use std::collections::hash_map::Entry;
use tracing::{ info, warn };

/// Edge assignments per configuration, each remembering which base case
/// produced it.
#[derive(Debug, Clone)]
pub struct GlobalTable {
    rows: AHashMap<ConfigIndex, (EdgeAssignment, usize)>,
    cases: Vec<String>,
}

impl GlobalTable {
    pub fn get(&self, config: ConfigIndex) -> Option<&EdgeAssignment> {
        self.rows.get(&config).map(|(assignment, _)| assignment)
    }

    /// Name of the base case whose orbit produced this row.
    pub fn case_of(&self, config: ConfigIndex) -> Option<&str> {
        self.rows.get(&config).map(|(_, case)| self.cases[*case].as_str())
    }

    pub fn contains(&self, config: ConfigIndex) -> bool {
        self.rows.contains_key(&config)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in ascending configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (ConfigIndex, &EdgeAssignment)> + '_ {
        ConfigIndex::all().filter_map(|config| self.get(config).map(|assignment| (config, assignment)))
    }

    /// Configurations no base case reached, ascending.
    pub fn missing(&self) -> Vec<ConfigIndex> {
        ConfigIndex::all().filter(|config| !self.contains(*config)).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.len() == ConfigIndex::COUNT
    }

    pub fn ensure_complete(&self) -> TableResult<()> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(TableError::IncompleteCoverage { missing })
        }
    }

    /// Number of dual vertices per configuration; 0 for missing rows.
    pub fn vertex_counts(&self) -> [u8; ConfigIndex::COUNT] {
        let mut counts = [0; ConfigIndex::COUNT];
        for (config, assignment) in self.iter() {
            counts[config.as_usize()] = assignment.vertex_count() as u8;
        }
        counts
    }

    /// The table as plain rows with `NO_VERTEX` for empty edges.
    pub fn to_raw(&self) -> TableResult<[[u8; NUM_EDGES]; ConfigIndex::COUNT]> {
        self.ensure_complete()?;
        let mut raw = [[crate::NO_VERTEX; NUM_EDGES]; ConfigIndex::COUNT];
        for (config, assignment) in self.iter() {
            raw[config.as_usize()] = assignment.to_raw();
        }
        Ok(raw)
    }

    /// Same rows, each equal up to renaming of local vertices.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.len() == other.len() &&
            self.iter().all(|(config, assignment)| {
                other.get(config).map_or(false, |theirs| assignment.is_equivalent(theirs))
            })
    }
}

/// Expands base cases through the rotation group and merges the results.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    group: RotationGroup,
}

impl TableBuilder {
    /// Checks the rotation constants and enumerates the rotation group.
    pub fn new() -> TableResult<Self> {
        validate_generators()?;
        Ok(Self {
            group: RotationGroup::new()?,
        })
    }

    pub fn group(&self) -> &RotationGroup {
        &self.group
    }

    /// Builds the table from `base`.
    ///
    /// Conflicts inside any orbit and between orbits are all collected into
    /// one `TableError::Reconciliation`. Coverage is not checked here; see
    /// `GlobalTable::ensure_complete`.
    pub fn build(&self, base: &BaseTable) -> TableResult<GlobalTable> {
        let orbits = timed!(self.expand_all(base), "expand orbits");

        let mut failures = Vec::new();
        let mut rows: AHashMap<ConfigIndex, (EdgeAssignment, usize)> = AHashMap::with_capacity(ConfigIndex::COUNT);
        for (index, orbit) in orbits.into_iter().enumerate() {
            let orbit = match orbit {
                Ok(orbit) => orbit,
                Err(mut orbit_failures) => {
                    failures.append(&mut orbit_failures);
                    continue;
                }
            };

            for (config, assignment) in orbit.sorted() {
                match rows.entry(config) {
                    Entry::Vacant(vacant) => {
                        vacant.insert((assignment, index));
                    }
                    Entry::Occupied(occupied) => {
                        let (existing, owner) = occupied.get();
                        if let Err(disagreement) = reconcile(existing, &assignment) {
                            let failure = ReconciliationFailure {
                                config,
                                edge: disagreement.edge,
                                existing_case: base.cases()[*owner].case.clone(),
                                incoming_case: orbit.case.clone(),
                                rotation: None,
                                mismatch: disagreement.mismatch,
                            };
                            warn!(%failure, "orbits disagree");
                            failures.push(failure);
                        }
                    }
                }
            }
        }

        if !failures.is_empty() {
            return Err(TableError::Reconciliation(failures));
        }

        info!(cases = base.len(), rows = rows.len(), "built table");
        Ok(GlobalTable {
            rows,
            cases: base.iter().map(|base| base.case.clone()).collect(),
        })
    }

    /// `build` followed by a coverage check.
    pub fn build_complete(&self, base: &BaseTable) -> TableResult<GlobalTable> {
        let table = self.build(base)?;
        table.ensure_complete()?;
        Ok(table)
    }

    fn expand_all(&self, base: &BaseTable) -> Vec<Result<Orbit, Vec<ReconciliationFailure>>> {
        let expand = |case: &BaseCase| orbit::expand(&case.case, case.config, case.assignment, &self.group);

        #[cfg(feature = "multi-thread")]
        return base.cases().par_iter().map(expand).collect();

        #[cfg(not(feature = "multi-thread"))]
        return base.iter().map(expand).collect();
    }
}

#[test]
fn standard_table_is_complete() {
    let builder = TableBuilder::new().unwrap();
    for params in [TableParams::joined(), TableParams::split()] {
        let table = builder.build_complete(&BaseTable::standard(&params).unwrap()).unwrap();
        assert_eq!(table.len(), 256);
        assert!(table.missing().is_empty());
        assert_eq!(table.get(ConfigIndex::EMPTY), Some(&EdgeAssignment::empty()));
        assert_eq!(table.get(ConfigIndex::FULL), Some(&EdgeAssignment::empty()));
        assert_eq!(table.case_of(ConfigIndex::from_bits(0x01)), Some("1"));
        assert_eq!(table.case_of(ConfigIndex::from_bits(0x5a)), Some("4F"));
        assert_eq!(table.case_of(ConfigIndex::from_bits(0xa5)), Some("4F"));
    }
}

#[test]
fn unseeded_table_misses_trivial_cubes() {
    let builder = TableBuilder::new().unwrap();
    let base = BaseTable::standard(&TableParams::default().with_seed_trivial(false)).unwrap();
    let table = builder.build(&base).unwrap();
    assert_eq!(table.len(), 254);
    assert_eq!(table.missing(), vec![ConfigIndex::EMPTY, ConfigIndex::FULL]);
    assert_eq!(
        builder.build_complete(&base).unwrap_err(),
        TableError::IncompleteCoverage { missing: vec![ConfigIndex::EMPTY, ConfigIndex::FULL] }
    );
    assert!(table.to_raw().is_err());
}

#[test]
fn vertex_counts_per_variant() {
    let builder = TableBuilder::new().unwrap();
    let joined = builder.build_complete(&BaseTable::standard(&TableParams::joined()).unwrap()).unwrap();
    let split = builder.build_complete(&BaseTable::standard(&TableParams::split()).unwrap()).unwrap();

    let joined_counts = joined.vertex_counts();
    let split_counts = split.vertex_counts();
    assert_eq!(joined_counts.iter().map(|&n| n as usize).sum::<usize>(), 358);
    assert_eq!(split_counts.iter().map(|&n| n as usize).sum::<usize>(), 394);

    let differing: Vec<_> = ConfigIndex::all()
        .filter(|config| joined_counts[config.as_usize()] != split_counts[config.as_usize()])
        .collect();
    assert_eq!(differing.len(), 36);
    for config in differing {
        let case = joined.case_of(config).unwrap();
        assert!(case == "2B" || case == "3B", "{config} from {case}");
        assert_eq!(split_counts[config.as_usize()], joined_counts[config.as_usize()] + 1);
    }
    assert!(!joined.is_equivalent(&split));
}

#[test]
fn raw_table_rows() {
    let builder = TableBuilder::new().unwrap();
    let raw = builder.build_complete(&BaseTable::standard(&TableParams::default()).unwrap()).unwrap().to_raw().unwrap();
    assert_eq!(raw[0x00], [0xff; 12]);
    assert_eq!(raw[0x01], [0, 0xff, 0xff, 0, 0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
    assert_eq!(raw[0xff], [0xff; 12]);
}

#[test]
fn cross_orbit_conflict_names_both_cases() {
    let builder = TableBuilder::new().unwrap();
    // Consistent on its own, but splits the sheet case 1 keeps whole
    let base = BaseTable::new()
        .with(BaseCase::from_corners("1", &[5], &[&[5, 8, 9]]).unwrap())
        .with(BaseCase::from_corners("1-split", &[0], &[&[0], &[3], &[4]]).unwrap());
    let Err(TableError::Reconciliation(failures)) = builder.build(&base) else {
        panic!("expected a reconciliation failure");
    };
    assert_eq!(failures.len(), 8);
    for failure in &failures {
        assert_eq!(failure.existing_case, "1");
        assert_eq!(failure.incoming_case, "1-split");
        assert_eq!(failure.rotation, None);
    }
    let first = &failures[0];
    assert_eq!(first.config, ConfigIndex::from_bits(0x01));
    assert_eq!(first.edge, 3);
    assert_eq!(first.mismatch, crate::Mismatch::Collision { incoming: 1, existing: 0, claimed_by: 0 });
}
