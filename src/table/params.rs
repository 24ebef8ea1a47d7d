//! Parameters for building a table.

/// How the ambiguous two- and three-corner cases (2B and 3B) are resolved.
///
/// Both choices give a consistent table; they differ only in whether the
/// inside corners share one sheet or get a sheet each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Disambiguation {
    /// The diagonal corners on a face are joined into one sheet.
    #[default]
    Joined,
    /// Each diagonal corner on a face gets its own sheet.
    Split,
}

/// Parameters for `BaseTable::standard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableParams {
    /// Variant of the ambiguous cases. Default: `Joined`
    pub disambiguation: Disambiguation,

    /// Whether to seed the empty and full cubes, which no other case reaches.
    /// Default: true
    pub seed_trivial: bool,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            disambiguation: Disambiguation::Joined,
            seed_trivial: true,
        }
    }
}

impl TableParams {
    #[must_use]
    pub fn joined() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn split() -> Self {
        Self {
            disambiguation: Disambiguation::Split,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_disambiguation(mut self, disambiguation: Disambiguation) -> Self {
        self.disambiguation = disambiguation;
        self
    }

    #[must_use]
    pub const fn with_seed_trivial(mut self, seed: bool) -> Self {
        self.seed_trivial = seed;
        self
    }
}

#[test]
fn params_builders() {
    let params = TableParams::default();
    assert_eq!(params.disambiguation, Disambiguation::Joined);
    assert!(params.seed_trivial);

    let params = TableParams::split().with_seed_trivial(false);
    assert_eq!(params.disambiguation, Disambiguation::Split);
    assert!(!params.seed_trivial);

    assert_eq!(TableParams::split().with_disambiguation(Disambiguation::Joined), TableParams::joined());
}
