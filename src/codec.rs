use bitvec::prelude::*;
use crate::{ TableError, TableResult, VertexIndex, cube::NUM_VERTICES };
use std::fmt;

/// Inside/outside flag for each of the 8 corners.
pub type VertexFlags = [bool; NUM_VERTICES];

/// 8 bit index of a corner configuration.
/// ```text
/// Bit layout
/// 7 6 5 4 3 2 1 0
/// | | | | | | | |
/// ---------------Corner 7..0 (1 = inside the surface)
/// ```
#[repr(transparent)]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfigIndex(u8);

impl ConfigIndex {
    pub const COUNT: usize = 256;
    /// No corner inside.
    pub const EMPTY: Self = Self(0x00);
    /// Every corner inside.
    pub const FULL: Self = Self(0xff);

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Configuration with exactly the listed corners inside.
    pub fn from_vertices(vertices: &[VertexIndex]) -> TableResult<Self> {
        let mut flags = [false; NUM_VERTICES];
        for &vertex in vertices {
            *flags.get_mut(vertex as usize).ok_or(TableError::InvalidCorner(vertex))? = true;
        }
        Ok(encode(flags))
    }

    pub fn flags(self) -> VertexFlags {
        let bits = self.0.view_bits::<Lsb0>();
        std::array::from_fn(|vertex| bits[vertex])
    }

    #[inline]
    pub fn is_inside(self, vertex: VertexIndex) -> bool {
        self.0.view_bits::<Lsb0>()[vertex as usize]
    }

    pub fn inside_count(self) -> usize {
        self.0.view_bits::<Lsb0>().count_ones()
    }

    /// Every configuration in ascending order.
    pub fn all() -> impl Iterator<Item = ConfigIndex> {
        (0..=u8::MAX).map(ConfigIndex)
    }
}

impl TryFrom<usize> for ConfigIndex {
    type Error = TableError;

    fn try_from(index: usize) -> TableResult<Self> {
        u8::try_from(index)
            .map(ConfigIndex)
            .map_err(|_| TableError::InvalidIndex(index))
    }
}

impl From<ConfigIndex> for usize {
    fn from(index: ConfigIndex) -> usize {
        index.as_usize()
    }
}

impl fmt::Display for ConfigIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

/// Packs corner flags into a configuration index, corner `i` into bit `i`.
pub fn encode(flags: VertexFlags) -> ConfigIndex {
    let mut bits = 0u8;
    let view = bits.view_bits_mut::<Lsb0>();
    for (vertex, inside) in flags.into_iter().enumerate() {
        view.set(vertex, inside);
    }
    ConfigIndex(bits)
}

/// Unpacks a raw configuration index into corner flags.
pub fn decode(index: usize) -> TableResult<VertexFlags> {
    ConfigIndex::try_from(index).map(ConfigIndex::flags)
}

#[test]
fn codec_round_trip() {
    for index in 0..ConfigIndex::COUNT {
        let flags = decode(index).unwrap();
        assert_eq!(encode(flags).as_usize(), index);
    }
}

#[test]
fn codec_bit_order() {
    let flags = decode(0b0010_0001).unwrap();
    assert_eq!(flags, [true, false, false, false, false, true, false, false]);
    assert_eq!(ConfigIndex::from_vertices(&[5]), Ok(ConfigIndex::from_bits(0x20)));
    assert_eq!(ConfigIndex::from_vertices(&[6, 7]), Ok(ConfigIndex::from_bits(0xc0)));
    assert_eq!(ConfigIndex::from_vertices(&[0, 1, 2, 3, 4, 5, 6, 7]), Ok(ConfigIndex::FULL));
    assert_eq!(ConfigIndex::from_bits(0x5a).inside_count(), 4);
    assert!(ConfigIndex::from_bits(0x20).is_inside(5));
    assert!(!ConfigIndex::from_bits(0x20).is_inside(4));
}

#[test]
fn decode_rejects_out_of_range() {
    assert_eq!(decode(256), Err(TableError::InvalidIndex(256)));
    assert_eq!(ConfigIndex::try_from(1000), Err(TableError::InvalidIndex(1000)));
    assert_eq!(ConfigIndex::try_from(255), Ok(ConfigIndex::FULL));
}

#[test]
fn from_vertices_rejects_unknown_corner() {
    assert_eq!(ConfigIndex::from_vertices(&[1, 8]), Err(TableError::InvalidCorner(8)));
    assert_eq!(ConfigIndex::from_vertices(&[255]), Err(TableError::InvalidCorner(255)));
}

#[test]
fn config_index_display() {
    assert_eq!(ConfigIndex::from_bits(0x5a).to_string(), "0x5a");
    assert_eq!(ConfigIndex::EMPTY.to_string(), "0x00");
    assert_eq!(ConfigIndex::all().count(), ConfigIndex::COUNT);
}
