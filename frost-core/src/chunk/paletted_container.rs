//! Cube shaped value storage for a single chunk section.

use std::fmt::Debug;

use frost_utils::BlockStateId;

/// Side length of a section.
const SECTION_SIZE: usize = 16;
/// Number of values in a section.
const SECTION_VOLUME: usize = SECTION_SIZE * SECTION_SIZE * SECTION_SIZE;

/// A 16x16x16 cube of values.
///
/// Freshly generated sections are usually a single value (all air, or all
/// stone), so that case is stored without an array.
#[derive(Debug, Clone)]
pub enum PalettedContainer<T: Copy + Eq + Debug> {
    /// Every position holds the same value.
    Homogeneous(T),
    /// Values differ, stored in `y, z, x` order.
    Heterogeneous(Box<[T; SECTION_VOLUME]>),
}

/// Block state storage for a section.
pub type BlockPalette = PalettedContainer<BlockStateId>;

impl<T: Copy + Eq + Debug> PalettedContainer<T> {
    /// Side length of the cube.
    pub const SIZE: usize = SECTION_SIZE;
    /// Number of values in the cube.
    pub const VOLUME: usize = SECTION_VOLUME;

    #[inline]
    fn index(x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < Self::SIZE && y < Self::SIZE && z < Self::SIZE);
        (y * Self::SIZE + z) * Self::SIZE + x
    }

    /// Gets the value at the given section relative position.
    #[must_use]
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> T {
        match self {
            Self::Homogeneous(value) => *value,
            Self::Heterogeneous(values) => values[Self::index(x, y, z)],
        }
    }

    /// Sets the value at the given position and returns the previous one.
    ///
    /// A homogeneous container is expanded on the first differing write.
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: T) -> T {
        match self {
            Self::Homogeneous(current) => {
                let previous = *current;
                if previous != value {
                    let mut values = Box::new([previous; SECTION_VOLUME]);
                    values[Self::index(x, y, z)] = value;
                    *self = Self::Heterogeneous(values);
                }
                previous
            }
            Self::Heterogeneous(values) => {
                std::mem::replace(&mut values[Self::index(x, y, z)], value)
            }
        }
    }

    /// Fills the whole cube with one value.
    pub fn fill(&mut self, value: T) {
        *self = Self::Homogeneous(value);
    }

    /// Collapses back to a single value if every position agrees.
    pub fn optimize(&mut self) {
        if let Self::Heterogeneous(values) = self {
            let first = values[0];
            if values.iter().all(|value| *value == first) {
                *self = Self::Homogeneous(first);
            }
        }
    }

    /// Counts positions whose value satisfies `predicate`.
    #[must_use]
    pub fn count_matching(&self, mut predicate: impl FnMut(T) -> bool) -> usize {
        match self {
            Self::Homogeneous(value) => {
                if predicate(*value) {
                    Self::VOLUME
                } else {
                    0
                }
            }
            Self::Heterogeneous(values) => values.iter().filter(|value| predicate(**value)).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_expands_and_optimize_collapses() {
        let mut palette = BlockPalette::Homogeneous(BlockStateId(0));
        assert_eq!(palette.set(3, 4, 5, BlockStateId(0)), BlockStateId(0));
        assert!(matches!(palette, PalettedContainer::Homogeneous(_)));

        assert_eq!(palette.set(3, 4, 5, BlockStateId(7)), BlockStateId(0));
        assert!(matches!(palette, PalettedContainer::Heterogeneous(_)));
        assert_eq!(palette.get(3, 4, 5), BlockStateId(7));
        assert_eq!(palette.get(4, 4, 5), BlockStateId(0));

        assert_eq!(palette.set(3, 4, 5, BlockStateId(0)), BlockStateId(7));
        palette.optimize();
        assert!(matches!(palette, PalettedContainer::Homogeneous(BlockStateId(0))));
    }

    #[test]
    fn test_count_matching() {
        let mut palette = PalettedContainer::Homogeneous(0u8);
        assert_eq!(palette.count_matching(|v| v == 0), 4096);
        palette.set(0, 0, 0, 1);
        palette.set(15, 15, 15, 1);
        assert_eq!(palette.count_matching(|v| v == 1), 2);
    }
}
