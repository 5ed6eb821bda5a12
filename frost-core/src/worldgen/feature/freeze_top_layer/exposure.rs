//! Sky exposure of the columns of one tile at one layer.
//!
//! Exposure works like sky light on a 0 to 7 scale. It passes straight down
//! through open air unchanged and leaks sideways under overhangs, losing one
//! level per horizontal step.

use std::collections::VecDeque;

use serde::Deserialize;

/// Side length of a tile.
pub const TILE_SIZE: usize = 16;
/// Number of columns in a tile.
pub const TILE_AREA: usize = TILE_SIZE * TILE_SIZE;
/// Exposure of a column under open sky.
pub const MAX_EXPOSURE: u8 = 7;

/// How a sideways spread treats columns it has already reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExposurePropagation {
    /// A column is expanded at most once per spread, with the first strength
    /// that reached it, even if a stronger path arrives later.
    #[default]
    VisitedOnce,
    /// A column is expanded again whenever a strictly stronger path reaches
    /// it, which yields exactly `s - d` at Manhattan distance `d`.
    Reexpand,
}

/// One exposure value per column of a tile, indexed by `x + 16 * z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposureField {
    values: [u8; TILE_AREA],
}

impl ExposureField {
    /// A field with every column at `value`.
    #[must_use]
    pub fn filled(value: u8) -> Self {
        debug_assert!(value <= MAX_EXPOSURE);
        Self {
            values: [value; TILE_AREA],
        }
    }

    /// A field under open sky.
    #[must_use]
    pub fn open_sky() -> Self {
        Self::filled(MAX_EXPOSURE)
    }

    #[inline]
    const fn index(x: usize, z: usize) -> usize {
        x + TILE_SIZE * z
    }

    /// The exposure of column `x, z`.
    #[must_use]
    #[inline]
    pub fn get(&self, x: usize, z: usize) -> u8 {
        self.values[Self::index(x, z)]
    }

    /// Sets the exposure of column `x, z`.
    #[inline]
    pub fn set(&mut self, x: usize, z: usize, value: u8) {
        debug_assert!(value <= MAX_EXPOSURE);
        self.values[Self::index(x, z)] = value;
    }

    /// Whether no column has any exposure left.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.values.iter().all(|value| *value == 0)
    }

    /// Number of columns with some exposure.
    #[must_use]
    pub fn exposed_columns(&self) -> usize {
        self.values.iter().filter(|value| **value > 0).count()
    }

    /// Copies every value from `other`.
    pub fn copy_from(&mut self, other: &Self) {
        self.values = other.values;
    }

    /// Resets every column to 0.
    pub fn clear(&mut self) {
        self.values = [0; TILE_AREA];
    }

    /// Spreads the exposure of column `x, z` to its horizontal neighbours,
    /// one level weaker per step, raising only columns that are below the
    /// arriving strength. Columns outside the tile are never touched.
    pub fn spread(&mut self, x: usize, z: usize, mode: ExposurePropagation) {
        let mut visited = [false; TILE_AREA];
        let mut queue = VecDeque::new();

        visited[Self::index(x, z)] = true;
        queue.push_back((x, z, self.get(x, z)));

        while let Some((x, z, strength)) = queue.pop_front() {
            let Some(next) = strength.checked_sub(1) else {
                continue;
            };
            for (nx, nz) in neighbours(x, z) {
                let index = Self::index(nx, nz);
                if self.values[index] >= next {
                    continue;
                }
                if mode == ExposurePropagation::VisitedOnce {
                    if visited[index] {
                        continue;
                    }
                    visited[index] = true;
                }
                self.values[index] = next;
                queue.push_back((nx, nz, next));
            }
        }
    }
}

impl Default for ExposureField {
    fn default() -> Self {
        Self::filled(0)
    }
}

/// The in-tile horizontal neighbours of `x, z`, in north, east, south, west
/// order.
fn neighbours(x: usize, z: usize) -> impl Iterator<Item = (usize, usize)> {
    [
        z.checked_sub(1).map(|z| (x, z)),
        (x + 1 < TILE_SIZE).then_some((x + 1, z)),
        (z + 1 < TILE_SIZE).then_some((x, z + 1)),
        x.checked_sub(1).map(|x| (x, z)),
    ]
    .into_iter()
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spread_from(x: usize, z: usize, strength: u8, mode: ExposurePropagation) -> ExposureField {
        let mut field = ExposureField::default();
        field.set(x, z, strength);
        field.spread(x, z, mode);
        field
    }

    #[test]
    fn test_diamond_from_a_single_source() {
        for mode in [ExposurePropagation::VisitedOnce, ExposurePropagation::Reexpand] {
            let field = spread_from(8, 8, 7, mode);
            for z in 0..TILE_SIZE {
                for x in 0..TILE_SIZE {
                    let distance = x.abs_diff(8) + z.abs_diff(8);
                    let expected = 7usize.saturating_sub(distance) as u8;
                    assert_eq!(field.get(x, z), expected, "column {x}, {z} in {mode:?}");
                }
            }
        }
    }

    #[test]
    fn test_stays_inside_the_tile() {
        let field = spread_from(0, 15, 7, ExposurePropagation::VisitedOnce);
        assert_eq!(field.get(0, 15), 7);
        assert_eq!(field.get(1, 15), 6);
        assert_eq!(field.get(0, 14), 6);
        assert_eq!(field.get(6, 15), 1);
        assert_eq!(field.get(7, 15), 0);
        assert_eq!(field.exposed_columns(), 28);
    }

    #[test]
    fn test_weak_sources_do_not_spread() {
        let field = spread_from(3, 3, 1, ExposurePropagation::VisitedOnce);
        assert_eq!(field.exposed_columns(), 1);
        let field = spread_from(3, 3, 0, ExposurePropagation::VisitedOnce);
        assert!(field.is_exhausted());
    }

    #[test]
    fn test_never_lowers_values() {
        let mut field = ExposureField::filled(5);
        field.set(4, 4, 7);
        field.spread(4, 4, ExposurePropagation::VisitedOnce);
        assert_eq!(field.get(4, 5), 6);
        assert_eq!(field.get(4, 6), 5);
        assert_eq!(field.get(15, 15), 5);
    }

    #[test]
    fn test_modes_agree_on_a_partly_lit_layer() {
        // A breadth first walk reaches every column along a shortest path
        // first, so expanding a column once is already its best strength.
        let mut field = ExposureField::default();
        field.set(2, 2, 7);
        field.spread(2, 2, ExposurePropagation::VisitedOnce);
        field.set(12, 9, 5);
        field.spread(12, 9, ExposurePropagation::VisitedOnce);
        field.set(6, 6, 7);

        let mut once = field.clone();
        once.spread(6, 6, ExposurePropagation::VisitedOnce);
        let mut again = field;
        again.spread(6, 6, ExposurePropagation::Reexpand);

        assert_eq!(once, again);
        assert_eq!(once.get(2, 2), 7);
        assert_eq!(once.get(4, 4), 3);
        assert_eq!(once.get(5, 6), 6);
        assert_eq!(once.get(9, 9), 2);
        assert_eq!(once.get(12, 9), 5);
    }

    #[test]
    fn test_reexpand_reaches_the_exact_distance_field() {
        let mut once = ExposureField::default();
        once.set(0, 0, 7);
        once.set(1, 0, 4);
        once.set(0, 1, 4);
        let mut again = once.clone();

        once.spread(0, 0, ExposurePropagation::VisitedOnce);
        again.spread(0, 0, ExposurePropagation::Reexpand);

        for z in 0..TILE_SIZE {
            for x in 0..TILE_SIZE {
                let expected = 7usize.saturating_sub(x + z) as u8;
                assert_eq!(again.get(x, z), expected);
                assert!(once.get(x, z) <= again.get(x, z));
            }
        }
    }
}
