//! Fluids and the fluid state carried by block states.

/// Fluid ID - uses raw registry ID (u16) to match vanilla
/// Vanilla IDs:
///   0 = Empty
///   1 = `Flowing_Water`
///   2 = Water
///   3 = `Flowing_Lava`
///   4 = Lava
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FluidId(pub u16);

#[allow(non_upper_case_globals, missing_docs)]
impl FluidId {
    pub const Empty: FluidId = FluidId(0);
    pub const Flowing_Water: FluidId = FluidId(1);
    pub const Water: FluidId = FluidId(2);
    pub const Flowing_Lava: FluidId = FluidId(3);
    pub const Lava: FluidId = FluidId(4);

    /// Returns true if this is the empty fluid
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The flowing variant of a source fluid. Other fluids map to themselves.
    #[must_use]
    pub fn flowing(self) -> FluidId {
        match self {
            FluidId::Water => FluidId::Flowing_Water,
            FluidId::Lava => FluidId::Flowing_Lava,
            other => other,
        }
    }
}

/// The fluid occupying a block space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FluidState {
    /// Which fluid this is.
    pub fluid_id: FluidId,
    /// Fluid height, 8 for sources and falling fluid.
    pub amount: u8,
    /// Whether the fluid is falling down a column.
    pub falling: bool,
}

impl FluidState {
    /// No fluid.
    pub const EMPTY: FluidState = FluidState {
        fluid_id: FluidId::Empty,
        amount: 0,
        falling: false,
    };

    /// A full source of `fluid`.
    #[must_use]
    pub const fn source(fluid: FluidId) -> Self {
        Self {
            fluid_id: fluid,
            amount: 8,
            falling: false,
        }
    }

    /// The fluid held by a liquid block at the given `level` property.
    ///
    /// Level 0 is a source, 1..=7 flows with decreasing height and 8 or more
    /// is falling fluid.
    #[must_use]
    pub fn from_block_level(fluid: FluidId, level: u8) -> Self {
        match level {
            0 => Self::source(fluid),
            1..=7 => Self {
                fluid_id: fluid.flowing(),
                amount: 8 - level,
                falling: false,
            },
            _ => Self {
                fluid_id: fluid.flowing(),
                amount: 8,
                falling: true,
            },
        }
    }

    /// Whether there is no fluid.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.fluid_id.is_empty()
    }

    /// Whether this is a source block.
    #[must_use]
    pub fn is_source(self) -> bool {
        matches!(self.fluid_id, FluidId::Water | FluidId::Lava)
    }

    /// Water or flowing water.
    #[must_use]
    pub fn is_water(self) -> bool {
        matches!(self.fluid_id, FluidId::Water | FluidId::Flowing_Water)
    }

    /// Lava or flowing lava.
    #[must_use]
    pub fn is_lava(self) -> bool {
        matches!(self.fluid_id, FluidId::Lava | FluidId::Flowing_Lava)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_block_level() {
        let source = FluidState::from_block_level(FluidId::Water, 0);
        assert!(source.is_source());
        assert_eq!(source.amount, 8);

        let flowing = FluidState::from_block_level(FluidId::Water, 7);
        assert_eq!(flowing.fluid_id, FluidId::Flowing_Water);
        assert_eq!(flowing.amount, 1);
        assert!(flowing.is_water());

        let falling = FluidState::from_block_level(FluidId::Lava, 8);
        assert!(falling.falling);
        assert!(falling.is_lava());
        assert!(!falling.is_source());
    }

    #[test]
    fn test_empty() {
        assert!(FluidState::EMPTY.is_empty());
        assert!(!FluidState::EMPTY.is_water());
        assert!(!FluidState::EMPTY.is_lava());
    }
}
