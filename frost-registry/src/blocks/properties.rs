//! Block state properties and directions.

use frost_utils::BlockPos;

/// An integer valued property such as snow `layers`.
#[derive(Debug)]
pub struct IntProperty {
    /// The property name.
    pub name: &'static str,
    /// The smallest value.
    pub min: u8,
    /// The largest value.
    pub max: u8,
}

/// A property with named values.
#[derive(Debug)]
pub struct EnumProperty {
    /// The property name.
    pub name: &'static str,
    /// The allowed values. The first one is the default.
    pub values: &'static [&'static str],
}

/// Any property a block can declare.
#[derive(Debug, Clone, Copy)]
pub enum Property {
    #[allow(missing_docs)]
    Int(&'static IntProperty),
    #[allow(missing_docs)]
    Enum(&'static EnumProperty),
}

impl Property {
    /// The property name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int(property) => property.name,
            Self::Enum(property) => property.name,
        }
    }

    /// How many distinct values the property has.
    #[must_use]
    pub const fn value_count(self) -> u16 {
        match self {
            Self::Int(property) => (property.max - property.min) as u16 + 1,
            Self::Enum(property) => property.values.len() as u16,
        }
    }
}

/// The properties used by the vanilla blocks in this registry.
pub struct BlockStateProperties;

impl BlockStateProperties {
    /// Snow layer count.
    pub const LAYERS: IntProperty = IntProperty {
        name: "layers",
        min: 1,
        max: 8,
    };

    /// Liquid level. 0 is a source, 1..=7 flowing, 8..=15 falling.
    pub const LEVEL: IntProperty = IntProperty {
        name: "level",
        min: 0,
        max: 15,
    };

    /// Which half of a two block tall plant this is.
    pub const DOUBLE_BLOCK_HALF: EnumProperty = EnumProperty {
        name: "half",
        values: &["lower", "upper"],
    };
}

/// The six axis aligned directions.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// -Y
    Down = 0,
    /// +Y
    Up = 1,
    /// -Z
    North = 2,
    /// +Z
    South = 3,
    /// -X
    West = 4,
    /// +X
    East = 5,
}

impl Direction {
    /// The horizontal plane in vanilla iteration order.
    pub const HORIZONTAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Returns (dx, dy, dz) for this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Self::Down => (0, -1, 0),
            Self::Up => (0, 1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::East => (1, 0, 0),
        }
    }

    /// Returns the position one step from `pos` in this direction.
    #[must_use]
    pub const fn relative(self, pos: BlockPos) -> BlockPos {
        let (dx, dy, dz) = self.offset();
        pos.offset(dx, dy, dz)
    }
}
