//! Column height queries.

use frost_registry::BlockStateExt;
use frost_utils::BlockStateId;

/// The kinds of column height a generator can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeightmapType {
    /// The highest block that is not air.
    WorldSurface,
    /// The highest block that stops movement or holds a fluid.
    MotionBlocking,
}

impl HeightmapType {
    /// Whether `state` counts as the top of a column for this heightmap.
    #[must_use]
    pub fn is_opaque(self, state: BlockStateId) -> bool {
        match self {
            Self::WorldSurface => !state.is_air(),
            Self::MotionBlocking => state.is_motion_blocking(),
        }
    }
}
