//! Snow layer behaviour.

use frost_registry::{BlockRef, BlockStateExt, BlockStateProperties, Direction, vanilla_blocks};
use frost_utils::{BlockPos, BlockStateId};

use crate::behavior::block::BlockBehaviour;
use crate::world::BlockGetter;

/// The number of layers in a full block of snow.
pub const MAX_LAYERS: u8 = 8;

/// Behavior for snow layers.
pub struct SnowLayerBlock {
    block: BlockRef,
}

impl SnowLayerBlock {
    /// Creates a new snow layer behavior.
    #[must_use]
    pub const fn new(block: BlockRef) -> Self {
        Self { block }
    }
}

impl BlockBehaviour for SnowLayerBlock {
    fn can_survive(&self, _state: BlockStateId, level: &dyn BlockGetter, pos: BlockPos) -> bool {
        let below = level.get_block_state(pos.below());
        let block = below.get_block();

        if block == vanilla_blocks::ICE
            || block == vanilla_blocks::PACKED_ICE
            || block == vanilla_blocks::BARRIER
        {
            return false;
        }
        if block == vanilla_blocks::HONEY_BLOCK || block == vanilla_blocks::SOUL_SAND {
            return true;
        }
        if block == self.block {
            return below.try_get_value(&BlockStateProperties::LAYERS) == Some(MAX_LAYERS);
        }
        below.is_face_sturdy(Direction::Up)
    }
}
