//! The `BlockBehaviour` trait.

use frost_utils::{BlockPos, BlockStateId};

use crate::world::BlockGetter;

/// Behaviour shared by every state of a block.
pub trait BlockBehaviour: Send + Sync {
    /// Whether `state` can stay at `pos` given its surroundings.
    fn can_survive(&self, _state: BlockStateId, _level: &dyn BlockGetter, _pos: BlockPos) -> bool {
        true
    }
}

/// Behaviour of blocks without special rules.
pub struct DefaultBlockBehaviour;

impl BlockBehaviour for DefaultBlockBehaviour {}
