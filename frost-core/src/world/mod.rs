//! Level access for decoration.
//!
//! Features never see chunks directly. They read and write through
//! [`WorldGenLevel`], which a [`WorldGenRegion`] implements over the chunk
//! being decorated and its neighbours.

use bitflags::bitflags;
use frost_registry::{BlockRef, BlockStateExt, Direction, FluidState};
use frost_utils::{BlockPos, BlockStateId};

use crate::chunk::heightmap::HeightmapType;

mod world_gen_region;

pub use world_gen_region::WorldGenRegion;

bitflags! {
    /// Side effects requested alongside a block change.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UpdateFlags: u32 {
        /// Notify neighbouring blocks of the change.
        const UPDATE_NEIGHBORS = 1;
        /// Send the change to clients.
        const UPDATE_CLIENTS = 1 << 1;
        /// The block was moved rather than replaced.
        const UPDATE_MOVE_BY_PISTON = 1 << 6;

        /// Neighbours and clients.
        const UPDATE_ALL = Self::UPDATE_NEIGHBORS.bits() | Self::UPDATE_CLIENTS.bits();
    }
}

/// Read access to block states.
pub trait BlockGetter {
    /// The block state at `pos`.
    fn get_block_state(&self, pos: BlockPos) -> BlockStateId;

    /// The fluid at `pos`.
    fn get_fluid_state(&self, pos: BlockPos) -> FluidState {
        self.get_block_state(pos).fluid_state()
    }
}

/// The view of the world a feature decorates through.
pub trait WorldGenLevel: BlockGetter {
    /// The lowest block y coordinate.
    fn min_y(&self) -> i32;

    /// One above the highest block in the column at `x, z` matching
    /// `heightmap`, or [`min_y`](Self::min_y) for an empty column.
    fn get_height(&self, heightmap: HeightmapType, x: i32, z: i32) -> i32;

    /// Whether `state` at `pos` is empty space.
    fn is_air(&self, state: BlockStateId, _pos: BlockPos) -> bool {
        state.is_air()
    }

    /// Whether `state` may be overwritten by decoration.
    fn is_replaceable(&self, state: BlockStateId) -> bool {
        state.is_replaceable()
    }

    /// Whether the face of `state` at `pos` pointing in `direction` can
    /// support something.
    fn is_face_sturdy(&self, state: BlockStateId, _pos: BlockPos, direction: Direction) -> bool {
        state.is_face_sturdy(direction)
    }

    /// Whether `state` would stay in place if it were put at `pos`.
    fn can_survive(&self, state: BlockStateId, pos: BlockPos) -> bool;

    /// Replaces the block at `pos`. Returns whether the change was applied.
    fn set_block(&mut self, pos: BlockPos, state: BlockStateId, flags: UpdateFlags) -> bool;

    /// Removes the block at `pos`, leaving behind whatever fluid it held.
    fn remove_block(&mut self, pos: BlockPos, moved: bool) -> bool;

    /// Asks for `block` at `pos` to be ticked `delay` ticks from now.
    fn schedule_block_tick(&mut self, pos: BlockPos, block: BlockRef, delay: u32);
}
