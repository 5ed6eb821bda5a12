//! A square of chunks opened for decoration around a center chunk.

use frost_registry::{BlockRef, BlockStateExt, vanilla_blocks};
use frost_utils::{BlockPos, BlockStateId, ChunkPos};

use crate::behavior::BLOCK_BEHAVIORS;
use crate::chunk::{heightmap::HeightmapType, proto_chunk::ProtoChunk};
use crate::ticks::ScheduledTick;
use crate::world::{BlockGetter, UpdateFlags, WorldGenLevel};

/// The chunks a feature placed in the center chunk may touch.
///
/// Reads outside the region see air. Writes outside the region are
/// dropped with a warning, since they would land in a chunk that is not
/// ready for them.
pub struct WorldGenRegion {
    center: ChunkPos,
    radius: i32,
    min_y: i32,
    chunks: Vec<ProtoChunk>,
    game_time: u64,
    sub_tick_count: u64,
}

impl WorldGenRegion {
    /// Creates a region of empty chunks `radius` chunks around `center`.
    #[must_use]
    pub fn new(center: ChunkPos, radius: u8, min_y: i32, height: u32) -> Self {
        let radius = i32::from(radius);
        let mut chunks = Vec::new();
        for dz in -radius..=radius {
            for dx in -radius..=radius {
                let pos = ChunkPos::new(center.0.x + dx, center.0.y + dz);
                chunks.push(ProtoChunk::new(pos, min_y, height));
            }
        }
        Self {
            center,
            radius,
            min_y,
            chunks,
            game_time: 0,
            sub_tick_count: 0,
        }
    }

    /// Sets the game time scheduled ticks are relative to.
    #[must_use]
    pub fn with_game_time(mut self, game_time: u64) -> Self {
        self.game_time = game_time;
        self
    }

    /// The chunk being decorated.
    #[must_use]
    pub fn center(&self) -> ChunkPos {
        self.center
    }

    fn index(&self, pos: ChunkPos) -> Option<usize> {
        let dx = pos.0.x - self.center.0.x;
        let dz = pos.0.y - self.center.0.y;
        if dx.abs() > self.radius || dz.abs() > self.radius {
            return None;
        }
        let size = 2 * self.radius + 1;
        Some(((dz + self.radius) * size + dx + self.radius) as usize)
    }

    /// Whether `pos` lies in one of the region's chunks.
    #[must_use]
    pub fn contains(&self, pos: BlockPos) -> bool {
        self.index(ChunkPos::containing(pos)).is_some()
    }

    /// The chunk at `pos`, if it is part of the region.
    #[must_use]
    pub fn chunk(&self, pos: ChunkPos) -> Option<&ProtoChunk> {
        self.index(pos).map(|index| &self.chunks[index])
    }

    /// Mutable access to the chunk at `pos`.
    pub fn chunk_mut(&mut self, pos: ChunkPos) -> Option<&mut ProtoChunk> {
        self.index(pos).map(|index| &mut self.chunks[index])
    }

    /// Every chunk of the region.
    pub fn chunks_mut(&mut self) -> impl Iterator<Item = &mut ProtoChunk> {
        self.chunks.iter_mut()
    }

    fn fluid_block(&self, pos: BlockPos) -> BlockStateId {
        let fluid = self.get_fluid_state(pos);
        if fluid.is_water() {
            vanilla_blocks::WATER.default_state()
        } else if fluid.is_lava() {
            vanilla_blocks::LAVA.default_state()
        } else {
            vanilla_blocks::AIR.default_state()
        }
    }
}

impl BlockGetter for WorldGenRegion {
    fn get_block_state(&self, pos: BlockPos) -> BlockStateId {
        self.chunk(ChunkPos::containing(pos))
            .map_or(BlockStateId(0), |chunk| chunk.get_block_state(pos))
    }
}

impl WorldGenLevel for WorldGenRegion {
    fn min_y(&self) -> i32 {
        self.min_y
    }

    fn get_height(&self, heightmap: HeightmapType, x: i32, z: i32) -> i32 {
        self.chunk(ChunkPos::new(x >> 4, z >> 4))
            .map_or(self.min_y, |chunk| {
                chunk.get_height(heightmap, (x & 15) as usize, (z & 15) as usize)
            })
    }

    fn can_survive(&self, state: BlockStateId, pos: BlockPos) -> bool {
        BLOCK_BEHAVIORS
            .get_behavior(state.get_block())
            .can_survive(state, self, pos)
    }

    fn set_block(&mut self, pos: BlockPos, state: BlockStateId, flags: UpdateFlags) -> bool {
        let center = self.center;
        let Some(chunk) = self.chunk_mut(ChunkPos::containing(pos)) else {
            log::warn!("Detected setBlock in a far chunk {pos}, decorating {center}");
            return false;
        };
        match chunk.set_block_state(pos, state) {
            None => false,
            Some(previous) if previous == state => false,
            Some(_) => {
                if flags.contains(UpdateFlags::UPDATE_NEIGHBORS) {
                    chunk.mark_pos_for_postprocessing(pos);
                }
                true
            }
        }
    }

    fn remove_block(&mut self, pos: BlockPos, moved: bool) -> bool {
        let mut flags = UpdateFlags::UPDATE_ALL;
        if moved {
            flags |= UpdateFlags::UPDATE_MOVE_BY_PISTON;
        }
        let replacement = self.fluid_block(pos);
        self.set_block(pos, replacement, flags)
    }

    fn schedule_block_tick(&mut self, pos: BlockPos, block: BlockRef, delay: u32) {
        let trigger_tick = self.game_time + u64::from(delay);
        let sub_tick_order = self.sub_tick_count;
        let Some(chunk) = self.chunk_mut(ChunkPos::containing(pos)) else {
            log::warn!("Dropping tick for {} at {pos} outside the region", block.key);
            return;
        };
        let tick = ScheduledTick::new(block.id, pos, trigger_tick, sub_tick_order);
        if chunk.block_ticks_mut().schedule(tick) {
            self.sub_tick_count += 1;
        }
    }
}
