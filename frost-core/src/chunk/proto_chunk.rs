//! This module contains the `ProtoChunk` struct, a chunk that is still being generated.

use frost_registry::BlockId;
use frost_utils::{BlockPos, BlockStateId, ChunkPos};
use rustc_hash::FxHashSet;

use crate::chunk::{
    heightmap::HeightmapType, paletted_container::BlockPalette, section::ChunkSection,
};
use crate::ticks::LevelChunkTicks;

/// A chunk that is being generated.
#[derive(Debug, Clone)]
pub struct ProtoChunk {
    /// The position of the chunk.
    pub pos: ChunkPos,
    /// The lowest block y coordinate.
    min_y: i32,
    /// The sections of the chunk, bottom first.
    sections: Box<[ChunkSection]>,
    /// Block ticks requested during generation.
    block_ticks: LevelChunkTicks<BlockId>,
    /// Positions whose neighbours must be updated once the chunk is promoted.
    post_processing: FxHashSet<BlockPos>,
}

impl ProtoChunk {
    /// Creates an empty chunk spanning `height` blocks upwards from `min_y`.
    ///
    /// `height` is rounded up to whole sections.
    #[must_use]
    pub fn new(pos: ChunkPos, min_y: i32, height: u32) -> Self {
        let section_count = height.div_ceil(BlockPalette::SIZE as u32) as usize;
        Self {
            pos,
            min_y,
            sections: (0..section_count).map(|_| ChunkSection::new_empty()).collect(),
            block_ticks: LevelChunkTicks::new(),
            post_processing: FxHashSet::default(),
        }
    }

    /// The lowest block y coordinate.
    #[must_use]
    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    /// Number of block layers.
    #[must_use]
    pub fn height(&self) -> i32 {
        (self.sections.len() * BlockPalette::SIZE) as i32
    }

    /// One above the highest block y coordinate.
    #[must_use]
    pub fn max_y(&self) -> i32 {
        self.min_y + self.height()
    }

    /// Whether `y` lies outside the chunk's vertical range.
    #[must_use]
    pub fn is_outside_build_height(&self, y: i32) -> bool {
        y < self.min_y || y >= self.max_y()
    }

    /// The sections of the chunk, bottom first.
    #[must_use]
    pub fn sections(&self) -> &[ChunkSection] {
        &self.sections
    }

    /// Gets a block at a position relative to the chunk's lowest corner.
    #[must_use]
    pub fn get_relative_block(
        &self,
        relative_x: usize,
        relative_y: usize,
        relative_z: usize,
    ) -> Option<BlockStateId> {
        let section_index = relative_y / BlockPalette::SIZE;
        self.sections.get(section_index).map(|section| {
            section
                .states
                .get(relative_x, relative_y % BlockPalette::SIZE, relative_z)
        })
    }

    /// Sets a block at a position relative to the chunk's lowest corner and
    /// returns the previous state, or `None` above the top section.
    pub fn set_relative_block(
        &mut self,
        relative_x: usize,
        relative_y: usize,
        relative_z: usize,
        value: BlockStateId,
    ) -> Option<BlockStateId> {
        let section_index = relative_y / BlockPalette::SIZE;
        self.sections.get_mut(section_index).map(|section| {
            section
                .states
                .set(relative_x, relative_y % BlockPalette::SIZE, relative_z, value)
        })
    }

    /// Gets the block at a world position inside this chunk's columns.
    /// Positions above or below the chunk read as air.
    #[must_use]
    pub fn get_block_state(&self, pos: BlockPos) -> BlockStateId {
        if self.is_outside_build_height(pos.y()) {
            return BlockStateId(0);
        }
        self.get_relative_block(
            (pos.x() & 15) as usize,
            (pos.y() - self.min_y) as usize,
            (pos.z() & 15) as usize,
        )
        .unwrap_or(BlockStateId(0))
    }

    /// Sets the block at a world position inside this chunk's columns.
    /// Returns the previous state, or `None` when `pos` is out of height.
    pub fn set_block_state(&mut self, pos: BlockPos, state: BlockStateId) -> Option<BlockStateId> {
        if self.is_outside_build_height(pos.y()) {
            return None;
        }
        self.set_relative_block(
            (pos.x() & 15) as usize,
            (pos.y() - self.min_y) as usize,
            (pos.z() & 15) as usize,
            state,
        )
    }

    /// One above the highest block in the column matching `heightmap`, or
    /// `min_y` when the column has none.
    #[must_use]
    pub fn get_height(
        &self,
        heightmap: HeightmapType,
        relative_x: usize,
        relative_z: usize,
    ) -> i32 {
        for (index, section) in self.sections.iter().enumerate().rev() {
            if let BlockPalette::Homogeneous(state) = section.states
                && !heightmap.is_opaque(state)
            {
                continue;
            }
            for y in (0..BlockPalette::SIZE).rev() {
                if heightmap.is_opaque(section.states.get(relative_x, y, relative_z)) {
                    return self.min_y + (index * BlockPalette::SIZE + y) as i32 + 1;
                }
            }
        }
        self.min_y
    }

    /// Block ticks requested during generation.
    #[must_use]
    pub fn block_ticks(&self) -> &LevelChunkTicks<BlockId> {
        &self.block_ticks
    }

    /// Mutable access to the block ticks.
    pub fn block_ticks_mut(&mut self) -> &mut LevelChunkTicks<BlockId> {
        &mut self.block_ticks
    }

    /// Marks `pos` for a neighbour update once the chunk is promoted.
    pub fn mark_pos_for_postprocessing(&mut self, pos: BlockPos) {
        self.post_processing.insert(pos);
    }

    /// Positions waiting for a neighbour update.
    #[must_use]
    pub fn post_processing(&self) -> &FxHashSet<BlockPos> {
        &self.post_processing
    }
}

#[cfg(test)]
mod tests {
    use frost_registry::vanilla_blocks;

    use super::*;

    #[test]
    fn test_world_positions_map_to_sections() {
        let mut chunk = ProtoChunk::new(ChunkPos::new(-1, 2), -64, 128);
        assert_eq!(chunk.sections().len(), 8);
        assert_eq!(chunk.max_y(), 64);

        let stone = vanilla_blocks::STONE.default_state();
        let pos = BlockPos::new(-3, -20, 35);
        assert_eq!(chunk.set_block_state(pos, stone), Some(BlockStateId(0)));
        assert_eq!(chunk.get_block_state(pos), stone);
        assert_eq!(chunk.get_relative_block(13, 44, 3), Some(stone));

        assert_eq!(chunk.set_block_state(BlockPos::new(-3, 64, 35), stone), None);
        assert_eq!(chunk.get_block_state(BlockPos::new(-3, -65, 35)), BlockStateId(0));
    }

    #[test]
    fn test_heights() {
        let mut chunk = ProtoChunk::new(ChunkPos::new(0, 0), 0, 64);
        assert_eq!(chunk.get_height(HeightmapType::WorldSurface, 0, 0), 0);

        chunk.set_block_state(BlockPos::new(0, 20, 0), vanilla_blocks::STONE.default_state());
        chunk.set_block_state(
            BlockPos::new(0, 21, 0),
            vanilla_blocks::SHORT_GRASS.default_state(),
        );
        assert_eq!(chunk.get_height(HeightmapType::WorldSurface, 0, 0), 22);
        assert_eq!(chunk.get_height(HeightmapType::MotionBlocking, 0, 0), 21);
        assert_eq!(chunk.get_height(HeightmapType::MotionBlocking, 1, 0), 0);
    }
}
