//! Worlds and random sources shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use frost_core::chunk::chunk_generator::ChunkGenerator;
use frost_core::chunk::flat_chunk_generator::FlatChunkGenerator;
use frost_core::chunk::heightmap::HeightmapType;
use frost_core::world::{BlockGetter, UpdateFlags, WorldGenLevel, WorldGenRegion};
use frost_core::worldgen::feature::freeze_top_layer::ExposurePropagation;
use frost_core::FreezeTopLayerFeature;
use frost_registry::{BlockRef, TerrainSubstitutions};
use frost_utils::random::legacy_random::LegacyRandomSplitter;
use frost_utils::random::{Random, RandomSplitter};
use frost_utils::{BlockPos, BlockStateId, ChunkPos};

/// The lowest corner of the decorated tile.
pub const ORIGIN: BlockPos = BlockPos::new(0, 0, 0);

/// A random source that always rolls the same number.
pub struct FixedRoll(pub i32);

impl Random for FixedRoll {
    fn fork(&mut self) -> Self {
        Self(self.0)
    }

    fn next_i32(&mut self) -> i32 {
        self.0
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        self.0.rem_euclid(bound)
    }

    fn next_i64(&mut self) -> i64 {
        i64::from(self.0)
    }

    fn next_positional(&mut self) -> RandomSplitter {
        RandomSplitter::Legacy(LegacyRandomSplitter::new(i64::from(self.0)))
    }
}

/// A region around chunk 0, 0 filled with `layers` from y = 0 up.
pub fn flat_region(layers: &[BlockRef]) -> WorldGenRegion {
    let generator =
        FlatChunkGenerator::new(layers.iter().map(|block| block.default_state()).collect());
    let mut region = WorldGenRegion::new(ChunkPos::new(0, 0), 1, 0, 32);
    for chunk in region.chunks_mut() {
        generator.fill_from_noise(chunk);
    }
    region
}

/// The feature with the built in tables.
pub fn feature(propagation: ExposurePropagation) -> FreezeTopLayerFeature {
    FreezeTopLayerFeature::new(Arc::new(TerrainSubstitutions::vanilla()), propagation)
}

/// Sets a block, ignoring the result.
pub fn put(level: &mut dyn WorldGenLevel, pos: BlockPos, state: BlockStateId) {
    level.set_block(pos, state, UpdateFlags::UPDATE_CLIENTS);
}

/// Every column position of the tile at height `y`.
pub fn tile_columns(y: i32) -> impl Iterator<Item = BlockPos> {
    (0..16).flat_map(move |x| (0..16).map(move |z| BlockPos::new(x, y, z)))
}

/// A world edit seen by [`RecordingLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// `set_block` that changed something.
    Set(BlockPos, BlockStateId),
    /// `remove_block`.
    Remove(BlockPos),
    /// `schedule_block_tick`.
    Tick(BlockPos, BlockRef, u32),
}

/// Passes everything to a region and records the edits in order.
pub struct RecordingLevel {
    /// The wrapped region.
    pub region: WorldGenRegion,
    /// Edits in the order they were made.
    pub edits: Vec<Edit>,
}

impl RecordingLevel {
    /// Wraps `region`.
    pub fn new(region: WorldGenRegion) -> Self {
        Self {
            region,
            edits: Vec::new(),
        }
    }
}

impl BlockGetter for RecordingLevel {
    fn get_block_state(&self, pos: BlockPos) -> BlockStateId {
        self.region.get_block_state(pos)
    }
}

impl WorldGenLevel for RecordingLevel {
    fn min_y(&self) -> i32 {
        self.region.min_y()
    }

    fn get_height(&self, heightmap: HeightmapType, x: i32, z: i32) -> i32 {
        self.region.get_height(heightmap, x, z)
    }

    fn can_survive(&self, state: BlockStateId, pos: BlockPos) -> bool {
        self.region.can_survive(state, pos)
    }

    fn set_block(&mut self, pos: BlockPos, state: BlockStateId, flags: UpdateFlags) -> bool {
        let changed = self.region.set_block(pos, state, flags);
        if changed {
            self.edits.push(Edit::Set(pos, state));
        }
        changed
    }

    fn remove_block(&mut self, pos: BlockPos, moved: bool) -> bool {
        self.edits.push(Edit::Remove(pos));
        self.region.remove_block(pos, moved)
    }

    fn schedule_block_tick(&mut self, pos: BlockPos, block: BlockRef, delay: u32) {
        self.edits.push(Edit::Tick(pos, block, delay));
        self.region.schedule_block_tick(pos, block, delay);
    }
}
