//! Layered flat terrain.

use frost_utils::BlockStateId;

use crate::chunk::{chunk_generator::ChunkGenerator, proto_chunk::ProtoChunk};

/// A chunk generator that generates a flat world.
#[derive(Debug, Clone)]
pub struct FlatChunkGenerator {
    /// One block state per layer, starting at the bottom of the chunk.
    pub layers: Vec<BlockStateId>,
}

impl FlatChunkGenerator {
    /// Creates a new `FlatChunkGenerator`.
    #[must_use]
    pub fn new(layers: Vec<BlockStateId>) -> Self {
        Self { layers }
    }
}

impl ChunkGenerator for FlatChunkGenerator {
    fn fill_from_noise(&self, chunk: &mut ProtoChunk) {
        for (y, state) in self.layers.iter().enumerate() {
            for x in 0..16 {
                for z in 0..16 {
                    if chunk.set_relative_block(x, y, z, *state).is_none() {
                        log::warn!(
                            "Flat layer {y} does not fit in chunk {}, dropping the rest",
                            chunk.pos
                        );
                        return;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use frost_registry::vanilla_blocks;
    use frost_utils::{BlockPos, ChunkPos};

    use super::*;
    use crate::chunk::heightmap::HeightmapType;

    #[test]
    fn test_layers_fill_from_the_bottom() {
        let generator = FlatChunkGenerator::new(vec![
            vanilla_blocks::BEDROCK.default_state(),
            vanilla_blocks::DIRT.default_state(),
            vanilla_blocks::GRASS_BLOCK.default_state(),
        ]);
        let mut chunk = ProtoChunk::new(ChunkPos::new(1, 1), -16, 32);
        generator.fill_from_noise(&mut chunk);

        assert_eq!(
            chunk.get_block_state(BlockPos::new(20, -16, 31)),
            vanilla_blocks::BEDROCK.default_state()
        );
        assert_eq!(
            chunk.get_block_state(BlockPos::new(16, -14, 16)),
            vanilla_blocks::GRASS_BLOCK.default_state()
        );
        assert_eq!(chunk.get_height(HeightmapType::MotionBlocking, 7, 7), -13);
    }
}
