//! # Frost
//!
//! Generates a flat world around the origin and freezes its top layer.
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    missing_docs,
    clippy::unwrap_used
)]
#![allow(
    clippy::single_call_fn,
    clippy::multiple_inherent_impl,
    clippy::shadow_unrelated,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata
)]

use std::sync::Arc;

use anyhow::Context;
use frost_core::chunk::chunk_generator::ChunkGenerator;
use frost_core::{FreezeSummary, FreezeTopLayerFeature, FrostConfig, WorldGenRegion};
use frost_utils::ChunkPos;
use frost_utils::random::{PositionalRandom, Random, RandomSource};

/// Console logging.
pub mod logger;

/// The outcome of a decoration run.
pub struct Decoration {
    /// The seed the run used.
    pub seed: u64,
    /// The decorated chunks and the ring of bare chunks around them.
    pub region: WorldGenRegion,
    /// Totals over every decorated chunk.
    pub summary: FreezeSummary,
}

/// Generates the chunks within `config.chunk_radius` of the origin chunk
/// and runs the freeze pass on each of them, west to east, north to south.
///
/// The generated area is one chunk wider than the decorated one so every
/// decorated tile can look at its neighbours.
pub fn decorate(config: &FrostConfig) -> anyhow::Result<Decoration> {
    let generator = config.flat_generator()?;
    let substitutions = Arc::new(config.substitutions()?);
    let feature = FreezeTopLayerFeature::new(substitutions, config.propagation);

    let seed = config.world_seed().unwrap_or_else(rand::random);
    log::info!(
        "Decorating {} chunks with seed {seed}",
        (2 * u32::from(config.chunk_radius) + 1).pow(2)
    );
    let splitter = RandomSource::from_seed(config.random, seed).next_positional();

    let margin = config
        .chunk_radius
        .checked_add(1)
        .context("chunk_radius is too large")?;
    let mut region = WorldGenRegion::new(ChunkPos::new(0, 0), margin, config.min_y, config.height);
    for chunk in region.chunks_mut() {
        generator.fill_from_noise(chunk);
    }

    let radius = i32::from(config.chunk_radius);
    let mut summary = FreezeSummary::default();
    for z in -radius..=radius {
        for x in -radius..=radius {
            let origin = ChunkPos::new(x, z).block_at(config.min_y);
            let mut random = splitter.at(origin.x(), 0, origin.z());
            let tile = feature.place_tile(&mut region, &mut random, origin);
            log::debug!(
                "Chunk {}: {} snow, {} ice",
                ChunkPos::new(x, z),
                tile.snow,
                tile.ice
            );
            summary += tile;
        }
    }

    Ok(Decoration {
        seed,
        region,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use frost_core::world::BlockGetter;
    use frost_registry::{BlockStateExt, vanilla_blocks};
    use frost_utils::BlockPos;

    use super::*;

    fn config(seed: &str) -> FrostConfig {
        FrostConfig {
            seed: seed.to_string(),
            chunk_radius: 1,
            ..FrostConfig::default()
        }
    }

    #[test]
    fn test_decorates_every_chunk_in_radius() {
        let decoration = decorate(&config("winter")).expect("valid config");
        let summary = decoration.summary;

        // Nine chunks of grass under open sky.
        assert_eq!(summary.snow, 9 * 256);
        assert_eq!(summary.layers, 9 * 2);
        assert_eq!(summary.exhausted, 9);
        assert_eq!(summary.covered, 0);

        let region = &decoration.region;
        let snow = region.get_block_state(BlockPos::new(-16, 6, 31));
        assert_eq!(snow.get_block(), vanilla_blocks::SNOW);
        // The margin chunks are generated but left bare.
        assert!(region.get_block_state(BlockPos::new(32, 6, 0)).is_air());
        assert_eq!(
            region.get_block_state(BlockPos::new(32, 5, 0)),
            vanilla_blocks::GRASS_BLOCK.default_state()
        );
    }

    #[test]
    fn test_same_seed_same_world() {
        let first = decorate(&config("12345")).expect("valid config");
        let second = decorate(&config("12345")).expect("valid config");
        assert_eq!(first.seed, 12345);
        assert_eq!(first.summary, second.summary);

        for x in -16..32 {
            for z in -16..32 {
                let pos = BlockPos::new(x, 6, z);
                assert_eq!(
                    first.region.get_block_state(pos),
                    second.region.get_block_state(pos),
                    "{pos}"
                );
            }
        }
    }
}
