//! Snow, ice and frosted ground on the top of the terrain.
//!
//! The pass walks a 16x16 tile from the highest motion blocking block
//! downwards, one layer at a time. Every column carries a sky exposure from
//! the layer above. Open air passes it on and spreads it sideways, so snow
//! also settles under overhangs next to an opening. Once a layer ends without
//! any exposure the rest of the tile is unreachable and the walk stops.

use std::ops::AddAssign;
use std::sync::Arc;

use frost_registry::TerrainSubstitutions;
use frost_utils::BlockPos;
use frost_utils::random::Random;

use crate::chunk::heightmap::HeightmapType;
use crate::world::WorldGenLevel;
use crate::worldgen::feature::Feature;

pub mod exposure;
pub mod placement;

pub use exposure::{ExposureField, ExposurePropagation, MAX_EXPOSURE, TILE_SIZE};
pub use placement::{Placement, PlacementOutcome};

/// Counts of what one or more tiles went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FreezeSummary {
    /// Layers walked.
    pub layers: u32,
    /// Tiles whose walk ran out of exposure before the bottom of the world.
    pub exhausted: u32,
    /// Water turned to ice.
    pub ice: u32,
    /// Ice ticks scheduled.
    pub ticks: u32,
    /// Lava turned to obsidian.
    pub obsidian: u32,
    /// Snow layers placed.
    pub snow: u32,
    /// Blocks under open air replaced by their frosted variant.
    pub frosted: u32,
    /// Blocks under new snow replaced by their snowy variant.
    pub covered: u32,
}

impl FreezeSummary {
    fn record(&mut self, outcome: PlacementOutcome) {
        match outcome.placement {
            Placement::None => {}
            Placement::Ice { scheduled_tick } => {
                self.ice += 1;
                self.ticks += u32::from(scheduled_tick);
            }
            Placement::Obsidian => self.obsidian += 1,
            Placement::Snow { .. } => self.snow += 1,
        }
        self.frosted += u32::from(outcome.frosted_below);
        self.covered += u32::from(outcome.covered_below);
    }
}

impl AddAssign for FreezeSummary {
    fn add_assign(&mut self, other: Self) {
        self.layers += other.layers;
        self.exhausted += other.exhausted;
        self.ice += other.ice;
        self.ticks += other.ticks;
        self.obsidian += other.obsidian;
        self.snow += other.snow;
        self.frosted += other.frosted;
        self.covered += other.covered;
    }
}

/// Freezes the top layer of a tile.
pub struct FreezeTopLayerFeature {
    substitutions: Arc<TerrainSubstitutions>,
    propagation: ExposurePropagation,
}

impl FreezeTopLayerFeature {
    /// Creates the feature with the tables it substitutes ground through.
    #[must_use]
    pub fn new(substitutions: Arc<TerrainSubstitutions>, propagation: ExposurePropagation) -> Self {
        Self {
            substitutions,
            propagation,
        }
    }

    /// Walks the tile whose lowest corner is at `origin.x, origin.z`.
    pub fn place_tile(
        &self,
        level: &mut dyn WorldGenLevel,
        random: &mut dyn Random,
        origin: BlockPos,
    ) -> FreezeSummary {
        let _span =
            tracing::debug_span!("freeze_top_layer", x = origin.x(), z = origin.z()).entered();

        let mut summary = FreezeSummary::default();
        let min_y = level.min_y();
        let mut top_y = min_y;
        for x in 0..TILE_SIZE as i32 {
            for z in 0..TILE_SIZE as i32 {
                top_y = top_y.max(level.get_height(
                    HeightmapType::MotionBlocking,
                    origin.x() + x,
                    origin.z() + z,
                ));
            }
        }

        let mut previous = ExposureField::open_sky();
        let mut current = ExposureField::default();

        for y in (min_y..=top_y).rev() {
            summary.layers += 1;
            for x in 0..TILE_SIZE {
                for z in 0..TILE_SIZE {
                    let exposure = previous.get(x, z);
                    let pos = BlockPos::new(origin.x() + x as i32, y, origin.z() + z as i32);
                    let state = level.get_block_state(pos);

                    if level.is_air(state, pos) {
                        current.set(x, z, exposure);
                        current.spread(x, z, self.propagation);
                    }

                    if exposure > 0 {
                        summary.record(placement::place_snow_and_ice(
                            level,
                            &self.substitutions,
                            random,
                            pos,
                            state,
                            exposure,
                        ));
                    }
                }
            }

            if current.is_exhausted() {
                if y > min_y {
                    summary.exhausted += 1;
                }
                log::trace!("Exposure of tile {origin} ran out at y={y}");
                break;
            }
            previous.copy_from(&current);
            current.clear();
        }

        log::debug!(
            "Froze tile {origin} from y={top_y}: {} layers, {} snow, {} ice ({} ticks), {} obsidian, {} frosted, {} covered",
            summary.layers,
            summary.snow,
            summary.ice,
            summary.ticks,
            summary.obsidian,
            summary.frosted,
            summary.covered,
        );
        summary
    }
}

impl Feature for FreezeTopLayerFeature {
    fn place(
        &self,
        level: &mut dyn WorldGenLevel,
        random: &mut dyn Random,
        origin: BlockPos,
    ) -> bool {
        self.place_tile(level, random, origin);
        true
    }
}
