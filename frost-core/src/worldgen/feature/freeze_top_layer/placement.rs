//! What the freeze pass does to a single exposed block.

use frost_registry::{
    BlockStateExt, BlockStateProperties, Direction, TerrainSubstitutions, vanilla_blocks,
};
use frost_utils::random::Random;
use frost_utils::{BlockPos, BlockStateId};

use crate::world::{UpdateFlags, WorldGenLevel};

use super::exposure::MAX_EXPOSURE;

/// The change made at the visited position itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Nothing was placed.
    #[default]
    None,
    /// Water froze. `scheduled_tick` is set when the water was held by
    /// another block, which then needs a tick to settle.
    Ice {
        /// Whether an ice tick was scheduled.
        scheduled_tick: bool,
    },
    /// Lava solidified.
    Obsidian,
    /// Snow settled.
    Snow {
        /// Height of the new snow, in layers.
        layers: u8,
    },
}

/// Everything one visit changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementOutcome {
    /// The change at the visited position.
    pub placement: Placement,
    /// The block under open air was frosted through the special table.
    pub frosted_below: bool,
    /// The block under new snow was covered through the ordinary table.
    pub covered_below: bool,
}

/// Freezes water, solidifies lava or settles snow at `pos`.
///
/// `state` is the block at `pos` and `exposure` the sky exposure arriving
/// from above. The block below `pos` is read once up front; the ordinary
/// table is applied to that original block even if the special table
/// already replaced it.
pub fn place_snow_and_ice(
    level: &mut dyn WorldGenLevel,
    substitutions: &TerrainSubstitutions,
    random: &mut dyn Random,
    pos: BlockPos,
    state: BlockStateId,
    exposure: u8,
) -> PlacementOutcome {
    let mut outcome = PlacementOutcome::default();
    let fluid = level.get_fluid_state(pos);
    let below_pos = pos.below();
    let below = level.get_block_state(below_pos);

    if level.is_air(state, pos)
        && let Some(replacement) = substitutions
            .snowy_special_terrain
            .lookup(below.get_block())
    {
        outcome.frosted_below =
            level.set_block(below_pos, replacement.default_state(), UpdateFlags::UPDATE_CLIENTS);
    }

    if fluid.is_water() && (state.is_liquid_block() || level.is_replaceable(state)) {
        level.set_block(
            pos,
            vanilla_blocks::ICE.default_state(),
            UpdateFlags::UPDATE_CLIENTS,
        );
        let scheduled_tick = !state.is_liquid_block();
        if scheduled_tick {
            level.schedule_block_tick(pos, vanilla_blocks::ICE, 0);
        }
        outcome.placement = Placement::Ice { scheduled_tick };
    } else if fluid.is_lava() && state.is_liquid_block() {
        level.set_block(
            pos,
            vanilla_blocks::OBSIDIAN.default_state(),
            UpdateFlags::UPDATE_CLIENTS,
        );
        outcome.placement = Placement::Obsidian;
    } else if level.can_survive(vanilla_blocks::SNOW.default_state(), pos)
        && level.is_replaceable(state)
    {
        let block = state.get_block();
        if block.config.double_plant {
            let above = pos.above();
            if level.get_block_state(above).get_block() == block {
                level.remove_block(above, false);
            }
        }

        let roll = random.next_i32_bounded(3);
        let layers = snow_layers(exposure, roll, count_exposed_faces(level, pos));
        level.set_block(
            pos,
            vanilla_blocks::SNOW
                .default_state()
                .set_value(&BlockStateProperties::LAYERS, layers),
            UpdateFlags::UPDATE_ALL,
        );
        outcome.placement = Placement::Snow { layers };

        if let Some(replacement) = substitutions.snowy_terrain.lookup(below.get_block()) {
            outcome.covered_below = level.set_block(
                below_pos,
                replacement.default_state(),
                UpdateFlags::UPDATE_CLIENTS,
            );
        }
    }

    outcome
}

/// Snow height for a column: the exposure, less a random roll and the open
/// sides, kept within `1..=7`.
#[must_use]
pub fn snow_layers(exposure: u8, roll: i32, exposed_faces: u8) -> u8 {
    (i32::from(exposure) - roll - i32::from(exposed_faces)).clamp(1, i32::from(MAX_EXPOSURE)) as u8
}

/// Number of horizontal neighbours of `pos` whose face towards it cannot
/// hold snow in.
#[must_use]
pub fn count_exposed_faces(level: &dyn WorldGenLevel, pos: BlockPos) -> u8 {
    Direction::HORIZONTAL
        .into_iter()
        .filter(|direction| {
            let neighbour = direction.relative(pos);
            let state = level.get_block_state(neighbour);
            !level.is_face_sturdy(state, neighbour, direction.opposite())
        })
        .count() as u8
}

#[cfg(test)]
mod tests {
    use frost_utils::ChunkPos;
    use frost_utils::random::RandomSplitter;
    use frost_utils::random::legacy_random::LegacyRandomSplitter;

    use super::*;
    use crate::world::{BlockGetter, WorldGenRegion};

    /// A random source that always rolls the same number.
    struct FixedRoll(i32);

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

    fn region() -> WorldGenRegion {
        WorldGenRegion::new(ChunkPos::new(0, 0), 1, 0, 16)
    }

    fn place(
        region: &mut WorldGenRegion,
        pos: BlockPos,
        exposure: u8,
        roll: i32,
    ) -> PlacementOutcome {
        let state = region.get_block_state(pos);
        place_snow_and_ice(
            region,
            &TerrainSubstitutions::vanilla(),
            &mut FixedRoll(roll),
            pos,
            state,
            exposure,
        )
    }

    fn put(region: &mut WorldGenRegion, pos: BlockPos, state: BlockStateId) {
        region.set_block(pos, state, UpdateFlags::UPDATE_CLIENTS);
    }

    #[test]
    fn test_snow_layers_clamp() {
        assert_eq!(snow_layers(7, 0, 0), 7);
        assert_eq!(snow_layers(7, 2, 4), 1);
        assert_eq!(snow_layers(1, 2, 4), 1);
        assert_eq!(snow_layers(7, 1, 2), 4);
        for exposure in 0..=MAX_EXPOSURE {
            for roll in 0..3 {
                for faces in 0..=4 {
                    assert!((1..=7).contains(&snow_layers(exposure, roll, faces)));
                }
            }
        }
    }

    #[test]
    fn test_snow_on_open_ground_covers_dirt() {
        let mut region = region();
        let ground = BlockPos::new(5, 3, 5);
        put(&mut region, ground, vanilla_blocks::DIRT.default_state());

        let outcome = place(&mut region, ground.above(), 7, 1);

        // All four sides are open air.
        assert_eq!(outcome.placement, Placement::Snow { layers: 2 });
        assert!(outcome.covered_below);
        assert!(!outcome.frosted_below);
        let snow = region.get_block_state(ground.above());
        assert_eq!(snow.get_block(), vanilla_blocks::SNOW);
        assert_eq!(snow.try_get_value(&BlockStateProperties::LAYERS), Some(2));
        assert_eq!(
            region.get_block_state(ground),
            vanilla_blocks::SNOWY_DIRT.default_state()
        );
    }

    #[test]
    fn test_sheltered_snow_is_deeper() {
        let mut region = region();
        let ground = BlockPos::new(5, 3, 5);
        let pos = ground.above();
        put(&mut region, ground, vanilla_blocks::STONE.default_state());
        for direction in Direction::HORIZONTAL {
            put(&mut region, direction.relative(pos), vanilla_blocks::STONE.default_state());
        }

        assert_eq!(count_exposed_faces(&region, pos), 0);
        let outcome = place(&mut region, pos, 6, 0);
        assert_eq!(outcome.placement, Placement::Snow { layers: 6 });
    }

    #[test]
    fn test_rock_under_air_is_frosted_without_snow_cover() {
        let mut region = region();
        let ground = BlockPos::new(5, 3, 5);
        put(&mut region, ground, vanilla_blocks::STONE.default_state());

        let outcome = place(&mut region, ground.above(), 7, 0);

        assert!(outcome.frosted_below);
        assert!(!outcome.covered_below);
        assert!(matches!(outcome.placement, Placement::Snow { .. }));
        assert_eq!(
            region.get_block_state(ground),
            vanilla_blocks::SNOWY_STONE.default_state()
        );
    }

    #[test]
    fn test_water_freezes() {
        let mut region = region();
        let source = BlockPos::new(2, 3, 2);
        let flowing = BlockPos::new(3, 3, 2);
        let seagrass = BlockPos::new(4, 3, 2);
        put(&mut region, source, vanilla_blocks::WATER.default_state());
        put(
            &mut region,
            flowing,
            vanilla_blocks::WATER
                .default_state()
                .set_value(&BlockStateProperties::LEVEL, 3),
        );
        put(&mut region, seagrass, vanilla_blocks::SEAGRASS.default_state());

        for pos in [source, flowing] {
            assert_eq!(
                place(&mut region, pos, 7, 0).placement,
                Placement::Ice {
                    scheduled_tick: false
                }
            );
        }
        assert_eq!(
            place(&mut region, seagrass, 7, 0).placement,
            Placement::Ice {
                scheduled_tick: true
            }
        );

        for pos in [source, flowing, seagrass] {
            assert_eq!(region.get_block_state(pos), vanilla_blocks::ICE.default_state());
        }
        let ticks = region.chunk(ChunkPos::new(0, 0)).expect("chunk").block_ticks();
        assert_eq!(ticks.count(), 1);
        assert!(ticks.has_scheduled_tick(seagrass, vanilla_blocks::ICE.id));
    }

    #[test]
    fn test_lava_solidifies() {
        let mut region = region();
        let pos = BlockPos::new(2, 3, 2);
        put(&mut region, pos, vanilla_blocks::LAVA.default_state());

        assert_eq!(place(&mut region, pos, 1, 0).placement, Placement::Obsidian);
        assert_eq!(region.get_block_state(pos), vanilla_blocks::OBSIDIAN.default_state());
    }

    #[test]
    fn test_no_snow_where_it_cannot_rest() {
        let mut region = region();
        let ice = BlockPos::new(2, 3, 2);
        put(&mut region, ice, vanilla_blocks::ICE.default_state());
        assert_eq!(place(&mut region, ice.above(), 7, 0).placement, Placement::None);
        assert!(region.get_block_state(ice.above()).is_air());

        // Solid blocks are not replaceable.
        let log = BlockPos::new(6, 4, 6);
        put(&mut region, log.below(), vanilla_blocks::DIRT.default_state());
        put(&mut region, log, vanilla_blocks::OAK_LOG.default_state());
        assert_eq!(place(&mut region, log, 7, 0), PlacementOutcome::default());
        assert_eq!(region.get_block_state(log.below()), vanilla_blocks::DIRT.default_state());
    }

    #[test]
    fn test_unlisted_ground_is_left_alone() {
        let mut region = region();
        let ground = BlockPos::new(5, 3, 5);
        put(&mut region, ground, vanilla_blocks::GRASS_BLOCK.default_state());

        let outcome = place(&mut region, ground.above(), 7, 0);

        assert!(!outcome.frosted_below);
        assert!(!outcome.covered_below);
        assert_eq!(
            region.get_block_state(ground),
            vanilla_blocks::GRASS_BLOCK.default_state()
        );
    }

    #[test]
    fn test_tall_plant_loses_its_upper_half() {
        let mut region = region();
        let ground = BlockPos::new(5, 3, 5);
        let lower = ground.above();
        let upper = lower.above();
        let tall_grass = vanilla_blocks::TALL_GRASS.default_state();
        put(&mut region, ground, vanilla_blocks::DIRT.default_state());
        put(&mut region, lower, tall_grass);
        put(
            &mut region,
            upper,
            tall_grass.set_enum(&BlockStateProperties::DOUBLE_BLOCK_HALF, "upper"),
        );

        let outcome = place(&mut region, lower, 5, 0);

        assert_eq!(outcome.placement, Placement::Snow { layers: 1 });
        assert!(region.get_block_state(upper).is_air());
        assert_eq!(region.get_block_state(lower).get_block(), vanilla_blocks::SNOW);
    }

    #[test]
    fn test_short_plants_are_buried() {
        let mut region = region();
        let ground = BlockPos::new(5, 3, 5);
        let fern = ground.above();
        put(&mut region, ground, vanilla_blocks::COARSE_DIRT.default_state());
        put(&mut region, fern, vanilla_blocks::FERN.default_state());
        put(&mut region, fern.above(), vanilla_blocks::POPPY.default_state());

        let outcome = place(&mut region, fern, 7, 2);

        assert_eq!(outcome.placement, Placement::Snow { layers: 1 });
        assert!(outcome.covered_below);
        // Only a matching upper half is removed.
        assert_eq!(
            region.get_block_state(fern.above()),
            vanilla_blocks::POPPY.default_state()
        );
    }
}
