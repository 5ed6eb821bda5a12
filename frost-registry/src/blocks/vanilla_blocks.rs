//! The blocks known to the registry.
//!
//! Ids are dense and must follow declaration order; [`register_vanilla_blocks`]
//! registers them in that order.
#![allow(missing_docs)]

use frost_utils::Identifier;

use crate::blocks::properties::{BlockStateProperties, Property};
use crate::blocks::{Block, BlockBehaviourProperties, BlockRef, BlockRegistry};
use crate::fluid::FluidId;

const LEVEL: &[Property] = &[Property::Int(&BlockStateProperties::LEVEL)];
const LAYERS: &[Property] = &[Property::Int(&BlockStateProperties::LAYERS)];
const HALF: &[Property] = &[Property::Enum(&BlockStateProperties::DOUBLE_BLOCK_HALF)];

/// Namespace of the snowy terrain variants.
pub const FROST_NAMESPACE: &str = "frost";

pub static AIR: BlockRef = &Block::new(
    0,
    Identifier::vanilla_static("air"),
    BlockBehaviourProperties::air(),
    &[],
);

pub static CAVE_AIR: BlockRef = &Block::new(
    1,
    Identifier::vanilla_static("cave_air"),
    BlockBehaviourProperties::air(),
    &[],
);

pub static VOID_AIR: BlockRef = &Block::new(
    2,
    Identifier::vanilla_static("void_air"),
    BlockBehaviourProperties::air(),
    &[],
);

pub static STONE: BlockRef = &Block::new(
    3,
    Identifier::vanilla_static("stone"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static GRANITE: BlockRef = &Block::new(
    4,
    Identifier::vanilla_static("granite"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static DIORITE: BlockRef = &Block::new(
    5,
    Identifier::vanilla_static("diorite"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static ANDESITE: BlockRef = &Block::new(
    6,
    Identifier::vanilla_static("andesite"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static BEDROCK: BlockRef = &Block::new(
    7,
    Identifier::vanilla_static("bedrock"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static DIRT: BlockRef = &Block::new(
    8,
    Identifier::vanilla_static("dirt"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static COARSE_DIRT: BlockRef = &Block::new(
    9,
    Identifier::vanilla_static("coarse_dirt"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static GRASS_BLOCK: BlockRef = &Block::new(
    10,
    Identifier::vanilla_static("grass_block"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static SAND: BlockRef = &Block::new(
    11,
    Identifier::vanilla_static("sand"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static RED_SAND: BlockRef = &Block::new(
    12,
    Identifier::vanilla_static("red_sand"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static GRAVEL: BlockRef = &Block::new(
    13,
    Identifier::vanilla_static("gravel"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static WHITE_TERRACOTTA: BlockRef = &Block::new(
    14,
    Identifier::vanilla_static("white_terracotta"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static OAK_LOG: BlockRef = &Block::new(
    15,
    Identifier::vanilla_static("oak_log"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static OAK_LEAVES: BlockRef = &Block::new(
    16,
    Identifier::vanilla_static("oak_leaves"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static ICE: BlockRef = &Block::new(
    17,
    Identifier::vanilla_static("ice"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static PACKED_ICE: BlockRef = &Block::new(
    18,
    Identifier::vanilla_static("packed_ice"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static OBSIDIAN: BlockRef = &Block::new(
    19,
    Identifier::vanilla_static("obsidian"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static BARRIER: BlockRef = &Block::new(
    20,
    Identifier::vanilla_static("barrier"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static HONEY_BLOCK: BlockRef = &Block::new(
    21,
    Identifier::vanilla_static("honey_block"),
    BlockBehaviourProperties::partial(),
    &[],
);

pub static SOUL_SAND: BlockRef = &Block::new(
    22,
    Identifier::vanilla_static("soul_sand"),
    BlockBehaviourProperties::partial(),
    &[],
);

pub static SNOW_BLOCK: BlockRef = &Block::new(
    23,
    Identifier::vanilla_static("snow_block"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static WATER: BlockRef = &Block::new(
    24,
    Identifier::vanilla_static("water"),
    BlockBehaviourProperties::liquid(FluidId::Water),
    LEVEL,
);

pub static LAVA: BlockRef = &Block::new(
    25,
    Identifier::vanilla_static("lava"),
    BlockBehaviourProperties::liquid(FluidId::Lava),
    LEVEL,
);

pub static SHORT_GRASS: BlockRef = &Block::new(
    26,
    Identifier::vanilla_static("short_grass"),
    BlockBehaviourProperties::plant().replaceable(),
    &[],
);

pub static FERN: BlockRef = &Block::new(
    27,
    Identifier::vanilla_static("fern"),
    BlockBehaviourProperties::plant().replaceable(),
    &[],
);

pub static DEAD_BUSH: BlockRef = &Block::new(
    28,
    Identifier::vanilla_static("dead_bush"),
    BlockBehaviourProperties::plant().replaceable(),
    &[],
);

pub static POPPY: BlockRef = &Block::new(
    29,
    Identifier::vanilla_static("poppy"),
    BlockBehaviourProperties::plant(),
    &[],
);

pub static SEAGRASS: BlockRef = &Block::new(
    30,
    Identifier::vanilla_static("seagrass"),
    BlockBehaviourProperties::plant().replaceable().waterlogged(),
    &[],
);

pub static TALL_GRASS: BlockRef = &Block::new(
    31,
    Identifier::vanilla_static("tall_grass"),
    BlockBehaviourProperties::plant().replaceable().double_plant(),
    HALF,
);

pub static LARGE_FERN: BlockRef = &Block::new(
    32,
    Identifier::vanilla_static("large_fern"),
    BlockBehaviourProperties::plant().replaceable().double_plant(),
    HALF,
);

pub static SUNFLOWER: BlockRef = &Block::new(
    33,
    Identifier::vanilla_static("sunflower"),
    BlockBehaviourProperties::plant().replaceable().double_plant(),
    HALF,
);

pub static LILAC: BlockRef = &Block::new(
    34,
    Identifier::vanilla_static("lilac"),
    BlockBehaviourProperties::plant().replaceable().double_plant(),
    HALF,
);

pub static ROSE_BUSH: BlockRef = &Block::new(
    35,
    Identifier::vanilla_static("rose_bush"),
    BlockBehaviourProperties::plant().replaceable().double_plant(),
    HALF,
);

pub static PEONY: BlockRef = &Block::new(
    36,
    Identifier::vanilla_static("peony"),
    BlockBehaviourProperties::plant().replaceable().double_plant(),
    HALF,
);

pub static TALL_SEAGRASS: BlockRef = &Block::new(
    37,
    Identifier::vanilla_static("tall_seagrass"),
    BlockBehaviourProperties::plant().replaceable().waterlogged().double_plant(),
    HALF,
);

pub static SNOW: BlockRef = &Block::new(
    38,
    Identifier::vanilla_static("snow"),
    BlockBehaviourProperties::plant().replaceable(),
    LAYERS,
);

pub static SNOWY_DIRT: BlockRef = &Block::new(
    39,
    Identifier::new_static(FROST_NAMESPACE, "snowy_dirt"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static SNOWY_COARSE_DIRT: BlockRef = &Block::new(
    40,
    Identifier::new_static(FROST_NAMESPACE, "snowy_coarse_dirt"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static SNOWY_SAND: BlockRef = &Block::new(
    41,
    Identifier::new_static(FROST_NAMESPACE, "snowy_sand"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static SNOWY_RED_SAND: BlockRef = &Block::new(
    42,
    Identifier::new_static(FROST_NAMESPACE, "snowy_red_sand"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static SNOWY_GRAVEL: BlockRef = &Block::new(
    43,
    Identifier::new_static(FROST_NAMESPACE, "snowy_gravel"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static SNOWY_STONE: BlockRef = &Block::new(
    44,
    Identifier::new_static(FROST_NAMESPACE, "snowy_stone"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static SNOWY_GRANITE: BlockRef = &Block::new(
    45,
    Identifier::new_static(FROST_NAMESPACE, "snowy_granite"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static SNOWY_DIORITE: BlockRef = &Block::new(
    46,
    Identifier::new_static(FROST_NAMESPACE, "snowy_diorite"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static SNOWY_ANDESITE: BlockRef = &Block::new(
    47,
    Identifier::new_static(FROST_NAMESPACE, "snowy_andesite"),
    BlockBehaviourProperties::new(),
    &[],
);

pub static SNOWY_WHITE_TERRACOTTA: BlockRef = &Block::new(
    48,
    Identifier::new_static(FROST_NAMESPACE, "snowy_white_terracotta"),
    BlockBehaviourProperties::new(),
    &[],
);

/// Registers every block above, in id order.
pub fn register_vanilla_blocks(registry: &mut BlockRegistry) {
    registry.register(AIR);
    registry.register(CAVE_AIR);
    registry.register(VOID_AIR);
    registry.register(STONE);
    registry.register(GRANITE);
    registry.register(DIORITE);
    registry.register(ANDESITE);
    registry.register(BEDROCK);
    registry.register(DIRT);
    registry.register(COARSE_DIRT);
    registry.register(GRASS_BLOCK);
    registry.register(SAND);
    registry.register(RED_SAND);
    registry.register(GRAVEL);
    registry.register(WHITE_TERRACOTTA);
    registry.register(OAK_LOG);
    registry.register(OAK_LEAVES);
    registry.register(ICE);
    registry.register(PACKED_ICE);
    registry.register(OBSIDIAN);
    registry.register(BARRIER);
    registry.register(HONEY_BLOCK);
    registry.register(SOUL_SAND);
    registry.register(SNOW_BLOCK);
    registry.register(WATER);
    registry.register(LAVA);
    registry.register(SHORT_GRASS);
    registry.register(FERN);
    registry.register(DEAD_BUSH);
    registry.register(POPPY);
    registry.register(SEAGRASS);
    registry.register(TALL_GRASS);
    registry.register(LARGE_FERN);
    registry.register(SUNFLOWER);
    registry.register(LILAC);
    registry.register(ROSE_BUSH);
    registry.register(PEONY);
    registry.register(TALL_SEAGRASS);
    registry.register(SNOW);
    registry.register(SNOWY_DIRT);
    registry.register(SNOWY_COARSE_DIRT);
    registry.register(SNOWY_SAND);
    registry.register(SNOWY_RED_SAND);
    registry.register(SNOWY_GRAVEL);
    registry.register(SNOWY_STONE);
    registry.register(SNOWY_GRANITE);
    registry.register(SNOWY_DIORITE);
    registry.register(SNOWY_ANDESITE);
    registry.register(SNOWY_WHITE_TERRACOTTA);
}
