//! Convenience accessors on raw [`BlockStateId`]s.

use frost_utils::BlockStateId;

use crate::REGISTRY;
use crate::blocks::BlockRef;
use crate::blocks::properties::{BlockStateProperties, Direction, EnumProperty, IntProperty};
use crate::blocks::vanilla_blocks;
use crate::fluid::{FluidId, FluidState};

/// Where a property lives inside a block's state range.
struct PropertySlot {
    stride: u16,
    count: u16,
}

fn property_slot(block: BlockRef, name: &str) -> Option<PropertySlot> {
    let mut stride = 1;
    for property in block.properties.iter().rev() {
        let count = property.value_count();
        if property.name() == name {
            return Some(PropertySlot { stride, count });
        }
        stride *= count;
    }
    None
}

/// Block state queries backed by the global registry.
pub trait BlockStateExt: Copy {
    /// The block this state belongs to. Unknown ids resolve to air.
    fn get_block(self) -> BlockRef;

    /// Whether this state is one of the air blocks.
    fn is_air(self) -> bool {
        self.get_block().config.is_air
    }

    /// Whether decoration may overwrite this state.
    fn is_replaceable(self) -> bool {
        self.get_block().config.replaceable
    }

    /// Whether this state is a liquid block (water or lava at any level).
    fn is_liquid_block(self) -> bool {
        self.get_block().config.liquid.is_some()
    }

    /// Reads an integer property, `None` if the block does not have it.
    fn try_get_value(self, property: &IntProperty) -> Option<u8>;

    /// Returns this state with an integer property changed.
    /// Unknown properties or out of range values leave the state unchanged.
    #[must_use]
    fn set_value(self, property: &IntProperty, value: u8) -> Self;

    /// Reads an enum property, `None` if the block does not have it.
    fn try_get_enum(self, property: &EnumProperty) -> Option<&'static str>;

    /// Returns this state with an enum property changed.
    #[must_use]
    fn set_enum(self, property: &EnumProperty, value: &str) -> Self;

    /// The fluid contained in this state.
    fn fluid_state(self) -> FluidState;

    /// Whether the face pointing in `direction` can support something.
    fn is_face_sturdy(self, direction: Direction) -> bool;

    /// Whether this state stops movement or holds fluid, the definition the
    /// motion blocking heightmap uses.
    fn is_motion_blocking(self) -> bool {
        self.get_block().config.blocks_motion || !self.fluid_state().is_empty()
    }
}

impl BlockStateExt for BlockStateId {
    fn get_block(self) -> BlockRef {
        REGISTRY.blocks.by_state(self).unwrap_or_else(|| {
            log::warn!("Unknown block state id {}, treating it as air", self.0);
            vanilla_blocks::AIR
        })
    }

    fn try_get_value(self, property: &IntProperty) -> Option<u8> {
        let block = self.get_block();
        let slot = property_slot(block, property.name)?;
        let offset = self.0 - REGISTRY.blocks.base_state(block);
        Some(property.min + ((offset / slot.stride) % slot.count) as u8)
    }

    fn set_value(self, property: &IntProperty, value: u8) -> Self {
        if !(property.min..=property.max).contains(&value) {
            return self;
        }
        let block = self.get_block();
        let Some(slot) = property_slot(block, property.name) else {
            return self;
        };
        let base = REGISTRY.blocks.base_state(block);
        let offset = self.0 - base;
        let current = (offset / slot.stride) % slot.count;
        let index = u16::from(value - property.min);
        BlockStateId(base + offset - current * slot.stride + index * slot.stride)
    }

    fn try_get_enum(self, property: &EnumProperty) -> Option<&'static str> {
        let block = self.get_block();
        let slot = property_slot(block, property.name)?;
        let offset = self.0 - REGISTRY.blocks.base_state(block);
        property
            .values
            .get(usize::from((offset / slot.stride) % slot.count))
            .copied()
    }

    fn set_enum(self, property: &EnumProperty, value: &str) -> Self {
        let Some(index) = property.values.iter().position(|v| *v == value) else {
            return self;
        };
        let block = self.get_block();
        let Some(slot) = property_slot(block, property.name) else {
            return self;
        };
        let base = REGISTRY.blocks.base_state(block);
        let offset = self.0 - base;
        let current = (offset / slot.stride) % slot.count;
        BlockStateId(base + offset - current * slot.stride + index as u16 * slot.stride)
    }

    fn fluid_state(self) -> FluidState {
        let block = self.get_block();
        if let Some(fluid) = block.config.liquid {
            let level = self
                .try_get_value(&BlockStateProperties::LEVEL)
                .unwrap_or(0);
            return FluidState::from_block_level(fluid, level);
        }
        if block.config.waterlogged {
            return FluidState::source(FluidId::Water);
        }
        FluidState::EMPTY
    }

    fn is_face_sturdy(self, _direction: Direction) -> bool {
        let block = self.get_block();
        if block.config.full_cube {
            return true;
        }
        // A full stack of snow is a cube.
        block == vanilla_blocks::SNOW
            && self.try_get_value(&BlockStateProperties::LAYERS) == Some(8)
    }
}
