//! # Frost Registry
//!
//! The block catalog: block types, their state properties and behaviour
//! flags, fluids, and the terrain substitution tables used by the freeze pass.

use std::sync::LazyLock;

pub mod blocks;
pub mod fluid;
pub mod substitutions;

pub use blocks::block_state_ext::BlockStateExt;
pub use blocks::properties::{BlockStateProperties, Direction};
pub use blocks::{Block, BlockId, BlockRef, BlockRegistry, vanilla_blocks};
pub use fluid::{FluidId, FluidState};
pub use substitutions::{SubstitutionError, SubstitutionTable, TerrainSubstitutions};

/// Registries stop accepting entries once frozen.
pub trait RegistryExt {
    /// Rejects any further registration.
    fn freeze(&mut self);
}

/// Every registry used by frost.
pub struct Registry {
    /// Blocks and block states.
    pub blocks: BlockRegistry,
}

impl Registry {
    /// Builds and freezes the vanilla registries.
    #[must_use]
    pub fn new_vanilla() -> Self {
        let mut blocks = BlockRegistry::new();
        vanilla_blocks::register_vanilla_blocks(&mut blocks);
        blocks.freeze();
        log::debug!(
            "Registered {} blocks with {} states",
            blocks.len(),
            blocks.state_count()
        );
        Self { blocks }
    }
}

/// The global registry.
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new_vanilla);

#[cfg(test)]
mod tests {
    use frost_utils::{BlockStateId, Identifier};

    use super::*;

    #[test]
    fn test_air_is_state_zero() {
        assert_eq!(vanilla_blocks::AIR.default_state(), BlockStateId(0));
        assert!(BlockStateId(0).is_air());
    }

    #[test]
    fn test_state_ranges_are_contiguous() {
        let mut expected = 0u16;
        for block in REGISTRY.blocks.iter() {
            assert_eq!(REGISTRY.blocks.base_state(block), expected, "{}", block.key);
            expected += block.state_count();
        }
        assert_eq!(usize::from(expected), REGISTRY.blocks.state_count());
    }

    #[test]
    fn test_lookup_by_key() {
        let snow = REGISTRY
            .blocks
            .by_key(&Identifier::vanilla_static("snow"))
            .expect("snow is registered");
        assert_eq!(snow, vanilla_blocks::SNOW);
        assert!(
            REGISTRY
                .blocks
                .by_key(&Identifier::vanilla_static("snowy_dirt"))
                .is_none()
        );
    }

    #[test]
    fn test_unknown_state_is_air() {
        let unknown = BlockStateId(u16::MAX);
        assert_eq!(unknown.get_block(), vanilla_blocks::AIR);
    }
}
