//! Per block behaviour looked up by block id.

use std::sync::LazyLock;

use frost_registry::{BlockId, BlockRef, REGISTRY, vanilla_blocks};
use rustc_hash::FxHashMap;

pub mod block;
pub mod blocks;

pub use block::{BlockBehaviour, DefaultBlockBehaviour};

/// Maps blocks to the behaviour that overrides the defaults.
pub struct BlockBehaviorRegistry {
    behaviors: FxHashMap<BlockId, Box<dyn BlockBehaviour>>,
    default: DefaultBlockBehaviour,
}

impl BlockBehaviorRegistry {
    /// Creates a registry where every block uses the default behaviour.
    #[must_use]
    pub fn new() -> Self {
        Self {
            behaviors: FxHashMap::default(),
            default: DefaultBlockBehaviour,
        }
    }

    /// Overrides the behaviour of `block`.
    pub fn register(&mut self, block: BlockRef, behavior: Box<dyn BlockBehaviour>) {
        if self.behaviors.insert(block.id, behavior).is_some() {
            log::warn!("Behaviour for {} registered twice", block.key);
        }
    }

    /// The behaviour of `block`.
    #[must_use]
    pub fn get_behavior(&self, block: BlockRef) -> &dyn BlockBehaviour {
        self.behaviors
            .get(&block.id)
            .map_or(&self.default as &dyn BlockBehaviour, Box::as_ref)
    }
}

impl Default for BlockBehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn register_block_behaviors(registry: &mut BlockBehaviorRegistry) {
    registry.register(
        vanilla_blocks::SNOW,
        Box::new(blocks::SnowLayerBlock::new(vanilla_blocks::SNOW)),
    );
}

/// Behaviours of every registered block.
pub static BLOCK_BEHAVIORS: LazyLock<BlockBehaviorRegistry> = LazyLock::new(|| {
    let mut registry = BlockBehaviorRegistry::new();
    register_block_behaviors(&mut registry);
    log::debug!(
        "Registered {} block behaviours over {} blocks",
        registry.behaviors.len(),
        REGISTRY.blocks.len()
    );
    registry
});
