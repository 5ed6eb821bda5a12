//! Features decorate a chunk that already has its terrain.

use frost_utils::BlockPos;
use frost_utils::random::Random;

use crate::world::WorldGenLevel;

pub mod freeze_top_layer;

pub use freeze_top_layer::{FreezeSummary, FreezeTopLayerFeature};

/// A decoration step placed once per chunk.
pub trait Feature: Send + Sync {
    /// Places the feature with `origin` as the lowest corner of the chunk.
    /// Returns whether anything was attempted.
    fn place(
        &self,
        level: &mut dyn WorldGenLevel,
        random: &mut dyn Random,
        origin: BlockPos,
    ) -> bool;
}
