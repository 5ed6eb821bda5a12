//! This module contains the `ChunkSection` struct.

use frost_registry::BlockStateExt;
use frost_utils::BlockStateId;

use crate::chunk::paletted_container::BlockPalette;

/// A 16 block tall slice of a chunk.
#[derive(Debug, Clone)]
pub struct ChunkSection {
    /// The block states in the section.
    pub states: BlockPalette,
}

impl ChunkSection {
    /// Creates a new chunk section.
    #[must_use]
    pub fn new(states: BlockPalette) -> Self {
        Self { states }
    }

    /// Creates a new empty chunk section.
    #[must_use]
    pub fn new_empty() -> Self {
        Self {
            states: BlockPalette::Homogeneous(BlockStateId(0)),
        }
    }

    /// Whether the section holds nothing but air.
    #[must_use]
    pub fn has_only_air(&self) -> bool {
        match &self.states {
            BlockPalette::Homogeneous(state) => state.is_air(),
            BlockPalette::Heterogeneous(_) => self.non_empty_block_count() == 0,
        }
    }

    /// Number of blocks in the section that are not air.
    #[must_use]
    pub fn non_empty_block_count(&self) -> usize {
        self.states.count_matching(|state| !state.is_air())
    }
}

impl Default for ChunkSection {
    fn default() -> Self {
        Self::new_empty()
    }
}
