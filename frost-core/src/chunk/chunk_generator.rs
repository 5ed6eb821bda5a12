//! This module contains the `ChunkGenerator` trait, which is used to generate chunks.

use crate::chunk::proto_chunk::ProtoChunk;

/// A trait for generating chunks.
pub trait ChunkGenerator: Send + Sync {
    /// Fills the chunk with its base terrain.
    fn fill_from_noise(&self, chunk: &mut ProtoChunk);
}
