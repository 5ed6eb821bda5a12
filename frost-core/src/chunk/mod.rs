//! Chunk storage used while a chunk is still being generated.

pub mod chunk_generator;
pub mod flat_chunk_generator;
pub mod heightmap;
pub mod paletted_container;
pub mod proto_chunk;
pub mod section;
