//! # Frost Utils
//!
//! Value types, math helpers and random sources shared by the frost crates.

pub mod math;
pub mod random;
pub mod types;

pub use types::{BlockPos, BlockStateId, ChunkPos, Identifier};
