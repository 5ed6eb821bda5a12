//! # Frost Core
//!
//! The world store a chunk is decorated in, and the decoration that puts
//! winter on top of it: snow layers, frozen water and frosted ground.

pub mod behavior;
pub mod chunk;
pub mod config;
pub mod ticks;
pub mod world;
pub mod worldgen;

pub use config::{ConfigError, FrostConfig};
pub use world::{UpdateFlags, WorldGenLevel, WorldGenRegion};
pub use worldgen::feature::{Feature, FreezeSummary, FreezeTopLayerFeature};
