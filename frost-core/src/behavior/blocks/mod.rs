//! Block behavior implementations for vanilla blocks.

mod snow_layer_block;

pub use snow_layer_block::{MAX_LAYERS, SnowLayerBlock};
