//! World generation steps that run after the terrain exists.

pub mod feature;
