//! Runs a decoration pass configured by `config/frost_config.json5`.

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use frost::{decorate, logger};
use frost_core::FrostConfig;

const CONFIG_PATH: &str = "config/frost_config.json5";

fn main() -> anyhow::Result<()> {
    let config = FrostConfig::load_or_create(Path::new(CONFIG_PATH))
        .with_context(|| format!("failed to load {CONFIG_PATH}"))?;
    logger::init(&config.log_level)?;

    let start = Instant::now();
    let decoration = decorate(&config)?;
    let summary = decoration.summary;
    log::info!(
        "Done in {:?} (seed {}): {} snow, {} ice, {} ice ticks, {} obsidian, {} frosted, {} covered",
        start.elapsed(),
        decoration.seed,
        summary.snow,
        summary.ice,
        summary.ticks,
        summary.obsidian,
        summary.frosted,
        summary.covered,
    );
    log::info!(
        "Walked {} layers, {} tiles ran out of exposure above the bottom of the world",
        summary.layers,
        summary.exhausted
    );
    Ok(())
}
