//! The `frost_config.json5` file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{fs, io};

use frost_registry::{REGISTRY, SubstitutionError, SubstitutionTable, TerrainSubstitutions};
use frost_utils::Identifier;
use frost_utils::random::{RandomKind, parse_seed};
use serde::Deserialize;

use crate::chunk::flat_chunk_generator::FlatChunkGenerator;
use crate::worldgen::feature::freeze_top_layer::ExposurePropagation;

/// The config written when none exists.
pub const DEFAULT_CONFIG: &str = include_str!("../../package-content/frost_config.json5");

/// Largest supported world height.
pub const MAX_HEIGHT: u32 = 4064;
/// Largest supported decoration radius, in chunks.
pub const MAX_CHUNK_RADIUS: u8 = 8;

/// Errors raised while loading the config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// The config path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// The file is not valid JSON5 or does not match the expected shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
    /// A flat layer names a block that does not exist.
    #[error("unknown block `{0}` in flat_layers")]
    UnknownBlock(Identifier),
    /// A substitution table is broken.
    #[error("invalid substitution table: {0}")]
    Substitution(#[from] SubstitutionError),
}

/// Settings for a decoration run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrostConfig {
    /// World seed, see [`parse_seed`].
    pub seed: String,
    /// Generator algorithm.
    #[serde(default)]
    pub random: RandomKind,
    /// How exposure spreads under overhangs.
    #[serde(default)]
    pub propagation: ExposurePropagation,
    /// Chunks to decorate in every direction around the origin chunk.
    pub chunk_radius: u8,
    /// The lowest block y coordinate.
    pub min_y: i32,
    /// Number of block layers.
    pub height: u32,
    /// Terrain layers from the bottom up.
    pub flat_layers: Vec<Identifier>,
    /// Ground replaced under new snow.
    pub snowy_terrain: BTreeMap<String, String>,
    /// Ground replaced under any open air.
    pub snowy_special_terrain: BTreeMap<String, String>,
    /// Default log filter directive.
    pub log_level: String,
}

impl FrostConfig {
    /// Loads the config at `path`, writing the default one first if the
    /// file does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if path.exists() {
            let config_str = fs::read_to_string(path).map_err(io_error)?;
            return Self::from_json5(&config_str);
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, DEFAULT_CONFIG).map_err(io_error)?;
        log::info!("Wrote default config to {}", path.display());
        Ok(Self::default())
    }

    /// Parses and validates a config.
    pub fn from_json5(text: &str) -> Result<Self, ConfigError> {
        let config: FrostConfig = serde_json5::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks ranges and that every block identifier resolves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.height % 16 != 0 || self.height > MAX_HEIGHT {
            return Err(ConfigError::Invalid(
                "height must be a positive multiple of 16 of at most 4064",
            ));
        }
        if self.min_y % 16 != 0 {
            return Err(ConfigError::Invalid("min_y must be a multiple of 16"));
        }
        if i64::from(self.min_y) + i64::from(self.height) > i64::from(i32::MAX) {
            return Err(ConfigError::Invalid("min_y + height must fit in an i32"));
        }
        if self.chunk_radius > MAX_CHUNK_RADIUS {
            return Err(ConfigError::Invalid("chunk_radius must be in range 0..=8"));
        }
        if self.flat_layers.is_empty() {
            return Err(ConfigError::Invalid("flat_layers must not be empty"));
        }
        if self.flat_layers.len() >= self.height as usize {
            return Err(ConfigError::Invalid(
                "flat_layers must leave room for at least one layer of air",
            ));
        }
        self.flat_generator()?;
        self.substitutions()?;
        Ok(())
    }

    /// The numeric world seed, or `None` for a random one.
    #[must_use]
    pub fn world_seed(&self) -> Option<u64> {
        parse_seed(&self.seed)
    }

    /// Builds the flat terrain generator.
    pub fn flat_generator(&self) -> Result<FlatChunkGenerator, ConfigError> {
        let layers = self
            .flat_layers
            .iter()
            .map(|key| {
                REGISTRY
                    .blocks
                    .by_key(key)
                    .map(|block| block.default_state())
                    .ok_or_else(|| ConfigError::UnknownBlock(key.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FlatChunkGenerator::new(layers))
    }

    /// Builds the substitution tables.
    pub fn substitutions(&self) -> Result<TerrainSubstitutions, ConfigError> {
        let table = |entries: &BTreeMap<String, String>| {
            SubstitutionTable::from_identifiers(
                entries.iter().map(|(from, to)| (from.as_str(), to.as_str())),
            )
        };
        Ok(TerrainSubstitutions::new(
            table(&self.snowy_terrain)?,
            table(&self.snowy_special_terrain)?,
        ))
    }
}

impl Default for FrostConfig {
    fn default() -> Self {
        let pairs = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
                .collect()
        };
        Self {
            seed: "frost".to_string(),
            random: RandomKind::Legacy,
            propagation: ExposurePropagation::VisitedOnce,
            chunk_radius: 2,
            min_y: 0,
            height: 128,
            flat_layers: [
                "bedrock",
                "stone",
                "stone",
                "dirt",
                "dirt",
                "grass_block",
            ]
            .into_iter()
            .map(Identifier::vanilla_static)
            .collect(),
            snowy_terrain: pairs(&[
                ("minecraft:dirt", "frost:snowy_dirt"),
                ("minecraft:coarse_dirt", "frost:snowy_coarse_dirt"),
                ("minecraft:sand", "frost:snowy_sand"),
                ("minecraft:red_sand", "frost:snowy_red_sand"),
                ("minecraft:gravel", "frost:snowy_gravel"),
            ]),
            snowy_special_terrain: pairs(&[
                ("minecraft:stone", "frost:snowy_stone"),
                ("minecraft:granite", "frost:snowy_granite"),
                ("minecraft:diorite", "frost:snowy_diorite"),
                ("minecraft:andesite", "frost:snowy_andesite"),
                ("minecraft:white_terracotta", "frost:snowy_white_terracotta"),
            ]),
            log_level: "info".to_string(),
        }
    }
}
