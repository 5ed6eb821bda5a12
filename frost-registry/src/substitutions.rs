//! Terrain substitution tables.
//!
//! Snow changes the look of the ground it lands on. The *snowy terrain* table
//! maps loose ground (dirt, sand, gravel) to a snow covered variant and is
//! applied under freshly placed snow layers. The *snowy special terrain* table
//! maps rock faces to a frosted variant and is applied under any open air,
//! whether or not snow could settle there.

use frost_utils::Identifier;
use rustc_hash::FxHashMap;

use crate::REGISTRY;
use crate::blocks::{BlockId, BlockRef, vanilla_blocks};

/// Errors raised while building a table from identifiers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubstitutionError {
    /// An identifier does not parse.
    #[error("invalid block identifier `{0}`: {1}")]
    InvalidIdentifier(String, String),
    /// An identifier names no registered block.
    #[error("unknown block `{0}`")]
    UnknownBlock(Identifier),
    /// A block is mapped to itself.
    #[error("block `{0}` is mapped to itself")]
    SelfMapping(Identifier),
}

/// An immutable mapping from a bare block to its replacement.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    entries: FxHashMap<BlockId, BlockRef>,
}

impl SubstitutionTable {
    /// Builds a table from block pairs. Later pairs win on duplicate keys.
    #[must_use]
    pub fn from_pairs(pairs: &[(BlockRef, BlockRef)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(original, replacement)| (original.id, *replacement))
                .collect(),
        }
    }

    /// Builds a table from textual identifiers, resolving them in the
    /// global registry.
    pub fn from_identifiers<'a, I>(pairs: I) -> Result<Self, SubstitutionError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut entries = FxHashMap::default();
        for (original, replacement) in pairs {
            let original = resolve(original)?;
            let replacement = resolve(replacement)?;
            if original == replacement {
                return Err(SubstitutionError::SelfMapping(original.key.clone()));
            }
            entries.insert(original.id, replacement);
        }
        Ok(Self { entries })
    }

    /// The replacement for `block`, if it has one.
    #[must_use]
    pub fn lookup(&self, block: BlockRef) -> Option<BlockRef> {
        self.entries.get(&block.id).copied()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn resolve(text: &str) -> Result<BlockRef, SubstitutionError> {
    let key: Identifier = text
        .parse()
        .map_err(|err| SubstitutionError::InvalidIdentifier(text.to_string(), err))?;
    REGISTRY
        .blocks
        .by_key(&key)
        .ok_or(SubstitutionError::UnknownBlock(key))
}

/// The two tables the freeze pass consults.
#[derive(Debug, Clone, Default)]
pub struct TerrainSubstitutions {
    /// Applied under a newly placed snow layer.
    pub snowy_terrain: SubstitutionTable,
    /// Applied under any air block the pass visits.
    pub snowy_special_terrain: SubstitutionTable,
}

impl TerrainSubstitutions {
    /// Creates a pair of tables.
    #[must_use]
    pub fn new(snowy_terrain: SubstitutionTable, snowy_special_terrain: SubstitutionTable) -> Self {
        Self {
            snowy_terrain,
            snowy_special_terrain,
        }
    }

    /// The built in tables.
    #[must_use]
    pub fn vanilla() -> Self {
        Self::new(
            SubstitutionTable::from_pairs(&[
                (vanilla_blocks::DIRT, vanilla_blocks::SNOWY_DIRT),
                (vanilla_blocks::COARSE_DIRT, vanilla_blocks::SNOWY_COARSE_DIRT),
                (vanilla_blocks::SAND, vanilla_blocks::SNOWY_SAND),
                (vanilla_blocks::RED_SAND, vanilla_blocks::SNOWY_RED_SAND),
                (vanilla_blocks::GRAVEL, vanilla_blocks::SNOWY_GRAVEL),
            ]),
            SubstitutionTable::from_pairs(&[
                (vanilla_blocks::STONE, vanilla_blocks::SNOWY_STONE),
                (vanilla_blocks::GRANITE, vanilla_blocks::SNOWY_GRANITE),
                (vanilla_blocks::DIORITE, vanilla_blocks::SNOWY_DIORITE),
                (vanilla_blocks::ANDESITE, vanilla_blocks::SNOWY_ANDESITE),
                (
                    vanilla_blocks::WHITE_TERRACOTTA,
                    vanilla_blocks::SNOWY_WHITE_TERRACOTTA,
                ),
            ]),
        )
    }
}
