//! Blocks, their behaviour flags and the state id space.

pub mod block_state_ext;
pub mod properties;
pub mod vanilla_blocks;

use frost_utils::{BlockStateId, Identifier};
use rustc_hash::FxHashMap;

use crate::RegistryExt;
use crate::fluid::FluidId;
use properties::Property;

/// Index of a block in the registry. Dense, starting at 0 for air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u16);

/// Static reference to a registered block.
pub type BlockRef = &'static Block;

/// Physical classification of a block, roughly vanilla's `Material` flags
/// and the bits of shape information world generation looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct BlockBehaviourProperties {
    /// Empty space.
    pub is_air: bool,
    /// May be silently overwritten by decoration.
    pub replaceable: bool,
    /// Stops entity movement; feeds the motion blocking heightmap.
    pub blocks_motion: bool,
    /// A full cube, so every face is sturdy.
    pub full_cube: bool,
    /// The fluid this block is made of, for liquid blocks.
    pub liquid: Option<FluidId>,
    /// Always holds a water source, like seagrass.
    pub waterlogged: bool,
    /// One half of a two block tall plant.
    pub double_plant: bool,
}

impl BlockBehaviourProperties {
    /// A solid full cube.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_air: false,
            replaceable: false,
            blocks_motion: true,
            full_cube: true,
            liquid: None,
            waterlogged: false,
            double_plant: false,
        }
    }

    /// Empty space.
    #[must_use]
    pub const fn air() -> Self {
        Self::new().no_collision().replaceable().set_air()
    }

    /// A liquid made of `fluid`.
    #[must_use]
    pub const fn liquid(fluid: FluidId) -> Self {
        let mut props = Self::new().no_collision().replaceable();
        props.liquid = Some(fluid);
        props
    }

    /// A non colliding plant.
    #[must_use]
    pub const fn plant() -> Self {
        Self::new().no_collision()
    }

    /// Solid but not a full cube, like honey or soul sand.
    #[must_use]
    pub const fn partial() -> Self {
        let mut props = Self::new();
        props.full_cube = false;
        props
    }

    /// Marks the block as replaceable.
    #[must_use]
    pub const fn replaceable(mut self) -> Self {
        self.replaceable = true;
        self
    }

    /// Removes the collision shape.
    #[must_use]
    pub const fn no_collision(mut self) -> Self {
        self.blocks_motion = false;
        self.full_cube = false;
        self
    }

    /// Marks the block as permanently waterlogged.
    #[must_use]
    pub const fn waterlogged(mut self) -> Self {
        self.waterlogged = true;
        self
    }

    /// Marks the block as half of a double plant.
    #[must_use]
    pub const fn double_plant(mut self) -> Self {
        self.double_plant = true;
        self
    }

    const fn set_air(mut self) -> Self {
        self.is_air = true;
        self
    }
}

impl Default for BlockBehaviourProperties {
    fn default() -> Self {
        Self::new()
    }
}

/// A block type.
#[derive(Debug)]
pub struct Block {
    /// The registry index. Must match the registration order.
    pub id: BlockId,
    /// The block's identifier.
    pub key: Identifier,
    /// Physical behaviour.
    pub config: BlockBehaviourProperties,
    /// State properties, most significant first.
    pub properties: &'static [Property],
}

impl Block {
    /// Creates a block.
    #[must_use]
    pub const fn new(
        id: u16,
        key: Identifier,
        config: BlockBehaviourProperties,
        properties: &'static [Property],
    ) -> Self {
        Self {
            id: BlockId(id),
            key,
            config,
            properties,
        }
    }

    /// Number of states this block spans.
    #[must_use]
    pub fn state_count(&self) -> u16 {
        self.properties
            .iter()
            .map(|property| property.value_count())
            .product()
    }

    /// The default state of this block.
    ///
    /// # Panics
    /// If the block was not registered in the global registry.
    #[must_use]
    pub fn default_state(&'static self) -> BlockStateId {
        crate::REGISTRY.blocks.default_state(self)
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Block {}

/// Maps blocks to contiguous ranges of state ids.
pub struct BlockRegistry {
    blocks: Vec<BlockRef>,
    base_states: Vec<u16>,
    state_to_block: Vec<BlockId>,
    by_key: FxHashMap<Identifier, BlockId>,
    allows_registering: bool,
}

impl BlockRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            base_states: Vec::new(),
            state_to_block: Vec::new(),
            by_key: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Registers a block, assigning it the next range of state ids.
    ///
    /// # Panics
    /// If the registry is frozen, or the block id does not match the
    /// registration order, or the key is already taken.
    pub fn register(&mut self, block: BlockRef) {
        assert!(
            self.allows_registering,
            "Cannot register block after registry is frozen"
        );
        assert_eq!(
            usize::from(block.id.0),
            self.blocks.len(),
            "Block {} registered out of order",
            block.key
        );
        let previous = self.by_key.insert(block.key.clone(), block.id);
        assert!(previous.is_none(), "Block {} registered twice", block.key);

        self.base_states.push(self.state_to_block.len() as u16);
        for _ in 0..block.state_count() {
            self.state_to_block.push(block.id);
        }
        self.blocks.push(block);
    }

    /// Looks up a block by id.
    #[must_use]
    pub fn by_id(&self, id: BlockId) -> Option<BlockRef> {
        self.blocks.get(usize::from(id.0)).copied()
    }

    /// Looks up a block by identifier.
    #[must_use]
    pub fn by_key(&self, key: &Identifier) -> Option<BlockRef> {
        self.by_key.get(key).and_then(|id| self.by_id(*id))
    }

    /// The block a state belongs to, if the state id is valid.
    #[must_use]
    pub fn by_state(&self, state: BlockStateId) -> Option<BlockRef> {
        self.state_to_block
            .get(usize::from(state.0))
            .and_then(|id| self.by_id(*id))
    }

    /// The first state id of the block.
    ///
    /// # Panics
    /// If the block is not registered here.
    #[must_use]
    pub fn base_state(&self, block: BlockRef) -> u16 {
        self.base_states[usize::from(block.id.0)]
    }

    /// The default state of the block.
    #[must_use]
    pub fn default_state(&self, block: BlockRef) -> BlockStateId {
        BlockStateId(self.base_state(block))
    }

    /// Total number of states.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.state_to_block.len()
    }

    /// Number of registered blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no block is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates over every block in registration order.
    pub fn iter(&self) -> impl Iterator<Item = BlockRef> + '_ {
        self.blocks.iter().copied()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryExt for BlockRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}
