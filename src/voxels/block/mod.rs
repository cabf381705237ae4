//! # Block Module
//!
//! Block kinds, their human-readable names, and their opacity
//! classification. The registry here is an immutable value handed to the
//! mesher and the terrain generators at construction time; nothing in this
//! crate reads block metadata through process-wide mutable state.

use phf::phf_map;

use block_kind::BlockKind;

pub mod block_kind;
pub mod block_side;

/// The underlying integer type used to represent block kinds in storage.
/// Zero is always air.
pub type BlockId = u8;

/// The block id of empty space.
pub const AIR: BlockId = 0;

/// The face-name of the one transparent kind that opaque neighbors still
/// render their faces against. See [`BlockRegistry::is_glass`].
pub const GLASS_FACE_NAME: &str = "glass";

/// Opacity classification of a block kind.
///
/// Transparent kinds (glass, water) still occlude like-kind neighbors, but
/// an opaque block keeps its face when the far side is glass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Opacity {
    /// Fully opaque; neighbors behind this block never render their shared face.
    Opaque,
    /// See-through; treated specially by the face visibility rule.
    Transparent,
}

/// Static per-kind metadata: name and opacity class.
#[derive(Copy, Clone, Debug)]
pub struct BlockInfo {
    /// The kind this entry describes.
    pub kind: BlockKind,
    /// Stable human-readable name, also the key for texture lookups.
    pub name: &'static str,
    /// Opacity classification used by face culling.
    pub opacity: Opacity,
}

/// The built-in block table, indexed implicitly by block id order.
static BLOCK_TABLE: [BlockInfo; 5] = [
    BlockInfo {
        kind: BlockKind::GRASS,
        name: "grass",
        opacity: Opacity::Opaque,
    },
    BlockInfo {
        kind: BlockKind::DIRT,
        name: "dirt",
        opacity: Opacity::Opaque,
    },
    BlockInfo {
        kind: BlockKind::STONE,
        name: "stone",
        opacity: Opacity::Opaque,
    },
    BlockInfo {
        kind: BlockKind::GLASS,
        name: "glass",
        opacity: Opacity::Transparent,
    },
    BlockInfo {
        kind: BlockKind::WATER,
        name: "water",
        opacity: Opacity::Transparent,
    },
];

/// Compile-time map from block name to block id, for name-driven tooling
/// (block placement commands, atlas tables).
static BLOCKS_BY_NAME: phf::Map<&'static str, BlockId> = phf_map! {
    "grass" => 1,
    "dirt" => 2,
    "stone" => 3,
    "glass" => 4,
    "water" => 5,
};

/// Immutable lookup table over the known block kinds.
///
/// Constructed once and passed by reference to the mesher and to terrain
/// generators. Lookups on unregistered ids return `None` rather than
/// panicking; callers degrade to "no geometry" for such ids.
#[derive(Copy, Clone, Debug, Default)]
pub struct BlockRegistry;

impl BlockRegistry {
    /// Creates the registry over the built-in block table.
    pub fn new() -> Self {
        BlockRegistry
    }

    /// Looks up the metadata entry for a block id.
    ///
    /// Returns `None` for air and for ids outside the table.
    pub fn info(&self, id: BlockId) -> Option<&'static BlockInfo> {
        if id == AIR {
            return None;
        }
        BLOCK_TABLE.get(id as usize - 1)
    }

    /// Returns the name of a registered block id.
    pub fn name_of(&self, id: BlockId) -> Option<&'static str> {
        self.info(id).map(|info| info.name)
    }

    /// Returns the opacity class of a registered block id.
    pub fn opacity_of(&self, id: BlockId) -> Option<Opacity> {
        self.info(id).map(|info| info.opacity)
    }

    /// Returns whether the id names a registered opaque block.
    pub fn is_opaque(&self, id: BlockId) -> bool {
        self.opacity_of(id) == Some(Opacity::Opaque)
    }

    /// Returns whether the id is the glass kind, the one transparent kind
    /// that opaque blocks still render their faces against.
    pub fn is_glass(&self, id: BlockId) -> bool {
        self.name_of(id) == Some(GLASS_FACE_NAME)
    }

    /// Resolves a block name to its id.
    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        BLOCKS_BY_NAME.get(name).copied()
    }
}
