//! # Block Kind Module
//!
//! The enumeration of block kinds stored in the voxel grid. Storage keeps
//! raw [`BlockId`](super::BlockId) bytes; this enum is the typed view used
//! when constructing worlds and reading registry metadata.

use num_derive::FromPrimitive;

use super::BlockId;

/// Enumerates the block kinds of the voxel world.
///
/// The discriminants are the stored block ids: zero is air, everything else
/// is a material. `FromPrimitive` allows recovering the typed kind from a
/// raw stored byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u8)]
pub enum BlockKind {
    /// Empty space; non-solid and never meshed.
    AIR = 0,

    /// The grass-covered surface block of generated terrain.
    GRASS = 1,

    /// Subsoil directly beneath the surface.
    DIRT = 2,

    /// Bedrock material filling the deep terrain column.
    STONE = 3,

    /// Transparent block; opaque neighbors still render their faces against it.
    GLASS = 4,

    /// Transparent liquid block.
    WATER = 5,
}

impl BlockKind {
    /// Converts a stored block id back into a typed kind.
    ///
    /// Returns `None` for ids with no registered kind, which callers treat
    /// the same as air (no geometry, no collision).
    pub fn from_id(id: BlockId) -> Option<Self> {
        num::FromPrimitive::from_u8(id)
    }

    /// Returns the stored representation of this kind.
    pub fn id(self) -> BlockId {
        self as BlockId
    }
}
