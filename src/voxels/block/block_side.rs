//! # Block Side Module
//!
//! The six faces of a voxel block, their neighbor offsets, and the face
//! class used to pick a texture tile.

/// Represents the six faces of a voxel block.
///
/// The variant values index the per-face winding tables in the mesher, so
/// the order is fixed: [TOP, BOTTOM, NORTH, SOUTH, WEST, EAST].
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The top face (facing positive Y)
    TOP = 0,

    /// The bottom face (facing negative Y)
    BOTTOM = 1,

    /// The north face (facing negative Z)
    NORTH = 2,

    /// The south face (facing positive Z)
    SOUTH = 3,

    /// The west face (facing negative X)
    WEST = 4,

    /// The east face (facing positive X)
    EAST = 5,
}

/// Which texture tile a face samples: the top tile, the bottom tile, or the
/// shared side tile.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum FaceClass {
    /// The dedicated top tile.
    Top,
    /// The dedicated bottom tile.
    Bottom,
    /// The tile shared by the four lateral faces.
    Side,
}

impl BlockSide {
    /// Returns all six block faces in winding-table order.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::TOP,
            BlockSide::BOTTOM,
            BlockSide::NORTH,
            BlockSide::SOUTH,
            BlockSide::WEST,
            BlockSide::EAST,
        ]
    }

    /// Returns the world-space offset to the neighbor cell across this face.
    pub fn neighbor_offset(&self) -> (i32, i32, i32) {
        match self {
            BlockSide::TOP => (0, 1, 0),
            BlockSide::BOTTOM => (0, -1, 0),
            BlockSide::NORTH => (0, 0, -1),
            BlockSide::SOUTH => (0, 0, 1),
            BlockSide::WEST => (-1, 0, 0),
            BlockSide::EAST => (1, 0, 0),
        }
    }

    /// Returns the texture tile class this face samples from.
    pub fn face_class(&self) -> FaceClass {
        match self {
            BlockSide::TOP => FaceClass::Top,
            BlockSide::BOTTOM => FaceClass::Bottom,
            _ => FaceClass::Side,
        }
    }
}
