//! # Texture Atlas Lookup
//!
//! The UV seam between the mesher and the external texture collaborator.
//! The mesher asks for a face's 4 corner UV pairs by block name and face
//! class; a miss degrades to the default full tile so rendering stays
//! visually obvious (the atlas's placeholder tile) instead of crashing.

use phf::phf_map;

use crate::voxels::block::block_side::FaceClass;

/// UV coordinates for a face: 4 corner pairs, in the order
/// [bottom-left, bottom-right, top-right, top-left].
pub type FaceUv = [f32; 8];

/// The fallback for unknown block names: the whole atlas tile at the
/// origin, which the reference atlas fills with a placeholder texture.
pub const DEFAULT_TILE_UV: FaceUv = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];

/// Texture-coordinate supplier keyed by block name and face class.
pub trait UvLookup {
    /// Returns the 4 corner UV pairs for one face of the named block.
    /// Total: unknown names yield [`DEFAULT_TILE_UV`].
    fn uv(&self, block_name: &str, class: FaceClass) -> FaceUv;
}

/// Atlas tile coordinates for one block kind: column/row per face class.
#[derive(Copy, Clone, Debug)]
pub struct TileSet {
    /// Tile for the top face.
    pub top: [u32; 2],
    /// Tile for the bottom face.
    pub bottom: [u32; 2],
    /// Tile shared by the four lateral faces.
    pub side: [u32; 2],
}

/// Compile-time tile table for the built-in blocks, matching the reference
/// atlas layout (grass top, grass side, dirt, stone, glass, water along the
/// first row).
static ATLAS_TILES: phf::Map<&'static str, TileSet> = phf_map! {
    "grass" => TileSet { top: [0, 0], bottom: [2, 0], side: [1, 0] },
    "dirt" => TileSet { top: [2, 0], bottom: [2, 0], side: [2, 0] },
    "stone" => TileSet { top: [3, 0], bottom: [3, 0], side: [3, 0] },
    "glass" => TileSet { top: [4, 0], bottom: [4, 0], side: [4, 0] },
    "water" => TileSet { top: [5, 0], bottom: [5, 0], side: [5, 0] },
};

/// UV lookup over a square tile atlas.
#[derive(Copy, Clone, Debug)]
pub struct AtlasUvTable {
    tiles_per_row: u32,
}

impl Default for AtlasUvTable {
    fn default() -> Self {
        AtlasUvTable { tiles_per_row: 16 }
    }
}

impl AtlasUvTable {
    /// Creates a lookup for an atlas with the given tile grid size.
    pub fn new(tiles_per_row: u32) -> Self {
        AtlasUvTable { tiles_per_row }
    }

    fn tile_uv(&self, tile: [u32; 2]) -> FaceUv {
        let size = 1.0 / self.tiles_per_row as f32;
        let u0 = tile[0] as f32 * size;
        let v0 = tile[1] as f32 * size;
        let (u1, v1) = (u0 + size, v0 + size);
        [u0, v0, u1, v0, u1, v1, u0, v1]
    }
}

impl UvLookup for AtlasUvTable {
    fn uv(&self, block_name: &str, class: FaceClass) -> FaceUv {
        let Some(tiles) = ATLAS_TILES.get(block_name) else {
            return DEFAULT_TILE_UV;
        };
        let tile = match class {
            FaceClass::Top => tiles.top,
            FaceClass::Bottom => tiles.bottom,
            FaceClass::Side => tiles.side,
        };
        self.tile_uv(tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_the_full_tile() {
        let atlas = AtlasUvTable::default();
        assert_eq!(atlas.uv("obsidian", FaceClass::Top), DEFAULT_TILE_UV);
        assert_eq!(atlas.uv("", FaceClass::Side), DEFAULT_TILE_UV);
    }

    #[test]
    fn grass_uses_distinct_tiles_per_face_class() {
        let atlas = AtlasUvTable::default();
        let top = atlas.uv("grass", FaceClass::Top);
        let side = atlas.uv("grass", FaceClass::Side);
        let bottom = atlas.uv("grass", FaceClass::Bottom);
        assert_ne!(top, side);
        assert_ne!(side, bottom);
        // Grass bottom is plain dirt.
        assert_eq!(bottom, atlas.uv("dirt", FaceClass::Bottom));
    }

    #[test]
    fn tile_uvs_span_one_tile() {
        let atlas = AtlasUvTable::new(16);
        let uv = atlas.uv("stone", FaceClass::Top);
        let width = uv[2] - uv[0];
        let height = uv[5] - uv[1];
        assert!((width - 1.0 / 16.0).abs() < 1e-6);
        assert!((height - 1.0 / 16.0).abs() < 1e-6);
        // Corners are [bl, br, tr, tl]: the two bottom corners share v.
        assert_eq!(uv[1], uv[3]);
        assert_eq!(uv[0], uv[6]);
    }
}
