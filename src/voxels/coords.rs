//! # Coordinate Mapping
//!
//! Conversions between absolute world coordinates, chunk coordinates, and
//! chunk-local section cells.
//!
//! All horizontal mappings use floor division and a non-negative remainder
//! so that negative world coordinates resolve to the correct chunk and
//! local cell. Truncating division would map `x = -1` into chunk 0 instead
//! of chunk -1; that is a correctness bug, not a style choice, and the
//! tests below pin the behavior down.

/// The edge length of a chunk footprint and of a section, in blocks.
pub const CHUNK_DIMENSION: i32 = 16;

/// The fixed vertical extent of the world, in blocks.
pub const WORLD_HEIGHT: i32 = 128;

/// The number of 16x16x16 sections stacked in one chunk.
pub const SECTIONS_PER_CHUNK: usize = (WORLD_HEIGHT / CHUNK_DIMENSION) as usize;

/// The number of cells in one horizontal plane of a section.
pub const SECTION_PLANE_SIZE: usize = (CHUNK_DIMENSION * CHUNK_DIMENSION) as usize;

/// The total number of cells in a section.
pub const SECTION_VOLUME: usize = SECTION_PLANE_SIZE * CHUNK_DIMENSION as usize;

/// Returns the chunk coordinate owning the given world coordinate axis value.
///
/// Uses floor division, so `-1` maps to chunk `-1`, not chunk `0`.
pub fn chunk_coord(world: i32) -> i32 {
    world.div_euclid(CHUNK_DIMENSION)
}

/// Returns the chunk-local coordinate (0..16) for a world coordinate axis value.
///
/// Uses the euclidean remainder, so the result is non-negative for negative
/// world coordinates.
pub fn local_coord(world: i32) -> usize {
    world.rem_euclid(CHUNK_DIMENSION) as usize
}

/// Returns the section index (0..8) within a chunk for an in-bounds world Y.
pub fn section_index(world_y: i32) -> usize {
    (world_y / CHUNK_DIMENSION) as usize
}

/// Packs a chunk coordinate pair into a single 64-bit arena key.
///
/// The two halves are stored as sign-preserving 32-bit patterns, so any
/// `(cx, cz)` pair round-trips exactly.
pub fn pack_chunk_key(cx: i32, cz: i32) -> u64 {
    ((cx as u32 as u64) << 32) | (cz as u32 as u64)
}

/// Recovers the chunk coordinate pair from a packed arena key.
pub fn unpack_chunk_key(key: u64) -> (i32, i32) {
    ((key >> 32) as u32 as i32, key as u32 as i32)
}

/// Returns the flat cell index for local coordinates within a section.
///
/// The layout is `x + 16*y + 256*z`, matching the stride expected by every
/// consumer of raw section data.
pub fn section_cell_index(lx: usize, ly: usize, lz: usize) -> usize {
    lx + CHUNK_DIMENSION as usize * ly + SECTION_PLANE_SIZE * lz
}

/// Returns whether a world Y coordinate lies inside the vertical world bounds.
pub fn y_in_bounds(world_y: i32) -> bool {
    (0..WORLD_HEIGHT).contains(&world_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_coord_floors_negative_values() {
        assert_eq!(chunk_coord(0), 0);
        assert_eq!(chunk_coord(15), 0);
        assert_eq!(chunk_coord(16), 1);
        assert_eq!(chunk_coord(-1), -1);
        assert_eq!(chunk_coord(-16), -1);
        assert_eq!(chunk_coord(-17), -2);
    }

    #[test]
    fn local_coord_is_non_negative() {
        assert_eq!(local_coord(0), 0);
        assert_eq!(local_coord(15), 15);
        assert_eq!(local_coord(16), 0);
        assert_eq!(local_coord(-1), 15);
        assert_eq!(local_coord(-16), 0);
        assert_eq!(local_coord(-17), 15);
    }

    #[test]
    fn chunk_and_local_coords_recompose() {
        for world in -64..64 {
            assert_eq!(
                chunk_coord(world) * CHUNK_DIMENSION + local_coord(world) as i32,
                world
            );
        }
    }

    #[test]
    fn chunk_key_round_trips() {
        for &(cx, cz) in &[(0, 0), (1, -1), (-3, 7), (i32::MIN, i32::MAX), (42, 42)] {
            assert_eq!(unpack_chunk_key(pack_chunk_key(cx, cz)), (cx, cz));
        }
    }

    #[test]
    fn distinct_chunks_get_distinct_keys() {
        assert_ne!(pack_chunk_key(1, 0), pack_chunk_key(0, 1));
        assert_ne!(pack_chunk_key(-1, 0), pack_chunk_key(0, -1));
    }

    #[test]
    fn cell_index_matches_flat_layout() {
        assert_eq!(section_cell_index(0, 0, 0), 0);
        assert_eq!(section_cell_index(15, 0, 0), 15);
        assert_eq!(section_cell_index(0, 1, 0), 16);
        assert_eq!(section_cell_index(0, 0, 1), 256);
        assert_eq!(section_cell_index(15, 15, 15), SECTION_VOLUME - 1);
    }
}
