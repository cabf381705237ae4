//! # World Module
//!
//! The `World` struct owns all chunk data and is the single source of truth
//! for block state. It provides O(1) block lookup and mutation by absolute
//! integer coordinate, with chunks allocated lazily as they are touched.
//!
//! ## Architecture
//!
//! Chunks live in a hash-map arena keyed by a packed 64-bit chunk
//! coordinate. Allocation is explicit: `ensure_chunk` is the only place a
//! chunk comes into existence, and only mutation paths call it. Reads on a
//! missing chunk return air, which is observably identical to reading a
//! freshly allocated all-air chunk, so readers (the mesher, physics) can
//! hold `&World` and never allocate.
//!
//! ## Invalidation
//!
//! Every write marks the owning section's cached mesh dirty. Writes on a
//! section or chunk boundary additionally dirty the adjacent section, since
//! face visibility there depends on the changed cell.

use std::collections::HashMap;

use log::trace;

use super::chunk::Chunk;
use super::coords::{
    chunk_coord, local_coord, pack_chunk_key, section_index, unpack_chunk_key, y_in_bounds,
    CHUNK_DIMENSION,
};

/// A sparse voxel world composed of lazily allocated chunks.
pub struct World {
    chunks: HashMap<u64, Chunk>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates a new, empty world with no chunks loaded.
    pub fn new() -> Self {
        World {
            chunks: HashMap::new(),
        }
    }

    /// Returns the chunk at the given chunk coordinates, allocating an
    /// all-air chunk if none exists yet. Never fails.
    pub fn ensure_chunk(&mut self, cx: i32, cz: i32) -> &mut Chunk {
        self.chunks.entry(pack_chunk_key(cx, cz)).or_insert_with(|| {
            trace!("allocating chunk ({cx}, {cz})");
            Chunk::empty(cx, cz)
        })
    }

    /// Returns the chunk at the given chunk coordinates, if loaded.
    pub fn chunk(&self, cx: i32, cz: i32) -> Option<&Chunk> {
        self.chunks.get(&pack_chunk_key(cx, cz))
    }

    /// Returns the chunk at the given chunk coordinates mutably, if loaded.
    pub fn chunk_mut(&mut self, cx: i32, cz: i32) -> Option<&mut Chunk> {
        self.chunks.get_mut(&pack_chunk_key(cx, cz))
    }

    /// Returns the block id at an absolute world coordinate.
    ///
    /// Any `y` outside `[0, WORLD_HEIGHT)` reads as air, as does any cell in
    /// a chunk that has never been touched. Never fails for any coordinate.
    pub fn block_at(&self, x: i32, y: i32, z: i32) -> u8 {
        if !y_in_bounds(y) {
            return 0;
        }
        match self.chunk(chunk_coord(x), chunk_coord(z)) {
            Some(chunk) => chunk.get_block(local_coord(x), y, local_coord(z)),
            None => 0,
        }
    }

    /// Writes a block id at an absolute world coordinate.
    ///
    /// A no-op for `y` outside `[0, WORLD_HEIGHT)`. Allocates the owning
    /// chunk if needed, and dirties the mesh caches of the owning section
    /// and of any directly adjacent section across a chunk boundary.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, id: u8) {
        if !y_in_bounds(y) {
            return;
        }
        let (cx, cz) = (chunk_coord(x), chunk_coord(z));
        let (lx, lz) = (local_coord(x), local_coord(z));
        self.ensure_chunk(cx, cz).set_block(lx, y, lz, id);

        let sy = section_index(y);
        let edge = CHUNK_DIMENSION as usize - 1;
        if lx == 0 {
            self.mark_section_dirty(cx - 1, cz, sy);
        }
        if lx == edge {
            self.mark_section_dirty(cx + 1, cz, sy);
        }
        if lz == 0 {
            self.mark_section_dirty(cx, cz - 1, sy);
        }
        if lz == edge {
            self.mark_section_dirty(cx, cz + 1, sy);
        }
    }

    /// Dirties one section of a neighboring chunk, if that chunk is loaded.
    /// Unloaded neighbors will mesh from current contents whenever they are
    /// first built, so there is nothing to invalidate.
    fn mark_section_dirty(&mut self, cx: i32, cz: i32, sy: usize) {
        if let Some(chunk) = self.chunk_mut(cx, cz) {
            chunk.section_mut(sy).mark_dirty();
        }
    }

    /// Returns the number of currently loaded chunks.
    pub fn loaded_chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Iterates over the chunk coordinates of all loaded chunks.
    pub fn loaded_chunk_coords(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.chunks.keys().map(|&key| unpack_chunk_key(key))
    }
}
