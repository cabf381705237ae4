//! # Chunk Module
//!
//! The `Chunk` struct and its stacked `Section`s. A chunk is the unit of
//! world storage (a 16x16 footprint spanning the full world height); a
//! section is the 16x16x16 unit of mesh caching.
//!
//! ## Storage
//!
//! Each section stores its cells as a dense flat array of block ids, one
//! byte per cell, indexed `x + 16*y + 256*z`. Air-heavy sections cost the
//! same 4 KiB as full ones; in exchange, every point lookup and mutation is
//! a single indexed byte access.
//!
//! ## Mesh Caching
//!
//! A section owns the cached result of its last mesh build: the GPU buffer
//! handle issued by the render collaborator and the vertex count. The cache
//! state is an explicit tri-state (`Dirty` / `Building` / `Built`) so that
//! invalidation stays unambiguous if rebuilds ever move off-thread.

use crate::meshing::upload::BufferId;

use super::coords::{section_cell_index, CHUNK_DIMENSION, SECTIONS_PER_CHUNK, SECTION_VOLUME};

/// Lifecycle of a section's cached mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshState {
    /// Cell contents (or a directly adjacent section's contents) changed
    /// since the last build; cached geometry is stale.
    Dirty,
    /// A rebuild is in progress for this section.
    Building,
    /// Cached geometry matches the current cell contents.
    Built,
}

/// The cached geometry of one section: the GPU-side buffer handle issued by
/// the render collaborator, plus the number of vertices in it.
///
/// The buffer itself lives on the GPU and is owned externally; this is only
/// the handle needed to re-upload and to submit draws.
#[derive(Copy, Clone, Debug)]
pub struct SectionMesh {
    /// Handle to the externally owned vertex buffer.
    pub buffer: BufferId,
    /// Number of vertices currently in the buffer.
    pub vertex_count: u32,
}

/// One 16x16x16 slice of a chunk.
pub struct Section {
    cells: [u8; SECTION_VOLUME],
    /// Current state of the cached mesh.
    pub mesh_state: MeshState,
    /// Cached mesh from the last completed build, if any build has run.
    pub mesh: Option<SectionMesh>,
}

impl Section {
    /// Creates an all-air section with no cached mesh.
    pub fn empty() -> Self {
        Section {
            cells: [0; SECTION_VOLUME],
            mesh_state: MeshState::Dirty,
            mesh: None,
        }
    }

    /// Returns the block id at section-local coordinates (each 0..16).
    pub fn get(&self, lx: usize, ly: usize, lz: usize) -> u8 {
        self.cells[section_cell_index(lx, ly, lz)]
    }

    /// Writes a block id at section-local coordinates and marks the cached
    /// mesh dirty.
    pub fn set(&mut self, lx: usize, ly: usize, lz: usize, id: u8) {
        self.cells[section_cell_index(lx, ly, lz)] = id;
        self.mesh_state = MeshState::Dirty;
    }

    /// Marks the cached mesh stale without touching cell contents. Used
    /// when an adjacent section changes along a shared boundary.
    pub fn mark_dirty(&mut self) {
        self.mesh_state = MeshState::Dirty;
    }

    /// Returns whether every cell in the section is air.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&id| id == 0)
    }
}

/// A full-height vertical column of the world: 16x16 blocks in footprint,
/// [`SECTIONS_PER_CHUNK`] sections stacked along Y.
pub struct Chunk {
    /// Chunk X coordinate (world X divided by 16, floored).
    pub cx: i32,
    /// Chunk Z coordinate (world Z divided by 16, floored).
    pub cz: i32,
    sections: [Section; SECTIONS_PER_CHUNK],
}

impl Chunk {
    /// Creates an all-air chunk at the given chunk coordinates.
    pub fn empty(cx: i32, cz: i32) -> Self {
        Chunk {
            cx,
            cz,
            sections: core::array::from_fn(|_| Section::empty()),
        }
    }

    /// Returns the section at the given stack index (0..8).
    pub fn section(&self, index: usize) -> &Section {
        &self.sections[index]
    }

    /// Returns the section at the given stack index, mutably.
    pub fn section_mut(&mut self, index: usize) -> &mut Section {
        &mut self.sections[index]
    }

    /// Returns the block id at chunk-local coordinates.
    ///
    /// `lx`/`lz` are 0..16; `y` is the absolute world Y, which must already
    /// be inside `[0, WORLD_HEIGHT)`.
    pub fn get_block(&self, lx: usize, y: i32, lz: usize) -> u8 {
        let section = &self.sections[(y / CHUNK_DIMENSION) as usize];
        section.get(lx, (y % CHUNK_DIMENSION) as usize, lz)
    }

    /// Writes a block id at chunk-local coordinates, marking the owning
    /// section dirty, along with the vertically adjacent section when the
    /// write lands on a section boundary.
    pub fn set_block(&mut self, lx: usize, y: i32, lz: usize, id: u8) {
        let sy = (y / CHUNK_DIMENSION) as usize;
        let ly = (y % CHUNK_DIMENSION) as usize;
        self.sections[sy].set(lx, ly, lz, id);

        // Face visibility in the neighboring section depends on this cell.
        if ly == 0 && sy > 0 {
            self.sections[sy - 1].mark_dirty();
        }
        if ly == CHUNK_DIMENSION as usize - 1 && sy + 1 < SECTIONS_PER_CHUNK {
            self.sections[sy + 1].mark_dirty();
        }
    }
}
