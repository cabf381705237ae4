//! # Meshing Module
//!
//! Converts chunk sections into flat vertex data for rendering. Each
//! section meshes independently; within a section, every non-air cell
//! contributes up to six faces, and each face is emitted only when its
//! neighbor does not occlude it.
//!
//! ## Neighbor Queries
//!
//! Occupancy checks go through [`World::block_at`] on absolute world
//! coordinates, never through section-local indexing. A neighbor on the far
//! side of a section or chunk boundary is therefore resolved exactly like
//! an interior one, which is what makes the dirty-propagation in
//! `World::set_block` sufficient for correctness: a boundary change dirties
//! both sections, and both rebuild against the same world state.
//!
//! ## Visibility Rule
//!
//! A face is visible when the neighbor cell is air, or when the current
//! block is opaque and the neighbor is glass. This rule is asymmetric on
//! purpose: transparent blocks never emit faces against non-air neighbors,
//! while opaque blocks still render against glass so the world does not
//! appear hollow behind panes. It matches the observed behavior of the
//! original interaction model and must not be "corrected" casually.

use log::debug;

use crate::voxels::block::block_side::BlockSide;
use crate::voxels::block::BlockRegistry;
use crate::voxels::chunk::{MeshState, SectionMesh};
use crate::voxels::coords::{CHUNK_DIMENSION, SECTIONS_PER_CHUNK};
use crate::voxels::world::World;

use atlas::UvLookup;
use face::face_corners;
use upload::MeshUpload;
use vertex::Vertex;

pub mod atlas;
pub mod face;
pub mod upload;
pub mod vertex;

/// The face shade scalar carried by every vertex. Constant for now;
/// reserved for per-face lighting.
pub const FACE_SHADE: f32 = 1.0;

/// Builds section meshes by face-culling against the 6-connected
/// neighborhood.
///
/// Holds the injected block registry and UV lookup; owns no world or GPU
/// state.
pub struct Mesher<'a> {
    registry: &'a BlockRegistry,
    uv: &'a dyn UvLookup,
}

impl<'a> Mesher<'a> {
    /// Creates a mesher over the given registry and UV lookup.
    pub fn new(registry: &'a BlockRegistry, uv: &'a dyn UvLookup) -> Self {
        Mesher { registry, uv }
    }

    /// Rebuilds every stale section mesh of the chunk at `(cx, cz)`,
    /// uploading the geometry through the given store.
    ///
    /// Sections whose cache is already `Built` are skipped. Returns the
    /// number of sections rebuilt. Never fails on valid world state;
    /// unregistered block ids simply produce no geometry.
    pub fn build_chunk(
        &self,
        world: &mut World,
        cx: i32,
        cz: i32,
        store: &mut dyn MeshUpload,
    ) -> usize {
        world.ensure_chunk(cx, cz);
        let mut rebuilt = 0;
        let mut total_vertices = 0usize;

        for sy in 0..SECTIONS_PER_CHUNK {
            {
                let section = world.ensure_chunk(cx, cz).section_mut(sy);
                if section.mesh_state == MeshState::Built {
                    continue;
                }
                section.mesh_state = MeshState::Building;
            }

            // The vertex pass only reads the world; the cache write below
            // happens strictly after it.
            let vertices = self.mesh_section(world, cx, cz, sy);
            let floats: &[f32] = bytemuck::cast_slice(&vertices);
            total_vertices += vertices.len();

            let section = world.ensure_chunk(cx, cz).section_mut(sy);
            match section.mesh.as_mut() {
                Some(mesh) => {
                    store.upload(mesh.buffer, floats);
                    mesh.vertex_count = vertices.len() as u32;
                }
                None => {
                    let buffer = store.create_buffer(floats);
                    section.mesh = Some(SectionMesh {
                        buffer,
                        vertex_count: vertices.len() as u32,
                    });
                }
            }
            section.mesh_state = MeshState::Built;
            rebuilt += 1;
        }

        if rebuilt > 0 {
            debug!("rebuilt {rebuilt} sections of chunk ({cx}, {cz}), {total_vertices} vertices");
        }
        rebuilt
    }

    /// Produces the vertex list for one section, culling faces against the
    /// world's current contents. Pure with respect to the world; iteration
    /// order is fixed, so the output is deterministic.
    pub fn mesh_section(&self, world: &World, cx: i32, cz: i32, sy: usize) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        let base_x = cx * CHUNK_DIMENSION;
        let base_y = sy as i32 * CHUNK_DIMENSION;
        let base_z = cz * CHUNK_DIMENSION;

        for lz in 0..CHUNK_DIMENSION {
            for ly in 0..CHUNK_DIMENSION {
                for lx in 0..CHUNK_DIMENSION {
                    let (x, y, z) = (base_x + lx, base_y + ly, base_z + lz);
                    let id = world.block_at(x, y, z);
                    if id == 0 {
                        continue;
                    }
                    let Some(name) = self.registry.name_of(id) else {
                        // Unregistered kind: no geometry rather than a crash.
                        continue;
                    };

                    for side in BlockSide::all() {
                        let (dx, dy, dz) = side.neighbor_offset();
                        if !self.face_visible(id, world.block_at(x + dx, y + dy, z + dz)) {
                            continue;
                        }
                        let uv = self.uv.uv(name, side.face_class());
                        for corner in face_corners(side) {
                            vertices.push(Vertex::new(
                                [
                                    (x + corner.offset[0]) as f32,
                                    (y + corner.offset[1]) as f32,
                                    (z + corner.offset[2]) as f32,
                                ],
                                [uv[corner.uv_corner * 2], uv[corner.uv_corner * 2 + 1]],
                                FACE_SHADE,
                            ));
                        }
                    }
                }
            }
        }
        vertices
    }

    /// The face visibility rule. Asymmetric by design; see the module docs.
    fn face_visible(&self, current: u8, neighbor: u8) -> bool {
        if neighbor == 0 {
            return true;
        }
        self.registry.is_opaque(current) && self.registry.is_glass(neighbor)
    }
}
