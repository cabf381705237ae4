//! Vertex data layout for section meshes.
//!
//! The vertex format is a flat 6-float stride: world-space position, UV,
//! and a face shade scalar. The whole vertex list casts losslessly to
//! `&[f32]` for the upload seam.

/// Number of floats per vertex in the packed layout.
pub const VERTEX_STRIDE_FLOATS: usize = 6;

/// A single mesh vertex.
///
/// # Memory Layout
/// - Position: 3x f32 (absolute world coordinates, cube edge length 1)
/// - Texture coordinates: 2x f32
/// - Shade: f32 (constant 1.0 until per-face lighting exists)
///
/// Total size: 24 bytes. `#[repr(C)]` plus the bytemuck derives make the
/// flat float view a safe cast rather than a copy.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    x: f32,
    y: f32,
    z: f32,
    u: f32,
    v: f32,
    shade: f32,
}

impl Vertex {
    /// Creates a vertex from position, texture coordinates, and shade.
    pub fn new(position: [f32; 3], tex_coords: [f32; 2], shade: f32) -> Self {
        Vertex {
            x: position[0],
            y: position[1],
            z: position[2],
            u: tex_coords[0],
            v: tex_coords[1],
            shade,
        }
    }

    /// Returns the world-space position of this vertex.
    pub fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the texture coordinates of this vertex.
    pub fn tex_coords(&self) -> [f32; 2] {
        [self.u, self.v]
    }

    /// Returns the shade scalar of this vertex.
    pub fn shade(&self) -> f32 {
        self.shade
    }
}
