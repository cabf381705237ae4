//! # Face Winding Tables
//!
//! The canonical vertex orderings for the six block faces. Each face emits
//! two triangles (six vertices) wound counter-clockwise when viewed from
//! outside the block, under the Y-up right-handed convention, so the
//! rasterizer's CCW-is-front test keeps exactly the outward faces.
//!
//! The tables are hand-specified per face; a property test below checks
//! every triangle's normal against the face's neighbor offset, which pins
//! the windings down without trusting the author's spatial reasoning.

use crate::voxels::block::block_side::BlockSide;

/// One corner of a face: the cube-corner offset added to the block's
/// world position, plus the index of the atlas tile corner it samples.
///
/// UV corner indices address the 4 corner pairs returned by the UV lookup,
/// in the order [bottom-left, bottom-right, top-right, top-left].
#[derive(Copy, Clone, Debug)]
pub struct FaceVertex {
    /// Offset from the block's minimum corner, each component 0 or 1.
    pub offset: [i32; 3],
    /// Index (0..4) into the tile's corner UV pairs.
    pub uv_corner: usize,
}

const fn fv(offset: [i32; 3], uv_corner: usize) -> FaceVertex {
    FaceVertex { offset, uv_corner }
}

/// Returns the six vertices of the given face in canonical winding order.
pub fn face_corners(side: BlockSide) -> [FaceVertex; 6] {
    match side {
        BlockSide::TOP => [
            fv([0, 1, 0], 0),
            fv([0, 1, 1], 3),
            fv([1, 1, 1], 2),
            fv([0, 1, 0], 0),
            fv([1, 1, 1], 2),
            fv([1, 1, 0], 1),
        ],

        BlockSide::BOTTOM => [
            fv([0, 0, 0], 0),
            fv([1, 0, 0], 1),
            fv([1, 0, 1], 2),
            fv([0, 0, 0], 0),
            fv([1, 0, 1], 2),
            fv([0, 0, 1], 3),
        ],

        BlockSide::NORTH => [
            fv([0, 0, 0], 1),
            fv([0, 1, 0], 2),
            fv([1, 1, 0], 3),
            fv([0, 0, 0], 1),
            fv([1, 1, 0], 3),
            fv([1, 0, 0], 0),
        ],

        BlockSide::SOUTH => [
            fv([0, 0, 1], 0),
            fv([1, 0, 1], 1),
            fv([1, 1, 1], 2),
            fv([0, 0, 1], 0),
            fv([1, 1, 1], 2),
            fv([0, 1, 1], 3),
        ],

        BlockSide::WEST => [
            fv([0, 0, 0], 0),
            fv([0, 0, 1], 1),
            fv([0, 1, 1], 2),
            fv([0, 0, 0], 0),
            fv([0, 1, 1], 2),
            fv([0, 1, 0], 3),
        ],

        BlockSide::EAST => [
            fv([1, 0, 0], 1),
            fv([1, 1, 0], 2),
            fv([1, 1, 1], 3),
            fv([1, 0, 0], 1),
            fv([1, 1, 1], 3),
            fv([1, 0, 1], 0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector3};

    fn triangle_normal(a: [i32; 3], b: [i32; 3], c: [i32; 3]) -> Vector3<f32> {
        let to = |p: [i32; 3]| Vector3::new(p[0] as f32, p[1] as f32, p[2] as f32);
        (to(b) - to(a)).cross(to(c) - to(a)).normalize()
    }

    #[test]
    fn every_triangle_faces_outward() {
        for side in BlockSide::all() {
            let (dx, dy, dz) = side.neighbor_offset();
            let expected = Vector3::new(dx as f32, dy as f32, dz as f32);
            let corners = face_corners(side);
            for triangle in corners.chunks(3) {
                let normal =
                    triangle_normal(triangle[0].offset, triangle[1].offset, triangle[2].offset);
                assert!(
                    (normal - expected).magnitude() < 1e-6,
                    "{side:?}: normal {normal:?}, expected {expected:?}"
                );
            }
        }
    }

    #[test]
    fn every_face_lies_in_its_boundary_plane() {
        for side in BlockSide::all() {
            let (dx, dy, dz) = side.neighbor_offset();
            for corner in face_corners(side) {
                if dx != 0 {
                    assert_eq!(corner.offset[0], (dx + 1) / 2);
                }
                if dy != 0 {
                    assert_eq!(corner.offset[1], (dy + 1) / 2);
                }
                if dz != 0 {
                    assert_eq!(corner.offset[2], (dz + 1) / 2);
                }
            }
        }
    }

    #[test]
    fn uv_corners_cover_the_tile() {
        for side in BlockSide::all() {
            let mut seen = [false; 4];
            for corner in face_corners(side) {
                seen[corner.uv_corner] = true;
            }
            assert_eq!(seen, [true; 4], "{side:?} misses a tile corner");
        }
    }
}
