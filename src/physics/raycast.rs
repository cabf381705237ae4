//! # Voxel Raycasting
//!
//! Finds the first non-empty voxel along a view ray. Used by the external
//! interaction layer for block breaking and placing.
//!
//! The march is a fixed-increment walk: 0.1 units per step, up to
//! `max_distance * 10` steps. A DDA traversal would visit each cell exactly
//! once, but the fixed step matches the original interaction feel (it can
//! clip a cell corner the DDA would report) and is kept deliberately.

use cgmath::{InnerSpace, Point3, Vector3};

use crate::voxels::world::World;

/// Distance marched per step, in blocks.
pub const RAY_STEP: f32 = 0.1;

/// The result of a successful raycast.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RayHit {
    /// Integer coordinates of the hit voxel.
    pub position: Point3<i32>,
    /// The last empty voxel the ray passed through before the hit; where a
    /// placed block would go.
    pub place_position: Point3<i32>,
    /// Block id found at the hit voxel.
    pub kind: u8,
}

/// Marches from `origin` (typically the eye position) along `direction`
/// and returns the first non-empty voxel within `max_distance`, or `None`
/// if the ray exits into open space.
///
/// `direction` is normalized internally; a zero direction yields `None`.
pub fn raycast(
    world: &World,
    origin: Point3<f32>,
    direction: Vector3<f32>,
    max_distance: f32,
) -> Option<RayHit> {
    if direction.magnitude2() == 0.0 {
        return None;
    }
    let step = direction.normalize() * RAY_STEP;
    let steps = (max_distance * 10.0) as i32;

    let mut probe = origin;
    let mut place = floor_cell(origin);
    for _ in 0..steps {
        probe += step;
        let cell = floor_cell(probe);
        let kind = world.block_at(cell.x, cell.y, cell.z);
        if kind != 0 {
            return Some(RayHit {
                position: cell,
                place_position: place,
                kind,
            });
        }
        place = cell;
    }
    None
}

fn floor_cell(p: Point3<f32>) -> Point3<i32> {
    Point3::new(p.x.floor() as i32, p.y.floor() as i32, p.z.floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::block_kind::BlockKind;

    #[test]
    fn hits_a_wall_three_blocks_ahead() {
        let mut world = World::new();
        for y in 30..40 {
            for x in -2..3 {
                world.set_block(x, y, 4, BlockKind::STONE.id());
            }
        }

        let eye = Point3::new(0.5, 33.6, 0.5);
        let hit = raycast(&world, eye, Vector3::new(0.0, 0.0, 1.0), 5.0)
            .expect("wall within range");
        assert_eq!(hit.position, Point3::new(0, 33, 4));
        assert_eq!(hit.kind, BlockKind::STONE.id());
        assert_eq!(hit.place_position, Point3::new(0, 33, 3));
    }

    #[test]
    fn open_sky_yields_none() {
        let world = World::new();
        let eye = Point3::new(0.5, 33.6, 0.5);
        assert_eq!(raycast(&world, eye, Vector3::new(0.0, 1.0, 0.0), 5.0), None);
    }

    #[test]
    fn respects_the_maximum_distance() {
        let mut world = World::new();
        world.set_block(0, 33, 10, BlockKind::DIRT.id());

        let eye = Point3::new(0.5, 33.5, 0.5);
        let forward = Vector3::new(0.0, 0.0, 1.0);
        assert_eq!(raycast(&world, eye, forward, 5.0), None);
        let hit = raycast(&world, eye, forward, 12.0).expect("within extended range");
        assert_eq!(hit.position, Point3::new(0, 33, 10));
    }

    #[test]
    fn zero_direction_yields_none() {
        let mut world = World::new();
        world.set_block(0, 33, 0, BlockKind::DIRT.id());
        let eye = Point3::new(0.5, 33.5, 0.5);
        assert_eq!(raycast(&world, eye, Vector3::new(0.0, 0.0, 0.0), 5.0), None);
    }

    #[test]
    fn unnormalized_directions_march_the_same_path() {
        let mut world = World::new();
        world.set_block(0, 33, 4, BlockKind::GLASS.id());
        let eye = Point3::new(0.5, 33.5, 0.5);
        let a = raycast(&world, eye, Vector3::new(0.0, 0.0, 1.0), 6.0);
        let b = raycast(&world, eye, Vector3::new(0.0, 0.0, 9.0), 6.0);
        assert_eq!(a, b);
        assert_eq!(a.unwrap().kind, BlockKind::GLASS.id());
    }
}
