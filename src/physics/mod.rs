//! # Kinematic Physics
//!
//! Discrete-time movement of an agent through the voxel grid. The body has
//! two coarse states, grounded and airborne, and advances one full Euler
//! step per simulation tick with no substepping.
//!
//! ## Collision Model
//!
//! Collision resolution is axis-decoupled and order-dependent: X is
//! resolved first, then Z is tested at the already-resolved X, then the
//! vertical move is tested at the resolved X/Z using two point probes (the
//! feet cell and the head cell 1.7 units up). This is not a swept AABB
//! collider; it can let the body slide along a diagonal wall corner in ways
//! a full sweep would not. That behavior is intentional legacy semantics,
//! relied on by the interaction model, and is reproduced as-is.

use cgmath::{InnerSpace, Point3, Vector3, Zero};

use crate::voxels::world::World;

pub mod raycast;

/// Horizontal movement speed, in blocks per tick. Applied instantaneously;
/// there is no acceleration smoothing.
pub const WALK_SPEED: f32 = 0.2;

/// Downward velocity added every tick. There is no terminal-velocity clamp.
pub const GRAVITY_PER_TICK: f32 = 0.03;

/// Vertical velocity set by a jump from the ground.
pub const JUMP_IMPULSE: f32 = 0.35;

/// Height of the head probe above the feet, in blocks.
pub const HEAD_OFFSET: f32 = 1.7;

/// Horizontal movement intent for one tick, expressed in camera-yaw space.
#[derive(Copy, Clone, Debug, Default)]
pub struct MoveIntent {
    /// Move toward the camera's facing direction.
    pub forward: bool,
    /// Move away from the camera's facing direction.
    pub backward: bool,
    /// Strafe left.
    pub left: bool,
    /// Strafe right.
    pub right: bool,
    /// Camera yaw in radians; defines the planar basis the flags sum in.
    pub yaw: f32,
}

impl MoveIntent {
    /// Collapses the directional flags into a planar unit (or zero) vector.
    ///
    /// Forward/back and left/right contributions are summed in yaw space
    /// and re-normalized when the sum is non-zero, so diagonal movement is
    /// no faster than cardinal movement.
    pub fn planar_direction(&self) -> Vector3<f32> {
        let (yaw_sin, yaw_cos) = self.yaw.sin_cos();
        let forward = Vector3::new(yaw_cos, 0.0, yaw_sin);
        let right = Vector3::new(-yaw_sin, 0.0, yaw_cos);

        let mut direction = Vector3::zero();
        if self.forward {
            direction += forward;
        }
        if self.backward {
            direction -= forward;
        }
        if self.right {
            direction += right;
        }
        if self.left {
            direction -= right;
        }

        if direction.magnitude2() > 0.0 {
            direction.normalize()
        } else {
            direction
        }
    }
}

/// The agent's kinematic state: position, velocity, and whether it is
/// resting on a solid voxel.
///
/// Created once at world start with the spawn position and mutated every
/// tick; it only ever reads the world, never mutates voxels.
#[derive(Debug)]
pub struct KinematicBody {
    /// Feet position in world space.
    pub position: Point3<f32>,
    /// Per-tick displacement vector.
    pub velocity: Vector3<f32>,
    /// Whether the body rested on a solid voxel after the last tick.
    pub grounded: bool,
    /// Horizontal speed in blocks per tick.
    pub walk_speed: f32,
    /// Gravity accumulation per tick.
    pub gravity: f32,
    /// Vertical velocity applied by a jump.
    pub jump_impulse: f32,
}

impl KinematicBody {
    /// Creates a body at the spawn position, grounded, with default tuning.
    pub fn new(spawn: Point3<f32>) -> Self {
        KinematicBody {
            position: spawn,
            velocity: Vector3::zero(),
            grounded: true,
            walk_speed: WALK_SPEED,
            gravity: GRAVITY_PER_TICK,
            jump_impulse: JUMP_IMPULSE,
        }
    }

    /// Advances the body by one simulation tick.
    ///
    /// Horizontal velocity is set directly from the intent; vertical
    /// velocity accumulates gravity, plus the jump impulse when grounded
    /// and requested. The move is then resolved per axis against the voxel
    /// grid: X, then Z at the resolved X, then Y at the resolved X/Z.
    pub fn update(&mut self, world: &World, intent: &MoveIntent, jump: bool) {
        let direction = intent.planar_direction();
        self.velocity.x = direction.x * self.walk_speed;
        self.velocity.z = direction.z * self.walk_speed;
        self.velocity.y -= self.gravity;

        if jump && self.grounded {
            self.velocity.y = self.jump_impulse;
            self.grounded = false;
        }

        let target = self.position + self.velocity;

        if cell_empty(world, target.x, self.position.y, self.position.z) {
            self.position.x = target.x;
        }
        if cell_empty(world, self.position.x, self.position.y, target.z) {
            self.position.z = target.z;
        }

        let feet_clear = cell_empty(world, self.position.x, target.y, self.position.z);
        let head_clear = cell_empty(
            world,
            self.position.x,
            target.y + HEAD_OFFSET,
            self.position.z,
        );
        if feet_clear && head_clear {
            self.position.y = target.y;
            self.grounded = false;
        } else {
            if self.velocity.y < 0.0 {
                self.grounded = true;
            }
            self.velocity.y = 0.0;
        }
    }
}

/// Whether the voxel containing the given world-space point is empty.
fn cell_empty(world: &World, x: f32, y: f32, z: f32) -> bool {
    world.block_at(x.floor() as i32, y.floor() as i32, z.floor() as i32) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::block_kind::BlockKind;

    fn floor_world(height: i32) -> World {
        let mut world = World::new();
        for x in -8..8 {
            for z in -8..8 {
                world.set_block(x, height, z, BlockKind::STONE.id());
            }
        }
        world
    }

    #[test]
    fn planar_direction_is_normalized() {
        let intent = MoveIntent {
            forward: true,
            right: true,
            yaw: 0.3,
            ..Default::default()
        };
        assert!((intent.planar_direction().magnitude() - 1.0).abs() < 1e-6);

        let idle = MoveIntent::default();
        assert_eq!(idle.planar_direction(), Vector3::zero());

        let cancelled = MoveIntent {
            forward: true,
            backward: true,
            ..Default::default()
        };
        assert_eq!(cancelled.planar_direction(), Vector3::zero());
    }

    #[test]
    fn gravity_does_not_pull_a_grounded_body_through_the_floor() {
        let world = floor_world(32);
        let mut body = KinematicBody::new(Point3::new(0.5, 33.0, 0.5));

        body.update(&world, &MoveIntent::default(), false);
        assert_eq!(body.position.y, 33.0);
        assert!(body.grounded);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn a_body_in_open_air_falls_and_lands() {
        let world = floor_world(32);
        let mut body = KinematicBody::new(Point3::new(0.5, 40.0, 0.5));

        for _ in 0..200 {
            body.update(&world, &MoveIntent::default(), false);
        }
        assert!(body.grounded);
        // Landed somewhere inside the cell above the floor.
        assert!((33.0..34.0).contains(&body.position.y));
    }

    #[test]
    fn jumping_leaves_the_ground_and_comes_back() {
        let world = floor_world(32);
        let mut body = KinematicBody::new(Point3::new(0.5, 33.0, 0.5));
        body.update(&world, &MoveIntent::default(), false);
        assert!(body.grounded);

        body.update(&world, &MoveIntent::default(), true);
        assert!(!body.grounded);
        assert!(body.position.y > 33.0);

        let peak_velocity = body.velocity.y;
        assert!(peak_velocity > 0.0);

        for _ in 0..100 {
            body.update(&world, &MoveIntent::default(), false);
        }
        assert!(body.grounded);
    }

    #[test]
    fn jump_requests_in_the_air_are_ignored() {
        let world = floor_world(0);
        let mut body = KinematicBody::new(Point3::new(0.5, 40.0, 0.5));
        body.update(&world, &MoveIntent::default(), false);
        assert!(!body.grounded);
        let falling = body.velocity.y;

        body.update(&world, &MoveIntent::default(), true);
        assert!(body.velocity.y < falling, "air jump must not add impulse");
    }

    #[test]
    fn walls_block_horizontal_movement_per_axis() {
        let mut world = floor_world(32);
        // A wall along x = 2 at feet height.
        for z in -8..8 {
            world.set_block(2, 33, z, BlockKind::STONE.id());
        }
        let mut body = KinematicBody::new(Point3::new(1.8, 33.0, 0.5));

        // Walking due +X into the wall: X is rejected, Z still resolves.
        let intent = MoveIntent {
            forward: true,
            yaw: 0.0,
            ..Default::default()
        };
        for _ in 0..10 {
            body.update(&world, &intent, false);
        }
        assert!(body.position.x < 2.0);

        // Walking diagonally: the Z component slides along the wall.
        let diagonal = MoveIntent {
            forward: true,
            right: true,
            yaw: 0.0,
            ..Default::default()
        };
        let z_before = body.position.z;
        body.update(&world, &diagonal, false);
        assert!(body.position.x < 2.0);
        assert!(body.position.z > z_before);
    }

    #[test]
    fn low_ceilings_stop_upward_movement_via_the_head_probe() {
        let mut world = floor_world(32);
        // Ceiling one block above head height.
        for x in -8..8 {
            for z in -8..8 {
                world.set_block(x, 35, z, BlockKind::STONE.id());
            }
        }
        let mut body = KinematicBody::new(Point3::new(0.5, 33.0, 0.5));
        body.update(&world, &MoveIntent::default(), true);
        let mut peak = body.position.y;
        for _ in 0..20 {
            body.update(&world, &MoveIntent::default(), false);
            peak = peak.max(body.position.y);
        }
        // Head probe at feet + 1.7 hits the ceiling at y = 35 well before
        // the feet could.
        assert!(peak + HEAD_OFFSET < 35.0 + 1.0);
    }

    #[test]
    fn horizontal_speed_is_instantaneous_and_capped() {
        let world = floor_world(32);
        let mut body = KinematicBody::new(Point3::new(0.5, 33.0, 0.5));
        let intent = MoveIntent {
            forward: true,
            yaw: 0.0,
            ..Default::default()
        };
        body.update(&world, &intent, false);
        assert!((body.position.x - (0.5 + WALK_SPEED)).abs() < 1e-6);

        // Releasing the key stops immediately.
        body.update(&world, &MoveIntent::default(), false);
        assert_eq!(body.velocity.x, 0.0);
    }
}
