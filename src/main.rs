//! # Headless World Demo
//!
//! Generates the startup chunk area, meshes it into an in-memory buffer
//! store, and runs a short burst of simulation ticks, logging what
//! happened. The real application wires the same calls to a renderer and a
//! frame loop; this binary exercises the core without either.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```
//!
//! Settings are read from `world.json` next to the working directory when
//! present; otherwise the defaults apply.

use std::path::Path;
use std::process::ExitCode;

use cgmath::{Point3, Vector3};
use log::{error, info};

use voxel_world::config::WorldConfig;
use voxel_world::meshing::atlas::AtlasUvTable;
use voxel_world::meshing::upload::MemoryMeshStore;
use voxel_world::meshing::Mesher;
use voxel_world::physics::raycast::raycast;
use voxel_world::physics::{KinematicBody, MoveIntent};
use voxel_world::voxels::block::BlockRegistry;
use voxel_world::voxels::terrain::{FlatTerrain, TerrainGenerator};
use voxel_world::voxels::world::World;

const CONFIG_PATH: &str = "world.json";
const DEMO_TICKS: usize = 120;

fn main() -> ExitCode {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    let config = match WorldConfig::load(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "world config: surface height {}, chunk radius {}",
        config.surface_height, config.chunk_radius
    );

    let registry = BlockRegistry::new();
    let mut world = World::new();
    let generator = FlatTerrain::new(&registry, config.surface_height);
    for cz in -config.chunk_radius..=config.chunk_radius {
        for cx in -config.chunk_radius..=config.chunk_radius {
            generator.generate_chunk(&mut world, cx, cz);
        }
    }
    info!("generated {} chunks", world.loaded_chunk_count());

    let atlas = AtlasUvTable::default();
    let mesher = Mesher::new(&registry, &atlas);
    let mut store = MemoryMeshStore::new();
    let mut rebuilt = 0;
    for (cx, cz) in world.loaded_chunk_coords().collect::<Vec<_>>() {
        rebuilt += mesher.build_chunk(&mut world, cx, cz, &mut store);
    }
    info!(
        "meshed {} sections into {} buffers ({} floats)",
        rebuilt,
        store.buffer_count(),
        store.total_floats()
    );

    let mut body = KinematicBody::new(Point3::from(config.spawn));
    body.walk_speed = config.walk_speed;
    body.gravity = config.gravity;
    body.jump_impulse = config.jump_impulse;

    let intent = MoveIntent {
        forward: true,
        yaw: 0.0,
        ..Default::default()
    };
    for tick in 0..DEMO_TICKS {
        body.update(&world, &intent, tick == 30);
    }
    info!(
        "after {} ticks: position ({:.2}, {:.2}, {:.2}), grounded: {}",
        DEMO_TICKS, body.position.x, body.position.y, body.position.z, body.grounded
    );

    let eye = body.position + Vector3::new(0.0, 1.6, 0.0);
    match raycast(&world, eye, Vector3::new(0.0, -1.0, 0.0), 5.0) {
        Some(hit) => info!(
            "looking down hits block {} at ({}, {}, {})",
            hit.kind, hit.position.x, hit.position.y, hit.position.z
        ),
        None => info!("looking down hits nothing within range"),
    }

    ExitCode::SUCCESS
}
