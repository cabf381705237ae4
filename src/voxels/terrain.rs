//! # Terrain Generation
//!
//! Pluggable terrain policies that fill chunks through the world's set
//! operation. Generators never touch chunk internals directly; writing
//! through [`World::set_block`] keeps mesh-cache invalidation correct for
//! free, including across chunk boundaries.
//!
//! Three profiles are provided:
//!
//! * [`FlatTerrain`] - the default deterministic flat profile
//! * [`PerlinTerrain`] - a rolling heightmap sampled from Perlin noise
//! * [`ScatteredTerrain`] - sparse random blocks for meshing stress tests

use log::debug;
use noise::{NoiseFn, Perlin};

use super::block::{BlockId, BlockRegistry};
use super::coords::{CHUNK_DIMENSION, WORLD_HEIGHT};
use super::world::World;

/// The default surface height of generated terrain.
pub const DEFAULT_SURFACE_HEIGHT: i32 = 32;

/// A terrain policy: fills one chunk's columns with blocks.
///
/// Implementations must be deterministic per chunk coordinate; generating
/// the same chunk twice yields identical voxel contents.
pub trait TerrainGenerator {
    /// Fills every column of the chunk at `(cx, cz)`.
    fn generate_chunk(&self, world: &mut World, cx: i32, cz: i32);
}

/// The block ids a column profile is layered from, resolved once from the
/// injected registry.
#[derive(Copy, Clone, Debug)]
struct ColumnBlocks {
    surface: BlockId,
    subsoil: BlockId,
    bedrock: BlockId,
}

impl ColumnBlocks {
    fn resolve(registry: &BlockRegistry) -> Self {
        // The built-in table always carries these three names.
        ColumnBlocks {
            surface: registry.id_by_name("grass").unwrap_or(0),
            subsoil: registry.id_by_name("dirt").unwrap_or(0),
            bedrock: registry.id_by_name("stone").unwrap_or(0),
        }
    }

    /// The block id for a cell at `y` in a column whose surface is at
    /// `height`: grass at the surface, two cells of dirt beneath it, stone
    /// down to the bottom of the world, air above.
    fn block_for(&self, y: i32, height: i32) -> BlockId {
        if y > height {
            0
        } else if y == height {
            self.surface
        } else if y > height - 3 {
            self.subsoil
        } else {
            self.bedrock
        }
    }
}

/// The default terrain profile: a single flat surface at a fixed height.
///
/// Deterministic and idempotent; regenerating a chunk rewrites exactly the
/// same contents.
pub struct FlatTerrain {
    blocks: ColumnBlocks,
    surface_height: i32,
}

impl FlatTerrain {
    /// Creates a flat profile with the given surface height, resolving
    /// block ids through the injected registry.
    pub fn new(registry: &BlockRegistry, surface_height: i32) -> Self {
        FlatTerrain {
            blocks: ColumnBlocks::resolve(registry),
            surface_height: surface_height.clamp(0, WORLD_HEIGHT - 1),
        }
    }

    /// Creates the default profile (surface at height 32).
    pub fn with_default_height(registry: &BlockRegistry) -> Self {
        Self::new(registry, DEFAULT_SURFACE_HEIGHT)
    }
}

impl TerrainGenerator for FlatTerrain {
    fn generate_chunk(&self, world: &mut World, cx: i32, cz: i32) {
        debug!("generating flat chunk ({cx}, {cz})");
        for lz in 0..CHUNK_DIMENSION {
            for lx in 0..CHUNK_DIMENSION {
                let x = cx * CHUNK_DIMENSION + lx;
                let z = cz * CHUNK_DIMENSION + lz;
                for y in 0..=self.surface_height {
                    world.set_block(x, y, z, self.blocks.block_for(y, self.surface_height));
                }
            }
        }
    }
}

/// Scaling factor applied to world coordinates when sampling Perlin noise.
const PERLIN_SCALE_FACTOR: f64 = 0.02;

/// A rolling heightmap profile sampled from 2D Perlin noise.
///
/// Column layering is identical to [`FlatTerrain`]; only the surface height
/// varies. Deterministic for a fixed seed.
pub struct PerlinTerrain {
    blocks: ColumnBlocks,
    perlin: Perlin,
    base_height: i32,
    amplitude: f64,
}

impl PerlinTerrain {
    /// Creates a noise profile around the given base height.
    pub fn new(registry: &BlockRegistry, seed: u32, base_height: i32, amplitude: f64) -> Self {
        PerlinTerrain {
            blocks: ColumnBlocks::resolve(registry),
            perlin: Perlin::new(seed),
            base_height,
            amplitude,
        }
    }

    fn surface_height_at(&self, x: i32, z: i32) -> i32 {
        let sample = self.perlin.get([
            x as f64 * PERLIN_SCALE_FACTOR,
            z as f64 * PERLIN_SCALE_FACTOR,
        ]);
        let height = self.base_height + (sample * self.amplitude).round() as i32;
        height.clamp(1, WORLD_HEIGHT - 1)
    }
}

impl TerrainGenerator for PerlinTerrain {
    fn generate_chunk(&self, world: &mut World, cx: i32, cz: i32) {
        debug!("generating perlin chunk ({cx}, {cz})");
        for lz in 0..CHUNK_DIMENSION {
            for lx in 0..CHUNK_DIMENSION {
                let x = cx * CHUNK_DIMENSION + lx;
                let z = cz * CHUNK_DIMENSION + lz;
                let height = self.surface_height_at(x, z);
                for y in 0..=height {
                    world.set_block(x, y, z, self.blocks.block_for(y, height));
                }
            }
        }
    }
}

/// Sparseness of the scattered debug profile (probability a cell stays air).
const SCATTER_SPARSENESS: f64 = 0.9;

/// A debug profile that scatters stone blocks at random through the full
/// chunk volume. Seeded per chunk coordinate, so it is still deterministic.
pub struct ScatteredTerrain {
    blocks: ColumnBlocks,
    seed: u64,
}

impl ScatteredTerrain {
    /// Creates a scattered profile with the given base seed.
    pub fn new(registry: &BlockRegistry, seed: u64) -> Self {
        ScatteredTerrain {
            blocks: ColumnBlocks::resolve(registry),
            seed,
        }
    }
}

impl TerrainGenerator for ScatteredTerrain {
    fn generate_chunk(&self, world: &mut World, cx: i32, cz: i32) {
        let chunk_seed = self
            .seed
            .wrapping_add((cx as u64).wrapping_mul(0x9E37_79B9))
            .wrapping_add((cz as u64).wrapping_mul(0x85EB_CA6B));
        let mut rng = fastrand::Rng::with_seed(chunk_seed);
        for lz in 0..CHUNK_DIMENSION {
            for lx in 0..CHUNK_DIMENSION {
                for y in 0..WORLD_HEIGHT {
                    if rng.f64() >= SCATTER_SPARSENESS {
                        world.set_block(
                            cx * CHUNK_DIMENSION + lx,
                            y,
                            cz * CHUNK_DIMENSION + lz,
                            self.blocks.bedrock,
                        );
                    }
                }
            }
        }
    }
}
