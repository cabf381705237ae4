//! # Voxel World
//!
//! A real-time voxel world core: sparse chunked block storage, procedural
//! terrain generation, face-culling mesh extraction, and kinematic player
//! physics against the voxel grid.
//!
//! ## Key Modules
//!
//! * `voxels` - Block registry, chunked storage, coordinate mapping, and terrain generation
//! * `meshing` - Conversion of chunk sections into renderable vertex data
//! * `physics` - Kinematic body simulation and voxel raycasting
//! * `config` - Startup configuration loading
//!
//! ## Architecture
//!
//! The world is the single source of truth for block state. The mesher and
//! the kinematic body only read it; block mutation flows exclusively through
//! `World::set_block`, which keeps per-section mesh caches invalidated.
//! Rendering, input, and the frame loop live outside this crate and talk to
//! it through narrow seams: the `MeshUpload` trait for GPU buffer ownership
//! and the `UvLookup` trait for texture-atlas coordinates.
//!
//! ## Execution Model
//!
//! Everything here runs single-threaded and synchronously: one simulation
//! tick, then on-demand mesh rebuilds. Generation and meshing are pure CPU
//! loops with no blocking operations and no cancellation.

#![warn(missing_docs)]

pub mod config;
pub mod meshing;
pub mod physics;
pub mod voxels;
