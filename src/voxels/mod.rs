//! # Voxel Storage Core
//!
//! This module contains the voxel data model: block kinds and their
//! registry, chunked storage with per-section mesh caches, world-space to
//! chunk-local coordinate mapping, and terrain generation.
//!
//! ## Architecture
//!
//! * **Block**: Defines block kinds, names, and opacity classification
//! * **Chunk**: A full-height vertical column of 16x16x16 sections
//! * **World**: Coordinates chunks and provides block access by absolute coordinate
//! * **Terrain**: Pluggable generators that fill chunks through the world's set operation
//!
//! ## Data Flow
//!
//! 1. World receives requests for block access or modification
//! 2. World resolves the owning chunk and section (allocating the chunk if needed)
//! 3. Writes mark the owning section's mesh cache dirty, plus adjacent
//!    sections when the write lands on a section or chunk boundary
//! 4. The mesher later rebuilds exactly the dirty sections

pub mod block;
pub mod chunk;
pub mod coords;
pub mod terrain;
pub mod world;
