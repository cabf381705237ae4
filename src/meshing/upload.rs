//! # Mesh Upload Seam
//!
//! The narrow interface through which built geometry leaves this crate.
//! The render collaborator owns the actual GPU buffers; the core only
//! keeps the opaque handles it gets back, stored inside each section next
//! to the vertex count.

use std::collections::HashMap;

/// Opaque handle to an externally owned vertex buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BufferId(pub u64);

/// Destination for built section geometry.
///
/// `vertices` is the packed 6-float-stride vertex data. A buffer created
/// once is re-uploaded in place on rebuilds rather than reallocated.
pub trait MeshUpload {
    /// Creates a buffer holding the given vertex data and returns its handle.
    fn create_buffer(&mut self, vertices: &[f32]) -> BufferId;

    /// Replaces the contents of an existing buffer.
    fn upload(&mut self, id: BufferId, vertices: &[f32]);
}

/// A `MeshUpload` backed by plain memory, standing in for the render
/// collaborator in the demo binary and in tests.
#[derive(Default)]
pub struct MemoryMeshStore {
    buffers: HashMap<BufferId, Vec<f32>>,
    next_id: u64,
}

impl MemoryMeshStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current contents of a buffer, if it exists.
    pub fn vertices(&self, id: BufferId) -> Option<&[f32]> {
        self.buffers.get(&id).map(Vec::as_slice)
    }

    /// Returns the number of buffers created so far.
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Returns the total float count across all buffers.
    pub fn total_floats(&self) -> usize {
        self.buffers.values().map(Vec::len).sum()
    }
}

impl MeshUpload for MemoryMeshStore {
    fn create_buffer(&mut self, vertices: &[f32]) -> BufferId {
        let id = BufferId(self.next_id);
        self.next_id += 1;
        self.buffers.insert(id, vertices.to_vec());
        id
    }

    fn upload(&mut self, id: BufferId, vertices: &[f32]) {
        self.buffers.insert(id, vertices.to_vec());
    }
}
