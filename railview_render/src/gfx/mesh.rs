/// Mesh interface - indexed triangle geometry

/// CPU-side mesh data (interleaved on upload by the backend)
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Uploaded GPU mesh
pub trait GpuMesh: Send + Sync {
    /// Number of vertices
    fn vertex_count(&self) -> u32;

    /// Number of indices
    fn index_count(&self) -> u32;

    /// Debug label
    fn label(&self) -> &str;
}
