/// Uploaded mesh storage

use std::sync::Arc;

use slotmap::{new_key_type, SlotMap};

use crate::error::Result;
use crate::gfx::{GpuMesh, GraphicsDevice, MeshData};

new_key_type! {
    /// Stable handle to an uploaded mesh
    pub struct MeshKey;
}

/// Keyed storage for uploaded meshes
#[derive(Default)]
pub struct SceneMeshes {
    meshes: SlotMap<MeshKey, Arc<dyn GpuMesh>>,
}

impl SceneMeshes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload mesh data and store the handle
    pub fn upload(
        &mut self,
        device: &mut dyn GraphicsDevice,
        label: &'static str,
        data: &MeshData,
    ) -> Result<MeshKey> {
        let mesh = device.create_mesh(label, data)?;
        Ok(self.meshes.insert(mesh))
    }

    /// Register an already-uploaded mesh
    pub fn register(&mut self, mesh: Arc<dyn GpuMesh>) -> MeshKey {
        self.meshes.insert(mesh)
    }

    pub fn get(&self, key: MeshKey) -> Option<&Arc<dyn GpuMesh>> {
        self.meshes.get(key)
    }

    /// Drop a mesh; the backend resource is released when the last
    /// handle goes away
    pub fn remove(&mut self, key: MeshKey) -> Option<Arc<dyn GpuMesh>> {
        self.meshes.remove(key)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}
