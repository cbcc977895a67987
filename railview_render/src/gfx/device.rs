/// Graphics device trait - main resource factory interface

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use winit::window::Window;

use crate::error::{Error, Result};
use crate::gfx::{
    FrameCommands, GpuMesh, GpuProgram, GpuTarget, MeshData, ProgramDesc, TargetDesc,
    UniformBlock, UniformBlockDesc,
};

/// Device configuration
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Enable validation/debug layers
    pub enable_validation: bool,
    /// Application name
    pub app_name: String,
    /// Application version (major, minor, patch)
    pub app_version: (u32, u32, u32),
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            enable_validation: cfg!(debug_assertions),
            app_name: "Railview Application".to_string(),
            app_version: (1, 0, 0),
        }
    }
}

/// Device statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceStats {
    /// Number of draw calls this frame
    pub draw_calls: u32,
    /// Number of triangles drawn this frame
    pub triangles: u32,
    /// GPU memory used (bytes)
    pub gpu_memory_used: u64,
}

/// Main graphics device trait
///
/// Central factory interface for GPU resources and per-frame command
/// recording. Implemented by backend-specific devices.
pub trait GraphicsDevice: Send + Sync {
    /// Create a shader program
    fn create_program(&mut self, desc: &ProgramDesc) -> Result<Arc<dyn GpuProgram>>;

    /// Create a render target
    fn create_target(&mut self, desc: &TargetDesc) -> Result<Arc<dyn GpuTarget>>;

    /// Create a uniform block
    fn create_uniform_block(&mut self, desc: &UniformBlockDesc) -> Result<Arc<dyn UniformBlock>>;

    /// Upload a mesh
    fn create_mesh(&mut self, label: &'static str, data: &MeshData) -> Result<Arc<dyn GpuMesh>>;

    /// Begin recording a new frame
    fn begin_frame(&mut self) -> Result<Box<dyn FrameCommands>>;

    /// Submit the recorded frame and present
    fn end_frame(&mut self, commands: Box<dyn FrameCommands>) -> Result<()>;

    /// Get statistics about the device
    fn stats(&self) -> DeviceStats;

    /// Notify the device that the window surface has been resized
    fn resize(&mut self, width: u32, height: u32);
}

// ============================================================================
// Plugin system for registering device backends
// ============================================================================

/// Device plugin factory function type
type DevicePluginFactory =
    Box<dyn Fn(&Window, DeviceConfig) -> Result<Box<dyn GraphicsDevice>> + Send + Sync>;

/// Plugin registry for device backends
pub struct DevicePluginRegistry {
    plugins: HashMap<&'static str, DevicePluginFactory>,
}

impl DevicePluginRegistry {
    fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Register a plugin
    ///
    /// # Arguments
    ///
    /// * `name` - Plugin name (e.g., "opengl")
    /// * `factory` - Factory function to create the device
    pub fn register_plugin<F>(&mut self, name: &'static str, factory: F)
    where
        F: Fn(&Window, DeviceConfig) -> Result<Box<dyn GraphicsDevice>> + Send + Sync + 'static,
    {
        self.plugins.insert(name, Box::new(factory));
    }

    /// Whether a plugin with the given name is registered
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Create a device using a registered plugin
    pub fn create_device(
        &self,
        plugin_name: &str,
        window: &Window,
        config: DeviceConfig,
    ) -> Result<Box<dyn GraphicsDevice>> {
        self.plugins
            .get(plugin_name)
            .ok_or_else(|| {
                Error::InitializationFailed(format!("Plugin '{}' not found", plugin_name))
            })?(window, config)
    }
}

static DEVICE_REGISTRY: Mutex<Option<DevicePluginRegistry>> = Mutex::new(None);

/// Get the global device plugin registry
pub fn device_plugin_registry() -> &'static Mutex<Option<DevicePluginRegistry>> {
    // Initialize on first access
    let mut registry = DEVICE_REGISTRY.lock().unwrap();
    if registry.is_none() {
        *registry = Some(DevicePluginRegistry::new());
    }
    drop(registry);
    &DEVICE_REGISTRY
}

/// Register a device backend plugin in the global registry
pub fn register_device_plugin<F>(name: &'static str, factory: F)
where
    F: Fn(&Window, DeviceConfig) -> Result<Box<dyn GraphicsDevice>> + Send + Sync + 'static,
{
    device_plugin_registry()
        .lock()
        .unwrap()
        .as_mut()
        .unwrap()
        .register_plugin(name, factory);
}

/// Create a device from a registered backend plugin
pub fn create_device(
    plugin_name: &str,
    window: &Window,
    config: DeviceConfig,
) -> Result<Box<dyn GraphicsDevice>> {
    device_plugin_registry()
        .lock()
        .unwrap()
        .as_ref()
        .unwrap()
        .create_device(plugin_name, window, config)
}

#[cfg(test)]
#[path = "device_tests.rs"]
mod tests;
