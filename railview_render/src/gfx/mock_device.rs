/// Mock graphics device for unit tests (no GPU required)
///
/// Records every resource creation and frame command into a shared event
/// log so tests can assert on pass ordering, and keeps parameter uploads
/// per program so tests can assert on uniform values.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use glam::{Mat4, Vec2, Vec3};
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::gfx::{
    AttachmentFlags, ClearOps, DeviceStats, FrameCommands, GpuMesh, GpuProgram, GpuTarget,
    GraphicsDevice, MeshData, ParamKind, ParamSpec, PickRegion, ProgramDesc, TargetDesc,
    UniformBlock, UniformBlockDesc, Viewport,
};

// ============================================================================
// Event log
// ============================================================================

/// Shared, ordered record of everything the mock device was asked to do
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    /// Index of the first event containing `needle`
    pub fn index_of(&self, needle: &str) -> Option<usize> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .position(|e| e.contains(needle))
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.index_of(needle).is_some()
    }

    pub fn count_of(&self, needle: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.contains(needle))
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

// ============================================================================
// Mock program
// ============================================================================

/// Last value uploaded for a named parameter
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Float(f32),
    Int(i32),
    Vec2(Vec2),
    Vec3(Vec3),
    Mat4(Mat4),
    FloatArray(Vec<f32>),
    Vec2Array(Vec<Vec2>),
}

pub struct MockProgram {
    name: &'static str,
    params: &'static [ParamSpec],
    values: Mutex<FxHashMap<String, ParamValue>>,
    ignored: Mutex<u32>,
}

impl MockProgram {
    fn new(desc: &ProgramDesc) -> Self {
        Self {
            name: desc.name,
            params: desc.params,
            values: Mutex::new(FxHashMap::default()),
            ignored: Mutex::new(0),
        }
    }

    /// Last uploaded value for a parameter, if any
    pub fn value(&self, name: &str) -> Option<ParamValue> {
        self.values.lock().unwrap().get(name).cloned()
    }

    /// Number of setter calls that named an undeclared parameter
    pub fn ignored_count(&self) -> u32 {
        *self.ignored.lock().unwrap()
    }

    fn store(&self, name: &str, kind: ParamKind, value: ParamValue) {
        if self.accepts(name, kind) {
            self.values.lock().unwrap().insert(name.to_string(), value);
        } else {
            *self.ignored.lock().unwrap() += 1;
        }
    }
}

impl GpuProgram for MockProgram {
    fn name(&self) -> &str {
        self.name
    }

    fn accepts(&self, name: &str, kind: ParamKind) -> bool {
        self.params.iter().any(|p| p.name == name && p.kind == kind)
    }

    fn set_float(&self, name: &str, value: f32) {
        self.store(name, ParamKind::Float, ParamValue::Float(value));
    }

    fn set_int(&self, name: &str, value: i32) {
        self.store(name, ParamKind::Int, ParamValue::Int(value));
    }

    fn set_vec2(&self, name: &str, value: Vec2) {
        self.store(name, ParamKind::Vec2, ParamValue::Vec2(value));
    }

    fn set_vec3(&self, name: &str, value: Vec3) {
        self.store(name, ParamKind::Vec3, ParamValue::Vec3(value));
    }

    fn set_mat4(&self, name: &str, value: &Mat4) {
        self.store(name, ParamKind::Mat4, ParamValue::Mat4(*value));
    }

    fn set_float_array(&self, name: &str, values: &[f32]) {
        self.store(
            name,
            ParamKind::FloatArray(values.len()),
            ParamValue::FloatArray(values.to_vec()),
        );
    }

    fn set_vec2_array(&self, name: &str, values: &[Vec2]) {
        self.store(
            name,
            ParamKind::Vec2Array(values.len()),
            ParamValue::Vec2Array(values.to_vec()),
        );
    }
}

// ============================================================================
// Mock uniform block
// ============================================================================

pub struct MockUniformBlock {
    label: &'static str,
    size: u64,
    data: Mutex<Vec<u8>>,
    log: EventLog,
}

impl UniformBlock for MockUniformBlock {
    fn size(&self) -> u64 {
        self.size
    }

    fn write(&self, offset: u64, data: &[u8]) -> Result<()> {
        let end = offset as usize + data.len();
        if end as u64 > self.size {
            return Err(Error::InvalidResource(format!(
                "write past end of uniform block '{}'",
                self.label
            )));
        }
        self.data.lock().unwrap()[offset as usize..end].copy_from_slice(data);
        self.log.push(format!(
            "uniform_write {} offset={} len={}",
            self.label,
            offset,
            data.len()
        ));
        Ok(())
    }

    fn contents(&self) -> Result<Vec<u8>> {
        Ok(self.data.lock().unwrap().clone())
    }
}

// ============================================================================
// Mock target
// ============================================================================

pub struct MockTarget {
    desc: TargetDesc,
    log: EventLog,
}

impl GpuTarget for MockTarget {
    fn width(&self) -> u32 {
        self.desc.width
    }

    fn height(&self) -> u32 {
        self.desc.height
    }

    fn attachments(&self) -> AttachmentFlags {
        self.desc.attachments
    }

    fn label(&self) -> &str {
        self.desc.label
    }
}

impl Drop for MockTarget {
    fn drop(&mut self) {
        self.log.push(format!("release_target {}", self.desc.label));
    }
}

// ============================================================================
// Mock mesh
// ============================================================================

pub struct MockMesh {
    label: &'static str,
    vertex_count: u32,
    index_count: u32,
}

impl GpuMesh for MockMesh {
    fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    fn index_count(&self) -> u32 {
        self.index_count
    }

    fn label(&self) -> &str {
        self.label
    }
}

// ============================================================================
// Mock frame commands
// ============================================================================

pub struct MockCommands {
    log: EventLog,
    pick_results: Arc<Mutex<VecDeque<u32>>>,
    pick_ids: Vec<u32>,
    in_pick: bool,
}

impl FrameCommands for MockCommands {
    fn set_viewport(&mut self, viewport: Viewport) {
        self.log.push(format!(
            "set_viewport {}x{} at ({}, {})",
            viewport.width, viewport.height, viewport.x, viewport.y
        ));
    }

    fn begin_target(&mut self, target: Option<&Arc<dyn GpuTarget>>, clear: ClearOps) {
        let label = target.map(|t| t.label().to_string());
        let label = label.as_deref().unwrap_or("surface");
        if clear == ClearOps::none() {
            self.log.push(format!("begin_target {} preserve", label));
        } else {
            self.log.push(format!("begin_target {}", label));
        }
    }

    fn end_target(&mut self) {
        self.log.push("end_target".to_string());
    }

    fn bind_program(&mut self, program: &Arc<dyn GpuProgram>) {
        self.log.push(format!("bind_program {}", program.name()));
    }

    fn bind_uniform_block(&mut self, _block: &Arc<dyn UniformBlock>, slot: u32) {
        self.log.push(format!("bind_uniform_block slot={}", slot));
    }

    fn bind_target_texture(&mut self, unit: u32, target: &Arc<dyn GpuTarget>) {
        self.log
            .push(format!("bind_texture unit={} {}", unit, target.label()));
    }

    fn set_color_writes(&mut self, enabled: bool) {
        self.log.push(format!(
            "color_writes {}",
            if enabled { "on" } else { "off" }
        ));
    }

    fn draw_mesh(&mut self, mesh: &Arc<dyn GpuMesh>) {
        self.log.push(format!("draw_mesh {}", mesh.label()));
    }

    fn begin_pick(&mut self, region: PickRegion) {
        assert!(!self.in_pick, "begin_pick while pick already active");
        self.in_pick = true;
        self.pick_ids.clear();
        self.log.push(format!(
            "begin_pick {}x{} at ({}, {})",
            region.width, region.height, region.x, region.y
        ));
    }

    fn pick_draw(&mut self, id: u32, mesh: &Arc<dyn GpuMesh>, _model: &Mat4) {
        assert!(self.in_pick, "pick_draw outside pick section");
        assert_ne!(id, 0, "pick identifier must be non-zero");
        self.pick_ids.push(id);
        self.log
            .push(format!("pick_draw id={} {}", id, mesh.label()));
    }

    fn end_pick(&mut self) -> Result<Option<u32>> {
        assert!(self.in_pick, "end_pick without begin_pick");
        self.in_pick = false;
        self.log.push("end_pick".to_string());

        // A configured result only hits if something was drawn with that id
        let result = self.pick_results.lock().unwrap().pop_front();
        Ok(result.filter(|id| self.pick_ids.contains(id)))
    }
}

// ============================================================================
// Mock device
// ============================================================================

pub struct MockDevice {
    log: EventLog,
    pick_results: Arc<Mutex<VecDeque<u32>>>,
    programs: Arc<Mutex<Vec<Arc<MockProgram>>>>,
    fail_targets: bool,
}

impl MockDevice {
    pub fn new() -> Self {
        Self {
            log: EventLog::new(),
            pick_results: Arc::new(Mutex::new(VecDeque::new())),
            programs: Arc::new(Mutex::new(Vec::new())),
            fail_targets: false,
        }
    }

    /// Make every subsequent target creation fail
    pub fn fail_target_creation(&mut self) {
        self.fail_targets = true;
    }

    /// Handle on the shared event log
    pub fn log(&self) -> EventLog {
        self.log.clone()
    }

    /// Queue a hit result for the next pick query
    pub fn push_pick_result(&self, id: u32) {
        self.pick_results.lock().unwrap().push_back(id);
    }

    /// Handle for queueing pick results after the device has been boxed
    pub fn pick_results(&self) -> Arc<Mutex<VecDeque<u32>>> {
        self.pick_results.clone()
    }

    /// Handle on the created-program list (for uniform assertions after
    /// the device has been boxed)
    pub fn programs(&self) -> Arc<Mutex<Vec<Arc<MockProgram>>>> {
        self.programs.clone()
    }
}

impl Default for MockDevice {
    fn default() -> Self {
        Self::new()
    }
}

/// Find a created program by name in a `MockDevice::programs` handle
pub fn find_program(
    programs: &Arc<Mutex<Vec<Arc<MockProgram>>>>,
    name: &str,
) -> Option<Arc<MockProgram>> {
    programs
        .lock()
        .unwrap()
        .iter()
        .find(|p| p.name() == name)
        .cloned()
}

impl GraphicsDevice for MockDevice {
    fn create_program(&mut self, desc: &ProgramDesc) -> Result<Arc<dyn GpuProgram>> {
        self.log.push(format!("create_program {}", desc.name));
        let program = Arc::new(MockProgram::new(desc));
        self.programs.lock().unwrap().push(program.clone());
        Ok(program)
    }

    fn create_target(&mut self, desc: &TargetDesc) -> Result<Arc<dyn GpuTarget>> {
        if self.fail_targets {
            return Err(Error::OutOfMemory);
        }
        self.log.push(format!(
            "create_target {} {}x{}",
            desc.label, desc.width, desc.height
        ));
        Ok(Arc::new(MockTarget {
            desc: *desc,
            log: self.log.clone(),
        }))
    }

    fn create_uniform_block(&mut self, desc: &UniformBlockDesc) -> Result<Arc<dyn UniformBlock>> {
        self.log.push(format!(
            "create_uniform_block {} size={}",
            desc.label, desc.size
        ));
        Ok(Arc::new(MockUniformBlock {
            label: desc.label,
            size: desc.size,
            data: Mutex::new(vec![0u8; desc.size as usize]),
            log: self.log.clone(),
        }))
    }

    fn create_mesh(&mut self, label: &'static str, data: &MeshData) -> Result<Arc<dyn GpuMesh>> {
        self.log.push(format!("create_mesh {}", label));
        Ok(Arc::new(MockMesh {
            label,
            vertex_count: data.positions.len() as u32,
            index_count: data.indices.len() as u32,
        }))
    }

    fn begin_frame(&mut self) -> Result<Box<dyn FrameCommands>> {
        self.log.push("begin_frame".to_string());
        Ok(Box::new(MockCommands {
            log: self.log.clone(),
            pick_results: self.pick_results.clone(),
            pick_ids: Vec::new(),
            in_pick: false,
        }))
    }

    fn end_frame(&mut self, _commands: Box<dyn FrameCommands>) -> Result<()> {
        self.log.push("end_frame".to_string());
        Ok(())
    }

    fn stats(&self) -> DeviceStats {
        DeviceStats::default()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.log.push(format!("resize {}x{}", width, height));
    }
}

#[cfg(test)]
#[path = "mock_device_tests.rs"]
mod tests;
