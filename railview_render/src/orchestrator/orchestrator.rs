/// Frame orchestrator - the multi-pass render state machine
///
/// One `render_frame` call walks a fixed pass sequence over offscreen
/// targets: scene geometry into the main target, an optional height-field
/// simulation step over a ping-pong pair, the displaced water surface on
/// top of the scene, a filtered copy into the sub target, and finally the
/// composite onto the window surface with the sub view inset.

use glam::{Mat4, Vec2, Vec3};

use crate::audio::{AudioListener, DEFAULT_SOURCE_POSITION};
use crate::camera::{self, CameraMode, CameraRig, FrameCamera};
use crate::error::Result;
use crate::gfx::{
    AttachmentFlags, ClearOps, FrameCommands, GpuProgram, GraphicsDevice, MeshData, PickRegion,
    Viewport,
};
use crate::orchestrator::{FrameClock, FrameInput, LightRig};
use crate::render_info;
use crate::scene::{self, MeshKey, SceneMeshes, TrackData};
use crate::shaders::{ProgramId, ShaderLibrary};
use crate::targets::{OffscreenTarget, PingPongTargets};
use crate::transforms::TransformBroadcast;
use crate::waves::WaveField;

/// Side length of the square height-field targets
const HEIGHT_FIELD_SIZE: u32 = 256;
/// Quads per side of the water grid
const WATER_GRID_RESOLUTION: u32 = 64;
/// World extent of the water grid
const WATER_GRID_SIZE: f32 = 100.0;
/// Water surface rest position
const WATER_POSITION: Vec3 = Vec3::new(0.0, 10.0, 0.0);
/// Ground plane world extent
const GROUND_SCALE: f32 = 200.0;
/// Vehicle model scale
const TRAIN_SCALE: f32 = 5.0;
/// Control point marker side length
const MARKER_SIZE: f32 = 2.0;
/// Side length of the square pick window around the cursor
const PICK_WINDOW: u32 = 5;
/// Inset margin of the sub view in the composite, pixels
const SUB_VIEW_MARGIN: u32 = 10;

const MARKER_COLOR: Vec3 = Vec3::new(240.0 / 255.0, 60.0 / 255.0, 60.0 / 255.0);
const MARKER_SELECTED_COLOR: Vec3 = Vec3::new(240.0 / 255.0, 240.0 / 255.0, 30.0 / 255.0);
const GROUND_COLOR: Vec3 = Vec3::new(0.2, 0.6, 0.2);
const TRAIN_COLOR: Vec3 = Vec3::new(0.8, 0.3, 0.2);

/// Owns the render-side scene state and drives the pass sequence
pub struct RenderOrchestrator {
    device: Box<dyn GraphicsDevice>,
    shaders: ShaderLibrary,
    transforms: TransformBroadcast,
    waves: WaveField,
    meshes: SceneMeshes,

    ground: MeshKey,
    water: MeshKey,
    quad: MeshKey,
    marker: MeshKey,
    train: Option<MeshKey>,

    main_target: OffscreenTarget,
    sub_target: OffscreenTarget,
    height_field: PingPongTargets,

    clock: FrameClock,
    frame_camera: Option<FrameCamera>,
    selected_point: Option<usize>,
    source_position: Vec3,
    viewport: (u32, u32),
}

impl RenderOrchestrator {
    /// Build the orchestrator: compile programs, allocate the shared
    /// transform block and all offscreen targets, upload the built-in
    /// meshes. Any failure here is fatal.
    pub fn new(mut device: Box<dyn GraphicsDevice>, width: u32, height: u32) -> Result<Self> {
        let mut shaders = ShaderLibrary::new();
        shaders.ensure_loaded(device.as_mut())?;

        let transforms = TransformBroadcast::new(device.as_mut())?;

        let mut meshes = SceneMeshes::new();
        let ground = meshes.upload(device.as_mut(), "ground_plane", &scene::ground_plane())?;
        let water = meshes.upload(
            device.as_mut(),
            "water_grid",
            &scene::water_grid(WATER_GRID_RESOLUTION, WATER_GRID_SIZE),
        )?;
        let quad = meshes.upload(device.as_mut(), "fullscreen_quad", &scene::fullscreen_quad())?;
        let marker = meshes.upload(
            device.as_mut(),
            "point_marker",
            &scene::point_marker(MARKER_SIZE),
        )?;

        let (main_target, sub_target) = Self::create_view_targets(device.as_mut(), width, height)?;
        let height_field = PingPongTargets::create(
            device.as_mut(),
            ["height_field_a", "height_field_b"],
            HEIGHT_FIELD_SIZE,
            HEIGHT_FIELD_SIZE,
            AttachmentFlags::COLOR,
        )?;

        render_info!(
            "railview::RenderOrchestrator",
            "initialized at {}x{}",
            width,
            height
        );

        Ok(Self {
            device,
            shaders,
            transforms,
            waves: WaveField::with_default_waves(),
            meshes,
            ground,
            water,
            quad,
            marker,
            train: None,
            main_target,
            sub_target,
            height_field,
            clock: FrameClock::new(),
            frame_camera: None,
            selected_point: None,
            source_position: DEFAULT_SOURCE_POSITION,
            viewport: (width, height),
        })
    }

    fn create_view_targets(
        device: &mut dyn GraphicsDevice,
        width: u32,
        height: u32,
    ) -> Result<(OffscreenTarget, OffscreenTarget)> {
        let main_target = OffscreenTarget::create(
            device,
            "main_color",
            width,
            height,
            AttachmentFlags::COLOR | AttachmentFlags::DEPTH,
        )?;
        let sub_target = OffscreenTarget::create(
            device,
            "sub_color",
            (width / 4).max(1),
            (height / 4).max(1),
            AttachmentFlags::COLOR,
        )?;
        Ok((main_target, sub_target))
    }

    // ===== accessors =====

    pub fn waves(&self) -> &WaveField {
        &self.waves
    }

    pub fn waves_mut(&mut self) -> &mut WaveField {
        &mut self.waves
    }

    /// Camera state of the most recently rendered frame
    pub fn frame_camera(&self) -> Option<&FrameCamera> {
        self.frame_camera.as_ref()
    }

    pub fn selected_point(&self) -> Option<usize> {
        self.selected_point
    }

    pub fn set_selected_point(&mut self, selected: Option<usize>) {
        self.selected_point = selected;
    }

    /// Ambient audio focus used when no control point is selected
    pub fn set_source_position(&mut self, position: Vec3) {
        self.source_position = position;
    }

    /// Upload and install the vehicle mesh
    pub fn set_train_mesh(&mut self, data: &MeshData) -> Result<()> {
        let key = self.meshes.upload(self.device.as_mut(), "train", data)?;
        if let Some(old) = self.train.replace(key) {
            self.meshes.remove(old);
        }
        Ok(())
    }

    // ===== frame entry points =====

    /// Render one frame, timing the step from the wall clock
    pub fn render_frame(
        &mut self,
        input: &FrameInput,
        track: &TrackData,
        rig: &mut dyn CameraRig,
        audio: &mut dyn AudioListener,
    ) -> Result<()> {
        let delta = self.clock.tick();
        self.render_frame_with_delta(delta, input, track, rig, audio)
    }

    /// Render one frame with an explicit time step
    pub fn render_frame_with_delta(
        &mut self,
        delta_seconds: f32,
        input: &FrameInput,
        track: &TrackData,
        rig: &mut dyn CameraRig,
        audio: &mut dyn AudioListener,
    ) -> Result<()> {
        self.waves.advance(delta_seconds);

        // Free movement only applies in the orbit mode; the ride-along
        // camera is driven by the vehicle and the top view is fixed.
        if input.camera_mode == CameraMode::WorldOrbit {
            rig.apply_movement(input.movement, delta_seconds);
        }

        self.ensure_viewport(input.viewport_width, input.viewport_height)?;
        let (width, height) = self.viewport;

        let frame_camera = camera::resolve(input.camera_mode, width, height, rig);

        // Camera matrices are uploaded once, before any pass runs
        self.transforms
            .write(frame_camera.projection, frame_camera.view)?;

        let mut commands = self.device.begin_frame()?;
        commands.set_viewport(Viewport::full(width, height));
        self.transforms.bind_for_read(commands.as_mut());

        self.geometry_pass(commands.as_mut(), &frame_camera, input, track)?;
        if input.height_field_active {
            self.simulation_pass(commands.as_mut(), input)?;
        }
        self.water_pass(commands.as_mut(), &frame_camera)?;
        self.sub_screen_pass(commands.as_mut())?;
        self.composite_pass(commands.as_mut())?;

        self.device.end_frame(commands)?;

        // The listener follows the selected control point, or the ambient
        // source when nothing is selected
        let focus = self
            .selected_point
            .and_then(|i| track.control_points.get(i).copied())
            .unwrap_or(self.source_position);
        audio.set_listener_position(focus);

        self.frame_camera = Some(frame_camera);
        Ok(())
    }

    /// Resolve the control point under the cursor.
    ///
    /// Replays the markers through an identification pass using the last
    /// rendered frame's camera; returns `None` before the first frame.
    pub fn pick(&mut self, x: i32, y: i32, track: &TrackData) -> Result<Option<usize>> {
        if self.frame_camera.is_none() {
            return Ok(None);
        }
        let (width, height) = self.viewport;

        let mut commands = self.device.begin_frame()?;
        commands.set_viewport(Viewport::full(width, height));
        // The pick replay reuses the matrices of the rendered frame
        self.transforms.bind_for_read(commands.as_mut());

        let half = PICK_WINDOW as i32 / 2;
        commands.begin_pick(PickRegion {
            x: x - half,
            y: y - half,
            width: PICK_WINDOW,
            height: PICK_WINDOW,
        });
        if let Some(marker) = self.meshes.get(self.marker) {
            for (i, point) in track.control_points.iter().enumerate() {
                // Identifier 0 means "no hit", so points are tagged 1-based
                commands.pick_draw(i as u32 + 1, marker, &Mat4::from_translation(*point));
            }
        }
        let hit = commands.end_pick()?;
        self.device.end_frame(commands)?;

        let selected = hit
            .map(|id| id as usize - 1)
            .filter(|&i| i < track.control_points.len());
        self.selected_point = selected;
        Ok(selected)
    }

    // ===== viewport management =====

    /// Match the offscreen targets to the window surface. Targets are
    /// never resized in place; a size change drops and recreates them.
    fn ensure_viewport(&mut self, width: u32, height: u32) -> Result<()> {
        let width = width.max(1);
        let height = height.max(1);
        if (width, height) == self.viewport {
            return Ok(());
        }
        let (main_target, sub_target) =
            Self::create_view_targets(self.device.as_mut(), width, height)?;
        self.main_target = main_target;
        self.sub_target = sub_target;
        self.device.resize(width, height);
        self.viewport = (width, height);
        render_info!(
            "railview::RenderOrchestrator",
            "viewport changed to {}x{}",
            width,
            height
        );
        Ok(())
    }

    // ===== passes =====

    fn geometry_pass(
        &self,
        commands: &mut dyn FrameCommands,
        frame_camera: &FrameCamera,
        input: &FrameInput,
        track: &TrackData,
    ) -> Result<()> {
        self.main_target
            .bind_as_draw(commands, ClearOps::scene_default());

        let program = self.bind_scene_lighting(commands, frame_camera, input)?;

        if let Some(ground) = self.meshes.get(self.ground) {
            program.set_mat4(
                "model",
                &Mat4::from_scale(Vec3::new(GROUND_SCALE, 1.0, GROUND_SCALE)),
            );
            program.set_vec3("objectColor", GROUND_COLOR);
            commands.draw_mesh(ground);
        }

        if let Some(train) = self.train.and_then(|key| self.meshes.get(key)) {
            program.set_mat4("model", &Mat4::from_scale(Vec3::splat(TRAIN_SCALE)));
            program.set_vec3("objectColor", TRAIN_COLOR);
            commands.draw_mesh(train);
        }

        // Markers would sit in the rider's face in the ride-along view
        if frame_camera.mode != CameraMode::RideAlong {
            self.draw_markers(commands, track)?;
        }

        // Darkening shadow sub-pass: geometry replayed flattened onto the
        // ground with color writes suppressed. The top view has no use
        // for it, shadows are invisible from straight above.
        if input.shadows_enabled && frame_camera.mode != CameraMode::TopOrthographic {
            commands.set_color_writes(false);
            if let Some(train) = self.train.and_then(|key| self.meshes.get(key)) {
                let flatten = Mat4::from_translation(Vec3::new(0.0, 0.01, 0.0))
                    * Mat4::from_scale(Vec3::new(TRAIN_SCALE, 0.0, TRAIN_SCALE));
                program.set_mat4("model", &flatten);
                commands.draw_mesh(train);
            }
            commands.set_color_writes(true);
        }

        commands.end_target();
        Ok(())
    }

    /// Bind the lit-geometry program for the active rig and upload the
    /// light constants. Falls back to the directional sun when the frame
    /// camera disables the requested light.
    fn bind_scene_lighting<'a>(
        &'a self,
        commands: &mut dyn FrameCommands,
        frame_camera: &FrameCamera,
        input: &FrameInput,
    ) -> Result<&'a std::sync::Arc<dyn GpuProgram>> {
        let rig = match input.light_rig {
            LightRig::Point if !frame_camera.lights[1] => LightRig::Directional,
            LightRig::Spot if !frame_camera.lights[2] => LightRig::Directional,
            other => other,
        };
        let id = match rig {
            LightRig::Directional => ProgramId::DirectionalLight,
            LightRig::Point => ProgramId::PointLight,
            LightRig::Spot => ProgramId::SpotLight,
        };
        let program = self.shaders.program(id)?;
        commands.bind_program(program);

        program.set_vec3("viewPos", frame_camera.eye);
        program.set_float("material.shininess", 32.0);

        match rig {
            LightRig::Directional => {
                program.set_vec3("dirLight.direction", Vec3::new(-1.0, -0.1, -0.3));
                program.set_vec3("dirLight.ambient", Vec3::splat(0.1));
                program.set_vec3("dirLight.diffuse", Vec3::splat(0.8));
                program.set_vec3("dirLight.specular", Vec3::splat(1.0));
            }
            LightRig::Point => {
                program.set_vec3("pointLight.position", Vec3::new(50.0, 30.0, 2.0));
                program.set_vec3("pointLight.ambient", Vec3::splat(0.2));
                program.set_vec3("pointLight.diffuse", Vec3::splat(0.5));
                program.set_vec3("pointLight.specular", Vec3::splat(1.0));
                program.set_float("pointLight.constant", 0.01);
                program.set_float("pointLight.linear", 0.001);
                program.set_float("pointLight.quadratic", 0.001);
            }
            LightRig::Spot => {
                // The spot rides the camera and points down the view axis
                let forward = -frame_camera.view.row(2).truncate();
                program.set_vec3("spotLight.position", frame_camera.eye);
                program.set_vec3("spotLight.direction", forward);
                program.set_float("spotLight.cutOff", 12.5_f32.to_radians().cos());
                program.set_vec3("spotLight.ambient", Vec3::splat(0.1));
                program.set_vec3("spotLight.diffuse", Vec3::splat(0.8));
                program.set_vec3("spotLight.specular", Vec3::splat(1.0));
                program.set_float("spotLight.constant", 1.0);
                program.set_float("spotLight.linear", 0.09);
                program.set_float("spotLight.quadratic", 0.032);
            }
        }
        Ok(program)
    }

    fn draw_markers(&self, commands: &mut dyn FrameCommands, track: &TrackData) -> Result<()> {
        if track.control_points.is_empty() {
            return Ok(());
        }
        let program = self.shaders.program(ProgramId::LightSource)?;
        commands.bind_program(program);
        if let Some(marker) = self.meshes.get(self.marker) {
            for (i, point) in track.control_points.iter().enumerate() {
                let color = if self.selected_point == Some(i) {
                    MARKER_SELECTED_COLOR
                } else {
                    MARKER_COLOR
                };
                program.set_mat4("model", &Mat4::from_translation(*point));
                program.set_vec3("objectColor", color);
                commands.draw_mesh(marker);
            }
        }
        Ok(())
    }

    /// One height-field relaxation step: sample the read target, render
    /// the next state into the write target, flip exactly once.
    fn simulation_pass(
        &mut self,
        commands: &mut dyn FrameCommands,
        input: &FrameInput,
    ) -> Result<()> {
        let program = self.shaders.program(ProgramId::HeightField)?;
        self.height_field
            .write()
            .bind_as_draw(commands, ClearOps::none());
        commands.set_viewport(Viewport::full(HEIGHT_FIELD_SIZE, HEIGHT_FIELD_SIZE));

        commands.bind_program(program);
        self.height_field.read().bind_as_read(commands, 0);
        program.set_int("heightMap", 0);
        match input.height_field_disturbance {
            Some(center) => {
                program.set_int("u_mode", 1);
                program.set_vec2("u_center", center);
            }
            None => {
                program.set_int("u_mode", 0);
                program.set_vec2("u_center", Vec2::splat(0.5));
            }
        }
        if let Some(quad) = self.meshes.get(self.quad) {
            commands.draw_mesh(quad);
        }
        commands.end_target();

        self.height_field.flip();

        let (width, height) = self.viewport;
        commands.set_viewport(Viewport::full(width, height));
        Ok(())
    }

    /// Draw the displaced water over the already-rendered scene
    fn water_pass(
        &self,
        commands: &mut dyn FrameCommands,
        frame_camera: &FrameCamera,
    ) -> Result<()> {
        let program = self.shaders.program(ProgramId::WaterSurface)?;
        self.main_target.bind_as_draw(commands, ClearOps::none());
        commands.bind_program(program);

        let payload = self.waves.sample_uniform_payload();
        program.set_mat4("model", &Mat4::from_translation(WATER_POSITION));
        program.set_float("time", payload.sim_clock);
        program.set_int("numWaves", payload.active_count as i32);
        program.set_float_array("amplitude", &payload.amplitudes);
        program.set_float_array("wavelength", &payload.wavelengths);
        program.set_float_array("speed", &payload.speeds);
        program.set_vec2_array("direction", &payload.directions);
        program.set_vec3("EyePos", frame_camera.eye);

        if let Some(water) = self.meshes.get(self.water) {
            commands.draw_mesh(water);
        }
        commands.end_target();
        Ok(())
    }

    /// Filter the main target into the quarter-size sub target
    fn sub_screen_pass(&self, commands: &mut dyn FrameCommands) -> Result<()> {
        let program = self.shaders.program(ProgramId::SubScreen)?;
        self.sub_target.bind_as_draw(
            commands,
            ClearOps {
                color: Some([0.0, 0.0, 0.0, 1.0]),
                depth: None,
                stencil: None,
            },
        );
        commands.set_viewport(Viewport::full(
            self.sub_target.width(),
            self.sub_target.height(),
        ));

        commands.bind_program(program);
        self.main_target.bind_as_read(commands, 0);
        program.set_int("screenTexture", 0);
        if let Some(quad) = self.meshes.get(self.quad) {
            commands.draw_mesh(quad);
        }
        commands.end_target();
        Ok(())
    }

    /// Composite the main target onto the window surface, then the sub
    /// target as an inset in the top-right corner
    fn composite_pass(&self, commands: &mut dyn FrameCommands) -> Result<()> {
        let program = self.shaders.program(ProgramId::MainScreen)?;
        let (width, height) = self.viewport;

        commands.begin_target(None, ClearOps::scene_default());
        commands.set_viewport(Viewport::full(width, height));

        commands.bind_program(program);
        self.main_target.bind_as_read(commands, 0);
        program.set_int("screenTexture", 0);
        let quad = self.meshes.get(self.quad).cloned();
        if let Some(quad) = &quad {
            commands.draw_mesh(quad);
        }

        let sub_width = self.sub_target.width();
        let sub_height = self.sub_target.height();
        commands.set_viewport(Viewport {
            x: (width.saturating_sub(sub_width + SUB_VIEW_MARGIN)) as f32,
            y: (height.saturating_sub(sub_height + SUB_VIEW_MARGIN)) as f32,
            width: sub_width as f32,
            height: sub_height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        });
        self.sub_target.bind_as_read(commands, 0);
        if let Some(quad) = &quad {
            commands.draw_mesh(quad);
        }

        commands.set_viewport(Viewport::full(width, height));
        commands.end_target();
        Ok(())
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
