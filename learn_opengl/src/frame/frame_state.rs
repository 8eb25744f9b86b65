/// SandboxState: camera, render settings and timing for one window.
///
/// Update and render are split so the driver decides when to present.
/// Toggles fire on the press edge only: the snapshot from the previous
/// `update` is kept and compared against the new one.

use glam::Vec4;

use crate::camera::{CameraController, ProjectionMode};
use crate::config::SandboxConfig;
use crate::device::{GraphicsDevice, PolygonMode};
use crate::input::{Buttons, InputSnapshot};
use crate::scene::SceneLayout;
use crate::shader::ShaderProgram;
use super::frame_timer::FrameTimer;

const SOURCE: &str = "lgl::SandboxState";

/// Texture unit sampled by `tex`
pub const TEXTURE_UNIT_0: i32 = 0;
/// Texture unit sampled by `tex2`
pub const TEXTURE_UNIT_1: i32 = 1;

/// Rasterization toggles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSettings {
    pub wireframe: bool,
}

impl RenderSettings {
    pub fn polygon_mode(&self) -> PolygonMode {
        if self.wireframe {
            PolygonMode::Line
        } else {
            PolygonMode::Fill
        }
    }
}

/// What one `update` changed
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameUpdate {
    /// Seconds since the previous frame
    pub delta: f32,
    pub wireframe_toggled: bool,
    pub projection_toggled: bool,
    pub orientation_changed: bool,
    /// New field of view, when the scroll changed it
    pub fov: Option<f32>,
    pub close_requested: bool,
}

/// Per-window frame state
#[derive(Debug, Clone)]
pub struct SandboxState {
    camera: CameraController,
    settings: RenderSettings,
    timer: FrameTimer,
    scene: SceneLayout,
    previous: InputSnapshot,
    close_requested: bool,
    clear_color: [f32; 4],
    tint: Vec4,
    index_count: u32,
    verbose: bool,
}

impl SandboxState {
    pub fn new(config: &SandboxConfig) -> Self {
        Self {
            camera: CameraController::new(&config.camera, config.width, config.height),
            settings: RenderSettings::default(),
            timer: FrameTimer::new(),
            scene: SceneLayout::new(config.animation),
            previous: InputSnapshot::default(),
            close_requested: false,
            clear_color: config.clear_color,
            tint: config.tint,
            index_count: config.index_count,
            verbose: config.verbose,
        }
    }

    // ===== FRAME =====

    /// Advance one frame with this frame's input sampled at `now` seconds
    pub fn update<D: GraphicsDevice>(
        &mut self,
        device: &mut D,
        input: &InputSnapshot,
        now: f32,
    ) -> FrameUpdate {
        let delta = self.timer.tick(now);
        let mut update = FrameUpdate { delta, ..FrameUpdate::default() };

        if input.is_held(Buttons::CLOSE) && !self.close_requested {
            self.close_requested = true;
            crate::lgl_debug!(SOURCE, "Close requested");
        }
        update.close_requested = self.close_requested;

        if input.just_pressed(&self.previous, Buttons::WIREFRAME) {
            self.settings.wireframe = !self.settings.wireframe;
            device.set_polygon_mode(self.settings.polygon_mode());
            self.report_toggle("Wireframe", self.settings.wireframe);
            update.wireframe_toggled = true;
        }

        if self.camera.apply_movement(input, &self.previous, delta) {
            let perspective = self.camera.projection_mode() == ProjectionMode::Perspective;
            self.report_toggle("Perspective", perspective);
            update.projection_toggled = true;
        }

        update.orientation_changed =
            self.camera.apply_look(input.pointer_delta, input.is_held(Buttons::ROTATE));
        update.fov = self.camera.apply_scroll(input.scroll_delta);

        self.previous = *input;
        update
    }

    /// Track a framebuffer resize. Zero sizes (minimized) keep the old
    /// aspect but still reach the viewport.
    pub fn resize<D: GraphicsDevice>(&mut self, device: &mut D, width: u32, height: u32) {
        self.camera.resize(width, height);
        device.set_viewport(width, height);

        if self.verbose {
            crate::lgl_debug!(SOURCE, "Resized to ({}, {})", width, height);
        } else {
            crate::lgl_trace!(SOURCE, "Resized to ({}, {})", width, height);
        }
    }

    /// Draw the scene at `time` seconds with `program`
    pub fn render<D: GraphicsDevice>(
        &self,
        device: &mut D,
        program: &mut ShaderProgram<D>,
        time: f32,
    ) {
        device.clear(self.clear_color);

        program.activate(device);
        program.set_uniform(device, "tex", TEXTURE_UNIT_0);
        program.set_uniform(device, "tex2", TEXTURE_UNIT_1);
        program.set_uniform(device, "prog_color", self.tint);
        program.set_uniform(device, "view", self.camera.view_matrix());
        program.set_uniform(device, "projection", self.camera.projection_matrix());

        for model in self.scene.model_matrices(time) {
            program.set_uniform(device, "model", model);
            device.draw_indexed(self.index_count);
        }
    }

    fn report_toggle(&self, name: &str, value: bool) {
        let state = if value { "ON" } else { "OFF" };
        if self.verbose {
            crate::lgl_info!(SOURCE, "{}: {}", name, state);
        } else {
            crate::lgl_trace!(SOURCE, "{}: {}", name, state);
        }
    }

    // ===== ACCESSORS =====

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraController {
        &mut self.camera
    }

    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    pub fn scene(&self) -> &SceneLayout {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneLayout {
        &mut self.scene
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    pub fn previous_input(&self) -> &InputSnapshot {
        &self.previous
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Ask the driver to leave the loop after this frame
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }
}

#[cfg(test)]
#[path = "frame_state_tests.rs"]
mod tests;
