/// CameraController: first-person fly camera driven by input snapshots.
///
/// Two orthogonal state axes: projection mode (perspective/orthographic,
/// toggled on the press edge of `Buttons::PROJECTION`) and look mode (free
/// while `Buttons::ROTATE` is held, locked otherwise).
///
/// Position moves along the camera's current local axes. Orientation is
/// recomputed from absolute yaw/pitch after every change, never composed
/// incrementally.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::config::CameraConfig;
use crate::input::{Buttons, InputSnapshot};
use super::orientation::Orientation;
use super::projection::{Projection, ProjectionMode};

const SOURCE: &str = "lgl::CameraController";

/// Held button to camera-local unit direction
const MOVES: [(Buttons, Vec3); 6] = [
    (Buttons::FORWARD, Vec3::NEG_Z),
    (Buttons::BACK, Vec3::Z),
    (Buttons::LEFT, Vec3::NEG_X),
    (Buttons::RIGHT, Vec3::X),
    (Buttons::DOWN, Vec3::NEG_Y),
    (Buttons::UP, Vec3::Y),
];

/// Fly camera: pose, projection and input mapping
#[derive(Debug, Clone)]
pub struct CameraController {
    position: Vec3,
    orientation: Orientation,
    /// Cached `orientation.quat()`, refreshed on every orientation change
    rotation: Quat,
    projection: Projection,
    speed: f32,
    mouse_sensitivity: f32,
    pitch_limit: f32,
}

impl CameraController {
    /// Create a camera for a `width` x `height` framebuffer
    pub fn new(config: &CameraConfig, width: u32, height: u32) -> Self {
        let orientation =
            Orientation::new(config.yaw_degrees, config.pitch_degrees, config.pitch_limit);
        let mode = if config.perspective {
            ProjectionMode::Perspective
        } else {
            ProjectionMode::Orthographic
        };

        Self {
            position: config.position,
            orientation,
            rotation: orientation.quat(),
            projection: Projection::new(
                mode,
                config.fov,
                config.reference_fov,
                width,
                height,
                config.near,
                config.far,
            ),
            speed: config.speed,
            mouse_sensitivity: config.mouse_sensitivity,
            pitch_limit: config.pitch_limit,
        }
    }

    // ===== INPUT =====

    /// Move along local axes for every held direction, scaled by
    /// `speed * dt`, and flip the projection mode on the press edge of
    /// `Buttons::PROJECTION`.
    ///
    /// Returns true when the projection mode was toggled.
    pub fn apply_movement(
        &mut self,
        current: &InputSnapshot,
        previous: &InputSnapshot,
        dt: f32,
    ) -> bool {
        let local: Vec3 = MOVES
            .iter()
            .filter(|(button, _)| current.is_held(*button))
            .map(|(_, direction)| *direction)
            .sum();

        if local != Vec3::ZERO {
            self.position += self.rotation * local * (self.speed * dt);
        }

        let toggled = current.just_pressed(previous, Buttons::PROJECTION);
        if toggled {
            self.projection.mode = self.projection.mode.toggled();
        }
        toggled
    }

    /// Free-look. Pointer motion turns the camera only while the rotate
    /// button is held; screen Y grows downward, so it lowers the pitch.
    ///
    /// Returns true when the orientation changed.
    pub fn apply_look(&mut self, pointer_delta: Vec2, rotate_held: bool) -> bool {
        if !rotate_held || pointer_delta == Vec2::ZERO {
            return false;
        }

        self.orientation.rotate(
            pointer_delta.x * self.mouse_sensitivity,
            -pointer_delta.y * self.mouse_sensitivity,
            self.pitch_limit,
        );
        self.rotation = self.orientation.quat();
        true
    }

    /// Zoom by the vertical scroll component. Returns the new FOV when it
    /// changed.
    pub fn apply_scroll(&mut self, scroll_delta: Vec2) -> Option<f32> {
        if scroll_delta.y == 0.0 {
            return None;
        }

        let before = self.projection.fov();
        let fov = self.projection.zoom(scroll_delta.y);
        if fov == before {
            return None;
        }

        crate::lgl_debug!(SOURCE, "New FOV: {}", fov);
        Some(fov)
    }

    /// Turn to face a world-space point. Ignored when the point is the
    /// camera position; returns whether the orientation changed.
    pub fn look_at(&mut self, target: Vec3) -> bool {
        match Orientation::facing(target - self.position, self.pitch_limit) {
            Some(orientation) => {
                self.orientation = orientation;
                self.rotation = orientation.quat();
                true
            }
            None => false,
        }
    }

    /// Track the framebuffer size. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.projection.set_aspect(width, height)
    }

    // ===== MATRICES =====

    /// World to camera: inverse rotation, then negated translation
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.rotation.inverse()) * Mat4::from_translation(-self.position)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    // ===== ACCESSORS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Camera-to-world rotation (unit quaternion)
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Unit look direction
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection.mode
    }

    pub fn fov(&self) -> f32 {
        self.projection.fov()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}

#[cfg(test)]
#[path = "camera_controller_tests.rs"]
mod tests;
