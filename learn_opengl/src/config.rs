//! Sandbox configuration
//!
//! Plain structs with defaults matching the tutorial program: an 800x800
//! window, a fly camera just in front of the origin looking down -Z, and a
//! 45 degree field of view.

use glam::{Vec3, Vec4};

use crate::input::KeyBindings;
use crate::scene::SceneAnimation;

/// Camera configuration
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Initial position (world units)
    pub position: Vec3,
    /// Initial yaw in degrees (-90 looks down -Z)
    pub yaw_degrees: f32,
    /// Initial pitch in degrees
    pub pitch_degrees: f32,
    /// Movement speed (world units per second)
    pub speed: f32,
    /// Degrees of rotation per pixel of pointer motion
    pub mouse_sensitivity: f32,
    /// Initial vertical field of view in degrees
    pub fov: f32,
    /// FOV at which the orthographic view volume is one unit tall
    pub reference_fov: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
    /// Pitch is clamped to +/- this many degrees
    pub pitch_limit: f32,
    /// Start in perspective (true) or orthographic (false) projection
    pub perspective: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -0.3),
            yaw_degrees: -90.0,
            pitch_degrees: 0.0,
            speed: 10.0,
            mouse_sensitivity: 0.1,
            fov: 45.0,
            reference_fov: 45.0,
            near: 0.1,
            far: 100.0,
            pitch_limit: 89.0,
            perspective: true,
        }
    }
}

/// Sandbox configuration
#[derive(Debug, Clone)]
pub struct SandboxConfig {
    /// Initial framebuffer width in pixels
    pub width: u32,
    /// Initial framebuffer height in pixels
    pub height: u32,
    pub camera: CameraConfig,
    /// How the scene objects move over time
    pub animation: SceneAnimation,
    /// Clear color (RGBA)
    pub clear_color: [f32; 4],
    /// Value written to the `prog_color` uniform
    pub tint: Vec4,
    /// Indices drawn per object
    pub index_count: u32,
    /// Report toggles and resizes at INFO/DEBUG (otherwise TRACE)
    pub verbose: bool,
    pub key_bindings: KeyBindings,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            camera: CameraConfig::default(),
            animation: SceneAnimation::Static,
            clear_color: [1.0, 0.0, 1.0, 1.0],
            tint: Vec4::ONE,
            index_count: 18,
            verbose: true,
            key_bindings: KeyBindings::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
