/// Projection: perspective or orthographic, driven by one field of view.
///
/// The field of view doubles as the orthographic zoom factor, so scrolling
/// zooms in both modes and toggling keeps the apparent scale close.

use glam::Mat4;

/// Lower field of view bound (degrees)
pub const MIN_FOV: f32 = 1.0;
/// Upper field of view bound (degrees)
pub const MAX_FOV: f32 = 100.0;

/// Projection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }

    pub fn is_perspective(self) -> bool {
        self == ProjectionMode::Perspective
    }
}

/// Projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub mode: ProjectionMode,
    fov: f32,
    reference_fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Projection {
    /// `fov` is clamped to [MIN_FOV, MAX_FOV]. A zero-sized viewport falls
    /// back to a square aspect.
    pub fn new(
        mode: ProjectionMode,
        fov: f32,
        reference_fov: f32,
        width: u32,
        height: u32,
        near: f32,
        far: f32,
    ) -> Self {
        let aspect = if width == 0 || height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };
        Self {
            mode,
            fov: fov.clamp(MIN_FOV, MAX_FOV),
            reference_fov,
            aspect,
            near,
            far,
        }
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Update the aspect ratio. Ignored when either dimension is zero
    /// (minimized window); returns whether it changed.
    pub fn set_aspect(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        true
    }

    /// Narrow the field of view by `amount` degrees (negative widens),
    /// clamped to [MIN_FOV, MAX_FOV]. Returns the new value.
    pub fn zoom(&mut self, amount: f32) -> f32 {
        self.fov = (self.fov - amount).clamp(MIN_FOV, MAX_FOV);
        self.fov
    }

    /// Half width and half height of the orthographic view volume.
    ///
    /// At the reference field of view the volume spans [-0.5, 0.5]
    /// vertically; it scales linearly with the field of view.
    pub fn ortho_half_extents(&self) -> (f32, f32) {
        let half_height = self.fov / self.reference_fov / 2.0;
        (half_height * self.aspect, half_height)
    }

    /// Projection matrix (right-handed, OpenGL clip space)
    pub fn matrix(&self) -> Mat4 {
        match self.mode {
            ProjectionMode::Perspective => {
                Mat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let (half_width, half_height) = self.ortho_half_extents();
                Mat4::orthographic_rh_gl(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
        }
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
