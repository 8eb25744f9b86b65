/// Orientation: camera rotation stored as an absolute yaw/pitch pair.
///
/// The quaternion is never accumulated frame over frame. It is rebuilt from
/// the two angles every time it is needed, so no drift can build up and the
/// result is always normalized.

use glam::{Mat3, Quat, Vec3};

/// World up axis
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Yaw/pitch pair in degrees
///
/// Yaw is measured from +X towards +Z (so -90 looks down -Z), pitch from
/// the horizontal plane towards +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    yaw: f32,
    pitch: f32,
}

impl Orientation {
    /// Create from angles, clamping pitch to `±pitch_limit`
    pub fn new(yaw_degrees: f32, pitch_degrees: f32, pitch_limit: f32) -> Self {
        Self {
            yaw: wrap_degrees(yaw_degrees),
            pitch: pitch_degrees.clamp(-pitch_limit, pitch_limit),
        }
    }

    /// Orientation looking along `direction`; `None` for a zero vector
    pub fn facing(direction: Vec3, pitch_limit: f32) -> Option<Self> {
        let direction = direction.try_normalize()?;
        let yaw = direction.z.atan2(direction.x).to_degrees();
        let pitch = direction.y.clamp(-1.0, 1.0).asin().to_degrees();
        Some(Self::new(yaw, pitch, pitch_limit))
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Offset the absolute angles, clamping pitch to `±pitch_limit`
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32, pitch_limit: f32) {
        *self = Self::new(self.yaw + yaw_delta, self.pitch + pitch_delta, pitch_limit);
    }

    /// Unit look direction (spherical to cartesian)
    pub fn direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch)
    }

    /// Camera-to-world rotation
    pub fn quat(&self) -> Quat {
        look_rotation(self.direction(), WORLD_UP)
    }
}

impl Default for Orientation {
    /// Looking down -Z
    fn default() -> Self {
        Self { yaw: -90.0, pitch: 0.0 }
    }
}

/// Camera-to-world rotation whose local -Z points along `direction`.
///
/// Built as the inverse of the right-handed look-at view rotation for
/// `direction` and `up`. `direction` must not be parallel to `up`.
pub fn look_rotation(direction: Vec3, up: Vec3) -> Quat {
    let back = -direction.normalize();
    let right = up.cross(back).normalize();
    let camera_up = back.cross(right);

    // Rows are the camera axes: world -> camera
    let view_rotation = Mat3::from_cols(right, camera_up, back).transpose();
    Quat::from_mat3(&view_rotation).inverse().normalize()
}

/// Map to [-180, 180)
fn wrap_degrees(degrees: f32) -> f32 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
#[path = "orientation_tests.rs"]
mod tests;
