/// SceneLayout: per-frame model matrices for the fixed object grid.

use glam::{Mat4, Quat, Vec3};

/// World-space offset of each object
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Spin axis before normalization
pub const SPIN_AXIS: Vec3 = Vec3::new(0.5, 1.0, 0.0);

/// How objects move over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneAnimation {
    /// Translation only
    #[default]
    Static,
    /// Translation then a time-dependent spin around `SPIN_AXIS`, for every
    /// object including the first
    Spinning,
}

/// Spin angle in radians of object `index` at `time` seconds:
/// `6·sin(time·(index+1)/6) + index/6`
pub fn rotation_angle(time: f32, index: usize) -> f32 {
    let i = index as f32;
    6.0 * (time * (i + 1.0) / 6.0).sin() + i / 6.0
}

/// Object placement
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    positions: Vec<Vec3>,
    animation: SceneAnimation,
}

impl SceneLayout {
    /// The ten default objects
    pub fn new(animation: SceneAnimation) -> Self {
        Self::with_positions(CUBE_POSITIONS.to_vec(), animation)
    }

    pub fn with_positions(positions: Vec<Vec3>, animation: SceneAnimation) -> Self {
        Self { positions, animation }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn animation(&self) -> SceneAnimation {
        self.animation
    }

    pub fn set_animation(&mut self, animation: SceneAnimation) {
        self.animation = animation;
    }

    /// Model matrix of object `index` at `time`, `None` past the end
    pub fn model_matrix(&self, index: usize, time: f32) -> Option<Mat4> {
        let position = *self.positions.get(index)?;
        let translation = Mat4::from_translation(position);

        Some(match self.animation {
            SceneAnimation::Static => translation,
            SceneAnimation::Spinning => {
                let spin = Quat::from_axis_angle(SPIN_AXIS.normalize(), rotation_angle(time, index));
                translation * Mat4::from_quat(spin)
            }
        })
    }

    /// Model matrices of every object at `time`, in draw order
    pub fn model_matrices(&self, time: f32) -> Vec<Mat4> {
        (0..self.positions.len())
            .filter_map(|index| self.model_matrix(index, time))
            .collect()
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::new(SceneAnimation::default())
    }
}

#[cfg(test)]
#[path = "scene_layout_tests.rs"]
mod tests;
