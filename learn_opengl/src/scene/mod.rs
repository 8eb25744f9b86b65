//! Scene module: fixed object placement.
//!
//! The scene is a constant list of world offsets. Each frame the layout
//! turns them into model matrices for the draw loop.

mod scene_layout;

pub use scene_layout::{rotation_angle, SceneAnimation, SceneLayout, CUBE_POSITIONS, SPIN_AXIS};
