//! Camera module: fly camera pose, projection, and input mapping.
//!
//! The controller is an owned value: the frame-loop driver keeps it and
//! passes input snapshots in once per frame. Nothing here is global.

mod orientation;
mod projection;
mod camera_controller;

pub use orientation::{look_rotation, Orientation, WORLD_UP};
pub use projection::{Projection, ProjectionMode, MAX_FOV, MIN_FOV};
pub use camera_controller::CameraController;
