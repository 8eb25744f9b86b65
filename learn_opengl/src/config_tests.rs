use glam::{Vec3, Vec4};
use winit::keyboard::KeyCode;

use super::*;
use crate::input::Buttons;

#[test]
fn test_camera_config_defaults() {
    let config = CameraConfig::default();
    assert_eq!(config.position, Vec3::new(0.0, 0.0, -0.3));
    assert_eq!(config.yaw_degrees, -90.0);
    assert_eq!(config.speed, 10.0);
    assert_eq!(config.mouse_sensitivity, 0.1);
    assert_eq!(config.fov, 45.0);
    assert_eq!(config.near, 0.1);
    assert_eq!(config.far, 100.0);
    assert!(config.perspective);
}

#[test]
fn test_sandbox_config_defaults() {
    let config = SandboxConfig::default();
    assert_eq!((config.width, config.height), (800, 800));
    assert_eq!(config.animation, SceneAnimation::Static);
    assert_eq!(config.clear_color, [1.0, 0.0, 1.0, 1.0]);
    assert_eq!(config.tint, Vec4::ONE);
    assert_eq!(config.index_count, 18);
    assert_eq!(config.key_bindings.key(KeyCode::Space), Buttons::WIREFRAME);
}
