use glam::{Vec3, Vec4};
use super::*;

const EPSILON: f32 = 1e-5;

fn square(mode: ProjectionMode) -> Projection {
    Projection::new(mode, 45.0, 45.0, 800, 800, 0.1, 100.0)
}

#[test]
fn test_mode_toggles() {
    assert_eq!(ProjectionMode::Perspective.toggled(), ProjectionMode::Orthographic);
    assert_eq!(ProjectionMode::Orthographic.toggled(), ProjectionMode::Perspective);
    assert!(ProjectionMode::default().is_perspective());
}

#[test]
fn test_new_clamps_fov() {
    let projection = Projection::new(ProjectionMode::Perspective, 500.0, 45.0, 800, 600, 0.1, 100.0);
    assert_eq!(projection.fov(), MAX_FOV);
    let projection = Projection::new(ProjectionMode::Perspective, -3.0, 45.0, 800, 600, 0.1, 100.0);
    assert_eq!(projection.fov(), MIN_FOV);
}

#[test]
fn test_zero_size_falls_back_to_square_aspect() {
    let projection = Projection::new(ProjectionMode::Perspective, 45.0, 45.0, 0, 600, 0.1, 100.0);
    assert_eq!(projection.aspect(), 1.0);
}

#[test]
fn test_zoom_stays_within_bounds() {
    let mut projection = square(ProjectionMode::Perspective);
    let deltas = [3.0, 50.0, -200.0, 7.5, 400.0, -0.25, -99.0, 12.0];
    for delta in deltas {
        let fov = projection.zoom(delta);
        assert!((MIN_FOV..=MAX_FOV).contains(&fov), "fov {} out of range", fov);
    }
    assert_eq!(square(ProjectionMode::Perspective).zoom(1000.0), MIN_FOV);
    assert_eq!(square(ProjectionMode::Perspective).zoom(-1000.0), MAX_FOV);
}

#[test]
fn test_set_aspect_ignores_zero_sizes() {
    let mut projection = square(ProjectionMode::Perspective);
    assert!(!projection.set_aspect(0, 0));
    assert!(!projection.set_aspect(1024, 0));
    assert_eq!(projection.aspect(), 1.0);

    assert!(projection.set_aspect(1600, 800));
    assert_eq!(projection.aspect(), 2.0);
}

#[test]
fn test_ortho_half_extents_at_reference_fov() {
    let projection = square(ProjectionMode::Orthographic);
    let (half_width, half_height) = projection.ortho_half_extents();
    assert!((half_width - 0.5).abs() < EPSILON);
    assert!((half_height - 0.5).abs() < EPSILON);
}

#[test]
fn test_ortho_half_extents_scale_with_fov_and_aspect() {
    let mut projection = Projection::new(ProjectionMode::Orthographic, 90.0, 45.0, 1600, 800, 0.1, 100.0);
    let (half_width, half_height) = projection.ortho_half_extents();
    assert!((half_height - 1.0).abs() < EPSILON);
    assert!((half_width - 2.0).abs() < EPSILON);

    projection.zoom(67.5);
    let (_, half_height) = projection.ortho_half_extents();
    assert!((half_height - 0.25).abs() < EPSILON);
}

#[test]
fn test_ortho_matrix_maps_volume_edges_to_clip_edges() {
    let projection = square(ProjectionMode::Orthographic);
    let clip = projection.matrix() * Vec4::new(0.5, -0.5, -0.1, 1.0);
    assert!((clip.x - 1.0).abs() < EPSILON);
    assert!((clip.y - -1.0).abs() < EPSILON);
    assert!((clip.z - -1.0).abs() < EPSILON);
}

#[test]
fn test_perspective_matrix_matches_glam() {
    let projection = square(ProjectionMode::Perspective);
    let expected = glam::Mat4::perspective_rh_gl(45f32.to_radians(), 1.0, 0.1, 100.0);
    assert_eq!(projection.matrix(), expected);
}

#[test]
fn test_perspective_far_plane_maps_to_one() {
    let projection = square(ProjectionMode::Perspective);
    let clip = projection.matrix() * Vec3::new(0.0, 0.0, -100.0).extend(1.0);
    assert!((clip.z / clip.w - 1.0).abs() < 1e-4);
}
