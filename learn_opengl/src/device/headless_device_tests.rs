/// Unit tests for HeadlessDevice.
///
/// Covers handle bookkeeping, the emulated compile/link rules and uniform
/// resolution.

use super::*;
use glam::Mat4;

const VERT: &str = "#version 330 core\nuniform mat4 model;\nuniform mat4 view;\nvoid main() {}\n";
const FRAG: &str = "#version 330 core\nuniform sampler2D tex;\nuniform vec4 prog_color;\nvoid main() {}\n";

fn compiled(device: &mut HeadlessDevice, stage: ShaderStage, source: &str) -> HeadlessShader {
    let shader = device.create_shader(stage).unwrap();
    assert!(device.compile_shader(shader, source));
    shader
}

fn linked_program(device: &mut HeadlessDevice) -> HeadlessProgram {
    let vs = compiled(device, ShaderStage::Vertex, VERT);
    let fs = compiled(device, ShaderStage::Fragment, FRAG);
    let program = device.create_program().unwrap();
    device.attach_shader(program, vs);
    device.attach_shader(program, fs);
    assert!(device.link_program(program));
    program
}

// ============================================================================
// Stage lifecycle
// ============================================================================

#[test]
fn test_create_and_delete_shader_counts() {
    let mut device = HeadlessDevice::new();
    assert_eq!(device.live_shader_count(), 0);

    let shader = device.create_shader(ShaderStage::Vertex).unwrap();
    assert_eq!(device.live_shader_count(), 1);

    device.delete_shader(shader);
    assert_eq!(device.live_shader_count(), 0);
}

#[test]
fn test_compile_failure_marker_produces_log() {
    let mut device = HeadlessDevice::new();
    let shader = device.create_shader(ShaderStage::Fragment).unwrap();

    let ok = device.compile_shader(shader, "void main() {}\n#error broken\n");
    assert!(!ok);
    assert_eq!(device.shader_info_log(shader), "0:2(1): error: #error broken\n");
}

#[test]
fn test_custom_compile_failure_marker() {
    let mut device = HeadlessDevice::new().with_compile_failure_marker("SYNTAX");
    let shader = device.create_shader(ShaderStage::Vertex).unwrap();
    assert!(device.compile_shader(shader, "#error is fine here"));
    assert!(!device.compile_shader(shader, "SYNTAX"));
}

// ============================================================================
// Program lifecycle
// ============================================================================

#[test]
fn test_link_success() {
    let mut device = HeadlessDevice::new();
    let program = linked_program(&mut device);
    assert!(device.program_exists(program));
    assert!(device.program_info_log(program).is_empty());
    assert_eq!(device.live_program_count(), 1);
}

#[test]
fn test_link_requires_one_vertex_and_one_fragment() {
    let mut device = HeadlessDevice::new();
    let vs = compiled(&mut device, ShaderStage::Vertex, VERT);
    let program = device.create_program().unwrap();
    device.attach_shader(program, vs);

    assert!(!device.link_program(program));
    assert!(device.program_info_log(program).contains("got 1 and 0"));
}

#[test]
fn test_link_failure_marker() {
    let mut device = HeadlessDevice::new();
    let vs = compiled(&mut device, ShaderStage::Vertex, VERT);
    let fs = compiled(&mut device, ShaderStage::Fragment, "// #link_error\nvoid main() {}\n");
    let program = device.create_program().unwrap();
    device.attach_shader(program, vs);
    device.attach_shader(program, fs);

    assert!(!device.link_program(program));
    assert_eq!(device.program_info_log(program), "error: linking failed\n");
    assert!(device.uniform_location(program, "model").is_none());
}

#[test]
fn test_delete_current_program_unbinds_it() {
    let mut device = HeadlessDevice::new();
    let program = linked_program(&mut device);
    device.use_program(Some(program));
    assert_eq!(device.current_program(), Some(program));

    device.delete_program(program);
    assert_eq!(device.current_program(), None);
    assert!(!device.program_exists(program));
}

// ============================================================================
// Uniforms
// ============================================================================

#[test]
fn test_uniform_location_resolves_declared_names() {
    let mut device = HeadlessDevice::new();
    let program = linked_program(&mut device);

    for name in ["model", "view", "tex", "prog_color"] {
        assert!(device.uniform_location(program, name).is_some(), "{}", name);
    }
    assert!(device.uniform_location(program, "projection").is_none());
}

#[test]
fn test_declared_uniforms_strip_arrays_and_initializers() {
    let names: Vec<String> = declared_uniforms(
        "uniform float weights[4];\n  uniform int mode = 2;\nin vec3 pos;\nuniform vec3 light;",
    )
    .collect();
    assert_eq!(names, vec!["weights", "mode", "light"]);
}

#[test]
fn test_set_uniform_stores_value_and_records_call() {
    let mut device = HeadlessDevice::new();
    let program = linked_program(&mut device);
    let location = device.uniform_location(program, "view").unwrap();

    device.set_uniform(&location, UniformValue::Mat4(Mat4::IDENTITY));

    assert_eq!(device.uniform_value(program, "view"), Some(UniformValue::Mat4(Mat4::IDENTITY)));
    assert_eq!(device.uniform_writes("view"), vec![UniformValue::Mat4(Mat4::IDENTITY)]);
}

// ============================================================================
// Fixed function / draw
// ============================================================================

#[test]
fn test_fixed_function_state_and_draw_count() {
    let mut device = HeadlessDevice::new();
    device.set_polygon_mode(PolygonMode::Line);
    device.set_viewport(1024, 768);
    device.clear([1.0, 0.0, 1.0, 1.0]);
    device.draw_indexed(18);
    device.draw_indexed(18);

    assert_eq!(device.polygon_mode(), PolygonMode::Line);
    assert_eq!(device.viewport(), (1024, 768));
    assert_eq!(device.draw_count(), 2);

    device.clear_calls();
    assert!(device.calls().is_empty());
    assert_eq!(device.polygon_mode(), PolygonMode::Line);
}

#[test]
fn test_uniform_value_from_impls() {
    assert_eq!(UniformValue::from(true), UniformValue::Bool(true));
    assert_eq!(UniformValue::from(3), UniformValue::Int(3));
    assert_eq!(UniformValue::from(0.5f32), UniformValue::Float(0.5));
    assert_eq!(UniformValue::from(glam::Vec3::X), UniformValue::Vec3(glam::Vec3::X));
    assert_eq!(UniformValue::from(glam::Vec4::ONE), UniformValue::Vec4(glam::Vec4::ONE));
}
