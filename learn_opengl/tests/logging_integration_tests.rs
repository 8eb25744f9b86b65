//! Integration tests for the sandbox logging
//!
//! These tests swap the process-wide logger and check the log points of the
//! shader lifecycle and the frame loop. No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests

use learn_opengl::glam::Vec2;
use learn_opengl::lgl::log::{reset_logger, set_logger, LogEntry, LogSeverity, Logger};
use learn_opengl::lgl::input::{Buttons, InputSnapshot};
use learn_opengl::lgl::{HeadlessDevice, SandboxConfig, SandboxState, ShaderProgram};
use learn_opengl::{lgl_error, lgl_info};
use serial_test::serial;
use std::sync::{Arc, Mutex};

const VERT: &str = "#version 330 core\nuniform mat4 model;\nvoid main() {}\n";
const FRAG: &str = "#version 330 core\nuniform vec4 prog_color;\nvoid main() {}\n";

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn messages(entries: &Arc<Mutex<Vec<LogEntry>>>, severity: LogSeverity) -> Vec<String> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|entry| entry.severity == severity)
        .map(|entry| entry.message.clone())
        .collect()
}

// ============================================================================
// LOGGER SLOT
// ============================================================================

#[test]
#[serial]
fn test_integration_macros_reach_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    set_logger(test_logger);

    lgl_info!("test::module", "Test info message {}", 1);
    lgl_error!("test::module", "Test error message");

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "test::module");
        assert_eq!(captured[0].message, "Test info message 1");
        assert_eq!(captured[0].file, None);

        assert_eq!(captured[1].severity, LogSeverity::Error);
        assert!(captured[1].file.is_some());
        assert!(captured[1].line.is_some());
    }

    reset_logger();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (test_logger, entries) = TestLogger::new();
    set_logger(test_logger);
    lgl_info!("test::reset", "Before reset");
    reset_logger();
    lgl_info!("test::reset", "After reset");

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].message, "Before reset");
}

// ============================================================================
// SHADER LOG POINTS
// ============================================================================

#[test]
#[serial]
fn test_integration_link_success_is_reported() {
    let (test_logger, entries) = TestLogger::new();
    set_logger(test_logger);

    let mut device = HeadlessDevice::new();
    let mut program = ShaderProgram::new();
    program.configure(&mut device, VERT, FRAG).unwrap();

    let infos = messages(&entries, LogSeverity::Info);
    assert_eq!(infos.len(), 1);
    assert!(infos[0].starts_with("Using shader"));

    reset_logger();
}

#[test]
#[serial]
fn test_integration_compile_failure_is_reported_with_compiler_log() {
    let (test_logger, entries) = TestLogger::new();
    set_logger(test_logger);

    let mut device = HeadlessDevice::new();
    let mut program = ShaderProgram::new();
    let result = program.configure(&mut device, "void main() {}\n#error nope\n", FRAG);
    assert!(result.is_err());

    let errors = messages(&entries, LogSeverity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Vertex"));
    assert!(errors[0].contains("#error nope"));

    reset_logger();
}

#[test]
#[serial]
fn test_integration_missing_uniform_warns_once() {
    let (test_logger, entries) = TestLogger::new();
    set_logger(test_logger);

    let mut device = HeadlessDevice::new();
    let mut program = ShaderProgram::new();
    program.configure(&mut device, VERT, FRAG).unwrap();
    for _ in 0..5 {
        program.set_uniform(&mut device, "does_not_exist", 1.0f32);
    }

    let warnings = messages(&entries, LogSeverity::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("does_not_exist"));
    assert_eq!(messages(&entries, LogSeverity::Trace).len(), 4);

    reset_logger();
}

// ============================================================================
// FRAME LOG POINTS
// ============================================================================

#[test]
#[serial]
fn test_integration_toggles_and_fov_are_reported() {
    let (test_logger, entries) = TestLogger::new();
    set_logger(test_logger);

    let mut device = HeadlessDevice::new();
    let mut state = SandboxState::new(&SandboxConfig::default());
    state.update(&mut device, &InputSnapshot::new(Buttons::WIREFRAME), 0.0);
    state.update(&mut device, &InputSnapshot::new(Buttons::WIREFRAME | Buttons::PROJECTION), 0.1);
    state.update(
        &mut device,
        &InputSnapshot::default().with_scroll_delta(Vec2::new(0.0, 5.0)),
        0.2,
    );
    state.resize(&mut device, 640, 480);

    assert_eq!(
        messages(&entries, LogSeverity::Info),
        vec!["Wireframe: ON".to_string(), "Perspective: OFF".to_string()]
    );
    let debug = messages(&entries, LogSeverity::Debug);
    assert!(debug.contains(&"New FOV: 40".to_string()));
    assert!(debug.contains(&"Resized to (640, 480)".to_string()));

    reset_logger();
}

#[test]
#[serial]
fn test_integration_quiet_mode_demotes_toggles() {
    let (test_logger, entries) = TestLogger::new();
    set_logger(test_logger);

    let config = SandboxConfig { verbose: false, ..SandboxConfig::default() };
    let mut device = HeadlessDevice::new();
    let mut state = SandboxState::new(&config);
    state.update(&mut device, &InputSnapshot::new(Buttons::WIREFRAME), 0.0);
    state.resize(&mut device, 640, 480);

    assert!(messages(&entries, LogSeverity::Info).is_empty());
    assert!(messages(&entries, LogSeverity::Debug).is_empty());
    let traces = messages(&entries, LogSeverity::Trace);
    assert!(traces.contains(&"Wireframe: ON".to_string()));
    assert!(traces.contains(&"Resized to (640, 480)".to_string()));

    reset_logger();
}
