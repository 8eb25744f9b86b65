/// HeadlessDevice - in-memory GraphicsDevice (no GPU required)
///
/// Records every call, allocates handles from slot maps so live object
/// counts are observable, and emulates just enough of a GLSL toolchain:
/// - a stage fails to compile when its source contains the compile-failure marker
/// - a program fails to link when a stage contains the link-failure marker,
///   or when it does not have exactly one vertex and one fragment stage
/// - active uniforms are the `uniform <type> <name>;` declarations of the linked stages

use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::{new_key_type, SlotMap};

use super::graphics_device::{GraphicsDevice, PolygonMode, ShaderStage, UniformValue};
use crate::error::Result;

new_key_type! {
    /// Stage handle of the headless device
    pub struct HeadlessShader;
    /// Program handle of the headless device
    pub struct HeadlessProgram;
}

/// Default marker making a stage fail to compile
pub const COMPILE_FAILURE_MARKER: &str = "#error";

/// Default marker making a program fail to link
pub const LINK_FAILURE_MARKER: &str = "#link_error";

/// Uniform location of the headless device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessUniformLocation {
    pub program: HeadlessProgram,
    pub name: String,
}

/// One recorded device call
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    CreateShader(ShaderStage),
    CompileShader(HeadlessShader),
    DeleteShader(HeadlessShader),
    CreateProgram(HeadlessProgram),
    AttachShader(HeadlessProgram, HeadlessShader),
    LinkProgram(HeadlessProgram),
    DeleteProgram(HeadlessProgram),
    UseProgram(Option<HeadlessProgram>),
    SetUniform { name: String, value: UniformValue },
    SetPolygonMode(PolygonMode),
    SetViewport(u32, u32),
    Clear([f32; 4]),
    DrawIndexed(u32),
}

#[derive(Debug)]
struct StageRecord {
    stage: ShaderStage,
    source: String,
    compiled: bool,
    info_log: String,
}

#[derive(Debug, Default)]
struct ProgramRecord {
    attached: Vec<HeadlessShader>,
    linked: bool,
    info_log: String,
    active_uniforms: FxHashSet<String>,
    values: FxHashMap<String, UniformValue>,
}

/// In-memory graphics device
#[derive(Debug)]
pub struct HeadlessDevice {
    shaders: SlotMap<HeadlessShader, StageRecord>,
    programs: SlotMap<HeadlessProgram, ProgramRecord>,
    current_program: Option<HeadlessProgram>,
    polygon_mode: PolygonMode,
    viewport: (u32, u32),
    calls: Vec<DeviceCall>,
    compile_failure_marker: String,
    link_failure_marker: String,
}

impl HeadlessDevice {
    /// Create a device with the default failure markers
    pub fn new() -> Self {
        Self {
            shaders: SlotMap::with_key(),
            programs: SlotMap::with_key(),
            current_program: None,
            polygon_mode: PolygonMode::Fill,
            viewport: (0, 0),
            calls: Vec::new(),
            compile_failure_marker: COMPILE_FAILURE_MARKER.to_string(),
            link_failure_marker: LINK_FAILURE_MARKER.to_string(),
        }
    }

    /// Use a different compile-failure marker
    pub fn with_compile_failure_marker(mut self, marker: &str) -> Self {
        self.compile_failure_marker = marker.to_string();
        self
    }

    // ===== INSPECTION =====

    /// Number of stage objects currently allocated
    pub fn live_shader_count(&self) -> usize {
        self.shaders.len()
    }

    /// Number of program objects currently allocated
    pub fn live_program_count(&self) -> usize {
        self.programs.len()
    }

    /// Whether a program handle still refers to an allocated program
    pub fn program_exists(&self, program: HeadlessProgram) -> bool {
        self.programs.contains_key(program)
    }

    /// Program made current by the last `use_program`
    pub fn current_program(&self) -> Option<HeadlessProgram> {
        self.current_program
    }

    pub fn polygon_mode(&self) -> PolygonMode {
        self.polygon_mode
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Every call in issue order
    pub fn calls(&self) -> &[DeviceCall] {
        &self.calls
    }

    /// Forget recorded calls (object state is kept)
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Number of draw calls recorded since the last `clear_calls`
    pub fn draw_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DeviceCall::DrawIndexed(_)))
            .count()
    }

    /// Last value written to `name` on `program`
    pub fn uniform_value(&self, program: HeadlessProgram, name: &str) -> Option<UniformValue> {
        self.programs.get(program)?.values.get(name).copied()
    }

    /// Values written to `name` since the last `clear_calls`, in order
    pub fn uniform_writes(&self, name: &str) -> Vec<UniformValue> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DeviceCall::SetUniform { name: n, value } if n == name => Some(*value),
                _ => None,
            })
            .collect()
    }
}

impl Default for HeadlessDevice {
    fn default() -> Self {
        Self::new()
    }
}

/// Names declared as `uniform <type> <name>;` (arrays and initializers stripped)
fn declared_uniforms(source: &str) -> impl Iterator<Item = String> + '_ {
    source.lines().filter_map(|line| {
        let mut tokens = line.trim().strip_prefix("uniform ")?.split_whitespace();
        let _ty = tokens.next()?;
        let raw = tokens.next()?;
        let name = raw
            .split(|c: char| c == ';' || c == '[' || c == '=')
            .next()
            .unwrap_or("")
            .trim();
        (!name.is_empty()).then(|| name.to_string())
    })
}

impl GraphicsDevice for HeadlessDevice {
    type Shader = HeadlessShader;
    type Program = HeadlessProgram;
    type UniformLocation = HeadlessUniformLocation;

    fn create_shader(&mut self, stage: ShaderStage) -> Result<HeadlessShader> {
        self.calls.push(DeviceCall::CreateShader(stage));
        Ok(self.shaders.insert(StageRecord {
            stage,
            source: String::new(),
            compiled: false,
            info_log: String::new(),
        }))
    }

    fn compile_shader(&mut self, shader: HeadlessShader, source: &str) -> bool {
        self.calls.push(DeviceCall::CompileShader(shader));
        let marker = self.compile_failure_marker.clone();
        let Some(record) = self.shaders.get_mut(shader) else {
            return false;
        };
        record.source = source.to_string();
        match source.lines().position(|line| line.contains(&marker)) {
            Some(index) => {
                let line = source.lines().nth(index).unwrap_or("").trim();
                record.compiled = false;
                record.info_log = format!("0:{}(1): error: {}\n", index + 1, line);
            }
            None => {
                record.compiled = true;
                record.info_log.clear();
            }
        }
        record.compiled
    }

    fn shader_info_log(&self, shader: HeadlessShader) -> String {
        self.shaders
            .get(shader)
            .map(|record| record.info_log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&mut self, shader: HeadlessShader) {
        self.calls.push(DeviceCall::DeleteShader(shader));
        self.shaders.remove(shader);
    }

    fn create_program(&mut self) -> Result<HeadlessProgram> {
        let program = self.programs.insert(ProgramRecord::default());
        self.calls.push(DeviceCall::CreateProgram(program));
        Ok(program)
    }

    fn attach_shader(&mut self, program: HeadlessProgram, shader: HeadlessShader) {
        self.calls.push(DeviceCall::AttachShader(program, shader));
        if let Some(record) = self.programs.get_mut(program) {
            record.attached.push(shader);
        }
    }

    fn link_program(&mut self, program: HeadlessProgram) -> bool {
        self.calls.push(DeviceCall::LinkProgram(program));
        let Some(record) = self.programs.get(program) else {
            return false;
        };

        let stages: Vec<&StageRecord> = record
            .attached
            .iter()
            .filter_map(|shader| self.shaders.get(*shader))
            .collect();

        let vertex_count = stages.iter().filter(|s| s.stage == ShaderStage::Vertex).count();
        let fragment_count = stages.iter().filter(|s| s.stage == ShaderStage::Fragment).count();

        let failure = if let Some(stage) = stages.iter().find(|s| !s.compiled) {
            Some(format!("error: {:?} stage is not compiled\n", stage.stage))
        } else if vertex_count != 1 || fragment_count != 1 {
            Some(format!(
                "error: expected one vertex and one fragment stage, got {} and {}\n",
                vertex_count, fragment_count
            ))
        } else if stages.iter().any(|s| s.source.contains(&self.link_failure_marker)) {
            Some("error: linking failed\n".to_string())
        } else {
            None
        };

        let uniforms: FxHashSet<String> = match failure {
            Some(_) => FxHashSet::default(),
            None => stages.iter().flat_map(|s| declared_uniforms(&s.source)).collect(),
        };

        let Some(record) = self.programs.get_mut(program) else {
            return false;
        };
        record.linked = failure.is_none();
        record.info_log = failure.unwrap_or_default();
        record.active_uniforms = uniforms;
        record.values.clear();
        record.linked
    }

    fn program_info_log(&self, program: HeadlessProgram) -> String {
        self.programs
            .get(program)
            .map(|record| record.info_log.clone())
            .unwrap_or_default()
    }

    fn delete_program(&mut self, program: HeadlessProgram) {
        self.calls.push(DeviceCall::DeleteProgram(program));
        self.programs.remove(program);
        if self.current_program == Some(program) {
            self.current_program = None;
        }
    }

    fn use_program(&mut self, program: Option<HeadlessProgram>) {
        self.calls.push(DeviceCall::UseProgram(program));
        self.current_program = program;
    }

    fn uniform_location(&self, program: HeadlessProgram, name: &str) -> Option<HeadlessUniformLocation> {
        let record = self.programs.get(program)?;
        if !record.linked || !record.active_uniforms.contains(name) {
            return None;
        }
        Some(HeadlessUniformLocation {
            program,
            name: name.to_string(),
        })
    }

    fn set_uniform(&mut self, location: &HeadlessUniformLocation, value: UniformValue) {
        self.calls.push(DeviceCall::SetUniform {
            name: location.name.clone(),
            value,
        });
        if let Some(record) = self.programs.get_mut(location.program) {
            record.values.insert(location.name.clone(), value);
        }
    }

    fn set_polygon_mode(&mut self, mode: PolygonMode) {
        self.calls.push(DeviceCall::SetPolygonMode(mode));
        self.polygon_mode = mode;
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.calls.push(DeviceCall::SetViewport(width, height));
        self.viewport = (width, height);
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.calls.push(DeviceCall::Clear(color));
    }

    fn draw_indexed(&mut self, index_count: u32) {
        self.calls.push(DeviceCall::DrawIndexed(index_count));
    }
}

#[cfg(test)]
#[path = "headless_device_tests.rs"]
mod tests;
