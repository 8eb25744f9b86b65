/// GraphicsDevice trait - primitive operations consumed by ShaderProgram and the render step

use std::fmt;
use glam::{Mat4, Vec3, Vec4};

use crate::error::Result;

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
}

/// Rasterization mode for front and back faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonMode {
    /// Filled triangles
    #[default]
    Fill,
    /// Wireframe
    Line,
}

/// A value written to a named uniform
///
/// Built from plain Rust values through `From`, so
/// `program.set_uniform(device, "tex", 0)` and
/// `program.set_uniform(device, "view", view_matrix)` both work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// Uploaded as a 0/1 integer
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec3(Vec3),
    Vec4(Vec4),
    /// Column-major, not transposed
    Mat4(Mat4),
}

impl From<bool> for UniformValue {
    fn from(value: bool) -> Self {
        UniformValue::Bool(value)
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        UniformValue::Int(value)
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        UniformValue::Vec3(value)
    }
}

impl From<Vec4> for UniformValue {
    fn from(value: Vec4) -> Self {
        UniformValue::Vec4(value)
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        UniformValue::Mat4(value)
    }
}

/// Primitive graphics device operations
///
/// Implemented by backends (e.g. `GlowDevice`) and by `HeadlessDevice`.
/// Handles are plain copyable ids; ownership of the objects behind them is
/// tracked by the caller (`ShaderProgram` owns its program and stages).
pub trait GraphicsDevice {
    /// Compiled stage handle
    type Shader: Copy + Eq + fmt::Debug;
    /// Linked program handle
    type Program: Copy + Eq + fmt::Debug;
    /// Resolved uniform location
    type UniformLocation: Clone + fmt::Debug;

    // ===== STAGES =====

    /// Allocate an empty stage object
    fn create_shader(&mut self, stage: ShaderStage) -> Result<Self::Shader>;

    /// Upload source and compile; returns the compile status
    fn compile_shader(&mut self, shader: Self::Shader, source: &str) -> bool;

    /// Compiler diagnostic text for the last compile of `shader`
    fn shader_info_log(&self, shader: Self::Shader) -> String;

    /// Release a stage object
    fn delete_shader(&mut self, shader: Self::Shader);

    // ===== PROGRAMS =====

    /// Allocate an empty program object
    fn create_program(&mut self) -> Result<Self::Program>;

    /// Attach a compiled stage to a program
    fn attach_shader(&mut self, program: Self::Program, shader: Self::Shader);

    /// Link the attached stages; returns the link status
    fn link_program(&mut self, program: Self::Program) -> bool;

    /// Linker diagnostic text for the last link of `program`
    fn program_info_log(&self, program: Self::Program) -> String;

    /// Release a program object
    fn delete_program(&mut self, program: Self::Program);

    /// Make `program` current for subsequent uniform writes and draws
    fn use_program(&mut self, program: Option<Self::Program>);

    // ===== UNIFORMS =====

    /// Resolve a uniform by name; `None` if the linked program has no such active uniform
    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation>;

    /// Write a uniform of the current program
    fn set_uniform(&mut self, location: &Self::UniformLocation, value: UniformValue);

    // ===== FIXED FUNCTION / DRAW =====

    /// Rasterization mode for front and back faces
    fn set_polygon_mode(&mut self, mode: PolygonMode);

    /// Viewport size in pixels
    fn set_viewport(&mut self, width: u32, height: u32);

    /// Clear color and depth buffers
    fn clear(&mut self, color: [f32; 4]);

    /// Draw `index_count` indices from the bound element buffer as triangles
    fn draw_indexed(&mut self, index_count: u32);
}
