//! Shader module: linked GPU programs and name-addressed uniforms.

mod shader_program;

pub use shader_program::ShaderProgram;
