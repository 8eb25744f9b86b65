/// GlowDevice - GraphicsDevice over a current OpenGL context
///
/// The context must be current on the calling thread for the whole lifetime
/// of the device. Every method is a thin wrapper over one or two GL calls.

use glow::HasContext;
use learn_opengl::lgl::{GraphicsDevice, PolygonMode, Result, ShaderStage, UniformValue};
use learn_opengl::{lgl_bail, lgl_debug};

const SOURCE: &str = "lgl::glow";

/// OpenGL device
pub struct GlowDevice {
    gl: glow::Context,
}

impl GlowDevice {
    /// Wrap a loaded context and enable depth testing
    ///
    /// # Safety
    ///
    /// `gl` must be current on this thread and stay current while the device
    /// is used.
    pub unsafe fn new(gl: glow::Context) -> Self {
        gl.enable(glow::DEPTH_TEST);
        let max_attributes = gl.get_parameter_i32(glow::MAX_VERTEX_ATTRIBS);
        lgl_debug!(SOURCE, "Maximum # of vertex attributes supported: {}", max_attributes);
        Self { gl }
    }

    /// Raw context, for the calls this device does not cover (buffers,
    /// textures, vertex arrays)
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn into_inner(self) -> glow::Context {
        self.gl
    }
}

/// GL shader type of a stage
pub(crate) fn gl_shader_type(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

/// GL rasterization mode of a polygon mode
pub(crate) fn gl_polygon_mode(mode: PolygonMode) -> u32 {
    match mode {
        PolygonMode::Fill => glow::FILL,
        PolygonMode::Line => glow::LINE,
    }
}

/// Viewport dimension clamped into GL's signed range
pub(crate) fn gl_size(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl GraphicsDevice for GlowDevice {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type UniformLocation = glow::UniformLocation;

    fn create_shader(&mut self, stage: ShaderStage) -> Result<glow::Shader> {
        match unsafe { self.gl.create_shader(gl_shader_type(stage)) } {
            Ok(shader) => Ok(shader),
            Err(e) => lgl_bail!(SOURCE, "Failed to create {:?} shader: {}", stage, e),
        }
    }

    fn compile_shader(&mut self, shader: glow::Shader, source: &str) -> bool {
        unsafe {
            self.gl.shader_source(shader, source);
            self.gl.compile_shader(shader);
            self.gl.get_shader_compile_status(shader)
        }
    }

    fn shader_info_log(&self, shader: glow::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&mut self, shader: glow::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn create_program(&mut self) -> Result<glow::Program> {
        match unsafe { self.gl.create_program() } {
            Ok(program) => Ok(program),
            Err(e) => lgl_bail!(SOURCE, "Failed to create program: {}", e),
        }
    }

    fn attach_shader(&mut self, program: glow::Program, shader: glow::Shader) {
        unsafe { self.gl.attach_shader(program, shader) }
    }

    fn link_program(&mut self, program: glow::Program) -> bool {
        unsafe {
            self.gl.link_program(program);
            self.gl.get_program_link_status(program)
        }
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn delete_program(&mut self, program: glow::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn use_program(&mut self, program: Option<glow::Program>) {
        unsafe { self.gl.use_program(program) }
    }

    fn uniform_location(&self, program: glow::Program, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn set_uniform(&mut self, location: &glow::UniformLocation, value: UniformValue) {
        let location = Some(location);
        unsafe {
            match value {
                // GLSL bools are set through the integer entry point
                UniformValue::Bool(v) => self.gl.uniform_1_i32(location, v as i32),
                UniformValue::Int(v) => self.gl.uniform_1_i32(location, v),
                UniformValue::Float(v) => self.gl.uniform_1_f32(location, v),
                UniformValue::Vec3(v) => self.gl.uniform_3_f32(location, v.x, v.y, v.z),
                UniformValue::Vec4(v) => self.gl.uniform_4_f32(location, v.x, v.y, v.z, v.w),
                UniformValue::Mat4(m) => {
                    self.gl.uniform_matrix_4_f32_slice(location, false, &m.to_cols_array())
                }
            }
        }
    }

    fn set_polygon_mode(&mut self, mode: PolygonMode) {
        unsafe { self.gl.polygon_mode(glow::FRONT_AND_BACK, gl_polygon_mode(mode)) }
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        unsafe { self.gl.viewport(0, 0, gl_size(width), gl_size(height)) }
    }

    fn clear(&mut self, color: [f32; 4]) {
        let [r, g, b, a] = color;
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    fn draw_indexed(&mut self, index_count: u32) {
        unsafe {
            self.gl
                .draw_elements(glow::TRIANGLES, gl_size(index_count), glow::UNSIGNED_INT, 0)
        }
    }
}

#[cfg(test)]
#[path = "glow_device_tests.rs"]
mod tests;
