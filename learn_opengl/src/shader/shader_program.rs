/// ShaderProgram: owns one linked GPU program and writes its uniforms by name.
///
/// A program is either fully linked and usable, or absent. Reconfiguring
/// builds the new program on the side; only a successful link replaces the
/// current one, so a broken edit to a shader file never takes down a
/// program that is still in use.
///
/// The device is passed into each call instead of being stored, so the
/// frame-loop driver stays the single owner of the context.

use std::path::Path;

use rustc_hash::FxHashMap;

use crate::device::{GraphicsDevice, ShaderStage, UniformValue};
use crate::error::{Error, Result};

const SOURCE: &str = "lgl::ShaderProgram";

/// Linked shader program with a uniform location cache
pub struct ShaderProgram<D: GraphicsDevice> {
    program: Option<D::Program>,
    /// Bumped on every successful link
    generation: u32,
    /// Name -> location for the current program; `None` caches a miss
    uniform_cache: FxHashMap<String, Option<D::UniformLocation>>,
}

impl<D: GraphicsDevice> ShaderProgram<D> {
    /// Create an empty (unusable) program
    pub fn new() -> Self {
        Self {
            program: None,
            generation: 0,
            uniform_cache: FxHashMap::default(),
        }
    }

    // ===== STATE =====

    /// Whether a linked program is installed
    pub fn is_linked(&self) -> bool {
        self.program.is_some()
    }

    /// Device handle of the linked program
    pub fn handle(&self) -> Option<D::Program> {
        self.program
    }

    /// Number of successful links so far
    pub fn generation(&self) -> u32 {
        self.generation
    }

    // ===== BUILD =====

    /// Compile one stage.
    ///
    /// On failure the stage object is released and the compiler log is both
    /// logged and returned in `Error::ShaderCompile`.
    pub fn compile_stage(device: &mut D, stage: ShaderStage, source: &str) -> Result<D::Shader> {
        let shader = device.create_shader(stage)?;
        if device.compile_shader(shader, source) {
            return Ok(shader);
        }

        let log = device.shader_info_log(shader);
        device.delete_shader(shader);
        crate::lgl_error!(SOURCE, "{:?} shader compilation failed\n{}", stage, log.trim_end());
        Err(Error::ShaderCompile { stage, log })
    }

    /// Attach both stages to a fresh program and link it.
    ///
    /// Both stage objects are released whatever the outcome. A program that
    /// fails to link is released too.
    pub fn link(device: &mut D, vertex: D::Shader, fragment: D::Shader) -> Result<D::Program> {
        let program = match device.create_program() {
            Ok(program) => program,
            Err(err) => {
                device.delete_shader(vertex);
                device.delete_shader(fragment);
                return Err(err);
            }
        };

        device.attach_shader(program, vertex);
        device.attach_shader(program, fragment);
        let linked = device.link_program(program);
        device.delete_shader(vertex);
        device.delete_shader(fragment);

        if linked {
            return Ok(program);
        }

        let log = device.program_info_log(program);
        device.delete_program(program);
        crate::lgl_error!(SOURCE, "Failed to link shaders to shader program\n{}", log.trim_end());
        Err(Error::ShaderLink { log })
    }

    /// Compile both stages, link, and install the result.
    ///
    /// On success the previous program is released and the uniform cache is
    /// reset. On failure nothing is leaked and the previous program (with its
    /// cache) stays installed, so the caller can keep rendering and retry.
    pub fn configure(&mut self, device: &mut D, vertex_source: &str, fragment_source: &str) -> Result<()> {
        let vertex = Self::compile_stage(device, ShaderStage::Vertex, vertex_source)?;
        let fragment = match Self::compile_stage(device, ShaderStage::Fragment, fragment_source) {
            Ok(fragment) => fragment,
            Err(err) => {
                device.delete_shader(vertex);
                return Err(err);
            }
        };
        let program = Self::link(device, vertex, fragment)?;

        if let Some(previous) = self.program.replace(program) {
            device.delete_program(previous);
        }
        self.uniform_cache.clear();
        self.generation += 1;

        crate::lgl_info!(SOURCE, "Using shader {:?}", program);
        Ok(())
    }

    /// Read both stage sources from disk, then `configure`.
    ///
    /// A read failure is reported as `Error::ResourceLoad` before any device
    /// object is created.
    pub fn configure_from_files(
        &mut self,
        device: &mut D,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<()> {
        let vertex_source = read_source(vertex_path.as_ref())?;
        let fragment_source = read_source(fragment_path.as_ref())?;
        self.configure(device, &vertex_source, &fragment_source)
    }

    // ===== USE =====

    /// Make this program current on the device
    pub fn activate(&self, device: &mut D) {
        match self.program {
            Some(program) => device.use_program(Some(program)),
            None => crate::lgl_warn!(SOURCE, "activate() on a program that is not linked"),
        }
    }

    /// Write a uniform by name.
    ///
    /// Locations are cached per program. A name the program does not expose
    /// is not an error: the write is dropped, with a warning the first time.
    pub fn set_uniform(&mut self, device: &mut D, name: &str, value: impl Into<UniformValue>) {
        let Some(program) = self.program else {
            crate::lgl_warn!(SOURCE, "set_uniform('{}') on a program that is not linked", name);
            return;
        };

        let first_lookup = !self.uniform_cache.contains_key(name);
        if first_lookup {
            let location = device.uniform_location(program, name);
            if location.is_none() {
                crate::lgl_warn!(SOURCE, "Uniform '{}' not found in program {:?}; writes are ignored", name, program);
            }
            self.uniform_cache.insert(name.to_string(), location);
        }

        match self.uniform_cache.get(name) {
            Some(Some(location)) => device.set_uniform(location, value.into()),
            _ if !first_lookup => crate::lgl_trace!(SOURCE, "Skipping write to missing uniform '{}'", name),
            _ => {}
        }
    }

    // ===== TEARDOWN =====

    /// Release the program object (the program becomes unusable)
    pub fn destroy(&mut self, device: &mut D) {
        if let Some(program) = self.program.take() {
            device.delete_program(program);
        }
        self.uniform_cache.clear();
    }
}

impl<D: GraphicsDevice> Default for ShaderProgram<D> {
    fn default() -> Self {
        Self::new()
    }
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| {
        crate::lgl_error!(SOURCE, "Failed to read shader file '{}': {}", path.display(), err);
        Error::ResourceLoad {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    })
}

#[cfg(test)]
#[path = "shader_program_tests.rs"]
mod tests;
