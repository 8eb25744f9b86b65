/*!
# LearnOpenGL sandbox

Core types for a small OpenGL learning sandbox: a shader program lifecycle
with name-addressed uniforms, and a first-person fly camera.

The crate is platform-agnostic. Every GPU operation goes through the
`GraphicsDevice` trait; the `learn_opengl_renderer_glow` crate implements it
over a real GL context, and `HeadlessDevice` implements it in memory.

## Architecture

- **ShaderProgram**: compile, link and reconfigure a program; set uniforms by name
- **CameraController**: pose, projection and input-to-motion mapping
- **InputSnapshot**: one frame of sampled input, built by `InputRecorder`
- **SceneLayout**: per-frame model matrices for the fixed object grid
- **SandboxState**: the explicit per-frame state owned by the driver

The frame-loop driver owns the device and a `SandboxState`, feeds one input
snapshot per frame to `update`, then calls `render`.
*/

// Internal modules
mod error;
pub mod log;
pub mod config;
pub mod device;
pub mod shader;
pub mod camera;
pub mod input;
pub mod scene;
pub mod frame;

#[cfg(test)]
mod test_utils;

// Main lgl namespace module
pub mod lgl {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::{CameraConfig, SandboxConfig};

    // Device seam
    pub use crate::device::{
        GraphicsDevice, HeadlessDevice, PolygonMode, ShaderStage, UniformValue,
    };

    // Shader program
    pub use crate::shader::ShaderProgram;

    // Per-frame state
    pub use crate::frame::{FrameTimer, FrameUpdate, RenderSettings, SandboxState};

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{
            reset_logger, set_logger, DefaultLogger, LogEntry, LogSeverity, Logger,
        };
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Input sub-module
    pub mod input {
        pub use crate::input::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
