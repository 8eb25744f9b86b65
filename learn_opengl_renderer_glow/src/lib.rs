/*!
# LearnOpenGL sandbox - glow backend

OpenGL implementation of the sandbox `GraphicsDevice` trait over the `glow`
bindings.

The backend only forwards primitive calls to the context. Shader lifecycle
policy, uniform caching and the camera all live in `learn_opengl`.
*/

mod glow_device;

pub use glow_device::GlowDevice;
