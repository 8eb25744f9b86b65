//! Device module - the primitive GPU operations the sandbox is built on
//!
//! `GraphicsDevice` is the seam between the sandbox logic and a real GL
//! context. `HeadlessDevice` implements it in memory so the shader lifecycle
//! and the frame logic can run (and be tested) without a GPU.

mod graphics_device;
mod headless_device;

pub use graphics_device::*;
pub use headless_device::*;
