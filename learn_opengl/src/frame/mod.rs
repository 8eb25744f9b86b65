//! Frame module: the explicit state owned by the frame-loop driver.
//!
//! One thread owns a `SandboxState` and the device. Each iteration it calls
//! `update` with the frame's input snapshot, then `render`. There is no
//! global program or camera state.

mod frame_timer;
mod frame_state;

pub use frame_timer::FrameTimer;
pub use frame_state::{FrameUpdate, RenderSettings, SandboxState};
