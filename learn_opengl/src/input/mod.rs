//! Input module: per-frame input snapshots.
//!
//! The camera and render-mode logic only ever look at two snapshots: this
//! frame's and the previous frame's. `InputRecorder` builds snapshots from
//! winit window events; anything else (tests, replays) can build them
//! directly.

mod input_snapshot;
mod key_bindings;
mod input_recorder;

pub use input_snapshot::{Buttons, InputSnapshot};
pub use key_bindings::KeyBindings;
pub use input_recorder::{InputRecorder, SCROLL_PIXELS_PER_LINE};
