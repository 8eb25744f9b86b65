/// InputSnapshot: one frame of sampled input.

use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    /// Logical buttons the sandbox reacts to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u16 {
        /// Move along local -Z
        const FORWARD    = 1 << 0;
        /// Move along local +Z
        const BACK       = 1 << 1;
        /// Move along local -X
        const LEFT       = 1 << 2;
        /// Move along local +X
        const RIGHT      = 1 << 3;
        /// Move along local -Y
        const DOWN       = 1 << 4;
        /// Move along local +Y
        const UP         = 1 << 5;
        /// Toggle wireframe rasterization
        const WIREFRAME  = 1 << 6;
        /// Toggle perspective / orthographic projection
        const PROJECTION = 1 << 7;
        /// Free-look while held
        const ROTATE     = 1 << 8;
        /// Request the frame loop to exit
        const CLOSE      = 1 << 9;
    }
}

/// Buttons held at sampling time plus the continuous deltas accumulated since
/// the previous snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub held: Buttons,
    /// Pointer motion in pixels (screen Y grows downward)
    pub pointer_delta: Vec2,
    /// Scroll in lines (positive Y scrolls up / away from the user)
    pub scroll_delta: Vec2,
}

impl InputSnapshot {
    /// Snapshot with `held` buttons and no motion
    pub fn new(held: Buttons) -> Self {
        Self {
            held,
            ..Self::default()
        }
    }

    pub fn with_pointer_delta(mut self, delta: Vec2) -> Self {
        self.pointer_delta = delta;
        self
    }

    pub fn with_scroll_delta(mut self, delta: Vec2) -> Self {
        self.scroll_delta = delta;
        self
    }

    /// All of `buttons` are held
    pub fn is_held(&self, buttons: Buttons) -> bool {
        self.held.contains(buttons)
    }

    /// Press transition: released in `previous`, held now
    pub fn just_pressed(&self, previous: &InputSnapshot, buttons: Buttons) -> bool {
        self.is_held(buttons) && !previous.is_held(buttons)
    }

    /// Release transition: held in `previous`, released now
    pub fn just_released(&self, previous: &InputSnapshot, buttons: Buttons) -> bool {
        !self.is_held(buttons) && previous.is_held(buttons)
    }
}

#[cfg(test)]
#[path = "input_snapshot_tests.rs"]
mod tests;
