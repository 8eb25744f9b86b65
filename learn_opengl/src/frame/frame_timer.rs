/// Frame delta time from a monotonic clock in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTimer {
    last_frame_time: f32,
    delta: f32,
}

impl FrameTimer {
    /// Timer whose first tick measures from zero, like a clock started at
    /// window creation
    pub fn new() -> Self {
        Self::default()
    }

    /// Timer whose first tick measures from `start`
    pub fn starting_at(start: f32) -> Self {
        Self { last_frame_time: start, delta: 0.0 }
    }

    /// Record a new frame at `now` and return the elapsed time. A clock
    /// that goes backwards yields zero.
    pub fn tick(&mut self, now: f32) -> f32 {
        self.delta = (now - self.last_frame_time).max(0.0);
        self.last_frame_time = now;
        self.delta
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn last_frame_time(&self) -> f32 {
        self.last_frame_time
    }
}

#[cfg(test)]
#[path = "frame_timer_tests.rs"]
mod tests;
