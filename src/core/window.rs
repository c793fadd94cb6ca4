/// Fixed logical window the scenes lay themselves out in.
use crate::core::surface::Bounds;

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const WINDOW_TITLE: &str = "Hangman";

pub const fn window_bounds() -> Bounds {
    Bounds::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT)
}

/// Frames and updates counted since the last report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub frames: u32,
    pub updates: u32,
}

#[derive(Debug, Default)]
pub struct GameWindow {
    stats: FrameStats,
}

impl GameWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_frame(&mut self) {
        self.stats.frames += 1;
    }

    pub fn record_update(&mut self) {
        self.stats.updates += 1;
    }

    /// Returns the counts so far and starts a new period.
    pub fn take_stats(&mut self) -> FrameStats {
        std::mem::take(&mut self.stats)
    }
}
