use std::time::Duration;

/// Frame period of the UI loop
pub const FRAME: Duration = Duration::from_millis(16);

/// Fade-in played when a section mounts. Purely cosmetic.
#[derive(Debug, Clone, Copy)]
pub struct SectionTransition {
    elapsed: u32,
    frames: u32,
}

impl SectionTransition {
    pub fn new(duration: Duration) -> Self {
        let frames = (duration.as_millis() / FRAME.as_millis()).max(1);
        Self {
            elapsed: 0,
            frames: u32::try_from(frames).unwrap_or(u32::MAX),
        }
    }

    pub fn restart(&mut self) {
        self.elapsed = 0;
    }

    /// Advance by one frame
    pub fn tick(&mut self) {
        self.elapsed = (self.elapsed + 1).min(self.frames);
    }

    /// Opacity to render with, eased out
    pub fn opacity(&self) -> f32 {
        let t = self.elapsed as f32 / self.frames as f32;
        1.0 - (1.0 - t) * (1.0 - t)
    }
}
