// Frame timing: start time, frame counter, target interval.

use std::time::{Duration, Instant};

pub const DEFAULT_FPS: u32 = 60;

#[derive(Clone, Debug)]
pub struct FrameClock {
    start: Option<Instant>,
    frame_count: u64,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self { start: None, frame_count: 0, fps: DEFAULT_FPS }
    }
}

impl FrameClock {
    /// Record the start time. Only the first call counts.
    pub fn start_once(&mut self, now: Instant) {
        if self.start.is_none() {
            self.start = Some(now);
        }
    }

    /// Forget the start time and frame count; the next `start_once` restarts.
    pub fn reset(&mut self) {
        self.start = None;
        self.frame_count = 0;
    }

    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }

    pub fn advance(&mut self) -> u64 {
        self.frame_count += 1;
        self.frame_count
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.max(1);
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }

    pub fn elapsed_millis_at(&self, now: Instant) -> u64 {
        self.start
            .map(|s| now.saturating_duration_since(s).as_millis() as u64)
            .unwrap_or(0)
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_millis_at(Instant::now())
    }
}
