//! Frame pacing against an FPS cap.

use web_time::{Duration, Instant};

/// Frame pacing against an FPS cap, with a smoothed FPS readout.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Start of the current frame
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Weight of the newest sample (0.0-1.0)
    smoothing: f32,
    /// Frames completed since creation
    frame_count: u64,
}

fn frame_budget(target_fps: u32) -> Duration {
    if target_fps > 0 {
        Duration::from_secs_f64(1.0 / f64::from(target_fps))
    } else {
        Duration::ZERO
    }
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self {
            target_fps,
            min_frame_duration: frame_budget(target_fps),
            last_frame: Instant::now(),
            smoothed_fps: target_fps.max(1) as f32,
            smoothing: 0.05,
            frame_count: 0,
        }
    }

    /// Change the FPS cap.
    pub fn set_target_fps(&mut self, target_fps: u32) {
        self.target_fps = target_fps;
        self.min_frame_duration = frame_budget(target_fps);
    }

    /// The FPS cap (0 = unlimited).
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Whether the current frame has used up its time budget.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.remaining().is_zero()
    }

    /// Time left in the current frame's budget.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Sleep out the rest of the frame budget.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn sleep_remaining(&self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames completed so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
        assert_eq!(timing.remaining(), Duration::ZERO);
    }

    #[test]
    fn budget_matches_cap() {
        let timing = FrameTiming::new(144);
        assert!(timing.remaining() <= Duration::from_secs_f64(1.0 / 144.0));
        assert_eq!(timing.target_fps(), 144);
    }

    #[test]
    fn end_frame_counts() {
        let mut timing = FrameTiming::new(1);
        assert!(!timing.should_render());
        timing.set_target_fps(0);
        assert!(timing.should_render());
        timing.end_frame();
        timing.end_frame();
        assert_eq!(timing.frame_count(), 2);
        assert!(timing.fps() > 0.0);
    }
}
