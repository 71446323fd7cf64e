use serde::{Deserialize, Serialize};

/// Frame pacing and turn animation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationOptions {
    /// Frame-rate cap.
    pub target_fps: u32,
    /// Frames per quarter turn.
    pub turn_frames: u32,
    /// Frames to wait after a direction toggle before accepting another.
    pub toggle_cooldown_frames: u32,
    /// Random turns queued by a scramble.
    pub scramble_moves: usize,
    /// Multiplier applied by one scale-up step (scale-down uses its inverse).
    pub scale_step: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            target_fps: 144,
            turn_frames: 90,
            toggle_cooldown_frames: 60,
            scramble_moves: 20,
            scale_step: 1.1,
        }
    }
}
