//! Everything the engine can be asked to do.
//!
//! Key polling, edge-triggered keys and the mouse wheel all produce
//! `CubeCommand`s, which are passed to
//! [`RubikEngine::execute`](super::RubikEngine::execute).

use glam::Vec3;

use crate::cube::Layer;

/// A single engine operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CubeCommand {
    // ── View ────────────────────────────────────────────────────────
    /// Rotate every atom camera about `axis`.
    RotateView {
        /// Rotation axis in model space.
        axis: Vec3,
        /// Angle in degrees.
        degrees: f32,
    },

    /// Move the eye (positive = closer).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    // ── Cube ────────────────────────────────────────────────────────
    /// Start a quarter turn of one layer in the current direction.
    Turn(Layer),

    /// Flip the direction of later turns.
    ToggleDirection,

    /// Queue random turns.
    Scramble,

    /// Resize the cube by a factor.
    Scale {
        /// Size multiplier.
        factor: f32,
    },

    // ── Application ─────────────────────────────────────────────────
    /// Close the window.
    Quit,
}
