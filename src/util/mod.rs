//! Shared utilities.

/// FPS cap and smoothed FPS.
pub mod frame_timing;
