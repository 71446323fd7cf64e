//! Camera transforms for the atom cubes.
//!
//! Each atom carries its own [`Camera`] (model, view and projection
//! matrices). The renderer uploads one [`CameraUniform`] per atom.

/// Model/view/projection camera and its GPU uniform block.
pub mod core;

pub use self::core::{Camera, CameraUniform};
