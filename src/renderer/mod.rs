//! Rendering of the cube: per-atom mesh generation and the single draw pass.

pub mod cube_renderer;
pub(crate) mod pipeline_util;

pub use cube_renderer::{CubeRenderer, CubeVertex};
