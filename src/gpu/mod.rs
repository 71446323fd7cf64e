//! GPU resource management: wgpu device/surface initialization and shader
//! composition.

/// wgpu device, surface, queue and depth buffer initialization.
pub mod render_context;
/// WGSL shader loading and composition with `#import` support via naga-oil.
pub mod shader_composer;
