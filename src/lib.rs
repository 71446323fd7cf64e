// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D Rubik's cube built on wgpu.
//!
//! The cube is 26 "atom" cubes on a 3×3×3 grid. Nine layers (six faces and
//! three center slices) can be turned; a turn is animated over a fixed
//! number of frames, after which layer membership is recomputed from atom
//! positions.
//!
//! # Key entry points
//!
//! - [`cube::RubikCube`] - the GPU-free model: atoms, layer groups, turns
//! - [`engine::RubikEngine`] - owns the GPU context, renderer and input
//! - [`options::Options`] - TOML-backed configuration (camera, animation,
//!   colors, geometry, keybindings)
//! - `Viewer` - a winit window running the engine (`viewer` feature)
//!
//! # Frame loop
//!
//! Every frame the engine polls held keys (view rotation and face turns,
//! first match wins), advances the running turn by one increment, uploads
//! atom geometry and per-atom camera uniforms, draws, and sleeps out the
//! rest of the frame budget.

pub mod camera;
pub mod cube;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use cube::RubikCube;
pub use engine::command::CubeCommand;
pub use engine::RubikEngine;
pub use error::RubikError;
pub use input::{InputEvent, KeyAction};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
