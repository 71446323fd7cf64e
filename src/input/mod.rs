//! Input handling: event types, key actions and the input processor that
//! converts held keys into per-frame cube commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Held-key tracking and per-frame polling.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::{HeldKeys, InputProcessor};
