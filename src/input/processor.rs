//! Converts key state into engine commands.
//!
//! Face turns and view rotation are *polled*: every frame the processor
//! looks at which actions are held and emits at most one of them, first
//! match wins in [`POLL_ORDER`]. The direction toggle is polled too, gated
//! by a frame cooldown. Scramble, scale and quit fire once per physical
//! press from [`InputProcessor::handle_event`].

use std::collections::HashSet;

use glam::Vec3;

use super::event::InputEvent;
use super::keyboard::KeyAction;
use crate::cube::Layer;
use crate::engine::command::CubeCommand;
use crate::options::{KeybindingOptions, Options};

/// Actions considered by [`InputProcessor::poll`], highest priority first.
pub const POLL_ORDER: [KeyAction; 13] = [
    KeyAction::RotateViewRight,
    KeyAction::RotateViewLeft,
    KeyAction::RotateViewUp,
    KeyAction::RotateViewDown,
    KeyAction::TurnFront,
    KeyAction::TurnBack,
    KeyAction::TurnRight,
    KeyAction::TurnLeft,
    KeyAction::TurnTop,
    KeyAction::TurnBottom,
    KeyAction::TurnCenterF,
    KeyAction::TurnCenterR,
    KeyAction::TurnCenterT,
];

/// Set of actions whose keys are currently down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    held: HashSet<KeyAction>,
}

impl HeldKeys {
    /// Mark an action as held. Returns `true` if it was not held before.
    pub fn press(&mut self, action: KeyAction) -> bool {
        self.held.insert(action)
    }

    /// Mark an action as released.
    pub fn release(&mut self, action: KeyAction) {
        let _ = self.held.remove(&action);
    }

    /// Whether an action is held.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }

    /// Release everything.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

fn turn_layer(action: KeyAction) -> Option<Layer> {
    Some(match action {
        KeyAction::TurnFront => Layer::Front,
        KeyAction::TurnBack => Layer::Back,
        KeyAction::TurnRight => Layer::Right,
        KeyAction::TurnLeft => Layer::Left,
        KeyAction::TurnTop => Layer::Top,
        KeyAction::TurnBottom => Layer::Bottom,
        KeyAction::TurnCenterF => Layer::CenterF,
        KeyAction::TurnCenterR => Layer::CenterR,
        KeyAction::TurnCenterT => Layer::CenterT,
        _ => return None,
    })
}

/// Converts key events and held keys into [`CubeCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // On every window event:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// // Once per frame:
/// for cmd in input_processor.poll(engine.cube().is_turning()) {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    held: HeldKeys,
    key_bindings: KeybindingOptions,
    rotate_step: f32,
    scale_step: f32,
    toggle_cooldown: u32,
    cooldown_frames: u32,
}

impl InputProcessor {
    /// Create a processor from the keybinding, camera and animation options.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            held: HeldKeys::default(),
            key_bindings: options.keybindings.clone(),
            rotate_step: options.camera.rotate_step,
            scale_step: options.animation.scale_step,
            toggle_cooldown: 0,
            cooldown_frames: options.animation.toggle_cooldown_frames,
        }
    }

    /// Currently held actions.
    #[must_use]
    pub fn held(&self) -> &HeldKeys {
        &self.held
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Frames left before the direction toggle is accepted again.
    #[must_use]
    pub fn toggle_cooldown(&self) -> u32 {
        self.toggle_cooldown
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CubeCommand> {
        match event {
            InputEvent::Key {
                code,
                pressed,
                repeat,
            } => {
                let action = self.key_bindings.lookup(&code)?;
                if !pressed {
                    self.held.release(action);
                    return None;
                }
                let newly_held = self.held.press(action);
                if repeat || !newly_held {
                    return None;
                }
                self.edge_command(action)
            }
            InputEvent::Scroll { delta } => Some(CubeCommand::Zoom { delta }),
            InputEvent::FocusLost => {
                self.held.clear();
                None
            }
        }
    }

    fn edge_command(&self, action: KeyAction) -> Option<CubeCommand> {
        match action {
            KeyAction::Scramble => Some(CubeCommand::Scramble),
            KeyAction::ScaleUp => Some(CubeCommand::Scale {
                factor: self.scale_step,
            }),
            KeyAction::ScaleDown => Some(CubeCommand::Scale {
                factor: 1.0 / self.scale_step,
            }),
            KeyAction::Quit => Some(CubeCommand::Quit),
            _ => None,
        }
    }

    /// Commands for this frame from the held keys.
    ///
    /// Emits the first held action of [`POLL_ORDER`] and, if Space is held,
    /// no turn is running and the cooldown has run out, a direction toggle.
    /// The cooldown counts down by one on every call.
    pub fn poll(&mut self, turning: bool) -> Vec<CubeCommand> {
        let mut commands = Vec::with_capacity(2);

        let first = POLL_ORDER
            .into_iter()
            .find(|action| self.held.is_held(*action));
        if let Some(action) = first {
            commands.extend(self.held_command(action));
        }

        if self.held.is_held(KeyAction::ToggleDirection)
            && self.toggle_cooldown == 0
            && !turning
        {
            commands.push(CubeCommand::ToggleDirection);
            self.toggle_cooldown = self.cooldown_frames;
        }
        self.toggle_cooldown = self.toggle_cooldown.saturating_sub(1);

        commands
    }

    fn held_command(&self, action: KeyAction) -> Option<CubeCommand> {
        let step = self.rotate_step;
        let rotate = |axis: Vec3| CubeCommand::RotateView {
            axis,
            degrees: step,
        };
        match action {
            KeyAction::RotateViewRight => Some(rotate(Vec3::Y)),
            KeyAction::RotateViewLeft => Some(rotate(Vec3::NEG_Y)),
            KeyAction::RotateViewUp => Some(rotate(Vec3::X)),
            KeyAction::RotateViewDown => Some(rotate(Vec3::NEG_X)),
            other => turn_layer(other).map(CubeCommand::Turn),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            code: code.into(),
            pressed,
            repeat: false,
        }
    }

    #[test]
    fn arrows_win_over_face_keys() {
        let mut input = InputProcessor::default();
        let _ = input.handle_event(key("KeyQ", true));
        let _ = input.handle_event(key("ArrowLeft", true));
        assert_eq!(
            input.poll(false),
            vec![CubeCommand::RotateView {
                axis: Vec3::NEG_Y,
                degrees: 1.0
            }]
        );
        let _ = input.handle_event(key("ArrowRight", true));
        assert_eq!(
            input.poll(false),
            vec![CubeCommand::RotateView {
                axis: Vec3::Y,
                degrees: 1.0
            }]
        );
        let _ = input.handle_event(key("ArrowRight", false));
        let _ = input.handle_event(key("ArrowLeft", false));
        assert_eq!(input.poll(false), vec![CubeCommand::Turn(Layer::Front)]);
    }

    #[test]
    fn face_keys_in_order() {
        let mut input = InputProcessor::default();
        let _ = input.handle_event(key("KeyC", true));
        let _ = input.handle_event(key("KeyE", true));
        assert_eq!(input.poll(false), vec![CubeCommand::Turn(Layer::Right)]);
        let _ = input.handle_event(key("KeyE", false));
        assert_eq!(input.poll(true), vec![CubeCommand::Turn(Layer::CenterT)]);
    }

    #[test]
    fn space_has_cooldown() {
        let mut input = InputProcessor::default();
        let _ = input.handle_event(key("Space", true));
        assert_eq!(input.poll(false), vec![CubeCommand::ToggleDirection]);
        for _ in 0..58 {
            assert!(input.poll(false).is_empty());
        }
        assert_eq!(input.toggle_cooldown(), 1);
        assert!(input.poll(false).is_empty());
        assert_eq!(input.poll(false), vec![CubeCommand::ToggleDirection]);
    }

    #[test]
    fn space_ignored_while_turning() {
        let mut input = InputProcessor::default();
        let _ = input.handle_event(key("Space", true));
        assert!(input.poll(true).is_empty());
        assert_eq!(input.poll(false), vec![CubeCommand::ToggleDirection]);
    }

    #[test]
    fn edge_keys_fire_once() {
        let mut input = InputProcessor::default();
        assert_eq!(
            input.handle_event(key("KeyR", true)),
            Some(CubeCommand::Scramble)
        );
        let repeat = InputEvent::Key {
            code: "KeyR".into(),
            pressed: true,
            repeat: true,
        };
        assert_eq!(input.handle_event(repeat), None);
        assert!(input.poll(false).is_empty());
        assert_eq!(
            input.handle_event(key("Escape", true)),
            Some(CubeCommand::Quit)
        );
        assert_eq!(input.handle_event(key("KeyK", true)), None);
    }

    #[test]
    fn scale_keys_are_inverse() {
        let mut input = InputProcessor::default();
        let up = input.handle_event(key("Equal", true));
        let down = input.handle_event(key("Minus", true));
        let (
            Some(CubeCommand::Scale { factor: a }),
            Some(CubeCommand::Scale { factor: b }),
        ) = (up, down)
        else {
            panic!("expected scale commands, got {up:?} / {down:?}");
        };
        assert!((a * b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn focus_loss_releases_keys() {
        let mut input = InputProcessor::default();
        let _ = input.handle_event(key("KeyS", true));
        assert!(input.held().is_held(KeyAction::TurnTop));
        let _ = input.handle_event(InputEvent::FocusLost);
        assert!(input.poll(false).is_empty());
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 2.0 }),
            Some(CubeCommand::Zoom { delta: 2.0 })
        );
    }
}
