/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// tracks held keys and turns edge-triggered keys into
/// [`CubeCommand`](crate::CubeCommand) values.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor.handle_event(InputEvent::Key {
///     code: "KeyR".into(),
///     pressed: true,
///     repeat: false,
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A physical key changed state.
    Key {
        /// Key code in `winit::keyboard::KeyCode` debug format
        /// (`"KeyQ"`, `"ArrowLeft"`, `"Space"`).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Set on OS auto-repeat presses.
        repeat: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// The window lost keyboard focus; every key counts as released.
    FocusLost,
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit keyboard event. Unidentified keys yield `None`.
    #[must_use]
    pub fn from_winit_key(event: &winit::event::KeyEvent) -> Option<Self> {
        let winit::keyboard::PhysicalKey::Code(code) = event.physical_key
        else {
            return None;
        };
        Some(Self::Key {
            code: format!("{code:?}"),
            pressed: event.state.is_pressed(),
            repeat: event.repeat,
        })
    }

    /// Convert a winit scroll delta into lines.
    #[must_use]
    pub fn from_winit_scroll(delta: winit::event::MouseScrollDelta) -> Self {
        let delta = match delta {
            winit::event::MouseScrollDelta::LineDelta(_, y) => y,
            winit::event::MouseScrollDelta::PixelDelta(pos) => {
                pos.y as f32 / 40.0
            }
        };
        Self::Scroll { delta }
    }
}
