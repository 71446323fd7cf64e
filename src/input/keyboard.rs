use serde::{Deserialize, Serialize};

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// turn_front = "KeyQ"
/// toggle_direction = "Space"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Spin the view about +Y.
    RotateViewRight,
    /// Spin the view about −Y.
    RotateViewLeft,
    /// Spin the view about +X.
    RotateViewUp,
    /// Spin the view about −X.
    RotateViewDown,
    /// Turn the front layer.
    TurnFront,
    /// Turn the back layer.
    TurnBack,
    /// Turn the right layer.
    TurnRight,
    /// Turn the left layer.
    TurnLeft,
    /// Turn the top layer.
    TurnTop,
    /// Turn the bottom layer.
    TurnBottom,
    /// Turn the x = 0 slice.
    TurnCenterF,
    /// Turn the y = 0 slice.
    TurnCenterR,
    /// Turn the z = 0 slice.
    TurnCenterT,
    /// Flip the direction of subsequent turns.
    ToggleDirection,
    /// Queue random turns.
    Scramble,
    /// Grow the cube.
    ScaleUp,
    /// Shrink the cube.
    ScaleDown,
    /// Close the window.
    Quit,
}

impl KeyAction {
    /// Every action, in polling priority order.
    pub const ALL: [Self; 18] = [
        Self::RotateViewRight,
        Self::RotateViewLeft,
        Self::RotateViewUp,
        Self::RotateViewDown,
        Self::TurnFront,
        Self::TurnBack,
        Self::TurnRight,
        Self::TurnLeft,
        Self::TurnTop,
        Self::TurnBottom,
        Self::TurnCenterF,
        Self::TurnCenterR,
        Self::TurnCenterT,
        Self::ToggleDirection,
        Self::Scramble,
        Self::ScaleUp,
        Self::ScaleDown,
        Self::Quit,
    ];
}
