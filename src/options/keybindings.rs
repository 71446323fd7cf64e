use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `TurnFront` → `"KeyQ"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

fn default_key(action: KeyAction) -> &'static str {
    match action {
        KeyAction::RotateViewRight => "ArrowRight",
        KeyAction::RotateViewLeft => "ArrowLeft",
        KeyAction::RotateViewUp => "ArrowUp",
        KeyAction::RotateViewDown => "ArrowDown",
        KeyAction::TurnFront => "KeyQ",
        KeyAction::TurnBack => "KeyW",
        KeyAction::TurnRight => "KeyE",
        KeyAction::TurnLeft => "KeyA",
        KeyAction::TurnTop => "KeyS",
        KeyAction::TurnBottom => "KeyD",
        KeyAction::TurnCenterF => "KeyZ",
        KeyAction::TurnCenterR => "KeyX",
        KeyAction::TurnCenterT => "KeyC",
        KeyAction::ToggleDirection => "Space",
        KeyAction::Scramble => "KeyR",
        KeyAction::ScaleUp => "Equal",
        KeyAction::ScaleDown => "Minus",
        KeyAction::Quit => "Escape",
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = KeyAction::ALL
            .into_iter()
            .map(|action| (action, default_key(action).to_owned()))
            .collect();

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Give every unbound action its default key, then rebuild the reverse
    /// map. Called after loading a partial preset. A default key already
    /// claimed by another action is left unbound.
    pub fn fill_defaults(&mut self) {
        for action in KeyAction::ALL {
            if self.bindings.contains_key(&action) {
                continue;
            }
            let key = default_key(action);
            if self.bindings.values().any(|bound| bound == key) {
                log::debug!("{action:?} left unbound, {key} is taken");
                continue;
            }
            let _ = self.bindings.insert(action, key.to_owned());
        }
        self.rebuild_reverse_map();
    }

    /// Rebuild the reverse lookup map (key string → action). When two
    /// actions share a key, the one earlier in [`KeyAction::ALL`] wins.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for action in KeyAction::ALL {
            if let Some(key) = self.bindings.get(&action) {
                let _ = self.key_to_action.entry(key.clone()).or_insert(action);
            }
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
