//! Centralized options with TOML preset support.
//!
//! Camera placement, animation pacing, colors, geometry and keybindings are
//! consolidated here. Options serialize to/from TOML presets stored in
//! `assets/presets/`.

mod animation;
mod camera;
mod colors;
mod geometry;
mod keybindings;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use geometry::GeometryOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};

use crate::cube::{MAX_ATOM_SIZE, MIN_ATOM_SIZE};
use crate::error::RubikError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection, placement and control parameters.
    pub camera: CameraOptions,
    /// Frame pacing and turn animation.
    pub animation: AnimationOptions,
    /// Sticker palette.
    pub colors: ColorOptions,
    /// Atom size and spacing.
    pub geometry: GeometryOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from TOML text. Missing fields and unbound actions use
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RubikError::OptionsParse`] on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, RubikError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| RubikError::OptionsParse(e.to_string()))?;
        options.validate()?;
        options.keybindings.fill_defaults();
        Ok(options)
    }

    /// Check values the cube cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`RubikError::OptionsParse`] naming the first field out of
    /// range: a non-positive `spacing` or `scale_step`, an `atom_size`
    /// outside [`MIN_ATOM_SIZE`]..=[`MAX_ATOM_SIZE`], or zero
    /// `turn_frames`.
    pub fn validate(&self) -> Result<(), RubikError> {
        let invalid = |field: &str, value: String| {
            Err(RubikError::OptionsParse(format!(
                "{field} out of range: {value}"
            )))
        };
        let geometry = &self.geometry;
        if !geometry.spacing.is_finite() || geometry.spacing <= 0.0 {
            return invalid("geometry.spacing", geometry.spacing.to_string());
        }
        if !(MIN_ATOM_SIZE..=MAX_ATOM_SIZE).contains(&geometry.atom_size) {
            return invalid(
                "geometry.atom_size",
                geometry.atom_size.to_string(),
            );
        }
        let animation = &self.animation;
        if animation.turn_frames == 0 {
            return invalid("animation.turn_frames", "0".to_owned());
        }
        if !animation.scale_step.is_finite() || animation.scale_step <= 0.0 {
            return invalid(
                "animation.scale_step",
                animation.scale_step.to_string(),
            );
        }
        Ok(())
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RubikError::Io`] if the file cannot be read and
    /// [`RubikError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, RubikError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`RubikError::Io`] if the file or its directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), RubikError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RubikError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[animation]
turn_frames = 30
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.animation.turn_frames, 30);
        // Everything else should be default
        assert_eq!(opts.animation.target_fps, 144);
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.geometry.spacing, 1.05);
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(KeyAction::ToggleDirection)
        );
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        let keys = &opts.keybindings;
        assert_eq!(keys.lookup("KeyQ"), Some(KeyAction::TurnFront));
        assert_eq!(keys.lookup("KeyC"), Some(KeyAction::TurnCenterT));
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::RotateViewUp)
        );
        assert_eq!(opts.keybindings.lookup("KeyK"), None);
    }

    #[test]
    fn rebinding_keeps_other_defaults() {
        let toml_str = r#"
[keybindings.bindings]
turn_front = "KeyF"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyF"), Some(KeyAction::TurnFront));
        assert_eq!(opts.keybindings.lookup("KeyQ"), None);
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::TurnBack));
    }

    #[test]
    fn taking_another_actions_default_key_unbinds_it() {
        let toml_str = r#"
[keybindings.bindings]
turn_back = "KeyQ"
"#;
        for _ in 0..32 {
            let opts = Options::from_toml(toml_str).unwrap();
            let keys = &opts.keybindings;
            assert_eq!(keys.lookup("KeyQ"), Some(KeyAction::TurnBack));
            assert_eq!(keys.lookup("KeyW"), None);
            assert!(!keys.bindings.contains_key(&KeyAction::TurnFront));
        }
    }

    #[test]
    fn swapped_keys_resolve_both_ways() {
        let toml_str = r#"
[keybindings.bindings]
turn_front = "KeyW"
turn_back = "KeyQ"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::TurnBack));
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::TurnFront));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for toml_str in [
            "[geometry]\nspacing = 0.0",
            "[geometry]\nspacing = -1.0",
            "[geometry]\natom_size = 0.1",
            "[geometry]\natom_size = 5.0",
            "[animation]\nturn_frames = 0",
            "[animation]\nscale_step = 0.0",
        ] {
            let err = Options::from_toml(toml_str).unwrap_err();
            assert!(
                matches!(err, RubikError::OptionsParse(_)),
                "{toml_str} gave {err:?}"
            );
        }
        assert!(Options::from_toml("[geometry]\natom_size = 4.0").is_ok());
    }

    #[test]
    fn bad_toml_is_an_options_error() {
        let err = Options::from_toml("[animation]\nturn_frames = \"many\"")
            .unwrap_err();
        assert!(matches!(err, RubikError::OptionsParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("rubik-no-such-preset.toml");
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, RubikError::Io(_)));
    }

    #[test]
    fn save_load_and_list() {
        let dir = std::env::temp_dir()
            .join(format!("rubik-options-{}", std::process::id()));
        let mut opts = Options::default();
        opts.colors.front = [0.9, 0.9, 0.9];
        opts.save(&dir.join("bright.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["bright".to_owned()]);
        let loaded = Options::load(&dir.join("bright.toml")).unwrap();
        assert_eq!(loaded, opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn palette_follows_face_order() {
        let colors = ColorOptions::default();
        let palette = colors.palette();
        assert_eq!(palette[0], glam::Vec3::ONE);
        assert_eq!(palette[4], glam::Vec3::from(colors.top));
    }
}
