use serde::{Deserialize, Serialize};

/// Atom size and grid spacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeometryOptions {
    /// Distance between neighbouring atom centers.
    pub spacing: f32,
    /// Edge length of one atom.
    pub atom_size: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            spacing: 1.05,
            atom_size: 1.0,
        }
    }
}
