use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Sticker palette and background.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB of the +Z face.
    pub front: [f32; 3],
    /// RGB of the +X face.
    pub right: [f32; 3],
    /// RGB of the −Z face.
    pub back: [f32; 3],
    /// RGB of the −X face.
    pub left: [f32; 3],
    /// RGB of the +Y face.
    pub top: [f32; 3],
    /// RGB of the −Y face.
    pub bottom: [f32; 3],
    /// RGB of faces hidden inside the cube.
    pub interior: [f32; 3],
    /// Clear color.
    pub background: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            front: [1.0, 1.0, 1.0],
            right: [0.68, 0.07, 0.08],
            back: [0.05, 0.28, 0.67],
            left: [1.0, 0.34, 0.14],
            top: [0.1, 0.61, 0.3],
            bottom: [1.0, 0.84, 0.18],
            interior: [0.0, 0.0, 0.0],
            background: [0.0, 0.0, 0.0],
        }
    }
}

impl ColorOptions {
    /// Face colors in face-slot order (front, right, back, left, top,
    /// bottom).
    #[must_use]
    pub fn palette(&self) -> [Vec3; 6] {
        [
            self.front, self.right, self.back, self.left, self.top,
            self.bottom,
        ]
        .map(Vec3::from)
    }

    /// Background as a wgpu clear color.
    #[must_use]
    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b] = self.background.map(f64::from);
        wgpu::Color { r, g, b, a: 1.0 }
    }
}
