use glam::{Mat4, Vec3};

/// Model/view/projection transform.
///
/// `model` holds the accumulated rotation, `view` the eye placement and
/// `projection` the perspective. Rotations and translations compose on the
/// right, so later calls act in the already-transformed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    model: Mat4,
    view: Mat4,
    projection: Mat4,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the three camera matrices.
pub struct CameraUniform {
    /// Model (rotation) matrix.
    pub model: [[f32; 4]; 4],
    /// View (eye placement) matrix.
    pub view: [[f32; 4]; 4],
    /// Perspective projection matrix.
    pub projection: [[f32; 4]; 4],
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        }
    }
}

impl Camera {
    /// Rotate the model by `degrees` around `axis`.
    ///
    /// A zero axis leaves the model untouched.
    pub fn rotate(&mut self, axis: Vec3, degrees: f32) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        self.model *= Mat4::from_axis_angle(axis, degrees.to_radians());
    }

    /// Drop all accumulated rotation.
    pub fn reset_rotation(&mut self) {
        self.model = Mat4::IDENTITY;
    }

    /// Translate the view by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        self.view *= Mat4::from_translation(offset);
    }

    /// Replace the view with a look-at from `eye` toward `target`.
    pub fn set_view(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.view = Mat4::look_at_rh(eye, target, up);
    }

    /// Drop all view translation.
    pub fn reset_translation(&mut self) {
        self.view = Mat4::IDENTITY;
    }

    /// Set a perspective projection. `fovy` is in degrees.
    pub fn set_perspective(
        &mut self,
        fovy: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        self.projection =
            Mat4::perspective_rh(fovy.to_radians(), aspect, znear, zfar);
    }

    /// Reset the projection to identity.
    pub fn reset_perspective(&mut self) {
        self.projection = Mat4::IDENTITY;
    }

    /// Translation column of the view matrix.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.view.w_axis.truncate()
    }

    /// The model matrix.
    #[must_use]
    pub fn model(&self) -> Mat4 {
        self.model
    }

    /// The view matrix.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// The projection matrix.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Pack the matrices for upload.
    #[must_use]
    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            model: self.model.to_cols_array_2d(),
            view: self.view.to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn rotate_composes_on_the_model() {
        let mut camera = Camera::default();
        camera.rotate(Vec3::Y, 90.0);
        let rotated = camera.model().transform_vector3(Vec3::X);
        assert!(approx(rotated, Vec3::NEG_Z));

        camera.rotate(Vec3::Y, -90.0);
        assert!(approx(camera.model().transform_vector3(Vec3::X), Vec3::X));
    }

    #[test]
    fn zero_axis_is_ignored() {
        let mut camera = Camera::default();
        camera.rotate(Vec3::ZERO, 45.0);
        assert_eq!(camera.model(), Mat4::IDENTITY);
    }

    #[test]
    fn look_at_places_eye() {
        let mut camera = Camera::default();
        camera.set_view(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        // The world origin lands ten units in front of the eye.
        assert!(approx(camera.position(), Vec3::new(0.0, 0.0, -10.0)));
        let origin = camera.view().transform_point3(Vec3::ZERO);
        assert!(approx(origin, Vec3::new(0.0, 0.0, -10.0)));
    }

    #[test]
    fn translate_then_reset() {
        let mut camera = Camera::default();
        camera.translate(Vec3::new(0.0, 0.0, 10.0));
        assert!(approx(camera.position(), Vec3::new(0.0, 0.0, 10.0)));
        camera.reset_translation();
        assert_eq!(camera.view(), Mat4::IDENTITY);
    }

    #[test]
    fn perspective_round_trip() {
        let mut camera = Camera::default();
        camera.set_perspective(45.0, 1.5, 0.1, 100.0);
        assert_ne!(camera.projection(), Mat4::IDENTITY);
        let uniform = camera.to_uniform();
        assert_eq!(uniform.projection, camera.projection().to_cols_array_2d());
        camera.reset_perspective();
        assert_eq!(camera.projection(), Mat4::IDENTITY);
        camera.reset_rotation();
        assert_eq!(camera.model(), Mat4::IDENTITY);
    }

    #[test]
    fn uniform_is_three_matrices() {
        assert_eq!(size_of::<CameraUniform>(), 3 * 64);
    }
}
