use glam::{Quat, Vec3};

use crate::camera::Camera;

/// One of the six faces of an atom cube, in color-slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// +Z face.
    Front,
    /// +X face.
    Right,
    /// −Z face.
    Back,
    /// −X face.
    Left,
    /// +Y face.
    Top,
    /// −Y face.
    Bottom,
}

impl Face {
    /// All faces in color-slot order.
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Right,
        Self::Back,
        Self::Left,
        Self::Top,
        Self::Bottom,
    ];

    /// Index into an atom's color array.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Front => 0,
            Self::Right => 1,
            Self::Back => 2,
            Self::Left => 3,
            Self::Top => 4,
            Self::Bottom => 5,
        }
    }

    /// Corner indices of the face quad, counter-clockwise seen from outside.
    #[must_use]
    pub fn corners(self) -> [usize; 4] {
        match self {
            Self::Front => [0, 1, 2, 3],
            Self::Right => [1, 5, 6, 2],
            Self::Back => [7, 6, 5, 4],
            Self::Left => [0, 3, 7, 4],
            Self::Top => [3, 2, 6, 7],
            Self::Bottom => [0, 4, 5, 1],
        }
    }

    /// Outward normal of the face before any rotation.
    #[must_use]
    pub fn normal(self) -> Vec3 {
        match self {
            Self::Front => Vec3::Z,
            Self::Right => Vec3::X,
            Self::Back => Vec3::NEG_Z,
            Self::Left => Vec3::NEG_X,
            Self::Top => Vec3::Y,
            Self::Bottom => Vec3::NEG_Y,
        }
    }
}

/// Triangle order inside a face quad.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// A single sub-cube of the Rubik's cube.
///
/// Geometry lives in world space: the eight corners are rotated in place by
/// face turns, and `position` tracks their centroid. The per-atom
/// [`Camera`] carries the free view rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomCube {
    position: Vec3,
    dimensions: Vec3,
    corners: [Vec3; 8],
    colors: [Vec3; 6],
    camera: Camera,
}

fn triangulate(pos: Vec3, dim: Vec3) -> [Vec3; 8] {
    let h = dim / 2.0;
    [
        // front
        Vec3::new(pos.x - h.x, pos.y - h.y, pos.z + h.z),
        Vec3::new(pos.x + h.x, pos.y - h.y, pos.z + h.z),
        Vec3::new(pos.x + h.x, pos.y + h.y, pos.z + h.z),
        Vec3::new(pos.x - h.x, pos.y + h.y, pos.z + h.z),
        // back
        Vec3::new(pos.x - h.x, pos.y - h.y, pos.z - h.z),
        Vec3::new(pos.x + h.x, pos.y - h.y, pos.z - h.z),
        Vec3::new(pos.x + h.x, pos.y + h.y, pos.z - h.z),
        Vec3::new(pos.x - h.x, pos.y + h.y, pos.z - h.z),
    ]
}

fn centroid(corners: &[Vec3; 8]) -> Vec3 {
    corners.iter().copied().sum::<Vec3>() / corners.len() as f32
}

impl AtomCube {
    /// Axis-aligned atom centered at `center`. All faces start black.
    #[must_use]
    pub fn new(center: Vec3, dimensions: Vec3) -> Self {
        Self {
            position: center,
            dimensions,
            corners: triangulate(center, dimensions),
            colors: [Vec3::ZERO; 6],
            camera: Camera::default(),
        }
    }

    /// Replace all six face colors.
    pub fn set_colors(&mut self, colors: [Vec3; 6]) {
        self.colors = colors;
    }

    /// Face colors in [`Face::ALL`] order.
    #[must_use]
    pub fn colors(&self) -> &[Vec3; 6] {
        &self.colors
    }

    /// Color of one face.
    #[must_use]
    pub fn color(&self, face: Face) -> Vec3 {
        self.colors[face.index()]
    }

    /// Rotate the atom's camera model (free view rotation).
    pub fn rotate(&mut self, axis: Vec3, degrees: f32) {
        self.camera.rotate(axis, degrees);
    }

    /// Rotate the atom's geometry around `axis` through the world origin.
    pub fn rotate_xyz(&mut self, axis: Vec3, degrees: f32) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        let rotation = Quat::from_axis_angle(axis, degrees.to_radians());
        for corner in &mut self.corners {
            *corner = rotation * *corner;
        }
        self.position = centroid(&self.corners);
    }

    /// Move the atom by `offset`, keeping its orientation.
    pub fn translate(&mut self, offset: Vec3) {
        for corner in &mut self.corners {
            *corner += offset;
        }
        self.position += offset;
    }

    /// Move the atom's center to `position`, keeping its orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.translate(position - self.position);
    }

    /// Scale the atom around its own center.
    ///
    /// Non-positive components are ignored.
    pub fn scale(&mut self, factor: Vec3) {
        if factor.cmple(Vec3::ZERO).any() {
            return;
        }
        // Work in the atom's local frame so rotated atoms stay rotated.
        let center = self.position;
        let basis = self.local_basis();
        for corner in &mut self.corners {
            let local = *corner - center;
            let mut scaled = Vec3::ZERO;
            for (axis, f) in basis.iter().zip(factor.to_array()) {
                scaled += *axis * local.dot(*axis) * f;
            }
            *corner = center + scaled;
        }
        self.dimensions *= factor;
    }

    /// Resize the atom to `dimensions`, keeping center and orientation.
    pub fn set_dimensions(&mut self, dimensions: Vec3) {
        if dimensions.cmple(Vec3::ZERO).any() {
            return;
        }
        self.scale(dimensions / self.dimensions);
    }

    /// Local X, Y and Z axes of the atom after any rotation.
    fn local_basis(&self) -> [Vec3; 3] {
        let c = &self.corners;
        [
            (c[1] - c[0]).normalize_or_zero(),
            (c[3] - c[0]).normalize_or_zero(),
            (c[0] - c[4]).normalize_or_zero(),
        ]
    }

    /// Centroid of the eight corners.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Edge lengths along the atom's local axes.
    #[must_use]
    pub fn dimensions(&self) -> Vec3 {
        self.dimensions
    }

    /// Edge length along local X.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.dimensions.x
    }

    /// World-space corners.
    #[must_use]
    pub fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }

    pub(crate) fn set_corners(&mut self, corners: [Vec3; 8]) {
        self.corners = corners;
        self.position = centroid(&self.corners);
    }

    /// Corner positions of a face quad.
    #[must_use]
    pub fn face_quad(&self, face: Face) -> [Vec3; 4] {
        face.corners().map(|i| self.corners[i])
    }

    /// Current outward normal of a face.
    #[must_use]
    pub fn face_normal(&self, face: Face) -> Vec3 {
        let quad = self.face_quad(face);
        let face_center = quad.iter().copied().sum::<Vec3>() / 4.0;
        (face_center - self.position).normalize_or_zero()
    }

    /// Set the perspective of the atom's camera.
    pub fn set_perspective(
        &mut self,
        fovy: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) {
        self.camera.set_perspective(fovy, aspect, znear, zfar);
    }

    /// Replace the view of the atom's camera with a look-at.
    pub fn set_view(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.camera.set_view(eye, target, up);
    }

    /// Replace the atom's camera.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    /// The atom's camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn corners_surround_center() {
        let atom = AtomCube::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ONE);
        assert!(approx(atom.position(), Vec3::new(1.0, 2.0, 3.0)));
        assert!(approx(atom.corners()[0], Vec3::new(0.5, 1.5, 3.5)));
        assert!(approx(atom.corners()[6], Vec3::new(1.5, 2.5, 2.5)));
    }

    #[test]
    fn face_normals_point_outward() {
        let atom = AtomCube::new(Vec3::ZERO, Vec3::ONE);
        for face in Face::ALL {
            assert!(approx(atom.face_normal(face), face.normal()), "{face:?}");
        }
    }

    #[test]
    fn rotate_xyz_orbits_origin() {
        let mut atom = AtomCube::new(Vec3::new(1.05, 0.0, 0.0), Vec3::ONE);
        atom.rotate_xyz(Vec3::Z, 90.0);
        assert!(approx(atom.position(), Vec3::new(0.0, 1.05, 0.0)));
        // The +X face now looks up.
        assert!(approx(atom.face_normal(Face::Right), Vec3::Y));
    }

    #[test]
    fn scale_keeps_center_and_orientation() {
        let mut atom = AtomCube::new(Vec3::new(1.05, 0.0, 0.0), Vec3::ONE);
        atom.rotate_xyz(Vec3::Z, 90.0);
        let center = atom.position();
        atom.scale(Vec3::splat(2.0));
        assert!(approx(atom.position(), center));
        assert!(approx(atom.dimensions(), Vec3::splat(2.0)));
        assert!(approx(atom.face_normal(Face::Right), Vec3::Y));
        let edge = atom.corners()[1] - atom.corners()[0];
        assert!((edge.length() - 2.0).abs() < 1e-4);

        atom.set_dimensions(Vec3::ONE);
        assert!((atom.size() - 1.0).abs() < 1e-6);
        atom.scale(Vec3::new(1.0, -1.0, 1.0));
        assert!((atom.size() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn set_position_translates() {
        let mut atom = AtomCube::new(Vec3::ZERO, Vec3::ONE);
        atom.set_position(Vec3::new(0.0, 0.0, -2.0));
        assert!(approx(atom.position(), Vec3::new(0.0, 0.0, -2.0)));
        assert!(approx(atom.corners()[0], Vec3::new(-0.5, -0.5, -1.5)));
    }

    #[test]
    fn camera_rotation_leaves_geometry() {
        let mut atom = AtomCube::new(Vec3::X, Vec3::ONE);
        let before = *atom.corners();
        atom.rotate(Vec3::Y, 15.0);
        assert_eq!(*atom.corners(), before);
        assert_ne!(atom.camera().model(), glam::Mat4::IDENTITY);
    }
}
