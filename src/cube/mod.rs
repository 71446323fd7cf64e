//! The Rubik's cube model: 26 atom cubes, nine layer groups and the
//! face-turn animation.
//!
//! Nothing in here touches the GPU. [`RubikCube::step`] advances one frame:
//! it rotates the atoms of the turning layer by one increment and, once a
//! quarter turn completes, snaps their geometry exactly and recomputes the
//! layer groups from atom positions.
//!
//! Grid coordinates run from −1 to 1 on each axis; the atom at grid cell
//! `g` starts centered at `g * spacing`. The center cell is empty.

mod atom;
mod layer;
mod turn;

use std::collections::VecDeque;

pub use atom::{AtomCube, Face, QUAD_INDICES};
use glam::{IVec3, Vec3};
pub use layer::{Axis, Layer, LayerGroups};
use rand::Rng;
pub use turn::{Turn, TurnDirection};
use turn::TurnAnimation;

use crate::camera::Camera;
use crate::options::{CameraOptions, ColorOptions, Options};

/// Smallest atom edge length reachable through [`RubikCube::scale`].
pub const MIN_ATOM_SIZE: f32 = 0.25;
/// Largest atom edge length reachable through [`RubikCube::scale`].
pub const MAX_ATOM_SIZE: f32 = 4.0;

/// What a call to [`RubikCube::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No turn was running or queued.
    Idle,
    /// A turn advanced by one frame and is still running.
    Turning,
    /// A turn finished on this frame and the groups were recomputed.
    Completed(Turn),
}

/// The whole cube.
pub struct RubikCube {
    atoms: Vec<AtomCube>,
    groups: LayerGroups,
    spacing: f32,
    direction: TurnDirection,
    turn: Option<TurnAnimation>,
    queue: VecDeque<Turn>,
    turn_frames: u32,
    camera: CameraOptions,
    eye_distance: f32,
}

fn grid_cells() -> impl Iterator<Item = IVec3> {
    (-1..=1)
        .flat_map(|x| {
            (-1..=1).flat_map(move |y| {
                (-1..=1).map(move |z| IVec3::new(x, y, z))
            })
        })
        .filter(|cell| *cell != IVec3::ZERO)
}

/// Face colors for the atom at `grid`: faces that do not point out of the
/// cube get the interior color.
fn atom_colors(grid: IVec3, colors: &ColorOptions) -> [Vec3; 6] {
    let palette = colors.palette();
    let interior = Vec3::from(colors.interior);
    Face::ALL.map(|face| {
        if face.normal().as_ivec3().dot(grid) == 1 {
            palette[face.index()]
        } else {
            interior
        }
    })
}

fn initial_camera(options: &CameraOptions) -> Camera {
    let eye = Vec3::new(0.0, 0.0, options.eye_distance);
    let mut camera = Camera::default();
    camera.translate(eye);
    camera.rotate(Vec3::X, options.pitch);
    camera.rotate(Vec3::Y, options.yaw);
    camera.set_view(eye, Vec3::ZERO, Vec3::Y);
    camera.set_perspective(
        options.fovy,
        options.initial_aspect,
        options.znear,
        options.zfar,
    );
    camera
}

impl RubikCube {
    /// Number of atoms in a 3×3×3 cube without its core.
    pub const ATOM_COUNT: usize = 26;

    /// Build a solved cube.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let spacing = options.geometry.spacing;
        let dimensions = Vec3::splat(options.geometry.atom_size);
        let camera = initial_camera(&options.camera);

        let atoms: Vec<AtomCube> = grid_cells()
            .map(|cell| {
                let mut atom =
                    AtomCube::new(cell.as_vec3() * spacing, dimensions);
                atom.set_camera(camera);
                atom.set_colors(atom_colors(cell, &options.colors));
                atom
            })
            .collect();
        let groups = LayerGroups::classify(grid_cells());

        log::debug!("built cube with {} atoms", atoms.len());

        Self {
            atoms,
            groups,
            spacing,
            direction: TurnDirection::default(),
            turn: None,
            queue: VecDeque::new(),
            turn_frames: options.animation.turn_frames.max(1),
            camera: options.camera.clone(),
            eye_distance: options.camera.eye_distance,
        }
    }

    /// All atoms; indices match the layer groups.
    #[must_use]
    pub fn atoms(&self) -> &[AtomCube] {
        &self.atoms
    }

    /// Current layer groups.
    #[must_use]
    pub fn groups(&self) -> &LayerGroups {
        &self.groups
    }

    /// Atom indices of one layer.
    #[must_use]
    pub fn group(&self, layer: Layer) -> &[usize] {
        self.groups.get(layer)
    }

    /// Distance between neighbouring atom centers.
    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Grid cell an atom currently occupies.
    #[must_use]
    pub fn grid_coord(&self, index: usize) -> Option<IVec3> {
        self.atoms
            .get(index)
            .map(|atom| grid_of(atom.position(), self.spacing))
    }

    /// Direction the next turn will use.
    #[must_use]
    pub fn direction(&self) -> TurnDirection {
        self.direction
    }

    /// Flip the turn direction. Ignored while a turn is running.
    pub fn toggle_direction(&mut self) -> bool {
        if self.is_turning() {
            return false;
        }
        self.direction = self.direction.toggled();
        log::info!("turn direction: {:?}", self.direction);
        true
    }

    /// Whether a turn is in progress.
    #[must_use]
    pub fn is_turning(&self) -> bool {
        self.turn.is_some()
    }

    /// The turn in progress, if any.
    #[must_use]
    pub fn current_turn(&self) -> Option<Turn> {
        self.turn.as_ref().map(TurnAnimation::turn)
    }

    /// Frames completed of the current turn (0 when idle).
    #[must_use]
    pub fn rotation_counter(&self) -> u32 {
        self.turn.as_ref().map_or(0, TurnAnimation::frame)
    }

    /// Turns waiting to run after the current one.
    #[must_use]
    pub fn pending_turns(&self) -> usize {
        self.queue.len()
    }

    /// Frames per quarter turn.
    #[must_use]
    pub fn turn_frames(&self) -> u32 {
        self.turn_frames
    }

    /// Change the frames per quarter turn. Applies from the next turn.
    pub fn set_turn_frames(&mut self, frames: u32) {
        self.turn_frames = frames.max(1);
    }

    /// Start turning `layer` in the current direction.
    ///
    /// Returns `false` (and does nothing) while another turn is running.
    pub fn request_turn(&mut self, layer: Layer) -> bool {
        if self.is_turning() {
            return false;
        }
        self.start_turn(Turn::new(layer, self.direction));
        true
    }

    /// Queue a turn to run once the cube is idle.
    pub fn queue_turn(&mut self, turn: Turn) {
        self.queue.push_back(turn);
    }

    /// Queue `moves` random turns.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R, moves: usize) {
        for _ in 0..moves {
            let layer = Layer::ALL[rng.random_range(0..Layer::ALL.len())];
            let direction = if rng.random_bool(0.5) {
                TurnDirection::Forward
            } else {
                TurnDirection::Reversed
            };
            self.queue_turn(Turn::new(layer, direction));
        }
        log::info!("scramble: queued {moves} turns");
    }

    fn start_turn(&mut self, turn: Turn) {
        let members = self.groups.get(turn.layer).to_vec();
        let start = members.iter().map(|&i| *self.atoms[i].corners()).collect();
        log::debug!(
            "turn {:?} {:?} over {} atoms",
            turn.layer,
            turn.direction,
            members.len()
        );
        self.turn = Some(TurnAnimation::new(
            turn,
            self.turn_frames,
            members,
            start,
        ));
    }

    /// Advance the animation by one frame.
    pub fn step(&mut self) -> StepOutcome {
        if self.turn.is_none() {
            let Some(next) = self.queue.pop_front() else {
                return StepOutcome::Idle;
            };
            self.start_turn(next);
        }

        let finished = match self.turn.as_mut() {
            Some(anim) => {
                let axis = anim.turn().layer.axis();
                let degrees = anim.step_degrees();
                let done = anim.advance();
                if !done {
                    for &index in anim.members() {
                        self.atoms[index].rotate_xyz(axis, degrees);
                    }
                }
                done
            }
            None => return StepOutcome::Idle,
        };
        if !finished {
            return StepOutcome::Turning;
        }

        let Some(anim) = self.turn.take() else {
            return StepOutcome::Idle;
        };
        for (index, corners) in anim.final_corners() {
            self.atoms[index].set_corners(corners);
        }
        self.regroup();
        log::debug!("turn {:?} complete", anim.turn());
        StepOutcome::Completed(anim.turn())
    }

    fn regroup(&mut self) {
        let spacing = self.spacing;
        self.groups = LayerGroups::classify(
            self.atoms.iter().map(|atom| grid_of(atom.position(), spacing)),
        );
    }

    /// Rotate every atom's camera (free view rotation).
    pub fn rotate_view(&mut self, axis: Vec3, degrees: f32) {
        for atom in &mut self.atoms {
            atom.rotate(axis, degrees);
        }
    }

    /// Update every atom's projection, e.g. after a window resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        let CameraOptions {
            fovy, znear, zfar, ..
        } = self.camera;
        for atom in &mut self.atoms {
            atom.set_perspective(fovy, aspect, znear, zfar);
        }
    }

    /// Distance of the eye from the cube center.
    #[must_use]
    pub fn eye_distance(&self) -> f32 {
        self.eye_distance
    }

    /// Move the eye along the view axis, clamped to the configured range.
    pub fn set_eye_distance(&mut self, distance: f32) {
        self.eye_distance = distance.clamp(
            self.camera.min_eye_distance,
            self.camera.max_eye_distance,
        );
        let eye = Vec3::new(0.0, 0.0, self.eye_distance);
        for atom in &mut self.atoms {
            atom.set_view(eye, Vec3::ZERO, Vec3::Y);
        }
    }

    /// Zoom by a scroll amount (positive = closer).
    pub fn zoom(&mut self, delta: f32) {
        let step = delta * self.camera.zoom_speed;
        self.set_eye_distance(self.eye_distance - step);
    }

    /// Scale the whole cube by `factor`, keeping every atom in its grid cell.
    ///
    /// Ignored while turning or when the atom size would leave
    /// [`MIN_ATOM_SIZE`]..=[`MAX_ATOM_SIZE`].
    pub fn scale(&mut self, factor: f32) -> bool {
        if self.is_turning() || factor <= 0.0 {
            return false;
        }
        let size = self.atoms.first().map_or(0.0, AtomCube::size) * factor;
        if !(MIN_ATOM_SIZE..=MAX_ATOM_SIZE).contains(&size) {
            return false;
        }
        for atom in &mut self.atoms {
            let position = atom.position() * factor;
            atom.scale(Vec3::splat(factor));
            atom.set_position(position);
        }
        self.spacing *= factor;
        log::debug!("scaled cube to atom size {size:.3}");
        true
    }
}

/// Nearest grid cell for a world position.
fn grid_of(position: Vec3, spacing: f32) -> IVec3 {
    (position / spacing)
        .round()
        .as_ivec3()
        .clamp(IVec3::NEG_ONE, IVec3::ONE)
}
