use glam::Vec3;

use super::layer::{Axis, Layer};

/// Which way face turns go. Toggled by the user between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TurnDirection {
    /// Positive rotation about the layer axis.
    #[default]
    Forward,
    /// Negative rotation about the layer axis.
    Reversed,
}

impl TurnDirection {
    /// `1.0` for forward, `-1.0` for reversed.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Reversed => -1.0,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Forward => Self::Reversed,
            Self::Reversed => Self::Forward,
        }
    }
}

/// A quarter turn of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Turn {
    /// Layer being turned.
    pub layer: Layer,
    /// Rotation sense.
    pub direction: TurnDirection,
}

impl Turn {
    /// A turn of `layer` in `direction`.
    #[must_use]
    pub fn new(layer: Layer, direction: TurnDirection) -> Self {
        Self { layer, direction }
    }

    /// The turn that undoes this one.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self::new(self.layer, self.direction.toggled())
    }

    /// Signed rotation about [`Layer::axis`], in degrees.
    #[must_use]
    pub fn degrees(self) -> f32 {
        90.0 * self.direction.sign()
    }

    /// Apply the full quarter turn to `v` without floating-point error.
    #[must_use]
    pub fn apply_exact(self, v: Vec3) -> Vec3 {
        let positive = (self.layer.axis_sign() > 0)
            == (self.direction == TurnDirection::Forward);
        match (self.layer.grid_axis(), positive) {
            (Axis::X, true) => Vec3::new(v.x, -v.z, v.y),
            (Axis::X, false) => Vec3::new(v.x, v.z, -v.y),
            (Axis::Y, true) => Vec3::new(v.z, v.y, -v.x),
            (Axis::Y, false) => Vec3::new(-v.z, v.y, v.x),
            (Axis::Z, true) => Vec3::new(-v.y, v.x, v.z),
            (Axis::Z, false) => Vec3::new(v.y, -v.x, v.z),
        }
    }
}

/// Progress of a running turn.
///
/// `frame` is the rotation counter: it counts up to `total_frames`, at which
/// point the turn is complete.
#[derive(Debug, Clone)]
pub(crate) struct TurnAnimation {
    turn: Turn,
    frame: u32,
    total_frames: u32,
    members: Vec<usize>,
    start: Vec<[Vec3; 8]>,
}

impl TurnAnimation {
    /// Start a turn over `members`, whose corners at turn start are `start`.
    pub(crate) fn new(
        turn: Turn,
        total_frames: u32,
        members: Vec<usize>,
        start: Vec<[Vec3; 8]>,
    ) -> Self {
        Self {
            turn,
            frame: 0,
            total_frames: total_frames.max(1),
            members,
            start,
        }
    }

    pub(crate) fn turn(&self) -> Turn {
        self.turn
    }

    pub(crate) fn frame(&self) -> u32 {
        self.frame
    }

    pub(crate) fn members(&self) -> &[usize] {
        &self.members
    }

    /// Rotation applied on every frame, in degrees.
    pub(crate) fn step_degrees(&self) -> f32 {
        self.turn.degrees() / self.total_frames as f32
    }

    /// Count one frame. Returns `true` once the turn is complete.
    pub(crate) fn advance(&mut self) -> bool {
        self.frame = (self.frame + 1).min(self.total_frames);
        self.frame == self.total_frames
    }

    /// Exact end-of-turn corners for every member atom.
    pub(crate) fn final_corners(
        &self,
    ) -> impl Iterator<Item = (usize, [Vec3; 8])> + '_ {
        self.members.iter().zip(&self.start).map(|(&index, corners)| {
            (index, corners.map(|c| self.turn.apply_exact(c)))
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;

    #[test]
    fn exact_turn_matches_rotation() {
        let v = Vec3::new(0.55, -1.55, 1.05);
        for layer in Layer::ALL {
            for direction in [TurnDirection::Forward, TurnDirection::Reversed] {
                let turn = Turn::new(layer, direction);
                let rotation = Quat::from_axis_angle(
                    layer.axis(),
                    turn.degrees().to_radians(),
                );
                let expected = rotation * v;
                let exact = turn.apply_exact(v);
                assert!(
                    (expected - exact).length() < 1e-5,
                    "{turn:?}: {expected} vs {exact}"
                );
            }
        }
    }

    #[test]
    fn reversed_undoes() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        for layer in Layer::ALL {
            let turn = Turn::new(layer, TurnDirection::Forward);
            assert_eq!(turn.reversed().apply_exact(turn.apply_exact(v)), v);
        }
    }

    #[test]
    fn animation_counts_to_total() {
        let turn = Turn::new(Layer::Top, TurnDirection::Reversed);
        let mut anim = TurnAnimation::new(turn, 3, vec![0], vec![[Vec3::X; 8]]);
        assert_eq!(anim.step_degrees(), -30.0);
        assert!(!anim.advance());
        assert!(!anim.advance());
        assert!(anim.advance());
        assert_eq!(anim.frame(), anim.total_frames);
        let (index, corners) = anim.final_corners().next().unwrap();
        assert_eq!(index, 0);
        assert_eq!(corners[0], turn.apply_exact(Vec3::X));
    }

    #[test]
    fn zero_frames_clamps_to_one() {
        let turn = Turn::new(Layer::Front, TurnDirection::Forward);
        let mut anim = TurnAnimation::new(turn, 0, Vec::new(), Vec::new());
        assert_eq!(anim.step_degrees(), 90.0);
        assert!(anim.advance());
    }

    #[test]
    fn direction_toggle() {
        assert_eq!(TurnDirection::default().toggled(), TurnDirection::Reversed);
        assert_eq!(TurnDirection::Reversed.sign(), -1.0);
    }
}
