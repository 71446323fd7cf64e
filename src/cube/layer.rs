use glam::{IVec3, Vec3};

/// Principal axis of the cube grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// World X.
    X,
    /// World Y.
    Y,
    /// World Z.
    Z,
}

impl Axis {
    fn component(self, v: IVec3) -> i32 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
            Self::Z => v.z,
        }
    }
}

/// A rotatable layer of the cube: six outer faces and three center slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Grid z = −1.
    Front,
    /// Grid z = +1.
    Back,
    /// Grid x = +1.
    Right,
    /// Grid x = −1.
    Left,
    /// Grid y = +1.
    Top,
    /// Grid y = −1.
    Bottom,
    /// Grid x = 0.
    CenterF,
    /// Grid y = 0.
    CenterR,
    /// Grid z = 0.
    CenterT,
}

impl Layer {
    /// All layers in group-slot order.
    pub const ALL: [Self; 9] = [
        Self::Front,
        Self::Back,
        Self::Right,
        Self::Left,
        Self::Top,
        Self::Bottom,
        Self::CenterF,
        Self::CenterR,
        Self::CenterT,
    ];

    /// Slot of this layer inside [`LayerGroups`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Front => 0,
            Self::Back => 1,
            Self::Right => 2,
            Self::Left => 3,
            Self::Top => 4,
            Self::Bottom => 5,
            Self::CenterF => 6,
            Self::CenterR => 7,
            Self::CenterT => 8,
        }
    }

    /// Grid axis the layer is perpendicular to.
    #[must_use]
    pub fn grid_axis(self) -> Axis {
        match self {
            Self::Right | Self::Left | Self::CenterF => Axis::X,
            Self::Top | Self::Bottom | Self::CenterR => Axis::Y,
            Self::Front | Self::Back | Self::CenterT => Axis::Z,
        }
    }

    /// Grid coordinate along [`grid_axis`](Self::grid_axis) selecting the
    /// layer's atoms.
    #[must_use]
    pub fn slice(self) -> i32 {
        match self {
            Self::Back | Self::Right | Self::Top => 1,
            Self::Front | Self::Left | Self::Bottom => -1,
            Self::CenterF | Self::CenterR | Self::CenterT => 0,
        }
    }

    /// Rotation axis of a forward turn.
    #[must_use]
    pub fn axis(self) -> Vec3 {
        match self {
            Self::Front | Self::CenterT => Vec3::Z,
            Self::Back => Vec3::NEG_Z,
            Self::Right | Self::CenterF => Vec3::X,
            Self::Left => Vec3::NEG_X,
            Self::Top | Self::CenterR => Vec3::Y,
            Self::Bottom => Vec3::NEG_Y,
        }
    }

    /// Sign of [`axis`](Self::axis) along its grid axis.
    #[must_use]
    pub fn axis_sign(self) -> i32 {
        match self {
            Self::Back | Self::Left | Self::Bottom => -1,
            _ => 1,
        }
    }

    /// Whether an atom at grid coordinate `grid` belongs to this layer.
    #[must_use]
    pub fn contains(self, grid: IVec3) -> bool {
        self.grid_axis().component(grid) == self.slice()
    }
}

/// Atom indices per layer.
///
/// Every atom sits in exactly three groups, one per grid axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerGroups {
    groups: [Vec<usize>; 9],
}

impl LayerGroups {
    /// Build the groups from per-atom grid coordinates (index = atom index).
    #[must_use]
    pub fn classify(grid: impl IntoIterator<Item = IVec3>) -> Self {
        let mut groups = Self::default();
        for (index, coord) in grid.into_iter().enumerate() {
            for layer in Layer::ALL {
                if layer.contains(coord) {
                    groups.groups[layer.index()].push(index);
                }
            }
        }
        groups
    }

    /// Atom indices of one layer, ascending.
    #[must_use]
    pub fn get(&self, layer: Layer) -> &[usize] {
        &self.groups[layer.index()]
    }

    /// Iterate `(layer, indices)` pairs in [`Layer::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Layer, &[usize])> + '_ {
        Layer::ALL.into_iter().map(|layer| (layer, self.get(layer)))
    }

    /// Check that, along each grid axis, the three layers cover atoms
    /// `0..atom_count` exactly once.
    #[must_use]
    pub fn is_partition(&self, atom_count: usize) -> bool {
        [Axis::X, Axis::Y, Axis::Z].into_iter().all(|axis| {
            let mut seen = vec![0_u8; atom_count];
            let layers =
                Layer::ALL.into_iter().filter(|l| l.grid_axis() == axis);
            for layer in layers {
                for &index in self.get(layer) {
                    match seen.get_mut(index) {
                        Some(count) => *count += 1,
                        None => return false,
                    }
                }
            }
            seen.iter().all(|&count| count == 1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_grid() -> Vec<IVec3> {
        let mut grid = Vec::new();
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    if (x, y, z) != (0, 0, 0) {
                        grid.push(IVec3::new(x, y, z));
                    }
                }
            }
        }
        grid
    }

    #[test]
    fn group_sizes() {
        let groups = LayerGroups::classify(full_grid());
        for (layer, members) in groups.iter() {
            let expected = if layer.slice() == 0 { 8 } else { 9 };
            assert_eq!(members.len(), expected, "{layer:?}");
        }
        assert!(groups.is_partition(26));
    }

    #[test]
    fn layer_membership_by_coordinate() {
        assert!(Layer::Front.contains(IVec3::new(1, 1, -1)));
        assert!(!Layer::Front.contains(IVec3::new(1, 1, 1)));
        assert!(Layer::Back.contains(IVec3::new(0, -1, 1)));
        assert!(Layer::CenterF.contains(IVec3::new(0, 1, 1)));
        assert!(Layer::CenterR.contains(IVec3::new(1, 0, -1)));
        assert!(Layer::CenterT.contains(IVec3::new(-1, 1, 0)));
    }

    #[test]
    fn axis_sign_matches_axis() {
        for layer in Layer::ALL {
            let axis = layer.axis();
            let component = match layer.grid_axis() {
                Axis::X => axis.x,
                Axis::Y => axis.y,
                Axis::Z => axis.z,
            };
            assert_eq!(component as i32, layer.axis_sign(), "{layer:?}");
        }
    }

    #[test]
    fn overlap_breaks_partition() {
        let mut groups = LayerGroups::classify(full_grid());
        assert!(groups.is_partition(26));
        groups.groups[Layer::Front.index()].push(4);
        assert!(!groups.is_partition(26));

        let mut groups = LayerGroups::classify(full_grid());
        groups.groups[Layer::Top.index()].push(26);
        assert!(!groups.is_partition(26));
    }
}
