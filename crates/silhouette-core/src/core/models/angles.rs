//! Discrete two-axis orientation grid.
//!
//! Both rotation axes are sampled over the half-open range `[0°, 180°)` at a fixed
//! resolution. Angles are always derived from integer indices (`index * 0.5`) and
//! never accumulated, so every cell of the sweep maps to exactly one matrix index.

/// Angular resolution of the sweep, in degrees.
pub const ANGLE_STEP_DEG: f64 = 0.5;

/// Number of sampled angles on each rotation axis.
pub const ANGLES_PER_AXIS: usize = 360;

/// Total number of orientations visited by a full sweep.
pub const ANGLE_PAIR_COUNT: usize = ANGLES_PER_AXIS * ANGLES_PER_AXIS;

#[inline]
pub fn index_to_degrees(index: usize) -> f64 {
    index as f64 * ANGLE_STEP_DEG
}

/// Maps an angle back to its grid index using `round(angle / step)`.
///
/// Returns `None` for non-finite angles and for angles outside `[0°, 180°)`.
pub fn degrees_to_index(angle_deg: f64) -> Option<usize> {
    if !angle_deg.is_finite() || angle_deg < 0.0 {
        return None;
    }
    let index = (angle_deg / ANGLE_STEP_DEG).round() as usize;
    (index < ANGLES_PER_AXIS).then_some(index)
}

/// Iterates the sampled angles of one axis in ascending order.
pub fn axis_angles() -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator {
    (0..ANGLES_PER_AXIS).map(index_to_degrees)
}

/// An orientation of the sweep, stored as the pair of grid indices it occupies
/// in the area matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnglePair {
    pub x_index: usize,
    pub y_index: usize,
}

impl AnglePair {
    pub fn new(x_index: usize, y_index: usize) -> Option<Self> {
        (x_index < ANGLES_PER_AXIS && y_index < ANGLES_PER_AXIS)
            .then_some(Self { x_index, y_index })
    }

    pub fn from_degrees(angle_x_deg: f64, angle_y_deg: f64) -> Option<Self> {
        Some(Self {
            x_index: degrees_to_index(angle_x_deg)?,
            y_index: degrees_to_index(angle_y_deg)?,
        })
    }

    pub fn from_flat_index(flat: usize) -> Option<Self> {
        (flat < ANGLE_PAIR_COUNT).then(|| Self {
            x_index: flat / ANGLES_PER_AXIS,
            y_index: flat % ANGLES_PER_AXIS,
        })
    }

    #[inline]
    pub fn flat_index(&self) -> usize {
        self.x_index * ANGLES_PER_AXIS + self.y_index
    }

    #[inline]
    pub fn angle_x_deg(&self) -> f64 {
        index_to_degrees(self.x_index)
    }

    #[inline]
    pub fn angle_y_deg(&self) -> f64 {
        index_to_degrees(self.y_index)
    }
}
