use nalgebra::Point3;
use std::ops::Deref;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Point set is empty: at least one coordinate is required")]
pub struct EmptyInputError;

/// An ordered, non-empty collection of 3-D coordinates (one per tracked atom).
///
/// The order is never changed after construction so repeated runs over the same
/// input visit the atoms identically.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Point3<f64>>,
}

impl PointSet {
    pub fn new(points: Vec<Point3<f64>>) -> Result<Self, EmptyInputError> {
        if points.is_empty() {
            return Err(EmptyInputError);
        }
        Ok(Self { points })
    }

    pub fn as_slice(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn into_inner(self) -> Vec<Point3<f64>> {
        self.points
    }
}

impl Deref for PointSet {
    type Target = [Point3<f64>];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl TryFrom<Vec<Point3<f64>>> for PointSet {
    type Error = EmptyInputError;

    fn try_from(points: Vec<Point3<f64>>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}
