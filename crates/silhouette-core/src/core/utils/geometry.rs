use crate::core::models::point_set::EmptyInputError;
use nalgebra::{Point2, Point3, Rotation3, Unit, Vector3};

pub fn rotation_from_axis_angle(axis: &Vector3<f64>, angle_degrees: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle_degrees.to_radians())
}

/// Arithmetic mean of all coordinates.
pub fn centroid(points: &[Point3<f64>]) -> Result<Point3<f64>, EmptyInputError> {
    if points.is_empty() {
        return Err(EmptyInputError);
    }
    let sum = points.iter().fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Ok(Point3::from(sum / points.len() as f64))
}

/// Composite two-axis rotation: about X by `angle_x_deg` first, then about Y by
/// `angle_y_deg` (i.e. `R_y * R_x`).
pub fn rotation_matrix(angle_x_deg: f64, angle_y_deg: f64) -> Rotation3<f64> {
    let rot_x = rotation_from_axis_angle(&Vector3::x(), angle_x_deg);
    let rot_y = rotation_from_axis_angle(&Vector3::y(), angle_y_deg);
    rot_y * rot_x
}

/// Rotates every point about `center` by the composite [`rotation_matrix`].
pub fn rotate(
    points: &[Point3<f64>],
    angle_x_deg: f64,
    angle_y_deg: f64,
    center: &Point3<f64>,
) -> Vec<Point3<f64>> {
    let rotation = rotation_matrix(angle_x_deg, angle_y_deg);
    points
        .iter()
        .map(|p| center + rotation * (p - center))
        .collect()
}

/// Drops the depth (z) coordinate.
pub fn project_xy(points: &[Point3<f64>]) -> Vec<Point2<f64>> {
    points.iter().map(|p| Point2::new(p.x, p.y)).collect()
}
