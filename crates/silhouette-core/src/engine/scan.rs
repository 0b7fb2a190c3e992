use super::cancel::CancellationToken;
use super::config::ScanConfig;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::models::angles::{ANGLES_PER_AXIS, AnglePair, index_to_degrees};
use crate::core::models::area_matrix::AreaMatrix;
use crate::core::models::point_set::EmptyInputError;
use crate::core::raster::projected_area;
use crate::core::utils::geometry::{project_xy, rotate};
use nalgebra::Point3;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{info, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Projected area of `points` after rotating them about `center` to `pair`.
pub fn area_at(
    points: &[Point3<f64>],
    center: &Point3<f64>,
    config: &ScanConfig,
    pair: AnglePair,
) -> f64 {
    let rotated = rotate(points, pair.angle_x_deg(), pair.angle_y_deg(), center);
    projected_area(&project_xy(&rotated), config.step, config.radius)
}

fn scan_row(
    points: &[Point3<f64>],
    center: &Point3<f64>,
    config: &ScanConfig,
    x_index: usize,
) -> Vec<f64> {
    (0..ANGLES_PER_AXIS)
        .map(|y_index| area_at(points, center, config, AnglePair { x_index, y_index }))
        .collect()
}

/// Full sweep with default reporting and no cancellation.
pub fn scan(
    points: &[Point3<f64>],
    center: &Point3<f64>,
    step: f64,
    radius: f64,
) -> Result<AreaMatrix, EngineError> {
    if points.is_empty() {
        return Err(EmptyInputError.into());
    }
    let config = ScanConfig::new(step, radius)?;
    scan_with(
        points,
        center,
        &config,
        &ProgressReporter::new(),
        &CancellationToken::new(),
    )
}

/// Computes the projected area for every angle pair of the grid.
///
/// Rows (one per angle_x index) are independent and computed in parallel when
/// the `parallel` feature is enabled; each row is built locally and the rows are
/// joined in index order once all of them have finished.
///
/// # Errors
///
/// - [`EngineError::EmptyInput`] if `points` is empty (nothing is rotated or rasterized).
/// - [`EngineError::InvalidConfiguration`] if `config` fails validation.
/// - [`EngineError::Cancelled`] if `cancel` fires before every row is complete.
#[instrument(skip_all, name = "angle_scan")]
pub fn scan_with(
    points: &[Point3<f64>],
    center: &Point3<f64>,
    config: &ScanConfig,
    reporter: &ProgressReporter,
    cancel: &CancellationToken,
) -> Result<AreaMatrix, EngineError> {
    if points.is_empty() {
        return Err(EmptyInputError.into());
    }
    config.validate()?;

    info!(
        num_points = points.len(),
        step = config.step,
        radius = config.radius,
        "Starting angle sweep over {}x{} orientations.",
        ANGLES_PER_AXIS,
        ANGLES_PER_AXIS
    );
    reporter.report(Progress::SweepStart {
        total_rows: ANGLES_PER_AXIS as u64,
    });

    let completed = AtomicUsize::new(0);
    let compute_row = |x_index: usize| -> Option<Vec<f64>> {
        if cancel.is_cancelled() {
            return None;
        }
        let row = scan_row(points, center, config, x_index);
        completed.fetch_add(1, Ordering::Relaxed);
        trace!(x_index, "Row complete.");
        reporter.report(Progress::RowComplete { x_index });
        Some(row)
    };

    #[cfg(not(feature = "parallel"))]
    let rows: Option<Vec<Vec<f64>>> = (0..ANGLES_PER_AXIS).map(compute_row).collect();

    #[cfg(feature = "parallel")]
    let rows: Option<Vec<Vec<f64>>> = (0..ANGLES_PER_AXIS)
        .into_par_iter()
        .map(compute_row)
        .collect();

    let Some(rows) = rows else {
        let completed = completed.load(Ordering::Relaxed);
        info!(completed, "Angle sweep cancelled.");
        return Err(EngineError::Cancelled {
            completed,
            total: ANGLES_PER_AXIS,
        });
    };

    reporter.report(Progress::SweepFinish);
    let matrix = AreaMatrix::from_rows(rows).map_err(|e| EngineError::Internal(e.to_string()))?;
    info!("Angle sweep complete.");
    Ok(matrix)
}
