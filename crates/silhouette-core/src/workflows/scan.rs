use crate::core::models::area_matrix::AreaMatrix;
use crate::core::models::point_set::PointSet;
use crate::core::utils::geometry::centroid;
use crate::engine::cancel::CancellationToken;
use crate::engine::config::ScanConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::scan::scan_with;
use nalgebra::Point3;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Rotation center used for every orientation (the centroid of the input).
    pub center: Point3<f64>,
    pub matrix: AreaMatrix,
}

#[instrument(skip_all, name = "scan_workflow")]
pub fn run(
    points: &PointSet,
    config: &ScanConfig,
    reporter: &ProgressReporter,
    cancel: &CancellationToken,
) -> Result<ScanResult, EngineError> {
    // === Phase 0: Validation and centroid ===
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    config.validate()?;
    let center = centroid(points)?;
    info!(
        num_points = points.len(),
        "Rotation center: ({:.4}, {:.4}, {:.4})",
        center.x,
        center.y,
        center.z
    );
    reporter.report(Progress::Message(format!(
        "Center coordinates: ({:.4}, {:.4}, {:.4})",
        center.x, center.y, center.z
    )));
    reporter.report(Progress::PhaseFinish);

    // === Phase 1: Orientation sweep ===
    reporter.report(Progress::PhaseStart {
        name: "Angle sweep",
    });
    let matrix = scan_with(points, &center, config, reporter, cancel)?;
    reporter.report(Progress::PhaseFinish);

    let (min_pair, min_area) = matrix.min_cell();
    let (max_pair, max_area) = matrix.max_cell();
    info!(
        "Projected area ranges from {:.2} (X:{:.1}° Y:{:.1}°) to {:.2} (X:{:.1}° Y:{:.1}°).",
        min_area,
        min_pair.angle_x_deg(),
        min_pair.angle_y_deg(),
        max_area,
        max_pair.angle_x_deg(),
        max_pair.angle_y_deg()
    );

    Ok(ScanResult { center, matrix })
}
