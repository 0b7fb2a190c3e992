use nalgebra::Point3;
use silhouette::core::io::matrix::AreaMatrixFile;
use silhouette::core::io::pdb::{PdbError, PdbFile};
use silhouette::core::io::traits::StructureFile;
use silhouette::core::models::angles::{ANGLES_PER_AXIS, AnglePair};
use silhouette::core::models::point_set::PointSet;
use silhouette::engine::cancel::CancellationToken;
use silhouette::engine::config::ScanConfig;
use silhouette::engine::error::EngineError;
use silhouette::engine::progress::{Progress, ProgressReporter};
use silhouette::workflows;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

fn square_points() -> PointSet {
    PointSet::new(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(10.0, 0.0, 0.0),
        Point3::new(0.0, 10.0, 0.0),
        Point3::new(10.0, 10.0, 0.0),
    ])
    .unwrap()
}

fn ca_line(serial: usize, x: f64, y: f64, z: f64) -> String {
    format!(
        "ATOM  {:>5}  CA  ALA A{:>4}    {:>8.3}{:>8.3}{:>8.3}  1.00  0.00           C",
        serial, serial, x, y, z
    )
}

#[test]
fn square_scan_produces_complete_matrix_with_expected_footprints() {
    let rows_done = AtomicUsize::new(0);
    let reporter = ProgressReporter::with_callback(Box::new(|event| {
        if let Progress::RowComplete { .. } = event {
            rows_done.fetch_add(1, Ordering::Relaxed);
        }
    }));

    let result = workflows::scan::run(
        &square_points(),
        &ScanConfig::default(),
        &reporter,
        &CancellationToken::new(),
    )
    .unwrap();
    drop(reporter);

    assert_eq!(rows_done.load(Ordering::Relaxed), ANGLES_PER_AXIS);
    assert!((result.center - Point3::new(5.0, 5.0, 0.0)).norm() < 1e-12);

    let matrix = &result.matrix;
    assert_eq!(matrix.dimensions(), (360, 360));
    assert_eq!(matrix.cells().count(), 360 * 360);
    assert!(matrix.cells().all(|(_, area)| area >= 0.0 && area.is_finite()));

    // Four disjoint corner disks of eight sampled vertices each at unit step.
    let flat = matrix.area(AnglePair::from_degrees(0.0, 0.0).unwrap());
    assert!((flat - 32.0).abs() < 1e-9);

    // Tilting the square edge-on collapses pairs of corners onto each other.
    let edge_on = matrix.area(AnglePair::from_degrees(90.0, 0.0).unwrap());
    assert!(edge_on > 0.0);
    assert!(edge_on < 0.75 * flat);
}

#[test]
fn pdb_to_matrix_file_round_trip() {
    let mut pdb = String::from("HEADER    SYNTHETIC\n");
    let coords = [
        (0.0, 0.0, 0.0),
        (3.8, 0.0, 0.0),
        (3.8, 3.8, 0.0),
        (0.0, 3.8, 3.8),
    ];
    for (i, (x, y, z)) in coords.iter().enumerate() {
        pdb.push_str(&ca_line(i + 1, *x, *y, *z));
        pdb.push('\n');
    }
    pdb.push_str("END\n");

    let (points, report) = PdbFile::read_from(&mut Cursor::new(pdb)).unwrap();
    assert_eq!(report.accepted, 4);
    assert_eq!(report.skipped_count(), 0);

    let config = ScanConfig::new(2.0, 1.7).unwrap();
    let result = workflows::scan::run(
        &points,
        &config,
        &ProgressReporter::new(),
        &CancellationToken::new(),
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("area_matrix.dat");
    AreaMatrixFile::write_to_path(&result.matrix, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# Y0.0 Y0.5"));
    assert_eq!(text.lines().count(), 361);

    let reread = AreaMatrixFile::read_from_path(&path).unwrap();
    for (pair, area) in result.matrix.cells() {
        assert!((reread.area(pair) - area).abs() <= 5e-5);
    }
}

#[test]
fn pdb_without_ca_atoms_never_reaches_the_sweep() {
    let pdb = "ATOM      1  N   MET A   1      27.340  24.430   2.614  1.00  9.67           N\n";
    let result = PdbFile::read_from(&mut Cursor::new(pdb));
    assert!(matches!(result, Err(PdbError::EmptyInput(_))));
}

#[test]
fn invalid_radius_is_rejected_before_any_phase_runs() {
    let started = AtomicUsize::new(0);
    let reporter = ProgressReporter::with_callback(Box::new(|event| {
        if let Progress::SweepStart { .. } = event {
            started.fetch_add(1, Ordering::Relaxed);
        }
    }));
    let config = ScanConfig {
        step: 1.0,
        radius: 0.0,
    };
    let result = workflows::scan::run(
        &square_points(),
        &config,
        &reporter,
        &CancellationToken::new(),
    );
    assert!(matches!(result, Err(EngineError::InvalidConfiguration(_))));
    drop(reporter);
    assert_eq!(started.load(Ordering::Relaxed), 0);
}
