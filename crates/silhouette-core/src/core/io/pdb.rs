use crate::core::io::traits::StructureFile;
use crate::core::models::point_set::{EmptyInputError, PointSet};
use nalgebra::Point3;
use std::fmt;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, warn};

const CA_ATOM_NAME: &str = "CA";

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("No CA atoms found: {0}")]
    EmptyInput(#[from] EmptyInputError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x (columns 31-38)"),
            Axis::Y => write!(f, "y (columns 39-46)"),
            Axis::Z => write!(f, "z (columns 47-54)"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("invalid {axis} coordinate '{value}'")]
    InvalidCoordinate { axis: Axis, value: String },
    #[error("non-finite {axis} coordinate '{value}'")]
    NonFiniteCoordinate { axis: Axis, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line: usize,
    pub reason: SkipReason,
}

/// Result of interpreting one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// Not an alpha-carbon ATOM record; ignored.
    NotApplicable,
    Accepted(Point3<f64>),
    Skipped(SkipReason),
}

/// Aggregate of the per-record outcomes of one read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub accepted: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Slices `line[start..end]` like a fixed-column reader: out-of-range ends are
/// clamped and the result is trimmed.
fn column(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        return "";
    }
    line.get(start..end).unwrap_or("").trim()
}

fn parse_coordinate(line: &str, start: usize, end: usize, axis: Axis) -> Result<f64, SkipReason> {
    let raw = column(line, start, end);
    let value = raw.parse::<f64>().map_err(|_| SkipReason::InvalidCoordinate {
        axis,
        value: raw.to_string(),
    })?;
    // `nan` and `inf` parse as floats but would poison the centroid.
    if !value.is_finite() {
        return Err(SkipReason::NonFiniteCoordinate {
            axis,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

fn parse_ca_coordinates(line: &str) -> Result<Point3<f64>, SkipReason> {
    Ok(Point3::new(
        parse_coordinate(line, 30, 38, Axis::X)?,
        parse_coordinate(line, 38, 46, Axis::Y)?,
        parse_coordinate(line, 46, 54, Axis::Z)?,
    ))
}

/// Interprets a single PDB line, extracting the coordinates of `ATOM` records
/// whose atom name is `CA`.
pub fn parse_record(line: &str) -> RecordOutcome {
    if !line.starts_with("ATOM") || column(line, 12, 16) != CA_ATOM_NAME {
        return RecordOutcome::NotApplicable;
    }
    match parse_ca_coordinates(line) {
        Ok(point) => RecordOutcome::Accepted(point),
        Err(reason) => RecordOutcome::Skipped(reason),
    }
}

/// Alpha-carbon trace reader for PDB files.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Report = LoadReport;
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<(PointSet, Self::Report), Self::Error> {
        let mut points = Vec::new();
        let mut report = LoadReport::default();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            match parse_record(&line) {
                RecordOutcome::NotApplicable => {}
                RecordOutcome::Accepted(point) => {
                    points.push(point);
                    report.accepted += 1;
                }
                RecordOutcome::Skipped(reason) => {
                    warn!(line = line_num, "Skipping CA record: {}", reason);
                    report.skipped.push(SkippedRecord {
                        line: line_num,
                        reason,
                    });
                }
            }
        }

        debug!(
            accepted = report.accepted,
            skipped = report.skipped_count(),
            "Finished reading CA records."
        );

        let point_set = PointSet::new(points)?;
        Ok((point_set, report))
    }
}
