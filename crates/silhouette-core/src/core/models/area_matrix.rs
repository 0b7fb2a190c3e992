use super::angles::{ANGLE_PAIR_COUNT, ANGLES_PER_AXIS, AnglePair};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixShapeError {
    #[error("Expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("Row {row} has {found} values, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },
}

/// Projected area for every orientation of the sweep.
///
/// Rows are indexed by the angle_x grid index and columns by the angle_y grid index.
/// A matrix can only be constructed from a complete set of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaMatrix {
    values: Vec<f64>,
}

impl AreaMatrix {
    pub const ROWS: usize = ANGLES_PER_AXIS;
    pub const COLS: usize = ANGLES_PER_AXIS;

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixShapeError> {
        if rows.len() != Self::ROWS {
            return Err(MatrixShapeError::RowCount {
                expected: Self::ROWS,
                found: rows.len(),
            });
        }
        let mut values = Vec::with_capacity(ANGLE_PAIR_COUNT);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != Self::COLS {
                return Err(MatrixShapeError::RowLength {
                    row: row_idx,
                    expected: Self::COLS,
                    found: row.len(),
                });
            }
            values.extend(row);
        }
        Ok(Self { values })
    }

    pub fn from_row_major(values: Vec<f64>) -> Result<Self, MatrixShapeError> {
        if values.len() != ANGLE_PAIR_COUNT {
            return Err(MatrixShapeError::CellCount {
                expected: ANGLE_PAIR_COUNT,
                found: values.len(),
            });
        }
        Ok(Self { values })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (Self::ROWS, Self::COLS)
    }

    #[inline]
    pub fn area(&self, pair: AnglePair) -> f64 {
        self.values[pair.flat_index()]
    }

    pub fn get(&self, x_index: usize, y_index: usize) -> Option<f64> {
        AnglePair::new(x_index, y_index).map(|pair| self.area(pair))
    }

    pub fn row(&self, x_index: usize) -> Option<&[f64]> {
        (x_index < Self::ROWS)
            .then(|| &self.values[x_index * Self::COLS..(x_index + 1) * Self::COLS])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(Self::COLS)
    }

    pub fn cells(&self) -> impl Iterator<Item = (AnglePair, f64)> + '_ {
        self.values.iter().enumerate().filter_map(|(flat, &area)| {
            AnglePair::from_flat_index(flat).map(|pair| (pair, area))
        })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Orientation with the smallest projected area; ties resolve to the lowest index.
    pub fn min_cell(&self) -> (AnglePair, f64) {
        self.extreme_cell(|candidate, best| candidate < best)
    }

    /// Orientation with the largest projected area; ties resolve to the lowest index.
    pub fn max_cell(&self) -> (AnglePair, f64) {
        self.extreme_cell(|candidate, best| candidate > best)
    }

    fn extreme_cell(&self, better: impl Fn(f64, f64) -> bool) -> (AnglePair, f64) {
        let mut best = (AnglePair { x_index: 0, y_index: 0 }, self.values[0]);
        for (pair, area) in self.cells().skip(1) {
            if better(area, best.1) {
                best = (pair, area);
            }
        }
        best
    }
}
