//! Grid rasterization of a union of equal-radius disks.
//!
//! Coverage is sampled at grid vertices: a vertex counts as covered when its own
//! coordinate lies within `radius` of some disk center, and each covered vertex
//! contributes `step²` to the area. Disks are merged by boolean union before
//! counting, so overlapping disks are never double-counted.

use nalgebra::Point2;

/// Van der Waals-like radius used for alpha-carbon disks when none is configured.
pub const DEFAULT_ATOM_RADIUS: f64 = 1.7;

/// Default grid step, in the same length unit as the coordinates.
pub const DEFAULT_GRID_STEP: f64 = 1.0;

/// Coordinates `start, start + step, ...` covering `[start, stop)`, with the same
/// length rule as a half-open float range: `ceil((stop - start) / step)`.
fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let len = ((stop - start) / step).ceil().max(0.0) as usize;
    (0..len).map(|k| start + k as f64 * step).collect()
}

/// Index range of the (ascending) `grid` values lying in `[lo, hi]`.
fn window(grid: &[f64], lo: f64, hi: f64) -> std::ops::Range<usize> {
    let start = grid.partition_point(|&g| g < lo);
    let end = grid.partition_point(|&g| g <= hi);
    start..end.max(start)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl BoundingBox {
    /// Axis-aligned box around `points`, grown by `padding` on every side.
    pub fn padded(points: &[Point2<f64>], padding: f64) -> Option<Self> {
        let first = points.first()?;
        let (mut min, mut max) = (*first, *first);
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self {
            min: Point2::new(min.x - padding, min.y - padding),
            max: Point2::new(max.x + padding, max.y + padding),
        })
    }
}

/// Boolean coverage field over a padded bounding box.
#[derive(Debug, Clone)]
pub struct CoverageGrid {
    bounds: BoundingBox,
    step: f64,
    x_grid: Vec<f64>,
    y_grid: Vec<f64>,
    covered: Vec<bool>,
}

impl CoverageGrid {
    /// Rasterizes the union of disks of `radius` centered on `points`.
    ///
    /// Returns `None` when `points` is empty; no grid is constructed in that case.
    /// `step` must be finite and positive (see [`crate::engine::config::ScanConfig`]).
    pub fn build(points: &[Point2<f64>], step: f64, radius: f64) -> Option<Self> {
        debug_assert!(
            step.is_finite() && step > 0.0,
            "grid step must be finite and positive, got {step}"
        );
        let bounds = BoundingBox::padded(points, radius)?;

        let x_grid = arange(bounds.min.x, bounds.max.x + step, step);
        let y_grid = arange(bounds.min.y, bounds.max.y + step, step);
        let mut grid = Self {
            bounds,
            step,
            covered: vec![false; x_grid.len() * y_grid.len()],
            x_grid,
            y_grid,
        };

        let radius_sq = radius * radius;
        for p in points {
            grid.mark_disk(p, radius, radius_sq);
        }
        Some(grid)
    }

    fn mark_disk(&mut self, center: &Point2<f64>, radius: f64, radius_sq: f64) {
        let cols = self.y_grid.len();
        let xs = window(&self.x_grid, center.x - radius, center.x + radius);
        let ys = window(&self.y_grid, center.y - radius, center.y + radius);

        for i in xs {
            let dx = self.x_grid[i] - center.x;
            let row = &mut self.covered[i * cols..(i + 1) * cols];
            for j in ys.clone() {
                let dy = self.y_grid[j] - center.y;
                if dx * dx + dy * dy <= radius_sq {
                    row[j] = true;
                }
            }
        }
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn x_grid(&self) -> &[f64] {
        &self.x_grid
    }

    pub fn y_grid(&self) -> &[f64] {
        &self.y_grid
    }

    /// `(len(x_grid), len(y_grid))`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.x_grid.len(), self.y_grid.len())
    }

    pub fn is_covered(&self, i: usize, j: usize) -> bool {
        i < self.x_grid.len() && j < self.y_grid.len() && self.covered[i * self.y_grid.len() + j]
    }

    pub fn covered_cells(&self) -> usize {
        self.covered.iter().filter(|&&c| c).count()
    }

    pub fn area(&self) -> f64 {
        self.covered_cells() as f64 * (self.step * self.step)
    }
}

/// Estimated area of the union of disks of `radius` centered on `points_2d`.
///
/// Returns exactly `0.0` for empty input. `step` must be finite and positive;
/// a zero step would ask for an unbounded grid.
pub fn projected_area(points_2d: &[Point2<f64>], step: f64, radius: f64) -> f64 {
    CoverageGrid::build(points_2d, step, radius).map_or(0.0, |grid| grid.area())
}
