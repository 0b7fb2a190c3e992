//! # Silhouette Core Library
//!
//! Computes how the projected (silhouette) area of a protein's alpha-carbon trace
//! changes with orientation. The trace is rotated about its centroid over a
//! 360 x 360 grid of angle pairs, each rotated copy is projected onto the XY plane,
//! and the union of per-atom disks is rasterized into an area estimate.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data models (`PointSet`, `AreaMatrix`),
//!   geometry (centroid, rotation), the disk-union rasterizer, and file I/O.
//!
//! - **[`engine`]: The Sweep.** Validated configuration, the parallel fork-join over
//!   the angle grid, progress reporting, and cooperative cancellation.
//!
//! - **[`workflows`]: The Public API.** `workflows::scan::run` executes a complete
//!   analysis for a loaded point set.

pub mod core;
pub mod engine;
pub mod workflows;
