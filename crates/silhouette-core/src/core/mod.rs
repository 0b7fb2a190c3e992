//! # Core Module
//!
//! Stateless building blocks of a projected-area sweep.
//!
//! - **Data model** ([`models`]) - point sets, the orientation grid, and the area matrix
//! - **Geometry** ([`utils::geometry`]) - centroid, two-axis rotation, and projection
//! - **Rasterization** ([`raster`]) - disk-union coverage grids and area estimation
//! - **File I/O** ([`io`]) - PDB alpha-carbon loading and matrix serialization
//!
//! Everything here is a pure function of its inputs and safe to call from many
//! threads at once; orchestration lives in [`crate::engine`].

pub mod io;
pub mod models;
pub mod raster;
pub mod utils;
