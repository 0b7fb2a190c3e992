//! # Workflows Module
//!
//! Top-level entry points that tie [`crate::core`] and [`crate::engine`] together.
//!
//! - **Scan Workflow** ([`scan`]) - centroid computation followed by the full
//!   orientation sweep, with phase-level progress reporting.

pub mod scan;
