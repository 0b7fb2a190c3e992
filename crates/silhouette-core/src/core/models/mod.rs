//! Data structures shared by every stage of a projected-area sweep.
//!
//! - [`point_set`] - the validated, non-empty coordinate set loaded from a structure
//! - [`angles`] - the discrete two-axis orientation grid and its index mapping
//! - [`area_matrix`] - the complete orientation-by-orientation result

pub mod angles;
pub mod area_matrix;
pub mod point_set;
