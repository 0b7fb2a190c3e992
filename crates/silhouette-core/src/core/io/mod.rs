//! Reading structure files into point sets and persisting area matrices.
//!
//! The [`traits::StructureFile`] trait gives loaders a common API; [`pdb`] implements
//! it for alpha-carbon traces. [`matrix`] writes (and reads back) the tab-delimited
//! area matrix produced by a sweep.

pub mod matrix;
pub mod pdb;
pub mod traits;
