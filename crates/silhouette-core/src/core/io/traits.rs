use crate::core::models::point_set::PointSet;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading coordinate sets from structure file formats.
///
/// Implementors handle format-specific parsing and return, alongside the point set,
/// a format-specific report describing how the input records were handled.
pub trait StructureFile {
    /// Per-read diagnostics returned with the point set.
    type Report;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a point set from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the input yields no usable coordinates.
    fn read_from(reader: &mut impl BufRead) -> Result<(PointSet, Self::Report), Self::Error>;

    /// Reads a point set from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or [`read_from`](Self::read_from) fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<(PointSet, Self::Report), Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
