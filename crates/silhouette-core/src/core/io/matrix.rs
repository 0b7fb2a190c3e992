use crate::core::models::angles::axis_angles;
use crate::core::models::area_matrix::{AreaMatrix, MatrixShapeError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

const COMMENT_PREFIX: char = '#';
const DELIMITER: char = '\t';

#[derive(Debug, Error)]
pub enum MatrixFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: invalid value '{value}'")]
    Parse { line: usize, value: String },
    #[error("Malformed area matrix: {0}")]
    Shape(#[from] MatrixShapeError),
}

/// Tab-delimited text serialization of an [`AreaMatrix`].
///
/// The first line is a `#` comment listing the angle_y labels (`Y0.0 Y0.5 ...`),
/// followed by one line per angle_x index with values printed to four decimals.
pub struct AreaMatrixFile;

impl AreaMatrixFile {
    pub fn header() -> String {
        let labels: Vec<String> = axis_angles().map(|deg| format!("Y{:03.1}", deg)).collect();
        format!("{} {}", COMMENT_PREFIX, labels.join(" "))
    }

    pub fn write_to(matrix: &AreaMatrix, writer: &mut impl Write) -> Result<(), MatrixFileError> {
        writeln!(writer, "{}", Self::header())?;
        for row in matrix.rows() {
            let mut first = true;
            for value in row {
                if !first {
                    write!(writer, "{}", DELIMITER)?;
                }
                write!(writer, "{:.4}", value)?;
                first = false;
            }
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_to_path<P: AsRef<Path>>(
        matrix: &AreaMatrix,
        path: P,
    ) -> Result<(), MatrixFileError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(matrix, &mut writer)
    }

    pub fn read_from(reader: &mut impl BufRead) -> Result<AreaMatrix, MatrixFileError> {
        let mut rows = Vec::with_capacity(AreaMatrix::ROWS);
        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
                continue;
            }
            let row = trimmed
                .split_whitespace()
                .map(|value| {
                    value.parse::<f64>().map_err(|_| MatrixFileError::Parse {
                        line: line_num + 1,
                        value: value.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;
            rows.push(row);
        }
        Ok(AreaMatrix::from_rows(rows)?)
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<AreaMatrix, MatrixFileError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::angles::ANGLES_PER_AXIS;
    use std::io::Cursor;

    fn sample_matrix() -> AreaMatrix {
        let rows = (0..ANGLES_PER_AXIS)
            .map(|i| {
                (0..ANGLES_PER_AXIS)
                    .map(|j| i as f64 + j as f64 * 0.25)
                    .collect()
            })
            .collect();
        AreaMatrix::from_rows(rows).unwrap()
    }

    fn write_to_string(matrix: &AreaMatrix) -> String {
        let mut buffer = Vec::new();
        AreaMatrixFile::write_to(matrix, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn header_lists_all_angle_y_labels_with_one_decimal() {
        let header = AreaMatrixFile::header();
        assert!(header.starts_with("# Y0.0 Y0.5 Y1.0 "));
        assert!(header.ends_with(" Y179.0 Y179.5"));
        assert_eq!(header.trim_start_matches("# ").split(' ').count(), 360);
    }

    #[test]
    fn rows_are_tab_delimited_with_four_decimals() {
        let text = write_to_string(&sample_matrix());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 361);

        let first_row: Vec<&str> = lines[1].split('\t').collect();
        assert_eq!(first_row.len(), 360);
        assert_eq!(first_row[0], "0.0000");
        assert_eq!(first_row[1], "0.2500");
        assert_eq!(first_row[359], "89.7500");

        assert!(lines[3].starts_with("2.0000\t2.2500\t"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn written_matrix_can_be_read_back() {
        let matrix = sample_matrix();
        let text = write_to_string(&matrix);
        let parsed = AreaMatrixFile::read_from(&mut Cursor::new(text)).unwrap();
        assert_eq!(parsed, matrix);
    }

    #[test]
    fn read_rejects_non_numeric_values_with_line_number() {
        let text = "# Y0.0\n1.0\tabc\n";
        let err = AreaMatrixFile::read_from(&mut Cursor::new(text)).unwrap_err();
        assert!(matches!(err, MatrixFileError::Parse { line: 2, .. }));
    }

    #[test]
    fn read_rejects_truncated_matrix() {
        let text = "# header\n1.0\t2.0\n";
        let err = AreaMatrixFile::read_from(&mut Cursor::new(text)).unwrap_err();
        assert!(matches!(err, MatrixFileError::Shape(_)));
    }

    #[test]
    fn write_to_path_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("area_matrix.dat");
        let matrix = sample_matrix();
        AreaMatrixFile::write_to_path(&matrix, &path).unwrap();
        assert_eq!(AreaMatrixFile::read_from_path(&path).unwrap(), matrix);
    }
}
