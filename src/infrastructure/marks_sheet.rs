//! CSV marks sheet loader
//!
//! Reads `Student id, Course id, Marks` sheets. The header row is skipped,
//! columns are matched by position and surrounding whitespace is ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::MarkRecord;
use crate::shared::errors::InfraError;

#[derive(Debug, Deserialize)]
struct MarkRow {
    student_id: u32,
    course_id: u32,
    marks: u32,
}

impl From<MarkRow> for MarkRecord {
    fn from(row: MarkRow) -> Self {
        MarkRecord::new(row.student_id, row.course_id, row.marks)
    }
}

/// Parse a marks sheet from any reader
pub fn read_marks<R: Read>(reader: R) -> Result<Vec<MarkRecord>, InfraError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        let row: MarkRow = record.deserialize(None)?;
        rows.push(row.into());
    }
    Ok(rows)
}

/// Load a marks sheet from disk
pub fn load_marks(path: &Path) -> Result<Vec<MarkRecord>, InfraError> {
    let file = File::open(path)?;
    let rows = read_marks(file)?;
    debug!("Loaded {} mark row(s) from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_rows_and_trims_whitespace() {
        let sheet = "Student id, Course id, Marks\n1001, 2001, 56\n 1002 ,2001,  90\n";
        let rows = read_marks(sheet.as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![
                MarkRecord::new(1001, 2001, 56),
                MarkRecord::new(1002, 2001, 90),
            ]
        );
    }

    #[test]
    fn header_only_sheet_is_empty() {
        let rows = read_marks("Student id, Course id, Marks\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn non_numeric_marks_fail() {
        let sheet = "Student id, Course id, Marks\n1001, 2001, abc\n";
        assert!(matches!(read_marks(sheet.as_bytes()), Err(InfraError::Csv(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Student id, Course id, Marks").unwrap();
        writeln!(file, "1003, 2002, 71").unwrap();

        let rows = load_marks(file.path()).unwrap();
        assert_eq!(rows, vec![MarkRecord::new(1003, 2002, 71)]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_marks(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, InfraError::Io(_)));
    }
}
