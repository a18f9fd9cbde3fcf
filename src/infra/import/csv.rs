use std::path::{Path, PathBuf};

use crate::error::{WorkbookError, WorkbookResult};
use crate::usecase::ports::workbook::{RawRow, SheetSource, SubjectSheet};

fn parse_coordinate(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// A single subject stored as `label,x,y` with a header line. The subject is the file stem.
pub struct CsvSheetSource {
    path: PathBuf,
}

impl CsvSheetSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn subject_name(&self) -> String {
        self.path
            .file_stem()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("subject")
            .to_string()
    }

    fn csv_error(&self, source: csv::Error) -> WorkbookError {
        WorkbookError::Csv {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl SheetSource for CsvSheetSource {
    fn subject_sheets(&mut self) -> WorkbookResult<Vec<SubjectSheet>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|source| self.csv_error(source))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| self.csv_error(source))?;
            rows.push(RawRow::new(
                record.get(0).filter(|label| !label.trim().is_empty()),
                parse_coordinate(record.get(1)),
                parse_coordinate(record.get(2)),
            ));
        }

        Ok(vec![SubjectSheet {
            name: self.subject_name(),
            rows,
        }])
    }
}
