pub mod csv;
pub mod xlsx;

use std::path::Path;

use crate::error::{WorkbookError, WorkbookResult};
use crate::usecase::ports::workbook::SheetSource;

/// Picks a reader from the file extension.
pub fn open_sheet_source(path: &Path) -> WorkbookResult<Box<dyn SheetSource>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Box::new(xlsx::XlsxSheetSource::new(path))),
        "csv" => Ok(Box::new(csv::CsvSheetSource::new(path))),
        _ => Err(WorkbookError::UnsupportedFormat(path.display().to_string())),
    }
}
