use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::{WorkbookError, WorkbookResult};
use crate::usecase::ports::workbook::{RawRow, SheetSource, SubjectSheet};

const HEADER_ROWS: u32 = 1;
const LABEL_COL: u32 = 0;
const X_COL: u32 = 1;
const Y_COL: u32 = 2;

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

pub fn cell_to_label(cell: &Data) -> Option<String> {
    let text = cell_to_string(cell);
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Numeric cells, or text that parses as a finite number. Anything else counts as missing.
pub fn cell_to_coordinate(cell: &Data) -> Option<f64> {
    let value = match cell {
        Data::Float(v) => Some(*v),
        Data::Int(v) => Some(*v as f64),
        Data::String(v) => v.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|v| v.is_finite())
}

/// Reads label/x/y from columns A-C of every row below the header. Positions are absolute,
/// so a range whose used area does not begin at A1 still maps correctly.
pub fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
    let Some((last_row, _)) = range.end() else {
        return Vec::new();
    };

    (HEADER_ROWS..=last_row)
        .map(|row| {
            let label = range.get_value((row, LABEL_COL)).and_then(cell_to_label);
            RawRow::new(
                label.as_deref(),
                range.get_value((row, X_COL)).and_then(cell_to_coordinate),
                range.get_value((row, Y_COL)).and_then(cell_to_coordinate),
            )
        })
        .collect()
}

/// Every worksheet of an Excel/ODS workbook, one subject per sheet.
pub struct XlsxSheetSource {
    path: PathBuf,
}

impl XlsxSheetSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl SheetSource for XlsxSheetSource {
    fn subject_sheets(&mut self) -> WorkbookResult<Vec<SubjectSheet>> {
        let mut workbook =
            open_workbook_auto(&self.path).map_err(|source| WorkbookError::Open {
                path: self.path.display().to_string(),
                source,
            })?;

        let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
        let mut sheets = Vec::with_capacity(sheet_names.len());
        for name in sheet_names {
            let range =
                workbook
                    .worksheet_range(&name)
                    .map_err(|source| WorkbookError::ReadSheet {
                        sheet: name.clone(),
                        source,
                    })?;
            sheets.push(SubjectSheet {
                rows: rows_from_range(&range),
                name,
            });
        }

        Ok(sheets)
    }
}
