use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::domain::entities::pairing::DistanceRow;
use crate::error::{WorkbookError, WorkbookResult};
use crate::usecase::ports::workbook::ResultSink;

const ID_COLUMN_WIDTH: f64 = 24.0;
const VALUE_COLUMN_WIDTH: f64 = 14.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSheet {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<DistanceRow>,
}

/// Buffers result sheets in memory and writes them as one xlsx file on `save`.
#[derive(Debug, Clone, Default)]
pub struct XlsxResultWriter {
    path: PathBuf,
    sheets: Vec<ResultSheet>,
}

impl XlsxResultWriter {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            sheets: Vec::new(),
        }
    }

    pub fn sheets(&self) -> &[ResultSheet] {
        &self.sheets
    }

    pub fn into_sheets(self) -> Vec<ResultSheet> {
        self.sheets
    }

    fn sheet_mut(&mut self, name: &str) -> WorkbookResult<&mut ResultSheet> {
        self.sheets
            .iter_mut()
            .find(|sheet| sheet.name == name)
            .ok_or_else(|| WorkbookError::UnknownSheet(name.to_string()))
    }
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &ResultSheet) -> Result<(), XlsxError> {
    let header_format = Format::new().set_bold();

    worksheet.set_name(&sheet.name)?;
    for (col, title) in sheet.header.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, title, &header_format)?;
    }

    for (idx, row) in sheet.rows.iter().enumerate() {
        let row_idx = (idx + 1) as u32;
        worksheet.write_string(row_idx, 0, &row.pnn_id)?;
        worksheet.write_string(row_idx, 1, &row.microglia_id)?;
        worksheet.write_number(row_idx, 2, row.distance)?;
        worksheet.write_string(row_idx, 3, &row.subject)?;
    }

    worksheet.set_column_width(0, ID_COLUMN_WIDTH)?;
    worksheet.set_column_width(1, ID_COLUMN_WIDTH)?;
    worksheet.set_column_width(2, VALUE_COLUMN_WIDTH)?;
    worksheet.set_column_width(3, VALUE_COLUMN_WIDTH)?;
    Ok(())
}

impl ResultSink for XlsxResultWriter {
    fn clear_sheet(&mut self, sheet: &str) -> WorkbookResult<()> {
        if let Some(existing) = self.sheets.iter_mut().find(|s| s.name == sheet) {
            existing.header.clear();
            existing.rows.clear();
        } else {
            self.sheets.push(ResultSheet {
                name: sheet.to_string(),
                ..ResultSheet::default()
            });
        }
        Ok(())
    }

    fn write_header(&mut self, sheet: &str, headers: &[&str]) -> WorkbookResult<()> {
        let target = self.sheet_mut(sheet)?;
        target.header = headers.iter().map(|h| h.to_string()).collect();
        Ok(())
    }

    fn append_row(&mut self, sheet: &str, row: DistanceRow) -> WorkbookResult<()> {
        self.sheet_mut(sheet)?.rows.push(row);
        Ok(())
    }

    fn save(&mut self) -> WorkbookResult<()> {
        let mut workbook = Workbook::new();

        for sheet in &self.sheets {
            let worksheet = workbook.add_worksheet();
            write_sheet(worksheet, sheet).map_err(|source| WorkbookError::WriteSheet {
                sheet: sheet.name.clone(),
                source,
            })?;
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| WorkbookError::Save {
                path: self.path.display().to_string(),
                source: XlsxError::IoError(err),
            })?;
        }

        workbook
            .save(&self.path)
            .map_err(|source| WorkbookError::Save {
                path: self.path.display().to_string(),
                source,
            })
    }
}
