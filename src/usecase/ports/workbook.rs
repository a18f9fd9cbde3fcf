use crate::domain::entities::pairing::DistanceRow;
use crate::error::WorkbookResult;

/// One data row of a subject sheet: label, x and y, already stripped of the header.
/// Blank or non-numeric cells come through as `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    pub label: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl RawRow {
    pub fn new(label: Option<&str>, x: Option<f64>, y: Option<f64>) -> Self {
        Self {
            label: label.map(str::to_string),
            x,
            y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubjectSheet {
    pub name: String,
    pub rows: Vec<RawRow>,
}

pub trait SheetSource {
    fn subject_sheets(&mut self) -> WorkbookResult<Vec<SubjectSheet>>;
}

pub trait ResultSink {
    /// Drops every row of `sheet`, creating it if needed.
    fn clear_sheet(&mut self, sheet: &str) -> WorkbookResult<()>;
    fn write_header(&mut self, sheet: &str, headers: &[&str]) -> WorkbookResult<()>;
    fn append_row(&mut self, sheet: &str, row: DistanceRow) -> WorkbookResult<()>;
    fn save(&mut self) -> WorkbookResult<()>;
}
