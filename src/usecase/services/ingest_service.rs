use crate::domain::entities::cell::{Cell, Position};
use crate::domain::entities::grouping::GroupingTable;
use crate::usecase::ports::workbook::{RawRow, SubjectSheet};

/// Lifts a raw row into a cell, or `None` when the label or either coordinate is missing.
pub fn classify_row(row: &RawRow, subject: &str) -> Option<Cell> {
    let label = row.label.as_deref().filter(|label| !label.trim().is_empty())?;
    let (x, y) = (row.x?, row.y?);
    Some(Cell::from_label(label, Position::new(x, y), subject))
}

/// Builds the grouping table from every sheet, in sheet then row order.
pub fn classify_sheets(sheets: &[SubjectSheet]) -> GroupingTable {
    let mut table = GroupingTable::new();

    for sheet in sheets {
        log::info!("Processing sheet: {}", sheet.name);
        let mut skipped = 0_usize;
        for row in &sheet.rows {
            match classify_row(row, &sheet.name) {
                Some(cell) => table.insert(cell),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            log::debug!("{}: skipped {skipped} incomplete rows", sheet.name);
        }
    }

    table
}
