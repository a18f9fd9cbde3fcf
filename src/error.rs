//! Workbook I/O error types

use thiserror::Error;

/// Result type for workbook reading/writing
pub type WorkbookResult<T> = std::result::Result<T, WorkbookError>;

/// Errors raised by the spreadsheet adapters. Domain code never produces these.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// Input workbook could not be opened
    #[error("failed to open workbook {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: calamine::Error,
    },

    /// A worksheet could not be read
    #[error("failed to read sheet {sheet}: {source}")]
    ReadSheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    /// CSV input could not be read
    #[error("failed to read csv {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// Input extension is not one we know how to read
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// Row written to a sheet that was never prepared
    #[error("unknown output sheet: {0}")]
    UnknownSheet(String),

    /// Writing a worksheet failed
    #[error("failed to write sheet {sheet}: {source}")]
    WriteSheet {
        sheet: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// Saving the output workbook failed
    #[error("failed to save workbook {path}: {source}")]
    Save {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}
