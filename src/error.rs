use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the failures that abort a conversion run.
///
/// Problems with individual cells never show up here: malformed or missing
/// values degrade to field defaults inside [`crate::coerce`].
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON parsing or serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Raised when a required sheet is not present in the workbook.
    #[error("missing sheet '{0}'")]
    MissingSheet(String),

    /// Raised when a sheet has no header for the column its rows are keyed by.
    #[error("sheet '{sheet}' has no '{column}' column")]
    MissingColumn { sheet: String, column: String },

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when a lookup names a state the document does not contain.
    #[error("unknown state '{0}'")]
    UnknownState(String),

    /// Raised when a pacing lookup asks for a week outside 1..=20.
    #[error("week {0} is outside the pacing window")]
    WeekOutOfRange(u32),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
