//! Error handling for the statement summarizer
//!
//! Defines the error taxonomy for one processing run and establishes a
//! unified Result type. anyhow is layered on top at the binary boundary
//! for context chaining.

use thiserror::Error;

/// Core error types for statement processing
#[derive(Error, Debug)]
pub enum StatementError {
    #[error("io error")]
    Io(#[from] std::io::Error),

    #[error("not a readable workbook: {0}")]
    Format(String),

    #[error("sheet not found: {0}")]
    MissingSheet(String),

    #[error("column not found: {0}")]
    MissingColumn(String),

    #[error("sheet {sheet:?} row {row} column {column}: expected {expected}, found {found}")]
    CellType {
        sheet: String,
        /// 1-based workbook row
        row: usize,
        /// 1-based workbook column
        column: usize,
        expected: &'static str,
        found: String,
    },

    #[error("workbook write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type alias for statement processing
pub type Result<T> = std::result::Result<T, StatementError>;
