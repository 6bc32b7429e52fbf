//! xlsx reading via calamine

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_decimal::Decimal;
use tracing::debug;

use super::{Cell, Sheet, Workbook};
use crate::error::{Result, StatementError};

/// Load every sheet of the document at `path` into memory.
pub(super) fn load(path: &Path) -> Result<Workbook> {
    let mut xlsx: Xlsx<_> = open_workbook(path).map_err(open_error)?;

    let sheet_names = xlsx.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err(StatementError::Format(
            "workbook contains no sheets".to_string(),
        ));
    }

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in sheet_names {
        let range = xlsx
            .worksheet_range(&name)
            .map_err(|e| StatementError::Format(e.to_string()))?;

        let rows: Vec<Vec<Cell>> = range
            .rows()
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();

        debug!(sheet = %name, rows = rows.len(), "loaded sheet");
        sheets.push(Sheet {
            name,
            rows,
            autofilter: false,
        });
    }

    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

/// A missing or unreadable path is an io error; everything else means the
/// file is not a parseable xlsx container.
fn open_error(err: calamine::XlsxError) -> StatementError {
    match err {
        calamine::XlsxError::Io(io) => StatementError::Io(io),
        other => StatementError::Format(other.to_string()),
    }
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(Decimal::from(*i)),
        Data::Float(f) => match Decimal::from_f64_retain(*f) {
            Some(d) => Cell::Number(d),
            None => Cell::Text(f.to_string()),
        },
        Data::Bool(b) => Cell::Bool(*b),
        // Serial date values keep their numeric form; this tool never
        // interprets date columns, it only carries them through.
        Data::DateTime(dt) => match Decimal::from_f64_retain(dt.as_f64()) {
            Some(d) => Cell::Number(d),
            None => Cell::Empty,
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}
