//! xlsx writing via rust_xlsxwriter
//!
//! calamine cannot write, so the whole container is re-emitted from the
//! in-memory model on save.

use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use tracing::debug;

use super::{Cell, Workbook};
use crate::error::Result;

pub(super) fn save(workbook: &Workbook, path: &Path) -> Result<()> {
    let mut xlsx = XlsxWorkbook::new();

    for sheet in workbook.sheets() {
        let worksheet = xlsx.add_worksheet();
        worksheet.set_name(sheet.name())?;

        for (row_idx, row) in sheet.grid().iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Empty => {}
                    Cell::Text(s) => {
                        worksheet.write_string(row_idx as u32, col_idx as u16, s)?;
                    }
                    Cell::Number(n) => {
                        worksheet.write_number(
                            row_idx as u32,
                            col_idx as u16,
                            n.to_f64().unwrap_or_default(),
                        )?;
                    }
                    Cell::Bool(b) => {
                        worksheet.write_boolean(row_idx as u32, col_idx as u16, *b)?;
                    }
                }
            }
        }

        if sheet.has_autofilter() {
            let header_width = sheet.grid().first().map(Vec::len).unwrap_or(0);
            if header_width > 0 {
                worksheet.autofilter(0, 0, 0, (header_width - 1) as u16)?;
            }
        }

        debug!(sheet = sheet.name(), rows = sheet.grid().len(), "wrote sheet");
    }

    xlsx.save(path)?;
    Ok(())
}
