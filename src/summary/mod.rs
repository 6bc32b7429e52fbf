//! Grouped aggregation over the statement workbook
//!
//! Three passes share one routine: read a source sheet, derive a country
//! code from each row's ISIN, sum a monetary column per group, and replace
//! an output sheet with the result. Closed positions feed the two profit
//! summaries, dividends feed the third.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::countries::CountryNames;
use crate::error::Result;
use crate::workbook::{Cell, Workbook};

/// Grouping sentinel for rows without an ISIN.
pub const NO_COUNTRY: &str = "_NA";

const TYPE_HEADER: &str = "Type";
const ISIN_HEADER: &str = "ISIN";

/// One grouped-aggregation pass: where to read, what to sum, whether the
/// instrument type joins the grouping key, and where the result lands.
struct Pass {
    source_sheet: &'static str,
    amount_header: &'static str,
    by_type: bool,
    output_sheet: &'static str,
    amount_label: &'static str,
}

const PASSES: [Pass; 3] = [
    Pass {
        source_sheet: "Closed Positions",
        amount_header: "Profit(USD)",
        by_type: true,
        output_sheet: "Country-Type-Profit",
        amount_label: "Profit",
    },
    Pass {
        source_sheet: "Closed Positions",
        amount_header: "Profit(USD)",
        by_type: false,
        output_sheet: "Country-Profit",
        amount_label: "Profit",
    },
    Pass {
        source_sheet: "Dividends",
        amount_header: "Net Dividend Received (USD)",
        by_type: false,
        output_sheet: "Country-Dividend",
        amount_label: "Dividend",
    },
];

/// One output row of a summary sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub country_code: String,
    pub country: String,
    pub instrument_type: Option<String>,
    pub amount: Decimal,
}

/// The rows written to one output sheet, in sheet order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetSummary {
    pub sheet: String,
    pub rows: Vec<SummaryRow>,
}

/// Derive the grouping country code from an ISIN.
///
/// The first two characters of an ISIN are the issuing country. An empty
/// ISIN groups under [`NO_COUNTRY`]; a one-character ISIN contributes the
/// character it has.
pub fn country_code(isin: &str) -> String {
    if isin.is_empty() {
        NO_COUNTRY.to_string()
    } else {
        isin.chars().take(2).collect()
    }
}

/// Run the full pipeline on the workbook at `path` and save it back in
/// place, gaining or replacing the three summary sheets.
///
/// Fail-fast: the first error aborts the run and the file on disk is left
/// untouched, because saving only happens after every pass has succeeded.
pub fn process<P: AsRef<Path>>(path: P) -> Result<Vec<SheetSummary>> {
    let path = path.as_ref();
    info!("processing statement workbook: {}", path.display());

    let mut workbook = Workbook::open(path)?;
    let mut names = CountryNames::new();
    let summaries = summarize(&mut workbook, &mut names)?;
    workbook.save()?;

    info!("saved summary sheets: {}", path.display());
    Ok(summaries)
}

/// Run all three passes against an in-memory workbook without saving it.
pub fn summarize(workbook: &mut Workbook, names: &mut CountryNames) -> Result<Vec<SheetSummary>> {
    PASSES
        .iter()
        .map(|pass| run_pass(workbook, names, pass))
        .collect()
}

fn run_pass(workbook: &mut Workbook, names: &mut CountryNames, pass: &Pass) -> Result<SheetSummary> {
    let mut totals: BTreeMap<(String, Option<String>), Decimal> = BTreeMap::new();

    {
        let sheet = workbook.sheet(pass.source_sheet)?;
        let type_col = sheet.column(TYPE_HEADER)?;
        let isin_col = sheet.column(ISIN_HEADER)?;
        let amount_col = sheet.column(pass.amount_header)?;

        let mut rows_read = 0usize;
        for row in sheet.data_rows() {
            let isin = row.text(isin_col)?;
            let amount = row.decimal(amount_col)?;
            let instrument_type = if pass.by_type {
                Some(row.text(type_col)?)
            } else {
                None
            };

            let key = (country_code(&isin), instrument_type);
            *totals.entry(key).or_insert(Decimal::ZERO) += amount;
            rows_read += 1;
        }

        debug!(
            sheet = pass.source_sheet,
            rows = rows_read,
            groups = totals.len(),
            "aggregated pass input"
        );
    }

    let mut header = vec!["CountryCode".to_string(), "Country".to_string()];
    if pass.by_type {
        header.push(TYPE_HEADER.to_string());
    }
    header.push(pass.amount_label.to_string());

    let mut summary_rows = Vec::with_capacity(totals.len());
    let mut cell_rows = Vec::with_capacity(totals.len());
    for ((code, instrument_type), amount) in totals {
        let country = names.resolve(&code);

        let mut cells = vec![Cell::Text(code.clone()), Cell::Text(country.clone())];
        if let Some(instrument_type) = &instrument_type {
            cells.push(Cell::Text(instrument_type.clone()));
        }
        cells.push(Cell::Number(amount));
        cell_rows.push(cells);

        summary_rows.push(SummaryRow {
            country_code: code,
            country,
            instrument_type,
            amount,
        });
    }

    workbook.replace_sheet(pass.output_sheet, header, cell_rows);
    Ok(SheetSummary {
        sheet: pass.output_sheet.to_string(),
        rows: summary_rows,
    })
}
