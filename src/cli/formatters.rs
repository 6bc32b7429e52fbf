//! Output formatting module for CLI display
//!
//! This module handles all terminal output formatting, separating
//! the concerns of aggregation from presentation.

use colored::Colorize;
use etoro_summary::SheetSummary;
use tabled::{settings::Style, Table, Tabled};

/// Format every summary sheet as a rounded table under its sheet name.
pub fn format_summary_tables(summaries: &[SheetSummary]) -> String {
    #[derive(Tabled)]
    struct CountryRow {
        #[tabled(rename = "CountryCode")]
        code: String,
        #[tabled(rename = "Country")]
        country: String,
        #[tabled(rename = "Amount")]
        amount: String,
    }

    #[derive(Tabled)]
    struct CountryTypeRow {
        #[tabled(rename = "CountryCode")]
        code: String,
        #[tabled(rename = "Country")]
        country: String,
        #[tabled(rename = "Type")]
        instrument_type: String,
        #[tabled(rename = "Amount")]
        amount: String,
    }

    let mut output = String::new();
    for summary in summaries {
        output.push_str(&format!("\n{}\n", summary.sheet.cyan().bold()));

        let grouped_by_type = summary.rows.iter().any(|row| row.instrument_type.is_some());
        let table = if grouped_by_type {
            let rows: Vec<CountryTypeRow> = summary
                .rows
                .iter()
                .map(|row| CountryTypeRow {
                    code: row.country_code.clone(),
                    country: row.country.clone(),
                    instrument_type: row.instrument_type.clone().unwrap_or_default(),
                    amount: row.amount.to_string(),
                })
                .collect();
            Table::new(rows).with(Style::rounded()).to_string()
        } else {
            let rows: Vec<CountryRow> = summary
                .rows
                .iter()
                .map(|row| CountryRow {
                    code: row.country_code.clone(),
                    country: row.country.clone(),
                    amount: row.amount.to_string(),
                })
                .collect();
            Table::new(rows).with(Style::rounded()).to_string()
        };

        output.push_str(&table);
        output.push('\n');
    }
    output
}

/// Format the summaries for JSON output
pub fn format_summaries_json(summaries: &[SheetSummary]) -> String {
    serde_json::to_string_pretty(summaries)
        .unwrap_or_else(|e| format!(r#"{{"error": "JSON serialization failed: {}"}}"#, e))
}
