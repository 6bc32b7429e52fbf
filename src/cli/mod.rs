use clap::Parser;

pub mod formatters;

#[derive(Parser)]
#[command(name = "etoro-summary")]
#[command(
    version,
    about = "Summarize eToro statement profits and dividends by country"
)]
#[command(
    long_about = "Reads an eToro account-statement workbook (.xlsx) and writes three summary sheets back into it: realized profit per country and instrument type, realized profit per country, and net dividends per country."
)]
pub struct Cli {
    /// Path to the statement workbook (.xlsx)
    pub file: String,

    /// Run the aggregation and show the result without saving the workbook
    #[arg(short, long)]
    pub dry_run: bool,

    /// Output the summary in JSON format
    #[arg(long)]
    pub json: bool,

    /// Disable colorized/ANSI output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
