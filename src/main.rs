mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{formatters, Cli};
use colored::Colorize;
use etoro_summary::countries::CountryNames;
use etoro_summary::workbook::Workbook;
use etoro_summary::{process, summarize};
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    if !cli.json {
        println!("Processing: {}", cli.file);
    }
    info!("summarizing statement: {}", cli.file);

    let summaries = if cli.dry_run {
        let mut workbook =
            Workbook::open(&cli.file).with_context(|| format!("failed to open {}", cli.file))?;
        let mut names = CountryNames::new();
        summarize(&mut workbook, &mut names)
            .with_context(|| format!("failed to summarize {}", cli.file))?
    } else {
        process(&cli.file).with_context(|| format!("failed to process {}", cli.file))?
    };

    if cli.json {
        println!("{}", formatters::format_summaries_json(&summaries));
        return Ok(());
    }

    let groups: usize = summaries.iter().map(|s| s.rows.len()).sum();
    println!(
        "\n{} Summarized {} groups across {} sheets",
        "✓".green().bold(),
        groups,
        summaries.len()
    );
    println!("{}", formatters::format_summary_tables(&summaries));

    if cli.dry_run {
        println!("{} Dry run - workbook not saved", "ℹ".blue().bold());
    } else {
        println!("{} Done: {}", "✓".green().bold(), cli.file);
    }

    Ok(())
}
