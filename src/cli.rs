use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

use crate::aggregate::Granularity;
use crate::config::ConfigOverrides;
use crate::output::DocumentFormat;

pub const DEFAULT_OUTPUT: &str = "report.pdf";

#[derive(Parser, Debug)]
#[command(name = "sales-report")]
#[command(author, version, about = "Turn a sales CSV into an analysed, chart-illustrated report")]
#[command(long_about = "Reads a sales CSV (date, product, region, sales, expenses), \
    aggregates it by product, region and period, draws charts and writes a \
    report document.\n\n\
    Exit codes:\n  \
    0 - Report written\n  \
    1 - Input, analysis, rendering or output error\n  \
    2 - Configuration or usage error")]
pub struct Cli {
    /// Sales CSV to analyse
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output document path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Margin ratio below which a group is flagged as underperforming (e.g. 0.15)
    #[arg(long)]
    pub margin_threshold: Option<Decimal>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: pdf, html, markdown, json]
    ///
    /// Inferred from the output extension when omitted.
    #[arg(short, long)]
    pub format: Option<DocumentFormat>,

    /// Period granularity [possible values: month, quarter, year]
    #[arg(long)]
    pub period: Option<Granularity>,

    /// Report title (overrides config)
    #[arg(long)]
    pub title: Option<String>,

    /// Field delimiter of the input file (overrides config)
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Configuration values given as flags.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            title: self.title.clone(),
            margin_threshold: self.margin_threshold,
            period: self.period,
            delimiter: self.delimiter,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
