//! Delimited-file ingest.
//!
//! Turns a sales CSV into a validated [`Dataset`]:
//! - the header row is required; column names are matched case-insensitively
//!   and in any order
//! - rows that fail validation are skipped and reported, never zeroed
//! - an unreadable file or a file with zero valid rows is an [`IngestError`]

mod columns;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;

use crate::error::IngestError;
use crate::model::{Dataset, LoadedDataset, Record, SkippedRow};

pub use columns::{ColumnIndex, REQUIRED_COLUMNS};

/// Default `chrono` format for the `date` column.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parsing options for the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOptions {
    pub delimiter: u8,
    pub date_format: String,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Load and validate the dataset at `path`.
///
/// # Errors
/// Returns [`IngestError::NotFound`] if the file does not exist,
/// [`IngestError::Read`] if it cannot be read as delimited text,
/// [`IngestError::MissingColumns`] if the header lacks a required column and
/// [`IngestError::NoValidRecords`] if every data row was rejected.
pub fn load_dataset(path: &Path, options: &IngestOptions) -> Result<LoadedDataset, IngestError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => IngestError::NotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::Read {
            path: path.to_path_buf(),
            source: csv::Error::from(e),
        },
    })?;

    load_from_reader(file, path, options)
}

/// Load and validate a dataset from any byte source; `path` names it in errors.
///
/// # Errors
/// Same as [`load_dataset`], except that [`IngestError::NotFound`] is never returned.
pub fn load_from_reader<R: Read>(
    source: R,
    path: &Path,
    options: &IngestOptions,
) -> Result<LoadedDataset, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    let mut skipped = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) if e.is_io_error() => {
                return Err(IngestError::Read {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                let line = e.position().map_or(idx + 2, line_number);
                skip_row(&mut skipped, line, format!("unreadable row: {e}"));
                continue;
            }
        };

        let line = record.position().map_or(idx + 2, line_number);
        match parse_record(&record, &columns, &options.date_format) {
            Ok(parsed) => records.push(parsed),
            Err(reason) => skip_row(&mut skipped, line, reason),
        }
    }

    if records.is_empty() {
        return Err(IngestError::NoValidRecords {
            path: path.to_path_buf(),
            skipped: skipped.len(),
        });
    }

    if !skipped.is_empty() {
        tracing::warn!(
            skipped = skipped.len(),
            rows = rows_read,
            "skipped malformed rows"
        );
    }
    tracing::info!(records = records.len(), path = %path.display(), "dataset loaded");

    Ok(LoadedDataset {
        dataset: Dataset::new(records),
        skipped,
        rows_read,
    })
}

#[allow(clippy::cast_possible_truncation)]
fn line_number(position: &csv::Position) -> usize {
    position.line() as usize
}

fn skip_row(skipped: &mut Vec<SkippedRow>, line: usize, reason: String) {
    tracing::debug!(line, reason = %reason, "skipping row");
    skipped.push(SkippedRow { line, reason });
}

fn parse_record(
    record: &StringRecord,
    columns: &ColumnIndex,
    date_format: &str,
) -> Result<Record, String> {
    let date_raw = get_required(record, columns.date, "date")?;
    let date = NaiveDate::parse_from_str(date_raw, date_format)
        .map_err(|e| format!("invalid `date` value '{date_raw}': {e}"))?;

    let product = get_required(record, columns.product, "product")?.to_string();
    let region = get_required(record, columns.region, "region")?.to_string();
    let sales = parse_amount(get_required(record, columns.sales, "sales")?, "sales")?;
    let expenses = parse_amount(
        get_required(record, columns.expenses, "expenses")?,
        "expenses",
    )?;

    Ok(Record {
        date,
        product,
        region,
        sales,
        expenses,
    })
}

fn get_required<'r>(record: &'r StringRecord, idx: usize, name: &str) -> Result<&'r str, String> {
    record
        .get(idx)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| format!("missing `{name}` value"))
}

fn parse_amount(raw: &str, name: &str) -> Result<Decimal, String> {
    let value =
        Decimal::from_str(raw).map_err(|_| format!("non-numeric `{name}` value '{raw}'"))?;
    if value < Decimal::ZERO {
        return Err(format!("negative `{name}` value '{raw}'"));
    }
    if value > max_amount() {
        return Err(format!("`{name}` value '{raw}' is out of range"));
    }
    Ok(value)
}

/// Upper bound on a single amount; keeps dataset-wide sums far from `Decimal::MAX`.
fn max_amount() -> Decimal {
    Decimal::from(MAX_AMOUNT)
}

const MAX_AMOUNT: i64 = 1_000_000_000_000_000_000;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
