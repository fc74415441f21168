//! Header resolution for the required input columns.

use std::collections::HashMap;

use csv::StringRecord;

use crate::error::IngestError;

/// Columns every input file must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = ["date", "product", "region", "sales", "expenses"];

/// Position of each required column within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub date: usize,
    pub product: usize,
    pub region: usize,
    pub sales: usize,
    pub expenses: usize,
}

impl ColumnIndex {
    /// Resolve required columns from the header row.
    ///
    /// # Errors
    /// Returns [`IngestError::MissingColumns`] naming every absent column.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, IngestError> {
        let header_map = build_header_map(headers);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| !header_map.contains_key(**name))
            .map(|name| (*name).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(IngestError::MissingColumns { missing });
        }

        let lookup = |name: &str| header_map.get(name).copied().unwrap_or_default();
        Ok(Self {
            date: lookup("date"),
            product: lookup("product"),
            region: lookup("region"),
            sales: lookup("sales"),
            expenses: lookup("expenses"),
        })
    }
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        // First occurrence wins for duplicated headers
        map.entry(normalize_header_name(name)).or_insert(idx);
    }
    map
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod tests;
