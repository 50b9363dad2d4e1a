//! Raw Table
//!
//! Bảng dữ liệu thô: header + string cells, đúng như đọc từ CSV.
//! Column lookup is case-insensitive after trimming.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::logic::error::{InsightError, InsightResult};

/// Normalize a header for lookup
pub fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Uploaded table, untouched apart from header normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    /// Header text as it appeared in the file
    pub headers: Vec<String>,
    /// Normalized header names (same order)
    pub columns: Vec<String>,
    /// Data rows, padded to header width
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Build from headers and rows already in memory
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let columns = headers.iter().map(|h| normalize_header(h)).collect();
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self { headers, columns, rows }
    }

    /// Convenience for tests and small fixtures
    pub fn from_str_rows(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    /// Read a CSV document with a header row
    pub fn from_reader<R: Read>(reader: R) -> InsightResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(|h| h.to_string()).collect();
        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(InsightError::EmptyInput);
        }

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        log::debug!("Read CSV: {} columns, {} rows", headers.len(), rows.len());
        Ok(Self::new(headers, rows))
    }

    /// Read a CSV file from disk
    pub fn from_path(path: &Path) -> InsightResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Index of a column by (normalized) name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = normalize_header(name);
        self.columns.iter().position(|c| *c == wanted)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at (row, column index)
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
