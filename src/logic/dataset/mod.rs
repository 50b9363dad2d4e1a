//! Dataset Module - Student Table Ingestion
//!
//! Turns an uploaded table into validated `StudentRecord`s.
//!
//! # Validation
//! - Missing `G1`/`G2`/`G3` column -> `MissingColumn` (nothing runs)
//! - Rows whose grades are not numeric are dropped
//! - Fewer than `MIN_VALID_RECORDS` survivors -> `InsufficientData`

pub mod table;
pub mod record;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_VALID_RECORDS, REQUIRED_GRADE_COLUMNS};
use crate::logic::error::{InsightError, InsightResult};

pub use record::{ColumnMap, Grades, StudentRecord};
pub use table::{normalize_header, RawTable};

/// Validated working set for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub records: Vec<StudentRecord>,
    /// Rows in the uploaded table
    pub total_rows: usize,
    /// Rows removed because a grade was not numeric
    pub dropped_rows: usize,
    /// Whether the table carried an `absences` column
    pub has_absences: bool,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Largest present absence count (`None` when no row has one)
    pub fn max_absences(&self) -> Option<f64> {
        self.records
            .iter()
            .filter_map(|r| r.absences)
            .fold(None, |acc, a| Some(acc.map_or(a, |m: f64| m.max(a))))
    }
}

/// Check that every mandatory grade column is present
pub fn validate_schema(table: &RawTable) -> InsightResult<()> {
    for column in REQUIRED_GRADE_COLUMNS {
        if !table.has_column(column) {
            return Err(InsightError::MissingColumn {
                column: column.to_uppercase(),
            });
        }
    }
    Ok(())
}

/// Validate the table and coerce every row
pub fn load_roster(table: &RawTable) -> InsightResult<Roster> {
    validate_schema(table)?;

    let columns = ColumnMap::resolve(table);
    let records: Vec<StudentRecord> = (0..table.row_count())
        .filter_map(|row| StudentRecord::from_row(table, &columns, row))
        .collect();

    let total_rows = table.row_count();
    let dropped_rows = total_rows - records.len();
    if dropped_rows > 0 {
        log::warn!("Dropped {} of {} rows with non-numeric grades", dropped_rows, total_rows);
    }

    if records.len() < MIN_VALID_RECORDS {
        return Err(InsightError::InsufficientData {
            valid: records.len(),
            required: MIN_VALID_RECORDS,
        });
    }

    log::info!("Loaded {} valid students ({} rows read)", records.len(), total_rows);

    Ok(Roster {
        records,
        total_rows,
        dropped_rows,
        has_absences: columns.absences.is_some(),
    })
}
