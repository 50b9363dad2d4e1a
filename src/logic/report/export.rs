//! Report Export
//!
//! Ghi bảng kết quả ra CSV hoặc JSON.
//!
//! CSV: original columns (grade cells replaced by the coerced values), then
//! the derived columns. List cells are joined with `" | "`.
//! JSON: the whole `AnalysisReport`, pretty printed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::types::{AnalysisReport, StudentInsight};
use crate::constants::{LIST_SEPARATOR, REQUIRED_GRADE_COLUMNS};
use crate::logic::dataset::normalize_header;
use crate::logic::error::InsightResult;

/// Columns appended after the original ones
pub const DERIVED_COLUMNS: &[&str] = &[
    "avg_grade",
    "grade_trend",
    "grade_variance",
    "grade_stability",
    "study_discipline",
    "engagement",
    "family_support",
    "lifestyle_risk",
    "health_score",
    "low_ses",
    "cluster",
    "persona_label",
    "risk_flags",
    "risk_score",
    "teaching_strategy",
];

/// Header row of the augmented table
pub fn csv_headers(report: &AnalysisReport) -> Vec<String> {
    report
        .source_headers
        .iter()
        .cloned()
        .chain(DERIVED_COLUMNS.iter().map(|c| c.to_string()))
        .collect()
}

fn csv_row(report: &AnalysisReport, student: &StudentInsight) -> Vec<String> {
    let grades = student.grades.as_array();
    let mut row: Vec<String> = report
        .source_headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let normalized = normalize_header(header);
            match REQUIRED_GRADE_COLUMNS.iter().position(|g| *g == normalized) {
                Some(g) => grades[g].to_string(),
                None => student.cells.get(col).cloned().unwrap_or_default(),
            }
        })
        .collect();

    let f = &student.features;
    row.extend(
        [
            f.avg_grade,
            f.grade_trend,
            f.grade_variance,
            f.grade_stability,
            f.study_discipline,
            f.engagement,
            f.family_support,
            f.lifestyle_risk,
            f.health_score,
            f.low_ses,
        ]
        .iter()
        .map(|v| v.to_string()),
    );
    row.push(student.cohort.to_string());
    row.push(student.persona.to_string());
    row.push(student.risk.flag_labels().join(LIST_SEPARATOR));
    row.push(student.risk.risk_score.to_string());
    row.push(student.strategies.join(LIST_SEPARATOR));
    row
}

/// Write the augmented table as CSV
pub fn write_csv<W: Write>(report: &AnalysisReport, writer: W) -> InsightResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(csv_headers(report))?;
    for student in &report.students {
        csv_writer.write_record(csv_row(report, student))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(report: &AnalysisReport, writer: W) -> InsightResult<()> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Write CSV to a file (truncates if exists)
pub fn save_csv(report: &AnalysisReport, path: &Path) -> InsightResult<()> {
    let file = File::create(path)?;
    write_csv(report, BufWriter::new(file))?;
    log::info!("Wrote {} rows to {}", report.students.len(), path.display());
    Ok(())
}

pub fn save_json(report: &AnalysisReport, path: &Path) -> InsightResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_json(report, &mut out)?;
    out.flush()?;
    log::info!("Wrote report {} to {}", report.run_id, path.display());
    Ok(())
}
