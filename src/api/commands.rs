//! Commands - API cho CLI
//!
//! Thin layer between the binary and `logic`: runs the pipeline, writes
//! outputs and renders the text views (run summary, per-student report).

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::logic::cohort::CandidateScore;
use crate::logic::config::AnalysisConfig;
use crate::logic::error::InsightResult;
use crate::logic::features::LayoutInfo;
use crate::logic::report::{self, AnalysisReport};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One line per cohort in the run summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortLine {
    pub id: usize,
    pub size: usize,
    pub persona: String,
    pub badge: String,
    pub mean_avg_grade: f64,
}

/// Run summary printed after `analyze`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: String,
    pub generated_at: String,
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub students: usize,
    pub chosen_k: usize,
    pub candidates: Vec<CandidateScore>,
    pub cohorts: Vec<CohortLine>,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
    pub mean_risk_score: f64,
}

impl RunSummary {
    pub fn from_report(report: &AnalysisReport) -> Self {
        let (low, medium, high) = report.tier_counts();
        Self {
            run_id: report.run_id.to_string(),
            generated_at: report.generated_at.to_rfc3339(),
            rows_read: report.total_rows,
            rows_dropped: report.dropped_rows,
            students: report.students.len(),
            chosen_k: report.chosen_k,
            candidates: report.candidates.clone(),
            cohorts: report
                .cohorts
                .iter()
                .map(|c| CohortLine {
                    id: c.id,
                    size: c.size,
                    persona: c.persona.to_string(),
                    badge: c.persona.badge().to_string(),
                    mean_avg_grade: c.mean_avg_grade,
                })
                .collect(),
            high_risk: high,
            medium_risk: medium,
            low_risk: low,
            mean_risk_score: report.mean_risk_score(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} v{}  run {}", APP_NAME, APP_VERSION, self.run_id);
        let _ = writeln!(out, "Generated: {}", self.generated_at);
        let _ = writeln!(
            out,
            "Rows read: {}  dropped: {}  analyzed: {}",
            self.rows_read, self.rows_dropped, self.students
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Cohort count search (silhouette):");
        for c in &self.candidates {
            let marker = if c.k == self.chosen_k { "  <- chosen" } else { "" };
            match c.silhouette {
                Some(s) => {
                    let _ = writeln!(out, "  k={:<2} {:.4}{}", c.k, s, marker);
                }
                None => {
                    let _ = writeln!(out, "  k={:<2} n/a{}", c.k, marker);
                }
            }
        }
        let _ = writeln!(out, "Chosen k: {}", self.chosen_k);
        let _ = writeln!(out);
        let _ = writeln!(out, "Cohorts:");
        for c in &self.cohorts {
            let _ = writeln!(
                out,
                "  #{} {} {:<24} {:>4} students  avg grade {:.2}",
                c.id, c.badge, c.persona, c.size, c.mean_avg_grade
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Risk: {} high, {} medium, {} low (mean score {:.3})",
            self.high_risk, self.medium_risk, self.low_risk, self.mean_risk_score
        );
        out
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

/// Read, validate and analyze a CSV file
pub fn run_analysis(path: &Path, cfg: &AnalysisConfig) -> InsightResult<AnalysisReport> {
    report::analyze_path(path, cfg)
}

/// Write whichever outputs were requested; returns the paths written
pub fn export_outputs(
    report: &AnalysisReport,
    csv_path: Option<&Path>,
    json_path: Option<&Path>,
) -> InsightResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    if let Some(path) = csv_path {
        report::save_csv(report, path)?;
        written.push(path.to_path_buf());
    }
    if let Some(path) = json_path {
        report::save_json(report, path)?;
        written.push(path.to_path_buf());
    }
    Ok(written)
}

/// Detailed view of one student
pub fn student_report(report: &AnalysisReport, index: usize) -> InsightResult<String> {
    let s = report.student(index)?;
    let f = &s.features;
    let mut out = String::new();

    let _ = writeln!(out, "Student #{} (source row {})", index, s.source_row + 1);
    let _ = writeln!(out, "{}", "=".repeat(48));

    let _ = writeln!(out, "Grades");
    let _ = writeln!(
        out,
        "  G1 {}  G2 {}  G3 {}",
        s.grades.g1, s.grades.g2, s.grades.g3
    );
    let _ = writeln!(
        out,
        "  average {:.2}  trend {:+.2}  stability {:.3}",
        f.avg_grade, f.grade_trend, f.grade_stability
    );

    let _ = writeln!(out, "Behaviour");
    let _ = writeln!(out, "  study discipline {:.3}", f.study_discipline);
    let _ = writeln!(out, "  engagement       {:.3}", f.engagement);

    let _ = writeln!(out, "Family & lifestyle");
    let _ = writeln!(out, "  family support   {:.3}", f.family_support);
    let _ = writeln!(out, "  lifestyle risk   {:.3}", f.lifestyle_risk);
    let _ = writeln!(out, "  health deficit   {:.3}", f.health_score);
    let _ = writeln!(out, "  low SES          {:.3}", f.low_ses);

    let _ = writeln!(out);
    let _ = writeln!(out, "Cohort {}: {} {}", s.cohort, s.persona.badge(), s.persona);
    let _ = writeln!(
        out,
        "Risk score {:.3} ({})",
        s.risk.risk_score, s.risk.tier
    );
    for flag in &s.risk.flags {
        let _ = writeln!(out, "  {} {}", flag.tier.badge(), flag.label);
    }

    let _ = writeln!(out, "Recommended strategies");
    for (i, strategy) in s.strategies.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, strategy);
    }

    Ok(out)
}

pub fn layout_info() -> LayoutInfo {
    LayoutInfo::current()
}

pub fn render_layout(info: &LayoutInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Feature layout v{} (hash {:08x}, {} features)",
        info.version, info.hash, info.feature_count
    );
    for (i, name) in info.feature_names.iter().enumerate() {
        let _ = writeln!(out, "  [{}] {}", i, name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::error::InsightError;
    use crate::logic::features::layout_hash;
    use std::io::Write;

    fn sample_csv(dir: &Path) -> PathBuf {
        let path = dir.join("students.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "g1,g2,g3,absences,studytime").unwrap();
        for row in [
            "18,18,18,0,3",
            "18,18,18,1,3",
            "17,18,18,0,4",
            "11,12,12,4,2",
            "5,4,3,30,1",
            "6,5,4,26,1",
        ] {
            writeln!(file, "{}", row).unwrap();
        }
        path
    }

    #[test]
    fn test_run_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let input = sample_csv(dir.path());
        let report = run_analysis(&input, &AnalysisConfig::default()).unwrap();

        let csv_out = dir.path().join("out.csv");
        let json_out = dir.path().join("out.json");
        let written = export_outputs(&report, Some(&csv_out), Some(&json_out)).unwrap();
        assert_eq!(written, vec![csv_out.clone(), json_out.clone()]);
        assert!(csv_out.exists() && json_out.exists());

        let summary = RunSummary::from_report(&report).render();
        assert!(summary.contains("Chosen k:"));
        assert!(summary.contains("Rows read: 6"));
    }

    #[test]
    fn test_student_report_sections() {
        let dir = tempfile::tempdir().unwrap();
        let report = run_analysis(&sample_csv(dir.path()), &AnalysisConfig::default()).unwrap();

        let text = student_report(&report, 4).unwrap();
        assert!(text.contains("Critical – Failing grades"));
        assert!(text.contains("HIGH RISK"));
        assert!(text.contains("Recommended strategies"));

        assert!(matches!(
            student_report(&report, 99),
            Err(InsightError::StudentNotFound { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_analysis(&dir.path().join("nope.csv"), &AnalysisConfig::default()).unwrap_err();
        assert_eq!(err.code(), "io_error");
    }

    #[test]
    fn test_layout_render() {
        let text = render_layout(&layout_info());
        assert!(text.contains("avg_grade"));
        assert!(text.contains(&format!("{:08x}", layout_hash())));
    }
}
