//! Analysis Pipeline
//!
//! raw table -> features -> (cohorts | risk) -> personas -> strategies.
//! Either the whole report is produced or an error is returned before any
//! output exists.

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use super::types::{AnalysisReport, CohortSummary, StudentInsight};
use crate::constants::APP_VERSION;
use crate::logic::cohort::{self, CohortProfile};
use crate::logic::config::AnalysisConfig;
use crate::logic::dataset::{self, RawTable};
use crate::logic::error::InsightResult;
use crate::logic::features::{self, DerivedFeatures, FeatureVector, LayoutInfo};
use crate::logic::persona::{self, Persona};
use crate::logic::risk::{self, RiskAssessment};
use crate::logic::strategy;

/// Run the full analysis over an in-memory table
pub fn analyze(table: &RawTable, cfg: &AnalysisConfig) -> InsightResult<AnalysisReport> {
    // 1. Validate + coerce
    let roster = dataset::load_roster(table)?;

    // 2. Derive
    let features = features::derive_all(&roster);
    let vectors: Vec<FeatureVector> = features.iter().map(DerivedFeatures::vector).collect();
    if log::log_enabled!(log::Level::Trace) {
        for (record, vector) in roster.records.iter().zip(&vectors) {
            log::trace!("row {}: {}", record.source_row, vector.to_log_entry());
        }
    }

    // 3. Cohorts and risk are independent of each other
    let assignment = cohort::cluster(&vectors, cfg);
    let risks: Vec<RiskAssessment> = roster
        .records
        .iter()
        .zip(&features)
        .map(|(record, f)| risk::assess_student(record, f))
        .collect();

    // 4. Personas per cohort, then broadcast
    let profiles = cohort::build_profiles(assignment.k, &assignment.labels, &features, &roster);
    let persona_map = persona::classify_cohorts(&profiles);
    let personas = persona::broadcast(&assignment.labels, &persona_map);

    let cohorts: Vec<CohortSummary> = profiles
        .iter()
        .map(|p| summarize(p, persona_map.get(&p.id).copied().unwrap_or(persona::FALLBACK_PERSONA)))
        .collect();

    // 5. Assemble
    let students: Vec<StudentInsight> = roster
        .records
        .iter()
        .zip(features.iter())
        .zip(assignment.labels.iter())
        .zip(personas.iter())
        .zip(risks)
        .map(|((((record, f), &cohort), &persona), risk)| StudentInsight {
            source_row: record.source_row,
            cells: table.rows.get(record.source_row).cloned().unwrap_or_default(),
            grades: record.grades,
            features: *f,
            cohort,
            persona,
            risk,
            strategies: strategy::strategy_strings(persona),
        })
        .collect();

    let report = AnalysisReport {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        app_version: APP_VERSION.to_string(),
        layout: LayoutInfo::current(),
        config: cfg.clone(),
        total_rows: roster.total_rows,
        dropped_rows: roster.dropped_rows,
        source_headers: table.headers.clone(),
        chosen_k: assignment.k,
        candidates: assignment.candidates,
        cohorts,
        students,
    };

    let (low, medium, high) = report.tier_counts();
    log::info!(
        "Analysis {} complete: {} students, {} cohorts, risk tiers low/medium/high = {}/{}/{}",
        report.run_id,
        report.students.len(),
        report.cohorts.len(),
        low,
        medium,
        high
    );

    Ok(report)
}

/// Read a CSV file and analyze it
pub fn analyze_path(path: &Path, cfg: &AnalysisConfig) -> InsightResult<AnalysisReport> {
    log::info!("Reading {}", path.display());
    let table = RawTable::from_path(path)?;
    analyze(&table, cfg)
}

fn summarize(profile: &CohortProfile, persona: Persona) -> CohortSummary {
    CohortSummary {
        id: profile.id,
        size: profile.size,
        persona,
        mean_avg_grade: profile.mean_features.avg_grade,
        mean_engagement: profile.mean_features.engagement,
        mean_study_discipline: profile.mean_features.study_discipline,
        mean_absences: profile.mean_absences,
        mean_lifestyle_risk: profile.mean_features.lifestyle_risk,
    }
}
