//! Report Types
//!
//! Kết quả của một lần phân tích. KHÔNG chứa logic - chỉ data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::cohort::CandidateScore;
use crate::logic::config::AnalysisConfig;
use crate::logic::dataset::Grades;
use crate::logic::error::{InsightError, InsightResult};
use crate::logic::features::{DerivedFeatures, LayoutInfo};
use crate::logic::persona::Persona;
use crate::logic::risk::{RiskAssessment, RiskTier};

/// Everything computed for one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentInsight {
    /// Row index in the uploaded table
    pub source_row: usize,
    /// Original cells, header order
    pub cells: Vec<String>,
    pub grades: Grades,
    pub features: DerivedFeatures,
    pub cohort: usize,
    pub persona: Persona,
    pub risk: RiskAssessment,
    pub strategies: Vec<String>,
}

/// Aggregates for one occupied cohort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortSummary {
    pub id: usize,
    pub size: usize,
    pub persona: Persona,
    pub mean_avg_grade: f64,
    pub mean_engagement: f64,
    pub mean_study_discipline: f64,
    pub mean_absences: Option<f64>,
    pub mean_lifestyle_risk: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub app_version: String,
    pub layout: LayoutInfo,
    pub config: AnalysisConfig,

    pub total_rows: usize,
    pub dropped_rows: usize,
    pub source_headers: Vec<String>,

    pub chosen_k: usize,
    /// Quality of every evaluated k, ascending
    pub candidates: Vec<CandidateScore>,
    pub cohorts: Vec<CohortSummary>,

    pub students: Vec<StudentInsight>,
}

impl AnalysisReport {
    /// Student by position in the working table
    pub fn student(&self, index: usize) -> InsightResult<&StudentInsight> {
        self.students.get(index).ok_or(InsightError::StudentNotFound {
            index,
            max: self.students.len().saturating_sub(1),
        })
    }

    pub fn cohort(&self, id: usize) -> Option<&CohortSummary> {
        self.cohorts.iter().find(|c| c.id == id)
    }

    /// Students per risk tier (low, medium, high)
    pub fn tier_counts(&self) -> (usize, usize, usize) {
        self.students
            .iter()
            .fold((0, 0, 0), |(low, medium, high), s| match s.risk.tier {
                RiskTier::Low => (low + 1, medium, high),
                RiskTier::Medium => (low, medium + 1, high),
                RiskTier::High => (low, medium, high + 1),
            })
    }

    pub fn mean_risk_score(&self) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        self.students.iter().map(|s| s.risk.risk_score).sum::<f64>() / self.students.len() as f64
    }
}
