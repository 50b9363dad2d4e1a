//! Features Module - Feature Derivation Engine
//!
//! Tách logic tính features khỏi phần đọc dữ liệu.
//! Input: validated `Roster`. Output: one `DerivedFeatures` per student.
//!
//! - `grades`: average, trend, variance, stability
//! - `indices`: the six bounded behavioural indices
//! - `layout` / `vector`: the versioned 9-feature clustering input

pub mod grades;
pub mod indices;
pub mod layout;
pub mod vector;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::logic::dataset::{Roster, StudentRecord};

pub use grades::GradeProfile;
pub use indices::DatasetContext;
pub use layout::{feature_index, feature_name, layout_hash, LayoutInfo, FEATURE_COUNT, FEATURE_LAYOUT};
pub use vector::FeatureVector;

/// Everything derived from one record. Read-only once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatures {
    pub avg_grade: f64,
    pub grade_trend: f64,
    pub grade_variance: f64,
    pub grade_stability: f64,
    pub study_discipline: f64,
    pub engagement: f64,
    pub family_support: f64,
    pub lifestyle_risk: f64,
    pub health_score: f64,
    pub low_ses: f64,
}

impl DerivedFeatures {
    /// The clustering vector in layout order
    pub fn vector(&self) -> FeatureVector {
        FeatureVector::from(self)
    }

    /// The six bounded indices, named
    pub fn indices(&self) -> [(&'static str, f64); 6] {
        [
            ("study_discipline", self.study_discipline),
            ("engagement", self.engagement),
            ("family_support", self.family_support),
            ("lifestyle_risk", self.lifestyle_risk),
            ("health_score", self.health_score),
            ("low_ses", self.low_ses),
        ]
    }
}

/// Derive features for a single record
pub fn derive(record: &StudentRecord, ctx: &DatasetContext) -> DerivedFeatures {
    let grades = GradeProfile::from_grades(&record.grades);

    DerivedFeatures {
        avg_grade: grades.avg_grade,
        grade_trend: grades.grade_trend,
        grade_variance: grades.grade_variance,
        grade_stability: grades.grade_stability,
        study_discipline: indices::study_discipline(record, ctx),
        engagement: indices::engagement(record),
        family_support: indices::family_support(record),
        lifestyle_risk: indices::lifestyle_risk(record),
        health_score: indices::health_score(record),
        low_ses: indices::low_ses(record),
    }
}

/// Derive features for every student in the roster
pub fn derive_all(roster: &Roster) -> Vec<DerivedFeatures> {
    let ctx = DatasetContext {
        max_absences: roster.max_absences(),
    };

    let features: Vec<DerivedFeatures> = roster.records.iter().map(|r| derive(r, &ctx)).collect();
    log::debug!(
        "Derived features for {} students (max absences: {:?})",
        features.len(),
        ctx.max_absences
    );
    features
}
