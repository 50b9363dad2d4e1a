//! Persona Classifier
//!
//! CHỈ chứa logic classify. Personas are a cohort-level attribute: cohort
//! aggregates are classified once into a map, then broadcast to members.

use std::collections::BTreeMap;

use super::rules::{FALLBACK_PERSONA, PERSONA_RULES};
use super::types::{CohortStats, Persona};
use crate::logic::cohort::CohortProfile;

/// Walk the decision table top to bottom; first match wins
pub fn classify(stats: &CohortStats) -> Persona {
    PERSONA_RULES
        .iter()
        .find(|rule| rule.band.contains(stats.avg_grade) && (rule.condition)(stats))
        .map(|rule| rule.persona)
        .unwrap_or(FALLBACK_PERSONA)
}

impl From<&CohortProfile> for CohortStats {
    fn from(profile: &CohortProfile) -> Self {
        Self {
            avg_grade: profile.mean_features.avg_grade,
            engagement: profile.mean_features.engagement,
            discipline: profile.mean_features.study_discipline,
            absences: profile.mean_absences,
            lifestyle_risk: profile.mean_features.lifestyle_risk,
        }
    }
}

/// Cohort id -> persona
pub fn classify_cohorts(profiles: &[CohortProfile]) -> BTreeMap<usize, Persona> {
    profiles
        .iter()
        .map(|profile| {
            let persona = classify(&CohortStats::from(profile));
            log::info!(
                "Cohort {} ({} students, avg {:.2}): {}",
                profile.id,
                profile.size,
                profile.mean_features.avg_grade,
                persona
            );
            (profile.id, persona)
        })
        .collect()
}

/// Single lookup pass: every student gets its cohort's persona
pub fn broadcast(labels: &[usize], personas: &BTreeMap<usize, Persona>) -> Vec<Persona> {
    labels
        .iter()
        .map(|label| personas.get(label).copied().unwrap_or(FALLBACK_PERSONA))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
