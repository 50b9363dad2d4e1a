//! Cohort Profiles
//!
//! Aggregate statistics of each non-empty cohort. These are the only inputs
//! the persona classifier sees.

use serde::{Deserialize, Serialize};

use crate::logic::dataset::Roster;
use crate::logic::features::DerivedFeatures;

/// Mean absences assumed for every cohort when the table has no absences column
pub const UNTRACKED_ABSENCES: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortProfile {
    pub id: usize,
    pub size: usize,
    /// Member-wise mean of every derived feature
    pub mean_features: DerivedFeatures,
    /// Mean over members with a known absence count
    pub mean_absences: Option<f64>,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Build one profile per occupied cohort id, in id order
pub fn build_profiles(
    k: usize,
    labels: &[usize],
    features: &[DerivedFeatures],
    roster: &Roster,
) -> Vec<CohortProfile> {
    (0..k)
        .filter_map(|id| {
            let members: Vec<usize> = labels
                .iter()
                .enumerate()
                .filter(|(_, label)| **label == id)
                .map(|(i, _)| i)
                .collect();
            if members.is_empty() {
                return None;
            }

            let avg = |select: fn(&DerivedFeatures) -> f64| -> f64 {
                mean(members.iter().map(|&i| select(&features[i]))).unwrap_or(f64::NAN)
            };

            let mean_features = DerivedFeatures {
                avg_grade: avg(|f| f.avg_grade),
                grade_trend: avg(|f| f.grade_trend),
                grade_variance: avg(|f| f.grade_variance),
                grade_stability: avg(|f| f.grade_stability),
                study_discipline: avg(|f| f.study_discipline),
                engagement: avg(|f| f.engagement),
                family_support: avg(|f| f.family_support),
                lifestyle_risk: avg(|f| f.lifestyle_risk),
                health_score: avg(|f| f.health_score),
                low_ses: avg(|f| f.low_ses),
            };

            let mean_absences = if roster.has_absences {
                mean(members.iter().filter_map(|&i| roster.records[i].absences))
            } else {
                Some(UNTRACKED_ABSENCES)
            };

            Some(CohortProfile {
                id,
                size: members.len(),
                mean_features,
                mean_absences,
            })
        })
        .collect()
}
