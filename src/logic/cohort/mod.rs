//! Cohort Module - Unsupervised grouping of students
//!
//! Gom nhóm học sinh có hành vi tương tự.
//!
//! ## Pipeline
//! 1. `scaler`: standardize the 9-feature matrix
//! 2. `search`: try k in 2..min(8, n) (exclusive), score by `silhouette`
//! 3. `kmeans`: refit at the chosen k with the same seed
//! 4. `profile`: aggregate statistics per cohort

pub mod kmeans;
pub mod profile;
pub mod scaler;
pub mod search;
pub mod silhouette;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::logic::config::AnalysisConfig;
use crate::logic::features::{FeatureVector, FEATURE_COUNT};

pub use kmeans::{KMeans, KMeansFit};
pub use profile::{build_profiles, CohortProfile, UNTRACKED_ABSENCES};
pub use scaler::StandardScaler;
pub use search::{CandidateScore, CohortSearch};
pub use silhouette::silhouette_score;

/// Final cohort membership for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortAssignment {
    /// Cohort id per student, same order as the input vectors
    pub labels: Vec<usize>,
    pub k: usize,
    pub inertia: f64,
    pub candidates: Vec<CandidateScore>,
}

/// Stack vectors into an (n, FEATURE_COUNT) matrix and standardize it
pub fn standardize(vectors: &[FeatureVector]) -> Array2<f64> {
    let raw = Array2::from_shape_fn((vectors.len(), FEATURE_COUNT), |(i, j)| {
        vectors[i].sanitized().values[j]
    });
    StandardScaler::fit_transform(raw.view())
}

/// Group students into cohorts, choosing k automatically
pub fn cluster(vectors: &[FeatureVector], cfg: &AnalysisConfig) -> CohortAssignment {
    let data = standardize(vectors);
    let search = search::search(data.view(), cfg);

    let fit = KMeans::from_config(search.chosen_k, cfg).fit(data.view());
    log::info!(
        "Chose k={} ({} cohorts occupied, inertia {:.3}, {} iterations)",
        search.chosen_k,
        fit.occupied_clusters(),
        fit.inertia,
        fit.iterations
    );

    CohortAssignment {
        labels: fit.labels,
        k: search.chosen_k,
        inertia: fit.inertia,
        candidates: search.candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(avg: f64, engagement: f64) -> FeatureVector {
        let mut values = [0.5; FEATURE_COUNT];
        values[0] = avg;
        values[4] = engagement;
        FeatureVector::from_values(values)
    }

    #[test]
    fn test_cluster_is_deterministic() {
        let vectors: Vec<FeatureVector> = (0..12)
            .map(|i| vector((i % 3) as f64 * 6.0 + 2.0, (i % 2) as f64))
            .collect();
        let cfg = AnalysisConfig::default();

        let a = cluster(&vectors, &cfg);
        let b = cluster(&vectors, &cfg);
        assert_eq!(a, b);
        assert!(a.k >= 2 && a.k < 8);
        assert!(a.labels.iter().all(|&l| l < a.k));
    }

    #[test]
    fn test_standardize_shape() {
        let vectors = vec![vector(1.0, 0.0), vector(2.0, 1.0), vector(3.0, 0.5)];
        let data = standardize(&vectors);
        assert_eq!(data.dim(), (3, FEATURE_COUNT));
        // Constant columns standardize to zero
        assert_eq!(data[[0, 1]], 0.0);
    }
}
