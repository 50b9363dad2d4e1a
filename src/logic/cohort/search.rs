//! Cohort Count Search
//!
//! Fits every candidate k in 2..min(max_k, n), upper bound exclusive, scores
//! each partition by silhouette and keeps the best. Candidates are
//! independent, so they are evaluated on the rayon pool; selection walks them
//! in k order so the result never depends on scheduling.

use std::ops::Range;

use ndarray::ArrayView2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::kmeans::KMeans;
use super::silhouette::silhouette_score;
use crate::constants::FALLBACK_K;
use crate::logic::config::AnalysisConfig;

/// Quality of one candidate cohort count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub k: usize,
    /// `None` when the fit collapsed to a single cluster
    pub silhouette: Option<f64>,
    pub inertia: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortSearch {
    pub chosen_k: usize,
    pub candidates: Vec<CandidateScore>,
}

/// Candidate k values for `n` points; `max_k` itself is never tried
pub fn candidate_range(n: usize, max_k: usize) -> Range<usize> {
    2..max_k.min(n)
}

fn evaluate(data: ArrayView2<f64>, k: usize, cfg: &AnalysisConfig) -> CandidateScore {
    let fit = KMeans::from_config(k, cfg).fit(data);
    let silhouette = silhouette_score(data, &fit.labels);

    match silhouette {
        Some(s) => log::info!("k={}: silhouette {:.4}, inertia {:.3}", k, s, fit.inertia),
        None => log::info!("k={}: silhouette undefined (single cluster)", k),
    }

    CandidateScore {
        k,
        silhouette,
        inertia: fit.inertia,
    }
}

/// Highest silhouette wins; ties keep the smaller k
pub fn select_k(candidates: &[CandidateScore], n: usize) -> usize {
    let mut best: Option<(usize, f64)> = None;
    for candidate in candidates {
        if let Some(score) = candidate.silhouette {
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((candidate.k, score));
            }
        }
    }

    match best {
        Some((k, _)) => k,
        None => {
            let k = FALLBACK_K.min(n).max(1);
            log::warn!("No candidate cohort count could be scored, using k={}", k);
            k
        }
    }
}

pub fn search(data: ArrayView2<f64>, cfg: &AnalysisConfig) -> CohortSearch {
    let n = data.nrows();
    let ks: Vec<usize> = candidate_range(n, cfg.max_k).collect();

    let candidates: Vec<CandidateScore> = if cfg.parallel_search {
        ks.par_iter().map(|&k| evaluate(data, k, cfg)).collect()
    } else {
        ks.iter().map(|&k| evaluate(data, k, cfg)).collect()
    };

    let chosen_k = select_k(&candidates, n);
    CohortSearch { chosen_k, candidates }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn candidate(k: usize, silhouette: Option<f64>) -> CandidateScore {
        CandidateScore { k, silhouette, inertia: 0.0 }
    }

    #[test]
    fn test_candidate_range() {
        assert_eq!(candidate_range(5, 8).collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(candidate_range(100, 8).collect::<Vec<_>>(), (2..=7).collect::<Vec<_>>());
        assert_eq!(candidate_range(8, 8).last(), Some(7));
        assert_eq!(candidate_range(2, 8).count(), 0);
        assert_eq!(candidate_range(0, 8).count(), 0);
    }

    #[test]
    fn test_select_highest_score() {
        let c = [candidate(2, Some(0.3)), candidate(3, Some(0.6)), candidate(4, Some(0.5))];
        assert_eq!(select_k(&c, 10), 3);
    }

    #[test]
    fn test_ties_keep_smaller_k() {
        let c = [candidate(2, Some(0.8)), candidate(3, Some(0.8))];
        assert_eq!(select_k(&c, 10), 2);
    }

    #[test]
    fn test_unscored_falls_back_to_three() {
        assert_eq!(select_k(&[], 10), 3);
        assert_eq!(select_k(&[candidate(2, None)], 10), 3);
        assert_eq!(select_k(&[], 2), 2);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let data = array![
            [0.0, 0.0],
            [0.2, 0.1],
            [5.0, 5.0],
            [5.1, 4.9],
            [9.0, 0.0],
            [9.2, 0.1],
            [4.0, 8.0],
        ];
        let parallel = search(data.view(), &AnalysisConfig::default());
        let sequential = search(data.view(), &AnalysisConfig::sequential());
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.candidates.len(), 5);
    }

    #[test]
    fn test_upper_bound_is_never_fitted() {
        // Eight tight, well separated pairs: k = 8 would be the natural answer
        let mut rows = Vec::new();
        for i in 0..8 {
            let x = (i % 4) as f64 * 20.0;
            let y = (i / 4) as f64 * 20.0;
            rows.extend_from_slice(&[x, y, x + 0.1, y + 0.1]);
        }
        let data = ndarray::Array2::from_shape_vec((16, 2), rows).unwrap();

        let result = search(data.view(), &AnalysisConfig::default());
        let ks: Vec<usize> = result.candidates.iter().map(|c| c.k).collect();
        assert_eq!(ks, (2..=7).collect::<Vec<_>>());
        assert!(result.chosen_k >= 2 && result.chosen_k < 8);
    }
}
