//! K-Means
//!
//! Lloyd's algorithm with k-means++ seeding. Restarts share one RNG seeded
//! from the config, so a fit is a pure function of (data, k, config).

use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::logic::config::AnalysisConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KMeans {
    pub k: usize,
    pub n_init: usize,
    pub max_iter: usize,
    pub tolerance: f64,
    pub seed: u64,
}

#[derive(Debug, Clone)]
pub struct KMeansFit {
    pub labels: Vec<usize>,
    pub centroids: Array2<f64>,
    /// Sum of squared distances to the assigned centroid
    pub inertia: f64,
    pub iterations: usize,
}

impl KMeansFit {
    /// Number of clusters that actually received members
    pub fn occupied_clusters(&self) -> usize {
        let mut seen = vec![false; self.centroids.nrows()];
        for &label in &self.labels {
            seen[label] = true;
        }
        seen.into_iter().filter(|s| *s).count()
    }
}

impl KMeans {
    pub fn from_config(k: usize, cfg: &AnalysisConfig) -> Self {
        Self {
            k,
            n_init: cfg.n_init.max(1),
            max_iter: cfg.max_iter.max(1),
            tolerance: cfg.tolerance,
            seed: cfg.seed,
        }
    }

    pub fn fit(&self, data: ArrayView2<f64>) -> KMeansFit {
        let n = data.nrows();
        if n == 0 {
            return KMeansFit {
                labels: Vec::new(),
                centroids: Array2::zeros((0, data.ncols())),
                inertia: 0.0,
                iterations: 0,
            };
        }

        let k = self.k.clamp(1, n);
        let tol = self.tolerance * mean_variance(data);
        let mut rng = StdRng::seed_from_u64(self.seed);

        let first_init = kmeans_plus_plus(data, k, &mut rng);
        let mut best = lloyd(data, first_init, self.max_iter, tol);

        for _ in 1..self.n_init {
            let init = kmeans_plus_plus(data, k, &mut rng);
            let fit = lloyd(data, init, self.max_iter, tol);
            if fit.inertia < best.inertia {
                best = fit;
            }
        }

        best
    }
}

pub fn squared_distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Mean of the per-column population variances
fn mean_variance(data: ArrayView2<f64>) -> f64 {
    let n = data.nrows().max(1) as f64;
    let d = data.ncols();
    if d == 0 {
        return 0.0;
    }

    let total: f64 = data
        .columns()
        .into_iter()
        .map(|col| {
            let m = col.sum() / n;
            col.iter().map(|v| (v - m).powi(2)).sum::<f64>() / n
        })
        .sum();
    total / d as f64
}

/// k-means++: each new centre is drawn with probability proportional to its
/// squared distance from the nearest centre chosen so far.
fn kmeans_plus_plus(data: ArrayView2<f64>, k: usize, rng: &mut StdRng) -> Array2<f64> {
    let n = data.nrows();
    let mut centers = Array2::zeros((k, data.ncols()));

    let first = rng.gen_range(0..n);
    centers.row_mut(0).assign(&data.row(first));

    let mut closest: Vec<f64> = (0..n)
        .map(|i| squared_distance(data.row(i), data.row(first)))
        .collect();

    for c in 1..k {
        let total: f64 = closest.iter().sum();

        let chosen = if total > 0.0 && total.is_finite() {
            let mut target = rng.gen::<f64>() * total;
            let mut pick = None;
            let mut last_positive = 0;
            for (i, &dist) in closest.iter().enumerate() {
                if dist <= 0.0 {
                    continue;
                }
                last_positive = i;
                if target < dist {
                    pick = Some(i);
                    break;
                }
                target -= dist;
            }
            pick.unwrap_or(last_positive)
        } else {
            // Every point already coincides with a centre
            rng.gen_range(0..n)
        };

        centers.row_mut(c).assign(&data.row(chosen));
        for (i, best) in closest.iter_mut().enumerate() {
            let dist = squared_distance(data.row(i), data.row(chosen));
            if dist < *best {
                *best = dist;
            }
        }
    }

    centers
}

/// Assign every point to its nearest centroid (ties go to the lower index).
/// Returns the squared distance of each point to its centroid.
fn assign(data: ArrayView2<f64>, centroids: &Array2<f64>, labels: &mut [usize]) -> Vec<f64> {
    let mut distances = vec![0.0; data.nrows()];

    for (i, point) in data.rows().into_iter().enumerate() {
        let mut best_label = 0;
        let mut best_dist = f64::INFINITY;
        for (c, centroid) in centroids.rows().into_iter().enumerate() {
            let dist = squared_distance(point, centroid);
            if dist < best_dist {
                best_dist = dist;
                best_label = c;
            }
        }
        labels[i] = best_label;
        distances[i] = best_dist;
    }

    distances
}

fn lloyd(data: ArrayView2<f64>, mut centroids: Array2<f64>, max_iter: usize, tol: f64) -> KMeansFit {
    let n = data.nrows();
    let d = data.ncols();
    let k = centroids.nrows();
    let mut labels = vec![0usize; n];
    let mut iterations = 0;

    for iter in 0..max_iter {
        iterations = iter + 1;
        let distances = assign(data, &centroids, &mut labels);

        let mut sums = Array2::<f64>::zeros((k, d));
        let mut counts = vec![0usize; k];
        for (i, &label) in labels.iter().enumerate() {
            counts[label] += 1;
            for j in 0..d {
                sums[[label, j]] += data[[i, j]];
            }
        }

        // Empty clusters take the points farthest from their centroids
        let mut taken = vec![false; n];
        for c in 0..k {
            if counts[c] > 0 {
                for j in 0..d {
                    sums[[c, j]] /= counts[c] as f64;
                }
                continue;
            }

            let far = (0..n)
                .filter(|i| !taken[*i])
                .fold(None, |acc: Option<usize>, i| match acc {
                    Some(b) if distances[b] >= distances[i] => Some(b),
                    _ => Some(i),
                });
            if let Some(i) = far {
                taken[i] = true;
                sums.row_mut(c).assign(&data.row(i));
            }
        }

        let shift: f64 = (0..k)
            .map(|c| squared_distance(centroids.row(c), sums.row(c)))
            .sum();
        centroids = sums;

        if shift <= tol {
            break;
        }
    }

    let distances = assign(data, &centroids, &mut labels);
    KMeansFit {
        labels,
        centroids,
        inertia: distances.iter().sum(),
        iterations,
    }
}
