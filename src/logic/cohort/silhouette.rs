//! Silhouette Coefficient
//!
//! Mean of (b - a) / max(a, b) over all points, where a is the mean distance
//! to the own cluster and b the mean distance to the nearest other cluster.
//! Used only to choose the cohort count.

use ndarray::ArrayView2;

use super::kmeans::squared_distance;

/// Mean silhouette, or `None` when the partition has fewer than two
/// clusters or one cluster per point.
pub fn silhouette_score(data: ArrayView2<f64>, labels: &[usize]) -> Option<f64> {
    let n = labels.len();
    if n == 0 || data.nrows() != n {
        return None;
    }

    let k = labels.iter().copied().max().map_or(0, |m| m + 1);
    let mut sizes = vec![0usize; k];
    for &label in labels {
        sizes[label] += 1;
    }

    let occupied = sizes.iter().filter(|s| **s > 0).count();
    if occupied < 2 || occupied >= n {
        return None;
    }

    let mut total = 0.0;
    let mut sums = vec![0.0; k];

    for i in 0..n {
        sums.iter_mut().for_each(|s| *s = 0.0);
        for j in 0..n {
            if i != j {
                sums[labels[j]] += squared_distance(data.row(i), data.row(j)).sqrt();
            }
        }

        let own = labels[i];
        if sizes[own] <= 1 {
            // Singleton clusters score 0
            continue;
        }

        let a = sums[own] / (sizes[own] - 1) as f64;
        let b = (0..k)
            .filter(|&c| c != own && sizes[c] > 0)
            .map(|c| sums[c] / sizes[c] as f64)
            .fold(f64::INFINITY, f64::min);

        let denom = a.max(b);
        if denom > 0.0 && denom.is_finite() {
            total += (b - a) / denom;
        }
    }

    Some(total / n as f64)
}
