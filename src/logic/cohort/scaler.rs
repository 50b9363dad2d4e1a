//! Standard Scaler
//!
//! Zero mean / unit variance per column (population std). Constant columns
//! are masked and standardize to exactly 0.

use ndarray::{Array1, Array2, ArrayView2};

/// Relative spread below which a column counts as constant
const CONSTANT_EPS: f64 = 1e-12;

#[derive(Debug, Clone)]
pub struct StandardScaler {
    pub mean: Array1<f64>,
    pub scale: Array1<f64>,
    pub constant: Vec<bool>,
}

impl StandardScaler {
    pub fn fit(data: ArrayView2<f64>) -> Self {
        let n = data.nrows().max(1) as f64;
        let d = data.ncols();
        let mut mean = Array1::zeros(d);
        let mut scale = Array1::ones(d);
        let mut constant = vec![true; d];

        for j in 0..d {
            let column = data.column(j);
            let m = column.sum() / n;
            let variance = column.iter().map(|v| (v - m).powi(2)).sum::<f64>() / n;
            let std = variance.sqrt();

            mean[j] = m;
            if std.is_finite() && std > CONSTANT_EPS * m.abs().max(1.0) {
                scale[j] = std;
                constant[j] = false;
            }
        }

        Self {
            mean,
            scale,
            constant,
        }
    }

    pub fn transform(&self, data: ArrayView2<f64>) -> Array2<f64> {
        let mut out = data.to_owned();
        for mut row in out.rows_mut() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = if self.constant[j] {
                    0.0
                } else {
                    (*value - self.mean[j]) / self.scale[j]
                };
            }
        }
        out
    }

    pub fn fit_transform(data: ArrayView2<f64>) -> Array2<f64> {
        Self::fit(data).transform(data)
    }
}
