//! Grade Features
//!
//! Trung bình, xu hướng và độ ổn định của ba điểm G1..G3.

use serde::{Deserialize, Serialize};

use crate::logic::dataset::Grades;

/// Variance substituted when the computation itself is undefined
pub const VARIANCE_FALLBACK: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeProfile {
    pub avg_grade: f64,
    pub grade_trend: f64,
    pub grade_variance: f64,
    pub grade_stability: f64,
}

impl GradeProfile {
    pub fn from_grades(grades: &Grades) -> Self {
        let values = grades.as_array();
        let avg_grade = values.iter().sum::<f64>() / values.len() as f64;

        let mut grade_variance = sample_variance(&values);
        if !grade_variance.is_finite() {
            grade_variance = VARIANCE_FALLBACK;
        }

        Self {
            avg_grade,
            grade_trend: grades.g3 - grades.g1,
            grade_variance,
            grade_stability: 1.0 / (1.0 + grade_variance),
        }
    }
}

/// Sample variance (n - 1 denominator); NaN for fewer than two values
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
}
