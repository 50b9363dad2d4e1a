//! Feature Vector - clustering input
//!
//! Values follow `FEATURE_LAYOUT` order. Never index by magic number outside
//! this module; use the named accessors or `get_by_name`.

use serde::{Deserialize, Serialize};

use super::layout::{feature_index, FEATURE_COUNT, FEATURE_LAYOUT};
use super::DerivedFeatures;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        feature_index(name).and_then(|i| self.get(i))
    }

    /// Non-finite values are zeroed before standardization
    pub fn sanitized(&self) -> Self {
        let mut values = self.values;
        for v in values.iter_mut() {
            if !v.is_finite() {
                *v = 0.0;
            }
        }
        Self { values }
    }

    /// Named values for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::Value::Object(
            FEATURE_LAYOUT
                .iter()
                .zip(self.values.iter())
                .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
                .collect(),
        )
    }
}

impl From<&DerivedFeatures> for FeatureVector {
    fn from(f: &DerivedFeatures) -> Self {
        Self::from_values([
            f.avg_grade,
            f.grade_stability,
            f.grade_trend,
            f.study_discipline,
            f.engagement,
            f.family_support,
            f.lifestyle_risk,
            f.health_score,
            f.low_ses,
        ])
    }
}
