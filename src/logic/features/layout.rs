//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the clustering feature schema**
//!
//! ## Rules:
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! Exported reports carry the version and layout hash so results from
//! different layouts are never compared by accident.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the clustering vector
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Grades (0-2) ===
    "avg_grade",         // 0: Mean of G1..G3
    "grade_stability",   // 1: 1 / (1 + variance)
    "grade_trend",       // 2: G3 - G1

    // === Behaviour (3-4) ===
    "study_discipline",  // 3: Study time, commute, attendance
    "engagement",        // 4: Activities, plans, support, internet, paid classes

    // === Environment (5-8) ===
    "family_support",    // 5: Parental education, family support, relationships
    "lifestyle_risk",    // 6: Going out, alcohol use
    "health_score",      // 7: Health deficit (higher = worse)
    "low_ses",           // 8: Socioeconomic disadvantage
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 9;

/// Index of a feature by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|f| *f == name)
}

/// Name of a feature by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 of version + ordered feature names
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}
