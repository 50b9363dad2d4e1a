//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Rule thresholds live next to their rule tables, not here.

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Student Insight";

/// Assessment columns every input table must carry
pub const REQUIRED_GRADE_COLUMNS: [&str; 3] = ["g1", "g2", "g3"];

/// Minimum number of valid students for a run
pub const MIN_VALID_RECORDS: usize = 5;

// ============================================
// Clustering defaults
// ============================================

/// Default clustering seed
pub const DEFAULT_SEED: u64 = 42;

/// Default number of k-means restarts per fit
pub const DEFAULT_N_INIT: usize = 10;

/// Default Lloyd iteration cap
pub const DEFAULT_MAX_ITER: usize = 300;

/// Default convergence tolerance (relative to mean feature variance)
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Exclusive upper bound on the cohort count search (k = 8 is never fitted)
pub const DEFAULT_MAX_K: usize = 8;

/// Cohort count used when no candidate k could be scored
pub const FALLBACK_K: usize = 3;

// ============================================
// Output
// ============================================

/// Separator for list-valued cells in CSV output
pub const LIST_SEPARATOR: &str = " | ";
