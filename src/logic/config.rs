//! Analysis configuration
//!
//! Clustering tunables, loaded from environment variables (optionally via a
//! `.env` file loaded by the binary) and overridable from the CLI.

use std::env;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_ITER, DEFAULT_MAX_K, DEFAULT_N_INIT, DEFAULT_SEED, DEFAULT_TOLERANCE,
};

/// Clustering configuration for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Seed for k-means++ initialisation
    pub seed: u64,

    /// Restarts per k-means fit (best inertia wins)
    pub n_init: usize,

    /// Lloyd iteration cap per restart
    pub max_iter: usize,

    /// Convergence tolerance, scaled by the mean feature variance
    pub tolerance: f64,

    /// Exclusive upper bound on the cohort count search
    pub max_k: usize,

    /// Evaluate candidate k values on the rayon pool
    pub parallel_search: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            n_init: DEFAULT_N_INIT,
            max_iter: DEFAULT_MAX_ITER,
            tolerance: DEFAULT_TOLERANCE,
            max_k: DEFAULT_MAX_K,
            parallel_search: true,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            seed: env_parse("INSIGHT_SEED", defaults.seed),
            n_init: env_parse("INSIGHT_N_INIT", defaults.n_init).max(1),
            max_iter: env_parse("INSIGHT_MAX_ITER", defaults.max_iter).max(1),
            tolerance: env_parse("INSIGHT_TOLERANCE", defaults.tolerance),
            max_k: env_parse("INSIGHT_MAX_K", defaults.max_k).max(3),
            parallel_search: env_parse("INSIGHT_PARALLEL", defaults.parallel_search),
        }
    }

    /// Sequential search, mostly for tests and profiling
    pub fn sequential() -> Self {
        Self {
            parallel_search: false,
            ..Default::default()
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Invalid value '{}' for {}, using default {}", raw, key, default);
                default
            }
        },
        Err(_) => default,
    }
}
