//! Student Insight - cohort, persona and risk analysis for student tables

pub mod api;
pub mod constants;
pub mod logic;

pub use logic::config::AnalysisConfig;
pub use logic::error::{InsightError, InsightResult};
pub use logic::report::{analyze, analyze_path, AnalysisReport};
