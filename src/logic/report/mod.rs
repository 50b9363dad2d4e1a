//! Report Module - End-to-end analysis
//!
//! - `types`: `AnalysisReport`, `StudentInsight`, `CohortSummary`
//! - `pipeline`: `analyze` / `analyze_path`
//! - `export`: augmented CSV and JSON output

pub mod export;
pub mod pipeline;
pub mod types;


pub use export::{save_csv, save_json, write_csv, write_json};
pub use pipeline::{analyze, analyze_path};
pub use types::{AnalysisReport, CohortSummary, StudentInsight};
