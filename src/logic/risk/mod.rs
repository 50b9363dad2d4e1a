//! Risk Module
//!
//! Chấm điểm rủi ro cho từng học sinh, độc lập với cohort.
//!
//! ## Structure
//! - `types`: `RiskFlag`, `RiskAssessment`, `FlagTier`, `RiskTier`
//! - `rules`: thresholds, severities and the ordered rule table
//! - `scorer`: table evaluation and aggregate score

pub mod rules;
pub mod scorer;
pub mod types;

pub use rules::{RiskInputs, RiskRule, RuleGroup, NO_RISK_FLAG, RISK_RULES};
pub use scorer::{assess, assess_student};
pub use types::{FlagTier, RiskAssessment, RiskFlag, RiskTier};
