//! Persona Module
//!
//! Chuyển thống kê của từng cohort thành nhãn persona dễ hiểu.
//!
//! ## Structure
//! - `types`: `Persona` (12 fixed labels), `CohortStats`
//! - `rules`: thresholds and the ordered decision table
//! - `classifier`: table evaluation, cohort map, broadcast
//!
//! ## Usage
//! ```ignore
//! let personas = persona::classify_cohorts(&profiles);
//! let per_student = persona::broadcast(&assignment.labels, &personas);
//! ```

pub mod classifier;
pub mod rules;
pub mod types;

pub use classifier::{broadcast, classify, classify_cohorts};
pub use rules::{PersonaRule, FALLBACK_PERSONA, PERSONA_RULES};
pub use types::{CohortStats, Persona};
