//! Persona Decision Table
//!
//! Ordered (band, predicate, persona) rules. The first rule whose grade band
//! contains the cohort average and whose predicate holds wins. Bands are
//! inclusive on the lower bound. Each band ends with a catch-all rule.

use super::types::{CohortStats, Persona};

// ============================================================================
// THRESHOLDS
// ============================================================================

pub const HIGH_GRADE: f64 = 15.0;
pub const SOLID_GRADE: f64 = 12.0;
pub const PASS_GRADE: f64 = 10.0;

pub const HIGH_ACHIEVER_DISCIPLINE: f64 = 0.6;
pub const DISCIPLINE_MIN: f64 = 0.5;
pub const ENGAGEMENT_MIN: f64 = 0.5;
pub const DISENGAGED_BELOW: f64 = 0.3;
pub const LIFESTYLE_RISK_ABOVE: f64 = 0.6;
pub const ATTENDANCE_ISSUE_ABSENCES: f64 = 15.0;
pub const ABSENTEEISM_ABSENCES: f64 = 20.0;

/// Persona used when no band matches (undefined average)
pub const FALLBACK_PERSONA: Persona = Persona::Struggling;

// ============================================================================
// RULE TABLE
// ============================================================================

/// Grade band [min, max); a band with `max = +inf` is unbounded above and
/// also holds +inf itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    pub min: f64,
    pub max: f64,
}

impl GradeBand {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, grade: f64) -> bool {
        grade >= self.min && (grade < self.max || self.max == f64::INFINITY)
    }
}

pub const HIGH_BAND: GradeBand = GradeBand::new(HIGH_GRADE, f64::INFINITY);
pub const SOLID_BAND: GradeBand = GradeBand::new(SOLID_GRADE, HIGH_GRADE);
pub const PASS_BAND: GradeBand = GradeBand::new(PASS_GRADE, SOLID_GRADE);
pub const LOW_BAND: GradeBand = GradeBand::new(f64::NEG_INFINITY, PASS_GRADE);

pub struct PersonaRule {
    pub band: GradeBand,
    pub condition: fn(&CohortStats) -> bool,
    pub persona: Persona,
}

fn always(_: &CohortStats) -> bool {
    true
}

fn absences_at_least(stats: &CohortStats, threshold: f64) -> bool {
    stats.absences.map_or(false, |a| a >= threshold)
}

pub static PERSONA_RULES: &[PersonaRule] = &[
    // avg >= 15
    PersonaRule {
        band: HIGH_BAND,
        condition: |s| s.discipline >= HIGH_ACHIEVER_DISCIPLINE,
        persona: Persona::HighAchiever,
    },
    PersonaRule { band: HIGH_BAND, condition: always, persona: Persona::HighPotential },
    // 12 <= avg < 15
    PersonaRule {
        band: SOLID_BAND,
        condition: |s| s.discipline >= DISCIPLINE_MIN && s.engagement >= ENGAGEMENT_MIN,
        persona: Persona::SolidPerformer,
    },
    PersonaRule {
        band: SOLID_BAND,
        condition: |s| absences_at_least(s, ATTENDANCE_ISSUE_ABSENCES),
        persona: Persona::AttendanceIssues,
    },
    PersonaRule { band: SOLID_BAND, condition: always, persona: Persona::AboveAverage },
    // 10 <= avg < 12
    PersonaRule {
        band: PASS_BAND,
        condition: |s| s.engagement >= ENGAGEMENT_MIN,
        persona: Persona::DevelopingLearner,
    },
    PersonaRule {
        band: PASS_BAND,
        condition: |s| s.discipline >= DISCIPLINE_MIN,
        persona: Persona::StrugglingButTrying,
    },
    PersonaRule { band: PASS_BAND, condition: always, persona: Persona::LowEngagement },
    // avg < 10
    PersonaRule {
        band: LOW_BAND,
        condition: |s| absences_at_least(s, ABSENTEEISM_ABSENCES),
        persona: Persona::AtRiskAbsenteeism,
    },
    PersonaRule {
        band: LOW_BAND,
        condition: |s| s.engagement < DISENGAGED_BELOW,
        persona: Persona::AtRiskDisengaged,
    },
    PersonaRule {
        band: LOW_BAND,
        condition: |s| s.lifestyle_risk > LIFESTYLE_RISK_ABOVE,
        persona: Persona::AtRiskLifestyle,
    },
    PersonaRule { band: LOW_BAND, condition: always, persona: Persona::Struggling },
];
