//! Risk Rules & Thresholds
//!
//! The severity table is a fixed contract: downstream tiering (> 0.7 high,
//! >= 0.4 medium) depends on these exact values.
//!
//! Rules are listed in evaluation order. Within the grade, absence and
//! study-effort groups only the first matching rule fires; composite rules
//! fire independently.

use serde::{Deserialize, Serialize};

use super::types::FlagTier;

// ============================================================================
// THRESHOLDS
// ============================================================================

pub const FAILING_GRADE: f64 = 8.0;
pub const LOW_GRADE: f64 = 10.0;
pub const MINIMAL_STUDY_GRADE: f64 = 12.0;
pub const SHARP_DECLINE_TREND: f64 = -3.0;
pub const MILD_DECLINE_TREND: f64 = -1.0;
pub const DECLINE_ABSENCES: f64 = 5.0;

pub const CHRONIC_ABSENCES: f64 = 25.0;
pub const HIGH_ABSENCES: f64 = 15.0;
pub const NOTABLE_ABSENCES: f64 = 8.0;

pub const NO_STUDY_CODE: f64 = 1.0;
pub const MINIMAL_STUDY_CODE: f64 = 2.0;

pub const VERY_LOW_ENGAGEMENT: f64 = 0.2;
pub const HIGH_LIFESTYLE_RISK: f64 = 0.7;

// ============================================================================
// FLAG TEXT
// ============================================================================

pub const NO_RISK_FLAG: &str = "No major risks detected";

// ============================================================================
// RULE TABLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleGroup {
    Grades,
    Absences,
    StudyEffort,
    Composite,
}

impl RuleGroup {
    /// First match only within the group
    pub fn is_exclusive(&self) -> bool {
        !matches!(self, RuleGroup::Composite)
    }
}

/// Values the rules read for one student
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskInputs {
    pub avg_grade: f64,
    pub grade_trend: f64,
    /// `None` when the cell was blank; rules reading it do not fire
    pub absences: Option<f64>,
    pub studytime: Option<f64>,
    pub engagement: f64,
    pub lifestyle_risk: f64,
}

pub struct RiskRule {
    pub group: RuleGroup,
    pub tier: FlagTier,
    pub label: &'static str,
    pub severity: f64,
    pub predicate: fn(&RiskInputs) -> bool,
}

fn absences_above(inputs: &RiskInputs, threshold: f64) -> bool {
    inputs.absences.map_or(false, |a| a > threshold)
}

fn studytime_at_most(inputs: &RiskInputs, code: f64) -> bool {
    inputs.studytime.map_or(false, |s| s <= code)
}

pub static RISK_RULES: &[RiskRule] = &[
    // === Grades ===
    RiskRule {
        group: RuleGroup::Grades,
        tier: FlagTier::Critical,
        label: "Critical – Failing grades",
        severity: 0.95,
        predicate: |i| i.avg_grade < FAILING_GRADE,
    },
    RiskRule {
        group: RuleGroup::Grades,
        tier: FlagTier::Severe,
        label: "Severe – Declining grades",
        severity: 0.85,
        predicate: |i| i.avg_grade < LOW_GRADE && i.grade_trend < 0.0,
    },
    RiskRule {
        group: RuleGroup::Grades,
        tier: FlagTier::Moderate,
        label: "Moderate – Low grades (<10)",
        severity: 0.70,
        predicate: |i| i.avg_grade < LOW_GRADE,
    },
    RiskRule {
        group: RuleGroup::Grades,
        tier: FlagTier::Moderate,
        label: "Moderate – Sharp grade decline",
        severity: 0.75,
        predicate: |i| i.grade_trend < SHARP_DECLINE_TREND,
    },
    RiskRule {
        group: RuleGroup::Grades,
        tier: FlagTier::Low,
        label: "Low – Declining + absences",
        severity: 0.55,
        predicate: |i| i.grade_trend < MILD_DECLINE_TREND && absences_above(i, DECLINE_ABSENCES),
    },
    // === Absences ===
    RiskRule {
        group: RuleGroup::Absences,
        tier: FlagTier::Critical,
        label: "Critical – Chronic absenteeism",
        severity: 0.90,
        predicate: |i| absences_above(i, CHRONIC_ABSENCES),
    },
    RiskRule {
        group: RuleGroup::Absences,
        tier: FlagTier::Moderate,
        label: "Moderate – High absences",
        severity: 0.65,
        predicate: |i| absences_above(i, HIGH_ABSENCES),
    },
    RiskRule {
        group: RuleGroup::Absences,
        tier: FlagTier::Low,
        label: "Low – Notable absences",
        severity: 0.45,
        predicate: |i| absences_above(i, NOTABLE_ABSENCES),
    },
    // === Study effort ===
    RiskRule {
        group: RuleGroup::StudyEffort,
        tier: FlagTier::Critical,
        label: "Critical – No study + failing",
        severity: 0.88,
        predicate: |i| studytime_at_most(i, NO_STUDY_CODE) && i.avg_grade < LOW_GRADE,
    },
    RiskRule {
        group: RuleGroup::StudyEffort,
        tier: FlagTier::Moderate,
        label: "Moderate – Minimal study",
        severity: 0.68,
        predicate: |i| studytime_at_most(i, MINIMAL_STUDY_CODE) && i.avg_grade < MINIMAL_STUDY_GRADE,
    },
    // === Composite indices ===
    RiskRule {
        group: RuleGroup::Composite,
        tier: FlagTier::Moderate,
        label: "Moderate – Very low engagement",
        severity: 0.70,
        predicate: |i| i.engagement < VERY_LOW_ENGAGEMENT,
    },
    RiskRule {
        group: RuleGroup::Composite,
        tier: FlagTier::Moderate,
        label: "Moderate – High lifestyle risk",
        severity: 0.65,
        predicate: |i| i.lifestyle_risk > HIGH_LIFESTYLE_RISK,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severities_in_unit_range() {
        for rule in RISK_RULES {
            assert!(rule.severity > 0.0 && rule.severity <= 1.0, "{}", rule.label);
        }
    }

    #[test]
    fn test_groups_are_contiguous() {
        let groups: Vec<RuleGroup> = RISK_RULES.iter().map(|r| r.group).collect();
        let mut seen = Vec::new();
        for g in groups {
            if seen.last() != Some(&g) {
                assert!(!seen.contains(&g), "group {:?} split in table", g);
                seen.push(g);
            }
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_only_composite_is_independent() {
        assert!(RuleGroup::Grades.is_exclusive());
        assert!(RuleGroup::Absences.is_exclusive());
        assert!(RuleGroup::StudyEffort.is_exclusive());
        assert!(!RuleGroup::Composite.is_exclusive());
    }
}
