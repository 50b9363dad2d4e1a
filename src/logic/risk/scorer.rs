//! Risk Scorer
//!
//! Input: RiskInputs. Output: RiskAssessment.
//! Deterministic and explainable: every point of the score comes from a
//! named flag.

use super::rules::{RiskInputs, RuleGroup, NO_RISK_FLAG, RISK_RULES};
use super::types::{FlagTier, RiskAssessment, RiskFlag, RiskTier};
use crate::logic::dataset::StudentRecord;
use crate::logic::features::DerivedFeatures;

impl RiskInputs {
    pub fn from_student(record: &StudentRecord, features: &DerivedFeatures) -> Self {
        Self {
            avg_grade: features.avg_grade,
            grade_trend: features.grade_trend,
            absences: record.absences,
            studytime: record.studytime,
            engagement: features.engagement,
            lifestyle_risk: features.lifestyle_risk,
        }
    }
}

/// Evaluate the whole rule table for one student
pub fn assess(inputs: &RiskInputs) -> RiskAssessment {
    let mut flags = Vec::new();
    let mut fired: Vec<RuleGroup> = Vec::new();

    for rule in RISK_RULES {
        if rule.group.is_exclusive() && fired.contains(&rule.group) {
            continue;
        }
        if (rule.predicate)(inputs) {
            fired.push(rule.group);
            flags.push(RiskFlag {
                label: rule.label.to_string(),
                tier: rule.tier,
                severity: rule.severity,
            });
        }
    }

    if flags.is_empty() {
        return RiskAssessment {
            flags: vec![RiskFlag {
                label: NO_RISK_FLAG.to_string(),
                tier: FlagTier::Clear,
                severity: 0.0,
            }],
            risk_score: 0.0,
            tier: RiskTier::Low,
        };
    }

    let risk_score = flags.iter().map(|f| f.severity).sum::<f64>() / flags.len() as f64;
    RiskAssessment {
        flags,
        risk_score,
        tier: RiskTier::from_score(risk_score),
    }
}

pub fn assess_student(record: &StudentRecord, features: &DerivedFeatures) -> RiskAssessment {
    assess(&RiskInputs::from_student(record, features))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy() -> RiskInputs {
        RiskInputs {
            avg_grade: 14.0,
            grade_trend: 1.0,
            absences: Some(0.0),
            studytime: Some(3.0),
            engagement: 0.6,
            lifestyle_risk: 0.3,
        }
    }

    #[test]
    fn test_no_rule_gives_clear_assessment() {
        let result = assess(&healthy());
        assert_eq!(result.risk_score, 0.0);
        assert_eq!(result.flag_labels(), vec!["No major risks detected".to_string()]);
        assert_eq!(result.tier, RiskTier::Low);
        assert!(result.is_clear());
    }

    #[test]
    fn test_failing_alone_scores_exactly_point_95() {
        let inputs = RiskInputs {
            avg_grade: 7.0,
            grade_trend: 0.0,
            studytime: Some(3.0),
            ..healthy()
        };
        let result = assess(&inputs);
        assert_eq!(result.flag_labels(), vec!["Critical – Failing grades".to_string()]);
        assert_eq!(result.flags[0].severity, 0.95);
        assert_eq!(result.risk_score, 0.95);
        assert_eq!(result.tier, RiskTier::High);
    }

    #[test]
    fn test_low_grades_alone() {
        let inputs = RiskInputs {
            avg_grade: 9.0,
            grade_trend: 0.0,
            studytime: Some(3.0),
            ..healthy()
        };
        let result = assess(&inputs);
        assert_eq!(result.flag_labels(), vec!["Moderate – Low grades (<10)".to_string()]);
        assert_eq!(result.risk_score, 0.70);
        assert_eq!(result.tier, RiskTier::Medium);
    }

    #[test]
    fn test_grade_group_is_first_match_only() {
        // Failing and declining: only the failing flag from the grade group
        let inputs = RiskInputs {
            avg_grade: 4.0,
            grade_trend: -5.0,
            studytime: Some(3.0),
            ..healthy()
        };
        let result = assess(&inputs);
        assert!(result.has_flag("Critical – Failing grades"));
        assert!(!result.has_flag("Severe – Declining grades"));
        assert!(!result.has_flag("Moderate – Sharp grade decline"));
    }

    #[test]
    fn test_groups_fire_independently() {
        let inputs = RiskInputs {
            avg_grade: 9.0,
            grade_trend: -2.0,
            absences: Some(30.0),
            studytime: Some(1.0),
            engagement: 0.1,
            lifestyle_risk: 0.8,
        };
        let result = assess(&inputs);
        assert_eq!(
            result.flag_labels(),
            vec![
                "Severe – Declining grades".to_string(),
                "Critical – Chronic absenteeism".to_string(),
                "Critical – No study + failing".to_string(),
                "Moderate – Very low engagement".to_string(),
                "Moderate – High lifestyle risk".to_string(),
            ]
        );
        let expected = (0.85 + 0.90 + 0.88 + 0.70 + 0.65) / 5.0;
        assert!((result.risk_score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_absence_thresholds_are_strict() {
        let at = |a: f64| {
            assess(&RiskInputs {
                absences: Some(a),
                ..healthy()
            })
        };
        assert!(at(8.0).is_clear());
        assert!(at(9.0).has_flag("Low – Notable absences"));
        assert!(at(16.0).has_flag("Moderate – High absences"));
        assert!(at(25.0).has_flag("Moderate – High absences"));
        assert!(at(26.0).has_flag("Critical – Chronic absenteeism"));
    }

    #[test]
    fn test_sharp_decline_above_low_grades() {
        let result = assess(&RiskInputs {
            avg_grade: 13.0,
            grade_trend: -4.0,
            ..healthy()
        });
        assert_eq!(result.flag_labels(), vec!["Moderate – Sharp grade decline".to_string()]);
        assert_eq!(result.risk_score, 0.75);
    }

    #[test]
    fn test_declining_with_absences() {
        let result = assess(&RiskInputs {
            avg_grade: 13.0,
            grade_trend: -2.0,
            absences: Some(6.0),
            ..healthy()
        });
        assert_eq!(result.flag_labels(), vec!["Low – Declining + absences".to_string()]);
        assert_eq!(result.tier, RiskTier::Medium);
    }

    #[test]
    fn test_minimal_study() {
        let result = assess(&RiskInputs {
            avg_grade: 11.0,
            studytime: Some(2.0),
            ..healthy()
        });
        assert_eq!(result.flag_labels(), vec!["Moderate – Minimal study".to_string()]);
    }

    #[test]
    fn test_missing_cells_never_fire() {
        let result = assess(&RiskInputs {
            avg_grade: 11.0,
            grade_trend: -2.0,
            absences: None,
            studytime: None,
            ..healthy()
        });
        assert!(result.is_clear());
    }

    #[test]
    fn test_score_within_unit_range() {
        for avg in [0.0, 5.0, 9.0, 11.0, 20.0] {
            for trend in [-10.0, -2.0, 0.0, 5.0] {
                let r = assess(&RiskInputs {
                    avg_grade: avg,
                    grade_trend: trend,
                    absences: Some(40.0),
                    studytime: Some(0.0),
                    engagement: 0.0,
                    lifestyle_risk: 1.0,
                });
                assert!((0.0..=1.0).contains(&r.risk_score));
            }
        }
    }
}
