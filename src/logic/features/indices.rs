//! Behavioural Indices
//!
//! Six bounded [0, 1] indices built from fixed weighted combinations of raw
//! fields. A missing input (blank cell in a present column) or an undefined
//! result makes the whole index fall back to its constant.

use crate::logic::dataset::StudentRecord;

// ============================================================================
// WEIGHTS
// ============================================================================

pub const DISCIPLINE_STUDY_WEIGHT: f64 = 0.35;
pub const DISCIPLINE_TRAVEL_WEIGHT: f64 = 0.25;
pub const DISCIPLINE_ATTENDANCE_WEIGHT: f64 = 0.40;

pub const ENGAGEMENT_ACTIVITIES_WEIGHT: f64 = 0.25;
pub const ENGAGEMENT_HIGHER_WEIGHT: f64 = 0.20;
pub const ENGAGEMENT_SCHOOLSUP_WEIGHT: f64 = 0.20;
pub const ENGAGEMENT_INTERNET_WEIGHT: f64 = 0.20;
pub const ENGAGEMENT_PAID_WEIGHT: f64 = 0.15;

pub const FAMILY_EDU_WEIGHT: f64 = 0.35;
pub const FAMILY_SUPPORT_WEIGHT: f64 = 0.30;
pub const FAMILY_RELATION_WEIGHT: f64 = 0.35;

pub const LIFESTYLE_GOOUT_WEIGHT: f64 = 0.30;
pub const LIFESTYLE_DALC_WEIGHT: f64 = 0.35;
pub const LIFESTYLE_WALC_WEIGHT: f64 = 0.35;

pub const SES_APART_WEIGHT: f64 = 0.5;
pub const SES_PARENT_EDU_WEIGHT: f64 = 0.25;

// ============================================================================
// FALLBACKS
// ============================================================================

pub const DISCIPLINE_FALLBACK: f64 = 0.5;
pub const ENGAGEMENT_FALLBACK: f64 = 0.3;
pub const FAMILY_SUPPORT_FALLBACK: f64 = 0.4;
pub const LIFESTYLE_FALLBACK: f64 = 0.2;
pub const HEALTH_FALLBACK: f64 = 0.4;
pub const LOW_SES_FALLBACK: f64 = 0.3;

// ============================================================================
// SCALES
// ============================================================================

const STUDY_SCALE: f64 = 4.0;
const TRAVEL_SCALE: f64 = 4.0;
const EDU_SCALE: f64 = 4.0;
const FIVE_POINT_SCALE: f64 = 5.0;

/// Dataset-wide values some indices are relative to
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetContext {
    pub max_absences: Option<f64>,
}

/// Clamp into [0, 1], or the fallback when missing / not finite
fn bounded(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => fallback,
    }
}

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

pub fn study_discipline(record: &StudentRecord, ctx: &DatasetContext) -> f64 {
    let value = (|| {
        let studytime = record.studytime?;
        let traveltime = record.traveltime?;
        let absences = record.absences?;
        let max_absences = ctx.max_absences?;

        Some(
            (studytime / STUDY_SCALE) * DISCIPLINE_STUDY_WEIGHT
                + (1.0 - traveltime / TRAVEL_SCALE) * DISCIPLINE_TRAVEL_WEIGHT
                + (1.0 - absences / (max_absences + 1.0)) * DISCIPLINE_ATTENDANCE_WEIGHT,
        )
    })();

    bounded(value, DISCIPLINE_FALLBACK)
}

pub fn engagement(record: &StudentRecord) -> f64 {
    let value = indicator(record.activities) * ENGAGEMENT_ACTIVITIES_WEIGHT
        + indicator(record.higher) * ENGAGEMENT_HIGHER_WEIGHT
        + indicator(record.schoolsup) * ENGAGEMENT_SCHOOLSUP_WEIGHT
        + indicator(record.internet) * ENGAGEMENT_INTERNET_WEIGHT
        + indicator(record.paid) * ENGAGEMENT_PAID_WEIGHT;

    bounded(Some(value), ENGAGEMENT_FALLBACK)
}

pub fn family_support(record: &StudentRecord) -> f64 {
    let value = (|| {
        let medu = record.medu?;
        let fedu = record.fedu?;
        let famrel = record.famrel?;

        Some(
            (medu + fedu) / (2.0 * EDU_SCALE) * FAMILY_EDU_WEIGHT
                + indicator(record.famsup) * FAMILY_SUPPORT_WEIGHT
                + (famrel / FIVE_POINT_SCALE) * FAMILY_RELATION_WEIGHT,
        )
    })();

    bounded(value, FAMILY_SUPPORT_FALLBACK)
}

pub fn lifestyle_risk(record: &StudentRecord) -> f64 {
    let value = (|| {
        Some(
            (record.goout? / FIVE_POINT_SCALE) * LIFESTYLE_GOOUT_WEIGHT
                + (record.dalc? / FIVE_POINT_SCALE) * LIFESTYLE_DALC_WEIGHT
                + (record.walc? / FIVE_POINT_SCALE) * LIFESTYLE_WALC_WEIGHT,
        )
    })();

    bounded(value, LIFESTYLE_FALLBACK)
}

/// Health deficit: higher means worse health
pub fn health_score(record: &StudentRecord) -> f64 {
    let value = record.health.map(|h| 1.0 - h / FIVE_POINT_SCALE);
    bounded(value, HEALTH_FALLBACK)
}

pub fn low_ses(record: &StudentRecord) -> f64 {
    let value = (|| {
        let medu = record.medu?;
        let fedu = record.fedu?;

        Some(
            indicator(record.parents_apart) * SES_APART_WEIGHT
                + (1.0 - medu / EDU_SCALE) * SES_PARENT_EDU_WEIGHT
                + (1.0 - fedu / EDU_SCALE) * SES_PARENT_EDU_WEIGHT,
        )
    })();

    bounded(value, LOW_SES_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::dataset::Grades;

    fn record() -> StudentRecord {
        StudentRecord {
            source_row: 0,
            grades: Grades { g1: 10.0, g2: 10.0, g3: 10.0 },
            absences: Some(0.0),
            studytime: Some(2.0),
            traveltime: Some(1.0),
            activities: false,
            higher: false,
            schoolsup: false,
            internet: false,
            paid: false,
            famsup: false,
            medu: Some(2.0),
            fedu: Some(2.0),
            famrel: Some(3.0),
            goout: Some(2.0),
            dalc: Some(1.0),
            walc: Some(1.0),
            health: Some(3.0),
            parents_apart: false,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_record_values() {
        let r = record();
        let ctx = DatasetContext { max_absences: Some(0.0) };

        // 0.5*0.35 + 0.75*0.25 + 1.0*0.40
        assert!(close(study_discipline(&r, &ctx), 0.7625));
        assert!(close(engagement(&r), 0.0));
        // 0.5*0.35 + 0 + 0.6*0.35
        assert!(close(family_support(&r), 0.385));
        // 0.4*0.30 + 0.2*0.35 + 0.2*0.35
        assert!(close(lifestyle_risk(&r), 0.26));
        assert!(close(health_score(&r), 0.4));
        assert!(close(low_ses(&r), 0.25));
    }

    #[test]
    fn test_engagement_weights_sum_to_one() {
        let mut r = record();
        r.activities = true;
        r.higher = true;
        r.schoolsup = true;
        r.internet = true;
        r.paid = true;
        assert!(close(engagement(&r), 1.0));

        let mut r = record();
        r.internet = true;
        r.paid = true;
        assert!(close(engagement(&r), 0.35));
    }

    #[test]
    fn test_discipline_is_dataset_relative() {
        let mut r = record();
        r.absences = Some(10.0);
        let low_max = study_discipline(&r, &DatasetContext { max_absences: Some(10.0) });
        let high_max = study_discipline(&r, &DatasetContext { max_absences: Some(100.0) });
        assert!(high_max > low_max);
    }

    #[test]
    fn test_missing_inputs_use_fallbacks() {
        let mut r = record();
        r.absences = None;
        r.medu = None;
        r.goout = None;
        r.health = None;
        let ctx = DatasetContext { max_absences: Some(5.0) };

        assert_eq!(study_discipline(&r, &ctx), DISCIPLINE_FALLBACK);
        assert_eq!(family_support(&r), FAMILY_SUPPORT_FALLBACK);
        assert_eq!(lifestyle_risk(&r), LIFESTYLE_FALLBACK);
        assert_eq!(health_score(&r), HEALTH_FALLBACK);
        assert_eq!(low_ses(&r), LOW_SES_FALLBACK);
    }

    #[test]
    fn test_parents_apart_raises_low_ses() {
        let mut r = record();
        r.parents_apart = true;
        assert!(close(low_ses(&r), 0.75));
    }

    #[test]
    fn test_zero_denominator_uses_fallback() {
        let r = record();
        let ctx = DatasetContext { max_absences: Some(-1.0) };
        assert_eq!(study_discipline(&r, &ctx), DISCIPLINE_FALLBACK);
    }
}
