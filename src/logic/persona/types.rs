//! Persona Types
//!
//! Twelve fixed archetype labels. KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Persona {
    #[serde(rename = "High Achiever")]
    HighAchiever,
    #[serde(rename = "High Potential")]
    HighPotential,
    #[serde(rename = "Solid Performer")]
    SolidPerformer,
    #[serde(rename = "Attendance Issues")]
    AttendanceIssues,
    #[serde(rename = "Above Average")]
    AboveAverage,
    #[serde(rename = "Developing Learner")]
    DevelopingLearner,
    #[serde(rename = "Struggling but Trying")]
    StrugglingButTrying,
    #[serde(rename = "Low Engagement")]
    LowEngagement,
    #[serde(rename = "At-Risk (Absenteeism)")]
    AtRiskAbsenteeism,
    #[serde(rename = "At-Risk (Disengaged)")]
    AtRiskDisengaged,
    #[serde(rename = "At-Risk (Lifestyle)")]
    AtRiskLifestyle,
    #[serde(rename = "Struggling")]
    Struggling,
}

impl Persona {
    pub const ALL: [Persona; 12] = [
        Persona::HighAchiever,
        Persona::HighPotential,
        Persona::SolidPerformer,
        Persona::AttendanceIssues,
        Persona::AboveAverage,
        Persona::DevelopingLearner,
        Persona::StrugglingButTrying,
        Persona::LowEngagement,
        Persona::AtRiskAbsenteeism,
        Persona::AtRiskDisengaged,
        Persona::AtRiskLifestyle,
        Persona::Struggling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::HighAchiever => "High Achiever",
            Persona::HighPotential => "High Potential",
            Persona::SolidPerformer => "Solid Performer",
            Persona::AttendanceIssues => "Attendance Issues",
            Persona::AboveAverage => "Above Average",
            Persona::DevelopingLearner => "Developing Learner",
            Persona::StrugglingButTrying => "Struggling but Trying",
            Persona::LowEngagement => "Low Engagement",
            Persona::AtRiskAbsenteeism => "At-Risk (Absenteeism)",
            Persona::AtRiskDisengaged => "At-Risk (Disengaged)",
            Persona::AtRiskLifestyle => "At-Risk (Lifestyle)",
            Persona::Struggling => "Struggling",
        }
    }

    /// Badge shown next to the label in text reports
    pub fn badge(&self) -> &'static str {
        match self {
            Persona::HighAchiever => "🌟",
            Persona::HighPotential => "💎",
            Persona::SolidPerformer => "✅",
            Persona::AttendanceIssues | Persona::LowEngagement => "⚠️",
            Persona::AboveAverage => "📈",
            Persona::DevelopingLearner => "🔄",
            Persona::StrugglingButTrying => "💪",
            Persona::AtRiskAbsenteeism
            | Persona::AtRiskDisengaged
            | Persona::AtRiskLifestyle
            | Persona::Struggling => "🔴",
        }
    }

    pub fn from_label(label: &str) -> Option<Persona> {
        Persona::ALL.iter().copied().find(|p| p.as_str() == label)
    }

    pub fn is_at_risk(&self) -> bool {
        matches!(
            self,
            Persona::AtRiskAbsenteeism
                | Persona::AtRiskDisengaged
                | Persona::AtRiskLifestyle
                | Persona::Struggling
        )
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate cohort statistics the decision table reads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CohortStats {
    pub avg_grade: f64,
    pub engagement: f64,
    pub discipline: f64,
    /// `None` when no member had a known absence count
    pub absences: Option<f64>,
    pub lifestyle_risk: f64,
}
