//! Strategy Mapper
//!
//! Static persona -> intervention lookup. Bảng cố định, không có logic.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::logic::persona::Persona;

/// Returned for a label the table does not know
pub const FALLBACK_STRATEGIES: &[&str] = &["Provide general support"];

static STRATEGY_MAP: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let entries: [(Persona, &'static [&'static str]); 12] = [
        (
            Persona::HighAchiever,
            &[
                "Advanced enrichment & projects",
                "Peer tutoring/mentoring roles",
                "Prepare for competitive higher education",
            ],
        ),
        (
            Persona::HighPotential,
            &[
                "Structured time management",
                "Firm deadlines with accountability",
                "One-on-one mentoring",
            ],
        ),
        (
            Persona::SolidPerformer,
            &[
                "Continue current support",
                "Gradually increase challenge",
                "Career planning guidance",
            ],
        ),
        (
            Persona::AttendanceIssues,
            &[
                "Parent-teacher meeting on attendance",
                "Identify barriers to attendance",
                "Attendance incentive plan",
            ],
        ),
        (
            Persona::AboveAverage,
            &[
                "Consistent encouragement",
                "Explore advanced topics",
                "Set stretch goals",
            ],
        ),
        (
            Persona::DevelopingLearner,
            &[
                "Scaffolded assignments",
                "Regular formative feedback",
                "Achievable milestone goals",
            ],
        ),
        (
            Persona::StrugglingButTrying,
            &[
                "Validate effort & progress",
                "Diagnostic skill assessments",
                "Targeted tutoring",
            ],
        ),
        (
            Persona::LowEngagement,
            &[
                "Investigate disengagement causes",
                "Connect to student interests",
                "Family involvement plan",
            ],
        ),
        (
            Persona::AtRiskAbsenteeism,
            &[
                "URGENT: Attendance intervention",
                "School counselor coordination",
                "Daily check-in system",
            ],
        ),
        (
            Persona::AtRiskDisengaged,
            &[
                "Priority parent conference",
                "Assign academic mentor",
                "Daily engagement monitoring",
            ],
        ),
        (
            Persona::AtRiskLifestyle,
            &[
                "Confidential health discussion",
                "Counselor/social worker referral",
                "Weekly progress check-ins",
            ],
        ),
        (
            Persona::Struggling,
            &[
                "Intensive tutoring program",
                "Daily learning check-ins",
                "Multi-agency support",
            ],
        ),
    ];

    entries
        .into_iter()
        .map(|(persona, strategies)| (persona.as_str(), strategies))
        .collect()
});

/// Strategies for a persona label; unknown labels get the fallback
pub fn strategies_for_label(label: &str) -> &'static [&'static str] {
    match STRATEGY_MAP.get(label) {
        Some(strategies) => strategies,
        None => {
            log::warn!("No strategy entry for persona '{}', using fallback", label);
            FALLBACK_STRATEGIES
        }
    }
}

pub fn strategies_for(persona: Persona) -> &'static [&'static str] {
    strategies_for_label(persona.as_str())
}

pub fn strategy_strings(persona: Persona) -> Vec<String> {
    strategies_for(persona).iter().map(|s| s.to_string()).collect()
}
