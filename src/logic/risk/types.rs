//! Risk Types
//!
//! Core types cho risk scoring. KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// FLAG TIER
// ============================================================================

/// Severity tier printed in front of every flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagTier {
    Critical,
    Severe,
    Moderate,
    Low,
    /// Synthetic "no risk" flag
    Clear,
}

impl FlagTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagTier::Critical => "critical",
            FlagTier::Severe => "severe",
            FlagTier::Moderate => "moderate",
            FlagTier::Low => "low",
            FlagTier::Clear => "clear",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            FlagTier::Critical | FlagTier::Severe => "🔴",
            FlagTier::Moderate => "🟠",
            FlagTier::Low => "🟡",
            FlagTier::Clear => "✅",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FlagTier::Critical | FlagTier::Severe => "#FF4444", // Red
            FlagTier::Moderate => "#FFA500",                   // Orange
            FlagTier::Low => "#FFD700",                        // Yellow
            FlagTier::Clear => "#90EE90",                      // Green
        }
    }
}

impl std::fmt::Display for FlagTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK TIER (aggregate)
// ============================================================================

pub const HIGH_RISK_ABOVE: f64 = 0.7;
pub const MEDIUM_RISK_FROM: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// > 0.7 high, >= 0.4 medium, else low
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_RISK_ABOVE {
            RiskTier::High
        } else if score >= MEDIUM_RISK_FROM {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::High => "HIGH RISK",
            RiskTier::Medium => "MEDIUM RISK",
            RiskTier::Low => "LOW RISK",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::High => "#FF4444",
            RiskTier::Medium => "#FFA500",
            RiskTier::Low => "#90EE90",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// FLAGS & ASSESSMENT
// ============================================================================

/// One triggered rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub label: String,
    pub tier: FlagTier,
    pub severity: f64,
}

/// Per-student result. Does not read or write cohort state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Triggered flags in rule-table order
    pub flags: Vec<RiskFlag>,
    /// Mean severity of triggered flags, 0 when none
    pub risk_score: f64,
    pub tier: RiskTier,
}

impl RiskAssessment {
    pub fn flag_labels(&self) -> Vec<String> {
        self.flags.iter().map(|f| f.label.clone()).collect()
    }

    pub fn has_flag(&self, label: &str) -> bool {
        self.flags.iter().any(|f| f.label == label)
    }

    pub fn is_clear(&self) -> bool {
        self.flags.iter().all(|f| f.tier == FlagTier::Clear)
    }
}
