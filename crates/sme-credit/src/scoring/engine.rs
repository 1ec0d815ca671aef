use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use super::factors::FactorBreakdown;
use super::profile::BusinessProfile;
use super::rules;

/// Qualitative risk bucket derived from a credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn from_score(score: u16) -> Self {
        if score >= 750 {
            RiskLevel::Low
        } else if score >= 650 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Customer-facing rating shown next to the score on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub const fn from_score(score: u16) -> Self {
        if score >= 750 {
            ScoreBand::Excellent
        } else if score >= 650 {
            ScoreBand::Good
        } else if score >= 550 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::Poor => "Poor",
        }
    }
}

/// Outcome of scoring a business profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Always within 300..=850.
    pub score: u16,
    pub factors: FactorBreakdown,
    pub risk_level: RiskLevel,
}

impl ScoreResult {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Score a profile against the local calendar year.
pub fn compute_credit_score(profile: &BusinessProfile) -> ScoreResult {
    compute_credit_score_as_of(profile, Local::now().year())
}

/// Score a profile as if evaluated during `current_year`.
///
/// Total over every input: missing or malformed fields contribute nothing. The factor
/// breakdown is derived from the same inputs but is not folded back into `score`.
pub fn compute_credit_score_as_of(profile: &BusinessProfile, current_year: i32) -> ScoreResult {
    let score = rules::clamp_score(rules::raw_score(profile, current_year));

    ScoreResult {
        score,
        factors: rules::factor_breakdown(profile, current_year),
        risk_level: RiskLevel::from_score(score),
    }
}
