use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

use crate::scoring::money::{self, Money};
use crate::scoring::{FactorBreakdown, RiskLevel};

/// Identifier printed on loan applications, e.g. `CF1727366400000000001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationNumber(pub String);

impl fmt::Display for ApplicationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Financing products offered to applicants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    WorkingCapital,
    SupplyChain,
    Community,
}

/// Loan request as submitted through the application wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplicationRequest {
    pub loan_type: LoanType,
    /// `None` when the submitted amount could not be read as a decimal.
    #[serde(default, deserialize_with = "money::deserialize_strict")]
    pub requested_amount: Option<Money>,
    #[serde(default)]
    pub currency: Option<String>,
    pub purpose: String,
    /// Repayment term in months.
    #[serde(default)]
    pub repayment_term: Option<u16>,
}

/// Lifecycle of a loan application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Reviewing,
    Approved,
    Rejected,
    Funded,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Funded => "funded",
        }
    }
}

/// How much weight underwriters should place on the automated assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
}

/// Annual interest rate in percent, carried as a decimal such as `12.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct InterestRate(Decimal);

impl InterestRate {
    pub fn from_tenths(tenths: i64) -> Self {
        Self(Decimal::new(tenths, 1))
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for InterestRate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Origin of a stored credit assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentType {
    AiScoring,
}

/// Credit assessment captured when a business registers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditAssessmentRecord {
    pub assessment_type: AssessmentType,
    pub score: u16,
    pub risk_level: RiskLevel,
    pub factors: FactorBreakdown,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

impl CreditAssessmentRecord {
    pub fn is_current(&self, at: DateTime<Utc>) -> bool {
        at >= self.created_at && at < self.valid_until
    }
}

/// Registration outcome: the record to store and the fields to copy onto the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationAssessment {
    pub credit_score: u16,
    pub risk_level: RiskLevel,
    pub record: CreditAssessmentRecord,
}

/// Automated assessment embedded in a loan application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAssessment {
    pub credit_score: u16,
    pub risk_level: RiskLevel,
    pub recommended_amount: Money,
    pub factors: FactorBreakdown,
    pub confidence: Confidence,
}

/// Application fields decided by the automated assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationAssessment {
    pub application_number: ApplicationNumber,
    pub loan_type: LoanType,
    pub requested_amount: Money,
    pub currency: String,
    pub status: ApplicationStatus,
    pub interest_rate: InterestRate,
    pub ai_assessment: AiAssessment,
    pub assessed_at: DateTime<Utc>,
}

impl ApplicationAssessment {
    pub fn summary(&self) -> String {
        format!(
            "application {} {} at {}% (score {}, {} risk, recommended {} {})",
            self.application_number,
            self.status.label(),
            self.interest_rate,
            self.ai_assessment.credit_score,
            self.ai_assessment.risk_level.label(),
            self.ai_assessment.recommended_amount,
            self.currency,
        )
    }
}
