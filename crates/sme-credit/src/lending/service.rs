use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Datelike, Duration, Utc};
use tracing::{debug, info};

use super::domain::{
    AiAssessment, ApplicationAssessment, ApplicationNumber, AssessmentType,
    CreditAssessmentRecord, LoanApplicationRequest, RegistrationAssessment,
};
use super::policy;
use crate::config::LendingConfig;
use crate::scoring::{compute_credit_score_as_of, BusinessProfile, ScoreResult};

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_number(now: DateTime<Utc>) -> ApplicationNumber {
    let sequence = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationNumber(format!("CF{}{sequence}", now.timestamp_millis()))
}

/// Runs the registration and loan-application assessments on top of the shared scorer.
#[derive(Debug, Clone)]
pub struct CreditAssessmentService {
    validity: Duration,
    default_currency: String,
}

impl CreditAssessmentService {
    pub fn new(config: &LendingConfig) -> Self {
        Self {
            validity: Duration::days(i64::from(config.assessment_validity_days)),
            default_currency: config.default_currency.clone(),
        }
    }

    /// Score a profile as of the calendar year of `now`.
    pub fn score(&self, profile: &BusinessProfile, now: DateTime<Utc>) -> ScoreResult {
        compute_credit_score_as_of(profile, now.year())
    }

    /// Initial assessment stored when a business registers.
    pub fn assess_registration(
        &self,
        profile: &BusinessProfile,
        now: DateTime<Utc>,
    ) -> RegistrationAssessment {
        let result = self.score(profile, now);
        debug!(score = result.score, risk = result.risk_level.label(), "registration scored");

        RegistrationAssessment {
            credit_score: result.score,
            risk_level: result.risk_level,
            record: CreditAssessmentRecord {
                assessment_type: AssessmentType::AiScoring,
                score: result.score,
                risk_level: result.risk_level,
                factors: result.factors,
                recommendations: Vec::new(),
                created_at: now,
                valid_until: now + self.validity,
            },
        }
    }

    /// Assess a submitted loan application for the applicant's profile.
    pub fn assess_application(
        &self,
        profile: &BusinessProfile,
        request: &LoanApplicationRequest,
        now: DateTime<Utc>,
    ) -> Result<ApplicationAssessment, AssessmentError> {
        let requested_amount = request
            .requested_amount
            .filter(|amount| amount.is_positive())
            .ok_or(AssessmentError::InvalidRequestedAmount)?;

        if request.purpose.trim().is_empty() {
            return Err(AssessmentError::MissingPurpose);
        }

        let currency = request
            .currency
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_ascii_uppercase)
            .unwrap_or_else(|| self.default_currency.clone());

        let result = self.score(profile, now);
        let score = result.score;

        let assessment = ApplicationAssessment {
            application_number: next_application_number(now),
            loan_type: request.loan_type,
            requested_amount,
            currency,
            status: policy::status_for(score),
            interest_rate: policy::interest_rate_for(score),
            ai_assessment: AiAssessment {
                credit_score: score,
                risk_level: result.risk_level,
                recommended_amount: policy::recommended_amount(
                    requested_amount,
                    profile.revenue(),
                ),
                factors: result.factors,
                confidence: policy::confidence_for(score),
            },
            assessed_at: now,
        };

        info!(
            application = %assessment.application_number,
            score,
            status = assessment.status.label(),
            "loan application assessed"
        );

        Ok(assessment)
    }
}

/// Reasons a loan application cannot be assessed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("requested amount must be a positive decimal")]
    InvalidRequestedAmount,
    #[error("loan purpose is required")]
    MissingPurpose,
}
