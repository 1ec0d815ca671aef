//! Registration and loan-application assessment built on the shared credit scorer.
//!
//! Both flows score the applicant through `scoring::compute_credit_score_as_of` and then
//! apply the lending policy (validity window, recommended amount, status, pricing).

pub mod domain;
pub mod policy;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AiAssessment, ApplicationAssessment, ApplicationNumber, ApplicationStatus, AssessmentType,
    Confidence, CreditAssessmentRecord, InterestRate, LoanApplicationRequest, LoanType,
    RegistrationAssessment,
};
pub use router::credit_router;
pub use service::{AssessmentError, CreditAssessmentService};
