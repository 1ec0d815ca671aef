use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::config::LendingConfig;
use crate::lending::{credit_router, CreditAssessmentService, LoanApplicationRequest, LoanType};
use crate::scoring::{BusinessProfile, Money};

pub(super) fn lending_config() -> LendingConfig {
    LendingConfig {
        assessment_validity_days: 90,
        default_currency: "AED".to_string(),
    }
}

pub(super) fn service() -> CreditAssessmentService {
    CreditAssessmentService::new(&lending_config())
}

pub(super) fn assessed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Three-year-old services firm scoring 725 in 2025.
pub(super) fn services_profile() -> BusinessProfile {
    BusinessProfile {
        established_year: Some(2022),
        monthly_revenue: Some(Money::from_major(30_000)),
        employee_count: Some(8),
        business_type: Some("services".to_string()),
        is_verified: true,
    }
}

/// Established trading house scoring the 850 ceiling in 2025.
pub(super) fn trading_profile() -> BusinessProfile {
    BusinessProfile {
        established_year: Some(2015),
        monthly_revenue: Some(Money::from_major(150_000)),
        employee_count: Some(60),
        business_type: Some("Trading".to_string()),
        is_verified: true,
    }
}

/// Start-up with no track record; scores 600 at best.
pub(super) fn startup_profile() -> BusinessProfile {
    BusinessProfile {
        established_year: Some(2025),
        monthly_revenue: None,
        employee_count: Some(2),
        business_type: Some("technology".to_string()),
        is_verified: false,
    }
}

pub(super) fn loan_request(amount: i64) -> LoanApplicationRequest {
    LoanApplicationRequest {
        loan_type: LoanType::WorkingCapital,
        requested_amount: Some(Money::from_major(amount)),
        currency: None,
        purpose: "Inventory for Ramadan season".to_string(),
        repayment_term: Some(12),
    }
}

pub(super) fn router() -> axum::Router {
    credit_router(Arc::new(service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
