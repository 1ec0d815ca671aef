//! End-to-end behavior of the assessment endpoints served by `credit_router`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use sme_credit::config::LendingConfig;
use sme_credit::lending::{credit_router, CreditAssessmentService};
use tower::ServiceExt;

fn router(config: LendingConfig) -> axum::Router {
    credit_router(Arc::new(CreditAssessmentService::new(&config)))
}

async fn post(router: axum::Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn registration_then_application_share_one_score() {
    let profile = json!({
        "establishedYear": 2021,
        "monthlyRevenue": "52000",
        "employeeCount": 12,
        "businessType": "trading",
        "isVerified": true
    });

    let (status, registration) = post(
        router(LendingConfig::default()),
        "/api/v1/credit/assessments",
        json!({ "profile": profile, "assessedAt": "2025-01-01T00:00:00Z" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, application) = post(
        router(LendingConfig::default()),
        "/api/v1/loan-applications/assessments",
        json!({
            "profile": profile,
            "application": {
                "loanType": "working_capital",
                "requestedAmount": 250000,
                "purpose": "Working capital for new branch"
            },
            "assessedAt": "2025-01-01T00:00:00Z"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // 600 + 80 (4 years) + 50 + 25 + 30
    assert_eq!(registration["creditScore"], 785);
    assert_eq!(application["aiAssessment"]["creditScore"], 785);
    assert_eq!(
        registration["record"]["factors"],
        application["aiAssessment"]["factors"]
    );
    assert_eq!(application["interestRate"], "8.5");
    assert_eq!(application["status"], "reviewing");
    assert_eq!(application["aiAssessment"]["riskLevel"], "low");
    assert_eq!(application["aiAssessment"]["recommendedAmount"], "250000.00");
}

#[tokio::test]
async fn configured_currency_and_validity_flow_through() {
    let config = LendingConfig {
        assessment_validity_days: 7,
        default_currency: "SAR".to_string(),
    };

    let (_, registration) = post(
        router(config.clone()),
        "/api/v1/credit/assessments",
        json!({ "profile": {}, "assessedAt": "2025-02-01T12:00:00Z" }),
    )
    .await;
    assert_eq!(registration["record"]["validUntil"], "2025-02-08T12:00:00Z");

    let (_, application) = post(
        router(config),
        "/api/v1/loan-applications/assessments",
        json!({
            "profile": {},
            "application": {
                "loanType": "community",
                "requestedAmount": "1000",
                "purpose": "Market stall"
            }
        }),
    )
    .await;
    assert_eq!(application["currency"], "SAR");
    assert_eq!(application["aiAssessment"]["recommendedAmount"], "0.00");
}

#[tokio::test]
async fn malformed_json_is_rejected_before_scoring() {
    let response = router(LendingConfig::default())
        .oneshot(
            Request::post("/api/v1/credit/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn blank_purpose_is_unprocessable() {
    let (status, body) = post(
        router(LendingConfig::default()),
        "/api/v1/loan-applications/assessments",
        json!({
            "profile": {},
            "application": {
                "loanType": "supply_chain",
                "requestedAmount": "5000",
                "purpose": ""
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "loan purpose is required");
}
