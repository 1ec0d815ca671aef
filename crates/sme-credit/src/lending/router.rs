use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::LoanApplicationRequest;
use super::policy;
use super::service::CreditAssessmentService;
use crate::scoring::{
    compute_credit_score_as_of, BusinessProfile, Money, ScoreBand, ScoreResult,
};

/// Router builder exposing the stateless scoring and assessment endpoints.
pub fn credit_router(service: Arc<CreditAssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/credit/score", post(score_handler))
        .route("/api/v1/credit/assessments", post(registration_handler))
        .route(
            "/api/v1/loan-applications/assessments",
            post(application_handler),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScoreRequest {
    #[serde(flatten)]
    pub(crate) profile: BusinessProfile,
    #[serde(default)]
    pub(crate) current_year: Option<i32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScoreResponse {
    #[serde(flatten)]
    pub(crate) result: ScoreResult,
    pub(crate) band: ScoreBand,
    pub(crate) available_credit: Money,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegistrationRequest {
    pub(crate) profile: BusinessProfile,
    #[serde(default)]
    pub(crate) assessed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApplicationRequest {
    pub(crate) profile: BusinessProfile,
    pub(crate) application: LoanApplicationRequest,
    #[serde(default)]
    pub(crate) assessed_at: Option<DateTime<Utc>>,
}

pub(crate) async fn score_handler(
    State(service): State<Arc<CreditAssessmentService>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    let result = match request.current_year {
        Some(year) => compute_credit_score_as_of(&request.profile, year),
        None => service.score(&request.profile, Utc::now()),
    };

    let body = ScoreResponse {
        band: result.band(),
        available_credit: policy::available_credit(Some(result.score)),
        result,
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

pub(crate) async fn registration_handler(
    State(service): State<Arc<CreditAssessmentService>>,
    axum::Json(request): axum::Json<RegistrationRequest>,
) -> Response {
    let now = request.assessed_at.unwrap_or_else(Utc::now);
    let assessment = service.assess_registration(&request.profile, now);
    (StatusCode::CREATED, axum::Json(assessment)).into_response()
}

pub(crate) async fn application_handler(
    State(service): State<Arc<CreditAssessmentService>>,
    axum::Json(request): axum::Json<ApplicationRequest>,
) -> Response {
    let now = request.assessed_at.unwrap_or_else(Utc::now);
    match service.assess_application(&request.profile, &request.application, now) {
        Ok(assessment) => (StatusCode::CREATED, axum::Json(assessment)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
