use metrics_exporter_prometheus::PrometheusHandle;
use sme_credit::config::AppConfig;
use sme_credit::error::AppError;
use sme_credit::lending::{CreditAssessmentService, LoanType};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Assessment service configured from the environment.
pub(crate) fn lending_service() -> Result<CreditAssessmentService, AppError> {
    let config = AppConfig::load()?;
    Ok(CreditAssessmentService::new(&config.lending))
}

pub(crate) fn parse_loan_type(raw: &str) -> Result<LoanType, String> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "working_capital" => Ok(LoanType::WorkingCapital),
        "supply_chain" => Ok(LoanType::SupplyChain),
        "community" => Ok(LoanType::Community),
        _ => Err(format!(
            "unknown loan type '{raw}' (expected working_capital, supply_chain or community)"
        )),
    }
}
