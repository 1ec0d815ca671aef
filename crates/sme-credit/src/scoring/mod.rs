//! Deterministic credit scoring for small-business profiles.

mod engine;
mod factors;
pub mod money;
mod profile;
pub(crate) mod rules;

#[cfg(test)]
mod tests;

pub use engine::{
    compute_credit_score, compute_credit_score_as_of, RiskLevel, ScoreBand, ScoreResult,
};
pub use factors::{FactorBreakdown, FactorKind, FactorScore};
pub use money::Money;
pub use profile::{BusinessProfile, STABLE_BUSINESS_TYPES};
pub use rules::{MAX_SCORE, MIN_SCORE};
