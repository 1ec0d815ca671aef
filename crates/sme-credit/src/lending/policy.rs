use rust_decimal::Decimal;

use super::domain::{ApplicationStatus, Confidence, InterestRate};
use crate::scoring::money::Money;

/// Months of revenue a business may borrow against.
pub const REVENUE_MONTHS_CAP: u32 = 6;
/// Credit line granted per point above the score floor on the dashboard.
pub const CREDIT_PER_POINT: u32 = 5_000;

const REVIEW_THRESHOLD: u16 = 600;
const HIGH_CONFIDENCE_THRESHOLD: u16 = 650;
const PRIME_RATE_THRESHOLD: u16 = 750;
const STANDARD_RATE_THRESHOLD: u16 = 650;

/// Lesser of the requested amount and six months of revenue.
pub fn recommended_amount(requested: Money, monthly_revenue: Money) -> Money {
    requested.min(monthly_revenue * REVENUE_MONTHS_CAP)
}

pub fn confidence_for(score: u16) -> Confidence {
    if score >= HIGH_CONFIDENCE_THRESHOLD {
        Confidence::High
    } else {
        Confidence::Medium
    }
}

pub fn status_for(score: u16) -> ApplicationStatus {
    if score >= REVIEW_THRESHOLD {
        ApplicationStatus::Reviewing
    } else {
        ApplicationStatus::Rejected
    }
}

pub fn interest_rate_for(score: u16) -> InterestRate {
    if score >= PRIME_RATE_THRESHOLD {
        InterestRate::from_tenths(85)
    } else if score >= STANDARD_RATE_THRESHOLD {
        InterestRate::from_tenths(120)
    } else {
        InterestRate::from_tenths(155)
    }
}

/// Dashboard credit line for a stored score; zero when the user has not been scored.
pub fn available_credit(score: Option<u16>) -> Money {
    match score {
        Some(score) if score > 0 => {
            let points = i64::from(score) - 300;
            Money::new(Decimal::from(points * i64::from(CREDIT_PER_POINT)))
        }
        _ => Money::ZERO,
    }
}
