//! Point buckets for the credit score and its factor breakdown.
//!
//! Every threshold is a strict `>`: a value sitting exactly on a cut point falls into the
//! lower bucket.

use rust_decimal::Decimal;

use super::factors::{FactorBreakdown, FactorKind};
use super::money::Money;
use super::profile::BusinessProfile;

pub const BASE_SCORE: i32 = 600;
pub const MIN_SCORE: i32 = 300;
pub const MAX_SCORE: i32 = 850;

const POINTS_PER_YEAR: i32 = 20;
const MAX_AGE_POINTS: i32 = 100;
const STABLE_TYPE_POINTS: i32 = 30;
const VERIFIED_FACTOR_SCORE: u8 = 50;

fn revenue_above(revenue: Money, threshold: i64) -> bool {
    revenue.amount() > Decimal::from(threshold)
}

pub(crate) fn business_age_points(business_age: i32) -> i32 {
    business_age
        .saturating_mul(POINTS_PER_YEAR)
        .min(MAX_AGE_POINTS)
}

pub(crate) fn revenue_points(revenue: Money) -> i32 {
    if revenue_above(revenue, 100_000) {
        100
    } else if revenue_above(revenue, 50_000) {
        50
    } else if revenue_above(revenue, 20_000) {
        25
    } else {
        0
    }
}

pub(crate) fn employee_points(employees: u32) -> i32 {
    if employees > 50 {
        50
    } else if employees > 10 {
        25
    } else if employees > 5 {
        10
    } else {
        0
    }
}

pub(crate) fn business_type_points(profile: &BusinessProfile) -> i32 {
    if profile.has_stable_business_type() {
        STABLE_TYPE_POINTS
    } else {
        0
    }
}

/// Raw score before clamping into the published range.
pub(crate) fn raw_score(profile: &BusinessProfile, current_year: i32) -> i32 {
    BASE_SCORE
        + business_age_points(profile.business_age(current_year))
        + revenue_points(profile.revenue())
        + employee_points(profile.employees())
        + business_type_points(profile)
}

pub(crate) fn clamp_score(raw: i32) -> u16 {
    // bounds fit in u16
    raw.clamp(MIN_SCORE, MAX_SCORE) as u16
}

// Factor buckets differ from the score buckets on purpose: revenue at or below 20 000
// still reports 25 and a team of five or fewer still reports 10. Keep both tables as-is.

fn revenue_factor(revenue: Money) -> u8 {
    if revenue_above(revenue, 100_000) {
        100
    } else if revenue_above(revenue, 50_000) {
        50
    } else {
        25
    }
}

fn employee_factor(employees: u32) -> u8 {
    if employees > 50 {
        50
    } else if employees > 10 {
        25
    } else {
        10
    }
}

pub(crate) fn factor_breakdown(profile: &BusinessProfile, current_year: i32) -> FactorBreakdown {
    let age_points = business_age_points(profile.business_age(current_year)).max(0);
    let verification = if profile.is_verified {
        VERIFIED_FACTOR_SCORE
    } else {
        0
    };

    FactorBreakdown::from_scores([
        (FactorKind::BusinessAge, age_points as u8),
        (FactorKind::Revenue, revenue_factor(profile.revenue())),
        (FactorKind::EmployeeCount, employee_factor(profile.employees())),
        (FactorKind::BusinessType, business_type_points(profile) as u8),
        (FactorKind::Verification, verification),
    ])
}
