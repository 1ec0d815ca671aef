//! Scoring scenarios exercised through the public crate surface, the way registration and
//! application handlers consume it.

use sme_credit::scoring::{
    compute_credit_score, compute_credit_score_as_of, BusinessProfile, FactorKind, Money,
    RiskLevel,
};

const YEAR: i32 = 2026;

fn profile(
    established_year: Option<i32>,
    monthly_revenue: &str,
    employee_count: u32,
    business_type: Option<&str>,
    is_verified: bool,
) -> BusinessProfile {
    BusinessProfile {
        established_year,
        monthly_revenue: Some(Money::parse_lenient(monthly_revenue)),
        employee_count: Some(employee_count),
        business_type: business_type.map(str::to_string),
        is_verified,
    }
}

#[test]
fn literal_reference_scenarios() {
    let cases = [
        (profile(Some(YEAR), "0", 1, Some("technology"), false), 600, RiskLevel::High),
        (
            profile(Some(YEAR - 10), "150000", 60, Some("trading"), true),
            850,
            RiskLevel::Low,
        ),
        (
            profile(Some(YEAR - 3), "30000", 8, Some("services"), false),
            725,
            RiskLevel::Medium,
        ),
    ];

    for (input, score, risk) in cases {
        let result = compute_credit_score_as_of(&input, YEAR);
        assert_eq!(result.score, score, "{input:?}");
        assert_eq!(result.risk_level, risk, "{input:?}");
    }
}

#[test]
fn permissive_inputs_never_fail() {
    let garbage = profile(Some(YEAR - 1), "abc", 3, None, false);
    let zero = profile(Some(YEAR - 1), "0", 3, Some("unknown"), false);

    assert_eq!(
        compute_credit_score_as_of(&garbage, YEAR),
        compute_credit_score_as_of(&zero, YEAR)
    );
}

#[test]
fn profile_round_trips_from_registration_json() {
    let payload = r#"{
        "establishedYear": 2019,
        "monthlyRevenue": "85000.00",
        "employeeCount": 14,
        "businessType": "Manufacturing",
        "isVerified": true
    }"#;
    let parsed: BusinessProfile = serde_json::from_str(payload).expect("profile parses");
    let result = compute_credit_score_as_of(&parsed, YEAR);

    // 600 + 100 (7 years, capped) + 50 + 25 + 30
    assert_eq!(result.score, 805);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.factors.score(FactorKind::Revenue), 50);
    assert_eq!(result.factors.score(FactorKind::EmployeeCount), 25);
    assert_eq!(result.factors.score(FactorKind::Verification), 50);
}

#[test]
fn current_year_default_is_stable_within_a_call_pair() {
    let input = profile(None, "21000", 6, Some("services"), true);
    let first = compute_credit_score(&input);
    let second = compute_credit_score(&input);

    assert_eq!(first, second);
    // no founding year means no age credit regardless of the clock
    assert_eq!(first.score, 600 + 25 + 10 + 30);
}
