use crate::scoring::{BusinessProfile, Money};

pub(super) const YEAR: i32 = 2025;

pub(super) fn profile(
    established_year: Option<i32>,
    monthly_revenue: &str,
    employee_count: u32,
    business_type: &str,
    is_verified: bool,
) -> BusinessProfile {
    BusinessProfile {
        established_year,
        monthly_revenue: Some(Money::parse_lenient(monthly_revenue)),
        employee_count: Some(employee_count),
        business_type: Some(business_type.to_string()),
        is_verified,
    }
}

/// Profile whose only contribution comes from revenue.
pub(super) fn revenue_only(monthly_revenue: &str) -> BusinessProfile {
    BusinessProfile {
        monthly_revenue: Some(Money::parse_lenient(monthly_revenue)),
        ..BusinessProfile::default()
    }
}

/// Profile whose only contribution comes from headcount.
pub(super) fn employees_only(employee_count: u32) -> BusinessProfile {
    BusinessProfile {
        employee_count: Some(employee_count),
        ..BusinessProfile::default()
    }
}
