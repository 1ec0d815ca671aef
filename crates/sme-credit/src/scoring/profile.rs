use serde::{Deserialize, Deserializer, Serialize};

use super::money::Money;

/// Business categories treated as stable when scoring.
pub const STABLE_BUSINESS_TYPES: [&str; 3] = ["trading", "manufacturing", "services"];

/// Subset of a registered business consumed by credit scoring.
///
/// Every field is optional so partially completed registrations can be scored; missing
/// values count as their zero-equivalent rather than being rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    #[serde(default)]
    pub established_year: Option<i32>,
    #[serde(default)]
    pub monthly_revenue: Option<Money>,
    #[serde(default)]
    pub employee_count: Option<u32>,
    #[serde(default)]
    pub business_type: Option<String>,
    /// An explicit `null` reads as unverified.
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_verified: bool,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl BusinessProfile {
    /// Years in operation relative to `current_year`. A missing or zero founding year
    /// counts as founded this year.
    pub fn business_age(&self, current_year: i32) -> i32 {
        let established = self
            .established_year
            .filter(|year| *year != 0)
            .unwrap_or(current_year);
        current_year.saturating_sub(established)
    }

    pub fn revenue(&self) -> Money {
        self.monthly_revenue.unwrap_or(Money::ZERO)
    }

    pub fn employees(&self) -> u32 {
        self.employee_count.unwrap_or(0)
    }

    pub fn has_stable_business_type(&self) -> bool {
        self.business_type
            .as_deref()
            .map(|kind| {
                let kind = kind.trim();
                STABLE_BUSINESS_TYPES
                    .iter()
                    .any(|stable| stable.eq_ignore_ascii_case(kind))
            })
            .unwrap_or(false)
    }
}
