use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Fixed-point monetary amount in the application currency (AED unless stated otherwise).
///
/// Amounts arrive as decimal strings or JSON numbers. Inputs that cannot be read as a
/// number collapse to zero instead of failing, so a brand-new business without revenue
/// figures still scores. Digit separators such as `1_000_000` are not numbers. Values
/// beyond the decimal range saturate at `Decimal::MAX` / `Decimal::MIN`. Use
/// [`Money::parse_strict`] where a value is mandatory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn from_major(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Read an amount, treating blank or malformed text as zero.
    pub fn parse_lenient(raw: &str) -> Self {
        Self::parse_strict(raw).unwrap_or(Self::ZERO)
    }

    /// Read an amount, returning `None` for blank or malformed text.
    pub fn parse_strict(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.contains('_') {
            return None;
        }

        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok()
            .map(Self)
            .or_else(|| trimmed.parse::<f64>().ok().and_then(Self::from_float))
    }

    /// NaN is rejected; magnitudes past the decimal range saturate.
    fn from_float(value: f64) -> Option<Self> {
        if value.is_nan() {
            return None;
        }

        let amount = Decimal::from_f64(value).unwrap_or(if value >= 1.0 {
            Decimal::MAX
        } else if value <= -1.0 {
            Decimal::MIN
        } else {
            Decimal::ZERO
        });
        Some(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(raw) => Self::parse_strict(raw),
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Some(Self(Decimal::from(int)))
                } else if let Some(uint) = number.as_u64() {
                    Some(Self(Decimal::from(uint)))
                } else {
                    number.as_f64().and_then(Self::from_float)
                }
            }
            _ => None,
        }
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money(self.0.saturating_mul(Decimal::from(rhs)))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Money::from_json(&raw).unwrap_or(Money::ZERO))
    }
}

/// Deserializer for mandatory amounts that must not be coerced to zero.
pub fn deserialize_strict<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(Money::from_json(&raw))
}
