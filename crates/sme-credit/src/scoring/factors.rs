use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named contributors reported alongside every credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorKind {
    BusinessAge,
    Revenue,
    EmployeeCount,
    BusinessType,
    Verification,
}

impl FactorKind {
    pub const ALL: [FactorKind; 5] = [
        FactorKind::BusinessAge,
        FactorKind::Revenue,
        FactorKind::EmployeeCount,
        FactorKind::BusinessType,
        FactorKind::Verification,
    ];

    /// Display weight in basis points; the five weights total 10 000.
    pub const fn weight_basis_points(self) -> u16 {
        match self {
            FactorKind::BusinessAge => 2_000,
            FactorKind::Revenue => 3_000,
            FactorKind::EmployeeCount => 2_000,
            FactorKind::BusinessType => 1_500,
            FactorKind::Verification => 1_500,
        }
    }

    pub fn weight(self) -> f64 {
        f64::from(self.weight_basis_points()) / 10_000.0
    }

    pub const fn label(self) -> &'static str {
        match self {
            FactorKind::BusinessAge => "Business age",
            FactorKind::Revenue => "Monthly revenue",
            FactorKind::EmployeeCount => "Employee count",
            FactorKind::BusinessType => "Business type",
            FactorKind::Verification => "Verification",
        }
    }
}

/// Sub-score for a single factor, 0 to 100, with its fixed display weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub score: u8,
    pub weight: f64,
}

impl FactorScore {
    pub(crate) fn new(kind: FactorKind, score: u8) -> Self {
        Self {
            score: score.min(100),
            weight: kind.weight(),
        }
    }
}

/// Explanation of a score, keyed by factor.
///
/// The weights are presentation metadata for progress bars. They are not used to compute
/// the overall score, which comes from the point buckets in `rules`; replacing that with a
/// weighted sum of these sub-scores would change every published score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FactorBreakdown(BTreeMap<FactorKind, FactorScore>);

impl FactorBreakdown {
    pub(crate) fn from_scores(scores: [(FactorKind, u8); 5]) -> Self {
        Self(
            scores
                .into_iter()
                .map(|(kind, score)| (kind, FactorScore::new(kind, score)))
                .collect(),
        )
    }

    pub fn get(&self, kind: FactorKind) -> Option<&FactorScore> {
        self.0.get(&kind)
    }

    /// Sub-score for `kind`, zero when absent.
    pub fn score(&self, kind: FactorKind) -> u8 {
        self.get(kind).map(|factor| factor.score).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FactorKind, &FactorScore)> {
        self.0.iter().map(|(kind, score)| (*kind, score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_weight_basis_points(&self) -> u32 {
        self.0
            .keys()
            .map(|kind| u32::from(kind.weight_basis_points()))
            .sum()
    }
}

impl<'de> Deserialize<'de> for FactorBreakdown {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<FactorKind, FactorScore>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(kind, factor)| (kind, FactorScore::new(kind, factor.score)))
                .collect(),
        ))
    }
}
