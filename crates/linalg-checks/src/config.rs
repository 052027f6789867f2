use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Options shared by the `*_with` variants of the checks.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckConfig {
    #[serde(default)]
    pub dominance: DominanceKind,

    /// Reject NaN and infinite entries instead of letting them propagate.
    #[serde(default)]
    pub require_finite: bool,
}

/// Row comparison used by the diagonal dominance check.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DominanceKind {
    /// `|a_ii| > sum_{j != i} |a_ij|` for every row.
    #[default]
    Strict,
    /// `|a_ii| >= sum_{j != i} |a_ij|` for every row.
    Weak,
}

impl DominanceKind {
    /// Compare one row's `|a_ii|` against the sum of its off-diagonal magnitudes.
    pub fn holds(self, diag: f64, offdiag_sum: f64) -> bool {
        match self {
            DominanceKind::Strict => diag > offdiag_sum,
            DominanceKind::Weak => diag >= offdiag_sum,
        }
    }
}

impl FromStr for DominanceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(DominanceKind::Strict),
            "weak" => Ok(DominanceKind::Weak),
            _ => Err(format!(
                "Unknown dominance kind: {}. Expected `strict` or `weak`",
                s
            )),
        }
    }
}

impl CheckConfig {
    /// Build a config from an explicit comparison and finiteness requirement.
    pub fn new(dominance: DominanceKind, require_finite: bool) -> Self {
        Self {
            dominance,
            require_finite,
        }
    }
}
