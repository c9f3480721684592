//! Aggregation methods understood by the zonal statistics primitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StatsError;

/// Method for aggregate statistics.
///
/// The canonical lowercase token (see [`StatsMethod::as_str`]) is what the
/// delegated command expects and what default output column names use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsMethod {
    Sum,
    Average,
    Median,
    Mode,
    Minimum,
    Maximum,
    Range,
    Stddev,
    Variance,
    Diversity,
}

impl StatsMethod {
    /// All methods in their documented order.
    pub const ALL: [StatsMethod; 10] = [
        StatsMethod::Sum,
        StatsMethod::Average,
        StatsMethod::Median,
        StatsMethod::Mode,
        StatsMethod::Minimum,
        StatsMethod::Maximum,
        StatsMethod::Range,
        StatsMethod::Stddev,
        StatsMethod::Variance,
        StatsMethod::Diversity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatsMethod::Sum => "sum",
            StatsMethod::Average => "average",
            StatsMethod::Median => "median",
            StatsMethod::Mode => "mode",
            StatsMethod::Minimum => "minimum",
            StatsMethod::Maximum => "maximum",
            StatsMethod::Range => "range",
            StatsMethod::Stddev => "stddev",
            StatsMethod::Variance => "variance",
            StatsMethod::Diversity => "diversity",
        }
    }

    /// Short human description, used by the `methods` listing.
    pub fn description(&self) -> &'static str {
        match self {
            StatsMethod::Sum => "Sum of values",
            StatsMethod::Average => "Arithmetic mean",
            StatsMethod::Median => "Median value",
            StatsMethod::Mode => "Most frequent value",
            StatsMethod::Minimum => "Smallest value",
            StatsMethod::Maximum => "Largest value",
            StatsMethod::Range => "Maximum minus minimum",
            StatsMethod::Stddev => "Standard deviation",
            StatsMethod::Variance => "Variance",
            StatsMethod::Diversity => "Number of distinct values",
        }
    }
}

impl fmt::Display for StatsMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatsMethod {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        StatsMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| StatsError::UnknownMethod {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        for method in StatsMethod::ALL {
            assert_eq!(method.as_str().parse::<StatsMethod>().unwrap(), method);
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(" Average ".parse::<StatsMethod>().unwrap(), StatsMethod::Average);
        assert_eq!("STDDEV".parse::<StatsMethod>().unwrap(), StatsMethod::Stddev);
    }

    #[test]
    fn unknown_method_is_rejected() {
        let err = "mean".parse::<StatsMethod>().unwrap_err();
        assert!(matches!(err, StatsError::UnknownMethod { ref name } if name == "mean"));
    }

    #[test]
    fn serializes_as_lowercase_token() {
        let json = serde_json::to_string(&StatsMethod::Diversity).unwrap();
        assert_eq!(json, "\"diversity\"");
    }
}
