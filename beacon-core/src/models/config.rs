use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which coordinate fields a deployment understands.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateMode {
    /// `start`/`end` exact matches and `startMin..endMax` ranges.
    #[default]
    Interval,
    /// The legacy single `coordinate` field, matched by half-open containment.
    #[serde(rename = "singlepoint")]
    SinglePoint,
}

/// How the variant table stores alternate bases.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlternateBasesLayout {
    /// One row holds a list of alternates; queries test membership.
    #[default]
    Repeated,
    /// One alternate per row; queries test equality.
    Scalar,
}

///
/// Per-deployment query rules. Chosen once at startup, never per request.
///
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct QueryConfig {
    pub coordinates: CoordinateMode,
    pub require_reference_bases: bool,
    pub require_alternate_bases: bool,
    pub alternate_bases: AlternateBasesLayout,
}

impl QueryConfig {
    /// Chromosome, allele and a single coordinate.
    pub fn legacy() -> Self {
        QueryConfig {
            coordinates: CoordinateMode::SinglePoint,
            require_reference_bases: true,
            require_alternate_bases: false,
            alternate_bases: AlternateBasesLayout::Repeated,
        }
    }

    /// Precise or imprecise coordinates with optional alternate bases.
    pub fn allele() -> Self {
        QueryConfig {
            coordinates: CoordinateMode::Interval,
            require_reference_bases: true,
            require_alternate_bases: false,
            alternate_bases: AlternateBasesLayout::Repeated,
        }
    }

    /// Like [`QueryConfig::allele`] but alternate bases are mandatory and scalar.
    pub fn strict() -> Self {
        QueryConfig {
            require_alternate_bases: true,
            alternate_bases: AlternateBasesLayout::Scalar,
            ..Self::allele()
        }
    }

    /// Reference name and coordinates only; bases are optional filters.
    pub fn coordinates_only() -> Self {
        QueryConfig {
            require_reference_bases: false,
            ..Self::allele()
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::allele()
    }
}

impl FromStr for QueryConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(QueryConfig::legacy()),
            "allele" => Ok(QueryConfig::allele()),
            "strict" => Ok(QueryConfig::strict()),
            "coordinates-only" | "coordinates_only" => Ok(QueryConfig::coordinates_only()),
            _ => Err(format!(
                "Invalid query mode: {}. Valid options are 'legacy', 'allele', 'strict' or 'coordinates-only'",
                s
            )),
        }
    }
}

impl Display for CoordinateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateMode::Interval => write!(f, "interval"),
            CoordinateMode::SinglePoint => write!(f, "singlepoint"),
        }
    }
}
