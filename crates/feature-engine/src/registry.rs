//! Feature Registry
//!
//! The closed set of features this engine computes. Identifiers only exist
//! at the string boundary; once parsed, an unknown feature is
//! unrepresentable.

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A registered per-channel feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Line length: sum of absolute sample-to-sample differences
    LineLength,
    /// Band power: signal power within a frequency band
    BandPower,
}

impl FeatureKind {
    /// Every registered feature, in canonical output order
    pub const ALL: [FeatureKind; 2] = [FeatureKind::LineLength, FeatureKind::BandPower];

    /// Short identifier used in analyst-facing tables
    pub fn tag(&self) -> &'static str {
        match self {
            FeatureKind::LineLength => "LL",
            FeatureKind::BandPower => "BP",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FeatureKind {
    type Err = FeatureError;

    /// Case sensitive: "LL" and "BP" are the only accepted identifiers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LL" => Ok(FeatureKind::LineLength),
            "BP" => Ok(FeatureKind::BandPower),
            other => Err(FeatureError::UnknownFeature(other.to_string())),
        }
    }
}
