//! Feature Result Assembly
//!
//! Nested feature -> channel -> value table. Iteration follows insertion
//! order (feature-major, channel-minor), so repeated extractions over the
//! same inputs produce identical layouts.

use crate::registry::FeatureKind;
use serde::{Deserialize, Serialize};

/// A computed feature value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureValue {
    /// One scalar per channel (all current features)
    Scalar(f64),
    /// One sequence per channel, for features that produce more than a
    /// single number
    Vector(Vec<f64>),
}

impl FeatureValue {
    /// The scalar payload, if this value is one
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            FeatureValue::Scalar(v) => Some(*v),
            FeatureValue::Vector(_) => None,
        }
    }
}

/// One feature's values across the selected channels, in selection order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureColumn {
    kind: FeatureKind,
    values: Vec<(String, FeatureValue)>,
}

impl FeatureColumn {
    pub(crate) fn new(kind: FeatureKind) -> Self {
        Self {
            kind,
            values: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, channel: String, value: FeatureValue) {
        self.values.push((channel, value));
    }

    /// The feature these values belong to
    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    /// Value for a channel, if it was selected
    pub fn get(&self, channel: &str) -> Option<&FeatureValue> {
        self.values
            .iter()
            .find(|(name, _)| name == channel)
            .map(|(_, value)| value)
    }

    /// Channel/value pairs in selection order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of channels in this column
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column holds no channels
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The nested result of one extraction call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureResult {
    features: Vec<FeatureColumn>,
}

impl FeatureResult {
    pub(crate) fn push(&mut self, column: FeatureColumn) {
        self.features.push(column);
    }

    /// Column for a feature, if it was selected
    pub fn get(&self, kind: FeatureKind) -> Option<&FeatureColumn> {
        self.features.iter().find(|column| column.kind == kind)
    }

    /// Columns in feature-selection order
    pub fn iter(&self) -> impl Iterator<Item = &FeatureColumn> {
        self.features.iter()
    }

    /// Number of features in the result
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the result holds no features
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
