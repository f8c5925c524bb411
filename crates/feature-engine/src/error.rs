//! Feature Extraction Error Types

use thiserror::Error;

/// Errors during feature extraction
#[derive(Debug, Clone, Error)]
pub enum FeatureError {
    /// Feature identifier not in the registry
    #[error("unknown feature identifier: {0}")]
    UnknownFeature(String),

    /// Channel name not present in the recording
    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    /// Band incompatible with the recording's sampling frequency
    #[error("invalid band [{low}, {high}] Hz: must satisfy 0 <= low < high <= {nyquist}")]
    InvalidBand { low: f64, high: f64, nyquist: f64 },

    /// Channel has no samples to compute on
    #[error("channel {0} has no samples")]
    EmptyChannel(String),
}
