//! Quality Gate Error Types

use thiserror::Error;

/// Errors raised before any check runs
#[derive(Debug, Clone, Error)]
pub enum QualityError {
    /// An expectation no recording could ever satisfy
    #[error("expected {field} must be positive, got {value}")]
    InvalidExpectation { field: &'static str, value: usize },
}
