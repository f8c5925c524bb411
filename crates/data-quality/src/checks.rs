//! Array-Property Checks
//!
//! The four low-level predicates the validator runs. Each is independent
//! and borrows the recording read-only.

use recording::{DType, Recording};

/// Channel count matches, and sample count too when one is expected
pub fn dimensions_match(
    rec: &Recording,
    channel_count: usize,
    sample_count: Option<usize>,
) -> bool {
    if rec.num_channels() != channel_count {
        return false;
    }
    match sample_count {
        Some(samples) => rec.num_samples() == samples,
        None => true,
    }
}

/// Source element kind of the samples matches
pub fn dtype_matches(rec: &Recording, dtype: DType) -> bool {
    rec.dtype() == dtype
}

/// Any sample is positive or negative infinity
pub fn contains_infinite(rec: &Recording) -> bool {
    rec.data().iter().any(|v| v.is_infinite())
}

/// Any sample is NaN
pub fn contains_nan(rec: &Recording) -> bool {
    rec.data().iter().any(|v| v.is_nan())
}
