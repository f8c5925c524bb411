//! Data Quality Gate
//!
//! Structural-integrity checks for multichannel recordings: shape, dtype,
//! and finiteness are confirmed before a recording is trusted for feature
//! extraction. The gate is advisory; a failed check is reported, not raised.

mod checks;
mod error;
mod validator;

pub use checks::{contains_infinite, contains_nan, dimensions_match, dtype_matches};
pub use error::QualityError;
pub use validator::{ArrayValidator, Expectations, ValidationReport};
