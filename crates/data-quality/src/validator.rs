//! Structural Validator for Loaded Recordings

use crate::checks;
use crate::error::QualityError;
use recording::{DType, Recording};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Expected structure of a recording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expectations {
    /// Expected channel count
    pub channel_count: usize,
    /// Expected sample count (None skips the check)
    pub sample_count: Option<usize>,
    /// Expected source element kind
    pub dtype: DType,
}

impl Expectations {
    /// Expect a channel count; the sample-count check is skipped and the
    /// dtype defaults to float64
    pub fn new(channel_count: usize) -> Self {
        Self {
            channel_count,
            sample_count: None,
            dtype: DType::F64,
        }
    }

    /// Also expect an exact sample count
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = Some(sample_count);
        self
    }

    /// Expect a source element kind other than float64
    pub fn with_dtype(mut self, dtype: DType) -> Self {
        self.dtype = dtype;
        self
    }
}

/// Outcome of the four structural checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Channel (and optionally sample) counts match
    pub dimensions: bool,
    /// Source element kind matches
    pub dtype: bool,
    /// No sample is infinite
    pub no_infinite: bool,
    /// No sample is NaN
    pub no_nan: bool,
}

impl ValidationReport {
    /// Whether every check passed
    pub fn passed(&self) -> bool {
        self.dimensions && self.dtype && self.no_infinite && self.no_nan
    }
}

/// Runs the structural checks against a recording
pub struct ArrayValidator {
    expectations: Expectations,
    verbose: bool,
}

impl ArrayValidator {
    /// Create a validator for the given expectations
    pub fn new(expectations: Expectations) -> Self {
        Self {
            expectations,
            verbose: false,
        }
    }

    /// Emit a per-check outcome line while validating
    pub fn verbose(mut self, on: bool) -> Self {
        self.verbose = on;
        self
    }

    /// Run all four checks and report each outcome.
    ///
    /// A failed check is data in the report, not an error; only
    /// expectations no recording could satisfy fail fast.
    pub fn validate(&self, rec: &Recording) -> Result<ValidationReport, QualityError> {
        if self.expectations.channel_count == 0 {
            return Err(QualityError::InvalidExpectation {
                field: "channel count",
                value: 0,
            });
        }
        if self.expectations.sample_count == Some(0) {
            return Err(QualityError::InvalidExpectation {
                field: "sample count",
                value: 0,
            });
        }

        // All four checks always run; no short-circuit across them
        let report = ValidationReport {
            dimensions: checks::dimensions_match(
                rec,
                self.expectations.channel_count,
                self.expectations.sample_count,
            ),
            dtype: checks::dtype_matches(rec, self.expectations.dtype),
            no_infinite: !checks::contains_infinite(rec),
            no_nan: !checks::contains_nan(rec),
        };

        if self.verbose {
            log_check("dimension check", report.dimensions);
            log_check("dtype check", report.dtype);
            log_check("infinite value check", report.no_infinite);
            log_check("nan value check", report.no_nan);
        }

        Ok(report)
    }
}

fn log_check(name: &str, passed: bool) {
    info!("{}: {}", name, if passed { "passed" } else { "failed" });
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn recording_5x100() -> Recording {
        let channels = (1..=5).map(|i| format!("CH{i}")).collect();
        let data = Array2::from_shape_fn((100, 5), |(i, j)| ((i + j) as f64).sin());
        Recording::new(channels, data, 512.0).unwrap()
    }

    #[test]
    fn test_clean_recording_passes() {
        let rec = recording_5x100();
        let report = ArrayValidator::new(Expectations::new(5).with_sample_count(100))
            .validate(&rec)
            .unwrap();

        assert!(report.dimensions);
        assert!(report.dtype);
        assert!(report.no_infinite);
        assert!(report.no_nan);
        assert!(report.passed());
    }

    #[test]
    fn test_dimension_failure_leaves_other_checks_evaluated() {
        let rec = recording_5x100();
        let report = ArrayValidator::new(Expectations::new(6))
            .validate(&rec)
            .unwrap();

        assert!(!report.dimensions);
        assert!(report.dtype);
        assert!(report.no_infinite);
        assert!(report.no_nan);
        assert!(!report.passed());
    }

    #[test]
    fn test_sample_count_skipped_by_default() {
        let rec = recording_5x100();
        let report = ArrayValidator::new(Expectations::new(5))
            .validate(&rec)
            .unwrap();
        assert!(report.dimensions);
    }

    #[test]
    fn test_nan_and_infinite_checks_are_independent() {
        let rec = recording_5x100();
        let mut data = rec.data().clone();
        data[[17, 2]] = f64::NAN;
        let infected =
            Recording::new(rec.channel_names().to_vec(), data, 512.0).unwrap();

        let report = ArrayValidator::new(Expectations::new(5))
            .validate(&infected)
            .unwrap();

        assert!(report.no_infinite);
        assert!(!report.no_nan);
        assert!(!report.passed());
    }

    #[test]
    fn test_dtype_mismatch_reported() {
        let rec = recording_5x100();
        let report = ArrayValidator::new(Expectations::new(5).with_dtype(DType::I16))
            .validate(&rec)
            .unwrap();
        assert!(!report.dtype);
        assert!(report.dimensions);
    }

    #[test]
    fn test_zero_expectations_fail_fast() {
        let rec = recording_5x100();

        let err = ArrayValidator::new(Expectations::new(0))
            .validate(&rec)
            .unwrap_err();
        assert!(matches!(
            err,
            QualityError::InvalidExpectation { field: "channel count", .. }
        ));

        let err = ArrayValidator::new(Expectations::new(5).with_sample_count(0))
            .validate(&rec)
            .unwrap_err();
        assert!(matches!(
            err,
            QualityError::InvalidExpectation { field: "sample count", .. }
        ));
    }

    #[test]
    fn test_recording_not_mutated() {
        let rec = recording_5x100();
        let before = rec.clone();
        let _ = ArrayValidator::new(Expectations::new(5))
            .verbose(true)
            .validate(&rec)
            .unwrap();
        assert_eq!(rec, before);
    }
}
