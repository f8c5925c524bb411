//! Multichannel Recording
//!
//! Provides the in-memory samples-by-channels recording shared by the
//! data-quality and feature-engine crates.

mod recording;

pub use recording::{Recording, RecordingError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source element kind of a recording's samples.
///
/// Samples are held as `f64` in memory; acquisition systems deliver other
/// kinds (integer ADC counts, single-precision floats) and loaders record
/// which one here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DType {
    #[default]
    F64,
    F32,
    I32,
    I16,
}

impl DType {
    /// Conventional lowercase name ("float64", "int16", ...)
    pub fn name(&self) -> &'static str {
        match self {
            DType::F64 => "float64",
            DType::F32 => "float32",
            DType::I32 => "int32",
            DType::I16 => "int16",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
