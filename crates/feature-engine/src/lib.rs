//! Feature Extraction Engine
//!
//! Computes per-channel signal features (line length, band power) from a
//! multichannel recording and assembles them into a nested table keyed by
//! feature then channel.

mod bandpower;
mod error;
mod extractor;
mod linelength;
mod registry;
mod result;

pub use bandpower::{BandPowerAnalyzer, FrequencyBand};
pub use error::FeatureError;
pub use extractor::{ExtractionRequest, FeatureExtractor};
pub use linelength::line_length;
pub use registry::FeatureKind;
pub use result::{FeatureColumn, FeatureResult, FeatureValue};
