//! Feature Extraction Pipeline

use crate::bandpower::{BandPowerAnalyzer, FrequencyBand};
use crate::error::FeatureError;
use crate::linelength::line_length;
use crate::registry::FeatureKind;
use crate::result::{FeatureColumn, FeatureResult, FeatureValue};
use recording::Recording;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Channel, feature, and parameter selection for one extraction call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// Features to compute; None selects every registered feature in
    /// canonical order
    pub features: Option<Vec<FeatureKind>>,
    /// Channels to analyze; None selects every channel in native column
    /// order
    pub channels: Option<Vec<String>>,
    /// Band for the band-power feature
    pub band: FrequencyBand,
}

/// Turns a recording and a selection into a feature/channel/value table
pub struct FeatureExtractor {
    bandpower: BandPowerAnalyzer,
}

impl FeatureExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self {
            bandpower: BandPowerAnalyzer::new(),
        }
    }

    /// Compute the requested feature x channel cross-product.
    ///
    /// The feature loop is outermost and the channel loop innermost; the
    /// nesting and iteration order of the result follow from it. Selection
    /// errors surface before any primitive runs, and a failure anywhere
    /// abandons the whole call rather than returning a partial table.
    pub fn extract(
        &mut self,
        rec: &Recording,
        request: &ExtractionRequest,
    ) -> Result<FeatureResult, FeatureError> {
        let features = match &request.features {
            Some(selection) => dedup(selection),
            None => FeatureKind::ALL.to_vec(),
        };
        let channels = match &request.channels {
            Some(selection) => dedup(selection),
            None => rec.channel_names().to_vec(),
        };

        for name in &channels {
            if rec.channel_index(name).is_none() {
                return Err(FeatureError::UnknownChannel(name.clone()));
            }
        }
        if features.contains(&FeatureKind::BandPower)
            && !request.band.is_valid_for(rec.sampling_frequency())
        {
            return Err(FeatureError::InvalidBand {
                low: request.band.low,
                high: request.band.high,
                nyquist: rec.sampling_frequency() / 2.0,
            });
        }
        if rec.num_samples() == 0 {
            if let Some(name) = channels.first() {
                return Err(FeatureError::EmptyChannel(name.clone()));
            }
        }

        debug!(
            "extracting {} features over {} channels",
            features.len(),
            channels.len()
        );

        let mut result = FeatureResult::default();
        for &feature in &features {
            let mut column = FeatureColumn::new(feature);
            for name in &channels {
                let samples = rec
                    .channel(name)
                    .ok_or_else(|| FeatureError::UnknownChannel(name.clone()))?
                    .to_vec();
                let value = match feature {
                    FeatureKind::LineLength => line_length(&samples),
                    FeatureKind::BandPower => self.bandpower.band_power(
                        &samples,
                        rec.sampling_frequency(),
                        request.band,
                    ),
                };
                column.push(name.clone(), FeatureValue::Scalar(value));
            }
            result.push(column);
        }
        Ok(result)
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// First occurrence wins, as with dictionary keys
fn dedup<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}
