//! Samples-by-Channels Recording

use crate::DType;
use ndarray::{Array2, ArrayView1};
use thiserror::Error;

/// Errors constructing a recording
#[derive(Debug, Clone, Error)]
pub enum RecordingError {
    /// Channel name list does not line up with the data columns
    #[error("{names} channel names for {columns} data columns")]
    ChannelCountMismatch { names: usize, columns: usize },

    /// Channel names must be unique
    #[error("duplicate channel name: {0}")]
    DuplicateChannel(String),

    /// Sampling frequency must be a positive number of Hz
    #[error("invalid sampling frequency: {0} Hz")]
    InvalidSamplingFrequency(f64),
}

/// A single monitoring session: rows = samples (time-ordered, uniform
/// interval), columns = named channels. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    channels: Vec<String>,
    data: Array2<f64>,
    sampling_frequency: f64,
    dtype: DType,
}

impl Recording {
    /// Create a recording from named channels and a samples-by-channels matrix
    pub fn new(
        channels: Vec<String>,
        data: Array2<f64>,
        sampling_frequency: f64,
    ) -> Result<Self, RecordingError> {
        if channels.len() != data.ncols() {
            return Err(RecordingError::ChannelCountMismatch {
                names: channels.len(),
                columns: data.ncols(),
            });
        }
        for (i, name) in channels.iter().enumerate() {
            if channels[..i].contains(name) {
                return Err(RecordingError::DuplicateChannel(name.clone()));
            }
        }
        if !(sampling_frequency > 0.0) || !sampling_frequency.is_finite() {
            return Err(RecordingError::InvalidSamplingFrequency(sampling_frequency));
        }
        Ok(Self {
            channels,
            data,
            sampling_frequency,
            dtype: DType::F64,
        })
    }

    /// Record the source element kind the samples were loaded from
    pub fn with_dtype(mut self, dtype: DType) -> Self {
        self.dtype = dtype;
        self
    }

    /// Number of channels (columns)
    pub fn num_channels(&self) -> usize {
        self.data.ncols()
    }

    /// Number of samples per channel (rows)
    pub fn num_samples(&self) -> usize {
        self.data.nrows()
    }

    /// Recording-wide sampling frequency (Hz)
    pub fn sampling_frequency(&self) -> f64 {
        self.sampling_frequency
    }

    /// Source element kind of the samples
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Channel names in native column order
    pub fn channel_names(&self) -> &[String] {
        &self.channels
    }

    /// Column index of a channel name
    pub fn channel_index(&self, name: &str) -> Option<usize> {
        self.channels.iter().position(|c| c == name)
    }

    /// Read-only view of one channel's sample sequence
    pub fn channel(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.channel_index(name).map(|i| self.data.column(i))
    }

    /// The full samples-by-channels matrix
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }
}
