//! Band-Limited Power Estimation

use rustfft::{num_complex::Complex, FftPlanner};
use serde::{Deserialize, Serialize};

/// Frequency band in Hz, lower edge inclusive, upper edge exclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBand {
    /// Lower edge (Hz)
    pub low: f64,
    /// Upper edge (Hz)
    pub high: f64,
}

impl FrequencyBand {
    /// Create a band from its edges
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether the band fits under the Nyquist limit for a sampling frequency
    pub fn is_valid_for(&self, sampling_frequency: f64) -> bool {
        self.low >= 0.0 && self.low < self.high && self.high <= sampling_frequency / 2.0
    }
}

impl Default for FrequencyBand {
    /// High-gamma band used when no band is requested
    fn default() -> Self {
        Self {
            low: 60.0,
            high: 120.0,
        }
    }
}

/// Band power estimator; holds the FFT planner so plans are reused across
/// channels of the same length
pub struct BandPowerAnalyzer {
    planner: FftPlanner<f64>,
}

impl BandPowerAnalyzer {
    /// Create a new analyzer
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Apply Hamming window to reduce spectral leakage
    fn apply_hamming_window(signal: &mut [f64]) {
        let n = signal.len();
        if n < 2 {
            return;
        }
        for (i, v) in signal.iter_mut().enumerate() {
            let window =
                0.54 - 0.46 * (2.0 * std::f64::consts::PI * i as f64 / (n - 1) as f64).cos();
            *v *= window;
        }
    }

    /// Signal power within the band, from a one-sided periodogram of the
    /// samples. Deterministic for fixed inputs; the input is not mutated.
    pub fn band_power(
        &mut self,
        samples: &[f64],
        sampling_frequency: f64,
        band: FrequencyBand,
    ) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }

        let n = samples.len();

        let mut windowed = samples.to_vec();
        Self::apply_hamming_window(&mut windowed);

        let mut buffer: Vec<Complex<f64>> =
            windowed.iter().map(|&v| Complex::new(v, 0.0)).collect();
        let fft = self.planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        let freq_resolution = sampling_frequency / n as f64;

        // Positive-frequency bins only; power normalized by length
        let mut power = 0.0;
        for (i, c) in buffer.iter().take(n / 2).enumerate() {
            let freq = i as f64 * freq_resolution;
            if freq >= band.low && freq < band.high {
                power += c.norm_sqr() / n as f64;
            }
        }
        power
    }
}

impl Default for BandPowerAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f64, sampling_frequency: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * std::f64::consts::PI * freq * i as f64 / sampling_frequency).sin())
            .collect()
    }

    #[test]
    fn test_sine_power_concentrates_in_band() {
        let mut analyzer = BandPowerAnalyzer::new();
        let signal = sine(10.0, 256.0, 1024);

        let in_band = analyzer.band_power(&signal, 256.0, FrequencyBand::new(5.0, 15.0));
        let out_of_band = analyzer.band_power(&signal, 256.0, FrequencyBand::new(60.0, 120.0));

        assert!(in_band > 0.0);
        assert!(in_band > 100.0 * out_of_band);
    }

    #[test]
    fn test_band_power_is_deterministic() {
        let mut analyzer = BandPowerAnalyzer::new();
        let signal = sine(40.0, 512.0, 2048);
        let band = FrequencyBand::new(30.0, 50.0);

        let first = analyzer.band_power(&signal, 512.0, band);
        let second = analyzer.band_power(&signal, 512.0, band);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_empty_signal() {
        let mut analyzer = BandPowerAnalyzer::new();
        assert_eq!(analyzer.band_power(&[], 256.0, FrequencyBand::default()), 0.0);
    }

    #[test]
    fn test_default_band() {
        let band = FrequencyBand::default();
        assert_eq!(band.low, 60.0);
        assert_eq!(band.high, 120.0);
    }

    #[test]
    fn test_band_validity() {
        // Nyquist for 256 Hz is 128 Hz
        assert!(FrequencyBand::new(60.0, 120.0).is_valid_for(256.0));
        assert!(FrequencyBand::new(0.0, 128.0).is_valid_for(256.0));
        assert!(!FrequencyBand::new(60.0, 120.0).is_valid_for(200.0));
        assert!(!FrequencyBand::new(-1.0, 40.0).is_valid_for(256.0));
        assert!(!FrequencyBand::new(80.0, 80.0).is_valid_for(256.0));
        assert!(!FrequencyBand::new(90.0, 70.0).is_valid_for(256.0));
    }
}
