//! Line Length Complexity

/// Sum of absolute sample-to-sample differences over a channel, a cheap
/// proxy for signal activity. Expects at least one sample; a single sample
/// has no differences and yields 0.0.
pub fn line_length(samples: &[f64]) -> f64 {
    samples.windows(2).map(|w| (w[1] - w[0]).abs()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ramp() {
        // Unit steps: 4 differences of 1.0
        let samples = [0.0, 1.0, 2.0, 3.0, 4.0];
        assert_eq!(line_length(&samples), 4.0);
    }

    #[test]
    fn test_direction_does_not_cancel() {
        let samples = [0.0, 2.0, 0.0, 2.0, 0.0];
        assert_eq!(line_length(&samples), 8.0);
    }

    #[test]
    fn test_constant_signal() {
        let samples = [3.5; 64];
        assert_eq!(line_length(&samples), 0.0);
    }

    #[test]
    fn test_single_sample() {
        assert_eq!(line_length(&[42.0]), 0.0);
    }

    proptest! {
        #[test]
        fn non_negative(samples in proptest::collection::vec(-1e6f64..1e6, 1..512)) {
            prop_assert!(line_length(&samples) >= 0.0);
        }

        #[test]
        fn translation_invariant(
            offset in -1e3f64..1e3,
            samples in proptest::collection::vec(-1e3f64..1e3, 2..128),
        ) {
            let shifted: Vec<f64> = samples.iter().map(|v| v + offset).collect();
            let a = line_length(&samples);
            let b = line_length(&shifted);
            prop_assert!((a - b).abs() <= 1e-6 * a.abs().max(1.0));
        }
    }
}
