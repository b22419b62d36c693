//! Per-Channel Statistical Features

/// Time-domain statistics for one channel
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelStats {
    /// Mean value
    pub mean: f64,
    /// RMS of the mean-centred signal (equals the population standard deviation)
    pub rms: f64,
    /// Fourth standardized moment m4/m2² (pure sine 1.5, Gaussian 3)
    pub kurtosis: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
}

impl ChannelStats {
    /// Compute statistics from a slice of values
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let min = values.iter().cloned().fold(f64::MAX, f64::min);
        let max = values.iter().cloned().fold(f64::MIN, f64::max);

        let mut m2 = 0.0;
        let mut m4 = 0.0;
        for &v in values {
            let d = v - mean;
            let dd = d * d;
            m2 += dd;
            m4 += dd * dd;
        }

        let variance = m2 / n;
        let rms = variance.sqrt();

        // A flat channel has no shape to measure
        let kurtosis = if variance > 0.0 {
            (m4 / n) / (variance * variance)
        } else {
            0.0
        };

        Self {
            mean,
            rms,
            kurtosis,
            min,
            max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_extrema() {
        let stats = ChannelStats::compute(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((stats.mean - 3.0).abs() < 1e-12);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
    }

    #[test]
    fn test_rms_of_centred_signal() {
        let stats = ChannelStats::compute(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        // Mean 5, squared deviations sum to 32, population variance 4
        assert!((stats.rms - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_kurtosis_of_pure_sine() {
        // Five full cycles: E[sin²] = 1/2, E[sin⁴] = 3/8, so m4/m2² = 1.5
        let values: Vec<f64> = (0..1000)
            .map(|i| (2.0 * std::f64::consts::PI * 5.0 * i as f64 / 1000.0).sin())
            .collect();
        let stats = ChannelStats::compute(&values);
        assert!((stats.kurtosis - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_kurtosis_rises_with_an_impulse() {
        let mut values: Vec<f64> = (0..1000)
            .map(|i| (2.0 * std::f64::consts::PI * 5.0 * i as f64 / 1000.0).sin())
            .collect();
        values[400] = 60.0;
        let stats = ChannelStats::compute(&values);
        assert!(stats.kurtosis > 100.0);
    }

    #[test]
    fn test_constant_signal() {
        let stats = ChannelStats::compute(&[4.2; 64]);
        assert_eq!(stats.rms, 0.0);
        assert_eq!(stats.kurtosis, 0.0);
        assert!((stats.mean - 4.2).abs() < 1e-12);
    }

    #[test]
    fn test_empty_values() {
        let stats = ChannelStats::compute(&[]);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.rms, 0.0);
    }
}
