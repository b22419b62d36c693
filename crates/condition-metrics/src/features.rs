//! Condition-Feature Assembly

use crate::spectrum::SpectrumAnalyzer;
use crate::statistics::ChannelStats;
use accel_series::{Channel, Series};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sensor clipping limits in raw counts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SaturationLimits {
    /// Reading at or above this saturates high
    pub upper: f64,
    /// Reading at or below this saturates low
    pub lower: f64,
}

impl Default for SaturationLimits {
    /// 10-bit signed sensor counts
    fn default() -> Self {
        Self {
            upper: 1023.0,
            lower: -1024.0,
        }
    }
}

impl SaturationLimits {
    /// Whether an observed range touches either rail
    pub fn is_saturated(&self, min: f64, max: f64) -> bool {
        max >= self.upper || min <= self.lower
    }
}

/// One value per accelerometer axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisValues {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AxisValues {
    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Per-run feature record, computed once and never mutated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// RMS of the centred signal per axis
    pub rms: AxisValues,
    /// Kurtosis per axis before outlier repair
    pub kurtosis_pre: AxisValues,
    /// Kurtosis per axis after outlier repair
    pub kurtosis_post: AxisValues,
    /// Smallest reading across all axes
    pub global_min: f64,
    /// Largest reading across all axes
    pub global_max: f64,
    /// Whether any reading touches the sensor rails
    pub saturated: bool,
    /// Shaft rotating frequency the spectrum was probed at (Hz)
    pub target_hz: f64,
    /// Frequency of the spectral bin actually selected (Hz)
    pub selected_bin_hz: f64,
    /// Single-sided amplitude at the selected bin on the X axis
    pub amplitude_1x: f64,
}

impl MetricsRecord {
    /// All metric values are finite
    pub fn is_finite(&self) -> bool {
        self.rms.is_finite()
            && self.kurtosis_pre.is_finite()
            && self.kurtosis_post.is_finite()
            && self.global_min.is_finite()
            && self.global_max.is_finite()
            && self.target_hz.is_finite()
            && self.selected_bin_hz.is_finite()
            && self.amplitude_1x.is_finite()
    }
}

/// Computes the metrics record for one processed recording
pub struct FeatureExtractor {
    analyzer: SpectrumAnalyzer,
    limits: SaturationLimits,
    target_hz: f64,
}

impl FeatureExtractor {
    /// Create an extractor for a machine turning at `shaft_rpm`, recorded at
    /// `sample_rate` Hz
    pub fn new(sample_rate: f64, shaft_rpm: f64, limits: SaturationLimits) -> Self {
        Self {
            analyzer: SpectrumAnalyzer::new(sample_rate),
            limits,
            target_hz: shaft_rpm / 60.0,
        }
    }

    /// Compute the metrics record.
    ///
    /// `pre_clean` is the trimmed series before outlier repair and feeds
    /// only the pre-clean kurtosis; every other metric reads `cleaned`.
    /// The 1x amplitude comes from the X channel at the spectral bin
    /// nearest the shaft rotating frequency.
    pub fn extract(&mut self, pre_clean: &Series, cleaned: &Series) -> MetricsRecord {
        let pre = channel_stats(pre_clean);
        let post = channel_stats(cleaned);

        let global_min = post.iter().map(|s| s.min).fold(f64::MAX, f64::min);
        let global_max = post.iter().map(|s| s.max).fold(f64::MIN, f64::max);
        let saturated = self.limits.is_saturated(global_min, global_max);

        let spectrum = self.analyzer.analyze(cleaned.channel(Channel::X));
        let (selected_bin_hz, amplitude_1x) = spectrum
            .amplitude_near(self.target_hz)
            .unwrap_or((0.0, 0.0));

        debug!(
            "metrics: rms=({:.3}, {:.3}, {:.3}), 1x={:.4} at {:.2} Hz",
            post[0].rms, post[1].rms, post[2].rms, amplitude_1x, selected_bin_hz
        );

        MetricsRecord {
            rms: AxisValues {
                x: post[0].rms,
                y: post[1].rms,
                z: post[2].rms,
            },
            kurtosis_pre: AxisValues {
                x: pre[0].kurtosis,
                y: pre[1].kurtosis,
                z: pre[2].kurtosis,
            },
            kurtosis_post: AxisValues {
                x: post[0].kurtosis,
                y: post[1].kurtosis,
                z: post[2].kurtosis,
            },
            global_min,
            global_max,
            saturated,
            target_hz: self.target_hz,
            selected_bin_hz,
            amplitude_1x,
        }
    }
}

/// Stats per channel in X, Y, Z order
fn channel_stats(series: &Series) -> [ChannelStats; 3] {
    Channel::ALL.map(|channel| ChannelStats::compute(series.channel(channel)))
}
