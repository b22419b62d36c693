//! Z-Score Outlier Detection and Repair

use accel_series::{Channel, Series};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Outlier filtering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierConfig {
    /// Z-score magnitude above which a sample counts as a spike
    pub z_threshold: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self { z_threshold: 3.0 }
    }
}

/// Result of one outlier pass
#[derive(Debug, Clone)]
pub struct OutlierReport {
    /// Samples flagged and repaired
    pub repaired: usize,
    /// Per-sample flag, `true` where the sample was replaced
    pub mask: Vec<bool>,
    /// Channels skipped because they carry no variation at all
    pub degenerate_channels: Vec<Channel>,
}

/// Flags electrical-noise spikes by z-score and repairs them in place
pub struct OutlierFilter {
    config: OutlierConfig,
}

impl OutlierFilter {
    /// Create a filter with the given config
    pub fn new(config: OutlierConfig) -> Self {
        Self { config }
    }

    /// Detect and repair spikes in place.
    ///
    /// Z-scores use each channel's own mean and population standard
    /// deviation over the whole series. A sample exceeding the threshold on
    /// any channel is removed whole, across all three channels, and each one
    /// is then rebuilt across the gaps by linear interpolation between its
    /// nearest surviving neighbours, with flat fill at the boundaries. A
    /// channel with zero variance yields no z-scores and no flags; it is
    /// reported, not failed on.
    pub fn clean(&self, series: &mut Series) -> OutlierReport {
        let len = series.len();
        let mut mask = vec![false; len];
        let mut degenerate_channels = Vec::new();
        let mut channel_means = [0.0f64; 3];

        if len == 0 {
            return OutlierReport {
                repaired: 0,
                mask,
                degenerate_channels,
            };
        }

        for (slot, channel) in Channel::ALL.into_iter().enumerate() {
            let values = series.channel(channel);
            let (mean, std_dev) = population_stats(values);
            channel_means[slot] = mean;

            if std_dev == 0.0 {
                warn!("channel {channel} has zero variance, no spikes flagged on it");
                degenerate_channels.push(channel);
                continue;
            }
            for (i, &value) in values.iter().enumerate() {
                if ((value - mean) / std_dev).abs() > self.config.z_threshold {
                    mask[i] = true;
                }
            }
        }

        let anchors: Vec<usize> = (0..len).filter(|&i| !mask[i]).collect();
        let repaired = len - anchors.len();

        if repaired > 0 {
            if anchors.is_empty() {
                warn!("every sample exceeded the threshold, filling channels with their means");
            }
            for (slot, channel) in Channel::ALL.into_iter().enumerate() {
                repair_channel(series.channel_mut(channel), &anchors, channel_means[slot]);
            }
        }
        debug!("flagged {repaired} of {len} samples as spikes");

        OutlierReport {
            repaired,
            mask,
            degenerate_channels,
        }
    }
}

impl Default for OutlierFilter {
    fn default() -> Self {
        Self::new(OutlierConfig::default())
    }
}

/// Mean and population standard deviation
fn population_stats(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    (mean, variance.sqrt())
}

/// Rebuild flagged positions from the surviving anchor indices.
///
/// Interior gaps are linearly interpolated between the bracketing anchors;
/// gaps touching a boundary take the nearest anchor's value. With no anchors
/// left the whole channel falls back to its pre-repair mean.
fn repair_channel(values: &mut [f64], anchors: &[usize], fallback: f64) {
    if anchors.is_empty() {
        values.fill(fallback);
        return;
    }

    let lead = values[anchors[0]];
    for value in &mut values[..anchors[0]] {
        *value = lead;
    }

    for pair in anchors.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        if right - left > 1 {
            let (vl, vr) = (values[left], values[right]);
            let span = (right - left) as f64;
            for i in left + 1..right {
                values[i] = vl + (vr - vl) * ((i - left) as f64 / span);
            }
        }
    }

    let last = anchors[anchors.len() - 1];
    let tail = values[last];
    for value in &mut values[last + 1..] {
        *value = tail;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accel_series::Sample;
    use proptest::prelude::*;

    /// Ramp on X and Z, alternating ±2 on Y
    fn base_series(len: usize) -> Series {
        (0..len)
            .map(|i| {
                let t = i as f64;
                let y = if i % 2 == 0 { 2.0 } else { -2.0 };
                Sample::new(t, y, 0.5 * t)
            })
            .collect()
    }

    #[test]
    fn test_isolated_spike_flagged_and_interpolated() {
        let mut series = base_series(201);
        series.channel_mut(Channel::X)[100] = 5000.0;

        let report = OutlierFilter::default().clean(&mut series);

        assert_eq!(report.repaired, 1);
        assert!(report.mask[100]);
        assert_eq!(report.mask.iter().filter(|&&m| m).count(), 1);

        // X rebuilt from its bracketing neighbours (99 and 101)
        assert!((series.channel(Channel::X)[100] - 100.0).abs() < 1e-9);
        // The whole row went, so Y at 100 is interpolated too: both
        // neighbours sit at -2, the original +2 is gone
        assert!((series.channel(Channel::Y)[100] - (-2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_spikes_take_nearest_value() {
        let mut series = base_series(150);
        series.channel_mut(Channel::X)[0] = 9999.0;
        series.channel_mut(Channel::X)[149] = -9999.0;

        let report = OutlierFilter::default().clean(&mut series);

        assert_eq!(report.repaired, 2);
        assert!(report.mask[0] && report.mask[149]);
        assert!((series.channel(Channel::X)[0] - 1.0).abs() < 1e-9);
        assert!((series.channel(Channel::X)[149] - 148.0).abs() < 1e-9);
    }

    #[test]
    fn test_unflagged_samples_untouched() {
        let mut series = base_series(160);
        series.channel_mut(Channel::Z)[40] = -7000.0;
        let before = series.clone();

        let report = OutlierFilter::default().clean(&mut series);

        assert_eq!(report.repaired, 1);
        for channel in Channel::ALL {
            for i in 0..series.len() {
                if i != 40 {
                    assert_eq!(series.channel(channel)[i], before.channel(channel)[i]);
                }
            }
        }
    }

    #[test]
    fn test_constant_channel_is_reported_not_failed() {
        let mut series: Series = (0..120)
            .map(|i| Sample::new(i as f64, 5.0, (i as f64).sin()))
            .collect();
        let before = series.clone();

        let report = OutlierFilter::default().clean(&mut series);

        assert_eq!(report.degenerate_channels, vec![Channel::Y]);
        assert_eq!(report.repaired, 0);
        assert_eq!(series, before);
    }

    #[test]
    fn test_all_flagged_falls_back_to_channel_mean() {
        // Threshold 0 flags every sample of an alternating signal
        let mut series: Series = (0..120)
            .map(|i| {
                let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                Sample::new(sign, 2.0 * sign, 4.0 * sign)
            })
            .collect();

        let filter = OutlierFilter::new(OutlierConfig { z_threshold: 0.0 });
        let report = filter.clean(&mut series);

        assert_eq!(report.repaired, 120);
        for channel in Channel::ALL {
            for &value in series.channel(channel) {
                assert_eq!(value, 0.0);
            }
        }
    }

    proptest! {
        #[test]
        fn repair_is_total_and_preserves_anchors(
            rows in prop::collection::vec(
                (-1000.0f64..1000.0, -1000.0f64..1000.0, -1000.0f64..1000.0),
                1..200,
            ),
            threshold in 0.0f64..5.0,
        ) {
            let series: Series = rows.iter().map(|&(x, y, z)| Sample::new(x, y, z)).collect();
            let filter = OutlierFilter::new(OutlierConfig { z_threshold: threshold });

            let mut cleaned = series.clone();
            let report = filter.clean(&mut cleaned);

            prop_assert_eq!(cleaned.len(), series.len());
            prop_assert_eq!(report.mask.len(), series.len());
            prop_assert_eq!(
                report.repaired,
                report.mask.iter().filter(|&&m| m).count()
            );
            for channel in Channel::ALL {
                for (i, &value) in cleaned.channel(channel).iter().enumerate() {
                    prop_assert!(value.is_finite());
                    if !report.mask[i] {
                        prop_assert_eq!(value, series.channel(channel)[i]);
                    }
                }
            }
        }
    }
}
