//! Run Report Rendering

use crate::error::PipelineError;
use accel_series::Channel;
use condition_metrics::MetricsRecord;
use serde::Serialize;
use signal_cleaner::CrashSignature;
use std::fmt;
use std::path::Path;

/// Per-run summary, printed to stdout and optionally saved as JSON
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// How the input columns were resolved
    pub schema: String,
    /// Data rows examined in the input
    pub rows_seen: usize,
    /// Rows dropped during numeric coercion
    pub rows_dropped: usize,
    /// Samples entering the trimmer
    pub samples_loaded: usize,
    /// Index of the first trimmed sample
    pub trim_cutoff: usize,
    /// Samples removed by the trimmer
    pub trim_removed: usize,
    /// Crash signature that fired, if any
    pub crash_signature: Option<CrashSignature>,
    /// Samples surviving the full clean
    pub samples_retained: usize,
    /// Spikes repaired by the outlier filter
    pub outliers_repaired: usize,
    /// Channels with zero variance
    pub degenerate_channels: Vec<Channel>,
    /// Extracted condition metrics
    pub metrics: MetricsRecord,
}

impl RunReport {
    /// Serialise the report as pretty JSON
    pub fn save_json(&self, path: &Path) -> Result<(), PipelineError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            PipelineError::ProcessingFailure(format!("serializing report: {e}"))
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn retained_pct(&self) -> f64 {
        if self.samples_loaded == 0 {
            0.0
        } else {
            100.0 * self.samples_retained as f64 / self.samples_loaded as f64
        }
    }

    fn repaired_pct(&self) -> f64 {
        if self.samples_retained == 0 {
            0.0
        } else {
            100.0 * self.outliers_repaired as f64 / self.samples_retained as f64
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Processing Report ===")?;
        writeln!(
            f,
            "Input rows:          {} via {} ({} dropped during coercion)",
            self.rows_seen, self.schema, self.rows_dropped
        )?;
        match self.crash_signature {
            Some(signature) => writeln!(
                f,
                "Crash trim:          {} at index {}, {} samples removed",
                signature, self.trim_cutoff, self.trim_removed
            )?,
            None => writeln!(f, "Crash trim:          no signature detected")?,
        }
        writeln!(
            f,
            "Samples retained:    {} of {} ({:.1}%)",
            self.samples_retained,
            self.samples_loaded,
            self.retained_pct()
        )?;
        writeln!(
            f,
            "Outliers repaired:   {} ({:.2}%)",
            self.outliers_repaired,
            self.repaired_pct()
        )?;
        if self.degenerate_channels.is_empty() {
            writeln!(f, "Degenerate channels: none")?;
        } else {
            let labels: Vec<&str> = self
                .degenerate_channels
                .iter()
                .map(|channel| channel.label())
                .collect();
            writeln!(f, "Degenerate channels: {}", labels.join(", "))?;
        }

        let m = &self.metrics;
        writeln!(
            f,
            "Range check:         min {:.3}, max {:.3}",
            m.global_min, m.global_max
        )?;
        if m.saturated {
            writeln!(
                f,
                "Saturation:          WARNING: readings reach the sensor rails"
            )?;
        } else {
            writeln!(f, "Saturation:          OK")?;
        }
        writeln!(
            f,
            "RMS (X/Y/Z):         {:.4} / {:.4} / {:.4}",
            m.rms.x, m.rms.y, m.rms.z
        )?;
        writeln!(
            f,
            "Kurtosis pre-clean:  {:.4} / {:.4} / {:.4}",
            m.kurtosis_pre.x, m.kurtosis_pre.y, m.kurtosis_pre.z
        )?;
        writeln!(
            f,
            "Kurtosis post-clean: {:.4} / {:.4} / {:.4}",
            m.kurtosis_post.x, m.kurtosis_post.y, m.kurtosis_post.z
        )?;
        write!(
            f,
            "1x amplitude:        {:.4} at {:.2} Hz (target {:.2} Hz)",
            m.amplitude_1x, m.selected_bin_hz, m.target_hz
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use condition_metrics::AxisValues;

    fn sample_report() -> RunReport {
        RunReport {
            schema: "named X/Y/Z header".to_string(),
            rows_seen: 1207,
            rows_dropped: 7,
            samples_loaded: 1200,
            trim_cutoff: 1000,
            trim_removed: 200,
            crash_signature: Some(CrashSignature::HardReset),
            samples_retained: 1000,
            outliers_repaired: 17,
            degenerate_channels: vec![],
            metrics: MetricsRecord {
                rms: AxisValues {
                    x: 1.7678,
                    y: 0.3536,
                    z: 0.0,
                },
                kurtosis_pre: AxisValues {
                    x: 5.2,
                    y: 1.5,
                    z: 0.0,
                },
                kurtosis_post: AxisValues {
                    x: 1.5,
                    y: 1.5,
                    z: 0.0,
                },
                global_min: -2.5,
                global_max: 2.5,
                saturated: false,
                target_hz: 50.0,
                selected_bin_hz: 50.0,
                amplitude_1x: 2.5,
            },
        }
    }

    #[test]
    fn test_report_renders_every_section() {
        let text = sample_report().to_string();

        assert!(text.contains("hard reset at index 1000, 200 samples removed"));
        assert!(text.contains("Samples retained:    1000 of 1200 (83.3%)"));
        assert!(text.contains("Outliers repaired:   17 (1.70%)"));
        assert!(text.contains("Degenerate channels: none"));
        assert!(text.contains("Saturation:          OK"));
        assert!(text.contains("1x amplitude:        2.5000 at 50.00 Hz (target 50.00 Hz)"));
    }

    #[test]
    fn test_saturated_report_warns() {
        let mut report = sample_report();
        report.metrics.saturated = true;
        report.degenerate_channels = vec![Channel::Z];

        let text = report.to_string();
        assert!(text.contains("WARNING: readings reach the sensor rails"));
        assert!(text.contains("Degenerate channels: Z"));
    }

    #[test]
    fn test_report_serializes_counts() {
        let json = serde_json::to_string(&sample_report()).unwrap();
        assert!(json.contains("\"outliers_repaired\":17"));
        assert!(json.contains("\"crash_signature\":\"HardReset\""));
    }
}
