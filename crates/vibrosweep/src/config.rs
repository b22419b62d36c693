//! Pipeline Configuration

use condition_metrics::SaturationLimits;
use serde::{Deserialize, Serialize};
use signal_cleaner::{OutlierConfig, TrimConfig};

/// Everything one pipeline run depends on, in one place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Sampling frequency of the recording (Hz)
    pub sample_rate_hz: f64,
    /// Shaft speed of the machine under test (RPM)
    pub shaft_rpm: f64,
    /// Crash trimming knobs
    pub trim: TrimConfig,
    /// Outlier filtering knobs
    pub outlier: OutlierConfig,
    /// Sensor clipping limits
    pub saturation: SaturationLimits,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 1091.0,
            shaft_rpm: 3000.0,
            trim: TrimConfig::default(),
            outlier: OutlierConfig::default(),
            saturation: SaturationLimits::default(),
        }
    }
}
