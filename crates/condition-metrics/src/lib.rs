//! Condition Metrics
//!
//! Time- and frequency-domain features that separate a healthy machine from
//! an unbalanced or faulty one: per-axis vibration energy, impulsiveness
//! before and after cleaning, sensor saturation, and the spectral amplitude
//! at the shaft rotating frequency.

mod features;
mod spectrum;
mod statistics;

pub use features::{AxisValues, FeatureExtractor, MetricsRecord, SaturationLimits};
pub use spectrum::{AmplitudeSpectrum, SpectrumAnalyzer};
pub use statistics::ChannelStats;
