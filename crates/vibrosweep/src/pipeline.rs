//! Pipeline Orchestration

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::report::RunReport;
use accel_series::Series;
use condition_metrics::FeatureExtractor;
use recording_io::load_series;
use signal_cleaner::{CrashTrimmer, OutlierFilter};
use std::path::Path;
use tracing::info;

/// Everything a successful run produces
#[derive(Debug)]
pub struct PipelineOutcome {
    /// The cleaned series, ready to save
    pub series: Series,
    /// Human- and machine-readable run summary
    pub report: RunReport,
}

/// Run the four stages over one recording.
///
/// Strictly linear: normalize the channels, trim at the first crash
/// signature, repair outliers, extract the metrics record. The first
/// failing stage aborts the run, and nothing is written here, so a failed
/// run leaves no partial outputs behind.
pub fn run_pipeline(
    input: &Path,
    config: &PipelineConfig,
) -> Result<PipelineOutcome, PipelineError> {
    info!("processing {}", input.display());

    let loaded = load_series(input)?;
    let mut series = loaded.series;
    let samples_loaded = series.len();

    let trim = CrashTrimmer::new(config.trim.clone()).trim(&mut series)?;

    // Pre-repair snapshot feeds the before/after kurtosis comparison
    let trimmed = series.clone();
    let outliers = OutlierFilter::new(config.outlier.clone()).clean(&mut series);

    let mut extractor =
        FeatureExtractor::new(config.sample_rate_hz, config.shaft_rpm, config.saturation);
    let metrics = extractor.extract(&trimmed, &series);
    if !metrics.is_finite() {
        return Err(PipelineError::ProcessingFailure(
            "metrics contain non-finite values".into(),
        ));
    }

    let report = RunReport {
        schema: loaded.schema.to_string(),
        rows_seen: loaded.rows_seen,
        rows_dropped: loaded.rows_dropped,
        samples_loaded,
        trim_cutoff: trim.cutoff,
        trim_removed: trim.removed,
        crash_signature: trim.signature,
        samples_retained: series.len(),
        outliers_repaired: outliers.repaired,
        degenerate_channels: outliers.degenerate_channels,
        metrics,
    };

    Ok(PipelineOutcome { series, report })
}
