//! Vibrosweep
//!
//! Offline pipeline that turns raw 3-axis accelerometer recordings from
//! rotating machinery into a cleaned time series plus condition metrics
//! for fault diagnosis: normalize the channels, trim crash garbage, repair
//! electrical-noise spikes, then extract RMS, kurtosis, saturation state
//! and the spectral amplitude at the shaft rotating frequency.

mod config;
mod error;
mod pipeline;
mod report;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::{run_pipeline, PipelineOutcome};
pub use report::RunReport;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging.
///
/// Log lines go to stderr; stdout carries nothing but the report.
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
