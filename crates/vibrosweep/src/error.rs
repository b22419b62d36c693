//! Pipeline Error Types

use thiserror::Error;

/// Errors surfaced by a pipeline run, matched once at top level
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Loading or saving the recording failed
    #[error("recording stage: {0}")]
    Recording(#[from] recording_io::RecordingError),

    /// Trimming or outlier repair failed
    #[error("cleaning stage: {0}")]
    Clean(#[from] signal_cleaner::CleanError),

    /// Writing the optional JSON report failed
    #[error("failed to write metrics JSON: {0}")]
    MetricsJson(#[from] std::io::Error),

    /// A computation produced something unusable
    #[error("processing failure: {0}")]
    ProcessingFailure(String),
}
