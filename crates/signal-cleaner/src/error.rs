//! Cleaning Error Types

use thiserror::Error;

/// Errors during series cleaning
#[derive(Debug, Clone, Error)]
pub enum CleanError {
    /// Too little data survives crash trimming to diagnose anything
    #[error("only {retained} samples remain after crash trimming (minimum {min_required})")]
    InsufficientDataAfterTrim {
        retained: usize,
        min_required: usize,
    },
}
