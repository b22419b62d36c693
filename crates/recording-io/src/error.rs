//! Recording I/O Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading or saving a recording
#[derive(Debug, Error)]
pub enum RecordingError {
    /// Input path does not exist
    #[error("source file not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// File loads but yields zero usable data rows
    #[error("no usable data rows in {}", .path.display())]
    EmptyDataset { path: PathBuf },

    /// Neither a named X/Y/Z header nor three positional columns
    #[error("cannot resolve X/Y/Z channels in {}: {reason}", .path.display())]
    UnresolvableSchema { path: PathBuf, reason: String },

    /// Underlying read failure (I/O, malformed encoding)
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: csv::Error },

    /// Underlying write failure
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: csv::Error },
}
