//! Recording Input/Output
//!
//! Loads raw accelerometer recordings into a [`Series`](accel_series::Series)
//! and writes cleaned series back out. Input files vary: some carry an
//! `X,Y,Z` header, some are headerless dumps with the axes in the last three
//! columns, and most contain stray non-numeric rows that must be discarded
//! rather than aborted on.

mod error;
mod reader;
mod writer;

pub use error::RecordingError;
pub use reader::{load_series, NormalizedRecording, SchemaKind};
pub use writer::save_series;
