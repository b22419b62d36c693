//! Signal Cleaning
//!
//! Two staged repairs for raw accelerometer series: trimming the tail after
//! a sensor crash (hard reset or frozen bus), then detecting and repairing
//! isolated electrical-noise spikes via per-channel z-scores.

mod error;
mod outliers;
mod trimmer;

pub use error::CleanError;
pub use outliers::{OutlierConfig, OutlierFilter, OutlierReport};
pub use trimmer::{CrashSignature, CrashTrimmer, TrimConfig, TrimReport};
