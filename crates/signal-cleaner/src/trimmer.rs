//! Crash-Signature Detection and Trimming
//!
//! A crashed sensor leaves one of two tails in a recording: a hard reset
//! shows up as a run of exactly-zero samples on every channel, a frozen bus
//! as a long stretch where no channel changes at all. Everything from the
//! first signature onward is garbage and is cut off.

use crate::error::CleanError;
use accel_series::Series;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Trimming configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrimConfig {
    /// Consecutive all-zero samples that mark a hard reset
    pub zero_run_len: usize,
    /// Window length (samples) for frozen-bus detection
    pub frozen_window_len: usize,
    /// Minimum samples that must survive trimming
    pub min_retained: usize,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            zero_run_len: 5,
            frozen_window_len: 50,
            min_retained: 100,
        }
    }
}

/// Which crash signature selected the cutoff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashSignature {
    /// Run of all-zero samples: the sensor power-cycled and re-zeroed
    HardReset,
    /// Window with no variation on any channel: the bus stopped updating
    FrozenBus,
}

impl std::fmt::Display for CrashSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrashSignature::HardReset => f.write_str("hard reset"),
            CrashSignature::FrozenBus => f.write_str("frozen bus"),
        }
    }
}

/// Result of one trimming pass
#[derive(Debug, Clone)]
pub struct TrimReport {
    /// First index removed (equals the input length when nothing matched)
    pub cutoff: usize,
    /// Samples removed from the tail
    pub removed: usize,
    /// Signature that selected the cutoff, if any
    pub signature: Option<CrashSignature>,
}

/// Detects crash signatures and truncates the series at the earlier one
pub struct CrashTrimmer {
    config: TrimConfig,
}

impl CrashTrimmer {
    /// Create a trimmer with the given config
    pub fn new(config: TrimConfig) -> Self {
        Self { config }
    }

    /// Trim the series in place at the earliest crash signature.
    ///
    /// A hard reset cuts at the first sample of the zero run. A frozen bus
    /// cuts one full window ahead of the first frozen window, since the
    /// freeze may have begun anywhere inside that margin; up to
    /// `frozen_window_len` healthy samples are sacrificed with it. When both
    /// signatures are present the earlier cutoff wins.
    ///
    /// Fails without touching the series when fewer than
    /// `min_retained` samples would survive, including the case where no
    /// signature fired on an already-short series.
    pub fn trim(&self, series: &mut Series) -> Result<TrimReport, CleanError> {
        let len = series.len();
        let mut cutoff = len;
        let mut signature = None;

        if let Some(run_start) = self.find_zero_run(series) {
            cutoff = run_start;
            signature = Some(CrashSignature::HardReset);
        }
        if let Some(window_start) = self.find_frozen_window(series) {
            let frozen_cutoff = window_start.saturating_sub(self.config.frozen_window_len);
            // Strictly earlier only: a reset run is itself frozen, and the
            // run start is the more precise cutoff for it.
            if frozen_cutoff < cutoff {
                cutoff = frozen_cutoff;
                signature = Some(CrashSignature::FrozenBus);
            }
        }

        if cutoff < self.config.min_retained {
            return Err(CleanError::InsufficientDataAfterTrim {
                retained: cutoff,
                min_required: self.config.min_retained,
            });
        }

        series.truncate(cutoff);
        match signature {
            Some(sig) => warn!(
                "{} signature: trimmed {} of {} samples at index {}",
                sig,
                len - cutoff,
                len,
                cutoff
            ),
            None => debug!("no crash signature in {} samples", len),
        }

        Ok(TrimReport {
            cutoff,
            removed: len - cutoff,
            signature,
        })
    }

    /// First index opening a run of `zero_run_len` all-zero samples
    fn find_zero_run(&self, series: &Series) -> Option<usize> {
        let run_len = self.config.zero_run_len;
        if run_len == 0 {
            return None;
        }
        let mut run = 0usize;
        for (i, sample) in series.iter().enumerate() {
            if sample.is_zero() {
                run += 1;
                if run == run_len {
                    return Some(i + 1 - run_len);
                }
            } else {
                run = 0;
            }
        }
        None
    }

    /// Start of the first window of `frozen_window_len` identical samples.
    ///
    /// A window is frozen when every sample-to-sample difference inside it
    /// vanishes on every channel, i.e. all its samples are equal.
    fn find_frozen_window(&self, series: &Series) -> Option<usize> {
        let window = self.config.frozen_window_len;
        if window < 2 || series.len() < window {
            return None;
        }
        let mut unchanged_steps = 0usize;
        for i in 1..series.len() {
            if series.get(i) == series.get(i - 1) {
                unchanged_steps += 1;
                if unchanged_steps == window - 1 {
                    return Some(i + 1 - window);
                }
            } else {
                unchanged_steps = 0;
            }
        }
        None
    }
}

impl Default for CrashTrimmer {
    fn default() -> Self {
        Self::new(TrimConfig::default())
    }
}
