//! Single-Sided Amplitude Spectrum

use rustfft::{num_complex::Complex, FftPlanner};
use tracing::debug;

/// Amplitude spectrum analyzer for real-valued signals
pub struct SpectrumAnalyzer {
    /// FFT planner for efficient computation
    planner: FftPlanner<f64>,
    /// Sampling frequency (Hz)
    sample_rate: f64,
}

/// Single-sided amplitude spectrum over bins 0..N/2
#[derive(Debug, Clone, Default)]
pub struct AmplitudeSpectrum {
    /// Amplitude per bin, scaled by 2/N
    pub amplitudes: Vec<f64>,
    /// Spacing between bins (Hz)
    pub freq_resolution: f64,
}

impl AmplitudeSpectrum {
    /// Centre frequency of a bin
    pub fn frequency(&self, bin: usize) -> f64 {
        bin as f64 * self.freq_resolution
    }

    /// Bin whose frequency lies numerically closest to `target_hz`
    pub fn nearest_bin(&self, target_hz: f64) -> Option<usize> {
        if self.amplitudes.is_empty() || self.freq_resolution <= 0.0 {
            return None;
        }
        let bin = (target_hz / self.freq_resolution).round() as usize;
        Some(bin.min(self.amplitudes.len() - 1))
    }

    /// Amplitude at the bin nearest `target_hz`, with that bin's frequency
    pub fn amplitude_near(&self, target_hz: f64) -> Option<(f64, f64)> {
        let bin = self.nearest_bin(target_hz)?;
        Some((self.frequency(bin), self.amplitudes[bin]))
    }
}

impl SpectrumAnalyzer {
    /// Create an analyzer for signals sampled at `sample_rate` Hz
    pub fn new(sample_rate: f64) -> Self {
        Self {
            planner: FftPlanner::new(),
            sample_rate,
        }
    }

    /// Compute the single-sided amplitude spectrum of `signal`.
    ///
    /// The signal is centred on its mean before transforming and no taper is
    /// applied, so a tone that lands on a bin has its amplitude recovered
    /// exactly by the 2/N scaling.
    pub fn analyze(&mut self, signal: &[f64]) -> AmplitudeSpectrum {
        let n = signal.len();
        if n == 0 {
            return AmplitudeSpectrum::default();
        }

        let mean = signal.iter().sum::<f64>() / n as f64;
        let mut buffer: Vec<Complex<f64>> = signal
            .iter()
            .map(|&v| Complex::new(v - mean, 0.0))
            .collect();

        let fft = self.planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        let scale = 2.0 / n as f64;
        let amplitudes: Vec<f64> = buffer.iter().take(n / 2).map(|c| c.norm() * scale).collect();
        let freq_resolution = self.sample_rate / n as f64;

        debug!(
            "spectrum: {} bins at {:.4} Hz resolution",
            amplitudes.len(),
            freq_resolution
        );

        AmplitudeSpectrum {
            amplitudes,
            freq_resolution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_amplitude_recovered_on_bin() {
        let mut analyzer = SpectrumAnalyzer::new(1091.0);

        // 1091 samples at 1091 Hz puts the bins on whole hertz; 50 full
        // cycles of a 2.5-amplitude tone land exactly on bin 50
        let signal: Vec<f64> = (0..1091)
            .map(|i| 2.5 * (2.0 * std::f64::consts::PI * 50.0 * i as f64 / 1091.0).sin())
            .collect();

        let spectrum = analyzer.analyze(&signal);
        assert!((spectrum.freq_resolution - 1.0).abs() < 1e-9);

        let bin = spectrum.nearest_bin(50.0).unwrap();
        assert_eq!(bin, 50);
        assert!((spectrum.amplitudes[bin] - 2.5).abs() < 1e-6);

        // Energy stays on its bin with no taper applied
        assert!(spectrum.amplitudes[30] < 1e-6);
    }

    #[test]
    fn test_dc_offset_is_removed() {
        let mut analyzer = SpectrumAnalyzer::new(100.0);
        let signal = vec![7.0; 128];

        let spectrum = analyzer.analyze(&signal);
        assert!(spectrum.amplitudes[0] < 1e-9);
    }

    #[test]
    fn test_nearest_bin_rounds_and_clamps() {
        let mut analyzer = SpectrumAnalyzer::new(100.0);
        let signal = vec![0.0; 100];
        let spectrum = analyzer.analyze(&signal);

        assert_eq!(spectrum.nearest_bin(49.4), Some(49));
        assert_eq!(spectrum.nearest_bin(48.6), Some(49));
        assert_eq!(spectrum.nearest_bin(48.4), Some(48));
        // Beyond Nyquist clamps to the last single-sided bin
        assert_eq!(spectrum.nearest_bin(5000.0), Some(49));
    }

    #[test]
    fn test_empty_signal() {
        let mut analyzer = SpectrumAnalyzer::new(100.0);
        let spectrum = analyzer.analyze(&[]);
        assert!(spectrum.amplitudes.is_empty());
        assert_eq!(spectrum.nearest_bin(10.0), None);
    }
}
