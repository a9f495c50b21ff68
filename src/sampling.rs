//! Discrete sampling of a continuous signal over the display window.

use crate::error::SignalError;
use crate::signal::SignalParams;
use crate::timeseries::{linspace, TimeSeries};

/// Sampling rate description.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingParams {
    /// Sampling frequency in Hz. Must be positive for the sampling period
    /// and the spectrum to be defined; zero or negative is an error state,
    /// not a signal to extrapolate.
    pub sampling_frequency: f64,
}

impl SamplingParams {
    /// Creates a sampling description from a rate in Hz.
    pub fn new(sampling_frequency: f64) -> Self {
        Self { sampling_frequency }
    }

    /// Half the sampling frequency: the highest frequency representable
    /// without aliasing.
    pub fn nyquist(&self) -> f64 {
        self.sampling_frequency / 2.0
    }

    /// The time between consecutive samples in seconds.
    pub fn period(&self) -> f64 {
        1.0 / self.sampling_frequency
    }
}

/// 100 Hz, the default demonstration sampling rate.
impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            sampling_frequency: 100.0,
        }
    }
}

/// Synthesizes the dense "analog" reference curve.
///
/// Evaluates the signal on `resolution` evenly spaced points over
/// `[0, window_secs]`, endpoint inclusive. The grid is dense enough that a
/// plot of the result reads as the continuous waveform.
///
/// # Arguments
///
/// * `signal` - Signal to evaluate
/// * `window_secs` - Display window length in seconds
/// * `resolution` - Number of grid points
pub fn analog_series(signal: &SignalParams, window_secs: f64, resolution: usize) -> TimeSeries {
    TimeSeries::from_fn(linspace(0.0, window_secs, resolution), |t| signal.value_at(t))
}

/// Synthesizes the discrete sample sequence taken at the sampling rate.
///
/// The grid holds `floor(window_secs * fs) + 1` evenly spaced points over
/// `[0, window_secs]`, endpoint inclusive; whenever `window_secs * fs` is
/// integral the spacing equals the sampling period exactly.
///
/// # Errors
///
/// Returns [`SignalError::InvalidSamplingRate`] when the sampling frequency
/// is zero or negative.
///
/// # Examples
///
/// ```
/// use aliascope::{sampled_series, SamplingParams, SignalParams};
///
/// let signal = SignalParams::default();
/// let sampling = SamplingParams::new(100.0);
/// let series = sampled_series(&signal, &sampling, 0.1).unwrap();
/// assert_eq!(series.len(), 11);
/// ```
pub fn sampled_series(
    signal: &SignalParams,
    sampling: &SamplingParams,
    window_secs: f64,
) -> Result<TimeSeries, SignalError> {
    let fs = sampling.sampling_frequency;
    if fs <= 0.0 {
        return Err(SignalError::InvalidSamplingRate(fs));
    }
    let count = (window_secs * fs).floor() as usize + 1;
    Ok(TimeSeries::from_fn(linspace(0.0, window_secs, count), |t| {
        signal.value_at(t)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Shape;

    #[test]
    fn test_sample_count_at_default_rate() {
        // 0.1 s at 100 Hz: floor(10) + 1 = 11 samples.
        let series = sampled_series(&SignalParams::default(), &SamplingParams::new(100.0), 0.1)
            .unwrap();
        assert_eq!(series.len(), 11);
    }

    #[test]
    fn test_sample_spacing_is_sampling_period() {
        let sampling = SamplingParams::new(100.0);
        let series = sampled_series(&SignalParams::default(), &sampling, 0.1).unwrap();
        for pair in series.times.windows(2) {
            assert!((pair[1] - pair[0] - sampling.period()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_fractional_window_rate_product_truncates() {
        // 0.1 s at 35 Hz: floor(3.5) + 1 = 4 samples.
        let series = sampled_series(&SignalParams::default(), &SamplingParams::new(35.0), 0.1)
            .unwrap();
        assert_eq!(series.len(), 4);
    }

    #[test]
    fn test_rejects_nonpositive_rate() {
        let signal = SignalParams::default();
        assert_eq!(
            sampled_series(&signal, &SamplingParams::new(0.0), 0.1).unwrap_err(),
            SignalError::InvalidSamplingRate(0.0)
        );
        assert_eq!(
            sampled_series(&signal, &SamplingParams::new(-5.0), 0.1).unwrap_err(),
            SignalError::InvalidSamplingRate(-5.0)
        );
    }

    #[test]
    fn test_analog_series_resolution_and_window() {
        let series = analog_series(&SignalParams::default(), 0.1, 10_000);
        assert_eq!(series.len(), 10_000);
        assert_eq!(series.times[0], 0.0);
        assert_eq!(*series.times.last().unwrap(), 0.1);
    }

    #[test]
    fn test_series_values_match_signal() {
        let signal = SignalParams::new(Shape::Sawtooth, 120.0, 5.0, 1.0);
        let series = sampled_series(&signal, &SamplingParams::default(), 0.1).unwrap();
        for (t, v) in series.points() {
            assert_eq!(v, signal.value_at(t));
        }
    }

    #[test]
    fn test_nyquist_and_period_helpers() {
        let sampling = SamplingParams::new(100.0);
        assert_eq!(sampling.nyquist(), 50.0);
        assert_eq!(sampling.period(), 0.01);
    }
}
