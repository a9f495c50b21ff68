//! One-call orchestration of a complete render cycle.
//!
//! The caller supplies the signal, the sampling rate, and the display
//! configuration; this module produces everything a frontend needs to draw
//! both plots: the dense reference curve, the discrete samples, the spectrum
//! placement, the DFT bin bars, and a verdict on whether sampling was
//! faithful. Every call recomputes from scratch; nothing is cached.

use tracing::debug;

use crate::error::SignalError;
use crate::sampling::{analog_series, sampled_series, SamplingParams};
use crate::signal::SignalParams;
use crate::spectrum::{
    compute_alias_with_tolerance, SpectrumBin, SpectrumResult, ALIAS_TOLERANCE_HZ,
};
use crate::timeseries::TimeSeries;

/// Display-scenario configuration.
///
/// Groups the display constants so a caller can change the window or the
/// tolerance without touching the computation code.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Length of the displayed time window in seconds.
    pub window_secs: f64,
    /// Magnitude of the displayed voltage range; the plot spans
    /// `[-voltage_ceiling, voltage_ceiling]`.
    pub voltage_ceiling: f64,
    /// Absolute tolerance in Hz for deciding whether the alias moved.
    pub alias_tolerance_hz: f64,
    /// Number of points in the dense "analog" grid.
    pub analog_resolution: usize,
}

impl RenderConfig {
    /// The displayed voltage range as `(low, high)`.
    pub fn voltage_range(&self) -> (f64, f64) {
        (-self.voltage_ceiling, self.voltage_ceiling)
    }
}

/// A 0.1 s window, ±15 V display range, 0.01 Hz tolerance, and a
/// 10 000-point analog grid.
impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_secs: 0.1,
            voltage_ceiling: 15.0,
            alias_tolerance_hz: ALIAS_TOLERANCE_HZ,
            analog_resolution: 10_000,
        }
    }
}

/// Whether sampling reproduced the signal faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SamplingVerdict {
    /// The AC component shows up at a different frequency than it has.
    Aliased,
    /// The AC component shows up where it belongs.
    Faithful,
    /// There is no AC component to misplace.
    NoAcComponent,
}

/// Complete output of one render cycle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Dense approximation of the continuous waveform.
    pub analog: TimeSeries,
    /// The discrete samples taken at the sampling rate.
    pub samples: TimeSeries,
    /// Where the sampled energy lands in the first Nyquist band.
    pub spectrum: SpectrumResult,
    /// Bars of the idealized DFT view.
    pub bins: Vec<SpectrumBin>,
    /// Whether sampling was faithful.
    pub verdict: SamplingVerdict,
}

/// Computes one complete render cycle.
///
/// Idempotent and side-effect-free: the same inputs always produce the same
/// frame.
///
/// # Errors
///
/// Propagates [`SignalError::InvalidSamplingRate`] and
/// [`SignalError::DegenerateSpectrum`] unrecovered; the caller decides
/// whether to show a message and skip the affected plot.
///
/// # Examples
///
/// ```
/// use aliascope::{render_frame, RenderConfig, SamplingParams, SignalParams};
///
/// // The default scenario: a 120 Hz sine sampled at 100 Hz.
/// let frame = render_frame(
///     &SignalParams::default(),
///     &SamplingParams::default(),
///     &RenderConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(frame.analog.len(), 10_000);
/// assert_eq!(frame.samples.len(), 11);
/// assert_eq!(frame.spectrum.alias_frequency, 20.0);
/// assert!(frame.spectrum.is_aliased);
/// ```
pub fn render_frame(
    signal: &SignalParams,
    sampling: &SamplingParams,
    config: &RenderConfig,
) -> Result<Frame, SignalError> {
    let analog = analog_series(signal, config.window_secs, config.analog_resolution);
    let samples = sampled_series(signal, sampling, config.window_secs)?;
    let spectrum = compute_alias_with_tolerance(
        signal.frequency,
        sampling.sampling_frequency,
        config.alias_tolerance_hz,
    )?;
    let bins = spectrum.bins(signal);

    let verdict = if signal.amplitude <= 0.0 {
        SamplingVerdict::NoAcComponent
    } else if spectrum.is_aliased {
        SamplingVerdict::Aliased
    } else {
        SamplingVerdict::Faithful
    };

    debug!(
        signal_frequency = signal.frequency,
        sampling_frequency = sampling.sampling_frequency,
        alias_frequency = spectrum.alias_frequency,
        aliased = spectrum.is_aliased,
        "rendered frame"
    );

    Ok(Frame {
        analog,
        samples,
        spectrum,
        bins,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Shape;

    #[test]
    fn test_default_scenario_frame() {
        let frame = render_frame(
            &SignalParams::default(),
            &SamplingParams::default(),
            &RenderConfig::default(),
        )
        .unwrap();
        assert_eq!(frame.analog.len(), 10_000);
        assert_eq!(frame.samples.len(), 11);
        assert_eq!(frame.spectrum.nyquist_frequency, 50.0);
        assert_eq!(frame.spectrum.alias_frequency, 20.0);
        assert_eq!(frame.verdict, SamplingVerdict::Aliased);
        // 120 Hz sine, no DC: a single AC bin at the alias.
        assert_eq!(frame.bins.len(), 1);
        assert_eq!(frame.bins[0].frequency, 20.0);
    }

    #[test]
    fn test_faithful_verdict_below_nyquist() {
        let signal = SignalParams::new(Shape::Sine, 40.0, 5.0, 0.0);
        let frame = render_frame(&signal, &SamplingParams::default(), &RenderConfig::default())
            .unwrap();
        assert_eq!(frame.verdict, SamplingVerdict::Faithful);
        assert_eq!(frame.spectrum.alias_frequency, 40.0);
    }

    #[test]
    fn test_no_ac_verdict_trumps_aliasing() {
        // 120 Hz would alias, but with zero amplitude there is nothing to
        // misplace.
        let signal = SignalParams::new(Shape::Sine, 120.0, 0.0, 2.0);
        let frame = render_frame(&signal, &SamplingParams::default(), &RenderConfig::default())
            .unwrap();
        assert_eq!(frame.verdict, SamplingVerdict::NoAcComponent);
    }

    #[test]
    fn test_invalid_rate_propagates() {
        let err = render_frame(
            &SignalParams::default(),
            &SamplingParams::new(0.0),
            &RenderConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, SignalError::InvalidSamplingRate(0.0));
    }

    #[test]
    fn test_config_tolerance_reaches_spectrum() {
        // With a huge tolerance even a folded signal reads as not aliased.
        let config = RenderConfig {
            alias_tolerance_hz: 1000.0,
            ..RenderConfig::default()
        };
        let frame = render_frame(&SignalParams::default(), &SamplingParams::default(), &config)
            .unwrap();
        assert!(!frame.spectrum.is_aliased);
        assert_eq!(frame.verdict, SamplingVerdict::Faithful);
    }

    #[test]
    fn test_custom_window_changes_sample_count() {
        let config = RenderConfig {
            window_secs: 0.2,
            ..RenderConfig::default()
        };
        let frame = render_frame(&SignalParams::default(), &SamplingParams::default(), &config)
            .unwrap();
        assert_eq!(frame.samples.len(), 21);
        assert_eq!(*frame.samples.times.last().unwrap(), 0.2);
    }

    #[test]
    fn test_voltage_range_is_symmetric() {
        let config = RenderConfig::default();
        assert_eq!(config.voltage_range(), (-15.0, 15.0));
    }

    #[test]
    fn test_same_inputs_same_frame() {
        let signal = SignalParams::new(Shape::Triangle, 777.0, 3.3, -1.2);
        let sampling = SamplingParams::new(431.0);
        let config = RenderConfig::default();
        let a = render_frame(&signal, &sampling, &config).unwrap();
        let b = render_frame(&signal, &sampling, &config).unwrap();
        assert_eq!(a, b);
    }
}
