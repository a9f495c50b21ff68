//! Signal parameter set and pointwise waveform evaluation.

use super::Shape;

/// A complete description of one periodic signal.
///
/// The instantaneous voltage is `dc_offset + amplitude * f(t)` where `f` is
/// the unit waveform for `shape`. All fields are plain values; the struct is
/// cheap to copy and carries no state between evaluations, so the same
/// parameters always produce the same output.
///
/// # Examples
///
/// ```
/// use aliascope::{Shape, SignalParams};
///
/// let params = SignalParams {
///     shape: Shape::Sine,
///     frequency: 10.0,
///     amplitude: 2.0,
///     dc_offset: 1.0,
/// };
///
/// // A sine starts at its DC offset.
/// assert_eq!(params.value_at(0.0), 1.0);
/// // A quarter period later it peaks at offset + amplitude.
/// assert!((params.value_at(0.025) - 3.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalParams {
    /// Waveform shape.
    pub shape: Shape,
    /// Signal frequency in Hz. Expected positive; UI sliders typically
    /// constrain this to 1..2000 Hz, but that range is caller policy, not
    /// a core invariant.
    pub frequency: f64,
    /// Peak amplitude of the AC component in volts, non-negative.
    pub amplitude: f64,
    /// Constant (0 Hz) voltage offset in volts.
    pub dc_offset: f64,
}

impl SignalParams {
    /// Creates a signal description.
    ///
    /// # Arguments
    ///
    /// * `shape` - Waveform shape
    /// * `frequency` - Signal frequency in Hz
    /// * `amplitude` - AC amplitude in volts
    /// * `dc_offset` - DC offset in volts
    pub fn new(shape: Shape, frequency: f64, amplitude: f64, dc_offset: f64) -> Self {
        Self {
            shape,
            frequency,
            amplitude,
            dc_offset,
        }
    }

    /// Evaluates the instantaneous voltage at time `t` (seconds).
    ///
    /// Pointwise and side-effect-free. With `amplitude == 0.0` this returns
    /// exactly `dc_offset` for every `t` and every shape.
    pub fn value_at(&self, t: f64) -> f64 {
        self.dc_offset + self.amplitude * self.shape.unit_value(t, self.frequency)
    }

    /// Evaluates the signal at each time in `times`, filling `out`.
    ///
    /// One output value per input time, same order. The two slices must have
    /// equal length.
    pub fn sample_into(&self, times: &[f64], out: &mut [f64]) {
        debug_assert_eq!(times.len(), out.len());
        for (v, &t) in out.iter_mut().zip(times) {
            *v = self.value_at(t);
        }
    }

    /// Evaluates the signal at each time in `times` into a new vector.
    pub fn sample(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.value_at(t)).collect()
    }
}

/// A 5 V sine at 120 Hz with no DC offset: the classic demonstration signal
/// against a 100 Hz sampler.
impl Default for SignalParams {
    fn default() -> Self {
        Self {
            shape: Shape::Sine,
            frequency: 120.0,
            amplitude: 5.0,
            dc_offset: 0.0,
        }
    }
}
