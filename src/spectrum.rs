//! Alias-frequency computation and the idealized-DFT bin view.
//!
//! Sampling at rate `fs` makes any frequency `f` indistinguishable from
//! `f mod fs`, and frequencies above Nyquist fold back into `[0, fs/2]`
//! because real-valued sampling cannot tell a frequency from its reflection
//! about Nyquist. No transform is computed here; the fold places the single
//! tone (and the DC offset) directly into the first Nyquist band.

use crate::error::SignalError;
use crate::signal::SignalParams;

/// Absolute tolerance in Hz below which an alias is considered equal to the
/// original frequency.
///
/// This exists to keep floating-point noise from being reported as aliasing
/// when the folded frequency equals the input exactly. The value is a display
/// choice with no principled derivation; use
/// [`compute_alias_with_tolerance`] to supply a different one.
pub const ALIAS_TOLERANCE_HZ: f64 = 0.01;

/// Where the sampled signal's energy appears in the first Nyquist band.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpectrumResult {
    /// Half the sampling frequency.
    pub nyquist_frequency: f64,
    /// The frequency at which the sampled energy appears, within
    /// `[0, nyquist_frequency]`.
    pub alias_frequency: f64,
    /// Whether the alias differs from the true signal frequency.
    pub is_aliased: bool,
}

/// One bar of the idealized DFT view.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpectrumBin {
    /// Bin center frequency in Hz.
    pub frequency: f64,
    /// Bin magnitude in volts. The DC bin keeps the sign of the offset.
    pub magnitude: f64,
    /// Which signal component the bin represents.
    pub kind: BinKind,
}

/// The component a spectrum bin belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinKind {
    /// The constant offset, always at 0 Hz.
    Dc,
    /// The periodic component, at the alias frequency.
    Ac,
}

impl SpectrumResult {
    /// Display width of a spectrum bar, in Hz: 2% of the Nyquist band, but
    /// never thinner than 1 Hz.
    pub fn bin_width(&self) -> f64 {
        (self.nyquist_frequency * 0.02).max(1.0)
    }

    /// The bins the sampled signal produces under an idealized DFT.
    ///
    /// A DC bin appears at 0 Hz only when the offset is nonzero, and an AC
    /// bin appears at the alias frequency only when the amplitude is
    /// positive; a silent component would otherwise draw a zero-height bar.
    pub fn bins(&self, signal: &SignalParams) -> Vec<SpectrumBin> {
        let mut bins = Vec::with_capacity(2);
        if signal.dc_offset != 0.0 {
            bins.push(SpectrumBin {
                frequency: 0.0,
                magnitude: signal.dc_offset,
                kind: BinKind::Dc,
            });
        }
        if signal.amplitude > 0.0 {
            bins.push(SpectrumBin {
                frequency: self.alias_frequency,
                magnitude: signal.amplitude,
                kind: BinKind::Ac,
            });
        }
        bins
    }
}

/// Computes where a sampled tone appears in the first Nyquist band, using
/// [`ALIAS_TOLERANCE_HZ`] to decide whether it moved.
///
/// # Errors
///
/// * [`SignalError::InvalidSamplingRate`] - the sampling frequency is zero
///   or negative
/// * [`SignalError::DegenerateSpectrum`] - the Nyquist frequency computes to
///   exactly zero
///
/// # Examples
///
/// ```
/// use aliascope::compute_alias;
///
/// // 120 Hz sampled at 100 Hz folds to 20 Hz.
/// let spectrum = compute_alias(120.0, 100.0).unwrap();
/// assert_eq!(spectrum.alias_frequency, 20.0);
/// assert!(spectrum.is_aliased);
///
/// // 40 Hz is below the 50 Hz Nyquist limit and stays put.
/// let spectrum = compute_alias(40.0, 100.0).unwrap();
/// assert_eq!(spectrum.alias_frequency, 40.0);
/// assert!(!spectrum.is_aliased);
/// ```
pub fn compute_alias(
    signal_frequency: f64,
    sampling_frequency: f64,
) -> Result<SpectrumResult, SignalError> {
    compute_alias_with_tolerance(signal_frequency, sampling_frequency, ALIAS_TOLERANCE_HZ)
}

/// Computes the alias frequency with an explicit equality tolerance in Hz.
///
/// Same fold as [`compute_alias`]:
/// the input frequency is reduced modulo the sampling rate to a non-negative
/// remainder, then remainders above Nyquist mirror back as
/// `fs - remainder`. The result always lies in `[0, nyquist]`.
pub fn compute_alias_with_tolerance(
    signal_frequency: f64,
    sampling_frequency: f64,
    tolerance_hz: f64,
) -> Result<SpectrumResult, SignalError> {
    if sampling_frequency <= 0.0 {
        return Err(SignalError::InvalidSamplingRate(sampling_frequency));
    }
    let nyquist = sampling_frequency / 2.0;
    // Independent invariant check: a positive rate can still halve to zero
    // at the very bottom of the subnormal range.
    if nyquist == 0.0 {
        return Err(SignalError::DegenerateSpectrum);
    }

    let folded = signal_frequency.rem_euclid(sampling_frequency);
    let alias_frequency = if folded > nyquist {
        sampling_frequency - folded
    } else {
        folded
    };

    Ok(SpectrumResult {
        nyquist_frequency: nyquist,
        alias_frequency,
        is_aliased: (alias_frequency - signal_frequency).abs() > tolerance_hz,
    })
}
