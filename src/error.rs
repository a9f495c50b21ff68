//! Error taxonomy for signal sampling and spectrum computation.

use thiserror::Error;

/// Errors produced while sampling a signal or placing it in the spectrum.
///
/// Every variant is terminal for the computation that produced it: there is
/// nothing transient about an invalid parameter, so callers report the error
/// and skip the affected output rather than retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    /// The sampling rate is zero or negative, so the sampling period and the
    /// Nyquist frequency are undefined.
    #[error("invalid sampling rate: {0} Hz (must be positive)")]
    InvalidSamplingRate(f64),

    /// The Nyquist frequency computed to exactly zero, so no spectrum bin can
    /// be placed.
    #[error("Nyquist frequency is zero, spectrum is undefined")]
    DegenerateSpectrum,

    /// A waveform shape name that does not match any known shape.
    #[error("unknown waveform shape: {0:?}")]
    InvalidShape(String),
}
