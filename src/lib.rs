//! Aliascope - a signal-sampling and aliasing visualizer core for Rust
//!
//! This library provides the computational kernel behind an educational
//! sampling/aliasing visualizer: closed-form waveform synthesis on dense and
//! sampled time grids, and the fold that places a sampled tone in the first
//! Nyquist band. Rendering is the caller's concern; the crate takes plain
//! parameter structs in and hands plain value structs back.

pub mod error;
pub mod render;
pub mod sampling;
pub mod signal;
pub mod spectrum;
pub mod timeseries;

// Re-export commonly used types at the crate root
pub use error::SignalError;
pub use render::{render_frame, Frame, RenderConfig, SamplingVerdict};
pub use sampling::{analog_series, sampled_series, SamplingParams};
pub use signal::{Shape, SignalParams};
pub use spectrum::{
    compute_alias, compute_alias_with_tolerance, BinKind, SpectrumBin, SpectrumResult,
    ALIAS_TOLERANCE_HZ,
};
pub use timeseries::{linspace, TimeSeries};
